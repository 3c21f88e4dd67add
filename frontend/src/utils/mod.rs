pub mod datetime;

pub use datetime::{format_datetime, non_empty, parse_datetime_local, parse_tags};
