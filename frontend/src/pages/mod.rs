pub mod auth;
pub mod draws;
pub mod feed;
pub mod games;
pub mod login;
pub mod results;
pub mod signup;
