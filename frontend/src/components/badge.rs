use leptos::*;
use shared::ResultStatus;

pub fn status_class(status: ResultStatus) -> &'static str {
    match status {
        ResultStatus::Pending => "badge badge-warning",
        ResultStatus::Approved => "badge badge-success",
        ResultStatus::Published => "badge badge-info",
        ResultStatus::Rejected => "badge badge-danger",
        ResultStatus::Unknown => "badge",
    }
}

/// Review status label for a result.
#[component]
pub fn StatusBadge(status: ResultStatus) -> impl IntoView {
    view! {
        <span class=status_class(status)>{status.as_str()}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_status_classes() {
        assert_eq!(status_class(ResultStatus::Pending), "badge badge-warning");
        assert_eq!(status_class(ResultStatus::Rejected), "badge badge-danger");
        assert_eq!(status_class(ResultStatus::Unknown), "badge");
    }
}
