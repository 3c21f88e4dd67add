use leptos::*;

/// Placeholder shown when a list has nothing to display.
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="card empty-state">
            <p>{title}</p>
            {hint.map(|h| view! { <p class="empty-state-hint">{h}</p> })}
        </div>
    }
}
