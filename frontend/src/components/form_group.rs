use leptos::*;

/// Label, control and optional hint stacked the same way on every form.
#[component]
pub fn FormGroup(
    #[prop(into)] label: String,
    #[prop(optional, into)] for_id: Option<String>,
    #[prop(optional, into)] hint: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="form-label" for=for_id>{label}</label>
            {children()}
            {hint.map(|h| view! {
                <span class="form-hint">{h}</span>
            })}
        </div>
    }
}
