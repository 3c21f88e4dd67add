use leptos::*;

/// Select dropdown bound to a string signal. `placeholder` adds a disabled
/// empty first option.
#[component]
pub fn SelectInput(
    #[prop(into)] value: RwSignal<String>,
    #[prop(into)] options: MaybeSignal<Vec<(String, String)>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <select
            class="form-select"
            id=id
            required=required
            on:change=move |ev| {
                value.set(event_target_value(&ev));
            }
        >
            {placeholder.map(|p| view! {
                <option value="" disabled=true selected=move || value.get().is_empty()>{p}</option>
            })}
            {move || {
                options.get().into_iter().map(|(val, label)| {
                    let val_clone = val.clone();
                    view! {
                        <option
                            value=val
                            selected=move || value.get() == val_clone
                        >
                            {label}
                        </option>
                    }
                }).collect_view()
            }}
        </select>
    }
}
