use leptos::*;

/// Dialog over a backdrop. Clicking the backdrop or the close button calls
/// `on_close`; clicks inside the dialog do not.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let close = move |_| on_close.call(());

    view! {
        <div class="modal-backdrop" on:click=close>
            <div class="modal" role="dialog" on:click=|e| e.stop_propagation()>
                <div class="modal-header">
                    <div>
                        <h3 class="modal-title">{title}</h3>
                        {description.map(|d| view! { <p class="modal-description">{d}</p> })}
                    </div>
                    <button class="modal-close" on:click=close>"×"</button>
                </div>
                {children()}
            </div>
        </div>
    }
}
