use leptos::*;
use shared::autocomplete::{Autocomplete, Key, KeyOutcome};

/// Text input with a filtered suggestion dropdown.
///
/// Suggestions are filtered by case-insensitive substring on every edit and
/// on focus. Entries are picked with the pointer (on mouse-down, so the pick
/// lands before the input blurs) or with the arrow keys and Enter.
#[component]
pub fn AutocompleteInput(
    #[prop(into)] value: RwSignal<String>,
    #[prop(into)] suggestions: MaybeSignal<Vec<String>>,
    #[prop(optional)] on_select: Option<Callback<String>>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let state = create_rw_signal(Autocomplete::new());
    let suggestions = store_value(suggestions);

    let full_class = if let Some(extra) = class {
        format!("form-input {}", extra)
    } else {
        "form-input".to_string()
    };

    let refilter = move |text: String| {
        let list = suggestions.with_value(|s| s.get_untracked());
        state.update(|s| s.update(&text, &list));
    };

    let choose = move |picked: String| {
        value.set(picked.clone());
        if let Some(callback) = on_select {
            callback.call(picked);
        }
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let key = Key::from_dom(&ev.key());
        let outcome = state
            .try_update(|s| s.handle_key(key))
            .unwrap_or(KeyOutcome::Ignored);
        match outcome {
            KeyOutcome::Ignored => {}
            KeyOutcome::Handled => ev.prevent_default(),
            KeyOutcome::Selected(picked) => {
                ev.prevent_default();
                choose(picked);
            }
        }
    };

    view! {
        <div class="autocomplete">
            <input
                type="text"
                class=full_class
                id=id
                placeholder=placeholder
                autocomplete="off"
                prop:value=move || value.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    value.set(text.clone());
                    if let Some(callback) = on_input {
                        callback.call(text.clone());
                    }
                    refilter(text);
                }
                on:focus=move |_| refilter(value.get_untracked())
                on:blur=move |_| state.update(|s| s.close())
                on:keydown=on_keydown
            />
            <Show when=move || state.with(|s| s.is_open()) fallback=|| ()>
                <ul class="autocomplete-list" role="listbox">
                    {move || {
                        state
                            .with(|s| s.filtered().to_vec())
                            .into_iter()
                            .enumerate()
                            .map(move |(index, item)| {
                                let item_class = move || {
                                    if state.with(|s| s.highlight() == Some(index)) {
                                        "autocomplete-item autocomplete-item-active"
                                    } else {
                                        "autocomplete-item"
                                    }
                                };
                                view! {
                                    <li
                                        class=item_class
                                        role="option"
                                        on:mousedown=move |ev| {
                                            ev.prevent_default();
                                            if let Some(picked) = state.try_update(|s| s.select(index)).flatten() {
                                                choose(picked);
                                            }
                                        }
                                        on:mouseenter=move |_| state.update(|s| s.hover(index))
                                    >
                                        {item}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::test_dom;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn games() -> Vec<String> {
        ["Alpha", "Beta", "alphabet", "Gamma", "Delta"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[wasm_bindgen_test]
    fn test_typing_filters_suggestions() {
        let container = test_dom::mount(|| {
            view! { <AutocompleteInput value=create_rw_signal(String::new()) suggestions=games() /> }
        });
        let input = test_dom::input(&container);

        test_dom::type_into(&input, "alpha");
        assert_eq!(test_dom::count(&container, "li"), 2);

        test_dom::type_into(&input, "zzz");
        assert_eq!(test_dom::count(&container, "li"), 0);

        test_dom::type_into(&input, "");
        assert_eq!(test_dom::count(&container, "ul"), 0);
    }

    #[wasm_bindgen_test]
    fn test_arrow_and_enter_pick_highlighted_entry() {
        let container = test_dom::mount(|| {
            view! { <AutocompleteInput value=create_rw_signal(String::new()) suggestions=games() /> }
        });
        let input = test_dom::input(&container);

        test_dom::type_into(&input, "alpha");
        test_dom::press(&input, "ArrowDown");
        assert_eq!(test_dom::count(&container, ".autocomplete-item-active"), 1);

        test_dom::press(&input, "Enter");
        assert_eq!(input.value(), "Alpha");
        assert_eq!(test_dom::count(&container, "li"), 0);
    }
}
