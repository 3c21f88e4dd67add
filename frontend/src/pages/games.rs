use leptos::*;
use shared::assets::{AssetResolver, GAME_SUGGESTIONS};
use shared::{ClientError, CreateGameRequest, Game};

use crate::api::ApiClient;
use crate::components::autocomplete_input::AutocompleteInput;
use crate::components::empty_state::EmptyState;
use crate::components::form_group::FormGroup;
use crate::components::loading::Loading;
use crate::components::modal::Modal;
use crate::components::toast::use_toaster;
use crate::query::use_query_client;
use crate::utils::non_empty;

const DELETE_FALLBACK: &str = "Failed to delete game.";

/// Message for a failed delete. A 404 means someone else already removed it.
pub fn delete_failure_message(err: &ClientError) -> String {
    if err.is_not_found() {
        "Game not found or already deleted.".to_string()
    } else {
        err.user_message(DELETE_FALLBACK)
    }
}

pub fn remove_game(games: &mut Vec<Game>, game_id: i64) {
    games.retain(|g| g.id != game_id);
}

/// Image filename for a typed or picked game name; empty when unknown.
pub fn suggested_image(game_name: &str) -> String {
    AssetResolver::new()
        .image_filename(game_name)
        .unwrap_or_default()
}

#[component]
pub fn GamesPage() -> impl IntoView {
    let queries = use_query_client();
    let toaster = use_toaster();
    queries.load_games();

    let show_create_modal = create_rw_signal(false);
    let saving = create_rw_signal(false);

    // Form fields
    let name = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let image = create_rw_signal(String::new());

    let suggestions = store_value(
        GAME_SUGGESTIONS
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<String>>(),
    );
    let autofill_image = Callback::new(move |typed: String| image.set(suggested_image(&typed)));

    let reset_form = move || {
        name.set(String::new());
        description.set(String::new());
        image.set(String::new());
    };

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let game_name = name.get_untracked().trim().to_string();
        if game_name.is_empty() || saving.get_untracked() {
            return;
        }

        let request = CreateGameRequest {
            name: game_name,
            description: non_empty(description.get_untracked()),
            image: non_empty(image.get_untracked()),
        };

        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match ApiClient::create_game(request).await {
                Ok(game) => {
                    log::info!("created game {} ({})", game.name, game.id);
                    queries.games.invalidate();
                    queries.refetch_games();
                    show_create_modal.set(false);
                    reset_form();
                    toaster.success("Game added", format!("{} was created.", game.name));
                }
                Err(e) => {
                    toaster.error("Failed to add game", e.user_message("Could not create game."));
                }
            }
            saving.set(false);
        });
    };

    let on_delete = move |game: Game| {
        let confirmed = window()
            .confirm_with_message(&format!("Are you sure you want to delete \"{}\"?", game.name))
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let game_id = game.id;
        let snapshot = queries
            .games
            .apply_optimistic(|games| remove_game(games, game_id));

        wasm_bindgen_futures::spawn_local(async move {
            match ApiClient::delete_game(game_id).await {
                Ok(()) => {
                    if let Some(snapshot) = snapshot {
                        queries.games.commit(snapshot);
                    }
                    toaster.success("Game deleted", format!("{} was removed.", game.name));
                }
                Err(e) => {
                    log::warn!("delete of game {} failed: {}", game_id, e);
                    if let Some(snapshot) = snapshot {
                        queries.games.restore(snapshot);
                    }
                    toaster.error("Delete failed", delete_failure_message(&e));
                }
            }
            queries.refetch_games();
        });
    };

    view! {
        <div class="dashboard-header">
            <h1 class="dashboard-title">"Games"</h1>
            <button class="btn btn-primary" on:click=move |_| show_create_modal.set(true)>
                "+ Add Game"
            </button>
        </div>

        {move || queries.games.error().map(|e| view! {
            <div class="alert alert-error">{e}</div>
        })}

        {move || {
            if queries.games.is_loading() {
                return view! { <Loading message="Loading games..." /> }.into_view();
            }

            let games = queries.games.data().unwrap_or_default();
            if games.is_empty() {
                return view! {
                    <EmptyState title="No games yet." hint="Add a game to start scheduling draws." />
                }
                .into_view();
            }

            let resolver = AssetResolver::new();
            view! {
                <div class="grid grid-3">
                    {games.into_iter().map(|game| {
                        let image_src = resolver.resolve_game(&game);
                        let to_delete = game.clone();
                        view! {
                            <div class="card game-card">
                                {match image_src {
                                    Some(src) => view! {
                                        <img class="game-card-image" src=src alt=game.name.clone() />
                                    }.into_view(),
                                    None => view! {
                                        <div class="game-card-image game-card-placeholder">"🎲"</div>
                                    }.into_view(),
                                }}
                                <h3 class="card-title">{game.name}</h3>
                                {game.description.map(|d| view! {
                                    <p class="card-description">{d}</p>
                                })}
                                <div class="card-actions">
                                    <button
                                        class="btn btn-danger btn-sm"
                                        on:click=move |_| on_delete(to_delete.clone())
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            }
            .into_view()
        }}

        <Show when=move || show_create_modal.get() fallback=|| ()>
            <Modal
                title="Add Game"
                description="Pick a known game to fill in its image automatically."
                on_close=Callback::new(move |_| show_create_modal.set(false))
            >
                <form on:submit=on_create>
                    <FormGroup label="Game Name" for_id="game-name">
                        <AutocompleteInput
                            value=name
                            suggestions=suggestions.get_value()
                            on_input=autofill_image
                            on_select=autofill_image
                            placeholder="e.g. BINGO4"
                            id="game-name"
                        />
                    </FormGroup>

                    <FormGroup label="Description" for_id="game-description">
                        <textarea
                            id="game-description"
                            class="form-input"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </FormGroup>

                    <FormGroup
                        label="Image"
                        for_id="game-image"
                        hint="Filename in the public folder or a full URL."
                    >
                        <input
                            type="text"
                            id="game-image"
                            class="form-input"
                            prop:value=move || image.get()
                            on:input=move |ev| image.set(event_target_value(&ev))
                        />
                    </FormGroup>

                    <button
                        type="submit"
                        class="btn btn-primary"
                        style="width: 100%; margin-top: 1rem;"
                        disabled=move || saving.get() || name.get().trim().is_empty()
                    >
                        {move || if saving.get() { "Saving..." } else { "Add Game" }}
                    </button>
                </form>
            </Modal>
        </Show>
    }
}
