use leptos::*;
use shared::{CreateDrawRequest, Draw, Game};

use crate::api::ApiClient;
use crate::components::empty_state::EmptyState;
use crate::components::form_group::FormGroup;
use crate::components::loading::Loading;
use crate::components::modal::Modal;
use crate::components::select_input::SelectInput;
use crate::components::toast::use_toaster;
use crate::query::use_query_client;
use crate::utils::{format_datetime, non_empty, parse_datetime_local};

pub fn game_name_for(games: &[Game], game_id: i64) -> String {
    games
        .iter()
        .find(|g| g.id == game_id)
        .map(|g| g.name.clone())
        .unwrap_or_else(|| format!("Game #{}", game_id))
}

/// Newest draw first.
pub fn sort_draws(draws: &mut [Draw]) {
    draws.sort_by(|a, b| b.draw_datetime.cmp(&a.draw_datetime));
}

pub fn game_options(games: &[Game]) -> Vec<(String, String)> {
    games
        .iter()
        .map(|g| (g.id.to_string(), g.name.clone()))
        .collect()
}

#[component]
pub fn DrawsPage() -> impl IntoView {
    let queries = use_query_client();
    let toaster = use_toaster();
    queries.load_draws();
    queries.load_games();

    let show_create_modal = create_rw_signal(false);
    let saving = create_rw_signal(false);

    // Form fields
    let game_id = create_rw_signal(String::new());
    let draw_datetime = create_rw_signal(String::new());
    let image = create_rw_signal(String::new());

    let options = Signal::derive(move || game_options(&queries.games.data().unwrap_or_default()));

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }

        let Ok(selected_game) = game_id.get_untracked().parse::<i64>() else {
            toaster.error("Missing game", "Choose the game this draw belongs to.");
            return;
        };
        let Some(when) = parse_datetime_local(&draw_datetime.get_untracked()) else {
            toaster.error("Missing date", "Enter the draw date and time.");
            return;
        };

        let request = CreateDrawRequest {
            game_id: selected_game,
            draw_datetime: when,
            image: non_empty(image.get_untracked()),
        };

        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match ApiClient::create_draw(request).await {
                Ok(draw) => {
                    log::info!("created draw {} for game {}", draw.id, draw.game_id);
                    queries.draws.invalidate();
                    queries.refetch_draws();
                    show_create_modal.set(false);
                    game_id.set(String::new());
                    draw_datetime.set(String::new());
                    image.set(String::new());
                    toaster.success("Draw scheduled", format_datetime(&draw.draw_datetime));
                }
                Err(e) => {
                    toaster.error("Failed to create draw", e.user_message("Could not create draw."));
                }
            }
            saving.set(false);
        });
    };

    view! {
        <div class="dashboard-header">
            <h1 class="dashboard-title">"Draws"</h1>
            <button class="btn btn-primary" on:click=move |_| show_create_modal.set(true)>
                "+ Schedule Draw"
            </button>
        </div>

        {move || queries.draws.error().map(|e| view! {
            <div class="alert alert-error">{e}</div>
        })}

        {move || {
            if queries.draws.is_loading() {
                return view! { <Loading message="Loading draws..." /> }.into_view();
            }

            let mut draws = queries.draws.data().unwrap_or_default();
            if draws.is_empty() {
                return view! {
                    <EmptyState title="No draws yet." hint="Schedule a draw for one of your games." />
                }
                .into_view();
            }
            sort_draws(&mut draws);
            let games = queries.games.data().unwrap_or_default();

            view! {
                <div class="card">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Game"</th>
                                <th>"Draw time"</th>
                                <th>"Image"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {draws.into_iter().map(|draw| view! {
                                <tr>
                                    <td>{game_name_for(&games, draw.game_id)}</td>
                                    <td>{format_datetime(&draw.draw_datetime)}</td>
                                    <td>{draw.image.unwrap_or_else(|| "-".to_string())}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            }
            .into_view()
        }}

        <Show when=move || show_create_modal.get() fallback=|| ()>
            <Modal
                title="Schedule Draw"
                on_close=Callback::new(move |_| show_create_modal.set(false))
            >
                <form on:submit=on_create>
                    <FormGroup label="Game" for_id="draw-game">
                        <SelectInput
                            value=game_id
                            options=options
                            placeholder="Select a game"
                            id="draw-game"
                            required=true
                        />
                    </FormGroup>

                    <FormGroup label="Draw time" for_id="draw-datetime">
                        <input
                            type="datetime-local"
                            id="draw-datetime"
                            class="form-input"
                            prop:value=move || draw_datetime.get()
                            on:input=move |ev| draw_datetime.set(event_target_value(&ev))
                            required
                        />
                    </FormGroup>

                    <FormGroup label="Image" for_id="draw-image" hint="Optional flyer for this draw.">
                        <input
                            type="text"
                            id="draw-image"
                            class="form-input"
                            prop:value=move || image.get()
                            on:input=move |ev| image.set(event_target_value(&ev))
                        />
                    </FormGroup>

                    <button
                        type="submit"
                        class="btn btn-primary"
                        style="width: 100%; margin-top: 1rem;"
                        disabled=move || saving.get()
                    >
                        {move || if saving.get() { "Saving..." } else { "Schedule" }}
                    </button>
                </form>
            </Modal>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: i64, name: &str) -> Game {
        Game {
            id,
            name: name.to_string(),
            description: None,
            image: None,
        }
    }

    fn draw(id: i64, at: &str) -> Draw {
        Draw {
            id,
            game_id: 1,
            draw_datetime: parse_datetime_local(at).unwrap(),
            image: None,
        }
    }

    #[test]
    fn test_game_name_lookup() {
        let games = vec![game(1, "BINGO4"), game(2, "STAR LOTTO")];
        assert_eq!(game_name_for(&games, 2), "STAR LOTTO");
        assert_eq!(game_name_for(&games, 7), "Game #7");
    }

    #[test]
    fn test_sort_draws_newest_first() {
        let mut draws = vec![
            draw(1, "2026-01-01T19:00"),
            draw(2, "2026-03-01T19:00"),
            draw(3, "2026-02-01T19:00"),
        ];
        sort_draws(&mut draws);
        let ids: Vec<i64> = draws.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_game_options() {
        let options = game_options(&[game(4, "SIKA KESE")]);
        assert_eq!(options, vec![("4".to_string(), "SIKA KESE".to_string())]);
    }
}
