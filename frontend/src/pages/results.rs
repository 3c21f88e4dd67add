use leptos::*;
use shared::{
    parse_numbers, ApiResult, CreateResultRequest, Draw, DrawResult, Game,
    ReviewDecision, ReviewResultRequest,
};

use crate::api::ApiClient;
use crate::components::badge::StatusBadge;
use crate::components::empty_state::EmptyState;
use crate::components::form_group::FormGroup;
use crate::components::loading::Loading;
use crate::components::modal::Modal;
use crate::components::result_card::{ResultCard, SOCIAL_NETWORKS};
use crate::components::select_input::SelectInput;
use crate::components::toast::use_toaster;
use crate::pages::draws::game_name_for;
use crate::query::use_query_client;
use crate::utils::{format_datetime, non_empty, parse_tags};

/// Raw values of the submit form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultForm {
    pub draw_id: String,
    pub winning_numbers: String,
    pub machine_numbers: String,
    pub share_copy: String,
    pub share_hashtags: String,
    pub share_targets: Vec<String>,
}

impl ResultForm {
    /// Validate the form into a request, or a message for the user.
    pub fn to_request(&self) -> Result<CreateResultRequest, String> {
        let draw_id = self
            .draw_id
            .trim()
            .parse::<i64>()
            .map_err(|_| "Choose the draw these numbers belong to.".to_string())?;

        let winning_numbers = parse_numbers(&self.winning_numbers).map_err(|e| e.to_string())?;
        if winning_numbers.is_empty() {
            return Err("Enter the winning numbers.".to_string());
        }

        let machine_numbers = parse_numbers(&self.machine_numbers).map_err(|e| e.to_string())?;

        Ok(CreateResultRequest {
            draw_id,
            winning_numbers,
            machine_numbers: (!machine_numbers.is_empty()).then_some(machine_numbers),
            share_copy: non_empty(self.share_copy.clone()),
            share_hashtags: parse_tags(&self.share_hashtags),
            share_targets: self.share_targets.clone(),
        })
    }
}

/// Label for a draw in the picker, e.g. "BINGO4 · Jan 08, 2026 19:00".
pub fn draw_label(draw: &Draw, games: &[Game]) -> String {
    format!(
        "{} · {}",
        game_name_for(games, draw.game_id),
        format_datetime(&draw.draw_datetime)
    )
}

/// Newest submission first.
pub fn sort_results(results: &mut [ApiResult]) {
    results.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    let queries = use_query_client();
    let toaster = use_toaster();
    queries.load_results();
    queries.load_draws();
    queries.load_games();

    let show_create_modal = create_rw_signal(false);
    let saving = create_rw_signal(false);
    let reviewing = create_rw_signal(Option::<i64>::None);

    // Form fields
    let draw_id = create_rw_signal(String::new());
    let winning_numbers = create_rw_signal(String::new());
    let machine_numbers = create_rw_signal(String::new());
    let share_copy = create_rw_signal(String::new());
    let share_hashtags = create_rw_signal(String::new());
    let share_targets = create_rw_signal(Vec::<String>::new());

    let draw_options = Signal::derive(move || {
        let games = queries.games.data().unwrap_or_default();
        queries
            .draws
            .data()
            .unwrap_or_default()
            .iter()
            .map(|d| (d.id.to_string(), draw_label(d, &games)))
            .collect::<Vec<_>>()
    });

    let reset_form = move || {
        draw_id.set(String::new());
        winning_numbers.set(String::new());
        machine_numbers.set(String::new());
        share_copy.set(String::new());
        share_hashtags.set(String::new());
        share_targets.set(Vec::new());
    };

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }

        let form = ResultForm {
            draw_id: draw_id.get_untracked(),
            winning_numbers: winning_numbers.get_untracked(),
            machine_numbers: machine_numbers.get_untracked(),
            share_copy: share_copy.get_untracked(),
            share_hashtags: share_hashtags.get_untracked(),
            share_targets: share_targets.get_untracked(),
        };
        let request = match form.to_request() {
            Ok(request) => request,
            Err(message) => {
                toaster.error("Check the form", message);
                return;
            }
        };

        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match ApiClient::create_result(request).await {
                Ok(result) => {
                    log::info!("submitted result {} for draw {}", result.id, result.draw_id);
                    queries.results.invalidate();
                    queries.refetch_results();
                    show_create_modal.set(false);
                    reset_form();
                    toaster.success("Result submitted", "It is now waiting for review.");
                }
                Err(e) => {
                    toaster.error("Failed to submit result", e.user_message("Could not submit result."));
                }
            }
            saving.set(false);
        });
    };

    let on_review = move |result_id: i64, decision: ReviewDecision| {
        if reviewing.get_untracked().is_some() {
            return;
        }
        reviewing.set(Some(result_id));

        let request = ReviewResultRequest {
            decision,
            note: None,
        };
        wasm_bindgen_futures::spawn_local(async move {
            match ApiClient::review_result(result_id, request).await {
                Ok(updated) => {
                    log::info!("result {} is now {}", updated.id, updated.status.as_str());
                    let title = match decision {
                        ReviewDecision::Approved => "Result approved",
                        ReviewDecision::Rejected => "Result rejected",
                    };
                    toaster.success(title, format!("Status: {}", updated.status.as_str()));
                }
                Err(e) => {
                    toaster.error("Review failed", e.user_message("Could not review result."));
                }
            }
            queries.results.invalidate();
            queries.refetch_results();
            reviewing.set(None);
        });
    };

    let toggle_target = move |slug: String| {
        share_targets.update(|targets| {
            if let Some(pos) = targets.iter().position(|t| *t == slug) {
                targets.remove(pos);
            } else {
                targets.push(slug);
            }
        });
    };

    view! {
        <div class="dashboard-header">
            <h1 class="dashboard-title">"Results"</h1>
            <button class="btn btn-primary" on:click=move |_| show_create_modal.set(true)>
                "+ Submit Result"
            </button>
        </div>

        {move || queries.results.error().map(|e| view! {
            <div class="alert alert-error">{e}</div>
        })}

        {move || {
            if queries.results.is_loading() {
                return view! { <Loading message="Loading results..." /> }.into_view();
            }

            let mut results = queries.results.data().unwrap_or_default();
            if results.is_empty() {
                return view! {
                    <EmptyState title="No results yet." hint="Submit the numbers of a finished draw." />
                }
                .into_view();
            }
            sort_results(&mut results);

            view! {
                <div class="result-list">
                    {results.into_iter().map(|result| {
                        let result_id = result.id;
                        let awaiting = result.status.is_awaiting_review();
                        let preview = match DrawResult::try_from(&result) {
                            Ok(card) => view! { <ResultCard result=card /> }.into_view(),
                            Err(e) => {
                                log::warn!("result {} has unreadable numbers: {}", result_id, e);
                                view! {
                                    <div class="alert alert-error">
                                        "Stored numbers could not be read: " {result.winning_numbers.clone()}
                                    </div>
                                }
                                .into_view()
                            }
                        };

                        view! {
                            <div class="card result-admin">
                                <div class="result-admin-header">
                                    <h3 class="card-title">
                                        {result.draw.game.name.clone()} " · "
                                        {format_datetime(&result.draw.draw_datetime)}
                                    </h3>
                                    <StatusBadge status=result.status />
                                </div>
                                <p class="result-admin-meta">
                                    "Approvals: " {result.approvals.len()}
                                    {result.machine_numbers.as_deref().map(|m| {
                                        format!(" · Machine: {}", m)
                                    })}
                                </p>
                                {preview}
                                <Show when=move || awaiting fallback=|| ()>
                                    <div class="card-actions">
                                        <button
                                            class="btn btn-primary btn-sm"
                                            disabled=move || reviewing.get().is_some()
                                            on:click=move |_| on_review(result_id, ReviewDecision::Approved)
                                        >
                                            "Approve"
                                        </button>
                                        <button
                                            class="btn btn-danger btn-sm"
                                            disabled=move || reviewing.get().is_some()
                                            on:click=move |_| on_review(result_id, ReviewDecision::Rejected)
                                        >
                                            "Reject"
                                        </button>
                                    </div>
                                </Show>
                            </div>
                        }
                    }).collect_view()}
                </div>
            }
            .into_view()
        }}

        <Show when=move || show_create_modal.get() fallback=|| ()>
            <Modal
                title="Submit Result"
                description="Numbers can be separated by commas, spaces or dashes."
                on_close=Callback::new(move |_| show_create_modal.set(false))
            >
                <form on:submit=on_create>
                    <FormGroup label="Draw" for_id="result-draw">
                        <SelectInput
                            value=draw_id
                            options=draw_options
                            placeholder="Select a draw"
                            id="result-draw"
                            required=true
                        />
                    </FormGroup>

                    <FormGroup label="Winning Numbers" for_id="result-winning">
                        <input
                            type="text"
                            id="result-winning"
                            class="form-input"
                            placeholder="5, 12, 33, 41, 80"
                            prop:value=move || winning_numbers.get()
                            on:input=move |ev| winning_numbers.set(event_target_value(&ev))
                            required
                        />
                    </FormGroup>

                    <FormGroup label="Machine Numbers" for_id="result-machine" hint="Optional.">
                        <input
                            type="text"
                            id="result-machine"
                            class="form-input"
                            prop:value=move || machine_numbers.get()
                            on:input=move |ev| machine_numbers.set(event_target_value(&ev))
                        />
                    </FormGroup>

                    <FormGroup label="Share Text" for_id="result-share-copy">
                        <textarea
                            id="result-share-copy"
                            class="form-input"
                            prop:value=move || share_copy.get()
                            on:input=move |ev| share_copy.set(event_target_value(&ev))
                        ></textarea>
                    </FormGroup>

                    <FormGroup label="Hashtags" for_id="result-hashtags" hint="Comma separated.">
                        <input
                            type="text"
                            id="result-hashtags"
                            class="form-input"
                            placeholder="#rand, #lotto"
                            prop:value=move || share_hashtags.get()
                            on:input=move |ev| share_hashtags.set(event_target_value(&ev))
                        />
                    </FormGroup>

                    <FormGroup label="Share To">
                        <div class="checkbox-row">
                            {SOCIAL_NETWORKS.iter().map(|network| {
                                let slug = network.slug.to_string();
                                let checked_slug = slug.clone();
                                view! {
                                    <label class="checkbox-label">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || {
                                                share_targets.with(|t| t.contains(&checked_slug))
                                            }
                                            on:change=move |_| toggle_target(slug.clone())
                                        />
                                        {network.label}
                                    </label>
                                }
                            }).collect_view()}
                        </div>
                    </FormGroup>

                    <button
                        type="submit"
                        class="btn btn-primary"
                        style="width: 100%; margin-top: 1rem;"
                        disabled=move || saving.get()
                    >
                        {move || if saving.get() { "Submitting..." } else { "Submit" }}
                    </button>
                </form>
            </Modal>
        </Show>
    }
}
