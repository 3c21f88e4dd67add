use leptos::*;
use shared::{ApiResult, DrawResult};

use crate::components::empty_state::EmptyState;
use crate::components::game_badge::RandLogo;
use crate::components::loading::Loading;
use crate::components::result_card::ResultCard;
use crate::query::use_query_client;

/// Verified results as cards, newest draw first. Results whose stored
/// numbers cannot be parsed are skipped.
pub fn published_cards(results: &[ApiResult]) -> Vec<DrawResult> {
    let mut cards: Vec<DrawResult> = results
        .iter()
        .filter(|r| r.verified)
        .filter_map(|r| match DrawResult::try_from(r) {
            Ok(card) => Some(card),
            Err(e) => {
                log::warn!("skipping result {}: {}", r.id, e);
                None
            }
        })
        .collect();
    cards.sort_by(|a, b| b.draw_date.cmp(&a.draw_date));
    cards
}

#[component]
pub fn ResultsFeed() -> impl IntoView {
    let queries = use_query_client();
    queries.load_results();

    view! {
        <header class="feed-header">
            <RandLogo class="feed-logo" />
            <h1 class="dashboard-title">"Latest Draw Results"</h1>
            <a href="/login" class="btn btn-outline">"Admin"</a>
        </header>

        <div class="container">
            {move || queries.results.error().map(|e| view! {
                <div class="alert alert-error">{e}</div>
            })}

            {move || {
                if queries.results.is_loading() {
                    return view! { <Loading message="Loading results..." /> }.into_view();
                }

                let cards = published_cards(&queries.results.data().unwrap_or_default());
                if cards.is_empty() {
                    return view! {
                        <EmptyState title="No verified results yet." hint="Check back after the next draw." />
                    }
                    .into_view();
                }

                view! {
                    <div class="result-feed">
                        {cards.into_iter().map(|card| view! { <ResultCard result=card /> }).collect_view()}
                    </div>
                }
                .into_view()
            }}
        </div>
    }
}
