use leptos::*;
use shared::assets::{AssetResolver, DEFAULT_BADGE, RAND_LOGO};

pub fn badge_src(game_name: Option<&str>) -> String {
    match game_name {
        Some(name) => AssetResolver::new().badge_for(name),
        None => DEFAULT_BADGE.to_string(),
    }
}

/// Per-game branded image; the default badge when the game is unmapped.
#[component]
pub fn GameBadge(
    #[prop(optional, into)] game_name: Option<String>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let src = badge_src(game_name.as_deref());
    let alt = game_name.unwrap_or_else(|| "Game".to_string());
    let full_class = class.unwrap_or_else(|| "game-badge".to_string());

    view! {
        <img src=src alt=alt class=full_class />
    }
}

#[component]
pub fn RandLogo(#[prop(optional, into)] class: Option<String>) -> impl IntoView {
    let full_class = class.unwrap_or_else(|| "rand-logo".to_string());

    view! {
        <img src=RAND_LOGO alt="Rand Lottery" class=full_class />
    }
}
