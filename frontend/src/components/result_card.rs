use leptos::*;
use shared::format::{build_heading, format_draw_date, format_event_number, format_verified_at};
use shared::DrawResult;

use crate::components::game_badge::{GameBadge, RandLogo};
use crate::components::lottery_ball::BallRow;

/// A decorative share target under every card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialNetwork {
    pub label: &'static str,
    pub color: &'static str,
    pub slug: &'static str,
    /// 24x24 viewBox glyph.
    pub icon_path: &'static str,
}

pub const SOCIAL_NETWORKS: [SocialNetwork; 6] = [
    SocialNetwork {
        label: "Facebook",
        color: "#1877F2",
        slug: "facebook",
        icon_path: "M22 12a10 10 0 1 0-11.56 9.88v-6.99H7.9V12h2.54V9.8c0-2.5 1.49-3.89 3.78-3.89 1.09 0 2.24.2 2.24.2v2.46h-1.26c-1.24 0-1.63.77-1.63 1.56V12h2.78l-.44 2.89h-2.34v6.99A10 10 0 0 0 22 12z",
    },
    SocialNetwork {
        label: "Instagram",
        color: "#E1306C",
        slug: "instagram",
        icon_path: "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5zm0 2a3 3 0 0 0-3 3v10a3 3 0 0 0 3 3h10a3 3 0 0 0 3-3V7a3 3 0 0 0-3-3H7zm5 3.5a4.5 4.5 0 1 1 0 9 4.5 4.5 0 0 1 0-9zm0 2a2.5 2.5 0 1 0 0 5 2.5 2.5 0 0 0 0-5zm5.5-4a1 1 0 1 1 0 2 1 1 0 0 1 0-2z",
    },
    SocialNetwork {
        label: "Telegram",
        color: "#0088cc",
        slug: "telegram",
        icon_path: "M21.94 4.3 18.9 19.1c-.23 1.02-.83 1.27-1.69.79l-4.66-3.44-2.25 2.17c-.25.25-.46.46-.94.46l.34-4.74 8.63-7.8c.38-.33-.08-.52-.58-.19L7.08 13.04 2.49 11.6c-1-.31-1.02-1 .21-1.48L20.6 3.2c.83-.3 1.56.2 1.34 1.1z",
    },
    SocialNetwork {
        label: "X",
        color: "#0f1419",
        slug: "x",
        icon_path: "M18.24 2.25h3.31l-7.23 8.26 8.5 11.24h-6.66l-5.21-6.82-5.97 6.82H1.67l7.73-8.84L1.25 2.25h6.83l4.71 6.23 5.45-6.23zm-1.16 17.52h1.83L7.08 4.13H5.12z",
    },
    SocialNetwork {
        label: "WhatsApp",
        color: "#25D366",
        slug: "whatsapp",
        icon_path: "M12 2a10 10 0 0 0-8.6 15.1L2 22l5.03-1.32A10 10 0 1 0 12 2zm5.3 14.1c-.22.63-1.3 1.2-1.8 1.25-.46.05-1.04.07-1.68-.1-.39-.12-.89-.29-1.52-.56-2.68-1.16-4.43-3.86-4.56-4.04-.13-.18-1.09-1.45-1.09-2.77 0-1.31.69-1.96.93-2.23.24-.27.53-.33.71-.33h.51c.16 0 .38-.06.6.46.22.53.75 1.84.82 1.97.07.13.11.29.02.47-.09.18-.13.29-.27.44l-.4.47c-.13.13-.27.28-.12.55.16.27.7 1.15 1.5 1.86 1.03.92 1.9 1.2 2.17 1.34.27.13.43.11.58-.07.16-.18.67-.78.85-1.05.18-.27.36-.22.6-.13.25.09 1.56.74 1.83.87.27.13.45.2.51.31.07.11.07.64-.15 1.27z",
    },
    SocialNetwork {
        label: "Snapchat",
        color: "#0f1419",
        slug: "snapchat",
        icon_path: "M12 2c3 0 5.5 2.3 5.5 5.5v2.6l1.6-.5c.5-.1.9.4.6.8-.5.6-1.4.9-2 1.1.3 1.4 1.8 3 3.4 3.4.4.1.5.7.1.9-.7.4-1.6.5-2.1.7-.2.5-.1 1.1-.7 1.1-.6 0-1.3-.3-2.3 0-1 .3-1.7 1.4-3.1 1.4s-2.1-1.1-3.1-1.4c-1-.3-1.7 0-2.3 0-.6 0-.5-.6-.7-1.1-.5-.2-1.4-.3-2.1-.7-.4-.2-.3-.8.1-.9 1.6-.4 3.1-2 3.4-3.4-.6-.2-1.5-.5-2-1.1-.3-.4.1-.9.6-.8l1.6.5V7.5C6.5 4.3 9 2 12 2z",
    },
];

/// Everything a card displays, derived from one result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultCardContent {
    pub heading: String,
    pub date: String,
    pub event_number: String,
    pub game_name: String,
    pub winning_numbers: Vec<u32>,
    /// Empty hides the machine-numbers section.
    pub machine_numbers: Vec<u32>,
    /// `None` hides the verification line.
    pub verification: Option<String>,
}

impl ResultCardContent {
    pub fn new(result: &DrawResult) -> Self {
        let verification = result.is_verified.then(|| match &result.verified_at {
            Some(at) => format!("Verified Official Result • {}", format_verified_at(at)),
            None => "Verified Official Result".to_string(),
        });

        Self {
            heading: build_heading(&result.game_name),
            date: format_draw_date(&result.draw_date),
            event_number: format_event_number(&result.id),
            game_name: result.game_name.clone(),
            winning_numbers: result.winning_numbers.clone(),
            machine_numbers: result.machine_numbers.clone(),
            verification,
        }
    }
}

#[component]
fn SocialIcons() -> impl IntoView {
    view! {
        <div class="social-icons" style="display: flex; gap: 0.5rem; justify-content: center;">
            {SOCIAL_NETWORKS
                .iter()
                .map(|network| {
                    view! {
                        <span
                            class=format!("social-icon icon-{}", network.slug)
                            style=format!("color: {}; display: inline-flex;", network.color)
                            title=network.label
                            aria-label=network.label
                            role="img"
                        >
                            <svg viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
                                <path d=network.icon_path></path>
                            </svg>
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Shareable card for one draw's results.
#[component]
pub fn ResultCard(
    result: DrawResult,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let content = ResultCardContent::new(&result);

    let full_class = if let Some(extra) = class {
        format!("card result-card {}", extra)
    } else {
        "card result-card".to_string()
    };

    let machine_numbers = content.machine_numbers;
    let machine_section = (!machine_numbers.is_empty()).then(|| {
        view! {
            <section class="result-card-section">
                <h3 class="result-card-section-title machine">"Machine Numbers"</h3>
                <BallRow numbers=machine_numbers />
            </section>
        }
    });

    view! {
        <div class=full_class>
            <header class="result-card-header">
                <h2 class="result-card-heading">{content.heading}</h2>
                <div class="result-card-meta">
                    <div class="result-card-meta-item">
                        <RandLogo />
                        <p class="result-card-date">"DATE: " {content.date}</p>
                    </div>
                    <div class="result-card-meta-item">
                        <GameBadge game_name=content.game_name />
                        <p class="result-card-event-label">"Event Number"</p>
                        <p class="result-card-event-number">{content.event_number}</p>
                    </div>
                </div>
            </header>

            <section class="result-card-section">
                <h3 class="result-card-section-title winning">"Winning Numbers"</h3>
                <BallRow numbers=content.winning_numbers />
            </section>

            {machine_section}

            <footer class="result-card-footer">
                {content.verification.map(|label| view! {
                    <div class="result-card-verified">
                        <span class="result-card-verified-check">"✓"</span>
                        <span>{label}</span>
                    </div>
                })}
                <SocialIcons />
            </footer>
        </div>
    }
}
