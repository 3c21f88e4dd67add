//! Game name → image resolution.
//!
//! One table of known games backs both the result-card badges and the admin
//! form's image auto-fill. How a filename becomes a URL is up to the
//! [`AssetLookup`] strategy.

use crate::types::Game;

/// Known games and their image files in the public folder.
pub const KNOWN_GAME_IMAGES: &[(&str, &str)] = &[
    ("BINGO4", "Bing4 lottery.jpeg"),
    ("ENDOWMENT LOTTO", "Endowment Thursday.jpeg"),
    ("GOLDEN SOUVENIR", "Golden Souvenir Tuesday.jpeg"),
    ("SAMEDI SOIR", "Samedi Soir Saturday.jpeg"),
    ("STAR LOTTO", "Star Sunday.jpeg"),
    ("SIKA KESE", "sika kesee.jpeg"),
];

/// Game names offered by the admin form's autocomplete.
pub const GAME_SUGGESTIONS: &[&str] = &[
    // National games
    "VAG MONDAY",
    "VAG TUESDAY",
    "VAG WEDNESDAY",
    "VAG THURSDAY",
    "VAG FRIDAY",
    "VAG SATURDAY",
    "MONDAY NOONRUSH",
    "TUESDAY NOONRUSH",
    "WEDNESDAY NOONRUSH",
    "THURSDAY NOONRUSH",
    "FRIDAY NOONRUSH",
    "SATURDAY NOONRUSH",
    "MONDAY SPECIAL",
    "LUCKY TUESDAY",
    "MID-WEEK",
    "FORTUNE THURSDAY",
    "FRIDAY BONANZA",
    "NATIONAL",
    "ASEDA",
    // Rand games
    "BINGO4",
    "GOLDEN SOUVENIR",
    "CASH4LIFE",
    "ENDOWMENT LOTTO",
    "SIKA KESE",
    "SAMEDI SOIR",
    "STAR LOTTO",
];

pub const DEFAULT_BADGE: &str = "/assets/game-badge.png";
pub const RAND_LOGO: &str = "/randLogo.png";

pub fn normalize_game_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Strategy for finding a game's image and turning a filename into a URL.
pub trait AssetLookup {
    /// Image filename for an already-normalized game name.
    fn image_filename(&self, normalized: &str) -> Option<String>;

    fn url_for(&self, filename: &str) -> String;
}

/// Images served from the root of the public folder.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicFolder;

impl AssetLookup for PublicFolder {
    fn image_filename(&self, normalized: &str) -> Option<String> {
        KNOWN_GAME_IMAGES
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, file)| file.to_string())
    }

    fn url_for(&self, filename: &str) -> String {
        if filename.starts_with('/') || filename.contains("://") {
            filename.to_string()
        } else {
            format!("/{}", filename)
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssetResolver<L = PublicFolder> {
    lookup: L,
    default_badge: String,
}

impl AssetResolver<PublicFolder> {
    pub fn new() -> Self {
        Self::with_lookup(PublicFolder)
    }
}

impl Default for AssetResolver<PublicFolder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: AssetLookup> AssetResolver<L> {
    pub fn with_lookup(lookup: L) -> Self {
        Self {
            lookup,
            default_badge: DEFAULT_BADGE.to_string(),
        }
    }

    pub fn with_default_badge(mut self, badge: impl Into<String>) -> Self {
        self.default_badge = badge.into();
        self
    }

    /// Image filename for a game name, used to pre-fill admin forms.
    pub fn image_filename(&self, game_name: &str) -> Option<String> {
        let normalized = normalize_game_name(game_name);
        if normalized.is_empty() {
            return None;
        }
        self.lookup.image_filename(&normalized)
    }

    /// Image URL for a game name, `None` when the game is unmapped.
    pub fn resolve(&self, game_name: &str) -> Option<String> {
        self.image_filename(game_name)
            .map(|file| self.lookup.url_for(&file))
    }

    /// Like [`resolve`](Self::resolve), but a stored image on the game wins.
    pub fn resolve_game(&self, game: &Game) -> Option<String> {
        game.image
            .as_deref()
            .map(str::trim)
            .filter(|image| !image.is_empty())
            .map(|image| self.lookup.url_for(image))
            .or_else(|| self.resolve(&game.name))
    }

    /// Badge for a result card; the default badge when unmapped.
    pub fn badge_for(&self, game_name: &str) -> String {
        self.resolve(game_name)
            .unwrap_or_else(|| self.default_badge.clone())
    }

    pub fn logo(&self) -> &'static str {
        RAND_LOGO
    }
}
