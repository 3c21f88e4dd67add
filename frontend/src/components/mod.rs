pub mod autocomplete_input;
pub mod badge;
pub mod empty_state;
pub mod form_group;
pub mod game_badge;
pub mod loading;
pub mod lottery_ball;
pub mod modal;
pub mod navbar;
pub mod result_card;
pub mod select_input;
pub mod toast;
