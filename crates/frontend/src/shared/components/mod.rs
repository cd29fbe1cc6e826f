pub mod empty_state;
pub mod stat_card;
pub mod ui;
