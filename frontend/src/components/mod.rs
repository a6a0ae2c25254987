pub mod feature_card;
pub mod progress_bar;
pub mod theme_toggle;
