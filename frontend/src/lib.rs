use yew::prelude::*;

pub mod components;
pub mod config;
pub mod pages;
pub mod survey;
pub mod utils;

use components::theme_toggle::ThemeToggle;
use pages::feedback::FeedbackForm;
use pages::landing::FeaturesGrid;
use utils::storage::BrowserStorage;
use utils::theme::{load_dark_mode, save_dark_mode};

const THEME_CSS: &str = r#"
    .app-container {
        --primary: #1976d2;
        --secondary: #9c27b0;
        --success: #2e7d32;
        --error: #d32f2f;
        --text: #1a1a1a;
        --text-secondary: #555;
        --border: #ccc;
        --card-bg: rgba(255, 255, 255, 0.8);
        --input-bg: #f5f5f5;
        --icon-bg: #fafafa;
        min-height: 100vh;
        color: var(--text);
        background: linear-gradient(180deg, #eef3fb, #f8f0fb);
        font-family: "Roboto", "Helvetica", "Arial", sans-serif;
    }
    .app-container.dark {
        --primary: #7eb2ff;
        --secondary: #ce93d8;
        --success: #81c784;
        --error: #ef9a9a;
        --text: #eee;
        --text-secondary: #bbb;
        --border: #444;
        --card-bg: rgba(30, 30, 30, 0.85);
        --input-bg: #242424;
        --icon-bg: #2a2a2a;
        background: linear-gradient(180deg, #121212, #1d1429);
    }
    .theme-toggle {
        position: fixed;
        top: 1rem;
        right: 1rem;
        z-index: 10;
        width: 40px;
        height: 40px;
        border-radius: 50%;
        border: 1px solid var(--border);
        background: var(--card-bg);
        color: var(--text);
        cursor: pointer;
    }
"#;

/// Shows the feature showcase until the visitor asks to give feedback.
#[function_component(App)]
pub fn app() -> Html {
    let show_features = use_state(|| true);
    let dark_mode = use_state(|| load_dark_mode(&BrowserStorage));

    let on_close = {
        let show_features = show_features.clone();
        Callback::from(move |_| show_features.set(false))
    };
    let on_toggle_theme = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |_| {
            let enabled = !*dark_mode;
            save_dark_mode(&BrowserStorage, enabled);
            dark_mode.set(enabled);
        })
    };

    html! {
        <div class={classes!("app-container", dark_mode.then_some("dark"))}>
            <style>{THEME_CSS}</style>
            <ThemeToggle dark={*dark_mode} on_toggle={on_toggle_theme} />
            if *show_features {
                <FeaturesGrid {on_close} />
            } else {
                <FeedbackForm />
            }
        </div>
    }
}
