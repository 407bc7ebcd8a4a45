//! Application root.

use canvas::config::BoardConfig;
use leptos::prelude::*;

use crate::components::board::Board;
use crate::state::sample_memos::sample_memos;

#[cfg(feature = "csr")]
fn page_config() -> BoardConfig {
    crate::util::board_config::load_page_config()
}

#[cfg(not(feature = "csr"))]
fn page_config() -> BoardConfig {
    BoardConfig::default()
}

/// Root component: one board filled with the bundled sample memos.
#[component]
pub fn App() -> impl IntoView {
    let config = page_config();
    let memos = sample_memos();
    view! {
        <main class="memo-app">
            <Board config=config memos=memos />
        </main>
    }
}
