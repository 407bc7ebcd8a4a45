//! Alignment grid drawn over the scene while a memo is being placed.

use canvas::grid::GridLine;
use leptos::prelude::*;

use crate::util::board_style::grid_line_style;

#[component]
pub fn GridOverlay(lines: Vec<GridLine>) -> impl IntoView {
    view! {
        <div class="grid-overlay">
            {lines
                .iter()
                .map(|line| {
                    view! {
                        <div class="grid-overlay__line" class:grid-overlay__line--heavy=line.heavy style=grid_line_style(line)></div>
                    }
                })
                .collect_view()}
        </div>
    }
}
