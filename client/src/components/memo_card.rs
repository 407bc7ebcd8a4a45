//! Memo cards placed on the scene, and the preview of the memo being placed.

use canvas::camera::Point;
use canvas::memo::{Memo, MemoKind};
use canvas::render::PreviewCard as PreviewFrame;
use leptos::prelude::*;

use crate::util::board_style::card_style;

fn kind_class(kind: MemoKind) -> &'static str {
    match kind {
        MemoKind::LongForm => "memo-card memo-card--long",
        MemoKind::ShortForm => "memo-card memo-card--short",
    }
}

/// A memo already on the board.
#[component]
pub fn MemoCard(memo: Memo, width: f64, height: f64) -> impl IntoView {
    let style = card_style(Point::new(memo.position_x, memo.position_y), width, height);
    view! {
        <article class=kind_class(memo.kind) style=style>
            {memo.title.map(|title| view! { <h3 class="memo-card__title">{title}</h3> })}
            <p class="memo-card__content">{memo.content}</p>
            <footer class="memo-card__author">{memo.author}</footer>
        </article>
    }
}

/// The memo being placed. Clicking it pastes or un-pastes once the view is
/// fixed.
#[component]
pub fn PreviewMemoCard(preview: PreviewFrame, width: f64, height: f64, on_click: Callback<()>) -> impl IntoView {
    let style = card_style(preview.position, width, height);
    view! {
        <article
            class=kind_class(preview.kind)
            class:memo-card--preview=true
            class:memo-card--pasted=preview.pasted
            style=style
            on:click=move |_| on_click.run(())
        >
            <p class="memo-card__content">{preview.content}</p>
        </article>
    }
}
