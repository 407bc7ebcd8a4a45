//! Add button with its memo-type picker, and the ongoing-memo shortcut.

use canvas::memo::MemoKind;
use leptos::prelude::*;

const MEMO_KINDS: [MemoKind; 2] = [MemoKind::LongForm, MemoKind::ShortForm];

/// Floating "+" button. In Idle it opens the type picker; while a memo is
/// underway the engine turns a press into a discard prompt.
#[component]
pub fn AddMemoMenu(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] active: Signal<bool>,
    on_press: Callback<()>,
    on_choose: Callback<MemoKind>,
) -> impl IntoView {
    view! {
        <div class="add-memo">
            <Show when=move || open.get()>
                <ul class="add-memo__list">
                    {MEMO_KINDS
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <li>
                                    <button class="add-memo__item" on:click=move |_| on_choose.run(kind)>
                                        {kind.label()}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
            <button
                class="add-memo__button"
                class:add-memo__button--active=move || active.get()
                title="Add memo"
                on:click=move |_| on_press.run(())
            >
                "+"
            </button>
        </div>
    }
}

/// Re-opens the editor on the memo in progress.
#[component]
pub fn OngoingMemoButton(on_press: Callback<()>) -> impl IntoView {
    view! {
        <button class="ongoing-memo" title="Edit memo in progress" on:click=move |_| on_press.run(())>
            "Edit memo"
        </button>
    }
}
