//! Bottom-centre control shown while placing a memo.

use canvas::render::ConfirmStrip as ConfirmStripFrame;
use leptos::prelude::*;

#[component]
pub fn ConfirmStrip(
    #[prop(into)] strip: Signal<Option<ConfirmStripFrame>>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    move || {
        strip.get().map(|strip| {
            view! {
                <div class="confirm-strip">
                    <button
                        class="confirm-strip__confirm"
                        class:confirm-strip__confirm--active=strip.active
                        on:click=move |_| on_confirm.run(())
                    >
                        <kbd class="confirm-strip__key">{strip.key_hint}</kbd>
                        <span class="confirm-strip__label">{strip.label}</span>
                    </button>
                    <button class="confirm-strip__cancel" title="Discard memo" on:click=move |_| on_cancel.run(())>
                        "x"
                    </button>
                </div>
            }
        })
    }
}
