//! Modal dialog for writing the content of the memo being composed.

use canvas::memo::MemoKind;
use leptos::prelude::*;

use crate::util::board_input::{EditorKey, editor_key};

/// Dialog shown while the memo editor is open.
#[component]
pub fn MemoEditDialog(
    kind: MemoKind,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    on_cancel: Callback<()>,
    on_save: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match editor_key(&ev.key(), ev.ctrl_key() || ev.meta_key()) {
        Some(EditorKey::Save) => {
            ev.prevent_default();
            on_save.run(());
        }
        Some(EditorKey::Cancel) => {
            ev.prevent_default();
            on_cancel.run(());
        }
        None => {}
    };
    let rows = match kind {
        MemoKind::LongForm => 8,
        MemoKind::ShortForm => 2,
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--memo" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown>
                <label class="dialog__label">
                    {kind.label()}
                    <textarea
                        class="dialog__textarea"
                        rows=rows
                        prop:value=move || value.get()
                        on:input=move |ev| on_input.run(event_target_value(&ev))
                        autofocus=true
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_save.run(())>
                        "Done"
                    </button>
                </div>
            </div>
        </div>
    }
}
