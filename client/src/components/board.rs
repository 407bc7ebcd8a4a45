//! Board host: bridges DOM events and the `canvas` engine.
//!
//! ARCHITECTURE
//! ============
//! `EngineCore` owns every board rule. This component forwards input to it,
//! carries out the `Action`s it returns (clamp timer, browser prompts, focus)
//! and re-renders from the `BoardFrame` snapshot.

use canvas::config::BoardConfig;
use canvas::engine::{Action, EngineCore};
use canvas::memo::{Memo as BoardMemo, MemoKind};
use leptos::prelude::*;

use crate::components::add_memo_menu::{AddMemoMenu, OngoingMemoButton};
use crate::components::confirm_strip::ConfirmStrip;
use crate::components::grid_overlay::GridOverlay;
use crate::components::memo_card::{MemoCard, PreviewMemoCard};
use crate::components::memo_edit_dialog::MemoEditDialog;
use crate::components::zoom_controls::ZoomControls;
use crate::net::submit::LocalSubmitter;
use crate::state::board::{BoardUiState, Notice};
use crate::util::board_input::{board_owns_wheel, map_key, map_modifiers, map_wheel};
#[cfg(feature = "csr")]
use crate::util::board_input::pointer_point;
use crate::util::board_style::{board_box_class, board_box_style, scene_style};

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;

/// Handles shared by every event handler. All fields are arena handles, so the
/// host is `Copy` and can move into any number of closures.
#[derive(Clone, Copy)]
struct BoardHost {
    engine: StoredValue<EngineCore, LocalStorage>,
    submitter: StoredValue<LocalSubmitter, LocalStorage>,
    #[cfg(feature = "csr")]
    clamp_timer: StoredValue<Option<Timeout>, LocalStorage>,
    ui: RwSignal<BoardUiState>,
    container_ref: NodeRef<leptos::html::Div>,
    board_ref: NodeRef<leptos::html::Div>,
}

impl BoardHost {
    /// Run one engine call and carry out its actions. Returns whether the
    /// engine handled the input.
    fn dispatch(self, call: impl FnOnce(&mut EngineCore) -> Vec<Action>) -> bool {
        let actions = self.engine.try_update_value(call).unwrap_or_default();
        let handled = !actions.is_empty();
        self.process(actions);
        handled
    }

    fn process(self, actions: Vec<Action>) {
        let mut render = false;
        for action in actions {
            match action {
                Action::RenderNeeded => render = true,
                Action::ScheduleClamp { generation, delay_ms } => self.schedule_clamp(generation, delay_ms),
                Action::FocusBoard => self.focus_board(),
                Action::Prompt(prompt) => {
                    let accepted = confirm_prompt(prompt.message());
                    let follow_up = self
                        .engine
                        .try_update_value(|engine| {
                            self.submitter.try_update_value(|submitter| engine.resolve_prompt(accepted, submitter))
                        })
                        .flatten()
                        .unwrap_or_default();
                    self.process(follow_up);
                }
                Action::MemoPosted => self.notify(Notice::Posted),
                Action::SubmitFailed(err) => self.notify(Notice::submit_failed(&err)),
            }
        }
        if render {
            self.refresh();
        }
    }

    fn refresh(self) {
        if let Some(frame) = self.engine.try_with_value(EngineCore::frame) {
            self.ui.update(|ui| {
                ui.apply_frame(frame);
            });
        }
    }

    fn notify(self, notice: Notice) {
        show_alert(&notice.message());
        self.ui.update(|ui| ui.last_notice = Some(notice));
    }

    fn teardown(self) {
        if self.engine.try_update_value(EngineCore::cancel_clamp) == Some(true) {
            log::debug!("board: dropped pending clamp on unmount");
        }
        #[cfg(feature = "csr")]
        if let Some(Some(timer)) = self.clamp_timer.try_update_value(Option::take) {
            drop(timer);
        }
    }

    #[cfg(feature = "csr")]
    fn schedule_clamp(self, generation: u64, delay_ms: u32) {
        let timeout = Timeout::new(delay_ms, move || {
            self.dispatch(|engine| engine.fire_clamp(generation));
        });
        // Replacing the handle drops (and cancels) the previous timer.
        self.clamp_timer.try_update_value(move |slot| *slot = Some(timeout));
    }

    #[cfg(not(feature = "csr"))]
    fn schedule_clamp(self, generation: u64, delay_ms: u32) {
        log::trace!("board: clamp {generation} in {delay_ms}ms (no timer outside the browser)");
    }

    #[cfg(feature = "csr")]
    fn focus_board(self) {
        if let Some(board) = self.board_ref.get_untracked() {
            if let Err(err) = board.focus() {
                log::debug!("board: focus failed: {err:?}");
            }
        }
    }

    #[cfg(not(feature = "csr"))]
    fn focus_board(self) {}

    #[cfg(feature = "csr")]
    fn sync_viewport(self) {
        let Some((width, height)) = viewport_size() else {
            log::warn!("board: window size unavailable");
            return;
        };
        self.dispatch(|engine| engine.set_viewport(width, height));
    }

    #[cfg(feature = "csr")]
    fn pointer(self, ev: &leptos::ev::PointerEvent) -> canvas::camera::Point {
        pointer_point(ev, self.container_ref.get_untracked().as_ref())
    }

    #[cfg(not(feature = "csr"))]
    fn pointer(self, ev: &leptos::ev::PointerEvent) -> canvas::camera::Point {
        canvas::camera::Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
    }
}

#[cfg(feature = "csr")]
fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

#[cfg(feature = "csr")]
fn confirm_prompt(message: &str) -> bool {
    match web_sys::window().map(|w| w.confirm_with_message(message)) {
        Some(Ok(accepted)) => accepted,
        Some(Err(err)) => {
            log::warn!("board: confirm dialog failed: {err:?}");
            false
        }
        None => false,
    }
}

#[cfg(not(feature = "csr"))]
fn confirm_prompt(message: &str) -> bool {
    log::debug!("board: declining prompt outside the browser: {message}");
    false
}

#[cfg(feature = "csr")]
fn show_alert(message: &str) {
    if let Some(Err(err)) = web_sys::window().map(|w| w.alert_with_message(message)) {
        log::warn!("board: alert failed: {err:?}");
    }
}

#[cfg(not(feature = "csr"))]
fn show_alert(message: &str) {
    log::info!("board: {message}");
}

/// The whole board page: scene, overlays and floating controls.
#[component]
pub fn Board(config: BoardConfig, memos: Vec<BoardMemo>) -> impl IntoView {
    let card_width = config.card_width;
    let card_height = config.card_height;

    let mut core = EngineCore::new(config);
    core.load_memos(memos);
    log::info!("board: {} memos loaded", core.memos().len());

    let ui = RwSignal::new(BoardUiState::new(core.frame()));
    let host = BoardHost {
        engine: StoredValue::new_local(core),
        submitter: StoredValue::new_local(LocalSubmitter::new()),
        #[cfg(feature = "csr")]
        clamp_timer: StoredValue::new_local(None),
        ui,
        container_ref: NodeRef::new(),
        board_ref: NodeRef::new(),
    };

    // Everything below reads the frame through a memo so editor keystrokes
    // (which only touch `editor_text`) don't re-render the scene.
    let frame = Memo::new(move |_| ui.with(|u| u.frame.clone()));
    let editor_kind = Memo::new(move |_| frame.with(|f| f.editor.as_ref().map(|d| d.kind)));

    #[cfg(feature = "csr")]
    let resize = {
        host.sync_viewport();
        window_event_listener(leptos::ev::resize, move |_| host.sync_viewport())
    };
    #[cfg(feature = "csr")]
    Effect::new(move |_| {
        if host.board_ref.get().is_some() {
            host.focus_board();
        }
    });
    on_cleanup(move || {
        #[cfg(feature = "csr")]
        resize.remove();
        host.teardown();
    });

    // --- Board input ---

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let point = host.pointer(&ev);
        // A fixed view ignores the press; capturing anyway would steal the
        // click from the preview card.
        if !host.dispatch(|engine| engine.on_pointer_down(point)) {
            return;
        }
        #[cfg(feature = "csr")]
        if let Some(board) = host.board_ref.get_untracked() {
            if let Err(err) = board.set_pointer_capture(ev.pointer_id()) {
                log::debug!("board: pointer capture failed: {err:?}");
            }
        }
    };
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let point = host.pointer(&ev);
        host.dispatch(|engine| engine.on_pointer_move(point));
    };
    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        host.dispatch(EngineCore::on_pointer_up);
    };
    let on_wheel = move |ev: leptos::ev::WheelEvent| {
        let delta = map_wheel(ev.delta_x(), ev.delta_y());
        let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
        if board_owns_wheel(modifiers) {
            ev.prevent_default();
        }
        host.dispatch(|engine| engine.on_wheel(delta, modifiers));
    };
    let on_key_down = move |ev: leptos::ev::KeyboardEvent| {
        if ev.repeat() && ev.code() == "Space" {
            return;
        }
        let key = map_key(ev.code());
        let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
        if host.dispatch(move |engine| engine.on_key_down(&key, modifiers)) {
            ev.prevent_default();
        }
    };

    // --- Control callbacks ---

    let zoom_in = Callback::new(move |()| {
        host.dispatch(EngineCore::zoom_in);
    });
    let zoom_out = Callback::new(move |()| {
        host.dispatch(EngineCore::zoom_out);
    });
    let reset_view = Callback::new(move |()| {
        host.dispatch(EngineCore::reset_view);
    });
    let press_add = Callback::new(move |()| {
        host.dispatch(EngineCore::press_add_button);
    });
    let choose_kind = Callback::new(move |kind: MemoKind| {
        host.dispatch(|engine| engine.choose_kind(kind));
    });
    let reopen_editor = Callback::new(move |()| {
        host.dispatch(EngineCore::reopen_editor);
    });
    let confirm = Callback::new(move |()| {
        host.dispatch(EngineCore::confirm);
    });
    let cancel_posting = Callback::new(move |()| {
        host.dispatch(EngineCore::cancel_posting);
    });
    let click_preview = Callback::new(move |()| {
        host.dispatch(EngineCore::click_preview);
    });
    let editor_input = Callback::new(move |text: String| ui.update(|u| u.editor_text = text));
    let editor_save = Callback::new(move |()| {
        let text = ui.with_untracked(|u| u.editor_text.clone());
        host.dispatch(move |engine| engine.commit_content(text));
    });
    let editor_cancel = Callback::new(move |()| {
        host.dispatch(EngineCore::close_editor);
    });

    view! {
        <div class="memo-board" node_ref=host.container_ref>
            <div
                class=move || frame.with(board_box_class)
                style=move || frame.with(board_box_style)
                node_ref=host.board_ref
                tabindex="1"
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_up
                on:wheel=on_wheel
                on:keydown=on_key_down
            >
                <div class="memo-board__scene" style=move || frame.with(scene_style)>
                    {move || {
                        let lines = frame.with(|f| f.grid.clone());
                        (!lines.is_empty()).then(|| view! { <GridOverlay lines=lines /> })
                    }}
                    <For
                        each=move || frame.with(|f| f.memos.clone())
                        key=|memo| memo.id
                        children=move |memo| view! { <MemoCard memo=memo width=card_width height=card_height /> }
                    />
                    {move || {
                        frame
                            .with(|f| f.preview.clone())
                            .map(|preview| {
                                view! {
                                    <PreviewMemoCard
                                        preview=preview
                                        width=card_width
                                        height=card_height
                                        on_click=click_preview
                                    />
                                }
                            })
                    }}
                </div>
            </div>

            <Show when=move || frame.with(|f| f.show_zoom_controls)>
                <ZoomControls
                    level=Signal::derive(move || frame.with(|f| f.level))
                    can_zoom_in=Signal::derive(move || frame.with(|f| f.can_zoom_in))
                    can_zoom_out=Signal::derive(move || frame.with(|f| f.can_zoom_out))
                    on_zoom_in=zoom_in
                    on_zoom_out=zoom_out
                    on_reset=reset_view
                />
            </Show>

            <div class="memo-board__ongoing">
                <Show when=move || frame.with(|f| f.show_ongoing_memo)>
                    <OngoingMemoButton on_press=reopen_editor />
                </Show>
            </div>

            <AddMemoMenu
                open=Signal::derive(move || frame.with(|f| f.add_menu_open))
                active=Signal::derive(move || frame.with(|f| f.add_button_active))
                on_press=press_add
                on_choose=choose_kind
            />

            <ConfirmStrip
                strip=Signal::derive(move || frame.with(|f| f.confirm_strip.clone()))
                on_confirm=confirm
                on_cancel=cancel_posting
            />

            {move || {
                editor_kind
                    .get()
                    .map(|kind| {
                        view! {
                            <MemoEditDialog
                                kind=kind
                                value=Signal::derive(move || ui.with(|u| u.editor_text.clone()))
                                on_input=editor_input
                                on_cancel=editor_cancel
                                on_save=editor_save
                            />
                        }
                    })
            }}
        </div>
    }
}
