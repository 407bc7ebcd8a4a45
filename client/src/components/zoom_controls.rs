//! Zoom in / level / zoom out / reset column.

use leptos::prelude::*;

#[component]
pub fn ZoomControls(
    #[prop(into)] level: Signal<u32>,
    #[prop(into)] can_zoom_in: Signal<bool>,
    #[prop(into)] can_zoom_out: Signal<bool>,
    on_zoom_in: Callback<()>,
    on_zoom_out: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="zoom-controls">
            <button
                class="zoom-controls__button"
                title="Zoom in"
                disabled=move || !can_zoom_in.get()
                on:click=move |_| on_zoom_in.run(())
            >
                "+"
            </button>
            <label class="zoom-controls__level">{move || level.get()}</label>
            <button
                class="zoom-controls__button"
                title="Zoom out"
                disabled=move || !can_zoom_out.get()
                on:click=move |_| on_zoom_out.run(())
            >
                "-"
            </button>
            <button class="zoom-controls__reset" title="Reset view" on:click=move |_| on_reset.run(())>
                "reset"
            </button>
        </div>
    }
}
