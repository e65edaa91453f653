//! Full-page loading overlay.

use leptos::prelude::*;

use crate::state::loader::LoaderState;

/// Inline style of the overlay; the spinner itself is styled by the page's
/// `.loader` rule.
pub const LOADER_STYLE: &str = "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); \
    backdrop-filter: blur(4px); display: flex; align-items: center; \
    justify-content: center; z-index: 9999;";

/// Blocking overlay shown while `loader` is visible.
#[component]
pub fn LoaderOverlay(loader: RwSignal<LoaderState>, #[prop(into)] id: String) -> impl IntoView {
    let visible = move || loader.with(|s| s.is_visible());

    view! {
        <Show when=visible>
            <div id=id.clone() style=LOADER_STYLE>
                <div class="loader"></div>
            </div>
        </Show>
    }
}
