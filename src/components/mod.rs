//! Leptos hosts for kit-owned UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend renders the page; these components only own the toast stack
//! and the loading overlay. Both render straight from the signals held by
//! [`crate::UiKit`], so kit operations never touch the DOM themselves.

pub mod loader_overlay;
pub mod notification_host;

/// Mount the notification host into its container and the loader overlay
/// into `<body>`.
///
/// A page without the container gets no toasts: the kit is marked detached
/// and every later notification is a silent no-op.
#[cfg(feature = "csr")]
pub fn mount_hosts(kit: &crate::UiKit) {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use loader_overlay::LoaderOverlay;
    use notification_host::NotificationHost;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        kit.detach_notifications();
        return;
    };

    let container_id = &kit.config().notification_container_id;
    let container = document
        .get_element_by_id(container_id)
        .map(|el| el.dyn_into::<web_sys::HtmlElement>());
    match container {
        Some(Ok(container)) => {
            let notifications = kit.notifications();
            leptos::mount::mount_to(container, move || view! { <NotificationHost notifications=notifications /> })
                .forget();
        }
        Some(Err(_)) | None => {
            log::debug!("notification container #{container_id} not found; notifications disabled");
            kit.detach_notifications();
        }
    }

    let loader = kit.loader();
    let loader_id = kit.config().loader_id.clone();
    if document.body().is_some() {
        leptos::mount::mount_to_body(move || view! { <LoaderOverlay loader=loader id=loader_id.clone() /> });
    } else {
        log::warn!("document has no <body>; loader overlay not mounted");
    }
}
