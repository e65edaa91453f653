//! Toast stack rendered into the page's notification container.
//!
//! Cards are keyed by id and phase, so a toast entering its exit phase is
//! re-rendered with the slide-out animation. Messages are text nodes; markup
//! in a message is shown literally.

#[cfg(test)]
#[path = "notification_host_test.rs"]
mod notification_host_test;

use leptos::prelude::*;

use crate::state::notifications::{Notification, NotificationPhase, NotificationState};
use crate::util::severity::Severity;

const EXIT_ANIMATION: &str = "animation: slideOutRight 0.3s ease-out";

/// Renders every toast in `notifications`, oldest first.
#[component]
pub fn NotificationHost(notifications: RwSignal<NotificationState>) -> impl IntoView {
    let items = move || notifications.with(|s| s.items().to_vec());

    view! {
        <For
            each=items
            key=|n: &Notification| (n.id, n.phase)
            children=move |n: Notification| view! { <NotificationCard notification=n notifications=notifications /> }
        />
    }
}

#[component]
fn NotificationCard(notification: Notification, notifications: RwSignal<NotificationState>) -> impl IntoView {
    let id = notification.id;
    let severity = notification.severity;
    let on_close = move |_| {
        notifications.update(|s| {
            s.remove(id);
        });
    };

    view! {
        <div class=card_class(severity) style=card_style(notification.phase)>
            <i class=icon_class(severity) style=icon_style(severity)></i>
            <span class="notification-message">{notification.message}</span>
            <button class="notification-close" on:click=on_close title="Close">
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}

fn card_class(severity: Severity) -> String {
    format!("notification notification-{}", severity.as_str())
}

fn card_style(phase: NotificationPhase) -> Option<&'static str> {
    match phase {
        NotificationPhase::Visible => None,
        NotificationPhase::Leaving => Some(EXIT_ANIMATION),
    }
}

fn icon_class(severity: Severity) -> String {
    format!("fas {}", severity.style().icon)
}

fn icon_style(severity: Severity) -> String {
    format!("color: {}; font-size: 1.25rem;", severity.style().color)
}
