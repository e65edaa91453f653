//! The UI context every operation runs against.
//!
//! ARCHITECTURE
//! ============
//! [`UiKit`] replaces ambient lookups by element id with an explicit object:
//! it owns the notification and loader signals rendered by
//! [`crate::components`], knows whether the notification container exists,
//! and reaches timers and browser APIs only through its [`Scheduler`] and
//! [`Platform`]. Browser builds use [`UiKit::browser`]; tests pair
//! [`crate::timer::ManualScheduler`] with [`crate::platform::HeadlessPlatform`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "kit_test.rs"]
mod kit_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use crate::config::KitConfig;
use crate::platform::Platform;
use crate::state::loader::LoaderState;
use crate::state::notifications::{EXIT_ANIMATION_MS, Notification, NotificationId, NotificationState};
use crate::timer::{Scheduler, TimerHandle};
use crate::util::counter::{TextTarget, animate_counter};
use crate::util::debounce::{Debounced, debounce};
use crate::util::export::export_url;
use crate::util::severity::Severity;

thread_local! {
    static INSTALLED: RefCell<Option<UiKit>> = const { RefCell::new(None) };
}

/// A shown toast and the timer that will dismiss it.
///
/// Cancelling `timer` keeps the toast until it is closed by hand.
#[derive(Clone, Debug)]
pub struct NotificationHandle {
    pub id: NotificationId,
    pub timer: TimerHandle,
}

#[derive(Clone)]
pub struct UiKit {
    config: Rc<KitConfig>,
    notifications: RwSignal<NotificationState>,
    loader: RwSignal<LoaderState>,
    notifications_attached: Rc<Cell<bool>>,
    scheduler: Rc<dyn Scheduler>,
    platform: Rc<dyn Platform>,
}

impl UiKit {
    #[must_use]
    pub fn new(config: KitConfig, scheduler: Rc<dyn Scheduler>, platform: Rc<dyn Platform>) -> Self {
        Self {
            config: Rc::new(config),
            notifications: RwSignal::new(NotificationState::default()),
            loader: RwSignal::new(LoaderState::default()),
            notifications_attached: Rc::new(Cell::new(true)),
            scheduler,
            platform,
        }
    }

    /// Make `self` the kit that page script calls act on. Replaces any
    /// earlier one.
    pub fn install(&self) {
        INSTALLED.with(|slot| *slot.borrow_mut() = Some(self.clone()));
    }

    /// The kit set by [`UiKit::install`] on this thread.
    #[must_use]
    pub fn installed() -> Option<Self> {
        INSTALLED.with(|slot| slot.borrow().clone())
    }

    /// Kit backed by `setTimeout` and the real browser APIs.
    #[cfg(feature = "csr")]
    #[must_use]
    pub fn browser(config: KitConfig) -> Self {
        Self::new(
            config,
            Rc::new(crate::timer::BrowserScheduler),
            Rc::new(crate::platform::BrowserPlatform),
        )
    }

    #[must_use]
    pub fn config(&self) -> &KitConfig {
        &self.config
    }

    #[must_use]
    pub fn scheduler(&self) -> Rc<dyn Scheduler> {
        Rc::clone(&self.scheduler)
    }

    #[must_use]
    pub fn platform(&self) -> Rc<dyn Platform> {
        Rc::clone(&self.platform)
    }

    #[must_use]
    pub fn notifications(&self) -> RwSignal<NotificationState> {
        self.notifications
    }

    #[must_use]
    pub fn loader(&self) -> RwSignal<LoaderState> {
        self.loader
    }

    /// Drop all future notifications; used when the page has no container.
    pub fn detach_notifications(&self) {
        self.notifications_attached.set(false);
    }

    #[must_use]
    pub fn notifications_attached(&self) -> bool {
        self.notifications_attached.get()
    }

    /// Toasts currently on screen, oldest first.
    #[must_use]
    pub fn notification_snapshot(&self) -> Vec<Notification> {
        self.notifications.with_untracked(|s| s.items().to_vec())
    }

    // --- Notifications ---

    /// Show a toast for the configured default duration.
    pub fn show_notification(&self, message: impl Into<String>, severity: Severity) -> Option<NotificationHandle> {
        self.show_notification_for(message, severity, self.config.notification_duration_ms)
    }

    /// Show a toast, start its exit animation after `duration_ms`, and remove
    /// it once the animation finishes. Returns `None` when no container is
    /// mounted.
    pub fn show_notification_for(
        &self,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: u32,
    ) -> Option<NotificationHandle> {
        let message = message.into();
        if !self.notifications_attached.get() {
            log::debug!("notification dropped (no container): {message}");
            return None;
        }
        let id = self.notifications.try_update(|s| s.push(message, severity))?;

        let notifications = self.notifications;
        let scheduler = Rc::clone(&self.scheduler);
        let timer = self.scheduler.after(
            duration_ms,
            Box::new(move || {
                let leaving = notifications.try_update(|s| s.begin_exit(id)).unwrap_or(false);
                if leaving {
                    scheduler.after(
                        EXIT_ANIMATION_MS,
                        Box::new(move || {
                            notifications.update(|s| {
                                s.remove(id);
                            });
                        }),
                    );
                }
            }),
        );
        Some(NotificationHandle { id, timer })
    }

    /// Remove a toast immediately (its close button).
    pub fn dismiss_notification(&self, id: NotificationId) -> bool {
        self.notifications.try_update(|s| s.remove(id)).unwrap_or(false)
    }

    // --- Loader ---

    /// Show the overlay. Returns `false` if it was already showing.
    pub fn show_loader(&self) -> bool {
        self.loader.try_update(LoaderState::show).unwrap_or(false)
    }

    /// Hide the overlay. Returns `false` if it was not showing.
    pub fn hide_loader(&self) -> bool {
        self.loader.try_update(LoaderState::hide).unwrap_or(false)
    }

    #[must_use]
    pub fn loader_visible(&self) -> bool {
        self.loader.with_untracked(|s| s.is_visible())
    }

    // --- Browser helpers ---

    /// Ask the user to confirm through the blocking browser dialog.
    pub async fn confirm_action(&self, message: &str) -> bool {
        self.platform.confirm(message)
    }

    /// Copy `text` to the clipboard and report the outcome as a toast.
    /// Failures never propagate; the return value says whether it worked.
    pub async fn copy_to_clipboard(&self, text: &str) -> bool {
        let platform = Rc::clone(&self.platform);
        match platform.write_clipboard(text).await {
            Ok(()) => {
                self.show_notification(self.config.messages.copied.clone(), Severity::Success);
                true
            }
            Err(err) => {
                log::warn!("clipboard write failed: {err}");
                self.show_notification(self.config.messages.copy_failed.clone(), Severity::Error);
                false
            }
        }
    }

    /// Start a download by navigating to `endpoint?format=<format>`.
    ///
    /// The loader shows immediately and is hidden after the configured delay
    /// whether or not the navigation went through; the returned handle
    /// cancels that hide.
    pub fn export_data(&self, format: &str, endpoint: &str) -> TimerHandle {
        self.show_loader();
        let url = export_url(endpoint, format);
        match self.platform.navigate(&url) {
            Ok(()) => {
                self.show_notification(self.config.messages.export_started_for(format), Severity::Info);
            }
            Err(err) => {
                log::error!("export failed: url={url} error={err}");
                self.show_notification(self.config.messages.export_failed.clone(), Severity::Error);
            }
        }

        let loader = self.loader;
        self.scheduler.after(
            self.config.export_loader_delay_ms,
            Box::new(move || {
                loader.update(|s| {
                    s.hide();
                });
            }),
        )
    }

    // --- Timers ---

    /// Debounce `func` on this kit's scheduler.
    pub fn debounce<A: 'static>(&self, wait_ms: u32, func: impl Fn(A) + 'static) -> Debounced<A> {
        debounce(Rc::clone(&self.scheduler), wait_ms, func)
    }

    /// Animate `element` to `target` over the configured counter duration.
    pub fn animate_counter<T: TextTarget + 'static>(&self, element: T, target: i64) -> TimerHandle {
        self.animate_counter_for(element, target, self.config.counter_duration_ms)
    }

    pub fn animate_counter_for<T: TextTarget + 'static>(&self, element: T, target: i64, duration_ms: u32) -> TimerHandle {
        animate_counter(&self.scheduler, element, target, duration_ms)
    }
}
