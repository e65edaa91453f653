//! Toast notification list.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::util::severity::Severity;

/// Length of the slide-out animation before a toast is removed.
pub const EXIT_ANIMATION_MS: u32 = 300;

pub type NotificationId = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NotificationPhase {
    #[default]
    Visible,
    /// Slide-out animation running; removal follows.
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub phase: NotificationPhase,
}

/// Displayed toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    next_id: NotificationId,
    items: Vec<Notification>,
}

impl NotificationState {
    /// Append a visible toast and return its id. Ids are never reused.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            message: message.into(),
            severity,
            phase: NotificationPhase::Visible,
        });
        id
    }

    /// Move a toast into its exit animation. Returns `false` if it is gone
    /// or already leaving.
    pub fn begin_exit(&mut self, id: NotificationId) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(item) if item.phase == NotificationPhase::Visible => {
                item.phase = NotificationPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    #[must_use]
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
