//! Auto-dismissing notice banner ("Added to cart", "Order placed").
//!
//! A [`Notice`] holds at most one message. Showing a new message cancels the
//! pending dismiss timer of the previous one, and dropping the notice cancels
//! any pending timer so it never fires against torn-down state.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Default time a notice stays visible.
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    message: Option<String>,
}

/// Read-only handle to a notice's current message.
#[derive(Debug, Clone)]
pub struct NoticeView {
    slot: Arc<Mutex<Slot>>,
}

impl NoticeView {
    /// The message currently shown, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .message
            .clone()
    }
}

/// A single auto-dismissing banner.
///
/// [`Notice::show`] spawns the dismiss timer on the current tokio runtime and
/// must be called from within one.
#[derive(Debug)]
pub struct Notice {
    slot: Arc<Mutex<Slot>>,
    ttl: Duration,
    timer: Option<JoinHandle<()>>,
}

impl Default for Notice {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL)
    }
}

impl Notice {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            ttl,
            timer: None,
        }
    }

    #[must_use]
    pub fn view(&self) -> NoticeView {
        NoticeView {
            slot: Arc::clone(&self.slot),
        }
    }

    /// The message currently shown, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.view().message()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.timer.as_ref().is_some_and(|timer| !timer.is_finished())
    }

    /// Show `message`, replacing any current one and restarting the timer.
    pub fn show(&mut self, message: impl Into<String>) {
        self.cancel_timer();

        let generation = {
            let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
            slot.generation = slot.generation.wrapping_add(1);
            slot.message = Some(message.into());
            slot.generation
        };

        let slot = Arc::clone(&self.slot);
        let ttl = self.ttl;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut slot = slot.lock().unwrap_or_else(PoisonError::into_inner);
            // A newer message may have landed after this timer was aborted.
            if slot.generation == generation {
                slot.message = None;
            }
        }));
    }

    /// Hide the current message immediately.
    pub fn dismiss(&mut self) {
        self.cancel_timer();
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .message = None;
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for Notice {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
