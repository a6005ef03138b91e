//! # User Notices
//!
//! The interface the cart and theme state push user-facing messages
//! through. The UI decides how a notice looks (the reference frontend shows
//! a toast sliding in from the top-right); this layer only decides when one
//! fires and what it says.

use serde::Serialize;
use tracing::{error, info};

/// Severity of a user notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    /// The operation worked ("added to cart").
    Success,
    /// The operation failed or recovered from a fault.
    Error,
    /// Neutral state change ("removed from cart", "cart cleared").
    Info,
}

/// Sink for user-facing notices.
///
/// Implemented by the UI bridge. Notices fire on both success and failure
/// paths, after the operation's outcome is settled.
pub trait Notifier: Send + Sync {
    /// Delivers one notice.
    fn notify(&self, message: &str, kind: NoticeKind);
}

/// Default sink: notices go to the log.
///
/// Useful in headless runs and as a stand-in until a UI bridge registers.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str, kind: NoticeKind) {
        match kind {
            NoticeKind::Error => error!(notice = message, "user notice"),
            NoticeKind::Success | NoticeKind::Info => info!(notice = message, "user notice"),
        }
    }
}
