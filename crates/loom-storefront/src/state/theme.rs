//! # Theme State
//!
//! The session's display theme: a two-value flag, persisted on every
//! toggle, loaded on startup. The UI applies the value to the document;
//! this state only owns the flag and its persistence.

use std::sync::Arc;

use tracing::{debug, error};

use loom_core::Theme;
use loom_storage::ThemeRepository;

use crate::notify::{NoticeKind, Notifier};

/// The session's theme preference.
pub struct ThemeState {
    theme: Theme,
    repo: ThemeRepository,
    notifier: Arc<dyn Notifier>,
}

impl ThemeState {
    /// Creates theme state with the default (light) theme. Call
    /// [`ThemeState::initialize`] to pick up the saved preference.
    pub fn new(repo: ThemeRepository, notifier: Arc<dyn Notifier>) -> Self {
        ThemeState {
            theme: Theme::default(),
            repo,
            notifier,
        }
    }

    /// Loads the saved preference; absent or unreadable values fall back
    /// to the default. Never fatal.
    pub fn initialize(&mut self) {
        self.theme = match self.repo.load() {
            Ok(Some(theme)) => theme,
            Ok(None) => Theme::default(),
            Err(err) => {
                error!(error = %err, "failed to load theme preference");
                Theme::default()
            }
        };
        debug!(theme = %self.theme, "theme initialized");
    }

    /// The current theme.
    pub fn current(&self) -> Theme {
        self.theme
    }

    /// Switches to the other theme, persists it, and announces the switch.
    ///
    /// A failed write keeps the in-session value; the preference simply
    /// won't survive into the next session.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();

        if let Err(err) = self.repo.save(self.theme) {
            error!(error = %err, "failed to persist theme preference");
        }

        self.notifier.notify(
            &format!("Switched to {} mode", self.theme),
            NoticeKind::Info,
        );

        self.theme
    }
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
