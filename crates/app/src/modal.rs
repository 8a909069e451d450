//! Auth modal state
//!
//! Two tabs, login and register, with mutually exclusive visibility.
//! Switching tabs only changes which form is displayed; it never touches
//! the account store.

/// The two auth-modal tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTab {
    Login,
    Register,
}

/// The modal is either closed or open on a specific tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthModal {
    Closed,
    Open { tab: AuthTab },
}

impl AuthModal {
    pub fn new() -> Self {
        Self::Closed
    }

    /// Open the modal on the given tab
    pub fn open(&mut self, tab: AuthTab) {
        *self = Self::Open { tab };
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Switch the displayed tab. A no-op while the modal is closed.
    pub fn switch_tab(&mut self, tab: AuthTab) {
        if let Self::Open { .. } = self {
            *self = Self::Open { tab };
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn active_tab(&self) -> Option<AuthTab> {
        match self {
            Self::Open { tab } => Some(*tab),
            Self::Closed => None,
        }
    }
}

impl Default for AuthModal {
    fn default() -> Self {
        Self::new()
    }
}
