//! Scoped text-selection suppression
//!
//! Disabling text selection is a document-wide side effect shared by every
//! gesture. Each gesture takes a [`NoSelectGuard`]; the first hold disables
//! selection and dropping the last one re-enables it. Release happens in
//! `Drop`, so a gesture torn down mid-flight (modal closed, controller
//! dropped) still gives the document back its selection.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use super::ModalHost;

struct LockState {
    host: Rc<dyn ModalHost>,
    holds: Cell<u32>,
}

/// Hold counter over the host's text-selection flag
#[derive(Clone)]
pub struct SelectionLock {
    state: Rc<LockState>,
}

impl SelectionLock {
    /// Create a lock over the given host
    pub fn new(host: Rc<dyn ModalHost>) -> Self {
        Self {
            state: Rc::new(LockState {
                host,
                holds: Cell::new(0),
            }),
        }
    }

    /// Take a hold, disabling selection if this is the first one
    pub fn acquire(&self) -> NoSelectGuard {
        let holds = self.state.holds.get();
        if holds == 0 {
            debug!("text selection disabled");
            self.state.host.set_text_selection(false);
        }
        self.state.holds.set(holds + 1);
        NoSelectGuard {
            state: Rc::clone(&self.state),
        }
    }

    /// Number of live guards
    pub fn holds(&self) -> u32 {
        self.state.holds.get()
    }

    /// Whether selection is currently suppressed by this lock
    pub fn is_suppressed(&self) -> bool {
        self.holds() > 0
    }
}

impl fmt::Debug for SelectionLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionLock")
            .field("holds", &self.holds())
            .finish()
    }
}

/// One hold on a [`SelectionLock`], released on drop
#[must_use = "selection is re-enabled as soon as the guard is dropped"]
pub struct NoSelectGuard {
    state: Rc<LockState>,
}

impl Drop for NoSelectGuard {
    fn drop(&mut self) {
        let holds = self.state.holds.get().saturating_sub(1);
        self.state.holds.set(holds);
        if holds == 0 {
            debug!("text selection restored");
            self.state.host.set_text_selection(true);
        }
    }
}

impl fmt::Debug for NoSelectGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoSelectGuard")
            .field("holds", &self.state.holds.get())
            .finish()
    }
}
