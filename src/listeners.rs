//! Document-level listener bookkeeping.
//!
//! The host routes environment events into the controller; this module
//! tracks which hook groups are currently registered so that every arm is
//! paired with exactly one disarm and repeated open/close cycles never
//! accumulate registrations.
//!
//! Two groups exist because they arm at different times: view-change hooks
//! (resize + scroll) arm the moment the panel opens, dismissal hooks
//! (pointer-down + key-down) arm one tick later so the interaction that
//! opened the panel cannot also dismiss it.

use thiserror::Error;

/// Hooks registered per group: resize + scroll for view changes,
/// pointer-down + key-down for dismissal.
pub const HOOKS_PER_GROUP: usize = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArmError {
    #[error("view-change hooks already armed")]
    ViewAlreadyArmed,
    #[error("dismissal hooks already armed")]
    DismissAlreadyArmed,
}

#[derive(Debug, Default)]
pub struct ListenerSet {
    view: bool,
    dismiss: bool,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm_view(&mut self) -> Result<(), ArmError> {
        if self.view {
            return Err(ArmError::ViewAlreadyArmed);
        }
        self.view = true;
        tracing::debug!("armed view-change hooks");
        Ok(())
    }

    pub fn arm_dismiss(&mut self) -> Result<(), ArmError> {
        if self.dismiss {
            return Err(ArmError::DismissAlreadyArmed);
        }
        self.dismiss = true;
        tracing::debug!("armed dismissal hooks");
        Ok(())
    }

    /// Release every registration. Safe to call when nothing is armed.
    pub fn disarm_all(&mut self) {
        if self.view || self.dismiss {
            tracing::debug!("disarmed document hooks");
        }
        self.view = false;
        self.dismiss = false;
    }

    pub fn view_armed(&self) -> bool {
        self.view
    }

    pub fn dismiss_armed(&self) -> bool {
        self.dismiss
    }

    /// Number of live document-level registrations.
    pub fn active_count(&self) -> usize {
        usize::from(self.view) * HOOKS_PER_GROUP + usize::from(self.dismiss) * HOOKS_PER_GROUP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arm_disarm_pairing() {
        let mut set = ListenerSet::new();
        assert_eq!(set.active_count(), 0);
        set.arm_view().unwrap();
        assert_eq!(set.active_count(), HOOKS_PER_GROUP);
        set.arm_dismiss().unwrap();
        assert_eq!(set.active_count(), 2 * HOOKS_PER_GROUP);
        set.disarm_all();
        assert_eq!(set.active_count(), 0);
    }

    #[test]
    fn double_arm_is_an_error_not_a_duplicate() {
        let mut set = ListenerSet::new();
        set.arm_view().unwrap();
        assert_eq!(set.arm_view(), Err(ArmError::ViewAlreadyArmed));
        assert_eq!(set.active_count(), HOOKS_PER_GROUP);
        set.arm_dismiss().unwrap();
        assert_eq!(set.arm_dismiss(), Err(ArmError::DismissAlreadyArmed));
        assert_eq!(set.active_count(), 2 * HOOKS_PER_GROUP);
    }

    #[test]
    fn disarm_without_arm_is_a_no_op() {
        let mut set = ListenerSet::new();
        set.disarm_all();
        assert_eq!(set.active_count(), 0);
        set.arm_view().unwrap();
        set.disarm_all();
        set.disarm_all();
        assert_eq!(set.active_count(), 0);
    }
}
