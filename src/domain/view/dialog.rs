use crate::domain::entities::record::RecordAction;

/// Confirmation dialog for a single mutating action.
///
/// `Closed -> Open -> Pending -> Closed` on success, `Pending -> Open` with the
/// error kept on failure so the user can retry or cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActionDialog {
    #[default]
    Closed,
    Open {
        target: String,
        action: RecordAction,
        error: Option<String>,
    },
    Pending {
        target: String,
        action: RecordAction,
    },
}

impl ActionDialog {
    pub fn open(&mut self, target: &str, action: RecordAction) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = ActionDialog::Open {
            target: target.to_string(),
            action,
            error: None,
        };
        true
    }

    pub fn cancel(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = ActionDialog::Closed;
        true
    }

    /// Moves an open dialog to pending and hands back what to run.
    /// Returns `None` when closed or already pending.
    pub fn begin(&mut self) -> Option<(String, RecordAction)> {
        let ActionDialog::Open { target, action, .. } = self else {
            return None;
        };
        let started = (target.clone(), action.clone());
        *self = ActionDialog::Pending {
            target: started.0.clone(),
            action: started.1.clone(),
        };
        Some(started)
    }

    pub fn finish(&mut self, result: Result<(), String>) {
        let ActionDialog::Pending { target, action } = self else {
            return;
        };
        *self = match result {
            Ok(()) => ActionDialog::Closed,
            Err(message) => ActionDialog::Open {
                target: target.clone(),
                action: action.clone(),
                error: Some(message),
            },
        };
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, ActionDialog::Closed)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ActionDialog::Pending { .. })
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            ActionDialog::Closed => None,
            ActionDialog::Open { target, .. } | ActionDialog::Pending { target, .. } => {
                Some(target)
            }
        }
    }

    pub fn action(&self) -> Option<&RecordAction> {
        match self {
            ActionDialog::Closed => None,
            ActionDialog::Open { action, .. } | ActionDialog::Pending { action, .. } => {
                Some(action)
            }
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ActionDialog::Open { error, .. } => error.as_deref(),
            _ => None,
        }
    }
}
