//! Approval requests raised by contractors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("Notification not found: {0}")]
    NotFound(u32),
    #[error("Notification {id} was already {status}")]
    AlreadyDecided { id: u32, status: NotificationStatus },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    CheckIn,
    Overtime,
}

impl NotificationKind {
    pub fn title(&self) -> &'static str {
        match self {
            NotificationKind::CheckIn => "Check-in Override Request",
            NotificationKind::Overtime => "Overtime Request",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            NotificationStatus::Pending => "pending",
            NotificationStatus::Approved => "approved",
            NotificationStatus::Rejected => "rejected",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub contractor_name: String,
    /// Relative time shown on the card, e.g. "2 hours ago".
    pub received: String,
    #[serde(default)]
    pub status: NotificationStatus,
}

impl Notification {
    pub fn new(
        id: u32,
        kind: NotificationKind,
        contractor_name: impl Into<String>,
        received: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind,
            contractor_name: contractor_name.into(),
            received: received.into(),
            status: NotificationStatus::Pending,
        }
    }
}

/// In-memory list of notifications with approve/reject decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inbox {
    notifications: Vec<Notification>,
}

impl Inbox {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    pub fn all(&self) -> &[Notification] {
        &self.notifications
    }

    /// Notifications still awaiting a decision.
    pub fn pending(&self) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| n.status == NotificationStatus::Pending)
            .collect()
    }

    pub fn approve(&mut self, id: u32) -> Result<&Notification, NotificationError> {
        self.decide(id, NotificationStatus::Approved)
    }

    pub fn reject(&mut self, id: u32) -> Result<&Notification, NotificationError> {
        self.decide(id, NotificationStatus::Rejected)
    }

    fn decide(
        &mut self,
        id: u32,
        status: NotificationStatus,
    ) -> Result<&Notification, NotificationError> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(NotificationError::NotFound(id))?;

        if notification.status != NotificationStatus::Pending {
            return Err(NotificationError::AlreadyDecided {
                id,
                status: notification.status,
            });
        }

        notification.status = status;
        tracing::info!(
            id,
            kind = ?notification.kind,
            contractor = %notification.contractor_name,
            %status,
            "notification decided"
        );
        Ok(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inbox() -> Inbox {
        Inbox::new(vec![
            Notification::new(1, NotificationKind::CheckIn, "John Doe", "2 hours ago"),
            Notification::new(2, NotificationKind::Overtime, "Jane Smith", "1 hour ago"),
        ])
    }

    #[test]
    fn test_titles() {
        assert_eq!(NotificationKind::CheckIn.title(), "Check-in Override Request");
        assert_eq!(NotificationKind::Overtime.title(), "Overtime Request");
    }

    #[test]
    fn test_approve_and_reject() {
        let mut inbox = inbox();
        assert_eq!(inbox.pending().len(), 2);

        let approved = inbox.approve(1).unwrap();
        assert_eq!(approved.status, NotificationStatus::Approved);

        inbox.reject(2).unwrap();
        assert!(inbox.pending().is_empty());
        assert_eq!(inbox.all()[1].status, NotificationStatus::Rejected);
    }

    #[test]
    fn test_unknown_id() {
        let mut inbox = inbox();
        assert_eq!(inbox.approve(9), Err(NotificationError::NotFound(9)));
    }

    #[test]
    fn test_cannot_decide_twice() {
        let mut inbox = inbox();
        inbox.approve(1).unwrap();
        let err = inbox.reject(1).unwrap_err();
        assert_eq!(
            err,
            NotificationError::AlreadyDecided {
                id: 1,
                status: NotificationStatus::Approved
            }
        );
        assert_eq!(err.to_string(), "Notification 1 was already approved");
    }
}
