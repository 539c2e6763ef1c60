use library_core::BookKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One-line message shown above the table until dismissed or replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub(in crate::app) kind: NoticeKind,
    pub(in crate::app) text: String,
}

impl Notice {
    pub(in crate::app) fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub(in crate::app) fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Destructive action waiting for the user to confirm or cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingConfirmation {
    Delete { key: BookKey, position: usize },
    ClearAll,
}

impl PendingConfirmation {
    pub(in crate::app) fn prompt(&self) -> &'static str {
        match self {
            PendingConfirmation::Delete { .. } => super::DELETE_PROMPT,
            PendingConfirmation::ClearAll => super::CLEAR_PROMPT,
        }
    }
}
