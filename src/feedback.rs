use crate::api::{ApiError, Mutation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Error }
    }

    pub fn class(&self, visible: bool) -> String {
        let tone = match self.kind {
            StatusKind::Success => "message--success",
            StatusKind::Error => "message--error",
        };
        if visible {
            format!("message {tone}")
        } else {
            format!("message {tone} message--hidden")
        }
    }
}

/// What the view does once a signup/unregister request settles.
#[derive(Debug, Clone, PartialEq)]
pub struct AfterMutation {
    pub status: StatusMessage,
    pub reset_form: bool,
    pub reload: bool,
}

impl AfterMutation {
    pub fn plan(kind: Mutation, result: &Result<String, ApiError>) -> Self {
        match result {
            Ok(message) => Self {
                status: StatusMessage::success(message.clone()),
                reset_form: kind == Mutation::Signup,
                reload: true,
            },
            Err(e) => Self {
                status: StatusMessage::error(e.user_message(kind.transport_failure())),
                reset_form: false,
                reload: false,
            },
        }
    }
}
