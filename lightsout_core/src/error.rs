use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameErrorKind {
    Profile,
    State,
    Store,
}

impl GameErrorKind {
    pub(crate) fn from_code(code: &'static str) -> Self {
        match code {
            // Player profile rejected before a tournament starts
            "E1001" | "E1002" | "E1003" => Self::Profile,

            // Caller contract violations on the aggregator or session
            "E2001" | "E2002" | "E2003" => Self::State,

            // Score store collaborator
            "E3001" | "E3002" | "E3003" => Self::Store,

            _ => Self::State,
        }
    }
}

#[derive(Debug, Error, Clone)]
#[error("{code}: {message}")]
pub struct GameError {
    pub code: &'static str,
    pub kind: GameErrorKind,
    pub message: String,

    pub field: Option<&'static str>,
    pub path: Option<String>,
}

impl GameError {
    pub(crate) fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            kind: GameErrorKind::from_code(code),
            message: message.into(),
            field: None,
            path: None,
        }
    }

    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn is_profile(&self) -> bool {
        self.kind == GameErrorKind::Profile
    }
}
