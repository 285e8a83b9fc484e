use serde::{Deserialize, Serialize};

/// Body returned by the registration endpoint.
///
/// Both flags are kept: the backend does not guarantee they are mutually
/// exclusive, so callers check `error` first and `success` second.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationReply {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl RegistrationReply {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            error: false,
            success: true,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: true,
            success: false,
            message: message.into(),
        }
    }
}

/// A toast shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Views reachable from the registration flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Register,
    Login,
}

impl Route {
    /// Default path of the route; routers may map it elsewhere.
    pub fn default_path(self) -> &'static str {
        match self {
            Route::Register => "/register",
            Route::Login => "/login",
        }
    }
}
