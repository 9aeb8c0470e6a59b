use serde::{Deserialize, Serialize};

/// Known contact details for the signed-in user, passed explicitly to
/// the wizard constructor. Never read from ambient global state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl CurrentUser {
    /// An anonymous session: nothing to prefill.
    pub fn anonymous() -> Self {
        Self::default()
    }
}
