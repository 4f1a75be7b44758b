use std::sync::{Arc, RwLock};

/// Read access to the current bearer token. The token may be empty before login.
pub trait TokenSource {
    fn token(&self) -> String;
}

/// In-memory auth store shared between the session owner and the dashboard.
#[derive(Debug, Clone, Default)]
pub struct SharedToken {
    inner: Arc<RwLock<String>>,
}

impl SharedToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self { inner: Arc::new(RwLock::new(token.into())) }
    }

    /// Replace the stored token, e.g. after a login or logout.
    pub fn set(&self, token: impl Into<String>) {
        // A poisoned lock still holds a valid String
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = token.into();
    }
}

impl TokenSource for SharedToken {
    fn token(&self) -> String {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
