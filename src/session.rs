use std::sync::{Arc, RwLock};
use tracing::info;

use crate::error::ApiError;
use crate::models::User;

/// Process-wide session, populated by the session-check call at app start
/// and cleared on logout. Cloning shares the same underlying slot.
#[derive(Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<Option<User>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, user: User) {
        info!("session established for {}", user.email);
        *self.inner.write().unwrap() = Some(user);
    }

    pub fn clear(&self) {
        info!("session cleared");
        *self.inner.write().unwrap() = None;
    }

    pub fn current(&self) -> Option<User> {
        self.inner.read().unwrap().clone()
    }

    /// Applies an in-place edit to the session user, if one is present.
    pub fn update(&self, f: impl FnOnce(&mut User)) {
        if let Some(user) = self.inner.write().unwrap().as_mut() {
            f(user);
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.read().unwrap().is_some()
    }

    /// Guard for protected routes: without a session the caller gets
    /// `AuthRequired`, which the flow layer turns into a login redirect.
    pub fn require_user(&self) -> Result<User, ApiError> {
        self.current().ok_or(ApiError::AuthRequired)
    }

    /// Admin-only routes are additionally gated on the role before the
    /// request leaves the client.
    pub fn require_admin(&self) -> Result<User, ApiError> {
        let user = self.require_user()?;
        if user.role.is_admin() {
            Ok(user)
        } else {
            Err(ApiError::Status {
                status: 403,
                message: "Admin access required".to_string(),
            })
        }
    }
}

/// The one non-essential local preference: the city shows are browsed in.
#[derive(Clone, Default)]
pub struct Preferences {
    city: Arc<RwLock<Option<String>>>,
}

impl Preferences {
    pub fn with_city(default_city: Option<String>) -> Self {
        Self {
            city: Arc::new(RwLock::new(default_city)),
        }
    }

    pub fn preferred_city(&self) -> Option<String> {
        self.city.read().unwrap().clone()
    }

    pub fn set_preferred_city(&self, city: impl Into<String>) {
        *self.city.write().unwrap() = Some(city.into());
    }
}
