//! Mock account sign-in
//!
//! There is no credential verification here: [`MockAuthProvider`] accepts any
//! well-formed email and remembers the resulting user in local storage. Real
//! verification belongs behind the [`AuthProvider`] trait.

use crate::core::error::Error;
use crate::core::types::UserRole;
use crate::models::User;
use crate::storage::KeyValueStorage;
use crate::Result;

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

/// Storage key used when none is configured
pub const DEFAULT_USER_KEY: &str = "user";

/// Identifier given to every mock email sign-in
const MOCK_USER_ID: &str = "user-123";

/// Account signed in by the mock Google flow
const GOOGLE_USER_ID: &str = "google-user-123";
const GOOGLE_USER_EMAIL: &str = "user@gmail.com";
const GOOGLE_USER_NAME: &str = "Google User";

/// Sign-in capability used by the storefront
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Signs in with email and password
    async fn login(&mut self, email: &str, password: &str) -> Result<User>;

    /// Signs in through the Google flow
    async fn login_with_google(&mut self) -> Result<User>;

    /// Creates an account and signs it in
    async fn register(&mut self, email: &str, password: &str, name: &str) -> Result<User>;

    /// Signs the current user out
    async fn logout(&mut self) -> Result<()>;

    /// The signed-in user, if any
    fn current_user(&self) -> Option<&User>;

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}

/// Auth provider that trusts every well-formed request
pub struct MockAuthProvider {
    storage: Arc<dyn KeyValueStorage>,
    storage_key: String,
    user: Option<User>,
    latency: Duration,
}

impl MockAuthProvider {
    /// Creates a provider persisting the user under `storage_key`, restoring a
    /// previously signed-in user if one was saved.
    pub fn new(storage: Arc<dyn KeyValueStorage>, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let user = Self::restore(storage.as_ref(), &storage_key);

        Self {
            storage,
            storage_key,
            user,
            latency: Duration::ZERO,
        }
    }

    /// Delays every sign-in call by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn restore(storage: &dyn KeyValueStorage, storage_key: &str) -> Option<User> {
        let json = match storage.get(storage_key) {
            Ok(json) => json?,
            Err(e) => {
                log::warn!("Failed to read saved user '{}': {}", storage_key, e);
                return None;
            }
        };

        match serde_json::from_str(&json) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("Discarding corrupted user '{}': {}", storage_key, e);
                None
            }
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn sign_in(&mut self, user: User) -> User {
        let result = serde_json::to_string(&user)
            .map_err(Error::from)
            .and_then(|json| self.storage.set(&self.storage_key, &json));

        if let Err(e) = result {
            log::warn!("Failed to persist user '{}': {}", self.storage_key, e);
        }

        log::info!("Signed in {} ({})", user.email, user.role.as_str());
        self.user = Some(user.clone());
        user
    }
}

fn validate_email(email: &str) -> Result<&str> {
    let email = email.trim();

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(Error::Authentication(format!(
            "Invalid email address: {:?}",
            email
        ))),
    }
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn login(&mut self, email: &str, _password: &str) -> Result<User> {
        let email = validate_email(email)?.to_string();
        self.simulate_latency().await;

        let local = email.split('@').next().unwrap_or_default().to_string();
        let role = if email.contains("admin") {
            UserRole::Admin
        } else {
            UserRole::User
        };

        let user = User::new(MOCK_USER_ID, email)
            .with_name(local)
            .with_role(role);

        Ok(self.sign_in(user))
    }

    async fn login_with_google(&mut self) -> Result<User> {
        self.simulate_latency().await;

        let user = User::new(GOOGLE_USER_ID, GOOGLE_USER_EMAIL).with_name(GOOGLE_USER_NAME);
        Ok(self.sign_in(user))
    }

    async fn register(&mut self, email: &str, _password: &str, name: &str) -> Result<User> {
        let email = validate_email(email)?.to_string();
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Authentication("Name is required".into()));
        }

        self.simulate_latency().await;

        let id = format!("user-{}", Utc::now().timestamp_millis());
        let user = User::new(id, email).with_name(name);

        Ok(self.sign_in(user))
    }

    async fn logout(&mut self) -> Result<()> {
        self.simulate_latency().await;

        if let Err(e) = self.storage.remove(&self.storage_key) {
            log::warn!("Failed to clear saved user '{}': {}", self.storage_key, e);
        }

        if let Some(user) = self.user.take() {
            log::info!("Signed out {}", user.email);
        }

        Ok(())
    }

    fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}
