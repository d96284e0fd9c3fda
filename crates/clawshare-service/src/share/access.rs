//! Share access control: expiry and password gate.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use clawshare_auth::password::PasswordHasher;
use clawshare_core::error::AppError;
use clawshare_core::types::ShareId;
use clawshare_database::ShareStore;
use clawshare_entity::share::ShareRecord;

/// Loads shares and decides whether a caller may use them.
#[derive(Debug, Clone)]
pub struct AccessService {
    /// Metadata store.
    store: Arc<ShareStore>,
    /// Password hasher for verification.
    hasher: Arc<PasswordHasher>,
}

impl AccessService {
    /// Creates a new access service.
    pub fn new(store: Arc<ShareStore>, hasher: Arc<PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// Loads a share that has not expired at `now`.
    ///
    /// An expired record is deleted on sight and reported as `Expired`.
    pub async fn load_live(&self, id: &ShareId, now: DateTime<Utc>) -> Result<ShareRecord, AppError> {
        let record = self
            .store
            .read(id)
            .await?
            .ok_or_else(|| AppError::not_found("Share not found"))?;

        if record.is_expired_at(now) {
            self.store.delete(id).await?;
            info!(share_id = %id, expired_at = %record.expires_at, "Expired share removed");
            return Err(AppError::expired("Share expired"));
        }

        Ok(record)
    }

    /// Checks `password` against a share's password, if it has one.
    pub fn check_password(
        &self,
        record: &ShareRecord,
        password: Option<&str>,
    ) -> Result<(), AppError> {
        let Some(stored) = record.password.as_deref() else {
            return Ok(());
        };

        let candidate = password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::password_required("Password required"))?;

        if !self.hasher.verify_password(candidate, stored)? {
            warn!(share_id = %record.id, "Invalid share password");
            return Err(AppError::invalid_password("Invalid password"));
        }

        Ok(())
    }

    /// Loads a live share and admits the caller if the password matches.
    pub async fn admit(
        &self,
        id: &ShareId,
        password: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<ShareRecord, AppError> {
        let record = self.load_live(id, now).await?;
        self.check_password(&record, password)?;
        Ok(record)
    }
}
