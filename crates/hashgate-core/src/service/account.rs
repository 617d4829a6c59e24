//! Account management service.
//!
//! Orchestrates account creation, credential changes, and lifecycle updates.
//! The service composes the [`HashingObserver`] explicitly: every path that
//! writes an account runs the hook immediately before the repository call,
//! so a hashing failure aborts the operation with nothing persisted.

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};

use hashgate_types::account::{AccountId, AccountStatus, CreateAccountRequest, UserAccount};
use hashgate_types::error::{AccountError, RepositoryError};

use crate::observer::HashingObserver;
use crate::repository::account::{AccountFilter, AccountRepository};
use crate::service::hash::AttributeHasher;

/// Service orchestrating the account lifecycle around the hashing hook.
///
/// Generic over the repository and hasher traits to maintain clean
/// architecture -- hashgate-core never depends on hashgate-infra.
pub struct AccountService<R: AccountRepository, H: AttributeHasher> {
    repo: R,
    hasher: H,
    observer: HashingObserver,
    default_hashing: bool,
}

impl<R: AccountRepository, H: AttributeHasher> AccountService<R, H> {
    /// Create a new AccountService.
    ///
    /// - `repo`: persistence for account records
    /// - `hasher`: credential hashing implementation
    /// - `default_hashing`: policy flag applied when a create request does
    ///   not specify one (from `HashgateConfig::hashing_enabled`)
    pub fn new(repo: R, hasher: H, default_hashing: bool) -> Self {
        Self {
            repo,
            hasher,
            observer: HashingObserver::new(),
            default_hashing,
        }
    }

    /// Create a new account.
    ///
    /// Validates the request, builds the account with plaintext credentials,
    /// runs the pre-insert hook, then persists. With hashing enabled (the
    /// default) the stored credential fields are PHC strings; with it
    /// disabled they are stored as given.
    pub async fn create_account(
        &self,
        request: CreateAccountRequest,
    ) -> Result<UserAccount, AccountError> {
        let email = request.email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(AccountError::InvalidEmail(request.email));
        }

        let display_name = request.display_name.trim().to_string();
        if display_name.is_empty() {
            return Err(AccountError::InvalidDisplayName(
                "display name cannot be empty".to_string(),
            ));
        }

        let hashing = request.hashing.unwrap_or(self.default_hashing);
        let now = chrono::Utc::now();

        let mut account = UserAccount {
            id: AccountId::new(),
            email,
            display_name,
            password: request.password.expose_secret().to_string(),
            security_answer: request
                .security_answer
                .map(|answer| answer.expose_secret().to_string()),
            status: AccountStatus::Active,
            hashing,
            created_at: now,
            updated_at: now,
        };

        // Pre-insert lifecycle point. A hashing failure aborts here, before
        // anything reaches storage.
        self.observer.before_create(&mut account, &self.hasher)?;

        let account = self.repo.create(&account).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => AccountError::EmailConflict(account.email.clone()),
            other => AccountError::StorageError(other.to_string()),
        })?;

        info!(account_id = %account.id, hashing = account.hashing, "account created");
        Ok(account)
    }

    /// Replace an account's password.
    ///
    /// Sets the plaintext, runs the pre-update hook, then persists. The
    /// plaintext never reaches the repository when hashing is enabled.
    pub async fn change_password(
        &self,
        id: &AccountId,
        new_password: SecretString,
    ) -> Result<UserAccount, AccountError> {
        let mut account = self.get_account(id).await?;
        account.password = new_password.expose_secret().to_string();
        account.updated_at = chrono::Utc::now();

        self.persist_update(&mut account).await?;

        info!(account_id = %account.id, "password changed");
        Ok(account)
    }

    /// Check a plaintext candidate against the stored password hash.
    ///
    /// Only meaningful for accounts with hashing enabled; for a
    /// plaintext-stored credential the hasher reports a malformed hash.
    pub async fn verify_password(
        &self,
        id: &AccountId,
        candidate: SecretString,
    ) -> Result<bool, AccountError> {
        let account = self.get_account(id).await?;
        let matches = self
            .hasher
            .verify(candidate.expose_secret(), &account.password)?;
        debug!(account_id = %account.id, matches, "password verification");
        Ok(matches)
    }

    /// Get an account by ID.
    pub async fn get_account(&self, id: &AccountId) -> Result<UserAccount, AccountError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(|e| AccountError::StorageError(e.to_string()))?
            .ok_or(AccountError::NotFound)
    }

    /// Get an account by email.
    pub async fn get_account_by_email(&self, email: &str) -> Result<UserAccount, AccountError> {
        self.repo
            .get_by_email(&email.trim().to_lowercase())
            .await
            .map_err(|e| AccountError::StorageError(e.to_string()))?
            .ok_or(AccountError::NotFound)
    }

    /// List accounts with optional filtering.
    pub async fn list_accounts(
        &self,
        filter: Option<AccountFilter>,
    ) -> Result<Vec<UserAccount>, AccountError> {
        self.repo
            .list(filter)
            .await
            .map_err(|e| AccountError::StorageError(e.to_string()))
    }

    /// Suspend an account.
    pub async fn suspend_account(&self, id: &AccountId) -> Result<UserAccount, AccountError> {
        let mut account = self.get_account(id).await?;
        account.status = AccountStatus::Suspended;
        account.updated_at = chrono::Utc::now();

        self.persist_update(&mut account).await?;

        info!(account_id = %account.id, "account suspended");
        Ok(account)
    }

    /// Permanently delete an account.
    pub async fn delete_account(&self, id: &AccountId) -> Result<(), AccountError> {
        self.repo.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => AccountError::NotFound,
            other => AccountError::StorageError(other.to_string()),
        })?;

        info!(account_id = %id, "account deleted");
        Ok(())
    }

    /// Run the pre-update hook, then write through the repository.
    async fn persist_update(&self, account: &mut UserAccount) -> Result<(), AccountError> {
        self.observer.before_update(account, &self.hasher)?;

        *account = self.repo.update(account).await.map_err(|e| match e {
            RepositoryError::NotFound => AccountError::NotFound,
            other => AccountError::StorageError(other.to_string()),
        })?;

        Ok(())
    }
}
