//! Account repository trait definition.

use hashgate_types::account::{AccountId, AccountStatus, UserAccount};
use hashgate_types::error::RepositoryError;

use super::SortOrder;

/// Filter criteria for listing accounts.
#[derive(Debug, Clone, Default)]
pub struct AccountFilter {
    /// Filter by lifecycle status.
    pub status: Option<AccountStatus>,
    /// Field to sort by (e.g., "created_at", "email").
    pub sort_by: Option<String>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
    /// Maximum number of results.
    pub limit: Option<i64>,
    /// Number of results to skip (offset pagination).
    pub offset: Option<i64>,
}

/// Repository trait for account persistence.
///
/// Implementations live in hashgate-infra (e.g., SqliteAccountRepository).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
///
/// Repositories store whatever is in the account's credential fields; the
/// service layer runs the hashing hook before every call to `create` or
/// `update`, so hashed values are what reaches an implementation in
/// practice.
pub trait AccountRepository: Send + Sync {
    /// Insert a new account. Returns the created account.
    fn create(
        &self,
        account: &UserAccount,
    ) -> impl std::future::Future<Output = Result<UserAccount, RepositoryError>> + Send;

    /// Get an account by its unique ID.
    fn get_by_id(
        &self,
        id: &AccountId,
    ) -> impl std::future::Future<Output = Result<Option<UserAccount>, RepositoryError>> + Send;

    /// Get an account by its unique email.
    fn get_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<UserAccount>, RepositoryError>> + Send;

    /// List accounts with optional filtering, sorting, and pagination.
    fn list(
        &self,
        filter: Option<AccountFilter>,
    ) -> impl std::future::Future<Output = Result<Vec<UserAccount>, RepositoryError>> + Send;

    /// Update an existing account. Returns the updated account.
    fn update(
        &self,
        account: &UserAccount,
    ) -> impl std::future::Future<Output = Result<UserAccount, RepositoryError>> + Send;

    /// Permanently delete an account by ID.
    fn delete(
        &self,
        id: &AccountId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
