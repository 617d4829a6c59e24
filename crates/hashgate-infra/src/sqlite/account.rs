//! SQLite account repository implementation.
//!
//! Implements `AccountRepository` from `hashgate-core` using sqlx with split
//! read/write pools. The repository stores credential fields as given; the
//! service layer runs the hashing hook before every write, so hashed values
//! are what arrives here in practice.

use hashgate_core::repository::SortOrder;
use hashgate_core::repository::account::{AccountFilter, AccountRepository};
use hashgate_types::account::{AccountId, AccountStatus, UserAccount};
use hashgate_types::error::RepositoryError;
use chrono::{DateTime, Utc};
use sqlx::Row;
use tracing::debug;

use super::pool::DatabasePool;
use crate::crypto::fingerprint::content_fingerprint;

/// SQLite-backed implementation of `AccountRepository`.
pub struct SqliteAccountRepository {
    pool: DatabasePool,
}

impl SqliteAccountRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain UserAccount.
struct AccountRow {
    id: String,
    email: String,
    display_name: String,
    password: String,
    security_answer: Option<String>,
    status: String,
    hashing: i64,
    created_at: String,
    updated_at: String,
}

impl AccountRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            display_name: row.try_get("display_name")?,
            password: row.try_get("password")?,
            security_answer: row.try_get("security_answer")?,
            status: row.try_get("status")?,
            hashing: row.try_get("hashing")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn into_account(self) -> Result<UserAccount, RepositoryError> {
        let id = self
            .id
            .parse::<AccountId>()
            .map_err(|e| RepositoryError::Query(format!("invalid account id: {e}")))?;

        let status: AccountStatus = self
            .status
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;

        let created_at = parse_datetime(&self.created_at)?;
        let updated_at = parse_datetime(&self.updated_at)?;

        Ok(UserAccount {
            id,
            email: self.email,
            display_name: self.display_name,
            password: self.password,
            security_answer: self.security_answer,
            status,
            hashing: self.hashing != 0,
            created_at,
            updated_at,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

impl AccountRepository for SqliteAccountRepository {
    async fn create(&self, account: &UserAccount) -> Result<UserAccount, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO accounts (id, email, display_name, password, security_answer, status, hashing, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(account.id.to_string())
        .bind(&account.email)
        .bind(&account.display_name)
        .bind(&account.password)
        .bind(&account.security_answer)
        .bind(account.status.to_string())
        .bind(account.hashing as i64)
        .bind(format_datetime(&account.created_at))
        .bind(format_datetime(&account.updated_at))
        .execute(&self.pool.writer)
        .await;

        match result {
            Ok(_) => {
                debug!(
                    account_id = %account.id,
                    credential_fpr = %content_fingerprint(&account.password),
                    "account row inserted"
                );
                Ok(account.clone())
            }
            Err(sqlx::Error::Database(db_err)) if db_err.message().contains("UNIQUE") => {
                Err(RepositoryError::Conflict(format!(
                    "email '{}' already exists",
                    account.email
                )))
            }
            Err(e) => Err(RepositoryError::Query(e.to_string())),
        }
    }

    async fn get_by_id(&self, id: &AccountId) -> Result<Option<UserAccount>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM accounts WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let account_row =
                    AccountRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(account_row.into_account()?))
            }
            None => Ok(None),
        }
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<UserAccount>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM accounts WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let account_row =
                    AccountRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(account_row.into_account()?))
            }
            None => Ok(None),
        }
    }

    async fn list(&self, filter: Option<AccountFilter>) -> Result<Vec<UserAccount>, RepositoryError> {
        let mut sql = String::from("SELECT * FROM accounts");

        let filter = filter.unwrap_or_default();

        if let Some(ref status) = filter.status {
            sql.push_str(&format!(" WHERE status = '{}'", status));
        }

        // Sort
        let sort_field = filter.sort_by.as_deref().unwrap_or("created_at");
        // Whitelist allowed sort fields to prevent SQL injection
        let safe_sort = match sort_field {
            "email" | "display_name" | "status" | "created_at" | "updated_at" => sort_field,
            _ => "created_at",
        };
        let order = match filter.sort_order.unwrap_or_default() {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        };
        sql.push_str(&format!(" ORDER BY {safe_sort} {order}"));

        // Pagination
        if let Some(limit) = filter.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        if let Some(offset) = filter.offset {
            sql.push_str(&format!(" OFFSET {offset}"));
        }

        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut accounts = Vec::with_capacity(rows.len());
        for row in &rows {
            let account_row =
                AccountRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            accounts.push(account_row.into_account()?);
        }

        Ok(accounts)
    }

    async fn update(&self, account: &UserAccount) -> Result<UserAccount, RepositoryError> {
        let result = sqlx::query(
            "UPDATE accounts SET email = ?, display_name = ?, password = ?, security_answer = ?, status = ?, hashing = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&account.email)
        .bind(&account.display_name)
        .bind(&account.password)
        .bind(&account.security_answer)
        .bind(account.status.to_string())
        .bind(account.hashing as i64)
        .bind(format_datetime(&account.updated_at))
        .bind(account.id.to_string())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        debug!(
            account_id = %account.id,
            credential_fpr = %content_fingerprint(&account.password),
            "account row updated"
        );
        Ok(account.clone())
    }

    async fn delete(&self, id: &AccountId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::DatabasePool;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        // Leak tempdir so it lives for the test
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    fn make_account(email: &str) -> UserAccount {
        let now = Utc::now();
        UserAccount {
            id: AccountId::new(),
            email: email.to_string(),
            display_name: "Test Account".to_string(),
            password: "$argon2id$v=19$m=64,t=1,p=1$c29tZXNhbHQ$ZGlnZXN0".to_string(),
            security_answer: None,
            status: AccountStatus::Active,
            hashing: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_by_id() {
        let pool = test_pool().await;
        let repo = SqliteAccountRepository::new(pool);
        let account = make_account("luna@example.com");

        let created = repo.create(&account).await.unwrap();
        assert_eq!(created.email, "luna@example.com");

        let found = repo.get_by_id(&account.id).await.unwrap().unwrap();
        assert_eq!(found.email, "luna@example.com");
        assert_eq!(found.password, account.password);
        assert!(found.hashing);
        assert!(found.security_answer.is_none());
    }

    #[tokio::test]
    async fn test_get_by_email() {
        let pool = test_pool().await;
        let repo = SqliteAccountRepository::new(pool);
        let account = make_account("finder@example.com");

        repo.create(&account).await.unwrap();

        let found = repo.get_by_email("finder@example.com").await.unwrap().unwrap();
        assert_eq!(found.id, account.id);

        let missing = repo.get_by_email("nobody@example.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_security_answer_roundtrips() {
        let pool = test_pool().await;
        let repo = SqliteAccountRepository::new(pool);
        let mut account = make_account("answer@example.com");
        account.security_answer = Some("$argon2id$v=19$m=64,t=1,p=1$c2FsdA$YW5zd2Vy".to_string());

        repo.create(&account).await.unwrap();

        let found = repo.get_by_id(&account.id).await.unwrap().unwrap();
        assert_eq!(found.security_answer, account.security_answer);
    }

    #[tokio::test]
    async fn test_hashing_flag_roundtrips_disabled() {
        let pool = test_pool().await;
        let repo = SqliteAccountRepository::new(pool);
        let mut account = make_account("legacy@example.com");
        account.hashing = false;
        account.password = "stored-as-given".to_string();

        repo.create(&account).await.unwrap();

        let found = repo.get_by_id(&account.id).await.unwrap().unwrap();
        assert!(!found.hashing);
        assert_eq!(found.password, "stored-as-given");
    }

    #[tokio::test]
    async fn test_list_with_filters() {
        let pool = test_pool().await;
        let repo = SqliteAccountRepository::new(pool);

        let a = make_account("a@example.com");
        let mut b = make_account("b@example.com");
        b.status = AccountStatus::Suspended;
        let c = make_account("c@example.com");

        repo.create(&a).await.unwrap();
        repo.create(&b).await.unwrap();
        repo.create(&c).await.unwrap();

        // List all
        let all = repo.list(None).await.unwrap();
        assert_eq!(all.len(), 3);

        // Filter by status
        let active = repo
            .list(Some(AccountFilter {
                status: Some(AccountStatus::Active),
                ..Default::default()
            }))
            .await
            .unwrap();
        assert_eq!(active.len(), 2);

        // Pagination
        let page = repo
            .list(Some(AccountFilter {
                limit: Some(1),
                offset: Some(1),
                sort_by: Some("email".to_string()),
                sort_order: Some(SortOrder::Asc),
                ..Default::default()
            }))
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].email, "b@example.com");
    }

    #[tokio::test]
    async fn test_update_password_and_status() {
        let pool = test_pool().await;
        let repo = SqliteAccountRepository::new(pool);
        let mut account = make_account("rotate@example.com");

        repo.create(&account).await.unwrap();

        account.password = "$argon2id$v=19$m=64,t=1,p=1$bmV3c2FsdA$bmV3ZGlnZXN0".to_string();
        account.status = AccountStatus::Suspended;
        account.updated_at = Utc::now();
        repo.update(&account).await.unwrap();

        let found = repo.get_by_id(&account.id).await.unwrap().unwrap();
        assert_eq!(found.password, account.password);
        assert_eq!(found.status, AccountStatus::Suspended);
    }

    #[tokio::test]
    async fn test_delete() {
        let pool = test_pool().await;
        let repo = SqliteAccountRepository::new(pool);
        let account = make_account("gone@example.com");

        repo.create(&account).await.unwrap();
        repo.delete(&account.id).await.unwrap();

        let found = repo.get_by_id(&account.id).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_email_conflict() {
        let pool = test_pool().await;
        let repo = SqliteAccountRepository::new(pool);
        let account1 = make_account("dup@example.com");
        let mut account2 = make_account("dup@example.com");
        account2.id = AccountId::new(); // Different ID but same email

        repo.create(&account1).await.unwrap();
        let err = repo.create(&account2).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_nonexistent() {
        let pool = test_pool().await;
        let repo = SqliteAccountRepository::new(pool);

        let err = repo.update(&make_account("ghost@example.com")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_nonexistent() {
        let pool = test_pool().await;
        let repo = SqliteAccountRepository::new(pool);

        let err = repo.delete(&AccountId::new()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
