//! SQLite connection pools for the account store.
//!
//! SQLite permits a single writer at a time. Account writes are rare and
//! already serialized through the service layer (each one runs the hashing
//! hook first), so the writer side is a single connection. Reads dominate --
//! every login verification is a SELECT -- and get a small concurrent pool.
//! WAL journal mode lets readers proceed while a write is in flight.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Reader connections. Credential verification is the hot read path; a
/// handful of concurrent readers covers it for an embedded store.
const MAX_READERS: u32 = 4;

/// How long a connection waits on a locked database before erroring.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Split read/write pool for the accounts database.
///
/// - `reader`: read-only pool for lookups and credential verification.
/// - `writer`: single connection; all INSERT/UPDATE/DELETE go through it.
#[derive(Clone)]
pub struct DatabasePool {
    pub reader: SqlitePool,
    pub writer: SqlitePool,
}

impl DatabasePool {
    /// Open the database, run migrations, and build both pools.
    ///
    /// Migrations run on the writer before the reader pool opens, so a
    /// fresh database is fully shaped before anything can query it.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let opts = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT)
            .create_if_missing(true);

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opts.clone())
            .await?;

        sqlx::migrate!("../../migrations").run(&writer).await?;

        let reader = SqlitePoolOptions::new()
            .max_connections(MAX_READERS)
            .connect_with(opts.read_only(true))
            .await?;

        Ok(Self { reader, writer })
    }
}

/// Returns the default database URL based on `HASHGATE_DATA_DIR` env var,
/// falling back to `~/.hashgate/hashgate.db`.
pub fn default_database_url() -> String {
    let data_dir = std::env::var("HASHGATE_DATA_DIR").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        format!("{home}/.hashgate")
    });
    format!("sqlite://{data_dir}/hashgate.db")
}
