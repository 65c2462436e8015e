//! State store contract and SQLite key-value implementation.
//!
//! # Responsibility
//! - Load and save the whole aggregate as one JSON document under a fixed
//!   key in `kv_store`.
//!
//! # Invariants
//! - `load_state` never fails the session on corrupt data: it logs and
//!   returns the default aggregate, leaving the stored document untouched.
//! - `save_state` replaces the document atomically; last write wins.

use crate::db::DbError;
use crate::db::migrations::latest_version;
use crate::model::state::PlannerState;
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key the aggregate document is stored under.
pub const STATE_KEY: &str = "daily_planner_state";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error surface of the state store.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialize(serde_json::Error),
    /// Connection has not been migrated to the expected schema version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "state serialization failed: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Whole-aggregate persistence contract.
pub trait StateRepository {
    /// Reads the persisted aggregate, falling back to defaults when the
    /// document is absent or unreadable.
    fn load_state(&self) -> RepoResult<PlannerState>;
    /// Serializes and writes the full aggregate.
    fn save_state(&self, state: &PlannerState) -> RepoResult<()>;
}

/// SQLite-backed state store.
pub struct SqliteStateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateRepository<'conn> {
    /// Wraps a migrated connection, rejecting one whose schema is not ready.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected = latest_version();
        let actual: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual != expected {
            return Err(RepoError::UninitializedConnection {
                expected_version: expected,
                actual_version: actual,
            });
        }

        let table_present: Option<String> = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'kv_store';",
                [],
                |row| row.get(0),
            )
            .optional()?;
        if table_present.is_none() {
            return Err(RepoError::MissingRequiredTable("kv_store"));
        }

        Ok(Self { conn })
    }
}

impl StateRepository for SqliteStateRepository<'_> {
    fn load_state(&self) -> RepoResult<PlannerState> {
        let document: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [STATE_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(document) = document else {
            info!("event=state_load module=repo status=empty");
            return Ok(PlannerState::default());
        };

        match serde_json::from_str::<PlannerState>(&document) {
            Ok(state) => {
                info!(
                    "event=state_load module=repo status=ok bytes={}",
                    document.len()
                );
                Ok(state)
            }
            Err(err) => {
                // Unreadable document: keep it on disk for inspection and run
                // the session on defaults.
                warn!(
                    "event=state_load module=repo status=corrupt bytes={} error={err}",
                    document.len()
                );
                Ok(PlannerState::default())
            }
        }
    }

    fn save_state(&self, state: &PlannerState) -> RepoResult<()> {
        let document = serde_json::to_string(state)?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![STATE_KEY, document],
        )?;
        Ok(())
    }
}
