//! Shared SQLite connection handle.

use quizhive_application::RepositoryError;
use rusqlite::{Connection, ErrorCode};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, error};

/// In-memory database name accepted by [`SqliteDatabase::open`].
pub const IN_MEMORY: &str = ":memory:";

/// A single SQLite connection shared by the repositories of one service.
///
/// SQLite serializes writers anyway; a mutex around one connection gives
/// atomic single-row writes and read-committed reads without a pool.
/// Queries run on the blocking thread pool so request tasks never block
/// the runtime.
#[derive(Clone)]
pub struct SqliteDatabase {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteDatabase {
    /// Open (or create) the database at `path`. `":memory:"` opens a
    /// private in-memory database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let conn = if path == Path::new(IN_MEMORY) {
            Connection::open_in_memory()
        } else {
            Connection::open(path)
        }
        .map_err(|e| RepositoryError::Unavailable(format!("{}: {}", path.display(), e)))?;

        debug!("Opened SQLite database at {}", path.display());
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_in_memory() -> Result<Self, RepositoryError> {
        Self::open(IN_MEMORY)
    }

    /// Apply idempotent schema statements. Runs synchronously; call at startup.
    pub(crate) fn migrate(&self, schema: &str) -> Result<(), RepositoryError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| RepositoryError::Unavailable("connection mutex poisoned".to_string()))?;
        conn.execute_batch(schema).map_err(classify)
    }

    /// Run `f` against the connection on the blocking pool.
    pub(crate) async fn run<T, F>(&self, f: F) -> Result<T, RepositoryError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn.lock().map_err(|_| {
                RepositoryError::Unavailable("connection mutex poisoned".to_string())
            })?;
            f(&mut guard).map_err(classify)
        })
        .await
        .map_err(|e| RepositoryError::Unavailable(format!("storage task failed: {}", e)))?
    }
}

/// Map a SQLite error onto the repository error taxonomy.
pub(crate) fn classify(e: rusqlite::Error) -> RepositoryError {
    let classified = match &e {
        rusqlite::Error::SqliteFailure(failure, _) => match failure.code {
            ErrorCode::DatabaseBusy
            | ErrorCode::DatabaseLocked
            | ErrorCode::CannotOpen
            | ErrorCode::DiskFull
            | ErrorCode::ReadOnly => RepositoryError::Unavailable(e.to_string()),
            ErrorCode::DatabaseCorrupt | ErrorCode::NotADatabase => {
                RepositoryError::Corrupt(e.to_string())
            }
            _ => RepositoryError::QueryFailed(e.to_string()),
        },
        rusqlite::Error::FromSqlConversionFailure(..)
        | rusqlite::Error::InvalidColumnType(..)
        | rusqlite::Error::IntegralValueOutOfRange(..) => RepositoryError::Corrupt(e.to_string()),
        _ => RepositoryError::QueryFailed(e.to_string()),
    };
    error!("SQLite error: {}", classified);
    classified
}
