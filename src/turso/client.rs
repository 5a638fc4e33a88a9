// libsql connection wrapper shared by the schema and lexicon modules

use libsql::params::IntoParams;
use libsql::{Builder, Connection, Database, Rows, Transaction};
use std::path::{Path, PathBuf};

use crate::lexicon::LexiconError;

/// Database file name inside the data directory
const DATABASE_FILE: &str = "lexicon.db";

/// Error types for database operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TursoError {
    /// Database could not be opened or connected to
    #[error("Failed to open database: {0}")]
    Connection(String),
    /// Statement failed to execute or rows failed to read
    #[error("Query failed: {0}")]
    Query(String),
    /// Unique/foreign key constraint violation
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl TursoError {
    fn from_libsql(error: libsql::Error) -> Self {
        let message = error.to_string();
        if message.to_ascii_lowercase().contains("constraint") {
            TursoError::Constraint(message)
        } else {
            TursoError::Query(message)
        }
    }
}

impl From<TursoError> for LexiconError {
    fn from(error: TursoError) -> Self {
        match error {
            TursoError::Connection(msg) => LexiconError::Unavailable(msg),
            TursoError::Query(msg) | TursoError::Constraint(msg) => LexiconError::Query(msg),
        }
    }
}

/// Handle to the embedded lexicon database
pub struct TursoClient {
    // Kept alive for the lifetime of the connection
    _db: Database,
    conn: Connection,
    db_path: PathBuf,
}

impl TursoClient {
    /// Open (creating if needed) `lexicon.db` inside `data_dir`
    pub async fn new(data_dir: PathBuf) -> Result<Self, TursoError> {
        tokio::fs::create_dir_all(&data_dir)
            .await
            .map_err(|e| TursoError::Connection(format!("Failed to create data dir: {}", e)))?;
        Self::open(&data_dir.join(DATABASE_FILE)).await
    }

    /// Open the database in the platform data directory
    pub async fn with_default_path() -> Result<Self, TursoError> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| TursoError::Connection("Could not determine data directory".to_string()))?
            .join("yomi-lookup");
        Self::new(data_dir).await
    }

    /// Open a database file at an explicit path
    pub async fn open(db_path: &Path) -> Result<Self, TursoError> {
        crate::debug!("Opening lexicon database at {:?}", db_path);

        let db = Builder::new_local(db_path)
            .build()
            .await
            .map_err(|e| TursoError::Connection(e.to_string()))?;
        let conn = db
            .connect()
            .map_err(|e| TursoError::Connection(e.to_string()))?;

        Ok(Self {
            _db: db,
            conn,
            db_path: db_path.to_path_buf(),
        })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Execute a statement, returning the number of affected rows
    pub async fn execute(&self, sql: &str, params: impl IntoParams) -> Result<u64, TursoError> {
        self.conn
            .execute(sql, params)
            .await
            .map_err(TursoError::from_libsql)
    }

    /// Run a query and return its rows
    pub async fn query(&self, sql: &str, params: impl IntoParams) -> Result<Rows, TursoError> {
        self.conn
            .query(sql, params)
            .await
            .map_err(TursoError::from_libsql)
    }

    pub(crate) async fn transaction(&self) -> Result<Transaction, TursoError> {
        self.conn
            .transaction()
            .await
            .map_err(TursoError::from_libsql)
    }

    pub(crate) fn last_insert_rowid(&self) -> i64 {
        self.conn.last_insert_rowid()
    }
}
