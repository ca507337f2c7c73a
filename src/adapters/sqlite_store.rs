//! SQLite-backed catalog collection.
//!
//! Each module is one JSON document in the `modules` table, keyed by its
//! unique `module_number`. Topic order lives inside the document, so it is
//! preserved exactly as inserted.

use crate::domain::model::Module;
use crate::domain::ports::CatalogStore;
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Instant;

const SCHEMA_VERSION: u32 = 1;

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS modules (
    module_number INTEGER PRIMARY KEY NOT NULL,
    document      TEXT NOT NULL
);
";

#[derive(Debug, Clone)]
pub struct SqliteCatalogStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteCatalogStore {
    /// Opens (or creates) the database file and ensures the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let started_at = Instant::now();
        tracing::debug!("Opening catalog database at {}", path.display());

        let conn = Connection::open(path).map_err(|e| {
            PortfolioError::startup(format!(
                "cannot open catalog database {}: {}",
                path.display(),
                e
            ))
        })?;
        let store = Self::bootstrap(conn)?;

        tracing::info!(
            path = %path.display(),
            duration_ms = started_at.elapsed().as_millis() as u64,
            "📦 Catalog store opened"
        );
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::bootstrap(conn)
    }

    fn bootstrap(conn: Connection) -> Result<Self> {
        let version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if version > SCHEMA_VERSION {
            return Err(PortfolioError::startup(format!(
                "catalog database schema version {} is newer than supported version {}",
                version, SCHEMA_VERSION
            )));
        }

        conn.execute_batch(SCHEMA_SQL)?;
        conn.execute_batch(&format!("PRAGMA user_version = {};", SCHEMA_VERSION))?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 在阻塞執行緒上使用連線，避免卡住 async runtime
    async fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| PortfolioError::store("catalog connection lock poisoned"))?;
            f(&mut *guard)
        })
        .await
        .map_err(|e| PortfolioError::store(format!("catalog store task failed: {}", e)))?
    }
}

fn decode(document: &str) -> Result<Module> {
    serde_json::from_str(document).map_err(|e| {
        PortfolioError::store(format!("invalid module document in catalog: {}", e))
    })
}

#[async_trait]
impl CatalogStore for SqliteCatalogStore {
    async fn count(&self) -> Result<u64> {
        self.with_conn(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM modules", [], |row| row.get(0))?;
            Ok(count as u64)
        })
        .await
    }

    async fn insert_many(&self, modules: &[Module]) -> Result<()> {
        let modules = modules.to_vec();
        self.with_conn(move |conn| {
            let tx = conn.transaction()?;
            {
                let mut stmt =
                    tx.prepare("INSERT INTO modules (module_number, document) VALUES (?1, ?2)")?;
                for module in &modules {
                    let document = serde_json::to_string(module)?;
                    stmt.execute(params![module.module_number, document])?;
                }
            }
            tx.commit()?;
            Ok(())
        })
        .await
    }

    async fn find_all_sorted(&self) -> Result<Vec<Module>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT document FROM modules ORDER BY module_number ASC")?;
            let documents = stmt
                .query_map([], |row| row.get::<_, String>(0))?
                .collect::<rusqlite::Result<Vec<String>>>()?;
            documents.iter().map(|doc| decode(doc)).collect()
        })
        .await
    }

    async fn find_by_number(&self, module_number: i64) -> Result<Option<Module>> {
        self.with_conn(move |conn| {
            let document: Option<String> = conn
                .query_row(
                    "SELECT document FROM modules WHERE module_number = ?1",
                    params![module_number],
                    |row| row.get(0),
                )
                .optional()?;
            document.as_deref().map(decode).transpose()
        })
        .await
    }
}
