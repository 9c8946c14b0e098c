use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Per-test environment: an in-memory SQLite database and, on demand, a
/// session backed by the same database.
///
/// Both resources are created lazily and live as long as the context, so a
/// test that only touches repositories never pays for session setup. Tests
/// normally obtain one through `TestBuilder::build()` and read the connection
/// via `test.db.as_ref().unwrap()`.
pub struct TestContext {
    /// Connection to the in-memory SQLite instance, once opened.
    pub db: Option<DatabaseConnection>,

    /// Session instance for auth-flow tests, once created.
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Opens the in-memory database on first call and returns the shared
    /// connection thereafter.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - The context's database connection
    /// - `Err(TestError::Database)` - Could not open the in-memory database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        Ok(self.db.as_ref().ok_or_else(|| {
            sea_orm::DbErr::Custom("database connection missing after initialization".to_string())
        })?)
    }

    /// Runs the given CREATE TABLE statements against the test database.
    ///
    /// `TestBuilder::build()` calls this with the schema derived from the
    /// registered entities; tests rarely need it directly.
    ///
    /// # Returns
    /// - `Ok(())` - Schema created
    /// - `Err(TestError::Database)` - A statement failed to execute
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Creates the session on first call and returns it thereafter.
    ///
    /// The session store lives in the same in-memory database as the test
    /// data, mirroring how the server shares one SQLite file between SeaORM
    /// and the session layer. The store's table is migrated before the
    /// session is handed out.
    ///
    /// # Returns
    /// - `Ok(&Session)` - The context's session
    /// - `Err(TestError::Database)` - Store migration or database setup failed
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let db = self.database().await?;

            let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
            store
                .migrate()
                .await
                .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            ));
        }

        Ok(self.session.as_ref().ok_or_else(|| {
            sea_orm::DbErr::Custom("session missing after initialization".to_string())
        })?)
    }

    /// Initializes both resources and returns them together.
    ///
    /// Needed when a test wants the database and the session at the same
    /// time; calling the two accessors back to back would hold overlapping
    /// mutable borrows.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        Ok((self.db.as_ref().unwrap(), self.session.as_ref().unwrap()))
    }
}
