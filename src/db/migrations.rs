//! Database schema migration management and versioning.
//!
//! Maintains a precise record of applied migrations and runs pending ones
//! during database initialization, each inside its own transaction.
//!
//! Version 2 is the normalization step for databases written by earlier
//! releases that stored entries with `name`/`hours` columns instead of
//! `title`/`hoursSpent`: the legacy shape is folded into the current one
//! here, at the storage boundary, so nothing downstream ever needs a
//! field-presence check.

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// SQL schema for the migrations tracking table.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single database migration with its execution logic.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations, applied in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: base tasks table and date index
        self.add_migration(1, "create_tasks_table", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT,
        employer TEXT,
        punchIn TEXT,
        punchOut TEXT,
        hoursSpent REAL,
        date TEXT NOT NULL,
        completed INTEGER DEFAULT 0
    )",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_date ON tasks(date)", [])?;
            Ok(())
        });

        // Version 2: fold the legacy name/hours entry shape into
        // title/hoursSpent and fill in columns a pre-migration table lacks
        self.add_migration(2, "normalize_legacy_columns", |tx| {
            let mut columns = Vec::new();
            {
                let mut stmt = tx.prepare("PRAGMA table_info(tasks)")?;
                let names = stmt.query_map([], |row| row.get::<_, String>(1))?;
                for name in names {
                    columns.push(name?);
                }
            }
            let has = |name: &str| columns.iter().any(|c| c == name);

            if has("name") {
                if has("title") {
                    tx.execute("UPDATE tasks SET title = name WHERE title IS NULL OR title = ''", [])?;
                } else {
                    tx.execute("ALTER TABLE tasks RENAME COLUMN name TO title", [])?;
                }
            }
            if has("hours") {
                if has("hoursSpent") {
                    tx.execute("UPDATE tasks SET hoursSpent = COALESCE(hoursSpent, hours)", [])?;
                } else {
                    tx.execute("ALTER TABLE tasks RENAME COLUMN hours TO hoursSpent", [])?;
                }
            }

            // Legacy tables may predate the optional fields entirely
            for (column, definition) in [
                ("description", "description TEXT"),
                ("employer", "employer TEXT"),
                ("punchIn", "punchIn TEXT"),
                ("punchOut", "punchOut TEXT"),
                ("hoursSpent", "hoursSpent REAL"),
                ("completed", "completed INTEGER DEFAULT 0"),
            ] {
                if !has(column) && !(column == "hoursSpent" && has("hours")) {
                    tx.execute(&format!("ALTER TABLE tasks ADD COLUMN {}", definition), [])?;
                }
            }
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies all pending migrations in order, one transaction each.
    pub fn migrate(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;
        let current = get_db_version(conn)?;

        for migration in self.migrations.iter().filter(|m| m.version > current) {
            let tx = conn.transaction()?;
            (migration.up)(&tx).map_err(|e| msg_error_anyhow!(Message::MigrationFailed(e.to_string())))?;
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
            tx.commit()?;
            msg_debug!(Message::MigrationApplied(migration.version, migration.name.to_string()));
        }

        Ok(())
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Initializes the database, applying any pending migrations.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().migrate(conn)
}

/// Returns the highest applied migration version, 0 for a fresh database.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    conn.execute(MIGRATIONS_TABLE, [])?;
    let version = conn.query_row("SELECT COALESCE(MAX(version), 0) FROM migrations", [], |row| {
        row.get::<_, u32>(0)
    })?;
    Ok(version)
}
