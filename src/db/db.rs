use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "shiftlog.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let mut conn = Connection::open(db_file_path)
            .map_err(|e| msg_error_anyhow!(Message::DbConnectionFailed(e.to_string())))?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
