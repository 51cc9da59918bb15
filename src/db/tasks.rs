//! Task record CRUD operations.
//!
//! All statements are single-shot fire-and-confirm writes or plain reads;
//! no partial-write semantics leak to callers. Reads come back ordered by
//! date descending, matching the storage contract; the aggregation layer
//! re-sorts as needed and does not rely on this order.

use crate::db::db::Db;
use crate::libs::task::{Task, DATE_FORMAT};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

const SELECT_TASKS: &str =
    "SELECT id, title, description, employer, punchIn, punchOut, hoursSpent, date, completed FROM tasks";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        let db = Db::new()?;
        Ok(Tasks { conn: db.conn })
    }

    pub fn get_all(&mut self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!("{} ORDER BY date DESC", SELECT_TASKS))?;
        let rows = stmt.query_map([], Self::map_row)?;
        let mut tasks = Vec::new();
        for task in rows {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    pub fn get_by_date(&mut self, date: NaiveDate) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!("{} WHERE date = ?1", SELECT_TASKS))?;
        let rows = stmt.query_map(params![date.format(DATE_FORMAT).to_string()], Self::map_row)?;
        let mut tasks = Vec::new();
        for task in rows {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    pub fn get_by_id(&mut self, id: &str) -> Result<Option<Task>> {
        let mut stmt = self.conn.prepare(&format!("{} WHERE id = ?1", SELECT_TASKS))?;
        let mut rows = stmt.query_map(params![id], Self::map_row)?;
        match rows.next() {
            Some(task) => Ok(Some(task?)),
            None => Ok(None),
        }
    }

    pub fn insert(&mut self, task: &Task) -> Result<()> {
        self.conn.execute(
            "INSERT INTO tasks (id, title, description, employer, punchIn, punchOut, hoursSpent, date, completed)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                task.id,
                task.title,
                task.description,
                task.employer,
                task.punch_in.as_deref().unwrap_or(""),
                task.punch_out.as_deref().unwrap_or(""),
                task.hours_spent,
                task.date,
                task.completed as i32,
            ],
        )?;
        Ok(())
    }

    pub fn update(&mut self, task: &Task) -> Result<usize> {
        let updated = self.conn.execute(
            "UPDATE tasks SET title = ?1, description = ?2, employer = ?3, punchIn = ?4, punchOut = ?5,
             hoursSpent = ?6, date = ?7, completed = ?8 WHERE id = ?9",
            params![
                task.title,
                task.description,
                task.employer,
                task.punch_in.as_deref().unwrap_or(""),
                task.punch_out.as_deref().unwrap_or(""),
                task.hours_spent,
                task.date,
                task.completed as i32,
                task.id,
            ],
        )?;
        Ok(updated)
    }

    pub fn delete(&mut self, id: &str) -> Result<usize> {
        let deleted = self.conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(deleted)
    }

    pub fn set_completed(&mut self, id: &str, completed: bool) -> Result<usize> {
        let updated = self
            .conn
            .execute("UPDATE tasks SET completed = ?1 WHERE id = ?2", params![completed as i32, id])?;
        Ok(updated)
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Task> {
        // Empty punch strings are stored for "not set"; normalize to None
        let punch_in: Option<String> = row.get(4)?;
        let punch_out: Option<String> = row.get(5)?;
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            employer: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            punch_in: punch_in.filter(|s| !s.is_empty()),
            punch_out: punch_out.filter(|s| !s.is_empty()),
            hours_spent: row.get::<_, Option<f64>>(6)?.unwrap_or(0.0),
            date: row.get(7)?,
            completed: row.get::<_, Option<i64>>(8)?.unwrap_or(0) != 0,
        })
    }
}
