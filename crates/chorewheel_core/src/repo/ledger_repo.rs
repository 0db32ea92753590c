//! Ledger store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide put/get/scan APIs over the `ledger_entries` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `upsert` is keyed on the composite primary key; writing the same key
//!   twice replaces the row, it never duplicates it.
//! - Row parsing returns `InvalidData` for unparseable persisted values.

use crate::db::DbError;
use crate::model::chore::Frequency;
use crate::model::ledger::LedgerRecord;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const LEDGER_SELECT_SQL: &str = "SELECT
    id,
    period_key,
    chore_id,
    chore_name_snapshot,
    frequency_snapshot,
    assigned_member_id,
    created_at,
    completed,
    completed_at,
    completed_by_member_id,
    completed_by_name_snapshot
FROM ledger_entries";

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Error for ledger persistence and query operations.
#[derive(Debug)]
pub enum LedgerError {
    Db(DbError),
    InvalidData(String),
}

impl Display for LedgerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted ledger data: {message}"),
        }
    }
}

impl Error for LedgerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for LedgerError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for LedgerError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-value contract of the durable ledger.
///
/// One row per (period, chore); no multi-key transactions are required, so a
/// plain upsert/get/scan surface is the whole interface.
pub trait LedgerStore {
    fn upsert(&self, record: &LedgerRecord) -> LedgerResult<()>;
    fn get(&self, id: &str) -> LedgerResult<Option<LedgerRecord>>;
    fn get_all(&self) -> LedgerResult<Vec<LedgerRecord>>;
    fn get_by_period(&self, period_key: &str) -> LedgerResult<Vec<LedgerRecord>>;
}

/// SQLite-backed ledger store.
pub struct SqliteLedgerStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteLedgerStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl LedgerStore for SqliteLedgerStore<'_> {
    fn upsert(&self, record: &LedgerRecord) -> LedgerResult<()> {
        self.conn.execute(
            "INSERT INTO ledger_entries (
                id,
                period_key,
                chore_id,
                chore_name_snapshot,
                frequency_snapshot,
                assigned_member_id,
                created_at,
                completed,
                completed_at,
                completed_by_member_id,
                completed_by_name_snapshot
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            ON CONFLICT(id) DO UPDATE SET
                period_key = excluded.period_key,
                chore_id = excluded.chore_id,
                chore_name_snapshot = excluded.chore_name_snapshot,
                frequency_snapshot = excluded.frequency_snapshot,
                assigned_member_id = excluded.assigned_member_id,
                created_at = excluded.created_at,
                completed = excluded.completed,
                completed_at = excluded.completed_at,
                completed_by_member_id = excluded.completed_by_member_id,
                completed_by_name_snapshot = excluded.completed_by_name_snapshot;",
            params![
                record.id.as_str(),
                record.period_key.as_str(),
                record.chore_id.to_string(),
                record.chore_name_snapshot.as_deref(),
                record.frequency_snapshot.map(Frequency::as_str),
                record.assigned_member_id.map(|id| id.to_string()),
                record.created_at,
                bool_to_int(record.completed),
                record.completed_at,
                record.completed_by_member_id.map(|id| id.to_string()),
                record.completed_by_name_snapshot.as_deref(),
            ],
        )?;

        Ok(())
    }

    fn get(&self, id: &str) -> LedgerResult<Option<LedgerRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{LEDGER_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_ledger_row(row)?));
        }
        Ok(None)
    }

    fn get_all(&self) -> LedgerResult<Vec<LedgerRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{LEDGER_SELECT_SQL} ORDER BY created_at ASC, id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_ledger_row(row)?);
        }
        Ok(records)
    }

    fn get_by_period(&self, period_key: &str) -> LedgerResult<Vec<LedgerRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{LEDGER_SELECT_SQL} WHERE period_key = ?1 ORDER BY id ASC;"
        ))?;
        let mut rows = stmt.query(params![period_key])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_ledger_row(row)?);
        }
        Ok(records)
    }
}

fn parse_ledger_row(row: &Row<'_>) -> LedgerResult<LedgerRecord> {
    let chore_id_text: String = row.get("chore_id")?;
    let chore_id = Uuid::parse_str(&chore_id_text).map_err(|_| {
        LedgerError::InvalidData(format!(
            "invalid uuid `{chore_id_text}` in ledger_entries.chore_id"
        ))
    })?;

    let frequency_snapshot = match row.get::<_, Option<String>>("frequency_snapshot")? {
        Some(value) => Some(Frequency::parse(&value).ok_or_else(|| {
            LedgerError::InvalidData(format!(
                "invalid frequency `{value}` in ledger_entries.frequency_snapshot"
            ))
        })?),
        None => None,
    };

    let completed = match row.get::<_, i64>("completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(LedgerError::InvalidData(format!(
                "invalid completed value `{other}` in ledger_entries.completed"
            )));
        }
    };

    Ok(LedgerRecord {
        id: row.get("id")?,
        period_key: row.get("period_key")?,
        chore_id,
        chore_name_snapshot: row.get("chore_name_snapshot")?,
        frequency_snapshot,
        assigned_member_id: parse_optional_uuid(row, "assigned_member_id")?,
        created_at: row.get("created_at")?,
        completed,
        completed_at: row.get("completed_at")?,
        completed_by_member_id: parse_optional_uuid(row, "completed_by_member_id")?,
        completed_by_name_snapshot: row.get("completed_by_name_snapshot")?,
    })
}

fn parse_optional_uuid(row: &Row<'_>, column: &'static str) -> LedgerResult<Option<Uuid>> {
    match row.get::<_, Option<String>>(column)? {
        Some(value) => Uuid::parse_str(&value).map(Some).map_err(|_| {
            LedgerError::InvalidData(format!("invalid uuid `{value}` in ledger_entries.{column}"))
        }),
        None => Ok(None),
    }
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
