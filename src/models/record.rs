//! The persisted event record.

use crate::utils::text::sanitize_field;
use chrono::{Local, NaiveDateTime};
use serde::Serialize;

/// Column order of a record line.
pub const FIELD_COUNT: usize = 7;

/// One registered kite session, one line of the event log.
///
/// Field order is the on-disk column order; the writer serializes the struct
/// as-is, so do not reorder fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub timestamp: String,
    pub chat_id: String,
    pub user_id: String,
    pub name: String,
    pub kite: String,
    pub from: String,
    pub to: String,
}

impl EventRecord {
    /// Build a record stamped with the current local time.
    pub fn new(
        chat_id: impl Into<String>,
        user_id: impl Into<String>,
        name: &str,
        kite: &str,
        from: &str,
        to: &str,
    ) -> Self {
        Self::at(Local::now().naive_local(), chat_id, user_id, name, kite, from, to)
    }

    /// Build a record with an explicit timestamp. Every field is sanitized.
    pub fn at(
        when: NaiveDateTime,
        chat_id: impl Into<String>,
        user_id: impl Into<String>,
        name: &str,
        kite: &str,
        from: &str,
        to: &str,
    ) -> Self {
        Self {
            timestamp: format_timestamp(when),
            chat_id: sanitize_field(&chat_id.into()),
            user_id: sanitize_field(&user_id.into()),
            name: sanitize_field(name),
            kite: sanitize_field(kite),
            from: sanitize_field(from),
            to: sanitize_field(to),
        }
    }

    /// Parse a log line. Missing trailing fields read as empty; extra fields are ignored.
    pub fn from_line(line: &str) -> Self {
        let line = line.trim_end_matches(['\n', '\r']);
        let mut parts = line.split('\t');
        let mut next = || parts.next().unwrap_or_default().to_string();

        Self {
            timestamp: next(),
            chat_id: next(),
            user_id: next(),
            name: next(),
            kite: next(),
            from: next(),
            to: next(),
        }
    }

    /// Fields in on-disk order.
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            &self.timestamp,
            &self.chat_id,
            &self.user_id,
            &self.name,
            &self.kite,
            &self.from,
            &self.to,
        ]
    }

    /// `timestamp | name | [kite] | from → to`
    pub fn summary(&self) -> String {
        format!(
            "{} | {} | [{}] | {} → {}",
            self.timestamp, self.name, self.kite, self.from, self.to
        )
    }
}

/// ISO-8601 with second precision and no offset, e.g. `2025-06-01T10:15:00`.
pub fn format_timestamp(when: NaiveDateTime) -> String {
    when.format("%Y-%m-%dT%H:%M:%S").to_string()
}
