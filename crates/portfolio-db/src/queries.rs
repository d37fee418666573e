use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use portfolio_types::models::NewContact;
use rusqlite::Connection;
use uuid::Uuid;

use crate::Database;
use crate::models::ContactRow;

impl Database {
    // -- Contacts --

    /// Store a validated submission. The id, timestamp and unread flag are
    /// assigned here, never taken from the caller.
    pub fn insert_contact(&self, contact: &NewContact) -> Result<ContactRow> {
        let row = ContactRow {
            id: Uuid::new_v4().to_string(),
            name: contact.name.clone(),
            email: contact.email.clone(),
            subject: contact.subject.clone(),
            message: contact.message.clone(),
            // Fixed-width RFC 3339 so text ordering matches time ordering
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            read: false,
        };

        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO contacts (id, name, email, subject, message, created_at, read)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                rusqlite::params![
                    row.id,
                    row.name,
                    row.email,
                    row.subject,
                    row.message,
                    row.created_at,
                    row.read
                ],
            )?;
            Ok(())
        })?;

        Ok(row)
    }

    /// All contacts, newest first.
    pub fn list_contacts(&self) -> Result<Vec<ContactRow>> {
        self.with_conn(query_contacts)
    }
}

fn query_contacts(conn: &Connection) -> Result<Vec<ContactRow>> {
    // rowid breaks ties between inserts within the same microsecond
    let mut stmt = conn.prepare(
        "SELECT id, name, email, subject, message, created_at, read
         FROM contacts
         ORDER BY created_at DESC, rowid DESC",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok(ContactRow {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                subject: row.get(3)?,
                message: row.get(4)?,
                created_at: row.get(5)?,
                read: row.get(6)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}
