use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subject stored when the sender leaves it out.
pub const DEFAULT_SUBJECT: &str = "No Subject";

/// A stored contact-form submission, as returned by `GET /api/messages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

/// A submission that passed validation and is ready to be stored.
///
/// Fields are trimmed, the email is lowercased and a blank subject is
/// replaced by [`DEFAULT_SUBJECT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl NewContact {
    /// Returns `None` when name, email or message is missing or blank.
    pub fn normalize(
        name: Option<&str>,
        email: Option<&str>,
        subject: Option<&str>,
        message: Option<&str>,
    ) -> Option<Self> {
        let name = non_blank(name)?;
        let email = non_blank(email)?.to_lowercase();
        let message = non_blank(message)?;
        let subject = non_blank(subject).unwrap_or(DEFAULT_SUBJECT);

        Some(Self {
            name: name.to_string(),
            email,
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        let c = NewContact::normalize(
            Some("  Ada "),
            Some("  Ada@Example.COM "),
            Some(" Hello "),
            Some(" hi there\n"),
        )
        .unwrap();

        assert_eq!(c.name, "Ada");
        assert_eq!(c.email, "ada@example.com");
        assert_eq!(c.subject, "Hello");
        assert_eq!(c.message, "hi there");
    }

    #[test]
    fn missing_subject_gets_placeholder() {
        let c = NewContact::normalize(Some("A"), Some("a@x.com"), None, Some("hi")).unwrap();
        assert_eq!(c.subject, DEFAULT_SUBJECT);

        let c = NewContact::normalize(Some("A"), Some("a@x.com"), Some("   "), Some("hi")).unwrap();
        assert_eq!(c.subject, DEFAULT_SUBJECT);
    }

    #[test]
    fn required_fields_must_be_present() {
        assert!(NewContact::normalize(None, Some("a@x.com"), None, Some("hi")).is_none());
        assert!(NewContact::normalize(Some("A"), None, None, Some("hi")).is_none());
        assert!(NewContact::normalize(Some("A"), Some("a@x.com"), None, None).is_none());
        assert!(NewContact::normalize(Some("A"), Some(" "), None, Some("hi")).is_none());
        assert!(NewContact::normalize(Some(""), Some("a@x.com"), None, Some("hi")).is_none());
    }

    #[test]
    fn serializes_camel_case() {
        let msg = ContactMessage {
            id: Uuid::nil(),
            name: "A".into(),
            email: "a@x.com".into(),
            subject: DEFAULT_SUBJECT.into(),
            message: "hi".into(),
            created_at: DateTime::default(),
            read: false,
        };

        let json = serde_json::to_value(&msg).unwrap();
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["read"], false);
    }
}
