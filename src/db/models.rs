/// Data models for database entities
///
/// All models map to database tables and use sqlx for type-safe queries.
/// Field names double as the JSON shape served by the listing endpoints.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// A portfolio project
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub tags: String, // Comma-separated
    pub url: Option<String>,
    pub created_at: String, // ISO 8601 format from SQLite
}

/// A technical skill with a 0-100 proficiency
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub proficiency: i32,
    pub created_at: String,
}

/// Contact channel kinds
///
/// Stored as lowercase text; the textual names also define the sort order
/// of contact listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ContactKind {
    Gmail,
    Github,
    Linkedin,
    Viber,
    Whatsapp,
}

impl ContactKind {
    pub const ALL: [ContactKind; 5] = [
        ContactKind::Gmail,
        ContactKind::Github,
        ContactKind::Linkedin,
        ContactKind::Viber,
        ContactKind::Whatsapp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactKind::Gmail => "gmail",
            ContactKind::Github => "github",
            ContactKind::Linkedin => "linkedin",
            ContactKind::Viber => "viber",
            ContactKind::Whatsapp => "whatsapp",
        }
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown contact kind: {}", s))
    }
}

/// A way to reach the portfolio owner
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Contact {
    pub id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: ContactKind,
    pub value: String,
    pub url: Option<String>,
    pub created_at: String,
}

impl Contact {
    /// The link target, if there is a usable one. Empty strings count as absent.
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.trim().is_empty())
    }
}

/// A work-history entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Experience {
    pub id: i64,
    pub company: String,
    pub duration: String, // free text, e.g. "2023 - Present"
    pub description: String,
    pub tech_stack: String, // Comma-separated
    pub created_at: String,
}

/// A contact-form submission
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub content: String,
    pub created_at: String,
}

/// Input for a new project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInput {
    pub name: String,
    pub description: String,
    pub tags: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Input for a new skill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillInput {
    pub name: String,
    pub proficiency: i32,
}

/// Input for a new contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInput {
    #[serde(rename = "type")]
    pub kind: ContactKind,
    pub value: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Input for a new experience entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceInput {
    pub company: String,
    pub duration: String,
    pub description: String,
    pub tech_stack: String,
}

/// Input for a new contact-form message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageInput {
    pub name: String,
    pub email: String,
    pub content: String,
}

/// A full set of portfolio records, as loaded from a seed fixture
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSet {
    #[serde(default)]
    pub projects: Vec<ProjectInput>,
    #[serde(default)]
    pub skills: Vec<SkillInput>,
    #[serde(default)]
    pub contacts: Vec<ContactInput>,
    #[serde(default)]
    pub experience: Vec<ExperienceInput>,
}

impl RecordSet {
    pub fn total(&self) -> usize {
        self.projects.len() + self.skills.len() + self.contacts.len() + self.experience.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_kind_round_trips_through_text() {
        for kind in ContactKind::ALL {
            assert_eq!(kind.as_str().parse::<ContactKind>().unwrap(), kind);
        }
        assert!("telegram".parse::<ContactKind>().is_err());
    }

    #[test]
    fn test_contact_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ContactKind::Linkedin).unwrap();
        assert_eq!(json, "\"linkedin\"");
    }

    #[test]
    fn test_contact_link_ignores_blank_url() {
        let mut contact = Contact {
            id: 1,
            kind: ContactKind::Viber,
            value: "+10000000000".to_string(),
            url: Some(String::new()),
            created_at: "2026-01-01 00:00:00".to_string(),
        };
        assert_eq!(contact.link(), None);

        contact.url = Some("viber://chat".to_string());
        assert_eq!(contact.link(), Some("viber://chat"));
    }

    #[test]
    fn test_contact_serializes_kind_as_type() {
        let contact = Contact {
            id: 3,
            kind: ContactKind::Github,
            value: "GitHub".to_string(),
            url: None,
            created_at: "2026-01-01 00:00:00".to_string(),
        };
        let value = serde_json::to_value(&contact).unwrap();
        assert_eq!(value["type"], "github");
        assert!(value.get("kind").is_none());
    }
}
