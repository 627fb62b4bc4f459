/// Loads portfolio records into the store from a TOML fixture
///
/// The interpreter never writes; this is the only path that fills the
/// four record tables.

use crate::db::{Database, RecordSet};
use crate::error::{PortfolioError, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// How many records of each kind went in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub projects: usize,
    pub skills: usize,
    pub contacts: usize,
    pub experience: usize,
}

impl SeedReport {
    fn of(records: &RecordSet) -> Self {
        Self {
            projects: records.projects.len(),
            skills: records.skills.len(),
            contacts: records.contacts.len(),
            experience: records.experience.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.projects + self.skills + self.contacts + self.experience
    }
}

pub struct Seeder {
    db: Arc<Database>,
}

impl Seeder {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Read and parse a fixture file. Does not validate.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<RecordSet> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<RecordSet> {
        Ok(toml::from_str(contents)?)
    }

    // Every text field is required and the proficiency range is 0..=100.
    // The schema enforces the range too; checking here gives a readable error
    // instead of a constraint failure halfway through the transaction.
    pub fn validate(records: &RecordSet) -> Result<()> {
        for p in &records.projects {
            require("project name", &p.name)?;
            require(&format!("description of project '{}'", p.name), &p.description)?;
            require(&format!("tags of project '{}'", p.name), &p.tags)?;
        }

        for s in &records.skills {
            require("skill name", &s.name)?;
            if !(0..=100).contains(&s.proficiency) {
                return Err(PortfolioError::InvalidRecord(format!(
                    "skill '{}' has proficiency {} (expected 0-100)",
                    s.name, s.proficiency
                )));
            }
        }

        for c in &records.contacts {
            require(&format!("value of {} contact", c.kind), &c.value)?;
        }

        for e in &records.experience {
            require("experience company", &e.company)?;
            require(&format!("duration at '{}'", e.company), &e.duration)?;
            require(&format!("description at '{}'", e.company), &e.description)?;
            require(&format!("tech stack at '{}'", e.company), &e.tech_stack)?;
        }

        Ok(())
    }

    /// Validate and import a record set
    ///
    /// With `replace` the existing records are dropped first, otherwise the
    /// new ones are appended.
    pub async fn seed(&self, records: &RecordSet, replace: bool) -> Result<SeedReport> {
        Self::validate(records)?;

        self.db.import_records(records, replace).await?;

        let report = SeedReport::of(records);
        info!(
            projects = report.projects,
            skills = report.skills,
            contacts = report.contacts,
            experience = report.experience,
            replace,
            "Record store seeded"
        );

        Ok(report)
    }

    /// Seed only a completely empty store. Returns `None` when skipped.
    pub async fn seed_if_empty(&self, records: &RecordSet) -> Result<Option<SeedReport>> {
        if !self.db.is_empty().await? {
            info!("Record store already populated, skipping seed");
            return Ok(None);
        }

        if records.total() == 0 {
            warn!("Seed fixture has no records");
        }

        self.seed(records, false).await.map(Some)
    }
}

fn require(what: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PortfolioError::InvalidRecord(format!("{} is empty", what)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::ContactKind;

    const FIXTURE: &str = r#"
        [[projects]]
        name = "Terminal Portfolio"
        description = "A retro terminal-style personal portfolio website"
        tags = "Svelte, Rust, SQLite"

        [[projects]]
        name = "Company Site"
        description = "Maintained the public website"
        tags = "PHP, MySQL"
        url = "https://example.com"

        [[skills]]
        name = "Rust"
        proficiency = 75

        [[contacts]]
        type = "github"
        value = "GitHub"
        url = "https://github.com/example"

        [[contacts]]
        type = "viber"
        value = "+10000000000"

        [[experience]]
        company = "ACME"
        duration = "2023 - Present"
        description = "Backend developer"
        tech_stack = "Rust, PostgreSQL"
    "#;

    async fn create_test_seeder() -> (Seeder, Arc<Database>) {
        let db = Arc::new(Database::new_test().await.unwrap());
        (Seeder::new(Arc::clone(&db)), db)
    }

    #[test]
    fn test_parse_fixture() {
        let records = Seeder::parse(FIXTURE).unwrap();

        assert_eq!(records.projects.len(), 2);
        assert_eq!(records.projects[1].url.as_deref(), Some("https://example.com"));
        assert_eq!(records.contacts[0].kind, ContactKind::Github);
        assert_eq!(records.contacts[1].url, None);
        assert_eq!(records.total(), 6);
    }

    #[test]
    fn test_parse_rejects_unknown_contact_kind() {
        let result = Seeder::parse(
            r#"
            [[contacts]]
            type = "telegram"
            value = "@someone"
            "#,
        );

        assert!(matches!(result, Err(PortfolioError::SeedParse(_))));
    }

    #[test]
    fn test_validate_proficiency_range() {
        let mut records = Seeder::parse(FIXTURE).unwrap();
        records.skills[0].proficiency = 101;

        match Seeder::validate(&records) {
            Err(PortfolioError::InvalidRecord(msg)) => assert!(msg.contains("Rust")),
            other => panic!("Expected InvalidRecord error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_empty_text() {
        let mut records = Seeder::parse(FIXTURE).unwrap();
        records.experience[0].tech_stack = "   ".to_string();

        assert!(matches!(
            Seeder::validate(&records),
            Err(PortfolioError::InvalidRecord(_))
        ));
    }

    #[tokio::test]
    async fn test_seed_reports_counts() {
        let (seeder, db) = create_test_seeder().await;
        let records = Seeder::parse(FIXTURE).unwrap();

        let report = seeder.seed(&records, false).await.unwrap();
        assert_eq!(report.projects, 2);
        assert_eq!(report.total(), 6);

        let stats = db.stats().await.unwrap();
        assert_eq!(stats.total_contacts, 2);
    }

    #[tokio::test]
    async fn test_invalid_records_are_not_written() {
        let (seeder, db) = create_test_seeder().await;
        let mut records = Seeder::parse(FIXTURE).unwrap();
        records.projects[0].name = String::new();

        assert!(seeder.seed(&records, false).await.is_err());
        assert!(db.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_seed_if_empty_runs_once() {
        let (seeder, db) = create_test_seeder().await;
        let records = Seeder::parse(FIXTURE).unwrap();

        let first = seeder.seed_if_empty(&records).await.unwrap();
        assert!(first.is_some());

        let second = seeder.seed_if_empty(&records).await.unwrap();
        assert!(second.is_none());

        assert_eq!(db.get_projects().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_replace_reseeds() {
        let (seeder, db) = create_test_seeder().await;
        let records = Seeder::parse(FIXTURE).unwrap();

        seeder.seed(&records, false).await.unwrap();
        seeder.seed(&records, true).await.unwrap();

        assert_eq!(db.get_skills().await.unwrap().len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Seeder::load_file("/definitely/not/here.toml");
        assert!(matches!(result, Err(PortfolioError::Io(_))));
    }
}
