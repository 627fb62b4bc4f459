/// SQL query functions for database operations
///
/// Reads never filter; each collection has exactly one fixed ordering.

use crate::db::models::*;
use crate::db::Database;
use crate::error::Result;
use sqlx::Row;

impl Database {
    /// All projects in insertion order
    pub async fn get_projects(&self) -> Result<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>("SELECT * FROM project ORDER BY id ASC")
            .fetch_all(self.pool())
            .await?;

        Ok(projects)
    }

    /// All skills, most proficient first
    pub async fn get_skills(&self) -> Result<Vec<Skill>> {
        let skills = sqlx::query_as::<_, Skill>(
            "SELECT * FROM skill ORDER BY proficiency DESC, id ASC",
        )
        .fetch_all(self.pool())
        .await?;

        Ok(skills)
    }

    /// All contacts, ascending by channel kind name
    pub async fn get_contacts(&self) -> Result<Vec<Contact>> {
        let contacts =
            sqlx::query_as::<_, Contact>("SELECT * FROM contact ORDER BY type ASC, id ASC")
                .fetch_all(self.pool())
                .await?;

        Ok(contacts)
    }

    /// All experience entries in insertion order
    pub async fn get_experience(&self) -> Result<Vec<Experience>> {
        let experience =
            sqlx::query_as::<_, Experience>("SELECT * FROM experience ORDER BY id ASC")
                .fetch_all(self.pool())
                .await?;

        Ok(experience)
    }

    /// True when none of the four record collections has a row
    pub async fn is_empty(&self) -> Result<bool> {
        let row = sqlx::query(
            r#"
            SELECT
                (SELECT COUNT(*) FROM project)
              + (SELECT COUNT(*) FROM skill)
              + (SELECT COUNT(*) FROM contact)
              + (SELECT COUNT(*) FROM experience)
            "#,
        )
        .fetch_one(self.pool())
        .await?;

        let total: i64 = row.get(0);
        Ok(total == 0)
    }

    /// Load a full record set in one transaction
    ///
    /// # Arguments
    /// * `records` - Records to insert, in the order they should be listed
    /// * `replace` - Clear the four record tables first
    pub async fn import_records(&self, records: &RecordSet, replace: bool) -> Result<()> {
        let mut tx = self.pool().begin().await?;

        if replace {
            for table in ["project", "skill", "contact", "experience"] {
                sqlx::query(&format!("DELETE FROM {}", table))
                    .execute(&mut *tx)
                    .await?;
            }
        }

        for p in &records.projects {
            sqlx::query("INSERT INTO project (name, description, tags, url) VALUES (?, ?, ?, ?)")
                .bind(&p.name)
                .bind(&p.description)
                .bind(&p.tags)
                .bind(&p.url)
                .execute(&mut *tx)
                .await?;
        }

        for s in &records.skills {
            sqlx::query("INSERT INTO skill (name, proficiency) VALUES (?, ?)")
                .bind(&s.name)
                .bind(s.proficiency)
                .execute(&mut *tx)
                .await?;
        }

        for c in &records.contacts {
            sqlx::query("INSERT INTO contact (type, value, url) VALUES (?, ?, ?)")
                .bind(c.kind)
                .bind(&c.value)
                .bind(&c.url)
                .execute(&mut *tx)
                .await?;
        }

        for e in &records.experience {
            sqlx::query(
                "INSERT INTO experience (company, duration, description, tech_stack) VALUES (?, ?, ?, ?)",
            )
            .bind(&e.company)
            .bind(&e.duration)
            .bind(&e.description)
            .bind(&e.tech_stack)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    /// Store a contact-form message
    ///
    /// # Returns
    /// * `Ok(i64)` - The message ID
    pub async fn save_message(&self, input: MessageInput) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO message (name, email, content)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.content)
        .fetch_one(self.pool())
        .await?;

        Ok(result.get(0))
    }

    /// Get messages, newest first
    pub async fn get_messages(&self, limit: i64) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT * FROM message ORDER BY created_at DESC, id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(self.pool())
        .await?;

        Ok(messages)
    }
}
