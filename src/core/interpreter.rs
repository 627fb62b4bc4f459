//! Terminal command interpreter
//!
//! Maps one line of visitor input to a canned response. Resolution order is
//! fixed: exact literal commands, then the `sudo` prefix, then the `rm`
//! prefix, then "not found". Prefixes are matched on the raw normalized text,
//! so `sudoku` and `rmdir` land in the prefix branches too.

use crate::core::render;
use crate::core::store::RecordStore;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What the terminal frontend gets back for one command.
///
/// `user` and `path` stay empty except after a successful privilege
/// escalation, where the frontend swaps its prompt to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub output: String,
    pub user: String,
    pub path: String,
}

impl CommandResponse {
    pub fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            user: String::new(),
            path: String::new(),
        }
    }
}

/// Every branch the interpreter can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    About,
    Projects,
    Skills,
    Contacts,
    Experience,
    Resume,
    Stack,
    Neofetch,
    Shutdown,
    Sudo,
    Rm,
    Unknown,
}

/// Literal commands, matched after normalization
pub const LITERAL_COMMANDS: &[(&str, Command)] = &[
    ("help", Command::Help),
    ("about", Command::About),
    ("projects", Command::Projects),
    ("skills", Command::Skills),
    ("contacts", Command::Contacts),
    ("experience", Command::Experience),
    ("resume", Command::Resume),
    ("stack", Command::Stack),
    ("neofetch", Command::Neofetch),
    ("shutdown", Command::Shutdown),
];

const SUDO_PREFIX: &str = "sudo";
const RM_PREFIX: &str = "rm";
const HIRE_KEYWORD: &str = "hire";

impl Command {
    /// Pick the branch for an already-normalized command line
    pub fn resolve(normalized: &str) -> Command {
        if let Some((_, command)) = LITERAL_COMMANDS.iter().find(|(name, _)| *name == normalized) {
            return *command;
        }

        if normalized.starts_with(SUDO_PREFIX) {
            Command::Sudo
        } else if normalized.starts_with(RM_PREFIX) {
            Command::Rm
        } else {
            Command::Unknown
        }
    }

    /// Whether answering this command needs the record store
    pub fn reads_store(&self) -> bool {
        matches!(
            self,
            Command::Projects | Command::Skills | Command::Contacts | Command::Experience
        )
    }
}

/// Lowercase and trim surrounding whitespace
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Owner-specific strings baked into a few responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalProfile {
    /// Prompt user after `sudo hire ...`
    pub privileged_user: String,
    /// Prompt path after `sudo hire ...`
    pub privileged_path: String,
    /// Address offered in the access-granted message
    pub contact_email: String,
    /// Where the résumé download link points
    pub resume_url: String,
    pub resume_updated: String,
}

impl Default for TerminalProfile {
    fn default() -> Self {
        Self {
            privileged_user: "root".to_string(),
            privileged_path: "/dchosen".to_string(),
            contact_email: "[EMAIL_ADDRESS]".to_string(),
            resume_url: "/public/LDD - Resume January 2026 V2.pdf".to_string(),
            resume_updated: "February 2026".to_string(),
        }
    }
}

const HELP_TEXT: &str = "Available commands:\n\
- help: you're looking at it, genius\n\
- about: who's behind this terminal?\n\
- experience: war stories from back in the day\n\
- projects: stuff i've shipped\n\
- skills: my tech arsenal and loadout\n\
- contacts: slide into my DMs\n\
- stack: how i built this thing\n\
- resume: the formal stuff adults like (PDF)\n\
- clear: wipe the slate clean\n";

const ABOUT_TEXT: &str = "ABOUT ME\n\
========\n\n\
Hi, I'm <span style='color:#4facfe;font-weight:bold;'>Dave Dichoson</span>.\n\n\
I'm a <span style='color:#bd5eff;'>Backend Developer</span> with experience building\n\
scalable APIs, database systems, and maintaining enterprise applications.\n\n\
My core stack includes:\n  \
• .NET Core / C#\n  \
• JavaScript / TypeScript\n  \
• SQL Server / PostgreSQL / Oracle SQL / MySQL\n\n\
but for this specific project, I used: Svelte, Rust, axum, and SQLite.\n\
I'm passionate about clean code, system design, automation, and AI.\n\
Type <span style='color:#00ff00;'>contacts</span> to get in touch!";

const STACK_TEXT: &str = "SYSTEM ARCHITECTURE\n\
===================\n\
Frontend: <span style='color:#bd5eff;'>Svelte 5</span> + Vite\n\
Backend:  <span style='color:#bd5eff;'>axum</span> (Rust)\n\
Database: <span style='color:#bd5eff;'>SQLite</span> (via sqlx)\n\
Styling:  <span style='color:#bd5eff;'>CSS3</span> (CRT Effect, Scanlines)\n";

const NEOFETCH_TEXT: &str = r#"
             <span style='color:#00ff00;'>
                .-/+oossssoo+/-.               visitor@dchosen
            `:+ssssssssssssssssss+:`           ---------------
          -+ssssssssssssssssssyyssss+-         OS: PortfolioOS v1.0
        .ossssssssssssssssssdMMMNysssso.       Host: Browser
       /ssssssssssshdmmNNmmyNMMMMhssssss/      Kernel: Svelte 5.0
      +ssssssssshmydMMMMMMMNddddyssssssss+     Uptime: Forever
     /sssssssshNMMMyhhyyyyhmNMMMNhssssssss/    Packages: 0 (npm), 0 (cargo)
    .ssssssssdMMMNhsssssssssshNMMMdssssssss.   Shell: ZSH
    +sssshhhyNMMNyssssssssssssyNMMMysssssss+   CPU: Cloud Compute
    ossyNMMMNyMMhsssssssssssssshmmmhssssssso   GPU: WebGL
    ossyNMMMNyMMhsssssssssssssshmmmhssssssso   Memory: 640KB
    +sssshhhyNMMNyssssssssssssyNMMMysssssss+
    .ssssssssdMMMNhsssssssssshNMMMdssssssss.
     /sssssssshNMMMyhhyyyyhmNMMMNhssssssss/
      +ssssssssshmydMMMMMMMNddddyssssssss+
       /ssssssssssshdmmNNmmyNMMMMhssssss/
        .ossssssssssssssssssdMMMNysssso.
          -+ssssssssssssssssssyyssss+-
            `:+ssssssssssssssssss+:`
                .-/+oossssoo+/-.
             </span>
             "#;

pub const SUDO_DENIED: &str =
    "visitor is not in the sudoers file. This incident will be reported.";
pub const RM_DENIED: &str = "Permission denied: filesystem is read-only.";
pub const SHUTDOWN_REFUSED: &str =
    "System is eternal. You cannot kill what is already dead (or static).";
pub const NOT_FOUND_PREFIX: &str = "Command not found";

/// Stateless command processor; safe to share across requests.
pub struct CommandInterpreter {
    store: RecordStore,
    profile: TerminalProfile,
}

impl CommandInterpreter {
    pub fn new(store: RecordStore, profile: TerminalProfile) -> Self {
        Self { store, profile }
    }

    /// Run one command line.
    ///
    /// Only a failing record store produces `Err`; unknown input and empty
    /// collections both resolve to ordinary text.
    pub async fn process(&self, raw: &str) -> Result<CommandResponse> {
        let normalized = normalize(raw);
        let command = Command::resolve(&normalized);

        debug!(command = %normalized, branch = ?command, "Resolved terminal command");

        let response = match command {
            Command::Help => CommandResponse::text(HELP_TEXT),
            Command::About => CommandResponse::text(ABOUT_TEXT),
            Command::Projects => {
                CommandResponse::text(render::projects(&self.store.projects().await?))
            }
            Command::Skills => CommandResponse::text(render::skills(&self.store.skills().await?)),
            Command::Contacts => {
                CommandResponse::text(render::contacts(&self.store.contacts().await?))
            }
            Command::Experience => {
                CommandResponse::text(render::experience(&self.store.experience().await?))
            }
            Command::Resume => CommandResponse::text(self.resume()),
            Command::Stack => CommandResponse::text(STACK_TEXT),
            Command::Neofetch => CommandResponse::text(NEOFETCH_TEXT),
            Command::Shutdown => CommandResponse::text(SHUTDOWN_REFUSED),
            Command::Sudo => self.sudo(&normalized),
            Command::Rm => CommandResponse::text(RM_DENIED),
            Command::Unknown => {
                CommandResponse::text(format!("{} {}", NOT_FOUND_PREFIX, normalized))
            }
        };

        Ok(response)
    }

    fn resume(&self) -> String {
        format!(
            "📄 <b>RESUME</b>\n\n\
             Click below to download my resume:\n\n\
             <a href='{}' target='_blank' style='color: #4facfe; text-decoration: underline; font-size: 1.1em;'>📥 Download Resume (PDF)</a>\n\n\
             <span style='color:#888;'>Last updated: {}</span>",
            self.profile.resume_url, self.profile.resume_updated
        )
    }

    fn sudo(&self, normalized: &str) -> CommandResponse {
        if !normalized.contains(HIRE_KEYWORD) {
            return CommandResponse::text(SUDO_DENIED);
        }

        CommandResponse {
            output: format!(
                "Access Granted. Contact me at: <a href='mailto:{email}'>{email}</a>",
                email = self.profile.contact_email
            ),
            user: self.profile.privileged_user.clone(),
            path: self.profile.privileged_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{Database, RecordSet, SkillInput};
    use std::sync::Arc;

    async fn setup() -> (CommandInterpreter, Arc<Database>) {
        let db = Arc::new(Database::new_test().await.unwrap());
        let interpreter = CommandInterpreter::new(
            RecordStore::new(Arc::clone(&db)),
            TerminalProfile::default(),
        );
        (interpreter, db)
    }

    #[test]
    fn test_resolve_literals() {
        for (name, command) in LITERAL_COMMANDS {
            assert_eq!(Command::resolve(name), *command);
        }
    }

    #[test]
    fn test_resolve_prefixes_capture_lookalikes() {
        assert_eq!(Command::resolve("sudo"), Command::Sudo);
        assert_eq!(Command::resolve("sudoku"), Command::Sudo);
        assert_eq!(Command::resolve("rm -rf /"), Command::Rm);
        assert_eq!(Command::resolve("rmdir tmp"), Command::Rm);
        assert_eq!(Command::resolve("help me"), Command::Unknown);
        assert_eq!(Command::resolve(""), Command::Unknown);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  HELP \n"), "help");
        assert_eq!(normalize("Sudo Hire Me"), "sudo hire me");
    }

    #[test]
    fn test_reads_store() {
        assert!(Command::Skills.reads_store());
        assert!(!Command::Help.reads_store());
        assert!(!Command::Sudo.reads_store());
    }

    #[tokio::test]
    async fn test_case_and_whitespace_variants_match() {
        let (interpreter, _db) = setup().await;

        let plain = interpreter.process("help").await.unwrap();
        let noisy = interpreter.process("  HELP  ").await.unwrap();
        assert_eq!(plain, noisy);
        assert!(plain.output.starts_with("Available commands:\n"));
        assert!(plain.user.is_empty());
        assert!(plain.path.is_empty());
    }

    #[tokio::test]
    async fn test_sudo_hire_grants_root() {
        let (interpreter, _db) = setup().await;

        let response = interpreter.process("sudo hire me").await.unwrap();
        assert!(response.output.contains("Access Granted"));
        assert!(response.output.contains("mailto:"));
        assert_eq!(response.user, "root");
        assert_eq!(response.path, "/dchosen");
    }

    #[tokio::test]
    async fn test_sudo_without_hire_is_denied() {
        let (interpreter, _db) = setup().await;

        let response = interpreter.process("sudo ls").await.unwrap();
        assert_eq!(response, CommandResponse::text(SUDO_DENIED));
        assert!(response.output.contains("not in the sudoers file"));
    }

    #[tokio::test]
    async fn test_rm_is_read_only() {
        let (interpreter, _db) = setup().await;

        let response = interpreter.process("rm -rf /").await.unwrap();
        assert_eq!(response.output, RM_DENIED);
    }

    #[tokio::test]
    async fn test_unknown_command_echoes_input() {
        let (interpreter, _db) = setup().await;

        let response = interpreter.process("banana").await.unwrap();
        assert_eq!(response.output, "Command not found banana");

        let response = interpreter.process("  BaNaNa Split ").await.unwrap();
        assert_eq!(response.output, "Command not found banana split");
    }

    #[tokio::test]
    async fn test_empty_input_resolves_to_not_found() {
        let (interpreter, _db) = setup().await;

        let response = interpreter.process("   ").await.unwrap();
        assert_eq!(response.output, "Command not found ");
    }

    #[tokio::test]
    async fn test_shutdown() {
        let (interpreter, _db) = setup().await;

        let response = interpreter.process("shutdown").await.unwrap();
        assert_eq!(response.output, SHUTDOWN_REFUSED);
    }

    #[tokio::test]
    async fn test_static_pages() {
        let (interpreter, _db) = setup().await;

        let about = interpreter.process("about").await.unwrap();
        assert!(about.output.starts_with("ABOUT ME\n"));

        let stack = interpreter.process("stack").await.unwrap();
        assert_eq!(stack.output.lines().count(), 6);

        let resume = interpreter.process("resume").await.unwrap();
        assert!(resume.output.contains("href='/public/LDD - Resume January 2026 V2.pdf'"));
        assert!(resume.output.contains("Last updated: February 2026"));

        let neofetch = interpreter.process("neofetch").await.unwrap();
        assert!(neofetch.output.contains("visitor@dchosen"));
    }

    #[tokio::test]
    async fn test_empty_skills_placeholder() {
        let (interpreter, _db) = setup().await;

        let response = interpreter.process("skills").await.unwrap();
        assert_eq!(response.output, render::NO_SKILLS);
    }

    #[tokio::test]
    async fn test_skills_reflect_store() {
        let (interpreter, db) = setup().await;

        db.import_records(
            &RecordSet {
                skills: vec![
                    SkillInput {
                        name: "Python".to_string(),
                        proficiency: 0,
                    },
                    SkillInput {
                        name: "Git".to_string(),
                        proficiency: 100,
                    },
                ],
                ..Default::default()
            },
            false,
        )
        .await
        .unwrap();

        let response = interpreter.process("Skills").await.unwrap();
        let lines: Vec<&str> = response.output.lines().skip(3).collect();
        assert_eq!(lines[0], "Git      [████████████████████] 100%");
        assert_eq!(lines[1], "Python   [░░░░░░░░░░░░░░░░░░░░] 0%");
    }

    #[tokio::test]
    async fn test_custom_profile() {
        let db = Arc::new(Database::new_test().await.unwrap());
        let profile = TerminalProfile {
            privileged_user: "admin".to_string(),
            privileged_path: "/home/admin".to_string(),
            contact_email: "owner@example.com".to_string(),
            ..Default::default()
        };
        let interpreter = CommandInterpreter::new(RecordStore::new(db), profile);

        let response = interpreter.process("sudo please hire").await.unwrap();
        assert!(response.output.contains("owner@example.com"));
        assert_eq!(response.user, "admin");
        assert_eq!(response.path, "/home/admin");
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let (interpreter, db) = setup().await;
        db.close().await;

        assert!(interpreter.process("projects").await.is_err());
        // Static branches never touch the store
        assert!(interpreter.process("help").await.is_ok());
    }
}
