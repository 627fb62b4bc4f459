/// Text renderers for the data-backed terminal commands.
///
/// Output carries inline HTML for the terminal frontend. It is built as plain
/// strings and never escaped here; the frontend owns presentation.

use crate::db::{Contact, ContactKind, Experience, Project, Skill};

/// Number of glyphs in a full proficiency bar (100%)
pub const BAR_WIDTH: usize = 20;

const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';

/// Extra columns after the longest skill name
const NAME_MARGIN: usize = 2;

/// Width of the contact kind label column
const LABEL_WIDTH: usize = 10;

pub const NO_PROJECTS: &str = "No projects found.";
pub const NO_SKILLS: &str = "Lowie is cooked. Damn.";
pub const NO_CONTACTS: &str = "No contacts found.";
pub const NO_EXPERIENCE: &str = "No experience records found.";

const CONTACT_ICONS: [(ContactKind, &str); 5] = [
    (ContactKind::Gmail, "📧"),
    (ContactKind::Github, "🐙"),
    (ContactKind::Linkedin, "💼"),
    (ContactKind::Viber, "📱"),
    (ContactKind::Whatsapp, "💬"),
];

const DEFAULT_CONTACT_ICON: &str = "📞";

pub fn projects(projects: &[Project]) -> String {
    if projects.is_empty() {
        return NO_PROJECTS.to_string();
    }

    let mut out = String::from("<span style='color:#00ff00;'>STUFF I'VE SHIPPED</span>\n");
    out.push_str("━━━━━━━━━━━━━━━━━━━━\n\n");

    for p in projects {
        out.push_str(&format!("<span style='color:#4facfe;'>▸ {}</span>\n", p.name));
        out.push_str(&format!("  {}\n", p.description));
        out.push_str(&format!("  <span style='color:#888;'>[ {} ]</span>\n\n", p.tags));
    }

    out.push_str(
        "<span style='color:#bd5eff; font-style:italic;'>Type a project name to dive deeper... (coming soon)</span>",
    );
    out
}

/// Render a proficiency bar: one filled glyph per 5%, floored.
pub fn proficiency_bar(proficiency: i32) -> String {
    let filled = (proficiency.clamp(0, 100) / 5) as usize;

    let mut bar = String::with_capacity(BAR_WIDTH * BAR_FILLED.len_utf8());
    bar.extend(std::iter::repeat(BAR_FILLED).take(filled));
    bar.extend(std::iter::repeat(BAR_EMPTY).take(BAR_WIDTH - filled));
    bar
}

pub fn skills(skills: &[Skill]) -> String {
    if skills.is_empty() {
        return NO_SKILLS.to_string();
    }

    let width = skills
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0)
        + NAME_MARGIN;

    let mut out = String::from("TECHNICAL SKILLS\n");
    out.push_str("===================\n\n");

    for s in skills {
        out.push_str(&format!(
            "{:<width$} [{}] {}%\n",
            s.name,
            proficiency_bar(s.proficiency),
            s.proficiency,
            width = width
        ));
    }

    out
}

pub fn contact_icon(kind: ContactKind) -> &'static str {
    CONTACT_ICONS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_CONTACT_ICON)
}

/// "github" -> "Github"
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn contacts(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return NO_CONTACTS.to_string();
    }

    let mut out = String::from("CONTACT CHANNELS\n");
    out.push_str("----------------\n");

    for c in contacts {
        let icon = contact_icon(c.kind);
        let label = format!("{:<width$}", capitalize(c.kind.as_str()), width = LABEL_WIDTH);

        match c.link() {
            Some(url) => out.push_str(&format!(
                "{} {} : <a href='{}' target='_blank' style='color: #4facfe; text-decoration: underline; cursor: pointer;'>{}</a>\n",
                icon, label, url, c.value
            )),
            None => out.push_str(&format!("{} {} : {}\n", icon, label, c.value)),
        }
    }

    out.push_str(
        "\n<span style='color: #bd5eff; font-style: italic;'>Open for opportunities. Don't hesitate to say hi!</span>",
    );
    out
}

pub fn experience(entries: &[Experience]) -> String {
    if entries.is_empty() {
        return NO_EXPERIENCE.to_string();
    }

    let mut out =
        String::from("<span style='color:#00ff00;'>WAR STORIES FROM THE TRENCHES</span>\n");
    out.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    for e in entries {
        out.push_str(&format!(
            "<span style='color:#4facfe;'>⚡ {}</span>  <span style='color:#888;'>({})</span>\n",
            e.company, e.duration
        ));
        out.push_str(&format!("   └─ {}\n", e.description));
        out.push_str(&format!("   <span style='color:#bd5eff;'>⚙ {}</span>\n\n", e.tech_stack));
    }

    out.push_str("<span style='color:#888; font-style:italic;'>Still writing new chapters...</span>");
    out
}
