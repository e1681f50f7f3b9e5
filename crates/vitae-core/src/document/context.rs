//! Résumé to template data
//!
//! Every key an entry defines is always present on its frame, with `""` for
//! absent optionals, so those keys never fall through to the root (an
//! education entry without `location` must not print the person's location).
//! Keys an entry does not define, such as `summary` inside `education`, still
//! resolve from outer frames.

use crate::resume::{
    Certification, EducationEntry, ExperienceEntry, ProjectEntry, Resume, SkillCategory,
};
use crate::template::TemplateContext;
use toml::Value;

/// Separator for joined lists (skills, technologies)
pub const LIST_SEPARATOR: &str = ", ";

/// Word used for the end of an ongoing date range
pub const PRESENT: &str = "Present";

/// Build the rendering context for a résumé
///
/// Root keys: `name`, `email`, `phone`, `location`, `linkedin`, `github`,
/// `website`, `summary` and the lists `education`, `experience`, `projects`,
/// `skills`, `certifications`.
pub fn resume_context(resume: &Resume) -> TemplateContext {
    let info = &resume.personal_info;
    TemplateContext::new(table([
        ("name", text(&info.name)),
        ("email", text(&info.email)),
        ("phone", text(&info.phone)),
        ("location", text(&info.location)),
        ("linkedin", optional(&info.linkedin)),
        ("github", optional(&info.github)),
        ("website", optional(&info.website)),
        ("summary", optional(&resume.summary)),
        ("education", list(&resume.education, education)),
        ("experience", list(&resume.experience, experience)),
        ("projects", list(&resume.projects, project)),
        ("skills", list(resume.skills.categories(), skill_category)),
        ("certifications", list(&resume.certifications, certification)),
    ]))
}

/// Join a date range for display
///
/// A non-blank pre-joined `dates` wins verbatim. Otherwise `start -- end`,
/// where an ongoing range ends in `Present`; with only one side known only
/// that side is shown.
pub fn format_date_range(
    dates: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
    ongoing: bool,
) -> String {
    if let Some(dates) = dates.filter(|d| !d.trim().is_empty()) {
        return dates.to_string();
    }

    let start = start.filter(|s| !s.trim().is_empty());
    let end = if ongoing {
        Some(PRESENT)
    } else {
        end.filter(|e| !e.trim().is_empty())
    };

    match (start, end) {
        (Some(start), Some(end)) => format!("{} -- {}", start, end),
        (Some(only), None) | (None, Some(only)) => only.to_string(),
        (None, None) => String::new(),
    }
}

fn education(entry: &EducationEntry) -> Value {
    table([
        ("institution", text(&entry.institution)),
        ("location", text(&entry.location)),
        ("degree", text(&entry.degree)),
        ("fieldOfStudy", optional(&entry.field_of_study)),
        ("gpa", optional(&entry.gpa)),
        (
            "dates",
            text(&format_date_range(
                entry.dates.as_deref(),
                entry.start_date.as_deref(),
                entry.end_date.as_deref(),
                entry.is_currently_enrolled,
            )),
        ),
        ("startDate", optional(&entry.start_date)),
        ("endDate", optional(&entry.end_date)),
        (
            "isCurrentlyEnrolled",
            Value::Boolean(entry.is_currently_enrolled),
        ),
    ])
}

fn experience(entry: &ExperienceEntry) -> Value {
    table([
        ("position", text(&entry.position)),
        ("company", text(&entry.company)),
        ("location", text(&entry.location)),
        (
            "dates",
            text(&format_date_range(
                entry.dates.as_deref(),
                entry.start_date.as_deref(),
                entry.end_date.as_deref(),
                entry.is_current_position,
            )),
        ),
        ("startDate", optional(&entry.start_date)),
        ("endDate", optional(&entry.end_date)),
        ("isCurrentPosition", Value::Boolean(entry.is_current_position)),
        ("bullets", strings(&entry.bullets)),
    ])
}

fn project(entry: &ProjectEntry) -> Value {
    table([
        ("name", text(&entry.name)),
        ("technologies", text(&entry.technologies.join(LIST_SEPARATOR))),
        ("url", optional(&entry.url)),
        (
            "dates",
            text(&format_date_range(
                entry.dates.as_deref(),
                entry.start_date.as_deref(),
                entry.end_date.as_deref(),
                false,
            )),
        ),
        ("startDate", optional(&entry.start_date)),
        ("endDate", optional(&entry.end_date)),
        ("bullets", strings(&entry.bullets)),
    ])
}

fn skill_category(category: &SkillCategory) -> Value {
    table([
        ("category", text(&category.category)),
        ("skills", strings(&category.skills)),
        ("joined", text(&category.skills.join(LIST_SEPARATOR))),
    ])
}

fn certification(entry: &Certification) -> Value {
    table([
        ("name", text(&entry.name)),
        ("issuer", text(&entry.issuer)),
        ("date", text(&entry.date)),
        ("url", optional(&entry.url)),
    ])
}

fn table<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Table(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect(),
    )
}

fn text(value: &str) -> Value {
    Value::String(value.to_string())
}

/// Absent and blank both become `""`
fn optional(value: &Option<String>) -> Value {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => text(v),
        _ => text(""),
    }
}

fn strings(items: &[String]) -> Value {
    Value::Array(items.iter().map(|item| text(item)).collect())
}

fn list<T>(items: &[T], entry: fn(&T) -> Value) -> Value {
    Value::Array(items.iter().map(entry).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::render;

    #[test]
    fn test_format_date_range() {
        let cases = [
            (Some("2018 -- 2022"), Some("2019"), None, false, "2018 -- 2022"),
            (Some("Summer 2021"), None, None, true, "Summer 2021"),
            (None, Some("Jan 2020"), Some("Dec 2021"), false, "Jan 2020 -- Dec 2021"),
            (None, Some("Jan 2020"), Some("Dec 2021"), true, "Jan 2020 -- Present"),
            (None, Some("Jan 2020"), None, true, "Jan 2020 -- Present"),
            (None, Some("Jan 2020"), None, false, "Jan 2020"),
            (None, None, Some("Dec 2021"), false, "Dec 2021"),
            (None, None, None, true, "Present"),
            (None, None, None, false, ""),
            (Some("  "), Some(""), Some(" "), false, ""),
        ];
        for (dates, start, end, ongoing, expected) in cases {
            assert_eq!(
                format_date_range(dates, start, end, ongoing),
                expected,
                "{:?} {:?} {:?} {}",
                dates,
                start,
                end,
                ongoing
            );
        }
    }

    #[test]
    fn test_context_root_keys() {
        let mut resume = Resume::default();
        resume.personal_info.name = "Jane".to_string();
        resume.personal_info.github = Some("jdoe".to_string());
        let context = resume_context(&resume);
        let root = context.data().as_table().unwrap();

        let keys: Vec<&str> = root.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "name",
                "email",
                "phone",
                "location",
                "linkedin",
                "github",
                "website",
                "summary",
                "education",
                "experience",
                "projects",
                "skills",
                "certifications"
            ]
        );
        assert_eq!(root["github"].as_str(), Some("jdoe"));
        assert_eq!(root["linkedin"].as_str(), Some(""));
    }

    #[test]
    fn test_entry_fields_do_not_fall_through_to_root() {
        let mut resume = Resume::default();
        resume.personal_info.location = "Home Town".to_string();
        resume.education.push(EducationEntry {
            institution: "MIT".to_string(),
            ..Default::default()
        });
        let context = resume_context(&resume);
        assert_eq!(
            render("{{#education}}[{{location}}]{{/education}}", &context),
            "[]"
        );
    }

    #[test]
    fn test_undefined_entry_keys_resolve_from_root() {
        let mut resume = Resume::default();
        resume.summary = Some("Builder".to_string());
        resume.education.push(EducationEntry {
            institution: "MIT".to_string(),
            ..Default::default()
        });
        let context = resume_context(&resume);
        assert_eq!(
            render("{{#education}}{{institution}}: {{summary}}{{/education}}", &context),
            "MIT: Builder"
        );
    }

    #[test]
    fn test_blank_optional_set_in_code_is_absent() {
        let mut resume = Resume::default();
        resume.summary = Some("   ".to_string());
        let context = resume_context(&resume);
        assert_eq!(render("{{#summary}}x{{/summary}}", &context), "");
    }

    #[test]
    fn test_skills_and_technologies_joined() {
        let mut resume = Resume::default();
        resume.skills.push("Languages", ["Rust", "Go"]);
        resume.projects.push(ProjectEntry {
            name: "vitae".to_string(),
            technologies: vec!["Rust".to_string(), "LaTeX".to_string()],
            ..Default::default()
        });
        let context = resume_context(&resume);
        assert_eq!(
            render("{{#skills}}{{category}}: {{joined}}{{/skills}}", &context),
            "Languages: Rust, Go"
        );
        assert_eq!(
            render("{{#projects}}{{technologies}}{{/projects}}", &context),
            "Rust, LaTeX"
        );
        assert_eq!(
            render("{{#skills}}{{#skills}}<{{.}}>{{/skills}}{{/skills}}", &context),
            "<Rust><Go>"
        );
    }

    #[test]
    fn test_ongoing_flags_exposed() {
        let mut resume = Resume::default();
        resume.experience.push(ExperienceEntry {
            start_date: Some("2021".to_string()),
            is_current_position: true,
            ..Default::default()
        });
        let context = resume_context(&resume);
        let template = "{{#experience}}{{dates}}{{#isCurrentPosition}} (current){{/isCurrentPosition}}{{/experience}}";
        assert_eq!(render(template, &context), "2021 -- Present (current)");
    }
}
