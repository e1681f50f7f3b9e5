//! Résumé data model
//!
//! Field names follow the camelCase shape of the form layer (`personalInfo`,
//! `fieldOfStudy`, `isCurrentPosition`, ...). Every field has a default, so
//! partial records deserialize; blank optional strings are treated as absent.

mod load;
mod skills;

pub use load::{load_resume, ResumeFormat};
pub use skills::{SkillCategory, SkillGroup};

use serde::{Deserialize, Deserializer, Serialize};

/// Contact details shown in the document header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// LinkedIn handle without host, e.g. `jane-doe`
    #[serde(
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub linkedin: Option<String>,
    /// GitHub handle without host
    #[serde(
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub github: Option<String>,
    /// Personal website without protocol
    #[serde(
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub institution: String,
    pub location: String,
    pub degree: String,
    #[serde(
        alias = "field",
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub field_of_study: Option<String>,
    /// Text is kept as written (`"3.90"`); numbers are normalized (`4.0` becomes `4`)
    #[serde(
        deserialize_with = "non_blank_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub gpa: Option<String>,
    #[serde(
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<String>,
    #[serde(
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<String>,
    /// Pre-joined date range; wins over start/end when present
    #[serde(
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub dates: Option<String>,
    pub is_currently_enrolled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    #[serde(alias = "title")]
    pub position: String,
    pub company: String,
    pub location: String,
    #[serde(
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<String>,
    #[serde(
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<String>,
    #[serde(
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub dates: Option<String>,
    pub is_current_position: bool,
    /// Display order; duplicates are kept
    #[serde(deserialize_with = "null_as_default")]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    #[serde(alias = "title")]
    pub name: String,
    /// Free text (`"Rust, Axum"`) or a list of names
    #[serde(deserialize_with = "string_or_list")]
    pub technologies: Vec<String>,
    #[serde(
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
    #[serde(
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<String>,
    #[serde(
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<String>,
    #[serde(
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub dates: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
}

/// A complete résumé record
///
/// Rendering takes it by shared reference and never modifies it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    pub personal_info: PersonalInfo,
    #[serde(
        deserialize_with = "non_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub summary: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: SkillGroup,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<Certification>,
}

impl Resume {
    /// Parse a résumé from JSON text
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Parse a résumé from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Optional string where blank means absent
fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Like [`non_blank`], but numbers are accepted in their shortest form
fn non_blank_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        String(String),
        Integer(i64),
        Float(f64),
    }

    let value: Option<Text> = Option::deserialize(deserializer)?;
    let text = value.map(|text| match text {
        Text::String(s) => s,
        Text::Integer(i) => i.to_string(),
        Text::Float(f) => f.to_string(),
    });
    Ok(text.filter(|s| !s.trim().is_empty()))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single free-text string or a list of strings, blanks dropped
fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        One(String),
        Many(Vec<String>),
    }

    let items = match Option::<StringOrList>::deserialize(deserializer)? {
        Some(StringOrList::One(s)) => vec![s],
        Some(StringOrList::Many(items)) => items,
        None => Vec::new(),
    };
    Ok(items.into_iter().filter(|s| !s.trim().is_empty()).collect())
}
