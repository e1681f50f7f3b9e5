//! Skills grouped by category
//!
//! Accepts two input shapes:
//!
//! - a list of `{ category, skills }` records (canonical)
//! - a map of category name to skills, in document order (legacy). The four
//!   keys of the old fixed shape (`languages`, `frameworks`, `devTools`,
//!   `libraries`) get their display labels.

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One category and its skills, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    #[serde(default, alias = "items")]
    pub skills: Vec<String>,
}

/// Ordered, duplicate-free skill categories
///
/// Category order is significant and preserved. Blank skills and categories
/// without skills are dropped; a repeated category name is merged into its
/// first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillGroup {
    categories: Vec<SkillCategory>,
}

impl SkillGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add skills under `category`, merging with an existing category
    pub fn push<I, S>(&mut self, category: impl Into<String>, skills: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let category = category.into();
        let skills: Vec<String> = skills
            .into_iter()
            .map(Into::into)
            .filter(|s: &String| !s.trim().is_empty())
            .collect();

        if category.trim().is_empty() || skills.is_empty() {
            return;
        }

        match self
            .categories
            .iter_mut()
            .find(|existing| existing.category == category)
        {
            Some(existing) => existing.skills.extend(skills),
            None => self.categories.push(SkillCategory { category, skills }),
        }
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.skills.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }
}

impl FromIterator<SkillCategory> for SkillGroup {
    fn from_iter<T: IntoIterator<Item = SkillCategory>>(iter: T) -> Self {
        let mut group = SkillGroup::new();
        for SkillCategory { category, skills } in iter {
            group.push(category, skills);
        }
        group
    }
}

/// Display label for a legacy category key
pub fn legacy_label(key: &str) -> &str {
    match key {
        "languages" => "Languages",
        "frameworks" => "Frameworks",
        "devTools" => "Developer Tools",
        "libraries" => "Libraries",
        other => other,
    }
}

struct SkillGroupVisitor;

impl<'de> Visitor<'de> for SkillGroupVisitor {
    type Value = SkillGroup;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a list of skill categories or a map of category to skills")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<SkillGroup, A::Error> {
        let mut group = SkillGroup::new();
        while let Some(SkillCategory { category, skills }) = seq.next_element()? {
            group.push(category, skills);
        }
        Ok(group)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<SkillGroup, A::Error> {
        let mut group = SkillGroup::new();
        while let Some((key, skills)) = map.next_entry::<String, Option<Vec<String>>>()? {
            group.push(legacy_label(&key), skills.unwrap_or_default());
        }
        Ok(group)
    }

    fn visit_unit<E: de::Error>(self) -> Result<SkillGroup, E> {
        Ok(SkillGroup::new())
    }
}

impl<'de> Deserialize<'de> for SkillGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SkillGroupVisitor)
    }
}
