//! Document generation: résumé to LaTeX
//!
//! A document is one layout template rendered against the résumé context
//! built in [`context`]. Each section of the output is preceded by a fixed
//! marker comment line (see [`Section::marker`]) whether or not the section
//! has content, so viewers can locate sections by text search.

pub mod builtin_layouts;
pub mod context;
pub mod layout;

pub use builtin_layouts::{
    builtin_layout_names, classic_layout, get_builtin_layout, DEFAULT_LAYOUT,
};
pub use context::{format_date_range, resume_context};
pub use layout::{resolve_layout, user_layout_names, Layout, LAYOUT_FILE};

use crate::resume::Resume;
use crate::template::Template;

/// Top-level document sections, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Heading,
    Education,
    Experience,
    Projects,
    Skills,
    Certifications,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Heading,
        Section::Education,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Certifications,
    ];

    /// Marker line emitted right before the section
    pub fn marker(self) -> &'static str {
        match self {
            Section::Heading => "%-----------HEADING-----------",
            Section::Education => "%-----------EDUCATION-----------",
            Section::Experience => "%-----------EXPERIENCE-----------",
            Section::Projects => "%-----------PROJECTS-----------",
            Section::Skills => "%-----------SKILLS-----------",
            Section::Certifications => "%-----------CERTIFICATIONS-----------",
        }
    }

    /// Lowercase name, as used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Section::Heading => "heading",
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Certifications => "certifications",
        }
    }
}

/// Render a résumé with the builtin `classic` layout
pub fn generate(resume: &Resume) -> String {
    generate_with(&classic_layout(), resume)
}

/// Render a résumé with any layout
///
/// Never fails: a malformed layout is rendered leniently.
pub fn generate_with(layout: &Layout, resume: &Resume) -> String {
    let context = resume_context(resume);
    Template::compile_lenient(&layout.template).render(&context)
}

/// Byte offset of a section's marker in a rendered document
///
/// Only a line consisting of the marker (after indentation) counts, so text
/// inside a line can never be mistaken for a marker.
pub fn find_section(document: &str, section: Section) -> Option<usize> {
    let marker = section.marker();
    let mut offset = 0;
    for line in document.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if trimmed.trim_end() == marker {
            return Some(offset + (line.len() - trimmed.len()));
        }
        offset += line.len();
    }
    None
}

/// 1-based line number of a section's marker
pub fn section_line(document: &str, section: Section) -> Option<usize> {
    find_section(document, section).map(|offset| document[..offset].matches('\n').count() + 1)
}
