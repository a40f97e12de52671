//! Table of contents built from level-2 and level-3 headings.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A level-2 heading together with the level-3 headings nested under it.
///
/// Serializes as a flat sequence of strings whose first element is the
/// section title, e.g. `["Intro", "Background", "Goals"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<String>", try_from = "Vec<String>")]
pub struct Section {
    /// Level-2 heading text
    pub title: String,

    /// Level-3 heading texts, in document order
    pub subsections: Vec<String>,
}

impl Section {
    /// Create a new section with no subsections.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subsections: Vec::new(),
        }
    }

    /// Add a subsection title.
    pub fn add_subsection(&mut self, title: impl Into<String>) {
        self.subsections.push(title.into());
    }

    /// Flatten into `[title, subsections...]`.
    pub fn to_vec(&self) -> Vec<String> {
        std::iter::once(self.title.clone())
            .chain(self.subsections.iter().cloned())
            .collect()
    }
}

impl From<Section> for Vec<String> {
    fn from(section: Section) -> Self {
        let mut entries = Vec::with_capacity(section.subsections.len() + 1);
        entries.push(section.title);
        entries.extend(section.subsections);
        entries
    }
}

impl TryFrom<Vec<String>> for Section {
    type Error = Error;

    fn try_from(entries: Vec<String>) -> Result<Self, Self::Error> {
        let mut entries = entries.into_iter();
        let title = entries
            .next()
            .ok_or_else(|| Error::InvalidSection("section has no title".to_string()))?;
        Ok(Self {
            title,
            subsections: entries.collect(),
        })
    }
}

/// Ordered table of contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableOfContents {
    /// Sections in document order
    pub sections: Vec<Section>,
}

impl TableOfContents {
    /// Create an empty table of contents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new section. Subsequent subsections attach to it.
    pub fn open_section(&mut self, title: impl Into<String>) {
        self.sections.push(Section::new(title));
    }

    /// Attach a subsection to the most recently opened section.
    ///
    /// Returns `false` (and records nothing) when no section is open yet.
    pub fn add_subsection(&mut self, title: impl Into<String>) -> bool {
        match self.sections.last_mut() {
            Some(section) => {
                section.add_subsection(title);
                true
            }
            None => false,
        }
    }

    /// Check if the table of contents is empty.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Total number of subsections across all sections.
    pub fn subsection_count(&self) -> usize {
        self.sections.iter().map(|s| s.subsections.len()).sum()
    }

    /// Iterate over sections.
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Nested string form: one inner vector per section, title first.
    pub fn to_nested(&self) -> Vec<Vec<String>> {
        self.sections.iter().map(Section::to_vec).collect()
    }
}

impl<'a> IntoIterator for &'a TableOfContents {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
