//! Static profile record rendered by the portfolio site.
//!
//! This crate owns the data contract between the content payload
//! (`data/profile.json`, embedded at compile time) and the `folio` UI crate.
//! The record is parsed once, validated for presence of required text, and
//! never mutated afterwards.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Deserialize;

/// The default profile payload shipped with the site.
pub const EMBEDDED_PROFILE: &str = include_str!("../data/profile.json");

static PROFILE: OnceLock<Result<Profile, ProfileError>> = OnceLock::new();

/// Return the embedded profile record, parsing it on first access.
///
/// # Errors
///
/// Returns the configuration error produced while parsing or validating the
/// embedded payload. The same error is returned on every call.
pub fn profile() -> Result<&'static Profile, &'static ProfileError> {
    PROFILE.get_or_init(|| Profile::from_json(EMBEDDED_PROFILE)).as_ref()
}

/// Error returned when a profile payload cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// The payload is not valid JSON or does not match the record shape.
    #[error("failed to parse profile: {0}")]
    Parse(#[from] serde_json::Error),
    /// A required text field is present but blank.
    #[error("profile field `{field}` must not be blank")]
    MissingField { field: &'static str },
}

/// Kinds of outbound link carried by the profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Resume,
    Github,
    Linkedin,
    Email,
}

impl LinkKind {
    pub const ALL: [LinkKind; 4] = [Self::Resume, Self::Github, Self::Linkedin, Self::Email];

    /// Field name as it appears in the payload.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Resume => "links.resume",
            Self::Github => "links.github",
            Self::Linkedin => "links.linkedin",
            Self::Email => "links.email",
        }
    }
}

/// Outbound URIs. Values are opaque; only presence is checked.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Links {
    pub resume: String,
    pub github: String,
    pub linkedin: String,
    pub email: String,
}

impl Links {
    #[must_use]
    pub fn get(&self, kind: LinkKind) -> &str {
        match kind {
            LinkKind::Resume => &self.resume,
            LinkKind::Github => &self.github,
            LinkKind::Linkedin => &self.linkedin,
            LinkKind::Email => &self.email,
        }
    }
}

/// A labelled group of technologies.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TechGroup {
    pub label: String,
    pub items: Vec<String>,
    /// Marks aspirational groups rather than current proficiency.
    #[serde(default)]
    pub future: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProjectCategory {
    pub category: String,
    pub items: Vec<Project>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub stack: Vec<String>,
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Experience {
    pub role: String,
    pub org: String,
    pub period: String,
    pub details: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Education {
    pub program: String,
    pub org: String,
    pub period: String,
    pub details: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub period: String,
    pub details: String,
}

/// Landing copy shown above the fold. Every field is optional in the payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Hero {
    /// Small caps line above the title.
    pub eyebrow: String,
    /// Short descriptor shown under the name in the header.
    pub strapline: String,
    pub badges: Vec<String>,
    pub focus: Vec<FocusCard>,
    pub note: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FocusCard {
    pub caption: String,
    pub heading: String,
    pub body: String,
}

/// The complete profile record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub summary: String,
    pub links: Links,
    #[serde(default)]
    pub hero: Hero,
    pub tech_stack: Vec<TechGroup>,
    pub projects: Vec<ProjectCategory>,
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

/// A natural key that appears more than once within its containing list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateKey {
    /// Where the collision was found, e.g. `techStack` or `projects[DevOps].items`.
    pub scope: String,
    pub key: String,
}

impl Profile {
    /// Parse and validate a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Parse`] for malformed JSON or a shape mismatch,
    /// and [`ProfileError::MissingField`] for blank required text.
    pub fn from_json(raw: &str) -> Result<Self, ProfileError> {
        let profile: Profile = serde_json::from_str(raw)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Check that identity text and every link are present.
    ///
    /// # Errors
    ///
    /// Returns the first blank field in declaration order.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let identity = [
            ("name", &self.name),
            ("title", &self.title),
            ("tagline", &self.tagline),
            ("summary", &self.summary),
        ];
        for (field, value) in identity {
            if value.trim().is_empty() {
                return Err(ProfileError::MissingField { field });
            }
        }
        for kind in LinkKind::ALL {
            if self.links.get(kind).trim().is_empty() {
                return Err(ProfileError::MissingField { field: kind.key() });
            }
        }
        Ok(())
    }

    /// List natural keys that repeat within their containing sequence.
    ///
    /// Rendering keys list items by these fields, so every entry here is a
    /// content defect. Loading still succeeds.
    #[must_use]
    pub fn duplicate_keys(&self) -> Vec<DuplicateKey> {
        let mut out = Vec::new();
        collect_duplicates("techStack", self.tech_stack.iter().map(|g| g.label.as_str()), &mut out);
        for group in &self.tech_stack {
            let scope = format!("techStack[{}].items", group.label);
            collect_duplicates(&scope, group.items.iter().map(String::as_str), &mut out);
        }
        collect_duplicates("projects", self.projects.iter().map(|c| c.category.as_str()), &mut out);
        for category in &self.projects {
            let scope = format!("projects[{}].items", category.category);
            collect_duplicates(&scope, category.items.iter().map(|p| p.name.as_str()), &mut out);
        }
        collect_duplicates("experience", self.experience.iter().map(|e| e.role.as_str()), &mut out);
        collect_duplicates("education", self.education.iter().map(|e| e.program.as_str()), &mut out);
        collect_duplicates(
            "certifications",
            self.certifications.iter().map(|c| c.name.as_str()),
            &mut out,
        );
        out
    }

    /// First character of each whitespace-separated part of the name.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

fn collect_duplicates<'a>(scope: &str, keys: impl Iterator<Item = &'a str>, out: &mut Vec<DuplicateKey>) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for key in keys {
        if !seen.insert(key) && reported.insert(key) {
            out.push(DuplicateKey { scope: scope.to_owned(), key: key.to_owned() });
        }
    }
}
