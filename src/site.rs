//! Static site configuration: navigation, section copy, and fixed keys.
//!
//! This is configuration, not derived data. Section ids double as the anchor
//! targets listed in [`NAVIGATION`].

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use crate::state::view::Action;

/// Preference-store key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Year shown in the footer copyright line.
pub const COPYRIGHT_YEAR: u16 = 2024;

/// Hint shown under the résumé actions and in the preview header.
pub const RESUME_HINT: &str = "Replace with your latest PDF.";

/// One in-page navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Anchor target, including the leading `#`.
    pub href: &'static str,
}

impl NavLink {
    /// Action dispatched when the anchor is selected.
    ///
    /// Every in-page anchor goes through this so an open menu is closed no
    /// matter which copy of the link was used.
    #[must_use]
    pub fn action(self) -> Action {
        Action::Navigate(self.href.to_owned())
    }
}

pub const NAVIGATION: &[NavLink] = &[
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Tech Stack", href: "#tech" },
    NavLink { label: "Projects", href: "#projects" },
    NavLink { label: "Experience", href: "#experience" },
    NavLink { label: "Resume", href: "#resume" },
    NavLink { label: "Contact", href: "#contact" },
];

/// Call-to-action anchors in the landing block.
pub const HERO_ACTIONS: &[NavLink] = &[
    NavLink { label: "View Resume", href: "#resume" },
    NavLink { label: "View Projects", href: "#projects" },
];

/// Accent used for a section's eyebrow text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Teal,
    Blue,
    Purple,
}

impl Accent {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Teal => "accent-teal",
            Self::Blue => "accent-blue",
            Self::Purple => "accent-purple",
        }
    }
}

/// Eyebrow and heading shown at the top of a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionCopy {
    pub id: &'static str,
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub accent: Accent,
}

pub const ABOUT: SectionCopy = SectionCopy {
    id: "about",
    eyebrow: "About",
    heading: "Engineering for scale and intelligence",
    accent: Accent::Blue,
};

pub const TECH: SectionCopy = SectionCopy {
    id: "tech",
    eyebrow: "Tech Stack",
    heading: "Tooling across infrastructure and AI",
    accent: Accent::Purple,
};

pub const PROJECTS: SectionCopy = SectionCopy {
    id: "projects",
    eyebrow: "Projects",
    heading: "Solutions with room to scale",
    accent: Accent::Teal,
};

pub const EXPERIENCE: SectionCopy = SectionCopy {
    id: "experience",
    eyebrow: "Experience",
    heading: "Training, impact, and growth",
    accent: Accent::Blue,
};

pub const EDUCATION: SectionCopy = SectionCopy {
    id: "education",
    eyebrow: "Education",
    heading: "Foundations and credentials",
    accent: Accent::Teal,
};

pub const RESUME: SectionCopy = SectionCopy {
    id: "resume",
    eyebrow: "Resume",
    heading: "Download or preview the resume",
    accent: Accent::Purple,
};

pub const CONTACT: SectionCopy = SectionCopy {
    id: "contact",
    eyebrow: "Contact",
    heading: "Let's build resilient AI systems",
    accent: Accent::Teal,
};

/// Lead paragraph under the contact heading.
pub const CONTACT_LEAD: &str =
    "Reach out to collaborate on cloud-native, MLOps, or intelligent automation projects.";
