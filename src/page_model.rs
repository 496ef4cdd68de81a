//! Pure projection of the profile record and view state into render models.
//!
//! DESIGN
//! ======
//! Components render these models and nothing else. [`PageModel`] depends only
//! on the profile and is built once; [`Chrome`] depends only on [`ViewState`]
//! and is recomputed whenever the state signal changes. Equal inputs always
//! produce equal outputs.

#[cfg(test)]
#[path = "page_model_test.rs"]
mod page_model_test;

use profile::{Certification, Education, Experience, FocusCard, LinkKind, Profile, ProjectCategory};

use crate::site::{self, NavLink};
use crate::state::view::ViewState;

/// Badge text on forward-looking tech groups.
pub const FUTURE_BADGE: &str = "Future Focus";

/// Header identity block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Brand {
    pub name: String,
    pub initials: String,
    pub strapline: String,
}

/// Above-the-fold content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroModel {
    pub eyebrow: String,
    pub title: String,
    pub tagline: String,
    /// Call-to-action anchors, primary first.
    pub actions: &'static [NavLink],
    pub badges: Vec<String>,
    pub focus: Vec<FocusCard>,
    pub note: String,
}

/// One tech-stack card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TechCard {
    pub label: String,
    pub items: Vec<String>,
    pub future: bool,
    /// Present only for forward-looking groups.
    pub badge: Option<&'static str>,
}

/// Outbound contact link shown in the contact section and footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: String,
}

/// Static page content derived from the profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageModel {
    pub brand: Brand,
    pub hero: HeroModel,
    pub summary: String,
    pub tech_stack: Vec<TechCard>,
    pub projects: Vec<ProjectCategory>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub resume_href: String,
    pub contact_links: Vec<ContactLink>,
    pub navigation: &'static [NavLink],
    pub footer: String,
}

impl PageModel {
    #[must_use]
    pub fn project(profile: &Profile) -> Self {
        let hero = &profile.hero;
        Self {
            brand: Brand {
                name: profile.name.clone(),
                initials: profile.initials(),
                strapline: hero.strapline.clone(),
            },
            hero: HeroModel {
                eyebrow: hero.eyebrow.clone(),
                title: profile.title.clone(),
                tagline: profile.tagline.clone(),
                actions: site::HERO_ACTIONS,
                badges: hero.badges.clone(),
                focus: hero.focus.clone(),
                note: hero.note.clone(),
            },
            summary: profile.summary.clone(),
            tech_stack: profile
                .tech_stack
                .iter()
                .map(|group| TechCard {
                    label: group.label.clone(),
                    items: group.items.clone(),
                    future: group.future,
                    badge: group.future.then_some(FUTURE_BADGE),
                })
                .collect(),
            projects: profile.projects.clone(),
            experience: profile.experience.clone(),
            education: profile.education.clone(),
            certifications: profile.certifications.clone(),
            resume_href: profile.links.get(LinkKind::Resume).to_owned(),
            contact_links: contact_links(profile),
            navigation: site::NAVIGATION,
            footer: format!("© {} {}. All rights reserved.", site::COPYRIGHT_YEAR, profile.name),
        }
    }

    /// Whether the education/certification section has anything to show.
    #[must_use]
    pub fn has_education(&self) -> bool {
        !self.education.is_empty() || !self.certifications.is_empty()
    }
}

fn contact_links(profile: &Profile) -> Vec<ContactLink> {
    [
        ("GitHub", LinkKind::Github),
        ("LinkedIn", LinkKind::Linkedin),
        ("Email", LinkKind::Email),
    ]
    .into_iter()
    .map(|(label, kind)| ContactLink { label, href: profile.links.get(kind).to_owned() })
    .collect()
}

/// Interactive chrome derived from [`ViewState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chrome {
    pub dark: bool,
    /// Glyph on the theme toggle: the mode a click switches to.
    pub theme_icon: &'static str,
    pub theme_title: &'static str,
    pub menu_open: bool,
    pub menu_icon: &'static str,
    pub resume_open: bool,
}

impl Chrome {
    #[must_use]
    pub fn project(state: &ViewState) -> Self {
        let dark = state.theme.is_dark();
        Self {
            dark,
            theme_icon: if dark { "☀" } else { "☾" },
            theme_title: if dark { "Switch to light mode" } else { "Switch to dark mode" },
            menu_open: state.menu_open,
            menu_icon: if state.menu_open { "✕" } else { "☰" },
            resume_open: state.resume_open,
        }
    }
}
