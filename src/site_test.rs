use std::collections::HashSet;

use super::*;

fn section_ids() -> HashSet<&'static str> {
    [ABOUT, TECH, PROJECTS, EXPERIENCE, EDUCATION, RESUME, CONTACT].iter().map(|s| s.id).collect()
}

#[test]
fn navigation_order_is_fixed() {
    let labels: Vec<_> = NAVIGATION.iter().map(|n| n.label).collect();
    assert_eq!(labels, vec!["About", "Tech Stack", "Projects", "Experience", "Resume", "Contact"]);
}

#[test]
fn every_nav_target_has_a_section() {
    let sections = section_ids();
    for link in NAVIGATION.iter().chain(HERO_ACTIONS) {
        let target = link.href.strip_prefix('#').expect("in-page anchor");
        assert!(sections.contains(target), "no section for {}", link.href);
    }
}

#[test]
fn nav_hrefs_are_unique() {
    let hrefs: HashSet<_> = NAVIGATION.iter().map(|n| n.href).collect();
    assert_eq!(hrefs.len(), NAVIGATION.len());
}

#[test]
fn every_anchor_dispatches_navigate() {
    for link in NAVIGATION.iter().chain(HERO_ACTIONS) {
        assert_eq!(link.action(), Action::Navigate(link.href.to_owned()));
    }
}

#[test]
fn hero_actions_point_at_resume_and_projects() {
    let hrefs: Vec<_> = HERO_ACTIONS.iter().map(|n| n.href).collect();
    assert_eq!(hrefs, vec!["#resume", "#projects"]);
}
