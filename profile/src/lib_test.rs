use super::*;

fn minimal() -> serde_json::Value {
    serde_json::json!({
        "name": "Ada Lovelace",
        "title": "Analyst",
        "tagline": "Engines all the way down.",
        "summary": "Writes programs for machines that do not exist yet.",
        "links": {
            "resume": "/resume.pdf",
            "github": "https://github.com/ada",
            "linkedin": "https://linkedin.com/in/ada",
            "email": "mailto:ada@example.com"
        },
        "techStack": [
            { "label": "DevOps & Cloud", "items": ["Docker", "Kubernetes"] },
            { "label": "Future Tech", "items": ["MLOps"], "future": true }
        ],
        "projects": [
            {
                "category": "Engines",
                "items": [
                    {
                        "name": "Difference Engine",
                        "description": "Tabulates polynomials.",
                        "stack": ["Brass"],
                        "link": "https://example.com/de"
                    }
                ]
            }
        ],
        "experience": [
            { "role": "Translator", "org": "Menabrea", "period": "1842", "details": "Notes A-G." }
        ]
    })
}

fn parse(value: &serde_json::Value) -> Result<Profile, ProfileError> {
    Profile::from_json(&value.to_string())
}

// =============================================================
// Embedded record
// =============================================================

#[test]
fn embedded_profile_loads_and_validates() {
    let profile = profile().expect("embedded profile should load");
    assert_eq!(profile.name, "Alex Morgan");
    assert_eq!(profile.links.resume, "/resume.pdf");
    assert_eq!(profile.tech_stack.len(), 5);
    assert!(!profile.education.is_empty());
    assert!(!profile.certifications.is_empty());
}

#[test]
fn embedded_profile_has_unique_keys() {
    let profile = profile().expect("embedded profile should load");
    assert!(profile.duplicate_keys().is_empty(), "{:?}", profile.duplicate_keys());
}

#[test]
fn accessor_returns_same_record_every_call() {
    let a = profile().expect("embedded profile should load");
    let b = profile().expect("embedded profile should load");
    assert!(std::ptr::eq(a, b));
}

#[test]
fn embedded_future_group_is_last_and_only_one() {
    let profile = profile().expect("embedded profile should load");
    let future: Vec<_> = profile.tech_stack.iter().filter(|g| g.future).map(|g| g.label.as_str()).collect();
    assert_eq!(future, vec!["Future Tech"]);
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn minimal_record_parses_with_optional_sections_empty() {
    let profile = parse(&minimal()).expect("minimal profile should parse");
    assert!(profile.education.is_empty());
    assert!(profile.certifications.is_empty());
    assert_eq!(profile.hero, Hero::default());
}

#[test]
fn tech_group_future_defaults_to_false_and_order_is_kept() {
    let profile = parse(&minimal()).expect("minimal profile should parse");
    assert_eq!(profile.tech_stack[0].label, "DevOps & Cloud");
    assert!(!profile.tech_stack[0].future);
    assert_eq!(profile.tech_stack[0].items, vec!["Docker", "Kubernetes"]);
    assert!(profile.tech_stack[1].future);
}

#[test]
fn missing_required_section_is_a_parse_error() {
    let mut value = minimal();
    value.as_object_mut().expect("object").remove("experience");
    assert!(matches!(parse(&value), Err(ProfileError::Parse(_))));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(Profile::from_json("{ not json"), Err(ProfileError::Parse(_))));
}

#[test]
fn blank_identity_field_is_rejected() {
    let mut value = minimal();
    value["tagline"] = serde_json::json!("   ");
    match parse(&value) {
        Err(ProfileError::MissingField { field }) => assert_eq!(field, "tagline"),
        other => panic!("expected missing tagline, got {other:?}"),
    }
}

#[test]
fn blank_link_is_rejected_with_dotted_name() {
    let mut value = minimal();
    value["links"]["email"] = serde_json::json!("");
    match parse(&value) {
        Err(ProfileError::MissingField { field }) => assert_eq!(field, "links.email"),
        other => panic!("expected missing email link, got {other:?}"),
    }
}

#[test]
fn links_are_opaque_strings() {
    let mut value = minimal();
    value["links"]["github"] = serde_json::json!("not a url at all");
    let profile = parse(&value).expect("opaque link should be accepted");
    assert_eq!(profile.links.get(LinkKind::Github), "not a url at all");
}

#[test]
fn error_messages_name_the_field() {
    let err = ProfileError::MissingField { field: "name" };
    assert_eq!(err.to_string(), "profile field `name` must not be blank");
}

// =============================================================
// Derived values
// =============================================================

#[test]
fn initials_take_first_char_of_each_part() {
    let profile = parse(&minimal()).expect("minimal profile should parse");
    assert_eq!(profile.initials(), "AL");
}

#[test]
fn initials_ignore_extra_whitespace() {
    let mut value = minimal();
    value["name"] = serde_json::json!("  mary   ann  evans ");
    let profile = parse(&value).expect("profile should parse");
    assert_eq!(profile.initials(), "mae");
}

#[test]
fn duplicate_keys_are_reported_once_per_key() {
    let mut value = minimal();
    value["techStack"] = serde_json::json!([
        { "label": "Tools", "items": ["Git", "Git", "Git"] },
        { "label": "Tools", "items": [] }
    ]);
    let profile = parse(&value).expect("duplicates do not fail loading");
    let dupes = profile.duplicate_keys();
    assert_eq!(
        dupes,
        vec![
            DuplicateKey { scope: "techStack".to_owned(), key: "Tools".to_owned() },
            DuplicateKey { scope: "techStack[Tools].items".to_owned(), key: "Git".to_owned() },
        ]
    );
}

#[test]
fn duplicate_experience_roles_are_reported() {
    let mut value = minimal();
    let entry = value["experience"][0].clone();
    value["experience"] = serde_json::json!([entry.clone(), entry]);
    let profile = parse(&value).expect("duplicates do not fail loading");
    assert_eq!(profile.duplicate_keys().len(), 1);
    assert_eq!(profile.duplicate_keys()[0].scope, "experience");
}
