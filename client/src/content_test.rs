use std::collections::HashSet;

use super::*;

#[test]
fn project_ids_are_unique() {
    let ids = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
    assert_eq!(ids.len(), PROJECTS.len());
}

#[test]
fn experience_ids_are_unique() {
    let ids = EXPERIENCE.iter().map(|e| e.id).collect::<HashSet<_>>();
    assert_eq!(ids.len(), EXPERIENCE.len());
}

#[test]
fn every_project_has_tags_and_text() {
    for project in PROJECTS {
        assert!(!project.tags.is_empty(), "{} has no tags", project.title);
        assert!(!project.title.is_empty());
        assert!(!project.long_description.is_empty());
    }
}

#[test]
fn project_lookup_by_id() {
    assert_eq!(project(2).map(|p| p.title), Some("WeatherFlow"));
    assert!(project(99).is_none());
}
