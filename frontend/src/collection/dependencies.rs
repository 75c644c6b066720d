use crate::models::Resource;
use lazy_static::lazy_static;
use serde::Deserialize;
use std::collections::HashMap;

pub const MAX_PAIR_WITH_RESOURCES: usize = 3;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FreshnessStatus {
    Fresh,
    Stale,
    Classic,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Freshness {
    #[serde(default)]
    pub status: FreshnessStatus,
    pub title: Option<String>,
    pub text: Option<String>,
    pub as_of: Option<String>, // yyyy-MM-dd
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CourseProject {
    pub url: String,
    pub label: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Illustrator {
    pub name: String,
}

/// Editorial side data that is not part of the course record.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CourseDependencies {
    #[serde(default)]
    pub topics: Vec<String>,
    pub illustrator: Option<Illustrator>,
    /// Tag name to the library version the course was recorded against.
    #[serde(default)]
    pub dependencies: HashMap<String, String>,
    pub freshness: Option<Freshness>,
    pub pair_with_resources: Option<Vec<Resource>>,
    pub course_project: Option<CourseProject>,
    #[serde(default)]
    pub quick_facts: Vec<String>,
    #[serde(default)]
    pub essential_questions: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct DependencyTable {
    #[serde(default)]
    default_pair_with_resources: Vec<Resource>,
    #[serde(default)]
    courses: HashMap<String, CourseDependencies>,
}

lazy_static! {
    static ref DEPENDENCY_TABLE: DependencyTable =
        serde_json::from_str(include_str!("../../data/course_dependencies.json")).unwrap_or_else(
            |e| {
                log::error!("Failed to parse course dependencies: {e}");
                DependencyTable::default()
            }
        );
}

pub fn get_dependencies(course_slug: &str) -> CourseDependencies {
    DEPENDENCY_TABLE
        .courses
        .get(course_slug)
        .cloned()
        .unwrap_or_default()
}

/// Recommendations for a course, never including the course itself.
pub fn pair_with_resources(dependencies: &CourseDependencies, course_slug: &str) -> Vec<Resource> {
    let source = dependencies
        .pair_with_resources
        .as_ref()
        .unwrap_or(&DEPENDENCY_TABLE.default_pair_with_resources);

    source
        .iter()
        .filter(|resource| resource.slug != course_slug)
        .take(MAX_PAIR_WITH_RESOURCES)
        .cloned()
        .collect()
}
