use crate::models::{CatalogEntry, CourseSummary};
use anyhow::{Context, Result};
use std::collections::{HashMap, HashSet};
use std::fs;

/// Courses keyed by slug, remembering the order they were loaded in.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: HashMap<String, CatalogEntry>,
    order: Vec<String>,
}

impl Catalog {
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut catalog = Catalog::default();
        for entry in entries {
            let slug = entry.course.slug.clone();
            if slug.is_empty() {
                return Err(anyhow::anyhow!(
                    "Course '{}' has an empty slug",
                    entry.course.title
                ));
            }
            if catalog.entries.insert(slug.clone(), entry).is_some() {
                return Err(anyhow::anyhow!("Duplicate course slug '{slug}'"));
            }
            catalog.order.push(slug);
        }
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    pub fn summaries(&self) -> Vec<CourseSummary> {
        self.order
            .iter()
            .filter_map(|slug| self.entries.get(slug))
            .map(|entry| CourseSummary {
                slug: entry.course.slug.clone(),
                title: entry.course.title.clone(),
                path: entry.course.path.clone(),
            })
            .collect()
    }

    /// The entry as the page should see it: favorite state from `favorites`
    /// and a toggle URL pointing back at this server unless the catalog
    /// provides one.
    pub fn course_payload(
        &self,
        slug: &str,
        favorites: &HashSet<String>,
        public_url: &str,
    ) -> Option<CatalogEntry> {
        let mut entry = self.entries.get(slug)?.clone();
        entry.course.favorited = favorites.contains(slug);
        if entry.course.toggle_favorite_url.is_none() {
            entry.course.toggle_favorite_url = Some(format!("{public_url}/courses/{slug}/favorite"));
        }
        Some(entry)
    }

    /// Slugs the catalog marks as already favorited.
    pub fn initial_favorites(&self) -> HashSet<String> {
        self.entries
            .values()
            .filter(|entry| entry.course.favorited)
            .map(|entry| entry.course.slug.clone())
            .collect()
    }
}

pub fn load_catalog(path: &str) -> Result<Catalog> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read catalog {path}"))?;
    let entries: Vec<CatalogEntry> =
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse catalog {path}"))?;
    Catalog::from_entries(entries)
}

/// Flips the favorite flag for `slug` and returns the new state.
pub fn toggle_favorite(favorites: &mut HashSet<String>, slug: &str) -> bool {
    if favorites.remove(slug) {
        false
    } else {
        favorites.insert(slug.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(slug: &str, favorited: bool) -> CatalogEntry {
        serde_json::from_value(json!({
            "course": {
                "slug": slug,
                "title": slug.to_uppercase(),
                "path": format!("/courses/{slug}"),
                "favorited": favorited,
                "watched_count": 12
            },
            "lessons": [{"slug": "one"}]
        }))
        .unwrap()
    }

    #[test]
    fn summaries_keep_catalog_order() {
        let catalog = Catalog::from_entries(vec![entry("b", false), entry("a", false)]).unwrap();
        let slugs: Vec<_> = catalog.summaries().into_iter().map(|s| s.slug).collect();
        assert_eq!(slugs, vec!["b", "a"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn duplicate_and_empty_slugs_are_rejected() {
        assert!(Catalog::from_entries(vec![entry("a", false), entry("a", true)]).is_err());
        assert!(Catalog::from_entries(vec![entry("", false)]).is_err());
    }

    #[test]
    fn payload_reflects_favorites_and_default_toggle_url() {
        let catalog = Catalog::from_entries(vec![entry("git", false)]).unwrap();
        let favorites = HashSet::from(["git".to_string()]);

        let payload = catalog
            .course_payload("git", &favorites, "http://localhost:8000")
            .unwrap();
        assert!(payload.course.favorited);
        assert_eq!(
            payload.course.toggle_favorite_url.as_deref(),
            Some("http://localhost:8000/courses/git/favorite")
        );
        assert_eq!(payload.course.extra["watched_count"], json!(12));
        assert_eq!(payload.lessons.len(), 1);

        assert!(catalog
            .course_payload("missing", &favorites, "http://localhost:8000")
            .is_none());
    }

    #[test]
    fn toggling_twice_restores_state() {
        let mut favorites = HashSet::new();
        assert!(toggle_favorite(&mut favorites, "git"));
        assert!(favorites.contains("git"));
        assert!(!toggle_favorite(&mut favorites, "git"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn initial_favorites_come_from_the_catalog() {
        let catalog = Catalog::from_entries(vec![entry("a", true), entry("b", false)]).unwrap();
        assert_eq!(catalog.initial_favorites(), HashSet::from(["a".to_string()]));
    }
}
