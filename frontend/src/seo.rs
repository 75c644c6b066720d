use crate::markdown::remove_markdown;
use crate::models::Course;
use web_sys::{window, Document, Element};

pub const TITLE_TEMPLATE: &str = "%s | egghead.io";
pub const SITE_HANDLE: &str = "@eggheadio";
pub const SITE_NAME: &str = "egghead";
pub const TWITTER_CARD: &str = "summary_large_image";

/// Head metadata for a course page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub twitter_handle: String,
    pub og_image_url: String,
}

impl PageMeta {
    pub fn for_course(course: &Course, og_image_url: &str, deployment_url: &str) -> Self {
        let twitter_handle = course
            .instructor
            .as_ref()
            .and_then(|instructor| instructor.twitter.clone())
            .filter(|handle| !handle.is_empty())
            .unwrap_or_else(|| SITE_HANDLE.to_string());

        Self {
            title: course.title.clone(),
            description: remove_markdown(&course.description),
            canonical_url: format!("{deployment_url}{}", course.path),
            twitter_handle,
            og_image_url: og_image_url.to_string(),
        }
    }

    pub fn document_title(&self) -> String {
        TITLE_TEMPLATE.replace("%s", &self.title)
    }

    /// `(attribute, key, content)` triples for every meta tag.
    pub fn meta_tags(&self) -> Vec<(&'static str, &'static str, String)> {
        vec![
            ("name", "description", self.description.clone()),
            ("name", "twitter:card", TWITTER_CARD.to_string()),
            ("name", "twitter:site", SITE_HANDLE.to_string()),
            ("name", "twitter:creator", self.twitter_handle.clone()),
            ("property", "og:title", self.title.clone()),
            ("property", "og:url", self.canonical_url.clone()),
            ("property", "og:description", self.description.clone()),
            ("property", "og:site_name", SITE_NAME.to_string()),
            ("property", "og:image", self.og_image_url.clone()),
        ]
    }

    /// Writes title, meta tags and the canonical link into the document head.
    pub fn apply(&self) {
        let Some(document) = window().and_then(|w| w.document()) else {
            log::warn!("No document available, page metadata not applied");
            return;
        };

        document.set_title(&self.document_title());

        for (attribute, key, content) in self.meta_tags() {
            let selector = format!("meta[{attribute}=\"{key}\"]");
            match upsert_head_element(&document, "meta", &selector) {
                Some(element) => {
                    let attributes = [(attribute, key), ("content", content.as_str())];
                    if let Err(e) = set_attributes(&attributes, |name, value| element.set_attribute(name, value)) {
                        log::warn!("Failed to set meta tag {key}: {e:?}");
                    }
                }
                None => log::warn!("Failed to set meta tag {key}"),
            }
        }

        match upsert_head_element(&document, "link", "link[rel=\"canonical\"]") {
            Some(link) => {
                let attributes = [("rel", "canonical"), ("href", self.canonical_url.as_str())];
                if let Err(e) = set_attributes(&attributes, |name, value| link.set_attribute(name, value)) {
                    log::warn!("Failed to set canonical link: {e:?}");
                }
            }
            None => log::warn!("Failed to set canonical link"),
        }
    }
}

/// Applies each attribute in order, stopping at the first failure.
fn set_attributes<E>(
    attributes: &[(&str, &str)],
    mut set: impl FnMut(&str, &str) -> Result<(), E>,
) -> Result<(), E> {
    for &(name, value) in attributes {
        set(name, value)?;
    }
    Ok(())
}

fn upsert_head_element(document: &Document, tag: &str, selector: &str) -> Option<Element> {
    if let Ok(Some(existing)) = document.query_selector(selector) {
        return Some(existing);
    }
    let head = document.head()?;
    let element = document.create_element(tag).ok()?;
    head.append_child(&element).ok()?;
    Some(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Instructor;

    fn course() -> Course {
        Course {
            slug: "practical-git".to_string(),
            title: "Practical Git".to_string(),
            description: "Learn **git** with [examples](/q/git).".to_string(),
            path: "/courses/practical-git".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn meta_is_derived_from_the_course() {
        let meta = PageMeta::for_course(&course(), "https://og/practical-git", "https://egghead.io");

        assert_eq!(meta.document_title(), "Practical Git | egghead.io");
        assert_eq!(meta.description, "Learn git with examples.");
        assert_eq!(meta.canonical_url, "https://egghead.io/courses/practical-git");
        assert_eq!(meta.twitter_handle, SITE_HANDLE);
        assert!(meta
            .meta_tags()
            .contains(&("property", "og:image", "https://og/practical-git".to_string())));
    }

    #[test]
    fn instructor_twitter_handle_wins() {
        let course = Course {
            instructor: Some(Instructor {
                twitter: Some("trevordmiller".to_string()),
                ..Default::default()
            }),
            ..course()
        };
        let meta = PageMeta::for_course(&course, "", "https://egghead.io");
        assert_eq!(meta.twitter_handle, "trevordmiller");
    }

    #[test]
    fn attribute_failures_are_reported() {
        let mut written = Vec::new();
        let result = set_attributes(&[("rel", "canonical"), ("href", "https://egghead.io")], |name, value| {
            written.push(format!("{name}={value}"));
            Ok::<(), String>(())
        });
        assert!(result.is_ok());
        assert_eq!(written, vec!["rel=canonical", "href=https://egghead.io"]);

        let mut attempts = 0;
        let result = set_attributes(&[("name", "description"), ("content", "x")], |name, _| {
            attempts += 1;
            Err(format!("cannot set {name}"))
        });
        assert_eq!(result, Err("cannot set name".to_string()));
        assert_eq!(attempts, 1);
    }
}
