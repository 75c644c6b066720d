use crate::models::{Course, Lesson, Resource, Tag};
use crate::utils::convert_time_with_titles;
use std::collections::{HashMap, HashSet};

pub fn completed_lesson_slugs(course: &Course) -> HashSet<String> {
    course
        .collection_progress
        .iter()
        .flat_map(|progress| progress.completed_lessons.iter())
        .map(|lesson| lesson.slug.clone())
        .collect()
}

/// All lessons of all playlists, in playlist order.
pub fn playlist_lessons(course: &Course) -> Vec<Lesson> {
    course
        .playlists()
        .flat_map(|playlist| playlist.lessons.iter().cloned())
        .collect()
}

/// First unwatched lesson. Playlist lessons take over from the top-level
/// list as soon as any playlist has lessons.
pub fn next_lesson<'a>(
    lessons: &'a [Lesson],
    playlist_lessons: &'a [Lesson],
    completed: &HashSet<String>,
) -> Option<&'a Lesson> {
    let candidates = if playlist_lessons.is_empty() {
        lessons
    } else {
        playlist_lessons
    };
    candidates
        .iter()
        .find(|lesson| !completed.contains(&lesson.slug))
}

/// Whether the learner already started, i.e. the next lesson is not where
/// the course begins.
pub fn is_continuing(next: &Lesson, lessons: &[Lesson], playlist_lessons: &[Lesson]) -> bool {
    let starts_with = |list: &[Lesson]| list.first().map(|first| first.slug == next.slug);
    starts_with(lessons) != Some(true) && starts_with(playlist_lessons) != Some(true)
}

pub fn enrich_tags(tags: &[Tag], versions: &HashMap<String, String>) -> Vec<Tag> {
    tags.iter()
        .map(|tag| match versions.get(&tag.name) {
            Some(version) => Tag {
                version: Some(version.clone()),
                ..tag.clone()
            },
            None => tag.clone(),
        })
        .collect()
}

pub fn play_event_name(continuing: bool) -> &'static str {
    if continuing {
        "clicked continue watching course"
    } else {
        "clicked start watching course"
    }
}

pub fn bookmark_event_name(is_favorite: bool) -> &'static str {
    if is_favorite {
        "clicked remove bookmark"
    } else {
        "clicked add bookmark"
    }
}

/// Bookmark state after a click. Applied before the request settles.
pub fn toggled_favorite(is_favorite: bool) -> bool {
    !is_favorite
}

/// The course as it would appear in another page's recommendation list.
pub fn collection_resource(course: &Course) -> Resource {
    let duration = convert_time_with_titles(course.duration.unwrap_or_default(), false);
    let byline = match course.instructor_name() {
        Some(name) => format!("{name}・{duration}・Course"),
        None => format!("{duration}・Course"),
    };

    Resource {
        title: course.title.clone(),
        byline,
        image: course
            .square_cover_url
            .clone()
            .or_else(|| course.image_url.clone()),
        path: course.path.clone(),
        slug: course.slug.clone(),
        description: course.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CollectionProgress, CompletedLesson, CourseItem, Instructor, Playlist,
    };

    fn lesson(slug: &str) -> Lesson {
        Lesson {
            slug: slug.to_string(),
            title: slug.replace('-', " "),
            path: Some(format!("/lessons/{slug}")),
            duration: Some(120),
            icon_url: None,
        }
    }

    fn completed(slugs: &[&str]) -> HashSet<String> {
        slugs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn next_lesson_skips_completed_top_level_lessons() {
        let lessons = vec![lesson("one"), lesson("two"), lesson("three")];

        let next = next_lesson(&lessons, &[], &completed(&["one"]));
        assert_eq!(next.map(|l| l.slug.as_str()), Some("two"));

        let next = next_lesson(&lessons, &[], &completed(&[]));
        assert_eq!(next.map(|l| l.slug.as_str()), Some("one"));

        // Completion is by membership, not position.
        let next = next_lesson(&lessons, &[], &completed(&["two"]));
        assert_eq!(next.map(|l| l.slug.as_str()), Some("one"));
    }

    #[test]
    fn next_lesson_is_none_when_everything_is_complete() {
        let lessons = vec![lesson("one"), lesson("two")];
        assert!(next_lesson(&lessons, &[], &completed(&["one", "two"])).is_none());
        assert!(next_lesson(&[], &[], &completed(&[])).is_none());
    }

    #[test]
    fn playlist_lessons_take_precedence() {
        let lessons = vec![lesson("top")];
        let nested = vec![lesson("p1-a"), lesson("p2-a")];

        let next = next_lesson(&lessons, &nested, &completed(&["p1-a"]));
        assert_eq!(next.map(|l| l.slug.as_str()), Some("p2-a"));

        // Top-level lessons are not a fallback once playlists are exhausted.
        assert!(next_lesson(&lessons, &nested, &completed(&["p1-a", "p2-a"])).is_none());
    }

    #[test]
    fn playlist_lessons_are_concatenated_in_order() {
        let course = Course {
            items: vec![
                CourseItem::Playlist(Playlist {
                    slug: "first".to_string(),
                    title: "First".to_string(),
                    path: None,
                    lessons: vec![lesson("a"), lesson("b")],
                }),
                CourseItem::Other,
                CourseItem::Playlist(Playlist {
                    slug: "second".to_string(),
                    title: "Second".to_string(),
                    path: None,
                    lessons: vec![lesson("c")],
                }),
            ],
            ..Default::default()
        };

        let slugs: Vec<_> = playlist_lessons(&course).into_iter().map(|l| l.slug).collect();
        assert_eq!(slugs, vec!["a", "b", "c"]);
    }

    #[test]
    fn completed_slugs_come_from_progress() {
        let course = Course {
            collection_progress: Some(CollectionProgress {
                completed_lessons: vec![
                    CompletedLesson { slug: "a".to_string() },
                    CompletedLesson { slug: "b".to_string() },
                ],
            }),
            ..Default::default()
        };
        assert_eq!(completed_lesson_slugs(&course), completed(&["a", "b"]));
        assert!(completed_lesson_slugs(&Course::default()).is_empty());
    }

    #[test]
    fn continuing_means_not_at_the_start() {
        let lessons = vec![lesson("one"), lesson("two")];
        assert!(!is_continuing(&lessons[0], &lessons, &[]));
        assert!(is_continuing(&lessons[1], &lessons, &[]));

        let nested = vec![lesson("p-a"), lesson("p-b")];
        assert!(!is_continuing(&nested[0], &lessons, &nested));
        assert!(is_continuing(&nested[1], &lessons, &nested));
        assert_eq!(play_event_name(true), "clicked continue watching course");
    }

    #[test]
    fn bookmark_event_follows_current_state() {
        assert_eq!(bookmark_event_name(false), "clicked add bookmark");
        assert_eq!(bookmark_event_name(true), "clicked remove bookmark");
    }

    #[test]
    fn toggling_flips_the_bookmark() {
        assert!(toggled_favorite(false));
        assert!(!toggled_favorite(true));
        assert!(!toggled_favorite(toggled_favorite(false)));
    }

    #[test]
    fn tags_pick_up_known_versions() {
        let tags = vec![
            Tag {
                name: "git".to_string(),
                label: Some("Git".to_string()),
                image_url: None,
                version: None,
            },
            Tag {
                name: "bash".to_string(),
                label: None,
                image_url: None,
                version: None,
            },
        ];
        let versions = HashMap::from([("git".to_string(), "^2.0.0".to_string())]);

        let enriched = enrich_tags(&tags, &versions);
        assert_eq!(enriched[0].version.as_deref(), Some("^2.0.0"));
        assert_eq!(enriched[0].label.as_deref(), Some("Git"));
        assert_eq!(enriched[1].version, None);
    }

    #[test]
    fn resource_summary_byline() {
        let course = Course {
            slug: "git".to_string(),
            title: "Git".to_string(),
            duration: Some(3600),
            square_cover_url: None,
            image_url: Some("cover.png".to_string()),
            instructor: Some(Instructor {
                full_name: Some("Trevor Miller".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let resource = collection_resource(&course);
        assert_eq!(resource.byline, "Trevor Miller・1h・Course");
        assert_eq!(resource.image.as_deref(), Some("cover.png"));

        let anonymous = Course {
            duration: Some(2160),
            ..Default::default()
        };
        assert_eq!(collection_resource(&anonymous).byline, "36m・Course");
    }
}
