use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Instructor {
    pub full_name: Option<String>,
    pub avatar_64_url: Option<String>,
    pub slug: Option<String>,
    pub bio_short: Option<String>,
    pub twitter: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Tag {
    pub name: String,
    pub label: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Lesson {
    pub slug: String,
    pub title: String,
    pub path: Option<String>,
    pub duration: Option<u64>, // in seconds
    pub icon_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Playlist {
    pub slug: String,
    pub title: String,
    pub path: Option<String>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Podcast {
    pub simplecast_uid: Option<String>,
    pub transcript: Option<String>,
}

/// Nested entries of a collection, discriminated by their `type` field.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CourseItem {
    Playlist(Playlist),
    Podcast(Podcast),
    #[serde(other)]
    Other,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CompletedLesson {
    pub slug: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct CollectionProgress {
    #[serde(default)]
    pub completed_lessons: Vec<CompletedLesson>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Course {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub instructor: Option<Instructor>,
    #[serde(default)]
    pub average_rating_out_of_5: f64,
    #[serde(default)]
    pub watched_count: i64,
    pub duration: Option<u64>, // in seconds
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub updated_at: Option<String>,
    pub state: Option<String>,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub favorited: bool,
    pub toggle_favorite_url: Option<String>,
    pub download_url: Option<String>,
    pub rss_url: Option<String>,
    pub square_cover_480_url: Option<String>,
    pub image_thumb_url: Option<String>,
    pub square_cover_url: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub free_forever: bool,
    #[serde(default)]
    pub items: Vec<CourseItem>,
    pub collection_progress: Option<CollectionProgress>,
}

impl Course {
    pub fn playlists(&self) -> impl Iterator<Item = &Playlist> {
        self.items.iter().filter_map(|item| match item {
            CourseItem::Playlist(playlist) => Some(playlist),
            _ => None,
        })
    }

    pub fn podcast(&self) -> Option<&Podcast> {
        self.items.iter().find_map(|item| match item {
            CourseItem::Podcast(podcast) => Some(podcast),
            _ => None,
        })
    }

    /// Cover shown on the page itself.
    pub fn cover_image(&self) -> Option<&str> {
        self.square_cover_480_url
            .as_deref()
            .or(self.image_thumb_url.as_deref())
            .filter(|url| !url.is_empty())
    }

    pub fn is_retired(&self) -> bool {
        self.state.as_deref() == Some("retired")
    }

    pub fn instructor_name(&self) -> Option<&str> {
        self.instructor
            .as_ref()
            .and_then(|instructor| instructor.full_name.as_deref())
    }
}

/// A recommended course shown in the "you might also like" cards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Resource {
    pub title: String,
    pub byline: String,
    pub image: Option<String>,
    pub path: String,
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CoursePayload {
    pub course: Course,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CourseSummary {
    pub slug: String,
    pub title: String,
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_are_split_by_type() {
        let json = r#"{
            "slug": "css-grid",
            "title": "CSS Grid",
            "items": [
                {"type": "playlist", "slug": "basics", "title": "Basics", "lessons": []},
                {"type": "podcast", "simplecast_uid": "abc"},
                {"type": "lesson", "slug": "stray"}
            ]
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();

        assert_eq!(course.playlists().count(), 1);
        assert_eq!(
            course.podcast().and_then(|p| p.simplecast_uid.as_deref()),
            Some("abc")
        );
        assert_eq!(course.items[2], CourseItem::Other);
    }

    #[test]
    fn cover_prefers_square_480() {
        let course = Course {
            square_cover_480_url: Some("square.png".to_string()),
            image_thumb_url: Some("thumb.png".to_string()),
            ..Default::default()
        };
        assert_eq!(course.cover_image(), Some("square.png"));

        let course = Course {
            image_thumb_url: Some("thumb.png".to_string()),
            ..Default::default()
        };
        assert_eq!(course.cover_image(), Some("thumb.png"));
        assert_eq!(Course::default().cover_image(), None);
    }
}
