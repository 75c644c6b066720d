use crate::analytics::track;
use crate::collection::dependencies::{CourseProject, Freshness, FreshnessStatus, Illustrator};
use crate::collection::progress::play_event_name;
use crate::markdown::Markdown;
use crate::models::{Instructor, Lesson, Playlist, Podcast, Resource, Tag};
use crate::utils::{convert_time_with_titles, format_number, friendly_time, parse_date};
use serde_json::json;
use std::collections::HashSet;
use std::rc::Rc;
use yew::prelude::*;

const BUTTON_CLASSES: &str = "flex flex-row items-center border px-2 py-1 rounded hover:bg-gray-200 bg-gray-100 transition-colors text-sm";
const DISABLED_CLASSES: &str = "flex flex-row items-center border px-2 py-1 rounded bg-gray-100 opacity-30";
const PANEL_CLASSES: &str = "mt-8 border border-gray-100 dark:border-gray-700 rounded-md p-5";

#[derive(Properties, PartialEq)]
pub struct DurationProps {
    pub duration: String,
}

#[function_component(Duration)]
pub fn duration(props: &DurationProps) -> Html {
    html! {
        <div class="flex flex-row items-center">
            <span class="mr-1 opacity-60">{"⏱️"}</span>
            <span>{&props.duration}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct UpdatedAtProps {
    pub date: String,
}

#[function_component(UpdatedAt)]
pub fn updated_at(props: &UpdatedAtProps) -> Html {
    html! { <div>{format!("Updated {}", props.date)}</div> }
}

#[derive(Properties, PartialEq)]
pub struct StarsRatingProps {
    pub rating: f64,
}

#[function_component(StarsRating)]
pub fn stars_rating(props: &StarsRatingProps) -> Html {
    let stars: String = (0..5)
        .map(|i| if (i as f64) + 0.5 <= props.rating { '★' } else { '☆' })
        .collect();

    html! {
        <div class="flex items-center">
            <span class="text-yellow-500" aria-hidden="true">{stars}</span>
            <span class="ml-1 font-semibold leading-tight">
                {format!("{:.1}", props.rating)}
            </span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PeopleCompletedProps {
    pub count: i64,
}

#[function_component(PeopleCompleted)]
pub fn people_completed(props: &PeopleCompletedProps) -> Html {
    html! {
        <div class="flex items-center flex-nowrap">
            <div class="font-semibold mr-1">{format_number(props.count)}</div>
            <div class="whitespace-nowrap">{"people completed"}</div>
        </div>
    }
}

#[function_component(RetiredBanner)]
pub fn retired_banner() -> Html {
    html! {
        <div class="w-full text-lg bg-orange-100 text-orange-800 p-3 rounded-md border border-orange-900 border-opacity-20">
            {"⚠️ This course has been retired and might contain outdated information."}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InstructorProfileProps {
    pub instructor: Instructor,
}

#[function_component(InstructorProfile)]
pub fn instructor_profile(props: &InstructorProfileProps) -> Html {
    let instructor = &props.instructor;
    let name = instructor.full_name.clone().unwrap_or_default();

    html! {
        <div class="flex items-center">
            {
                if let Some(avatar) = &instructor.avatar_64_url {
                    html! { <img src={avatar.clone()} alt={name.clone()} class="w-10 h-10 rounded-full mr-2" /> }
                } else {
                    html! {}
                }
            }
            <div class="flex flex-col">
                {
                    match &instructor.slug {
                        Some(slug) => html! {
                            <a href={format!("/i/{slug}")} class="font-semibold hover:underline">{&name}</a>
                        },
                        None => html! { <span class="font-semibold">{&name}</span> },
                    }
                }
                {
                    if let Some(bio) = &instructor.bio_short {
                        html! { <span class="text-sm text-gray-600 dark:text-gray-300">{bio}</span> }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(twitter) = instructor.twitter.as_ref().filter(|t| !t.is_empty()) {
                        html! {
                            <a href={format!("https://twitter.com/{twitter}")} target="_blank" class="text-sm text-blue-600 hover:underline">
                                {format!("@{twitter}")}
                            </a>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TagListProps {
    pub tags: Vec<Tag>,
    pub course_slug: String,
}

#[function_component(TagList)]
pub fn tag_list(props: &TagListProps) -> Html {
    if props.tags.is_empty() {
        return html! {};
    }

    html! {
        <ul class="flex flex-wrap items-center mt-4 md:mr-4">
            { for props.tags.iter().map(|tag| {
                let label = tag.label.clone().unwrap_or_else(|| tag.name.clone());
                let onclick = {
                    let course = props.course_slug.clone();
                    let tag_name = tag.name.clone();
                    Callback::from(move |_: MouseEvent| {
                        track("clicked tag link on course page", json!({"course": course, "tag": tag_name}));
                    })
                };
                html! {
                    <li key={tag.name.clone()} class="mr-3">
                        <a href={format!("/q/{}", tag.name)} {onclick} class="inline-flex items-center hover:underline">
                            {
                                if let Some(image) = &tag.image_url {
                                    html! { <img src={image.clone()} alt="" class="w-4 h-4 mr-1" /> }
                                } else {
                                    html! {}
                                }
                            }
                            <span>{label}</span>
                            {
                                if let Some(version) = &tag.version {
                                    html! { <span class="ml-1 text-gray-500 text-sm">{version}</span> }
                                } else {
                                    html! {}
                                }
                            }
                        </a>
                    </li>
                }
            })}
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct PlayButtonProps {
    pub lesson: Lesson,
    pub continuing: bool,
    pub course_slug: String,
}

#[function_component(PlayButton)]
pub fn play_button(props: &PlayButtonProps) -> Html {
    let continuing = props.continuing;
    let onclick = {
        let course = props.course_slug.clone();
        Callback::from(move |_: MouseEvent| {
            track(
                play_event_name(continuing),
                json!({ "course": course }),
            );
        })
    };
    let href = props.lesson.path.clone().unwrap_or_default();

    html! {
        <a {href} {onclick}
           class="inline-flex justify-center items-center px-6 py-4 font-semibold rounded-md bg-blue-600 text-white transition-all hover:bg-blue-700 ease-in-out duration-200">
            <span class="text-blue-100 mr-2">{"▶"}</span>
            { if continuing { "Continue Watching" } else { "Start Watching" } }
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct BookmarkButtonProps {
    pub enabled: bool,
    pub is_favorite: bool,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(BookmarkButton)]
pub fn bookmark_button(props: &BookmarkButtonProps) -> Html {
    let icon = if props.is_favorite { "🔖" } else { "🏷️" };

    if props.enabled {
        html! {
            <button onclick={props.on_toggle.clone()} aria-pressed={props.is_favorite.to_string()}>
                <div class={BUTTON_CLASSES}>
                    <span class="w-4 h-4 mr-1">{icon}</span>{"Bookmark"}
                </div>
            </button>
        }
    } else {
        html! {
            <div class={DISABLED_CLASSES}>
                <span class="w-4 h-4 mr-1">{icon}</span>{"Bookmark"}
            </div>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AffordanceLinkProps {
    pub url: Option<String>,
    pub label: String,
    pub icon: String,
    pub event: String,
    pub course_slug: String,
}

/// Download and RSS links, greyed out when the course has no URL for them.
#[function_component(AffordanceLink)]
pub fn affordance_link(props: &AffordanceLinkProps) -> Html {
    match &props.url {
        Some(url) => {
            let onclick = {
                let event = props.event.clone();
                let course = props.course_slug.clone();
                Callback::from(move |_: MouseEvent| {
                    track(event.clone(), json!({ "course": course }));
                })
            };
            html! {
                <a href={url.clone()} {onclick}>
                    <div class={BUTTON_CLASSES}>
                        <span class="w-4 h-4 mr-1">{&props.icon}</span>{&props.label}
                    </div>
                </a>
            }
        }
        None => html! {
            <div class={DISABLED_CLASSES}>
                <span class="w-4 h-4 mr-1">{&props.icon}</span>{&props.label}
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct InfoPanelProps {
    pub title: String,
    pub items: Vec<String>,
}

/// Bulleted panel used for topics, quick facts and essential questions.
#[function_component(InfoPanel)]
pub fn info_panel(props: &InfoPanelProps) -> Html {
    if props.items.is_empty() {
        return html! {};
    }

    html! {
        <div class={PANEL_CLASSES}>
            <h2 class="text-lg font-semibold mb-3">{&props.title}</h2>
            <div class="prose dark:prose-dark">
                <ul class="grid md:grid-cols-2 grid-cols-1 md:gap-x-5">
                    { for props.items.iter().map(|item| html! {
                        <li key={item.clone()} class="text-gray-900 dark:text-gray-100 leading-6">{item}</li>
                    })}
                </ul>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FreshProps {
    pub freshness: Option<Freshness>,
}

#[function_component(Fresh)]
pub fn fresh(props: &FreshProps) -> Html {
    let Some(freshness) = &props.freshness else {
        return html! {};
    };

    let (status_classes, emoji) = match freshness.status {
        FreshnessStatus::Fresh => ("border-green-500 border bg-green-50 dark:bg-teal-900", "🌱 "),
        FreshnessStatus::Classic => ("border-blue-500 border bg-blue-50 dark:bg-blueGray-800", "💎 "),
        FreshnessStatus::Stale => ("border-orange-500 border bg-orange-50 dark:bg-orange-900", "⛔️ "),
        FreshnessStatus::Unknown => ("border", ""),
    };
    let reviewed_at = freshness
        .as_of
        .as_deref()
        .and_then(parse_date)
        .map(|date| friendly_time(date, chrono::Utc::now()));

    html! {
        <div class={format!("flex flex-col space-y-1 {status_classes} border-opacity-20 p-4 my-3 rounded-md")}>
            {
                if let Some(title) = &freshness.title {
                    html! { <h2 class="text-xl font-semibold">{format!("{emoji}{title}")}</h2> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(reviewed_at) = reviewed_at {
                    html! { <p><small>{format!("Staff reviewed: {reviewed_at}")}</small></p> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(text) = &freshness.text {
                    html! { <Markdown content={text.clone()} class="prose dark:prose-dark w-full" /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CourseProjectCardProps {
    pub course_project: Option<CourseProject>,
}

#[function_component(CourseProjectCard)]
pub fn course_project_card(props: &CourseProjectCardProps) -> Html {
    let Some(project) = &props.course_project else {
        return html! {};
    };

    html! {
        <div class="border-indigo-500 hover:border-indigo-700 dark:hover:border-indigo-400 rounded-md bg-indigo-100 dark:bg-indigo-900 border-opacity-20 p-4 my-8 border">
            <a href={project.url.clone()}>
                {
                    if let Some(label) = &project.label {
                        html! { <h2 class="text-xl font-semibold mb-4">{format!("⚔️ {label}")}</h2> }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(text) = &project.text {
                        html! { <Markdown content={text.clone()} class="prose dark:prose-dark w-full" /> }
                    } else {
                        html! {}
                    }
                }
            </a>
        </div>
    }
}

#[function_component(CommunityResource)]
pub fn community_resource() -> Html {
    html! {
        <div class="p-3 border border-gray-100 rounded-md bg-gray-50 dark:border-gray-800 dark:bg-gray-800">
            <h4 class="font-semibold">{"Free forever"}</h4>
            <p class="text-sm">
                {"This course is a community resource. It is free to watch and will stay that way."}
            </p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CreditsProps {
    pub illustrator: Option<Illustrator>,
}

#[function_component(Credits)]
pub fn credits(props: &CreditsProps) -> Html {
    match &props.illustrator {
        Some(illustrator) => html! {
            <div class="w-full py-6">
                <h4 class="font-semibold">{"Credits"}</h4>
                <span class="text-sm">{format!("{} (illustration)", illustrator.name)}</span>
            </div>
        },
        None => html! {},
    }
}

pub fn podcast_player_src(id: &str, dark: bool) -> String {
    let color = if dark { "111827" } else { "false" };
    format!("https://player.simplecast.com/{id}?dark={dark}&color={color}")
}

fn prefers_dark_scheme() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct CoursePodcastProps {
    pub podcast: Podcast,
    pub instructor_name: Option<String>,
}

#[function_component(CoursePodcast)]
pub fn course_podcast(props: &CoursePodcastProps) -> Html {
    let is_open = use_state(|| false);
    let dark = use_state(|| false);

    {
        let dark = dark.clone();
        use_effect_with((), move |_| {
            dark.set(prefers_dark_scheme());
            || ()
        });
    }

    let Some(id) = props.podcast.simplecast_uid.as_ref().filter(|id| !id.is_empty()) else {
        return html! {};
    };
    let transcript = props
        .podcast
        .transcript
        .as_ref()
        .filter(|transcript| !transcript.is_empty());
    let instructor_name = props.instructor_name.as_deref().unwrap_or("the instructor");

    let on_toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    html! {
        <div class="w-full pt-2 pb-3">
            <h3 class="font-semibold text-xl my-2">
                {format!("Listen to {instructor_name} tell you about this course: ")}
                {
                    if transcript.is_some() {
                        html! {
                            <span>
                                <button onclick={on_toggle}>
                                    { if *is_open { "Hide Transcript" } else { "Show Transcript" } }
                                </button>
                            </span>
                        }
                    } else {
                        html! {}
                    }
                }
            </h3>
            <iframe
                height="52px"
                width="100%"
                frameborder="no"
                scrolling="no"
                src={podcast_player_src(id, *dark)}
            />
            {
                match transcript {
                    Some(transcript) if *is_open => html! {
                        <Markdown content={transcript.clone()} class="pb-3" />
                    },
                    _ => html! {},
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResourceCardProps {
    pub resource: Resource,
    pub location: String,
}

/// Horizontal card for a recommended course.
#[function_component(ResourceCard)]
pub fn resource_card(props: &ResourceCardProps) -> Html {
    let resource = &props.resource;
    let onclick = {
        let path = resource.path.clone();
        let location = props.location.clone();
        Callback::from(move |_: MouseEvent| {
            track("clicked resource", json!({ "resource": path, "location": location }));
        })
    };

    html! {
        <a href={resource.path.clone()} {onclick}
           class="flex border my-4 border-opacity-10 border-gray-400 dark:border-gray-700 rounded-md p-4 hover:shadow-md">
            {
                if let Some(image) = &resource.image {
                    html! { <img src={image.clone()} alt={resource.title.clone()} class="w-24 h-24 mr-4 flex-shrink-0" /> }
                } else {
                    html! {}
                }
            }
            <div class="flex flex-col">
                <h3 class="text-lg font-bold leading-tight">{&resource.title}</h3>
                <span class="text-xs text-gray-600 dark:text-gray-300 mb-2">{&resource.byline}</span>
                <Markdown content={resource.description.clone()} class="prose dark:prose-dark text-sm" />
            </div>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct PlaylistListProps {
    pub playlists: Vec<Playlist>,
    pub completed: Rc<HashSet<String>>,
    pub course_slug: String,
}

#[function_component(PlaylistList)]
pub fn playlist_list(props: &PlaylistListProps) -> Html {
    html! {
        <ul>
            { for props.playlists.iter().map(|playlist| {
                let on_playlist_click = {
                    let course = props.course_slug.clone();
                    let collection = playlist.slug.clone();
                    Callback::from(move |_: MouseEvent| {
                        track(
                            "clicked collection link on course page",
                            json!({ "course": course, "collection": collection }),
                        );
                    })
                };
                html! {
                    <li key={playlist.slug.clone()}>
                        <div class="font-semibold flex items-center leading-tight py-2">
                            {
                                if let Some(path) = &playlist.path {
                                    html! {
                                        <a href={path.clone()} onclick={on_playlist_click} class="hover:underline font-semibold flex items-center w-full">
                                            <Markdown content={playlist.title.clone()} class="prose dark:prose-dark text-gray-900 dark:text-gray-100 mt-0" />
                                        </a>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                        <ul class="ml-8">
                            { for playlist.lessons.iter().enumerate().map(|(index, lesson)| {
                                let is_complete = props.completed.contains(&lesson.slug);
                                let on_lesson_click = {
                                    let course = props.course_slug.clone();
                                    let collection = playlist.slug.clone();
                                    let video = lesson.slug.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        track(
                                            "clicked collection video link on course page",
                                            json!({ "course": course, "video": video, "collection": collection }),
                                        );
                                    })
                                };
                                html! {
                                    <li key={format!("{}::{}", playlist.slug, lesson.slug)}>
                                        <div class="flex items-center leading-tight py-2">
                                            <div class="flex items-center mr-2 flex-grow">
                                                <small class="lesson-marker text-gray-500 dark:text-gray-600 pt-px font-normal w-4">
                                                    { if is_complete { "✔️".to_string() } else { (index + 1).to_string() } }
                                                </small>
                                                <span class="text-gray-500 dark:text-gray-100 mx-1">{"▶"}</span>
                                            </div>
                                            {
                                                if let Some(path) = &lesson.path {
                                                    html! {
                                                        <a href={path.clone()} onclick={on_lesson_click} class="hover:underline flex items-center w-full">
                                                            <Markdown content={lesson.title.clone()} class="prose dark:prose-dark text-gray-700 dark:text-gray-100 mt-0" />
                                                        </a>
                                                    }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                        </div>
                                    </li>
                                }
                            })}
                        </ul>
                    </li>
                }
            })}
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct LessonListProps {
    pub lessons: Vec<Lesson>,
    pub completed: Rc<HashSet<String>>,
    pub course_slug: String,
}

#[function_component(LessonList)]
pub fn lesson_list(props: &LessonListProps) -> Html {
    html! {
        <ul>
            { for props.lessons.iter().enumerate().map(|(index, lesson)| {
                let is_complete = props.completed.contains(&lesson.slug);
                let marker_classes = if is_complete {
                    "text-blue-600 dark:text-green-400"
                } else {
                    "text-gray-500 dark:text-gray-400"
                };
                let onclick = {
                    let course = props.course_slug.clone();
                    let video = lesson.slug.clone();
                    Callback::from(move |_: MouseEvent| {
                        track(
                            "clicked video link on course page",
                            json!({ "course": course, "video": video }),
                        );
                    })
                };
                html! {
                    <li key={lesson.slug.clone()}>
                        <div class="font-semibold flex leading-tight py-2">
                            <div class="flex items-center mr-2 space-x-2">
                                <div class={format!("lesson-marker {marker_classes} pt-px font-normal w-4")}>
                                    { if is_complete { "✓".to_string() } else { (index + 1).to_string() } }
                                </div>
                                {
                                    if let Some(icon) = &lesson.icon_url {
                                        html! {
                                            <div class="flex flex-shrink-0 w-8 items-center">
                                                <img src={icon.clone()} width="24" height="24" alt="" />
                                            </div>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                            {
                                if let Some(path) = &lesson.path {
                                    html! {
                                        <div class="flex flex-col">
                                            <div>
                                                <a href={path.clone()} {onclick}
                                                   class="text-lg hover:underline hover:text-blue-600 font-semibold dark:text-gray-100">
                                                    {&lesson.title}
                                                </a>
                                            </div>
                                            <div class="text-xs text-gray-700 dark:text-gray-500">
                                                {convert_time_with_titles(lesson.duration.unwrap_or_default(), true)}
                                            </div>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    </li>
                }
            })}
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn podcast_player_follows_color_scheme() {
        assert_eq!(
            podcast_player_src("abc", true),
            "https://player.simplecast.com/abc?dark=true&color=111827"
        );
        assert_eq!(
            podcast_player_src("abc", false),
            "https://player.simplecast.com/abc?dark=false&color=false"
        );
    }
}
