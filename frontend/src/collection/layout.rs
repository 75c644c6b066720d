use crate::analytics::track;
use crate::collection::api::toggle_favorite;
use crate::collection::components::{
    AffordanceLink, BookmarkButton, CommunityResource, CourseProjectCard, CoursePodcast, Credits,
    Duration, Fresh, InfoPanel, InstructorProfile, LessonList, PeopleCompleted, PlayButton,
    PlaylistList, ResourceCard, RetiredBanner, StarsRating, TagList, UpdatedAt,
};
use crate::collection::dependencies::{get_dependencies, pair_with_resources};
use crate::env_variable_utils::DEPLOYMENT_URL;
use crate::collection::progress::{
    bookmark_event_name, collection_resource, completed_lesson_slugs, enrich_tags, is_continuing,
    next_lesson, playlist_lessons, toggled_favorite,
};
use crate::markdown::Markdown;
use crate::models::{Course, Lesson, Playlist, Resource};
use crate::seo::PageMeta;
use crate::utils::{convert_time_with_titles, friendly_time, parse_timestamp};
use serde_json::json;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CollectionPageLayoutProps {
    pub course: Course,
    pub lessons: Vec<Lesson>,
    pub og_image_url: String,
}

#[derive(Properties, PartialEq)]
struct RecommendationsProps {
    resources: Vec<Resource>,
    location: String,
    classes: String,
}

#[function_component(Recommendations)]
fn recommendations(props: &RecommendationsProps) -> Html {
    if props.resources.is_empty() {
        return html! {};
    }

    html! {
        <div class={format!("my-12 flex-col space-y-2 {}", props.classes)}>
            <h2 class="text-lg font-semibold mb-3">{"You might also like these resources:"}</h2>
            { for props.resources.iter().map(|resource| html! {
                <div key={resource.slug.clone()}>
                    <ResourceCard resource={resource.clone()} location={props.location.clone()} />
                </div>
            })}
        </div>
    }
}

#[function_component(CollectionPageLayout)]
pub fn collection_page_layout(props: &CollectionPageLayoutProps) -> Html {
    let course = &props.course;
    let lessons = &props.lessons;

    let is_favorite = use_state(|| course.favorited);
    {
        let is_favorite = is_favorite.clone();
        use_effect_with(course.favorited, move |favorited| {
            is_favorite.set(*favorited);
            || ()
        });
    }
    {
        let resource = collection_resource(course);
        use_effect_with(course.slug.clone(), move |_| {
            log::debug!("collection resource: {resource:?}");
            || ()
        });
    }
    use_effect_with(
        (course.clone(), props.og_image_url.clone()),
        |(course, og_image_url)| {
            PageMeta::for_course(course, og_image_url, &DEPLOYMENT_URL).apply();
            || ()
        },
    );

    let dependencies = get_dependencies(&course.slug);
    let pair_with = pair_with_resources(&dependencies, &course.slug);
    let course_tags = enrich_tags(&course.tags, &dependencies.dependencies);

    let completed = Rc::new(completed_lesson_slugs(course));
    let playlists: Vec<Playlist> = course.playlists().cloned().collect();
    let nested_lessons = playlist_lessons(course);
    let next = next_lesson(lessons, &nested_lessons, &completed).cloned();
    let continuing = next
        .as_ref()
        .map(|lesson| is_continuing(lesson, lessons, &nested_lessons))
        .unwrap_or(false);

    let podcast = course.podcast().cloned();
    let instructor_name = course.instructor_name().map(str::to_string);
    let duration = course
        .duration
        .filter(|seconds| *seconds > 0)
        .map(|seconds| convert_time_with_titles(seconds, false));
    let updated_at = course
        .updated_at
        .as_deref()
        .and_then(parse_timestamp)
        .map(|date| friendly_time(date, chrono::Utc::now()));

    let image_url = course.cover_image().map(str::to_string);
    let image_is_tag = image_url
        .as_deref()
        .map(|url| url.contains("tags/image"))
        .unwrap_or(false);
    let (mobile_size, desktop_size) = if image_is_tag { (100, 200) } else { (200, 420) };

    let on_toggle_favorite = {
        let is_favorite = is_favorite.clone();
        let toggle_url = course.toggle_favorite_url.clone();
        let slug = course.slug.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(url) = toggle_url.clone() else {
                return;
            };
            track(bookmark_event_name(*is_favorite), json!({ "course": slug }));
            toggle_favorite(url);
            is_favorite.set(toggled_favorite(*is_favorite));
        })
    };

    let play_button = match &next {
        Some(lesson) => html! {
            <PlayButton lesson={lesson.clone()} {continuing} course_slug={course.slug.clone()} />
        },
        None => html! {},
    };

    let cover = |size: u32, classes: &'static str| match &image_url {
        Some(url) => html! {
            <div class={classes}>
                <img src={url.clone()} alt={format!("illustration for {}", course.title)}
                     height={size.to_string()} width={size.to_string()} />
            </div>
        },
        None => html! {},
    };

    let extras = |classes: &'static str| {
        html! {
            <div class={classes}>
                <Fresh freshness={dependencies.freshness.clone()} />
                <CourseProjectCard course_project={dependencies.course_project.clone()} />
                {
                    if course.free_forever {
                        html! { <CommunityResource /> }
                    } else {
                        html! {}
                    }
                }
                <Credits illustrator={dependencies.illustrator.clone()} />
            </div>
        }
    };

    html! {
        <div class="max-w-screen-xl mx-auto sm:pb-16 pb-8 dark:text-gray-100">
            {
                if course.is_retired() {
                    html! { <RetiredBanner /> }
                } else {
                    html! {}
                }
            }
            <div class="mt-5 grid md:grid-cols-5 grid-cols-1 md:gap-16 gap-5 rounded-md w-full left-0 mb-4">
                <div class="md:col-span-3 md:row-start-auto flex flex-col h-full max-w-screen-2xl w-full mx-auto">
                    <header>
                        { cover(mobile_size, "md:hidden flex items-center justify-center") }
                        <h1 class="text-xl sm:text-2xl md:text-3xl font-bold leading-tight md:text-left text-center mt-4 md:mt-0">
                            {&course.title}
                        </h1>
                        <div class="mt-4 flex flex-col items-center md:items-start">
                            {
                                if let Some(instructor) = &course.instructor {
                                    html! { <InstructorProfile instructor={instructor.clone()} /> }
                                } else {
                                    html! {}
                                }
                            }
                            <div class="flex items-center flex-col md:flex-row flex-wrap">
                                <TagList tags={course_tags} course_slug={course.slug.clone()} />
                                <div class="flex items-center md:justify-start justify-center md:mr-4 mt-4">
                                    {
                                        if let Some(duration) = &duration {
                                            html! { <div class="mr-4"><Duration duration={duration.clone()} /></div> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    {
                                        if let Some(date) = updated_at {
                                            html! { <UpdatedAt {date} /> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                            </div>
                        </div>

                        <div class="flex flex-col sm:flex-row items-center mt-4 space-y-3 sm:space-y-0 sm:space-x-4">
                            {
                                if course.average_rating_out_of_5 > 0.0 {
                                    html! { <StarsRating rating={course.average_rating_out_of_5} /> }
                                } else {
                                    html! {}
                                }
                            }
                            {
                                if course.watched_count > 0 {
                                    html! { <PeopleCompleted count={course.watched_count} /> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>

                        <div class="dark:text-gray-900 flex items-center md:justify-start justify-center mt-4 space-x-2">
                            <BookmarkButton
                                enabled={course.toggle_favorite_url.is_some()}
                                is_favorite={*is_favorite}
                                on_toggle={on_toggle_favorite}
                            />
                            <AffordanceLink
                                url={course.download_url.clone()}
                                label="Download"
                                icon="📁"
                                event="clicked download course"
                                course_slug={course.slug.clone()}
                            />
                            <AffordanceLink
                                url={course.rss_url.clone()}
                                label="RSS"
                                icon="📡"
                                event="clicked rss feed link"
                                course_slug={course.slug.clone()}
                            />
                        </div>

                        <div class="md:hidden flex items-center justify-center w-full mt-5">
                            { play_button.clone() }
                        </div>

                        <Markdown
                            content={course.description.clone()}
                            class="prose dark:prose-dark md:prose-lg text-gray-900 dark:text-gray-100 mt-6 mb-6"
                        />

                        { extras("pt-5 md:hidden block") }

                        {
                            if let Some(podcast) = podcast {
                                html! { <CoursePodcast {podcast} instructor_name={instructor_name.clone()} /> }
                            } else {
                                html! {}
                            }
                        }
                        <InfoPanel title="What you'll learn" items={dependencies.topics.clone()} />
                        <InfoPanel title="Quick Facts" items={dependencies.quick_facts.clone()} />
                        <InfoPanel title="Essential Questions" items={dependencies.essential_questions.clone()} />
                        <Recommendations
                            resources={pair_with.clone()}
                            location={course.path.clone()}
                            classes="md:flex hidden"
                        />
                    </header>
                </div>
                <div class="md:col-span-2 flex flex-col items-center justify-start md:mb-0 mb-4">
                    { cover(desktop_size, "md:block hidden") }
                    <div class="md:block hidden space-y-6">
                        <div class="w-full flex justify-center mt-10 mb-4">
                            { play_button }
                        </div>
                    </div>
                    { extras("md:block hidden space-y-6") }
                    <section class="mt-8">
                        <div class="mb-2 flex flex-col space-y-4">
                            <h2 class="text-xl font-bold">{"Course Content"}</h2>
                            <div class="course-summary text-sm text-gray-600 dark:text-gray-300 font-normal">
                                {
                                    match &duration {
                                        Some(duration) => format!("{duration} • "),
                                        None => String::new(),
                                    }
                                }
                                {format!("{} lessons", lessons.len() + nested_lessons.len())}
                            </div>
                        </div>
                        <PlaylistList
                            {playlists}
                            completed={completed.clone()}
                            course_slug={course.slug.clone()}
                        />
                        <LessonList
                            lessons={lessons.clone()}
                            {completed}
                            course_slug={course.slug.clone()}
                        />
                    </section>
                    <Recommendations
                        resources={pair_with}
                        location={course.path.clone()}
                        classes="flex md:hidden"
                    />
                </div>
            </div>
        </div>
    }
}
