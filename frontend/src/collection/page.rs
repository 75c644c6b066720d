use crate::collection::api::fetch_course;
use crate::collection::layout::CollectionPageLayout;
use crate::env_variable_utils::get_og_image_base_url;
use crate::models::CoursePayload;
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

/// Shared flag telling an in-flight fetch that its slug is no longer current.
#[derive(Clone, Default)]
struct Staleness(Rc<Cell<bool>>);

impl Staleness {
    fn mark(&self) {
        self.0.set(true);
    }

    fn is_stale(&self) -> bool {
        self.0.get()
    }
}

#[derive(Properties, PartialEq)]
pub struct CoursePageProps {
    pub slug: String,
}

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(msg) = &props.error_message {
        html! {
            <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                { msg }
            </div>
        }
    } else {
        html! {}
    }
}

/// Loads a course from the backend and hands it to the layout.
#[function_component(CoursePage)]
pub fn course_page(props: &CoursePageProps) -> Html {
    let payload = use_state(|| None::<(CoursePayload, String)>);
    let error_message = use_state(Option::<String>::default);
    let loading = use_state(|| true);

    {
        let payload = payload.clone();
        let error_message = error_message.clone();
        let loading = loading.clone();

        use_effect_with(props.slug.clone(), move |slug| {
            let slug = slug.clone();
            let staleness = Staleness::default();
            let request = staleness.clone();
            loading.set(true);
            error_message.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch_course(&slug).await;
                if request.is_stale() {
                    log::debug!("Discarding response for {slug}, route has moved on");
                    return;
                }
                match result {
                    Ok(course_payload) => {
                        let og_image_url = format!("{}/{}", get_og_image_base_url(), slug);
                        payload.set(Some((course_payload, og_image_url)));
                    }
                    Err(e) => {
                        log::error!("Failed to load course {slug}: {e}");
                        error_message.set(Some(e));
                    }
                }
                loading.set(false);
            });
            move || staleness.mark()
        });
    }

    if *loading {
        return html! {
            <div class="min-h-screen flex items-center justify-center">
                <p class="text-gray-600">{"Loading course..."}</p>
            </div>
        };
    }

    match &*payload {
        Some((course_payload, og_image_url)) if error_message.is_none() => html! {
            <div class="px-5">
                <CollectionPageLayout
                    course={course_payload.course.clone()}
                    lessons={course_payload.lessons.clone()}
                    og_image_url={og_image_url.clone()}
                />
            </div>
        },
        _ => html! {
            <div class="max-w-2xl mx-auto mt-10">
                <ErrorMessage error_message={(*error_message).clone().or_else(|| Some("Course not found".to_string()))} />
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marking_reaches_every_clone() {
        let staleness = Staleness::default();
        let request = staleness.clone();
        assert!(!request.is_stale());

        staleness.mark();
        assert!(request.is_stale());
        assert!(!Staleness::default().is_stale());
    }
}
