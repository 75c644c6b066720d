use crate::collection::api::fetch_catalog;
use crate::collection::page::{CoursePage, ErrorMessage};
use crate::models::CourseSummary;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/courses/:slug")]
    Course { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <CatalogApp /> },
        Route::Course { slug } => html! { <CoursePage {slug} /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back to all courses"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[function_component(CatalogApp)]
pub fn catalog_app() -> Html {
    let courses = use_state(Vec::<CourseSummary>::default);
    let loading = use_state(|| true);
    let error_message = use_state(Option::<String>::default);

    // Effect for initial load
    {
        let courses = courses.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_catalog().await {
                    Ok(summaries) => {
                        log::info!("Loaded {} courses", summaries.len());
                        courses.set(summaries);
                    }
                    Err(e) => error_message.set(Some(e)),
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div class="min-h-screen flex flex-col items-center bg-gray-700 p-4">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-2xl">
                <h1 class="text-3xl font-bold text-center text-gray-800 mb-6">
                    {"Courses"}
                </h1>

                <ErrorMessage error_message={(*error_message).clone()} />

                {
                    if *loading {
                        html! { <p class="text-center text-gray-500">{"Loading courses..."}</p> }
                    } else if courses.is_empty() && error_message.is_none() {
                        html! { <p class="text-center text-gray-500">{"No courses found."}</p> }
                    } else {
                        html! {
                            <ul class="divide-y divide-gray-200">
                                { for courses.iter().map(|course| html! {
                                    <li key={course.slug.clone()} class="py-3">
                                        <Link<Route>
                                            to={Route::Course { slug: course.slug.clone() }}
                                            classes="text-blue-600 hover:underline text-lg"
                                        >
                                            {&course.title}
                                        </Link<Route>>
                                    </li>
                                })}
                            </ul>
                        }
                    }
                }
            </div>
        </div>
    }
}
