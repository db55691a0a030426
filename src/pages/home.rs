use leptos::prelude::*;

use crate::components::course_map::{CourseMap, load_graph};

/// Default Home Page, mounted once the upload step is done.
///
/// A curriculum with a dangling prerequisite renders the error list instead of
/// the map.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			{load_graph().map(|graph| view! { <CourseMap graph=graph /> })}
		</ErrorBoundary>
	}
}
