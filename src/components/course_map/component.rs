use leptos::prelude::*;
use log::debug;
use web_sys::MouseEvent;

use super::loader::CourseGraph;
use super::pulse::{AmbientPulse, BrowserScheduler, PULSE_INTERVAL, Scheduler};
use super::render::{
	EDGE_LAYERS, ENDPOINT_FILL, ENDPOINT_RADIUS, ENDPOINT_STROKE, ENDPOINT_STROKE_WIDTH,
	edge_sketches, tile_class, tile_style,
};
use super::state::HighlightState;

/// Toggles `state`'s brightness on every pulse until the current owner is
/// cleaned up.
fn start_pulse<S: Scheduler + 'static>(scheduler: S, state: RwSignal<HighlightState>) {
	let pulse = AmbientPulse::start(scheduler, PULSE_INTERVAL, move || {
		let _ = state.try_update(HighlightState::toggle_bright);
	});
	// Stopped on cleanup, and again if the stored value is dropped first.
	let pulse = StoredValue::new_local(pulse);
	on_cleanup(move || {
		let _ = pulse.try_with_value(|p| p.stop());
	});
}

/// Renders a validated course graph as absolutely positioned tiles over an
/// optional layer of curved prerequisite edges.
#[component]
pub fn CourseMap(
	graph: CourseGraph,
	#[prop(default = true)] show_edges: bool,
	#[prop(default = false)] initial_bright: bool,
) -> impl IntoView {
	debug!(
		"course map: mounting {} courses, {} prerequisites",
		graph.len(),
		graph.edges().len()
	);
	let state = RwSignal::new(HighlightState::new(graph.len(), initial_bright));
	start_pulse(BrowserScheduler, state);

	let edges = show_edges.then(|| {
		let sketches = edge_sketches(&graph);
		view! {
			<svg class="edge-layer">
				{sketches
					.into_iter()
					.map(|sketch| {
						view! {
							<g>
								{EDGE_LAYERS
									.iter()
									.map(|layer| {
										view! {
											<path
												d=sketch.path.clone()
												stroke=layer.color
												stroke-width=layer.width.to_string()
												fill="none"
											/>
										}
									})
									.collect_view()}
								{sketch
									.endpoints()
									.into_iter()
									.map(|p| {
										view! {
											<circle
												cx=p.x.to_string()
												cy=p.y.to_string()
												r=ENDPOINT_RADIUS.to_string()
												fill=ENDPOINT_FILL
												stroke=ENDPOINT_STROKE
												stroke-width=ENDPOINT_STROKE_WIDTH.to_string()
											/>
										}
									})
									.collect_view()}
							</g>
						}
					})
					.collect_view()}
			</svg>
		}
	});

	let tiles = graph
		.nodes()
		.iter()
		.enumerate()
		.map(|(idx, node)| {
			let on_mouseenter = move |_: MouseEvent| state.update(|s| s.pointer_enter(idx));
			let on_mouseleave = move |_: MouseEvent| state.update(|s| s.pointer_leave(idx));
			view! {
				<div
					class=move || tile_class(state.with(|s| s.visual_class(idx)))
					style=tile_style(node.position)
					on:mouseenter=on_mouseenter
					on:mouseleave=on_mouseleave
				>
					{node.name.clone()}
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="map-container">
			<div class="map-image"></div>
			{edges}
			{tiles}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::course_map::pulse::ManualScheduler;

	#[test]
	fn pulse_toggles_state_while_mounted() {
		let scheduler = ManualScheduler::default();
		let owner = Owner::new();
		let state = owner.with(|| {
			let state = RwSignal::new(HighlightState::new(2, false));
			start_pulse(scheduler.clone(), state);
			state
		});

		let mut seen = Vec::new();
		for _ in 0..3 {
			scheduler.advance();
			seen.push(state.with_untracked(HighlightState::bright));
		}
		assert_eq!(seen, vec![true, false, true]);
		assert_eq!(scheduler.pending(), 1);
	}

	#[test]
	fn owner_cleanup_stops_pulse() {
		let scheduler = ManualScheduler::default();
		let owner = Owner::new();
		let state = owner.with(|| {
			let state = RwSignal::new(HighlightState::new(2, false));
			start_pulse(scheduler.clone(), state);
			state
		});
		scheduler.advance();
		assert!(state.with_untracked(HighlightState::bright));

		owner.cleanup();
		assert_eq!(scheduler.pending(), 0);
		scheduler.advance();
		assert_eq!(scheduler.pending(), 0);
	}

	#[test]
	fn hover_survives_pulse() {
		let scheduler = ManualScheduler::default();
		let owner = Owner::new();
		let state = owner.with(|| {
			let state = RwSignal::new(HighlightState::new(3, false));
			start_pulse(scheduler.clone(), state);
			state
		});
		state.update(|s| s.pointer_enter(1));
		scheduler.advance();
		state.with_untracked(|s| {
			assert_eq!(s.hovered(), Some(1));
			assert_eq!(s.visual_class(1), None);
			assert_eq!(s.visual_class(0).as_deref(), Some("lighterYellow"));
		});
	}
}
