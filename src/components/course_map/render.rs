use super::geometry::QuadCurve;
use super::loader::CourseGraph;
use super::types::Position;

pub const TILE_CLASS: &str = "course-node";
pub const ENDPOINT_RADIUS: f64 = 4.0;
pub const ENDPOINT_FILL: &str = "#fff";
pub const ENDPOINT_STROKE: &str = "#333";
pub const ENDPOINT_STROKE_WIDTH: f64 = 1.0;

/// One pass of an edge stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeLayer {
	pub color: &'static str,
	pub width: f64,
}

/// Drawn bottom to top: a wide faint shadow, then the opaque highlight.
pub const EDGE_LAYERS: [StrokeLayer; 2] = [
	StrokeLayer {
		color: "rgba(0,0,0,0.3)",
		width: 6.0,
	},
	StrokeLayer {
		color: "#FFDD57",
		width: 3.0,
	},
];

/// Inline style placing a tile at its authored coordinates.
pub fn tile_style(position: Position) -> String {
	format!("top: {}px; left: {}px;", position.y, position.x)
}

/// Base tile class, prefixed by the ambient modifier when there is one.
pub fn tile_class(modifier: Option<String>) -> String {
	match modifier {
		Some(modifier) => format!("{modifier} {TILE_CLASS}"),
		None => TILE_CLASS.to_owned(),
	}
}

/// Everything needed to draw one edge.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeSketch {
	pub curve: QuadCurve,
	pub path: String,
}

impl EdgeSketch {
	pub fn new(curve: QuadCurve) -> Self {
		Self {
			path: curve.svg_path(),
			curve,
		}
	}

	pub fn endpoints(&self) -> [Position; 2] {
		[self.curve.start, self.curve.end]
	}
}

/// Sketches every edge of `graph`, in edge order.
pub fn edge_sketches(graph: &CourseGraph) -> Vec<EdgeSketch> {
	let nodes = graph.nodes();
	graph
		.resolved_edges()
		.iter()
		.map(|edge| {
			EdgeSketch::new(QuadCurve::for_edge(
				nodes[edge.from].position,
				nodes[edge.to].position,
			))
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::course_map::loader::load_graph;
	use crate::components::course_map::state::HighlightState;
	use crate::components::course_map::types::{CourseNode, PrerequisiteEdge};

	#[test]
	fn tiles_sit_at_their_coordinates() {
		let graph = load_graph().unwrap();
		let styles: Vec<String> = graph.nodes().iter().map(|n| tile_style(n.position)).collect();
		assert_eq!(styles[0], "top: 600px; left: 500px;");
		assert_eq!(styles[6], "top: 1200px; left: 532px;");
		assert_eq!(styles[13], "top: 625px; left: 1000px;");
		assert_eq!(styles[24], "top: 2200px; left: 700px;");
		assert_eq!(tile_style(Position::new(0.5, 12.25)), "top: 12.25px; left: 0.5px;");
	}

	#[test]
	fn tile_class_carries_modifier() {
		let mut state = HighlightState::new(2, true);
		assert_eq!(tile_class(state.visual_class(0)), "lighterYellow course-node");
		state.toggle_bright();
		assert_eq!(tile_class(state.visual_class(0)), "darkerYellow course-node");
		state.pointer_enter(0);
		assert_eq!(tile_class(state.visual_class(0)), "course-node");
	}

	#[test]
	fn shadow_is_drawn_beneath_highlight() {
		let [shadow, highlight] = EDGE_LAYERS;
		assert!(shadow.width > highlight.width);
		assert_eq!(highlight.color, "#FFDD57");
	}

	#[test]
	fn sketches_follow_edge_order() {
		let nodes = vec![
			CourseNode::new("A", 0.0, 0.0),
			CourseNode::new("B", 100.0, 100.0),
			CourseNode::new("C", 100.0, 0.0),
		];
		let edges = vec![PrerequisiteEdge::new("A", "B"), PrerequisiteEdge::new("C", "B")];
		let graph = CourseGraph::new(nodes, edges).unwrap();
		let sketches = edge_sketches(&graph);

		assert_eq!(sketches.len(), 2);
		assert_eq!(sketches[0].path, "M75,25 Q150,100 175,125");
		assert_eq!(
			sketches[1].endpoints(),
			[Position::new(175.0, 25.0), Position::new(175.0, 125.0)]
		);
		// vertical edge: no horizontal bow
		assert_eq!(sketches[1].curve.control.x, 175.0);
	}

	#[test]
	fn builtin_curriculum_sketches_every_edge() {
		let graph = load_graph().unwrap();
		assert_eq!(edge_sketches(&graph).len(), graph.edges().len());
	}
}
