use std::collections::HashMap;

use log::{debug, error};

use super::error::DanglingReferenceError;
use super::types::{CourseNode, PrerequisiteEdge, ResolvedEdge};

const COURSES: &[(&str, f64, f64)] = &[
	("MATH 19A or MATH 20A", 500.0, 600.0),
	("MATH 19B or MATH 20B", 500.0, 900.0),
	("CSE 16", 400.0, 1200.0),
	("MATH 21 or AM 10", 150.0, 900.0),
	("AM 30", 200.0, 1200.0),
	("MATH 23A", 270.0, 1200.0),
	("ECE 30", 532.0, 1200.0),
	("CSE 101", 700.0, 1500.0),
	("CSE 101M", 600.0, 1800.0),
	("CSE 102 or CSE 103", 1000.0, 1800.0),
	("CSE 130", 400.0, 1800.0),
	("CSE 107 or STATS 131", 300.0, 1500.0),
	("CSE 114A", 800.0, 1800.0),
	("CSE 20", 1000.0, 625.0),
	("CSE 12", 1100.0, 900.0),
	("CSE 30", 900.0, 900.0),
	("CSE 40", 760.0, 1200.0),
	("CSE 13S", 1100.0, 1200.0),
	("CSE 120", 1100.0, 1500.0),
	("Upper Elective", 305.0, 2030.0),
	("Upper Elective", 200.0, 2030.0),
	("Upper Elective", 200.0, 2100.0),
	("Upper Elective", 305.0, 2100.0),
	("CSE 115A or CSE 185 or CSE 195", 1100.0, 2100.0),
	("Capstone", 700.0, 2200.0),
];

const PREREQUISITES: &[(&str, &str)] = &[
	("MATH 19A or MATH 20A", "MATH 19B or MATH 20B"),
	("MATH 19A or MATH 20A", "CSE 16"),
	("MATH 19B or MATH 20B", "AM 30"),
	("MATH 19B or MATH 20B", "CSE 101"),
	("CSE 20", "CSE 12"),
	("CSE 20", "CSE 30"),
	("CSE 12", "CSE 13S"),
	("CSE 13S", "CSE 120"),
	("CSE 13S", "CSE 101"),
	("AM 30", "CSE 101"),
	("MATH 23A", "CSE 101"),
	("CSE 101", "CSE 102 or CSE 103"),
	("CSE 101", "CSE 130"),
	("CSE 16", "CSE 107 or STATS 131"),
	("MATH 23A", "CSE 107 or STATS 131"),
	("AM 30", "CSE 107 or STATS 131"),
];

/// The validated course set. Edges are guaranteed to point at existing nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseGraph {
	nodes: Vec<CourseNode>,
	edges: Vec<PrerequisiteEdge>,
	resolved: Vec<ResolvedEdge>,
}

impl CourseGraph {
	/// Validates `edges` against `nodes`, failing on the first edge with an unknown endpoint.
	pub fn new(
		nodes: Vec<CourseNode>,
		edges: Vec<PrerequisiteEdge>,
	) -> Result<Self, DanglingReferenceError> {
		// First occurrence wins for duplicated names.
		let mut name_to_idx: HashMap<&str, usize> = HashMap::with_capacity(nodes.len());
		for (i, node) in nodes.iter().enumerate() {
			name_to_idx.entry(node.name.as_str()).or_insert(i);
		}

		let resolve = |edge: &PrerequisiteEdge, name: &str| {
			name_to_idx
				.get(name)
				.copied()
				.ok_or_else(|| DanglingReferenceError {
					edge: edge.clone(),
					missing: name.to_owned(),
				})
		};

		let resolved = edges
			.iter()
			.map(|edge| {
				Ok(ResolvedEdge {
					from: resolve(edge, &edge.from)?,
					to: resolve(edge, &edge.to)?,
				})
			})
			.collect::<Result<Vec<_>, DanglingReferenceError>>()?;

		Ok(Self {
			nodes,
			edges,
			resolved,
		})
	}

	pub fn nodes(&self) -> &[CourseNode] {
		&self.nodes
	}

	pub fn edges(&self) -> &[PrerequisiteEdge] {
		&self.edges
	}

	/// Edges as node indices, in the same order as [`CourseGraph::edges`].
	pub fn resolved_edges(&self) -> &[ResolvedEdge] {
		&self.resolved
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}
}

/// Loads the built-in curriculum.
pub fn load_graph() -> Result<CourseGraph, DanglingReferenceError> {
	let nodes = COURSES
		.iter()
		.map(|&(name, x, y)| CourseNode::new(name, x, y))
		.collect();
	let edges = PREREQUISITES
		.iter()
		.map(|&(from, to)| PrerequisiteEdge::new(from, to))
		.collect();

	match CourseGraph::new(nodes, edges) {
		Ok(graph) => {
			debug!(
				"course map: loaded {} courses, {} prerequisites",
				graph.len(),
				graph.edges().len()
			);
			Ok(graph)
		}
		Err(e) => {
			error!("course map: {}", e);
			Err(e)
		}
	}
}
