use std::fmt;

/// A point in layout units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

impl Position {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn offset(self, dx: f64, dy: f64) -> Self {
		Self::new(self.x + dx, self.y + dy)
	}
}

/// A course tile placed at authored coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseNode {
	pub name: String,
	pub position: Position,
}

impl CourseNode {
	pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
		Self {
			name: name.into(),
			position: Position::new(x, y),
		}
	}
}

/// A prerequisite relationship, `from` must be taken before `to`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrerequisiteEdge {
	pub from: String,
	pub to: String,
}

impl PrerequisiteEdge {
	pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
		}
	}
}

impl fmt::Display for PrerequisiteEdge {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} -> {}", self.from, self.to)
	}
}

/// An edge whose endpoints have been resolved to node indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedEdge {
	pub from: usize,
	pub to: usize,
}
