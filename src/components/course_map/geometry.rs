use super::types::Position;

pub const NODE_WIDTH: f64 = 150.0;
pub const NODE_HEIGHT: f64 = 50.0;
pub const CURVE_FACTOR: f64 = 0.25;

/// Where edges attach to a tile: its center.
pub fn anchor(position: Position) -> Position {
	position.offset(NODE_WIDTH / 2.0, NODE_HEIGHT / 2.0)
}

/// A quadratic Bézier segment from `start` to `end` bent through `control`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadCurve {
	pub start: Position,
	pub control: Position,
	pub end: Position,
}

impl QuadCurve {
	/// Bows the segment by a quarter of its delta on each axis. An axis with no
	/// delta gets no displacement.
	pub fn between(start: Position, end: Position) -> Self {
		let (dx, dy) = (end.x - start.x, end.y - start.y);
		let curve_x = if start.x == end.x { 0.0 } else { dx * CURVE_FACTOR };
		let curve_y = if start.y == end.y { 0.0 } else { dy * CURVE_FACTOR };
		let (mid_x, mid_y) = ((start.x + end.x) / 2.0, (start.y + end.y) / 2.0);

		Self {
			start,
			control: Position::new(mid_x + curve_x, mid_y + curve_y),
			end,
		}
	}

	/// The curve joining the centers of two tiles at `from` and `to`.
	pub fn for_edge(from: Position, to: Position) -> Self {
		Self::between(anchor(from), anchor(to))
	}

	pub fn svg_path(&self) -> String {
		format!(
			"M{},{} Q{},{} {},{}",
			self.start.x, self.start.y, self.control.x, self.control.y, self.end.x, self.end.y
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn control_point_is_midpoint_plus_quarter_delta() {
		let curve = QuadCurve::between(Position::new(0.0, 0.0), Position::new(100.0, 100.0));
		assert_eq!(curve.control, Position::new(75.0, 75.0));
	}

	#[test]
	fn control_point_follows_direction() {
		let curve = QuadCurve::between(Position::new(100.0, 40.0), Position::new(20.0, 0.0));
		// mid (60, 20), delta (-80, -40)
		assert_eq!(curve.control, Position::new(40.0, 10.0));
	}

	#[test]
	fn vertical_segment_has_no_horizontal_bow() {
		let curve = QuadCurve::between(Position::new(30.0, 0.0), Position::new(30.0, 200.0));
		assert_eq!(curve.control.x, 30.0);
		assert_eq!(curve.control.y, 150.0);
	}

	#[test]
	fn horizontal_segment_has_no_vertical_bow() {
		let curve = QuadCurve::between(Position::new(0.0, 12.0), Position::new(80.0, 12.0));
		assert_eq!(curve.control.y, 12.0);
		assert_eq!(curve.control.x, 60.0);
	}

	#[test]
	fn zero_length_edge_collapses_to_a_point() {
		let p = Position::new(7.0, 9.0);
		let curve = QuadCurve::between(p, p);
		assert_eq!(curve.control, p);
	}

	#[test]
	fn edges_attach_at_tile_centers() {
		let curve = QuadCurve::for_edge(Position::new(0.0, 0.0), Position::new(100.0, 100.0));
		assert_eq!(curve.start, Position::new(75.0, 25.0));
		assert_eq!(curve.end, Position::new(175.0, 125.0));
		assert_eq!(curve.control, Position::new(150.0, 100.0));
	}

	#[test]
	fn svg_path_uses_quadratic_command() {
		let curve = QuadCurve::for_edge(Position::new(0.0, 0.0), Position::new(100.0, 100.0));
		assert_eq!(curve.svg_path(), "M75,25 Q150,100 175,125");
	}
}
