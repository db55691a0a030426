pub const ACCENT_COLOR: &str = "Yellow";

/// Ambient modifier applied to tiles that are not hovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
	Lighter,
	Darker,
}

impl Shade {
	/// CSS class for this shade of `color`, e.g. `lighterYellow`.
	pub fn class_name(self, color: &str) -> String {
		match self {
			Shade::Lighter => format!("lighter{color}"),
			Shade::Darker => format!("darker{color}"),
		}
	}
}

/// Hover and pulse state of a mounted course map.
///
/// `hovered` is written only by pointer transitions, `bright` only by
/// [`HighlightState::toggle_bright`], which the ambient pulse drives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightState {
	node_count: usize,
	hovered: Option<usize>,
	bright: bool,
}

impl HighlightState {
	pub fn new(node_count: usize, initial_bright: bool) -> Self {
		Self {
			node_count,
			hovered: None,
			bright: initial_bright,
		}
	}

	#[cfg(test)]
	pub fn hovered(&self) -> Option<usize> {
		self.hovered
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hovered == Some(idx)
	}

	#[cfg(test)]
	pub fn bright(&self) -> bool {
		self.bright
	}

	/// Hovers `idx`, replacing any previously hovered node.
	pub fn pointer_enter(&mut self, idx: usize) {
		if idx < self.node_count {
			self.hovered = Some(idx);
		}
	}

	/// Clears the hover if `idx` is still the hovered node. A leave that arrives
	/// after another node was entered is stale and ignored.
	pub fn pointer_leave(&mut self, idx: usize) {
		if self.hovered == Some(idx) {
			self.hovered = None;
		}
	}

	pub fn toggle_bright(&mut self) {
		self.bright = !self.bright;
	}

	/// The ambient modifier for node `idx`, or `None` for the hovered node.
	pub fn shade(&self, idx: usize) -> Option<Shade> {
		if self.is_hovered(idx) {
			None
		} else if self.bright {
			Some(Shade::Lighter)
		} else {
			Some(Shade::Darker)
		}
	}

	/// CSS modifier for node `idx`, e.g. `lighterYellow`.
	pub fn visual_class(&self, idx: usize) -> Option<String> {
		self.shade(idx).map(|s| s.class_name(ACCENT_COLOR))
	}
}
