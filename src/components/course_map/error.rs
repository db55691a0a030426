use thiserror::Error;

use super::types::PrerequisiteEdge;

/// An edge names a course that is not part of the node set.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("prerequisite edge `{edge}` references missing course `{missing}`")]
pub struct DanglingReferenceError {
	pub edge: PrerequisiteEdge,
	pub missing: String,
}
