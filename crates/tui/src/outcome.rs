use serde::Serialize;
use sift_core::Entry;

/// What a picker session produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
	/// Entries created during the session, oldest first.
	pub created: Vec<Entry>,
	/// The full entry list at exit, in store order.
	pub entries: Vec<Entry>,
}
