//! ID generation utilities.

use uuid::Uuid;

/// Generates a new element id as a string.
///
/// UUID v7 includes timestamp information and is sortable, which keeps
/// element ids stable to reason about in saved project files.
#[must_use]
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}
