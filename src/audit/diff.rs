//! Diff generation for audit logging
//!
//! Generates human-readable diffs between two versions of a bill.

use crate::models::{Bill, BillField};

/// Longest value shown in a diff before it is cut
const MAX_VALUE_CHARS: usize = 50;

/// Generate a human-readable diff between two bills
///
/// Returns `None` when nothing changed. Fields are listed in storage order.
pub fn generate_diff(before: &Bill, after: &Bill) -> Option<String> {
    let changes: Vec<String> = BillField::ALL
        .into_iter()
        .filter(|field| before.get(*field) != after.get(*field))
        .map(|field| {
            format!(
                "{}: {} -> {}",
                field,
                format_value(before.get(field)),
                format_value(after.get(field))
            )
        })
        .collect();

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Quote a value, truncating long text on a char boundary
fn format_value(value: &str) -> String {
    if value.chars().count() > MAX_VALUE_CHARS {
        let cut: String = value.chars().take(MAX_VALUE_CHARS - 3).collect();
        format!("\"{}...\"", cut)
    } else {
        format!("\"{}\"", value)
    }
}
