//! Utility functions for the ranking engine

/// Format a tallied value with a singular unit for exactly one, plural otherwise
pub fn pluralize(value: i64, singular: &str, plural: &str) -> String {
    let unit = if value == 1 { singular } else { plural };
    format!("{} {}", value, unit)
}
