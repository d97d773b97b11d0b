//! Field-level validation error model.

use serde::{Deserialize, Serialize};

/// A single violated input constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorItem {
    /// The request parameter that failed validation (e.g. `"amount"`).
    pub property: String,
    /// A human-readable description of the constraint.
    pub message: String,
}

impl ErrorItem {
    /// Creates a new error item.
    pub fn new(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_item_serialization() {
        let item = ErrorItem::new("amount", "Amount must be greater than zero.");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"property":"amount","message":"Amount must be greater than zero."}"#
        );
    }
}
