use crate::tree::Value;

// ── Error type ──────────────────────────────────────────────────────

/// An error found during shape validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeError {
    pub message: String,
    /// Path from the root to the offending position (e.g. ["left", "right"]).
    pub path: Vec<String>,
    /// Machine-readable error code.
    pub code: &'static str,
}

// ── Shape validation ────────────────────────────────────────────────

/// Check that every position the flatten walk can dispatch on (the root,
/// and each reachable node's `left` and `right`) holds a node or
/// `hempty`. Payload (`mid`) slots are never dispatched on and are not
/// checked.
///
/// Unlike the walk, which aborts at the first bad position, this reports
/// every bad position. Returns an empty vec when the tree is fully
/// walkable.
pub fn validate_shape(root: &Value) -> Vec<ShapeError> {
    let mut errors = Vec::new();
    let mut path: Vec<String> = Vec::new();
    check_position(root, &mut path, &mut errors);
    errors
}

fn check_position(value: &Value, path: &mut Vec<String>, errors: &mut Vec<ShapeError>) {
    match value {
        Value::Empty => {}
        Value::Node(node) => {
            path.push("left".to_string());
            check_position(&node.left, path, errors);
            path.pop();

            path.push("right".to_string());
            check_position(&node.right, path, errors);
            path.pop();
        }
        other => errors.push(ShapeError {
            message: format!("non cons [{}]", other.to_text()),
            path: path.clone(),
            code: "non-cons",
        }),
    }
}
