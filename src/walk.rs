use crate::tree::Value;
use std::fmt;

// ── Error type ──────────────────────────────────────────────────────

/// A fatal walk error: the cursor reached a value that is neither a
/// node nor `hempty`. The walk is all-or-nothing, so nothing is emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkError {
    pub message: String,
    /// Machine-readable error code.
    pub code: &'static str,
}

impl WalkError {
    fn non_cons(offending: &Value) -> Self {
        WalkError {
            message: format!("non cons [{}]", offending.to_text()),
            code: "non-cons",
        }
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

// ── Iterative flatten walk ──────────────────────────────────────────

/// A deferred frame on the auxiliary stack: a node whose left subtree is
/// being explored, keeping its payload and right side for the backtrack.
/// Equivalent to the synthesized node `(hempty mid right)`.
struct Deferred<'a> {
    mid: &'a Value,
    right: &'a Value,
}

/// Stack behavior counters, checked by tests.
pub(crate) struct WalkStats {
    pub pushes: usize,
    pub max_depth: usize,
}

/// Flatten a left-leaning ternary tree into the left-to-right sequence of
/// payload (`mid`) values a recursive in-order walk would visit, using an
/// explicit auxiliary stack instead of the call stack.
///
/// The stack depth is bounded by the tree's left-spine depth. Reaching a
/// non-node, non-`hempty` value at a cursor position aborts the whole
/// walk with a `WalkError`.
pub fn flatten(root: &Value) -> Result<Vec<&Value>, WalkError> {
    flatten_with_stats(root).map(|(leaves, _)| leaves)
}

pub(crate) fn flatten_with_stats(root: &Value) -> Result<(Vec<&Value>, WalkStats), WalkError> {
    let mut leaves = Vec::new();
    let mut stack: Vec<Deferred<'_>> = Vec::new();
    let mut stats = WalkStats {
        pushes: 0,
        max_depth: 0,
    };
    let mut cursor = root;

    loop {
        match cursor {
            // Backtrack: a popped frame is the synthesized node
            // (hempty mid right). Its left is exhausted, so emit its
            // payload and resume on its right side. An empty stack means
            // the walk is complete.
            Value::Empty => match stack.pop() {
                Some(frame) => {
                    leaves.push(frame.mid);
                    cursor = frame.right;
                }
                None => return Ok((leaves, stats)),
            },
            Value::Node(node) => {
                if node.left.is_empty() {
                    // Emit: no left subtree remains, visit the payload.
                    leaves.push(&node.mid);
                    cursor = &node.right;
                } else {
                    // Defer: remember payload + right side, descend left.
                    stack.push(Deferred {
                        mid: &node.mid,
                        right: &node.right,
                    });
                    stats.pushes += 1;
                    stats.max_depth = stats.max_depth.max(stack.len());
                    cursor = &node.left;
                }
            }
            other => return Err(WalkError::non_cons(other)),
        }
    }
}

/// Render the flattened payload sequence, one compact-printed value per
/// line. All-or-nothing: an erroring walk yields no output at all.
pub fn render_lines(root: &Value) -> Result<String, WalkError> {
    let leaves = flatten(root)?;
    let mut out = String::new();
    for leaf in leaves {
        out.push_str(&leaf.to_text());
        out.push('\n');
    }
    Ok(out)
}
