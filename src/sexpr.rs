use crate::tree::{Node, Value};
use std::fmt::Write;

/// Text formatting style.
#[derive(Clone, Copy)]
pub enum TextStyle {
    /// Compact: single line, one space between children.
    Compact,
    /// Pretty: 2-space indented, one child per line.
    Pretty,
}

struct TextWriter {
    buf: String,
    style: TextStyle,
    depth: usize,
}

impl TextWriter {
    fn new(style: TextStyle) -> Self {
        TextWriter {
            buf: String::new(),
            style,
            depth: 0,
        }
    }

    fn is_pretty(&self) -> bool {
        matches!(self.style, TextStyle::Pretty)
    }

    /// Separator between a node's children: a newline + indent when
    /// pretty, a single space when compact.
    fn child_sep(&mut self) {
        if self.is_pretty() {
            self.buf.push('\n');
            for _ in 0..self.depth {
                self.buf.push_str("  ");
            }
        } else {
            self.buf.push(' ');
        }
    }

    fn write_value(&mut self, value: &Value) {
        match value {
            Value::Boolean(b) => self.buf.push_str(if *b { "1" } else { "0" }),
            Value::Number(n) => self.write_number(*n),
            Value::String(s) => self.buf.push_str(s),
            Value::Node(node) => self.write_node(node),
            Value::Empty => self.buf.push_str("hempty"),
        }
    }

    fn write_node(&mut self, node: &Node) {
        self.buf.push('(');
        self.depth += 1;

        if self.is_pretty() {
            self.child_sep();
        }
        self.write_value(&node.left);
        self.child_sep();
        self.write_value(&node.mid);
        self.child_sep();
        self.write_value(&node.right);

        self.depth -= 1;
        if self.is_pretty() {
            self.child_sep();
        }
        self.buf.push(')');
    }

    /// Fixed two-decimal formatting, matching the original display format.
    fn write_number(&mut self, n: f64) {
        write!(&mut self.buf, "{:.2}", n).unwrap();
    }
}

/// Render a value to the compact single-line text form, e.g.
/// `(hempty 5.00 hempty)`.
pub fn to_text(value: &Value) -> String {
    let mut w = TextWriter::new(TextStyle::Compact);
    w.write_value(value);
    w.buf
}

/// Render a value to the indented multi-line text form (2-space indent,
/// one child per line). The compact form is the canonical one.
pub fn to_text_pretty(value: &Value) -> String {
    let mut w = TextWriter::new(TextStyle::Pretty);
    w.write_value(value);
    w.buf
}
