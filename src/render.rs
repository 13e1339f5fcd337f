//! Rendering a document tree back to text.
//!
//! The [`Renderer`] is a pure recursive traversal: output depends only on the
//! value, the [`RenderOptions`], and the current nesting depth. Depth starts
//! at 0 and increments entering a container body; it is used only to compute
//! indentation when pretty-printing.
//!
//! Strings are escaped on output with exactly the two escapes the parser
//! understands (`\"` and `\\`), so string round trips are bit-exact.
//!
//! ## Examples
//!
//! ```rust
//! use jsonette::{json, Renderer, RenderOptions};
//!
//! let doc = json!({"a": 1, "b": [true, null]});
//!
//! let compact = Renderer::new(RenderOptions::default()).render(&doc);
//! assert_eq!(compact, r#"{"a":1,"b":[true,null]}"#);
//!
//! let pretty = Renderer::new(RenderOptions::pretty()).render(&doc);
//! assert!(pretty.contains("\n  \"a\": 1"));
//! ```

use crate::JsonValue;
use std::fmt::Write;

/// Configuration options for rendering.
///
/// # Examples
///
/// ```rust
/// use jsonette::RenderOptions;
///
/// // Compact output, no whitespace at all
/// let options = RenderOptions::new();
///
/// // Pretty-printed with 4-space indentation
/// let options = RenderOptions::pretty().with_indent(4);
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub pretty: bool,
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            pretty: false,
            indent: 2,
        }
    }
}

impl RenderOptions {
    /// Creates default options (compact output, 2-space indent when enabled).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with newlines and indentation.
    #[must_use]
    pub fn pretty() -> Self {
        RenderOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Default is 2. Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Serializes a [`JsonValue`] tree to text.
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Creates a renderer with the given options.
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Renderer { options }
    }

    /// Renders the tree to a string.
    #[must_use]
    pub fn render(&self, value: &JsonValue) -> String {
        let mut out = String::new();
        self.write_value(value, 0, &mut out);
        out
    }

    fn write_value(&self, value: &JsonValue, depth: usize, out: &mut String) {
        match value {
            JsonValue::Null => out.push_str("null"),
            JsonValue::Bool(b) => {
                let _ = write!(out, "{}", b);
            }
            JsonValue::Int(n) => {
                let _ = write!(out, "{}", n);
            }
            JsonValue::Long(n) => {
                let _ = write!(out, "{}", n);
            }
            JsonValue::Float(f) => {
                let _ = write!(out, "{}", f);
            }
            JsonValue::Double(f) => {
                let _ = write!(out, "{}", f);
            }
            JsonValue::Char(c) => {
                let _ = write!(out, "'{}'", c);
            }
            JsonValue::String(s) => self.write_string(s, out),
            JsonValue::Array(array) => {
                if array.is_empty() {
                    out.push_str("[]");
                    return;
                }
                out.push('[');
                for (i, element) in array.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    self.newline_indent(depth + 1, out);
                    self.write_value(element, depth + 1, out);
                }
                self.newline_indent(depth, out);
                out.push(']');
            }
            JsonValue::Object(object) => {
                if object.is_empty() {
                    out.push_str("{}");
                    return;
                }
                out.push('{');
                for (i, (key, entry)) in object.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    self.newline_indent(depth + 1, out);
                    self.write_string(key, out);
                    out.push(':');
                    if self.options.pretty {
                        out.push(' ');
                    }
                    self.write_value(entry, depth + 1, out);
                }
                self.newline_indent(depth, out);
                out.push('}');
            }
        }
    }

    fn write_string(&self, s: &str, out: &mut String) {
        out.push('"');
        for ch in s.chars() {
            if ch == '"' || ch == '\\' {
                out.push('\\');
            }
            out.push(ch);
        }
        out.push('"');
    }

    fn newline_indent(&self, depth: usize, out: &mut String) {
        if self.options.pretty {
            out.push('\n');
            for _ in 0..self.options.indent * depth {
                out.push(' ');
            }
        }
    }
}
