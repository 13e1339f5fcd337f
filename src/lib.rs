//! # jsonette
//!
//! A self-contained text-to-tree-to-text document engine for a lenient
//! JSON-like dialect: a single-pass recursive descent scanner that builds a
//! typed in-memory tree, and a renderer that serializes the tree back to
//! text.
//!
//! ## The dialect
//!
//! Objects `{ "k": v, ... }`, arrays `[ v, ... ]`, double-quoted strings
//! with minimal backslash handling (`\"` and `\\` only), single-quoted
//! one-character literals (`'x'`, an extension over standard JSON), bare
//! `true`/`false`/`null`, and numbers in four widths selected by lexical
//! form: `Int`/`Long`/`Float`/`Double`, with optional `l`/`f`/`d` suffixes.
//! This is a deliberate superset/subset of JSON, not a conformance target.
//!
//! ## Key Features
//!
//! - **Two parsing modes**: strict fails fast on malformed input; lenient
//!   skips stray characters and substitutes defaults, without ever inventing
//!   a document from unrecognizable input
//! - **Order-preserving objects**: entries iterate and render in insertion
//!   order, and survive parse/render round trips
//! - **Absent-safe accessors**: type narrowing returns `Option`, never
//!   panics
//! - **Serde interop**: [`JsonValue`] implements `Serialize`/`Deserialize`
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonette::{from_str, json, to_string, to_string_pretty};
//!
//! let doc = from_str(r#"{"name": "Alice", "grade": 'A', "tags": [1, 2]}"#).unwrap();
//! let obj = doc.as_object().unwrap();
//! assert_eq!(obj.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! assert_eq!(obj.get("grade").and_then(|v| v.as_char()), Some('A'));
//!
//! // Build a tree directly and render it
//! let built = json!({"active": true, "score": 9.5});
//! assert_eq!(to_string(&built), r#"{"active":true,"score":9.5}"#);
//! assert_eq!(to_string_pretty(&built), "{\n  \"active\": true,\n  \"score\": 9.5\n}");
//! ```
//!
//! ## Lenient parsing
//!
//! ```rust
//! use jsonette::{from_str, from_str_lenient};
//!
//! // a value missing after a colon: strict fails, lenient drops the key
//! assert!(from_str(r#"{"a":}"#).is_err());
//! let doc = from_str_lenient(r#"{"a":}"#).unwrap();
//! assert!(doc.as_object().unwrap().is_empty());
//! ```
//!
//! ## Limits
//!
//! The engine is single-threaded and synchronous; the whole input lives in
//! memory and parsing recursion depth is unbounded, so pathologically nested
//! input can exhaust the call stack. Containers are not internally
//! synchronized; callers sharing trees across threads provide their own
//! locking.

pub mod array;
pub mod error;
pub mod macros;
pub mod map;
pub mod parse;
pub mod render;
pub mod value;

pub use array::JsonArray;
pub use error::{Error, Result};
pub use map::JsonMap;
pub use parse::Parser;
pub use render::{RenderOptions, Renderer};
pub use value::JsonValue;

use std::fs;
use std::io;
use std::path::Path;

/// Parses a document from text in strict mode.
///
/// # Examples
///
/// ```rust
/// use jsonette::from_str;
///
/// let doc = from_str("[1, 2, 3]").unwrap();
/// assert_eq!(doc.as_array().unwrap().len(), 3);
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] on any deviation from the grammar.
pub fn from_str(input: &str) -> Result<JsonValue> {
    Parser::new(input, false).parse()
}

/// Parses a document from text in lenient mode.
///
/// Tolerated deviations skip characters or substitute defaults; unterminated
/// objects, arrays, and strings remain fatal.
///
/// # Errors
///
/// Returns [`Error::Syntax`] on conditions lenient mode cannot recover from.
pub fn from_str_lenient(input: &str) -> Result<JsonValue> {
    Parser::new(input, true).parse()
}

/// Parses a document from any reader, in strict mode.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails and [`Error::Syntax`] if the text
/// does not parse.
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<JsonValue> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(e.to_string()))?;
    from_str(&text)
}

/// Parses a document from a UTF-8 text file, in strict mode.
///
/// Lines are joined with `\n`, so the parse result is independent of the
/// file's line-ending convention.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Syntax`] if
/// its text does not parse.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<JsonValue> {
    from_str(&read_path(path.as_ref())?)
}

/// Parses a document from a UTF-8 text file, in lenient mode.
///
/// # Errors
///
/// Same conditions as [`from_path`].
pub fn from_path_lenient<P: AsRef<Path>>(path: P) -> Result<JsonValue> {
    from_str_lenient(&read_path(path.as_ref())?)
}

fn read_path(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(|e| Error::io(e.to_string()))?;
    Ok(raw.lines().collect::<Vec<_>>().join("\n"))
}

/// Renders a document to its compact text form.
///
/// # Examples
///
/// ```rust
/// use jsonette::{json, to_string};
///
/// assert_eq!(to_string(&json!([1, null])), "[1,null]");
/// ```
#[must_use]
pub fn to_string(value: &JsonValue) -> String {
    to_string_with_options(value, RenderOptions::default())
}

/// Renders a document pretty-printed with the default 2-space indent.
#[must_use]
pub fn to_string_pretty(value: &JsonValue) -> String {
    to_string_with_options(value, RenderOptions::pretty())
}

/// Renders a document with custom options.
#[must_use]
pub fn to_string_with_options(value: &JsonValue, options: RenderOptions) -> String {
    Renderer::new(options).render(value)
}

/// Renders a document to a writer in its compact text form.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer<W: io::Write>(writer: W, value: &JsonValue) -> Result<()> {
    to_writer_with_options(writer, value, RenderOptions::default())
}

/// Renders a document to a writer with custom options.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer_with_options<W: io::Write>(
    mut writer: W,
    value: &JsonValue,
    options: RenderOptions,
) -> Result<()> {
    writer
        .write_all(to_string_with_options(value, options).as_bytes())
        .map_err(|e| Error::io(e.to_string()))
}

/// Renders a document and writes it to a file.
///
/// Missing parent directories are created first. Fails if the destination
/// already exists as a directory.
///
/// # Errors
///
/// Returns [`Error::Io`] on any filesystem failure.
pub fn write_to_path<P: AsRef<Path>>(
    path: P,
    value: &JsonValue,
    options: RenderOptions,
) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        return Err(Error::io(format!(
            "destination {} is a directory",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(e.to_string()))?;
        }
    }
    fs::write(path, to_string_with_options(value, options)).map_err(|e| Error::io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json;

    #[test]
    fn test_parse_then_render() {
        let doc = from_str(r#"{"id": 7, "name": "Ada", "ok": true}"#).unwrap();
        assert_eq!(to_string(&doc), r#"{"id":7,"name":"Ada","ok":true}"#);
    }

    #[test]
    fn test_from_reader() {
        let cursor = std::io::Cursor::new(b"[true, false]");
        let doc = from_reader(cursor).unwrap();
        assert_eq!(doc.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_to_writer() {
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &json!({"k": null})).unwrap();
        assert_eq!(buffer, br#"{"k":null}"#);
    }

    #[test]
    fn test_render_parse_round_trip() {
        let doc = json!({
            "text": "say \"hi\"",
            "grade": 'B',
            "items": [1, 2.5, null],
            "nested": {"empty": []}
        });

        let rendered = to_string(&doc);
        let reparsed = from_str(&rendered).unwrap();
        assert_eq!(to_string(&reparsed), rendered);
    }
}
