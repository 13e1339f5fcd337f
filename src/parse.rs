//! Parsing text into a document tree.
//!
//! The [`Parser`] is a single-pass recursive descent scanner over an
//! immutable input buffer. One cursor (a byte offset owned by the parser
//! struct, never ambient state) is shared by all sub-parsers: each consumes
//! through the last character that belongs to its production, and its caller
//! resumes with the next character.
//!
//! Two modes exist. Strict mode fails fast on any deviation from the
//! grammar. Lenient mode tolerates certain malformed inputs by skipping
//! stray characters or substituting defaults, but it never invents a
//! document out of unrecognizable input: an unterminated object, array, or
//! string is fatal in both modes.
//!
//! Recursion depth is unbounded; deeply nested input can exhaust the call
//! stack.
//!
//! ## Usage
//!
//! ```rust
//! use jsonette::{from_str, from_str_lenient};
//!
//! let doc = from_str(r#"{"name": "Alice", "tags": ["admin"]}"#).unwrap();
//! assert_eq!(doc.as_object().unwrap().len(), 2);
//!
//! // strict mode rejects stray characters, lenient skips them
//! assert!(from_str("# [1, 2]").is_err());
//! let doc = from_str_lenient("# [1, 2]").unwrap();
//! assert_eq!(doc.as_array().unwrap().len(), 2);
//! ```

use crate::{Error, JsonArray, JsonMap, JsonValue, Result};

/// Characters skipped between tokens.
fn is_ignored(ch: char) -> bool {
    matches!(ch, ' ' | '\n' | '\t' | '\r')
}

/// The recursive descent parser.
///
/// Created via [`Parser::new`]; most callers use the crate-level
/// [`from_str`](crate::from_str) / [`from_str_lenient`](crate::from_str_lenient)
/// instead.
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    lenient: bool,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, lenient: bool) -> Self {
        Parser {
            input,
            position: 0,
            line: 1,
            column: 1,
            lenient,
        }
    }

    /// Parses one document root from the input.
    ///
    /// Text after the first complete value is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] on any fatal condition; the parse of the
    /// whole document is aborted, there is no partial result.
    pub fn parse(mut self) -> Result<JsonValue> {
        self.parse_value()
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.input[self.position..].chars().next()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn rest(&self) -> &str {
        &self.input[self.position..]
    }

    fn advance_by(&mut self, chars: usize) {
        for _ in 0..chars {
            self.next_char();
        }
    }

    fn syntax(&self, msg: impl Into<String>) -> Error {
        Error::syntax(self.line, self.column, msg)
    }

    /// Top-level dispatch: skip whitespace, then hand off to the sub-parser
    /// selected by the next character.
    fn parse_value(&mut self) -> Result<JsonValue> {
        while let Some(ch) = self.peek_char() {
            if is_ignored(ch) {
                self.next_char();
                continue;
            }
            match ch {
                '{' => {
                    self.next_char();
                    return self.parse_object();
                }
                '[' => {
                    self.next_char();
                    return self.parse_array();
                }
                '"' => {
                    self.next_char();
                    return self.parse_string().map(JsonValue::String);
                }
                '\'' => {
                    self.next_char();
                    return self.parse_char();
                }
                c if c.is_ascii_digit() => return self.parse_number(),
                '-' if self.second_char_is_digit() => return self.parse_number(),
                _ => {
                    if self.rest().starts_with("true") || self.rest().starts_with("false") {
                        return self.parse_bool();
                    }
                    if self.rest().starts_with("null") {
                        self.advance_by(4);
                        return Ok(JsonValue::Null);
                    }
                    if self.lenient {
                        self.next_char();
                        continue;
                    }
                    return Err(self.syntax(format!("unrecognized character {:?}", ch)));
                }
            }
        }
        Err(self.syntax("no value found before end of input"))
    }

    fn second_char_is_digit(&self) -> bool {
        self.rest()
            .chars()
            .nth(1)
            .is_some_and(|c| c.is_ascii_digit())
    }

    /// Called with the cursor past the opening `{`.
    fn parse_object(&mut self) -> Result<JsonValue> {
        let mut object = JsonMap::new();
        let mut current_key: Option<String> = None;
        let mut expecting_key = true;

        while let Some(ch) = self.peek_char() {
            if is_ignored(ch) {
                self.next_char();
                continue;
            }
            match ch {
                '"' if expecting_key => {
                    self.next_char();
                    current_key = Some(self.parse_string()?);
                    expecting_key = false;
                }
                ':' => {
                    self.next_char();
                    match current_key.take() {
                        Some(key) => {
                            if self.value_is_missing() {
                                // the `,` or `}` stays in the input for the next pass
                                if !self.lenient {
                                    return Err(
                                        self.syntax(format!("no value given for key {:?}", key))
                                    );
                                }
                            } else {
                                let value = self.parse_value()?;
                                object.insert(key, value);
                            }
                        }
                        None if self.lenient => {}
                        None => return Err(self.syntax("colon with no key to assign")),
                    }
                }
                ',' => {
                    self.next_char();
                    if expecting_key {
                        if !self.lenient {
                            return Err(self.syntax("comma while still expecting a key"));
                        }
                    } else {
                        expecting_key = true;
                    }
                }
                '}' => {
                    self.next_char();
                    if let Some(key) = current_key.take() {
                        // lenient recovery: drop the pending key and close
                        if !self.lenient {
                            return Err(self.syntax(format!(
                                "object closed before key {:?} received a value",
                                key
                            )));
                        }
                    }
                    return Ok(JsonValue::Object(object));
                }
                _ => {
                    // stray character between tokens
                    self.next_char();
                }
            }
        }
        Err(self.syntax("object was never closed"))
    }

    /// Looks past whitespace for a `}` or `,` where a value was expected.
    /// Only whitespace is consumed.
    fn value_is_missing(&mut self) -> bool {
        while let Some(ch) = self.peek_char() {
            if is_ignored(ch) {
                self.next_char();
                continue;
            }
            return ch == '}' || ch == ',';
        }
        true
    }

    /// Called with the cursor past the opening `[`.
    fn parse_array(&mut self) -> Result<JsonValue> {
        let mut array = JsonArray::new();
        let mut expecting_value = true;

        while let Some(ch) = self.peek_char() {
            match ch {
                ',' => {
                    self.next_char();
                    if expecting_value {
                        if !self.lenient {
                            return Err(self.syntax("comma while still expecting a value"));
                        }
                    } else {
                        expecting_value = true;
                    }
                }
                // a trailing comma never becomes an element
                ']' => {
                    self.next_char();
                    return Ok(JsonValue::Array(array));
                }
                ch if is_ignored(ch) => {
                    self.next_char();
                }
                _ => {
                    if expecting_value {
                        array.push(self.parse_value()?);
                        expecting_value = false;
                    } else {
                        // no comma seen yet; stray character ignored
                        self.next_char();
                    }
                }
            }
        }
        Err(self.syntax("array was never closed"))
    }

    /// Called with the cursor past the opening `"`. Escape handling is
    /// limited to backslash-doubling and backslash-quote; any other escaped
    /// character is emitted verbatim with the backslash dropped.
    fn parse_string(&mut self) -> Result<String> {
        let mut out = String::new();
        let mut escaped = false;

        while let Some(ch) = self.next_char() {
            if escaped {
                out.push(ch);
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                return Ok(out);
            } else {
                out.push(ch);
            }
        }
        Err(self.syntax("string literal was never closed"))
    }

    /// Called with the cursor past the opening `'`. The dialect requires a
    /// closing quote; in lenient mode a missing one leaves the following
    /// character for the outer scan.
    fn parse_char(&mut self) -> Result<JsonValue> {
        let ch = match self.next_char() {
            Some('\'') => return Err(self.syntax("empty character literal")),
            Some(ch) => ch,
            None => return Err(self.syntax("character literal was never closed")),
        };
        match self.peek_char() {
            Some('\'') => {
                self.next_char();
            }
            _ if self.lenient => {}
            _ => return Err(self.syntax("character literal missing closing quote")),
        }
        Ok(JsonValue::Char(ch))
    }

    /// Scans a full numeral: optional sign, digit run, optional fraction,
    /// optional exponent, optional one-letter type suffix (`l`, `f`, `d`).
    /// Classification: suffix wins; a fraction or exponent means Double;
    /// otherwise Int if the value fits, else Long.
    fn parse_number(&mut self) -> Result<JsonValue> {
        let start = self.position;
        let (line, col) = (self.line, self.column);

        if self.peek_char() == Some('-') {
            self.next_char();
        }
        self.consume_digits();

        let mut fractional = false;
        if self.peek_char() == Some('.') && self.second_char_is_digit() {
            fractional = true;
            self.next_char();
            self.consume_digits();
        }
        if self.exponent_follows() {
            fractional = true;
            self.next_char();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.next_char();
            }
            self.consume_digits();
        }

        let literal = &self.input[start..self.position];
        let suffix = match self.peek_char() {
            Some(c @ ('l' | 'L' | 'f' | 'F' | 'd' | 'D')) => {
                self.next_char();
                Some(c.to_ascii_lowercase())
            }
            _ => None,
        };

        match suffix {
            Some('f') => match literal.parse::<f32>() {
                Ok(f) => Ok(JsonValue::Float(f)),
                Err(_) => Err(Error::syntax(
                    line,
                    col,
                    format!("invalid float literal {:?}", literal),
                )),
            },
            Some('d') => match literal.parse::<f64>() {
                Ok(f) => Ok(JsonValue::Double(f)),
                Err(_) => Err(Error::syntax(
                    line,
                    col,
                    format!("invalid double literal {:?}", literal),
                )),
            },
            Some(_) => match literal.parse::<i64>() {
                Ok(n) => Ok(JsonValue::Long(n)),
                Err(_) if self.lenient => {
                    // fractional or overflowing long literal, truncate
                    let f = literal.parse::<f64>().unwrap_or(0.0);
                    Ok(JsonValue::Long(f as i64))
                }
                Err(_) => Err(Error::syntax(
                    line,
                    col,
                    format!("invalid long literal {:?}", literal),
                )),
            },
            None if fractional => match literal.parse::<f64>() {
                Ok(f) => Ok(JsonValue::Double(f)),
                Err(_) => Err(Error::syntax(
                    line,
                    col,
                    format!("invalid number literal {:?}", literal),
                )),
            },
            None => match literal.parse::<i64>() {
                Ok(n) => Ok(match i32::try_from(n) {
                    Ok(small) => JsonValue::Int(small),
                    Err(_) => JsonValue::Long(n),
                }),
                Err(_) if self.lenient => Ok(JsonValue::Long(if literal.starts_with('-') {
                    i64::MIN
                } else {
                    i64::MAX
                })),
                Err(_) => Err(Error::syntax(
                    line,
                    col,
                    format!("integer literal {:?} out of range", literal),
                )),
            },
        }
    }

    fn consume_digits(&mut self) {
        while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
            self.next_char();
        }
    }

    /// An `e`/`E` only belongs to the numeral when digits (optionally
    /// signed) follow it.
    fn exponent_follows(&self) -> bool {
        let mut chars = self.rest().chars();
        if !matches!(chars.next(), Some('e' | 'E')) {
            return false;
        }
        match chars.next() {
            Some('+' | '-') => matches!(chars.next(), Some(c) if c.is_ascii_digit()),
            Some(c) => c.is_ascii_digit(),
            None => false,
        }
    }

    /// Lookahead-matches the literal `true`/`false` at the cursor. On no
    /// match, lenient mode substitutes `false` and consumes one character;
    /// strict mode fails.
    fn parse_bool(&mut self) -> Result<JsonValue> {
        if self.rest().starts_with("true") {
            self.advance_by(4);
            Ok(JsonValue::Bool(true))
        } else if self.rest().starts_with("false") {
            self.advance_by(5);
            Ok(JsonValue::Bool(false))
        } else if self.lenient {
            self.next_char();
            Ok(JsonValue::Bool(false))
        } else {
            Err(self.syntax("boolean literal was expected"))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{from_str, from_str_lenient, Error, JsonValue};

    #[test]
    fn scalars_parse() {
        assert_eq!(from_str("null").unwrap(), JsonValue::Null);
        assert_eq!(from_str("true").unwrap(), JsonValue::Bool(true));
        assert_eq!(from_str("false").unwrap(), JsonValue::Bool(false));
        assert_eq!(from_str("  42 ").unwrap(), JsonValue::Int(42));
        assert_eq!(from_str("\"hi\"").unwrap(), JsonValue::from("hi"));
        assert_eq!(from_str("'x'").unwrap(), JsonValue::Char('x'));
    }

    #[test]
    fn empty_input_is_fatal_in_both_modes() {
        assert!(from_str("").is_err());
        assert!(from_str_lenient("   \n\t").is_err());
    }

    #[test]
    fn unrecognized_character_strict_vs_lenient() {
        let err = from_str("@true").unwrap_err();
        match err {
            Error::Syntax { line, col, msg } => {
                assert_eq!((line, col), (1, 1));
                assert!(msg.contains('@'));
            }
            other => panic!("expected syntax error, got {other:?}"),
        }
        assert_eq!(from_str_lenient("@true").unwrap(), JsonValue::Bool(true));
    }

    #[test]
    fn object_basic() {
        let doc = from_str(r#"{"a": 1, "b": "two"}"#).unwrap();
        let obj = doc.as_object().unwrap();
        assert_eq!(obj.get("a"), Some(&JsonValue::Int(1)));
        assert_eq!(obj.get("b"), Some(&JsonValue::from("two")));
    }

    #[test]
    fn object_preserves_insertion_order() {
        let doc = from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn object_missing_value_strict_fails() {
        assert!(from_str(r#"{"a":}"#).is_err());
        assert!(from_str(r#"{"a": , "b": 1}"#).is_err());
    }

    #[test]
    fn object_missing_value_lenient_drops_key() {
        let doc = from_str_lenient(r#"{"a":}"#).unwrap();
        let obj = doc.as_object().unwrap();
        assert!(obj.is_empty());

        let doc = from_str_lenient(r#"{"a": , "b": 1}"#).unwrap();
        let obj = doc.as_object().unwrap();
        assert_eq!(obj.get("a"), None);
        assert_eq!(obj.get("b"), Some(&JsonValue::Int(1)));
    }

    #[test]
    fn object_pending_key_at_close() {
        assert!(from_str(r#"{"a"}"#).is_err());
        let doc = from_str_lenient(r#"{"a"}"#).unwrap();
        assert!(doc.as_object().unwrap().is_empty());
    }

    #[test]
    fn object_stray_colon_and_comma() {
        assert!(from_str(r#"{: 1}"#).is_err());
        assert!(from_str(r#"{, "a": 1}"#).is_err());
        let doc = from_str_lenient(r#"{:, "a": 1}"#).unwrap();
        assert_eq!(
            doc.as_object().unwrap().get("a"),
            Some(&JsonValue::Int(1))
        );
    }

    #[test]
    fn object_never_closed_is_fatal_in_both_modes() {
        assert!(from_str(r#"{"a": 1"#).is_err());
        assert!(from_str_lenient(r#"{"a": 1"#).is_err());
    }

    #[test]
    fn duplicate_keys_last_write_wins_in_place() {
        let doc = from_str(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
        let obj = doc.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.get("a"), Some(&JsonValue::Int(3)));
        let keys: Vec<_> = obj.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn array_basic_and_nested() {
        let doc = from_str(r#"[1, [2, 3], {"k": null}]"#).unwrap();
        let arr = doc.as_array().unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr[0], JsonValue::Int(1));
        assert_eq!(arr[1].as_array().unwrap().len(), 2);
        assert_eq!(
            arr[2].as_object().unwrap().get("k"),
            Some(&JsonValue::Null)
        );
    }

    #[test]
    fn array_trailing_comma_tolerated_in_both_modes() {
        for parse in [from_str, from_str_lenient] {
            let doc = parse("[1,2,]").unwrap();
            let arr = doc.as_array().unwrap();
            assert_eq!(arr.len(), 2);
            assert_eq!(arr[0], JsonValue::Int(1));
            assert_eq!(arr[1], JsonValue::Int(2));
        }
    }

    #[test]
    fn array_double_comma() {
        assert!(from_str("[1,,2]").is_err());
        let doc = from_str_lenient("[1,,2]").unwrap();
        assert_eq!(doc.as_array().unwrap().len(), 2);
    }

    #[test]
    fn array_never_closed_is_fatal_in_both_modes() {
        assert!(from_str("[1, 2").is_err());
        assert!(from_str_lenient("[1, 2").is_err());
    }

    #[test]
    fn string_escapes() {
        assert_eq!(
            from_str(r#""say \"hi\"""#).unwrap(),
            JsonValue::from("say \"hi\"")
        );
        assert_eq!(from_str(r#""a\\b""#).unwrap(), JsonValue::from("a\\b"));
        // only quote and backslash escapes exist; anything else is verbatim
        assert_eq!(from_str(r#""a\nb""#).unwrap(), JsonValue::from("anb"));
    }

    #[test]
    fn string_unterminated_is_fatal_in_both_modes() {
        assert!(from_str(r#""open"#).is_err());
        assert!(from_str_lenient(r#""open \""#).is_err());
    }

    #[test]
    fn char_literal_requires_closing_quote_in_strict() {
        assert_eq!(from_str("'x'").unwrap(), JsonValue::Char('x'));
        assert!(from_str("'x").is_err());
        assert!(from_str("''").is_err());
        // lenient leaves the stray character for the outer scan
        let doc = from_str_lenient("['x]").unwrap();
        assert_eq!(doc.as_array().unwrap()[0], JsonValue::Char('x'));
    }

    #[test]
    fn number_classification() {
        assert_eq!(from_str("3").unwrap(), JsonValue::Int(3));
        assert_eq!(from_str("-3").unwrap(), JsonValue::Int(-3));
        assert_eq!(from_str("3000000000").unwrap(), JsonValue::Long(3_000_000_000));
        assert_eq!(from_str("1.5").unwrap(), JsonValue::Double(1.5));
        assert_eq!(from_str("-0.25").unwrap(), JsonValue::Double(-0.25));
        assert_eq!(from_str("1e3").unwrap(), JsonValue::Double(1000.0));
        assert_eq!(from_str("2E-2").unwrap(), JsonValue::Double(0.02));
        assert_eq!(from_str("2f").unwrap(), JsonValue::Float(2.0));
        assert_eq!(from_str("2.5F").unwrap(), JsonValue::Float(2.5));
        assert_eq!(from_str("7L").unwrap(), JsonValue::Long(7));
        assert_eq!(from_str("4d").unwrap(), JsonValue::Double(4.0));
    }

    #[test]
    fn number_stops_at_non_numeral() {
        let doc = from_str("[1,2]").unwrap();
        assert_eq!(doc.as_array().unwrap().len(), 2);

        // a dot with no digit after it is not part of the number
        let doc = from_str_lenient("[1.]").unwrap();
        assert_eq!(doc.as_array().unwrap()[0], JsonValue::Int(1));
    }

    #[test]
    fn integer_overflow_strict_vs_lenient() {
        let big = "99999999999999999999";
        assert!(from_str(big).is_err());
        assert_eq!(
            from_str_lenient(big).unwrap(),
            JsonValue::Long(i64::MAX)
        );
        assert_eq!(
            from_str_lenient(&format!("-{big}")).unwrap(),
            JsonValue::Long(i64::MIN)
        );
    }

    #[test]
    fn negative_without_digit_is_not_a_number() {
        assert!(from_str("-x").is_err());
        // lenient skips the '-' and keeps scanning
        assert_eq!(from_str_lenient("- 5").unwrap(), JsonValue::Int(5));
    }

    #[test]
    fn error_positions_track_lines() {
        let err = from_str("\n\n  @").unwrap_err();
        match err {
            Error::Syntax { line, col, .. } => assert_eq!((line, col), (3, 3)),
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn stray_characters_between_object_tokens_are_skipped() {
        // matches the array's implicit recovery: strays between tokens are
        // ignored in both modes
        let doc = from_str(r#"{"a" x: 1}"#).unwrap();
        assert_eq!(doc.as_object().unwrap().get("a"), Some(&JsonValue::Int(1)));
    }

    #[test]
    fn trailing_text_after_root_is_ignored() {
        assert_eq!(from_str("[1] trailing").unwrap().as_array().unwrap().len(), 1);
    }
}
