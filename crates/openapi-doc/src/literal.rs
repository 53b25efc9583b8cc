//! Python-literal rendering of JSON values
//!
//! Summary lines print values the way a Python `print` would show the parsed
//! document: `[{'bearerAuth': []}]`, `True`, `{'a': None}`. A top-level
//! `security: null` is the one place a null is kept apart from the `None`
//! placeholder; see [`SecurityField`](crate::SecurityField).

use serde_json::Value;
use std::fmt::{self, Write};

/// Renders a value in repr form: strings are quoted at every level
#[derive(Debug, Clone, Copy)]
pub struct PyLiteral<'a>(pub &'a Value);

/// Renders a value in str form: a top-level string is printed bare
#[derive(Debug, Clone, Copy)]
pub struct PyStr<'a>(pub &'a Value);

/// Renders an optional field: absent and null both print `None`
#[derive(Debug, Clone, Copy)]
pub struct PyField<'a>(pub Option<&'a Value>);

impl fmt::Display for PyLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_literal(f, self.0)
    }
}

impl fmt::Display for PyStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => f.write_str(s),
            other => write_literal(f, other),
        }
    }
}

impl fmt::Display for PyField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(&PyStr(value), f),
            None => f.write_str("None"),
        }
    }
}

fn write_literal<W: Write>(out: &mut W, value: &Value) -> fmt::Result {
    match value {
        Value::Null => out.write_str("None"),
        Value::Bool(true) => out.write_str("True"),
        Value::Bool(false) => out.write_str("False"),
        Value::Number(n) => write!(out, "{}", n),
        Value::String(s) => write_quoted(out, s),
        Value::Array(items) => {
            out.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_literal(out, item)?;
            }
            out.write_char(']')
        }
        Value::Object(map) => {
            out.write_char('{')?;
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_quoted(out, key)?;
                out.write_str(": ")?;
                write_literal(out, item)?;
            }
            out.write_char('}')
        }
    }
}

/// Quote a string the way Python's `repr` does: single quotes unless the
/// text contains a single quote and no double quote.
fn write_quoted<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    out.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if c == quote => {
                out.write_char('\\')?;
                out.write_char(c)?;
            }
            c if !is_printable(c) => write_escape(out, c)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char(quote)
}

/// Characters Python's `repr` leaves as-is: everything except controls,
/// separators other than the ASCII space, format characters and private use.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    !matches!(
        c,
        '\u{ad}'
            | '\u{600}'..='\u{605}'
            | '\u{61c}'
            | '\u{6dd}'
            | '\u{70f}'
            | '\u{180e}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{e000}'..='\u{f8ff}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
            | '\u{f0000}'..='\u{10ffff}'
    )
}

fn write_escape<W: Write>(out: &mut W, c: char) -> fmt::Result {
    match c as u32 {
        n @ 0..=0xff => write!(out, "\\x{:02x}", n),
        n @ 0x100..=0xffff => write!(out, "\\u{:04x}", n),
        n => write!(out, "\\U{:08x}", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(PyLiteral(&json!(true)).to_string(), "True");
        assert_eq!(PyLiteral(&json!(false)).to_string(), "False");
        assert_eq!(PyLiteral(&json!(42)).to_string(), "42");
        assert_eq!(PyLiteral(&json!(-1.5)).to_string(), "-1.5");
        assert_eq!(PyLiteral(&Value::Null).to_string(), "None");
    }

    #[test]
    fn test_nested_structures() {
        let value = json!([{"oauth": ["read", "write"]}, {}]);
        assert_eq!(
            PyLiteral(&value).to_string(),
            "[{'oauth': ['read', 'write']}, {}]"
        );
    }

    #[test]
    fn test_mapping_keeps_source_order() {
        let value: Value = serde_json::from_str(r#"{"zeta": 1, "alpha": 2}"#).unwrap();
        assert_eq!(PyLiteral(&value).to_string(), "{'zeta': 1, 'alpha': 2}");
    }

    #[test]
    fn test_string_quoting() {
        assert_eq!(PyLiteral(&json!("plain")).to_string(), "'plain'");
        assert_eq!(PyLiteral(&json!("it's")).to_string(), "\"it's\"");
        assert_eq!(
            PyLiteral(&json!("both ' and \"")).to_string(),
            "'both \\' and \"'"
        );
        assert_eq!(PyLiteral(&json!("a\\b\n")).to_string(), "'a\\\\b\\n'");
        assert_eq!(PyLiteral(&json!("\u{1}")).to_string(), "'\\x01'");
        assert_eq!(PyLiteral(&json!("матч")).to_string(), "'матч'");
    }

    #[test]
    fn test_non_printable_characters_are_escaped() {
        assert_eq!(PyLiteral(&json!("a\u{200b}b")).to_string(), "'a\\u200bb'");
        assert_eq!(PyLiteral(&json!("\u{2028}")).to_string(), "'\\u2028'");
        assert_eq!(PyLiteral(&json!("\u{a0}")).to_string(), "'\\xa0'");
        assert_eq!(PyLiteral(&json!("\u{f0000}")).to_string(), "'\\U000f0000'");
        assert_eq!(PyLiteral(&json!("x y")).to_string(), "'x y'");
    }

    #[test]
    fn test_nested_null_renders_as_none() {
        let value = json!([{"a": null}, null]);
        assert_eq!(PyLiteral(&value).to_string(), "[{'a': None}, None]");
    }

    #[test]
    fn test_str_form_prints_top_level_strings_bare() {
        assert_eq!(PyStr(&json!("3.0.0")).to_string(), "3.0.0");
        assert_eq!(PyStr(&json!(["3.0.0"])).to_string(), "['3.0.0']");
        assert_eq!(PyStr(&json!(3.1)).to_string(), "3.1");
    }

    #[test]
    fn test_field_placeholder() {
        assert_eq!(PyField(None).to_string(), "None");
        assert_eq!(PyField(Some(&Value::Null)).to_string(), "None");
        assert_eq!(PyField(Some(&json!("3.0.0"))).to_string(), "3.0.0");
    }
}
