//! Terminal rendering of cluster responses.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};
use std::io::Write;

const INDENT: &[u8] = b"    ";

/// Re-indent a JSON document with four spaces, keeping its key order.
pub fn indent_json(content: &[u8]) -> Result<String> {
    let value: Value = serde_json::from_slice(content).context("response is not valid JSON")?;
    let mut buf = Vec::with_capacity(content.len() * 2);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Print `heading` followed by the indented response.
pub fn print_json<W: Write>(out: &mut W, heading: Option<&str>, content: &[u8]) -> Result<()> {
    let pretty = indent_json(content)?;
    if let Some(heading) = heading {
        writeln!(out, "{heading}")?;
    }
    writeln!(out, "{pretty}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_four_spaces_preserving_order() {
        let pretty = indent_json(br#"{"z":1,"a":{"b":[1,2]}}"#).unwrap();
        let expected = "{\n    \"z\": 1,\n    \"a\": {\n        \"b\": [\n            1,\n            2\n        ]\n    }\n}";
        assert_eq!(pretty, expected);
    }

    #[test]
    fn test_indent_keeps_numbers_verbatim() {
        let pretty = indent_json(br#"{"n":123456789012345678901234567890,"f":1.10}"#).unwrap();
        assert_eq!(
            pretty,
            "{\n    \"n\": 123456789012345678901234567890,\n    \"f\": 1.10\n}"
        );
    }

    #[test]
    fn test_indent_rejects_non_json() {
        assert!(indent_json(b"<html>").is_err());
    }

    #[test]
    fn test_print_json_with_heading() {
        let mut out = Vec::new();
        print_json(&mut out, Some("Status:"), br#"{"ok":true}"#).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Status:\n{\n    \"ok\": true\n}\n"
        );
    }
}
