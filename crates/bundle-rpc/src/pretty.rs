use serde::de::IgnoredAny;

const INDENT: &str = "  ";

/// Indent raw JSON for logging. Tokens are copied verbatim, so key order,
/// number formatting and string escapes are preserved. If `data` is not valid
/// JSON it is returned unchanged.
pub fn prettify_json(data: &[u8]) -> String {
    if serde_json::from_slice::<IgnoredAny>(data).is_err() {
        return String::from_utf8_lossy(data).into_owned();
    }
    // Valid JSON is valid UTF-8.
    let Ok(text) = std::str::from_utf8(data) else {
        return String::from_utf8_lossy(data).into_owned();
    };
    indent(text)
}

fn indent(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    // Set after an opening bracket until we know whether the container is empty.
    let mut pending_open = false;

    for c in text.chars() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        if c.is_ascii_whitespace() {
            continue;
        }
        if pending_open {
            pending_open = false;
            if c == ']' || c == '}' {
                depth -= 1;
                out.push(c);
                continue;
            }
            newline(&mut out, depth);
        }
        match c {
            '{' | '[' => {
                out.push(c);
                depth += 1;
                pending_open = true;
            }
            '}' | ']' => {
                depth -= 1;
                newline(&mut out, depth);
                out.push(c);
            }
            ',' => {
                out.push(c);
                newline(&mut out, depth);
            }
            ':' => out.push_str(": "),
            '"' => {
                out.push(c);
                in_string = true;
            }
            _ => out.push(c),
        }
    }
    out
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(s: &str) -> String {
        s.chars().filter(|c| !c.is_whitespace()).collect()
    }

    #[test]
    fn indents_nested_values() {
        let pretty = prettify_json(br#"{"a":[1,2],"b":{"c":"d"}}"#);
        assert_eq!(
            pretty,
            "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": {\n    \"c\": \"d\"\n  }\n}"
        );
    }

    #[test]
    fn empty_containers_stay_compact() {
        assert_eq!(prettify_json(br#"{"a":[],"b":{}}"#), "{\n  \"a\": [],\n  \"b\": {}\n}");
        assert_eq!(prettify_json(b"[ ]"), "[]");
    }

    #[test]
    fn preserves_tokens() {
        let input = r#"{ "z": 1.50e3, "a": "x\"y, [z]: é", "m": [true, null] }"#;
        let pretty = prettify_json(input.as_bytes());
        assert_eq!(strip(&pretty), strip(input));
        assert!(pretty.contains(r#""x\"y, [z]: é""#));
    }

    #[test]
    fn scalars_are_unchanged() {
        assert_eq!(prettify_json(b"\"abc\""), "\"abc\"");
        assert_eq!(prettify_json(b" 42 "), "42");
    }

    #[test]
    fn malformed_input_is_returned_unchanged() {
        let input = br#"{"a":[1,2}"#;
        assert_eq!(prettify_json(input), r#"{"a":[1,2}"#);
        assert_eq!(prettify_json(b"not json at all"), "not json at all");
        assert_eq!(prettify_json(b""), "");
    }
}
