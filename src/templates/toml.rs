// src/templates/toml.rs
//
// Small helpers for writing the `+++` front matter by hand.

/// Front matter delimiter line.
pub const FENCE: &str = "+++\n";

/// Appends `key="value"` with the value escaped as a TOML basic string.
pub fn push_kv(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push_str("=\"");
    push_escaped(out, value, '"');
    out.push_str("\"\n");
}

fn push_escaped(out: &mut String, value: &str, quote: char) {
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
}

/// Renders ids the way Python prints a list of strings: `['a', 'b']`.
///
/// Single quotes are used unless an item contains one and no double quote.
/// For plain ids that output is also a valid TOML array.
pub fn python_list_literal(items: &[String]) -> String {
    let rendered: Vec<String> = items.iter().map(|s| python_str_literal(s)).collect();
    format!("[{}]", rendered.join(", "))
}

fn python_str_literal(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => push_python_escape(&mut out, c),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Characters Python's `repr` writes as-is: everything except control,
/// format and separator characters, with the plain space allowed.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !(c.is_control() || c.is_whitespace() || is_format_char(c))
}

/// The Unicode format characters (category Cf) that show up in copied ids.
fn is_format_char(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'
            | '\u{0600}'..='\u{0605}'
            | '\u{061C}'
            | '\u{06DD}'
            | '\u{070F}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
            | '\u{E0001}'
            | '\u{E0020}'..='\u{E007F}'
    )
}

fn push_python_escape(out: &mut String, c: char) {
    let code = c as u32;
    if code <= 0xFF {
        out.push_str(&format!("\\x{code:02x}"));
    } else if code <= 0xFFFF {
        out.push_str(&format!("\\u{code:04x}"));
    } else {
        out.push_str(&format!("\\U{code:08x}"));
    }
}
