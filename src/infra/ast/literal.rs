//! String literal value decoding
//!
//! Turns the text between a literal's quotes into its string value, the way
//! a JavaScript engine reads it: escape sequences are decoded and line
//! continuations vanish.

use std::borrow::Cow;

/// Decode the escape sequences in a literal body (quotes already removed).
///
/// Malformed escapes keep the escaped character; unpaired surrogates decode
/// to U+FFFD.
pub fn unescape(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(escaped) = chars.next() else {
            out.push('\\');
            break;
        };
        match escaped {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' if !chars.peek().is_some_and(|c| c.is_ascii_digit()) => out.push('\0'),
            // Line continuation
            '\n' | '\u{2028}' | '\u{2029}' => {}
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            'x' => match take_hex(&mut chars, 2) {
                Some(code) => push_code_point(&mut out, code),
                None => out.push('x'),
            },
            'u' => match unicode_escape(&mut chars) {
                Some(unit) => push_utf16_unit(&mut out, unit, &mut chars),
                None => out.push('u'),
            },
            other => out.push(other),
        }
    }

    Cow::Owned(out)
}

type Chars<'a> = std::iter::Peekable<std::str::Chars<'a>>;

/// Exactly `len` hex digits, consumed only when all are present
fn take_hex(chars: &mut Chars<'_>, len: usize) -> Option<u32> {
    let lookahead: String = chars.clone().take(len).collect();
    if lookahead.len() != len || !lookahead.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    for _ in 0..len {
        chars.next();
    }
    u32::from_str_radix(&lookahead, 16).ok()
}

/// `\uXXXX` or `\u{X...}` after the `u`
fn unicode_escape(chars: &mut Chars<'_>) -> Option<u32> {
    if chars.peek() != Some(&'{') {
        return take_hex(chars, 4);
    }

    let mut lookahead = chars.clone();
    lookahead.next();
    let mut digits = String::new();
    loop {
        match lookahead.next()? {
            '}' => break,
            c if c.is_ascii_hexdigit() => digits.push(c),
            _ => return None,
        }
    }
    if digits.is_empty() {
        return None;
    }
    let code = u32::from_str_radix(&digits, 16).ok().filter(|c| *c <= 0x10FFFF)?;
    *chars = lookahead;
    Some(code)
}

/// A `\u` escape may be half of a surrogate pair spelled as two escapes
fn push_utf16_unit(out: &mut String, unit: u32, chars: &mut Chars<'_>) {
    if (0xD800..0xDC00).contains(&unit) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\')
            && lookahead.next() == Some('u')
            && let Some(low) = take_hex(&mut lookahead, 4)
            && (0xDC00..0xE000).contains(&low)
        {
            *chars = lookahead;
            push_code_point(out, 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00));
            return;
        }
    }
    push_code_point(out, unit);
}

fn push_code_point(out: &mut String, code: u32) {
    out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
}
