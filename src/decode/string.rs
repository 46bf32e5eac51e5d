use memchr::memchr2;

use crate::options::ReadMode;

use super::cursor::Cursor;
use super::number::hex_digit;

const SUR_HIGH_START: u32 = 0xD800;
const SUR_HIGH_END: u32 = 0xDBFF;
const SUR_LOW_START: u32 = 0xDC00;
const SUR_LOW_END: u32 = 0xDFFF;
const REPLACEMENT: u32 = 0xFFFD;

/// Reads a quoted string; the cursor sits on the opening quote.
///
/// Escaped code points are re-encoded as UTF-8; everything else is copied
/// byte for byte, so invalid UTF-8 in the input survives verbatim. Strict
/// mode rejects single quotes, unescaped control bytes, unknown escapes
/// and an unterminated string; ECMA mode passes unknown escapes through
/// literally and keeps whatever accumulated before an early end of input.
pub(super) fn read_string(cursor: &mut Cursor, mode: ReadMode) -> Option<Vec<u8>> {
    let quote = cursor.peek()?;
    if mode.strict_lexing() && quote == b'\'' {
        return None;
    }
    cursor.bump();

    let mut out = Vec::new();
    let mut lead: Option<u32> = None;
    let mut closed = false;

    while let Some(byte) = cursor.peek() {
        if byte == quote {
            cursor.bump();
            closed = true;
            break;
        }

        if byte == b'\\' {
            cursor.bump();
            let Some(escape) = cursor.peek() else {
                break;
            };

            // a pending high surrogate pairs only with another \u escape
            if escape != b'u' {
                if lead.take().is_some() {
                    push_utf8(&mut out, REPLACEMENT);
                }
            }

            match escape {
                b'\r' | b'\n' => {
                    // line continuation: the escaped newline (or the
                    // CRLF/LFCR pair) disappears from the payload
                    if mode.strict_lexing() {
                        return None;
                    }
                    cursor.bump();
                    let partner = if escape == b'\r' { b'\n' } else { b'\r' };
                    if cursor.peek() == Some(partner) {
                        cursor.bump();
                    }
                }
                b'b' => {
                    out.push(0x08);
                    cursor.bump();
                }
                b'f' => {
                    out.push(0x0C);
                    cursor.bump();
                }
                b'n' => {
                    out.push(b'\n');
                    cursor.bump();
                }
                b'r' => {
                    out.push(b'\r');
                    cursor.bump();
                }
                b't' => {
                    out.push(b'\t');
                    cursor.bump();
                }
                b'v' => {
                    if mode.strict_lexing() {
                        return None;
                    }
                    out.push(0x0B);
                    cursor.bump();
                }
                b'x' => {
                    if mode.strict_lexing() {
                        return None;
                    }
                    cursor.bump();
                    let high = hex_digit(cursor.peek()?)?;
                    cursor.bump();
                    let low = hex_digit(cursor.peek()?)?;
                    cursor.bump();
                    out.push(high * 16 + low);
                }
                b'u' => {
                    cursor.bump();
                    let escaped = unicode_escape(cursor)?;
                    if (SUR_HIGH_START..=SUR_HIGH_END).contains(&escaped) {
                        if lead.is_some() {
                            push_utf8(&mut out, REPLACEMENT);
                        }
                        lead = Some(escaped);
                    } else if (SUR_LOW_START..=SUR_LOW_END).contains(&escaped) {
                        match lead.take() {
                            None => push_utf8(&mut out, REPLACEMENT),
                            Some(high) => {
                                let combined = (high - SUR_HIGH_START) * 0x400
                                    + (escaped - SUR_LOW_START)
                                    + 0x10000;
                                if is_noncharacter(high)
                                    || is_noncharacter(escaped)
                                    || is_noncharacter(combined)
                                {
                                    push_utf8(&mut out, REPLACEMENT);
                                    push_utf8(&mut out, REPLACEMENT);
                                } else {
                                    push_utf8(&mut out, combined);
                                }
                            }
                        }
                    } else {
                        if lead.take().is_some() {
                            push_utf8(&mut out, REPLACEMENT);
                        }
                        push_utf8(&mut out, escaped);
                    }
                }
                b'"' | b'\\' | b'/' => {
                    out.push(escape);
                    cursor.bump();
                }
                _ => {
                    if mode.strict_lexing() {
                        return None;
                    }
                    out.push(escape);
                    cursor.bump();
                }
            }
            continue;
        }

        if lead.take().is_some() {
            push_utf8(&mut out, REPLACEMENT);
        }

        // bulk-copy up to the next quote or backslash
        let rest = cursor.rest();
        let stop = memchr2(quote, b'\\', rest).unwrap_or(rest.len());
        let span = &rest[..stop];
        if mode.strict_lexing() && span.iter().any(|&byte| byte < 0x20) {
            return None;
        }
        out.extend_from_slice(span);
        cursor.advance(stop);
    }

    if lead.is_some() {
        push_utf8(&mut out, REPLACEMENT);
    }

    if mode.strict_lexing() && !closed {
        return None;
    }
    Some(out)
}

/// `\uXXXX`, or `\u{…}` with any number of hex digits. The brace form is
/// accepted in every mode; an unclosed brace at end of input yields what
/// accumulated so far.
fn unicode_escape(cursor: &mut Cursor) -> Option<u32> {
    match cursor.peek()? {
        b'{' => {
            cursor.bump();
            let mut value: u32 = 0;
            loop {
                match cursor.peek() {
                    None => break,
                    Some(b'}') => {
                        cursor.bump();
                        break;
                    }
                    Some(byte) => {
                        let digit = u32::from(hex_digit(byte)?);
                        value = value.checked_mul(16)?.checked_add(digit)?;
                        cursor.bump();
                    }
                }
            }
            Some(value)
        }
        _ => {
            let mut value: u32 = 0;
            for _ in 0..4 {
                let digit = u32::from(hex_digit(cursor.peek()?)?);
                value = value * 16 + digit;
                cursor.bump();
            }
            Some(value)
        }
    }
}

/// UTF-8 encodes a code point; surrogates and values past U+10FFFF come
/// out as U+FFFD.
fn push_utf8(out: &mut Vec<u8>, code_point: u32) {
    let ch = char::from_u32(code_point).unwrap_or('\u{FFFD}');
    let mut buf = [0u8; 4];
    out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
}

/// U+FDD0–U+FDEF plus every code point ending in FFFE or FFFF.
fn is_noncharacter(code_point: u32) -> bool {
    if (0xFDD0..=0xFDEF).contains(&code_point) {
        return true;
    }
    matches!(code_point & 0xFFFF, 0xFFFE | 0xFFFF) && code_point <= 0x10_FFFF
}
