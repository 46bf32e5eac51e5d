use crate::options::ReadMode;
use crate::types::Value;

use super::cursor::Cursor;

/// Decimal digit run: exact u64 accumulation with an f64 shadow that takes
/// over once the exact value overflows.
#[derive(Default)]
struct Digits {
    value: u64,
    approx: f64,
    count: u32,
    overflow: bool,
}

/// Reads a digit run. `require_digit` rejects a run that stops at a
/// non-digit byte without having read anything; stopping at end of input
/// is always accepted (possibly with zero digits), as the grammar
/// allows a bare `1.` at the end of the text.
fn read_digits(cursor: &mut Cursor, require_digit: bool) -> Option<Digits> {
    let mut digits = Digits::default();
    loop {
        match cursor.peek() {
            Some(byte) if byte.is_ascii_digit() => {
                let digit = u64::from(byte - b'0');
                cursor.bump();
                digits.count += 1;
                digits.approx = digits.approx * 10.0 + digit as f64;
                if !digits.overflow {
                    match digits.value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                        Some(value) => digits.value = value,
                        None => digits.overflow = true,
                    }
                }
            }
            Some(_) => {
                if digits.count == 0 && require_digit {
                    return None;
                }
                break;
            }
            None => break,
        }
    }
    Some(digits)
}

fn sign_of(negative: bool) -> f64 {
    if negative {
        -1.0
    } else {
        1.0
    }
}

fn finish_int(whole: &Digits, negative: bool) -> Value {
    if !whole.overflow {
        if whole.value <= i64::MAX as u64 {
            let int = whole.value as i64;
            return Value::Int(if negative { -int } else { int });
        }
        if negative && whole.value == i64::MAX as u64 + 1 {
            return Value::Int(i64::MIN);
        }
    }
    Value::Float(whole.approx * sign_of(negative))
}

/// Radix-prefixed integer body (`0x…`, `0o…`, `0b…`, bare octal). At least
/// one digit of the base; stops at the first byte outside the base;
/// overflow past i64 fails the parse.
fn read_radix(cursor: &mut Cursor, base: u32, negative: bool) -> Option<Value> {
    let mut result: i64 = 0;
    let mut read = false;
    while let Some(byte) = cursor.peek() {
        let digit = match hex_digit(byte) {
            Some(digit) if u32::from(digit) < base => i64::from(digit),
            _ => {
                if read {
                    break;
                }
                return None;
            }
        };
        result = result.checked_mul(i64::from(base))?.checked_add(digit)?;
        read = true;
        cursor.bump();
    }
    if !read {
        return None;
    }
    Some(Value::Int(if negative { -result } else { result }))
}

pub(super) fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        _ => None,
    }
}

pub(super) fn read_number(cursor: &mut Cursor, mode: ReadMode) -> Option<Value> {
    let mut negative = false;
    match cursor.peek() {
        Some(b'+') => {
            if mode.strict_lexing() {
                return None;
            }
            cursor.bump();
        }
        Some(b'-') => {
            negative = true;
            cursor.bump();
        }
        _ => {}
    }

    if cursor.at_end() {
        return None;
    }

    if cursor.peek() == Some(b'0') {
        cursor.bump();
        match cursor.peek() {
            None => return Some(Value::Int(0)),
            // re-read the zero as the start of a decimal literal
            Some(b'.') | Some(b'e') | Some(b'E') => cursor.back(),
            Some(byte) if !mode.strict_lexing() => match byte {
                b'b' => {
                    cursor.bump();
                    return read_radix(cursor, 2, negative);
                }
                b'o' => {
                    cursor.bump();
                    return read_radix(cursor, 8, negative);
                }
                b'x' | b'X' => {
                    cursor.bump();
                    return read_radix(cursor, 16, negative);
                }
                b'0'..=b'7' => return read_radix(cursor, 8, negative),
                _ => return Some(Value::Int(0)),
            },
            Some(_) => return Some(Value::Int(0)),
        }
    }

    let whole = read_digits(cursor, mode.strict_lexing())?;

    if cursor
        .peek()
        .map_or(true, |byte| !matches!(byte, b'.' | b'e' | b'E'))
    {
        return Some(finish_int(&whole, negative));
    }

    let mut fraction = Digits::default();
    if cursor.peek() == Some(b'.') {
        cursor.bump();
        let digits = read_digits(cursor, true)?;
        if cursor
            .peek()
            .map_or(true, |byte| !matches!(byte, b'e' | b'E'))
        {
            let div = 10f64.powf(f64::from(digits.count));
            return Some(Value::Float(
                (whole.approx + digits.approx / div) * sign_of(negative),
            ));
        }
        fraction = digits;
    }

    cursor.bump(); // the exponent marker

    let mut exp_negative = false;
    match cursor.peek() {
        Some(b'+') => cursor.bump(),
        Some(b'-') => {
            exp_negative = true;
            cursor.bump();
        }
        _ => {}
    }

    let exponent = read_digits(cursor, true)?;
    if exponent.count == 0 || exponent.overflow {
        return None;
    }

    let int_exp = i64::try_from(exponent.value).ok()? * if exp_negative { -1 } else { 1 };
    let full_exp = int_exp + i64::from(whole.count) - 1;
    if full_exp < i64::from(f64::MIN_10_EXP) || full_exp > i64::from(f64::MAX_10_EXP) {
        return None;
    }

    let pow10 = 10f64.powf(int_exp as f64);
    let div = 10f64.powf(f64::from(fraction.count));
    Some(Value::Float(
        (whole.approx + fraction.approx / div) * pow10 * sign_of(negative),
    ))
}
