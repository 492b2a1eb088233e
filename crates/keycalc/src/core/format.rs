//! Result formatting for the display
//!
//! Non-integer results are shortened with a deliberately simple rule: the
//! fractional digits stop at the first `0`, are capped at a fixed count, and a
//! cut made by the cap bumps the last kept digit when the next digit is 5 or
//! more. The bump never carries into earlier digits; a kept `9` stays `9`.

/// Returns the full-precision text of a number, as used to re-seed input.
///
/// Negative zero renders as `"0"`.
#[must_use]
pub fn number_text(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Formats a finite result for display
#[must_use]
pub fn format_result(value: f64, fraction_digits: usize) -> String {
    if value.fract() == 0.0 {
        number_text(value)
    } else {
        format_decimal(value, fraction_digits)
    }
}

/// Formats a non-integer with the truncating look-ahead rule
#[must_use]
pub fn format_decimal(value: f64, fraction_digits: usize) -> String {
    let text = number_text(value);
    let Some((whole, frac)) = text.split_once('.') else {
        return text;
    };

    let digits: Vec<u8> = frac.bytes().collect();
    let mut kept: Vec<u8> = Vec::new();
    let mut hit_zero = false;
    for &d in digits.iter().take(fraction_digits) {
        if d == b'0' {
            hit_zero = true;
            break;
        }
        kept.push(d);
    }

    if !hit_zero && kept.len() == fraction_digits {
        if let (Some(&next), Some(last)) = (digits.get(fraction_digits), kept.last_mut()) {
            if next > b'4' && *last < b'9' {
                *last += 1;
            }
        }
    }

    if kept.is_empty() {
        // A fraction cut to nothing leaves the sign on a zero whole part
        return if whole == "-0" { "0".to_string() } else { whole.to_string() };
    }
    format!("{whole}.{}", String::from_utf8_lossy(&kept))
}
