/// Parse free-form credit-hour text into a number of credits.
///
/// Leading whitespace is skipped and the longest leading decimal number is
/// read, so `"3.5 hrs"` gives `3.5`. Returns `None` when no number leads the
/// text, or when the number is negative or not finite.
pub fn parse_credit_hours(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let len = leading_number_len(trimmed);
    if len == 0 {
        return None;
    }

    let value: f64 = trimmed[..len].parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        // -0 parses fine but should read as plain zero
        Some(value.abs())
    } else {
        None
    }
}

/// Length in bytes of the decimal number at the start of `text`, or 0.
///
/// Grammar: `[+-]? (digits ('.' digits?)? | '.' digits) ([eE] [+-]? digits)?`
fn leading_number_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows it
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}
