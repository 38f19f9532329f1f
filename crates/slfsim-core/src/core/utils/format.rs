/// Formats a float as its shortest round-trip decimal representation.
///
/// The output always carries a fractional part (`12.0`, `-12.3`) and switches
/// to scientific notation with a signed, two-digit exponent outside
/// `[1e-4, 1e16)` (`1e-05`, `2.5e+16`), the notation peak lists traditionally use.
pub fn decimal_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let abs = value.abs();
    if abs == 0.0 || (1e-4..1e16).contains(&abs) {
        let mut text = format!("{}", value);
        if !text.contains('.') {
            text.push_str(".0");
        }
        return text;
    }

    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => text,
    }
}

/// Right-justifies `text` in a field of `width` characters.
///
/// Text longer than the field is returned unchanged.
pub fn right_justify(text: &str, width: usize) -> String {
    format!("{:>width$}", text, width = width)
}
