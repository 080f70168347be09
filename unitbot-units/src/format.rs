//! Significant-figure number formatting
//!
//! Renders like C's `%g`: fixed notation for moderate exponents, scientific
//! with a two-digit exponent otherwise, trailing zeros removed.

/// Format `value` with `sigfigs` significant digits
pub fn format_general(value: f64, sigfigs: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sigfigs = sigfigs.max(1);

    // Scientific rendering gives the exponent after rounding
    let sci = format!("{:.*e}", sigfigs - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= sigfigs as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (sigfigs as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Strip trailing zeros (and a dangling point) from a decimal string
fn trim_fraction(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}
