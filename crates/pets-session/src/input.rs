//! Edit-boundary validation and parsing.
//!
//! Age fields accept only digit strings; weight and vital fields accept
//! decimal strings with at most one point. An edit that fails the check
//! is rejected silently — the prior value stays. Empty means "not
//! entered", never an error.

/// Whether `value` is an acceptable age-field edit (empty or all digits).
pub fn is_integer_edit(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}

/// Whether `value` is an acceptable weight/vital edit (empty, or digits
/// with at most one decimal point — partial entries like `"37."` or
/// `"."` are valid mid-edit states).
pub fn is_decimal_edit(value: &str) -> bool {
    let mut seen_point = false;
    value.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_point => {
            seen_point = true;
            true
        }
        _ => false,
    })
}

/// Parse an age part; blank or unparseable entries count as 0, matching
/// the standard's entry form.
pub fn parse_age_part(value: &str) -> u32 {
    value.parse().unwrap_or(0)
}

/// Parse a weight/vital entry. Blank and the bare-point mid-edit state
/// parse to `None` (signal excluded).
pub fn parse_reading(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}
