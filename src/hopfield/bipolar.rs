//! Bipolar encoding
//!
//! Boolean presence/absence patterns become ±1 reals at the boundary of the
//! network: `true -> +1.0`, `false -> -1.0`.

/// Encode a single boolean as a bipolar value
pub fn bool_to_bipolar(value: bool) -> f64 {
    if value {
        1.0
    } else {
        -1.0
    }
}

/// Encode a boolean pattern as bipolar values, preserving order and length
pub fn to_bipolar(pattern: &[bool]) -> Vec<f64> {
    pattern.iter().map(|&b| bool_to_bipolar(b)).collect()
}

/// Sign decision: strictly positive is `true`, zero and below are `false`
pub fn bipolar_to_bool(value: f64) -> bool {
    value > 0.0
}
