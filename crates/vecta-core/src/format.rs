//! Presentation settings and component rendering.
//!
//! Formatting never feeds back into equality or hashing: a truncated
//! preview is only a view of the full component sequence.

/// Controls the `Debug` preview of a vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReprConfig {
    /// Components shown before the preview is cut with `...`.
    pub max_components: usize,
}

impl Default for ReprConfig {
    fn default() -> Self {
        Self { max_components: 5 }
    }
}

impl ReprConfig {
    /// A config that shows at most `max_components` components.
    #[must_use]
    pub fn with_max_components(max_components: usize) -> Self {
        Self { max_components }
    }
}

/// Renders one component as its shortest round-trip decimal.
///
/// Exponents are signed and at least two digits wide (`1e-07`, `1e+16`),
/// and non-finite values print as `inf`, `-inf` and `nan`.
#[must_use]
pub fn component_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let shortest = format!("{value:?}");
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => shortest,
    }
}
