//! `Display` and `Debug` formatting for [`Vector`].

use core::fmt;

use crate::format::{ReprConfig, component_repr};

use super::Vector;

impl Vector {
    /// The `Debug` form with a custom preview limit.
    ///
    /// `Vector([9.0, 8.0])`, truncated as `Vector([0.0, 1.0, ...])` past the
    /// limit, and `Vector()` when empty.
    #[must_use]
    pub fn repr_with(&self, config: &ReprConfig) -> String {
        if self.is_empty() {
            return "Vector()".to_string();
        }
        let mut pieces: Vec<String> = self
            .iter()
            .take(config.max_components)
            .map(component_repr)
            .collect();
        if self.len() > config.max_components {
            pieces.push("...".to_string());
        }
        format!("Vector([{}])", pieces.join(", "))
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr_with(&ReprConfig::default()))
    }
}

/// Tuple form: `(9.0, 8.0)`, `(9.0,)` for one component, `()` when empty.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", component_repr(v))?;
        }
        if self.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}
