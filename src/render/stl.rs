//! Temporal-logic command wrapping.

use std::fmt;

/// A pseudo-temporal-logic command string.
///
/// The mapping is intentionally shallow: generated or request text is
/// wrapped in a globally-operator form. No temporal-logic semantics are
/// interpreted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StlCommand(String);

impl StlCommand {
    /// Wrap text under the globally operator: `G(<text>)`.
    pub fn globally(body: impl Into<String>) -> Self {
        Self(format!("G({})", body.into()))
    }

    /// The command as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_globally_wrap() {
        let cmd = StlCommand::globally("move right for 2 steps");
        assert_eq!(cmd.to_string(), "G(move right for 2 steps)");
        assert_eq!(cmd.as_str(), "G(move right for 2 steps)");
    }
}
