use serde::{Deserialize, Serialize};

/// What to do with a code fence that is still open at end of input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FencePolicy {
    /// Emit the collected lines as a code block.
    #[default]
    Flush,
    /// Discard the fence and everything after it.
    Drop,
}

/// Parser configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub unterminated_fence: FencePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flushes() {
        assert_eq!(ParseOptions::default().unterminated_fence, FencePolicy::Flush);
    }
}
