use crate::error::Error;

/// Links walked per chain when no other limit is configured.
pub const DEFAULT_MAX_CHAIN_DEPTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ClassifyOptions {
    /// Maximum number of cause-chain links inspected; deeper links are treated as absent.
    pub max_chain_depth: usize,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            max_chain_depth: DEFAULT_MAX_CHAIN_DEPTH,
        }
    }
}

impl ClassifyOptions {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.max_chain_depth == 0 {
            return Err(Error::Config {
                reason: "max_chain_depth must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(ClassifyOptions::from_json("{}").unwrap(), ClassifyOptions::default());
    }

    #[test]
    fn explicit_depth_is_kept() {
        let options = ClassifyOptions::from_json(r#"{"max_chain_depth": 4}"#).unwrap();
        assert_eq!(options.max_chain_depth, 4);
    }

    #[test]
    fn zero_depth_is_rejected() {
        let err = ClassifyOptions::from_json(r#"{"max_chain_depth": 0}"#).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert_eq!(err.to_string(), "config error: max_chain_depth must be at least 1");
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(ClassifyOptions::from_json("max_chain_depth=3"), Err(Error::Json(_))));
    }
}
