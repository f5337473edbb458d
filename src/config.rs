use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_USER_TYPES: &[&str] = &["Subscriber", "Customer"];
pub const DEFAULT_GENDERS: &[&str] = &["Male", "Female"];

/// Allowed category values for the user columns.
///
/// Optionally stored as a JSON object on disk; omitted keys keep their
/// defaults:
/// ```json
/// {
///   "user_types": ["Subscriber", "Customer", "Dependent"],
///   "genders": ["Male", "Female"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub user_types: Vec<String>,
    pub genders: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            user_types: DEFAULT_USER_TYPES.iter().map(|s| s.to_string()).collect(),
            genders: DEFAULT_GENDERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Vocabulary {
    /// Loads the vocabulary from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
        Self::from_json(&content).with_context(|| format!("parsing {}", path))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.user_types, vec!["Subscriber", "Customer"]);
        assert_eq!(vocab.genders, vec!["Male", "Female"]);
    }

    #[test]
    fn test_from_json_partial_keeps_defaults() {
        let vocab = Vocabulary::from_json(r#"{"user_types": ["Dependent"]}"#).unwrap();
        assert_eq!(vocab.user_types, vec!["Dependent"]);
        assert_eq!(vocab.genders, vec!["Male", "Female"]);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(Vocabulary::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(Vocabulary::load("/nonexistent/bikeshare_vocabulary.json").is_err());
    }
}
