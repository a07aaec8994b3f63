//! Known climbers and recognition of climber mentions

use serde::{Deserialize, Serialize};

/// A climber identified by a short code (usually initials)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Climber {
    pub code: String,
    /// Accepted spellings besides the code itself
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
}

impl Climber {
    pub fn new(code: impl Into<String>) -> Self {
        Climber {
            code: code.into(),
            variants: Vec::new(),
        }
    }

    pub fn with_variants(mut self, variants: &[&str]) -> Self {
        self.variants = variants.iter().map(|v| v.to_string()).collect();
        self
    }

    fn matches(&self, word: &str) -> bool {
        self.code.eq_ignore_ascii_case(word)
            || self.variants.iter().any(|v| v.eq_ignore_ascii_case(word))
    }
}

/// The fixed set of climbers that appear in the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimberRegistry {
    climbers: Vec<Climber>,
}

impl Default for ClimberRegistry {
    fn default() -> Self {
        ClimberRegistry::new(vec![Climber::new("TA"), Climber::new("AS")])
    }
}

impl ClimberRegistry {
    pub fn new(climbers: Vec<Climber>) -> Self {
        ClimberRegistry { climbers }
    }

    /// Codes in registry order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.climbers.iter().map(|c| c.code.as_str())
    }

    /// Recognize a token as a climber, ignoring case and surrounding punctuation.
    pub fn recognize(&self, token: &str) -> Option<&str> {
        let word = token.trim_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() {
            return None;
        }
        self.climbers
            .iter()
            .find(|c| c.matches(word))
            .map(|c| c.code.as_str())
    }

    /// Default roster for a day: the climbers named in the place-and-climbers
    /// header (e.g. "Rumney TA AS w/ Art"), in registry order.
    pub fn roster_from_header(&self, header: &str) -> Vec<String> {
        let mentioned: Vec<&str> = header
            .split(|c: char| !c.is_alphanumeric())
            .filter_map(|word| self.recognize(word))
            .collect();

        self.codes()
            .filter(|code| mentioned.contains(code))
            .map(str::to_string)
            .collect()
    }
}
