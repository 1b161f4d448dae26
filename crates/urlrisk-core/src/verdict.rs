//! Score → verdict classification.

use serde::{Deserialize, Serialize};

/// Risk tier. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Verdict {
    Safe,
    Suspicious,
    Danger,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Verdict::Safe => "Safe",
            Verdict::Suspicious => "Suspicious",
            Verdict::Danger => "Danger",
        };
        f.write_str(s)
    }
}

/// Lower bounds (inclusive) of the two non-safe tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub suspicious: u32,
    pub danger: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            suspicious: 3,
            danger: 6,
        }
    }
}

impl Thresholds {
    pub fn classify(&self, score: u32) -> Verdict {
        if score >= self.danger {
            Verdict::Danger
        } else if score >= self.suspicious {
            Verdict::Suspicious
        } else {
            Verdict::Safe
        }
    }
}

/// Classifies with the default thresholds (3 and 6).
pub fn classify(score: u32) -> Verdict {
    Thresholds::default().classify(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(classify(0), Verdict::Safe);
        assert_eq!(classify(2), Verdict::Safe);
        assert_eq!(classify(3), Verdict::Suspicious);
        assert_eq!(classify(5), Verdict::Suspicious);
        assert_eq!(classify(6), Verdict::Danger);
        assert_eq!(classify(u32::MAX), Verdict::Danger);
    }

    #[test]
    fn monotonic() {
        let mut prev = classify(0);
        for score in 1..=64 {
            let cur = classify(score);
            assert!(cur >= prev, "classify({score}) = {cur} < {prev}");
            prev = cur;
        }
    }

    #[test]
    fn custom_thresholds() {
        let t = Thresholds {
            suspicious: 1,
            danger: 10,
        };
        assert_eq!(t.classify(0), Verdict::Safe);
        assert_eq!(t.classify(1), Verdict::Suspicious);
        assert_eq!(t.classify(9), Verdict::Suspicious);
        assert_eq!(t.classify(10), Verdict::Danger);
    }

    #[test]
    fn verdict_serializes_as_tier_name() {
        assert_eq!(serde_json::to_string(&Verdict::Suspicious).unwrap(), "\"Suspicious\"");
    }
}
