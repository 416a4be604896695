//! The ordinal ecological grade and its per-grade display copy.
//!
//! Every grade-keyed table in Greencheck is an exhaustive `match` on [`Grade`],
//! so adding or removing a grade is a compile error rather than a silent
//! missing-key fallthrough.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Grade
// ---------------------------------------------------------------------------

/// Ecological impact (or quiz performance) grade.
///
/// Ordered best to worst: `A < B < C < D < E`.
///
/// ```text
/// A (best) ─ B ─ C ─ D ─ E (worst)
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    /// All grades, best first.
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::D, Self::E];

    /// Grade used whenever an upstream code is missing or unrecognized.
    pub const FALLBACK: Self = Self::C;

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }

    /// Short verdict shown next to the grade badge.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "Très bon",
            Self::B => "Bon",
            Self::C => "Moyen",
            Self::D => "Mauvais",
            Self::E => "Très mauvais",
        }
    }

    /// One-sentence description of what the grade means for a website.
    ///
    /// Used on the result view when the analysis service sent no message.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::A => "Votre site a un très faible impact environnemental. Excellent travail !",
            Self::B => "Votre site est bien optimisé, mais quelques améliorations sont possibles.",
            Self::C => "Votre site a un impact moyen. Plusieurs optimisations sont recommandées.",
            Self::D => "Votre site est lourd et a un impact élevé sur l'environnement.",
            Self::E => "Votre site a un impact très fort. Une optimisation urgente est nécessaire.",
        }
    }

    /// Terminal colour for the grade badge.
    #[must_use]
    pub const fn style(self) -> GradeStyle {
        match self {
            Self::A => GradeStyle::Green,
            Self::B => GradeStyle::Blue,
            Self::C => GradeStyle::Yellow,
            Self::D => GradeStyle::Orange,
            Self::E => GradeStyle::Red,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parser: accepts `A`..`E` (case-insensitive, surrounding whitespace
/// ignored) and rejects everything else.
impl FromStr for Grade {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            _ => Err(CoreError::InvalidGrade(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// GradeStyle
// ---------------------------------------------------------------------------

/// Badge colour associated with a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GradeStyle {
    Green,
    Blue,
    Yellow,
    Orange,
    Red,
}

impl GradeStyle {
    /// ANSI SGR foreground code (256-colour for orange).
    #[must_use]
    pub const fn ansi_code(self) -> &'static str {
        match self {
            Self::Green => "32",
            Self::Blue => "34",
            Self::Yellow => "33",
            Self::Orange => "38;5;208",
            Self::Red => "31",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grades_are_ordered_best_to_worst() {
        assert!(Grade::A < Grade::B);
        assert!(Grade::B < Grade::C);
        assert!(Grade::C < Grade::D);
        assert!(Grade::D < Grade::E);
        let mut shuffled = vec![Grade::D, Grade::A, Grade::E, Grade::C, Grade::B];
        shuffled.sort();
        assert_eq!(shuffled, Grade::ALL.to_vec());
    }

    #[test]
    fn serde_uses_bare_letter() {
        let json = serde_json::to_string(&Grade::D).unwrap();
        assert_eq!(json, "\"D\"");
        let recovered: Grade = serde_json::from_str("\"B\"").unwrap();
        assert_eq!(recovered, Grade::B);
    }

    #[test]
    fn serde_rejects_unknown_letter() {
        assert!(serde_json::from_str::<Grade>("\"Z\"").is_err());
    }

    #[test]
    fn strict_parse_is_case_insensitive_and_trims() {
        assert_eq!(" b ".parse::<Grade>(), Ok(Grade::B));
        assert_eq!("e".parse::<Grade>(), Ok(Grade::E));
    }

    #[test]
    fn strict_parse_rejects_garbage() {
        assert_eq!(
            "Z".parse::<Grade>(),
            Err(CoreError::InvalidGrade("Z".to_string()))
        );
        assert!("".parse::<Grade>().is_err());
        assert!("AB".parse::<Grade>().is_err());
    }

    #[test]
    fn display_matches_as_str() {
        for grade in Grade::ALL {
            assert_eq!(grade.to_string(), grade.as_str());
        }
    }

    #[test]
    fn every_grade_has_distinct_style() {
        let styles: std::collections::HashSet<_> = Grade::ALL.iter().map(|g| g.style()).collect();
        assert_eq!(styles.len(), Grade::ALL.len());
    }

    #[test]
    fn fallback_is_c() {
        assert_eq!(Grade::FALLBACK, Grade::C);
    }
}
