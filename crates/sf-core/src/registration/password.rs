//! Password strength assessment.
//!
//! Five independent complexity checks and a score equal to the number of
//! checks that pass. The evaluator is pure: no errors, no side effects.

use serde::Serialize;

/// Minimum number of characters for the length requirement.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Characters accepted by the special-character requirement.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Highest possible strength score.
pub const MAX_STRENGTH_SCORE: u8 = 5;

/// One password complexity requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    Length,
    Uppercase,
    Lowercase,
    Number,
    Special,
}

impl Requirement {
    /// All requirements in checklist order.
    pub const ALL: [Requirement; 5] = [
        Requirement::Length,
        Requirement::Uppercase,
        Requirement::Lowercase,
        Requirement::Number,
        Requirement::Special,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Requirement::Length => "8+ characters",
            Requirement::Uppercase => "Uppercase letter",
            Requirement::Lowercase => "Lowercase letter",
            Requirement::Number => "Number",
            Requirement::Special => "Special character",
        }
    }
}

/// Result of each requirement check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PasswordRequirements {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special: bool,
}

impl PasswordRequirements {
    pub fn evaluate(password: &str) -> Self {
        Self {
            length: password.chars().count() >= MIN_PASSWORD_LEN,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        }
    }

    pub fn is_met(&self, requirement: Requirement) -> bool {
        match requirement {
            Requirement::Length => self.length,
            Requirement::Uppercase => self.uppercase,
            Requirement::Lowercase => self.lowercase,
            Requirement::Number => self.number,
            Requirement::Special => self.special,
        }
    }

    pub fn satisfied_count(&self) -> u8 {
        Requirement::ALL
            .iter()
            .filter(|requirement| self.is_met(**requirement))
            .count() as u8
    }

    /// Requirement/met pairs in checklist order.
    pub fn checklist(&self) -> impl Iterator<Item = (Requirement, bool)> + '_ {
        Requirement::ALL
            .into_iter()
            .map(move |requirement| (requirement, self.is_met(requirement)))
    }
}

/// Requirements plus the derived score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordAssessment {
    pub requirements: PasswordRequirements,
    pub score: u8,
}

impl PasswordAssessment {
    pub fn assess(password: &str) -> Self {
        let requirements = PasswordRequirements::evaluate(password);
        Self {
            requirements,
            score: requirements.satisfied_count(),
        }
    }

    pub fn level(&self) -> StrengthLevel {
        StrengthLevel::from_score(self.score)
    }

    /// Fraction of the strength bar to fill, in `0.0..=1.0`.
    pub fn fill_ratio(&self) -> f32 {
        f32::from(self.score) / f32::from(MAX_STRENGTH_SCORE)
    }
}

/// Four-bucket label shown next to the strength bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
}

/// Visual weight associated with a [`StrengthLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthColor {
    Red,
    Yellow,
    Blue,
    Green,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLevel::Weak,
            3 => StrengthLevel::Fair,
            4 => StrengthLevel::Good,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
        }
    }

    pub fn color(self) -> StrengthColor {
        match self {
            StrengthLevel::Weak => StrengthColor::Red,
            StrengthLevel::Fair => StrengthColor::Yellow,
            StrengthLevel::Good => StrengthColor::Blue,
            StrengthLevel::Strong => StrengthColor::Green,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_password_meets_every_requirement() {
        let assessment = PasswordAssessment::assess("Abcdef1!");
        assert_eq!(assessment.score, 5);
        assert_eq!(assessment.level(), StrengthLevel::Strong);
        assert_eq!(assessment.level().color(), StrengthColor::Green);
        assert!((assessment.fill_ratio() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn short_password_never_meets_length() {
        for password in ["Ab1!", "Abcde1!", "!!!!!!!", "AAAAAAA"] {
            let requirements = PasswordRequirements::evaluate(password);
            assert!(!requirements.length, "{password:?} should be too short");
        }
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 7 characters, 14 bytes
        let requirements = PasswordRequirements::evaluate("ééééééé");
        assert!(!requirements.length);
        assert!(PasswordRequirements::evaluate("éééééééé").length);
    }

    #[test]
    fn score_matches_satisfied_predicates() {
        let cases = [
            ("", 0),
            ("abc", 1),
            ("abcdefgh", 2),
            ("Abcdefgh", 3),
            ("Abcdefg1", 4),
            ("abc1!", 3),
            ("ABC{}", 2),
            ("12345678", 2),
        ];
        for (password, expected) in cases {
            let assessment = PasswordAssessment::assess(password);
            let counted = assessment
                .requirements
                .checklist()
                .filter(|(_, met)| *met)
                .count() as u8;
            assert_eq!(assessment.score, expected, "score for {password:?}");
            assert_eq!(assessment.score, counted);
            assert!(assessment.score <= MAX_STRENGTH_SCORE);
        }
    }

    #[test]
    fn non_ascii_letters_do_not_count_as_cases() {
        let requirements = PasswordRequirements::evaluate("ÄÖÜäöüß");
        assert!(!requirements.uppercase);
        assert!(!requirements.lowercase);
    }

    #[test]
    fn special_set_is_fixed() {
        assert!(PasswordRequirements::evaluate("\"").special);
        assert!(PasswordRequirements::evaluate("|").special);
        assert!(!PasswordRequirements::evaluate("-").special);
        assert!(!PasswordRequirements::evaluate("_").special);
        assert!(!PasswordRequirements::evaluate(" ").special);
    }

    #[test]
    fn level_buckets() {
        assert_eq!(StrengthLevel::from_score(0), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(2), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(3), StrengthLevel::Fair);
        assert_eq!(StrengthLevel::from_score(4), StrengthLevel::Good);
        assert_eq!(StrengthLevel::from_score(5).label(), "Strong");
    }

    #[test]
    fn checklist_order_and_labels() {
        let labels: Vec<_> = PasswordRequirements::default()
            .checklist()
            .map(|(requirement, _)| requirement.label())
            .collect();
        assert_eq!(
            labels,
            [
                "8+ characters",
                "Uppercase letter",
                "Lowercase letter",
                "Number",
                "Special character"
            ]
        );
    }
}
