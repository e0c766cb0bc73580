//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use super::{PasswordTraits, SectionReport};
use crate::assessment::{Issue, IssueKind, Severity};

const POINTS_PER_CLASS: u32 = 10;
const CASE_MIX_PENALTY: u32 = 10;
const NO_DIGIT_OR_SPECIAL_PENALTY: u32 = 20;

/// Scores the character classes present and reports the missing ones.
pub fn character_variety_section(traits: &PasswordTraits) -> SectionReport {
    let classes = [
        traits.has_lower,
        traits.has_upper,
        traits.has_digit,
        traits.has_special,
    ]
    .iter()
    .filter(|&&present| present)
    .count() as u32;

    let mut report = SectionReport {
        bonus: classes * POINTS_PER_CLASS,
        ..SectionReport::default()
    };

    if !traits.has_case_mix() {
        report.penalty += CASE_MIX_PENALTY;
        report.issues.push(Issue::new(
            IssueKind::Case,
            "Missing uppercase or lowercase letters",
            Severity::Medium,
        ));
        report
            .suggestions
            .push("Mix uppercase and lowercase letters".to_string());
    }

    if !traits.has_digit && !traits.has_special {
        report.penalty += NO_DIGIT_OR_SPECIAL_PENALTY;
    }

    if !traits.has_digit {
        report.issues.push(Issue::new(
            IssueKind::Digits,
            "No numbers in your password",
            Severity::Medium,
        ));
        report.suggestions.push("Add numbers to your password".to_string());
    }

    if !traits.has_special {
        report.issues.push(Issue::new(
            IssueKind::SpecialCharacters,
            "No special characters (e.g., !@#$%)",
            Severity::Medium,
        ));
        report
            .suggestions
            .push("Include special characters like !@#$%^&*".to_string());
    }

    report
}
