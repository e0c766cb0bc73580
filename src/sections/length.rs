//! Length section - scores password length and checks the minimum.

use super::{PasswordTraits, SectionReport};
use crate::assessment::{Issue, IssueKind, Severity};

const MIN_LENGTH: usize = 8;
const RECOMMENDED_LENGTH: usize = 12;
const POINTS_PER_CHAR: u32 = 4;
const MAX_LENGTH_BONUS: u32 = 40;
const SHORT_PENALTY: u32 = 10;

/// Length contribution: 4 points per character, capped at 40.
pub(crate) fn length_bonus(length: usize) -> u32 {
    u32::try_from(length)
        .unwrap_or(u32::MAX)
        .saturating_mul(POINTS_PER_CHAR)
        .min(MAX_LENGTH_BONUS)
}

/// Scores length and flags passwords under the minimum.
///
/// The 12 character suggestion is independent of the 8 character issue.
pub fn length_section(traits: &PasswordTraits) -> SectionReport {
    let mut report = SectionReport {
        bonus: length_bonus(traits.length),
        ..SectionReport::default()
    };

    if traits.length < MIN_LENGTH {
        report.penalty += SHORT_PENALTY;
        report.issues.push(Issue::new(
            IssueKind::Length,
            "Password is too short",
            Severity::High,
        ));
    }

    if traits.length < RECOMMENDED_LENGTH {
        report
            .suggestions
            .push(format!("Use at least {} characters", RECOMMENDED_LENGTH));
    }

    report
}
