//! Blacklist section - checks if password is in common password list.

use super::{PasswordTraits, SectionReport};
use crate::assessment::{Issue, IssueKind, Severity};

const COMMON_PENALTY: u32 = 50;

/// Penalises passwords found in the blacklist.
pub fn blacklist_section(traits: &PasswordTraits) -> SectionReport {
    if !traits.is_common {
        return SectionReport::default();
    }

    SectionReport {
        bonus: 0,
        penalty: COMMON_PENALTY,
        issues: vec![Issue::new(
            IssueKind::CommonPassword,
            "This is a commonly used password",
            Severity::High,
        )],
        suggestions: vec!["Avoid common words and patterns".to_string()],
    }
}
