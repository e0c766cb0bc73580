//! Password evaluation sections
//!
//! Each section scores one aspect of the password and reports the issues and
//! suggestions that go with it.

mod blacklist;
mod length;
mod variety;

pub use blacklist::blacklist_section;
pub use length::length_section;
pub use variety::character_variety_section;

use crate::assessment::Issue;
use crate::blacklist::Blacklist;

/// Properties of a password every section reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordTraits {
    /// Length in UTF-16 code units, so characters outside the BMP count twice.
    pub length: usize,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    /// Any character outside `[a-zA-Z0-9]`.
    pub has_special: bool,
    pub is_common: bool,
}

impl PasswordTraits {
    pub fn inspect(password: &str, blacklist: &Blacklist) -> Self {
        Self {
            length: password.encode_utf16().count(),
            has_lower: password.chars().any(|c| c.is_ascii_lowercase()),
            has_upper: password.chars().any(|c| c.is_ascii_uppercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_special: password.chars().any(|c| !c.is_ascii_alphanumeric()),
            is_common: blacklist.contains(password),
        }
    }

    pub fn has_case_mix(&self) -> bool {
        self.has_lower && self.has_upper
    }
}

/// What a section contributes to an assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionReport {
    pub bonus: u32,
    pub penalty: u32,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<String>,
}

pub type Section = fn(&PasswordTraits) -> SectionReport;

/// Sections in the order their issues and suggestions are reported.
pub const SECTIONS: [Section; 3] = [length_section, character_variety_section, blacklist_section];
