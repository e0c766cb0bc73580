//! Assessment value objects returned by the evaluator.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

/// Upper bounds (exclusive) of the first four score buckets.
const THRESHOLDS: [u8; 4] = [20, 40, 60, 80];

/// Index of the bucket `score` falls into, `0..=4`.
///
/// Both [`Strength`] and [`CrackTime`] go through this function.
fn bucket(score: PasswordScore) -> usize {
    THRESHOLDS
        .iter()
        .position(|&limit| score.value() < limit)
        .unwrap_or(THRESHOLDS.len())
}

/// Password score, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: u8 = 100;

    /// Builds a score, clamping `raw` into `0..=100`.
    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strength category, from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl Strength {
    const ORDERED: [Strength; 5] = [
        Strength::VeryWeak,
        Strength::Weak,
        Strength::Moderate,
        Strength::Strong,
        Strength::VeryStrong,
    ];

    pub fn from_score(score: PasswordScore) -> Self {
        Self::ORDERED[bucket(score)]
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::VeryWeak => "very weak",
            Strength::Weak => "weak",
            Strength::Moderate => "moderate",
            Strength::Strong => "strong",
            Strength::VeryStrong => "very strong",
        };
        f.write_str(label)
    }
}

/// Rough time an attacker needs to guess the password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrackTime {
    Instantly,
    AFewMinutes,
    AFewDays,
    AFewMonths,
    HundredsOfYears,
}

impl CrackTime {
    const ORDERED: [CrackTime; 5] = [
        CrackTime::Instantly,
        CrackTime::AFewMinutes,
        CrackTime::AFewDays,
        CrackTime::AFewMonths,
        CrackTime::HundredsOfYears,
    ];

    pub fn from_score(score: PasswordScore) -> Self {
        Self::ORDERED[bucket(score)]
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CrackTime::Instantly => "instantly",
            CrackTime::AFewMinutes => "a few minutes",
            CrackTime::AFewDays => "a few days",
            CrackTime::AFewMonths => "a few months",
            CrackTime::HundredsOfYears => "hundreds of years",
        };
        f.write_str(label)
    }
}

/// How much an [`Issue`] weakens the password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Which password property an [`Issue`] is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IssueKind {
    Length,
    Case,
    Digits,
    #[serde(rename = "Special Characters")]
    SpecialCharacters,
    #[serde(rename = "Common Password")]
    CommonPassword,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IssueKind::Length => "Length",
            IssueKind::Case => "Case",
            IssueKind::Digits => "Digits",
            IssueKind::SpecialCharacters => "Special Characters",
            IssueKind::CommonPassword => "Common Password",
        };
        f.write_str(label)
    }
}

/// A weakness found in the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub description: String,
    pub severity: Severity,
}

impl Issue {
    pub(crate) fn new(kind: IssueKind, description: &str, severity: Severity) -> Self {
        Self {
            kind,
            description: description.to_string(),
            severity,
        }
    }
}

/// Where and when a breached password was seen.
///
/// Always lists at least one website, and `count` is the number of websites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreachDetails {
    count: usize,
    websites: Vec<String>,
    first_found: String,
    last_found: String,
}

impl BreachDetails {
    /// Builds details from the sites a password was seen on.
    ///
    /// Returns `None` when `websites` is empty.
    pub fn new(websites: Vec<String>, first_found: &str, last_found: &str) -> Option<Self> {
        if websites.is_empty() {
            return None;
        }
        Some(Self {
            count: websites.len(),
            websites,
            first_found: first_found.to_string(),
            last_found: last_found.to_string(),
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn websites(&self) -> &[String] {
        &self.websites
    }

    pub fn first_found(&self) -> &str {
        &self.first_found
    }

    pub fn last_found(&self) -> &str {
        &self.last_found
    }
}

/// Result of evaluating one password.
///
/// `strength` and `estimated_crack_time` are derived from `score` at
/// construction, and `breached` from the presence of breach details.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAssessment {
    #[serde(skip)]
    password: SecretString,
    score: PasswordScore,
    strength: Strength,
    estimated_crack_time: CrackTime,
    issues: Vec<Issue>,
    suggestions: Vec<String>,
    breached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    breach_details: Option<BreachDetails>,
}

impl PasswordAssessment {
    pub(crate) fn new(
        password: &str,
        score: PasswordScore,
        issues: Vec<Issue>,
        suggestions: Vec<String>,
        breach_details: Option<BreachDetails>,
    ) -> Self {
        Self {
            password: SecretString::new(password.to_string().into()),
            score,
            strength: Strength::from_score(score),
            estimated_crack_time: CrackTime::from_score(score),
            issues,
            suggestions,
            breached: breach_details.is_some(),
            breach_details,
        }
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn score(&self) -> PasswordScore {
        self.score
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn estimated_crack_time(&self) -> CrackTime {
        self.estimated_crack_time
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn breached(&self) -> bool {
        self.breached
    }

    pub fn breach_details(&self) -> Option<&BreachDetails> {
        self.breach_details.as_ref()
    }
}

impl Clone for PasswordAssessment {
    fn clone(&self) -> Self {
        Self {
            password: SecretString::new(self.password.expose_secret().into()),
            score: self.score,
            strength: self.strength,
            estimated_crack_time: self.estimated_crack_time,
            issues: self.issues.clone(),
            suggestions: self.suggestions.clone(),
            breached: self.breached,
            breach_details: self.breach_details.clone(),
        }
    }
}

impl PartialEq for PasswordAssessment {
    fn eq(&self, other: &Self) -> bool {
        self.password.expose_secret() == other.password.expose_secret()
            && self.score == other.score
            && self.strength == other.strength
            && self.estimated_crack_time == other.estimated_crack_time
            && self.issues == other.issues
            && self.suggestions == other.suggestions
            && self.breached == other.breached
            && self.breach_details == other.breach_details
    }
}

impl Eq for PasswordAssessment {}
