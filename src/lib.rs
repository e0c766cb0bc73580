//! Password strength assessment library
//!
//! Scores a password, explains its weaknesses, suggests improvements and
//! reports whether it appears in a (simulated) breach corpus.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Extra common passwords, one per line, read by
//!   [`Blacklist::from_env`]
//!
//! # Example
//!
//! ```rust
//! use pwd_assess::{evaluate_password, Strength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Tr0ub4dor&3xtra!2024".to_string().into());
//! let assessment = evaluate_password(&password, Some(7)).expect("not empty");
//!
//! assert_eq!(assessment.strength(), Strength::VeryStrong);
//! println!("Score: {}", assessment.score());
//! println!("Crack time: {}", assessment.estimated_crack_time());
//! ```

// Internal modules
mod assessment;
mod blacklist;
mod breach;
mod evaluator;
mod sections;

// Public API
pub use assessment::{
    BreachDetails, CrackTime, Issue, IssueKind, PasswordAssessment, PasswordScore, Severity,
    Strength,
};
pub use blacklist::{get_blacklist_path, Blacklist, BlacklistError, BLACKLIST_PATH_ENV, COMMON_PASSWORDS};
pub use breach::{BreachSource, SimulatedBreaches, BREACH_SENTINEL, DEFAULT_BREACH_PROBABILITY};
pub use evaluator::{evaluate_password, EmptyPasswordError, PasswordEvaluator};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_tx;
