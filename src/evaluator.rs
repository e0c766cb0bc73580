//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::assessment::{PasswordAssessment, PasswordScore};
use crate::blacklist::Blacklist;
use crate::breach::{BreachSource, SimulatedBreaches};
use crate::sections::{PasswordTraits, SECTIONS};

/// The password was empty or only whitespace.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Please enter a password to analyze")]
pub struct EmptyPasswordError;

/// Evaluates passwords against a blacklist and a breach source.
#[derive(Debug, Clone)]
pub struct PasswordEvaluator<B> {
    blacklist: Blacklist,
    breaches: B,
}

impl PasswordEvaluator<SimulatedBreaches> {
    /// Built-in blacklist and a breach simulation seeded from `random_seed`,
    /// or from entropy when `None`.
    pub fn simulated(random_seed: Option<u64>) -> Self {
        let breaches = match random_seed {
            Some(seed) => SimulatedBreaches::from_seed(seed),
            None => SimulatedBreaches::from_entropy(),
        };
        Self::new(Blacklist::builtin(), breaches)
    }
}

impl<B: BreachSource> PasswordEvaluator<B> {
    pub fn new(blacklist: Blacklist, breaches: B) -> Self {
        Self { blacklist, breaches }
    }

    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    /// Scores `password` and checks it against the breach source.
    ///
    /// The password is evaluated as given; trimming only decides emptiness.
    ///
    /// # Errors
    /// [`EmptyPasswordError`] if the password is empty or whitespace-only.
    pub fn evaluate(
        &mut self,
        password: &SecretString,
    ) -> Result<PasswordAssessment, EmptyPasswordError> {
        let pwd = password.expose_secret();
        if pwd.trim().is_empty() {
            return Err(EmptyPasswordError);
        }

        let traits = PasswordTraits::inspect(pwd, &self.blacklist);

        let mut bonus = 0u32;
        let mut penalty = 0u32;
        let mut issues = Vec::new();
        let mut suggestions = Vec::new();

        // Orchestrator: execute sections in sequence
        for section_fn in SECTIONS {
            let report = section_fn(&traits);
            bonus += report.bonus;
            penalty += report.penalty;
            issues.extend(report.issues);
            suggestions.extend(report.suggestions);
        }

        let score = PasswordScore::new(i64::from(bonus) - i64::from(penalty));
        let breach_details = self.breaches.check(password);

        let assessment = PasswordAssessment::new(pwd, score, issues, suggestions, breach_details);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            score = assessment.score().value(),
            strength = %assessment.strength(),
            issues = assessment.issues().len(),
            breached = assessment.breached(),
            "password evaluated"
        );

        Ok(assessment)
    }
}

/// Evaluates `password` with the built-in blacklist and the breach simulation.
///
/// With the same `random_seed` the result is always the same.
///
/// # Errors
/// [`EmptyPasswordError`] if the password is empty or whitespace-only.
pub fn evaluate_password(
    password: &SecretString,
    random_seed: Option<u64>,
) -> Result<PasswordAssessment, EmptyPasswordError> {
    PasswordEvaluator::simulated(random_seed).evaluate(password)
}

/// Async version that sends the result via channel.
///
/// Waits briefly first so callers can cancel while input is still changing;
/// nothing is sent once `token` is cancelled.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    random_seed: Option<u64>,
    token: CancellationToken,
    tx: mpsc::Sender<Result<PasswordAssessment, EmptyPasswordError>>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled");
            return;
        }
        _ = tokio::time::sleep(Duration::from_millis(300)) => {}
    }

    let result = evaluate_password(password, random_seed);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        evaluate_password_tx(&secret("TestPass123!"), Some(5), token, tx).await;

        let result = rx.recv().await.expect("Should receive evaluation");
        let expected = evaluate_password(&secret("TestPass123!"), Some(5));
        assert_eq!(result, expected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_tx_empty() {
        let (tx, mut rx) = mpsc::channel(1);

        evaluate_password_tx(&secret(""), None, CancellationToken::new(), tx).await;

        assert_eq!(rx.recv().await, Some(Err(EmptyPasswordError)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_with_cancellation() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        evaluate_password_tx(&secret("SomePassword123!"), None, token, tx).await;

        // sender dropped without sending
        assert!(rx.recv().await.is_none());
    }
}
