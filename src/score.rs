//! Score and outcome state machine.
//!
//! `InProgress` is the only state that accepts catches; `Won` and `Lost` are
//! terminal until the session builds a fresh `Scoreboard`.

use crate::config::GameConfig;
use crate::entities::{CatchEvent, Expression, Freshness, Outcome};

#[derive(Clone, Debug, PartialEq)]
pub struct Scoreboard {
    pub score: i32,
    pub outcome: Outcome,
}

/// Result of feeding one catch to the scoreboard.
#[derive(Clone, Debug, PartialEq)]
pub struct CatchResult {
    pub delta: i32,
    pub score: i32,
    pub expression: Expression,
    pub message: String,
    pub outcome: Outcome,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard {
    pub fn new() -> Self {
        Self {
            score: 0,
            outcome: Outcome::InProgress,
        }
    }

    /// Start from an arbitrary score, still in progress.
    pub fn with_score(score: i32) -> Self {
        Self {
            score,
            outcome: Outcome::InProgress,
        }
    }

    /// Apply one catch.  Returns `None` once the outcome is terminal.
    pub fn apply_catch(&mut self, event: CatchEvent, config: &GameConfig) -> Option<CatchResult> {
        if self.outcome.is_terminal() {
            return None;
        }

        let (delta, expression, message) = match event.freshness {
            Freshness::Fresh => (
                config.fresh_bonus,
                Expression::Happy,
                format!("Fresh {}! +{}", event.kind.name(), config.fresh_bonus),
            ),
            Freshness::Spoiled => (
                -config.spoiled_penalty,
                Expression::Sad,
                format!("Spoiled {}! -{}", event.kind.name(), config.spoiled_penalty),
            ),
        };
        self.score += delta;

        // Win is checked first.
        if self.score >= config.win_score {
            self.outcome = Outcome::Won;
        } else if self.score <= config.lose_score {
            self.outcome = Outcome::Lost;
        }

        Some(CatchResult {
            delta,
            score: self.score,
            expression,
            message,
            outcome: self.outcome,
        })
    }
}

/// Text shown when the game ends.
pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Won => "Game over! Congratulations, you are the freshness champion!",
        Outcome::Lost => "Game over! Too much spoiled produce, try again.",
        Outcome::InProgress => "",
    }
}
