//! Ordered fallback composition.
//!
//! Tries each policy in turn and returns the first move any of them finds.
//! A missing entry counts as a failed branch. When every branch fails the
//! mover has to pass.

use tracing::debug;

use super::{ensure_turn, Strategy, StrategyError};
use crate::board::{Move, Occupancy, ReadOnlyBoard};

#[derive(Default)]
pub struct Fallback {
    chain: Vec<Option<Box<dyn Strategy>>>,
}

impl Fallback {
    pub fn new(chain: Vec<Box<dyn Strategy>>) -> Self {
        Fallback {
            chain: chain.into_iter().map(Some).collect(),
        }
    }

    /// The two-policy form: `first`, then `second`.
    pub fn try_two(first: Option<Box<dyn Strategy>>, second: Option<Box<dyn Strategy>>) -> Self {
        Fallback {
            chain: vec![first, second],
        }
    }

    /// Appends another policy to the end of the chain.
    pub fn then(mut self, next: impl Strategy + 'static) -> Self {
        self.chain.push(Some(Box::new(next)));
        self
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

impl Strategy for Fallback {
    fn choose_move(
        &self,
        board: &dyn ReadOnlyBoard,
        player: Occupancy,
    ) -> Result<Move, StrategyError> {
        ensure_turn(board, player)?;
        for (i, entry) in self.chain.iter().enumerate() {
            let Some(strategy) = entry else {
                debug!(branch = i, "missing strategy, skipping");
                continue;
            };
            match strategy.choose_move(board, player) {
                Ok(mv) => return Ok(mv),
                Err(e) => debug!(branch = i, strategy = %strategy.name(), error = %e, "branch failed"),
            }
        }
        Err(StrategyError::Exhausted { player })
    }

    fn name(&self) -> String {
        let names: Vec<String> = self
            .chain
            .iter()
            .map(|s| s.as_ref().map_or_else(|| "none".to_string(), |s| s.name()))
            .collect();
        format!("try({})", names.join(", "))
    }
}
