//! The draw itself, separated from store access.

use trivia_core::config::ExhaustionRule;
use trivia_entity::question::Question;

use super::random::RandomSource;

/// Pick one question from `pool` uniformly at random.
///
/// `served` is the number of previously served ids as submitted by the
/// client, duplicates included. Returns `None` when the round is exhausted
/// under `rule`.
pub fn select_candidate(
    mut pool: Vec<Question>,
    served: usize,
    rule: ExhaustionRule,
    random: &dyn RandomSource,
) -> Option<Question> {
    let exhausted = match rule {
        ExhaustionRule::EmptyPool => pool.is_empty(),
        ExhaustionRule::Legacy => pool.len() <= served,
    };
    if exhausted || pool.is_empty() {
        return None;
    }

    let index = random.index(pool.len());
    Some(pool.swap_remove(index))
}
