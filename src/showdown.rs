//! Picking the best hand(s) out of many, keeping ties.

use crate::evaluator::evaluate;
use crate::hand::Hand;
use log::trace;
use std::cmp::Ordering;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShowdownError {
    #[error("no hands to compare")]
    NoHands,
}

/// Every item whose key equals the maximum key, in input order.
/// Single pass against a running maximum; empty input gives an empty vector.
///
/// ```
/// use poker_hands::showdown::all_max_by_key;
///
/// let words = ["bb", "a", "cc", "d"];
/// assert_eq!(all_max_by_key(words, |w| w.len()), vec!["bb", "cc"]);
/// ```
pub fn all_max_by_key<I, K, F>(items: I, mut key: F) -> Vec<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    let mut best: Option<K> = None;
    let mut winners = Vec::new();
    for item in items {
        let k = key(&item);
        match best.as_ref().map(|b| k.cmp(b)) {
            Some(Ordering::Less) => {}
            Some(Ordering::Equal) => winners.push(item),
            _ => {
                best = Some(k);
                winners.clear();
                winners.push(item);
            }
        }
    }
    winners
}

/// [`all_max_by_key`] keyed on the items themselves.
pub fn all_max<I>(items: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Ord + Clone,
{
    all_max_by_key(items, |x| x.clone())
}

/// Positions of the winning hands, ascending.
pub fn select_winner_indices(hands: &[Hand]) -> Result<Vec<usize>, ShowdownError> {
    if hands.is_empty() {
        return Err(ShowdownError::NoHands);
    }
    let ranks: Vec<_> = hands.iter().map(evaluate).collect();
    let winners = all_max_by_key(0..hands.len(), |&i| ranks[i]);
    trace!("{} of {} hands win with {}", winners.len(), hands.len(), ranks[winners[0]]);
    Ok(winners)
}

/// All hands that rank highest, in their original relative order.
///
/// ```
/// use poker_hands::hand::Hand;
/// use poker_hands::showdown::select_winners;
///
/// let sf: Hand = "6C 7C 8C 9C TC".parse().unwrap();
/// let fk: Hand = "9D 9H 9S 9C 7D".parse().unwrap();
/// assert_eq!(select_winners(&[fk, sf]).unwrap(), vec![sf]);
/// ```
pub fn select_winners(hands: &[Hand]) -> Result<Vec<Hand>, ShowdownError> {
    let indices = select_winner_indices(hands)?;
    Ok(indices.into_iter().map(|i| hands[i]).collect())
}
