//! Building blocks of hand classification. Each works on the descending rank
//! sequence produced by [`card_ranks`] (or on the cards, for [`flush`]).

use crate::cards::Card;
use crate::hand::{Hand, HAND_SIZE};

/// Rank strengths of a hand, highest first.
pub type Ranks = [u8; HAND_SIZE];

const WHEEL: Ranks = [14, 5, 4, 3, 2];
const WHEEL_LOW: Ranks = [5, 4, 3, 2, 1];

/// Rank strengths sorted descending. The ace-low straight A-5-4-3-2 comes back
/// as `[5, 4, 3, 2, 1]` so it sorts below every other straight.
///
/// ```
/// use poker_hands::evaluator::card_ranks;
///
/// let hand = "AC 3D 5H 2S 4C".parse().unwrap();
/// assert_eq!(card_ranks(&hand), [5, 4, 3, 2, 1]);
/// ```
pub fn card_ranks(hand: &Hand) -> Ranks {
    let mut ranks = hand.cards().map(|c| c.rank().value());
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    if ranks == WHEEL {
        WHEEL_LOW
    } else {
        ranks
    }
}

/// True if every card shares one suit. No cards is not a flush.
pub fn flush(cards: &[Card]) -> bool {
    match cards.split_first() {
        Some((first, rest)) => rest.iter().all(|c| c.suit() == first.suit()),
        None => false,
    }
}

/// True if the ranks are five distinct values spanning exactly four steps.
pub fn straight(ranks: &[u8]) -> bool {
    if ranks.len() != HAND_SIZE {
        return false;
    }
    let distinct = ranks.iter().enumerate().all(|(i, r)| !ranks[..i].contains(r));
    match (ranks.iter().max(), ranks.iter().min()) {
        (Some(max), Some(min)) => distinct && max - min == 4,
        _ => false,
    }
}

/// First rank, in the order given, that occurs exactly `n` times.
pub fn kind(n: usize, ranks: &[u8]) -> Option<u8> {
    ranks.iter().copied().find(|&r| ranks.iter().filter(|&&x| x == r).count() == n)
}

/// The (high, low) ranks of two distinct pairs, if the hand has them.
pub fn two_pair(ranks: &[u8]) -> Option<(u8, u8)> {
    let high = kind(2, ranks)?;
    let reversed: Vec<u8> = ranks.iter().rev().copied().collect();
    let low = kind(2, &reversed)?;
    (high != low).then_some((high, low))
}
