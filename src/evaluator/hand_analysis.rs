use super::predicates::{card_ranks, flush, straight, Ranks};
use crate::hand::Hand;

/// Facts about a hand computed once and shared by all category detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandAnalysis {
    pub ranks: Ranks,
    pub is_flush: bool,
    pub is_straight: bool,
}

impl HandAnalysis {
    pub fn new(hand: &Hand) -> Self {
        let ranks = card_ranks(hand);
        Self { ranks, is_flush: flush(hand.cards()), is_straight: straight(&ranks) }
    }

    /// Highest rank; for the ace-low straight this is 5.
    pub fn high(&self) -> u8 {
        self.ranks[0]
    }
}
