use super::hand_analysis::HandAnalysis;
use super::predicates::{kind, two_pair};
use super::HandRank;

/// Strategy pattern: each detector recognises one category and builds its
/// rank with tie-breakers, or declines with `None`.
pub trait CategoryDetector {
    fn classify(&self, analysis: &HandAnalysis) -> Option<HandRank>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn classify(&self, a: &HandAnalysis) -> Option<HandRank> {
        (a.is_straight && a.is_flush).then(|| HandRank::StraightFlush(a.high()))
    }
}

/// Four of a Kind: four cards of one rank plus a kicker
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn classify(&self, a: &HandAnalysis) -> Option<HandRank> {
        Some(HandRank::FourOfAKind(kind(4, &a.ranks)?, kind(1, &a.ranks)?))
    }
}

/// Full House: three of a kind plus a pair
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn classify(&self, a: &HandAnalysis) -> Option<HandRank> {
        Some(HandRank::FullHouse(kind(3, &a.ranks)?, kind(2, &a.ranks)?))
    }
}

/// Flush: all five cards of one suit, ranked by every card
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn classify(&self, a: &HandAnalysis) -> Option<HandRank> {
        a.is_flush.then_some(HandRank::Flush(a.ranks))
    }
}

/// Straight: five consecutive ranks, not all one suit
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn classify(&self, a: &HandAnalysis) -> Option<HandRank> {
        a.is_straight.then(|| HandRank::Straight(a.high()))
    }
}

/// Three of a Kind: three cards of one rank
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn classify(&self, a: &HandAnalysis) -> Option<HandRank> {
        Some(HandRank::ThreeOfAKind(kind(3, &a.ranks)?, a.ranks))
    }
}

/// Two Pair: two pairs of different ranks
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn classify(&self, a: &HandAnalysis) -> Option<HandRank> {
        let (high, low) = two_pair(&a.ranks)?;
        Some(HandRank::TwoPair(high, low, a.ranks))
    }
}

/// Pair: two cards of one rank
pub struct PairDetector;

impl CategoryDetector for PairDetector {
    fn classify(&self, a: &HandAnalysis) -> Option<HandRank> {
        Some(HandRank::Pair(kind(2, &a.ranks)?, a.ranks))
    }
}

/// High Card: always matches, so it must stay last
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn classify(&self, a: &HandAnalysis) -> Option<HandRank> {
        Some(HandRank::HighCard(a.ranks))
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

/// The first detector that matches decides the category. A full house also
/// holds a triple and a pair, so the order here is load-bearing.
pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &PairDetector,
    &HighCardDetector,
];
