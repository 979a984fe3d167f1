pub(crate) mod detector;
pub(crate) mod hand_analysis;
mod predicates;

pub use predicates::{card_ranks, flush, kind, straight, two_pair, Ranks};

use crate::hand::Hand;
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    /// All categories, weakest first; `ALL[c.ordinal()] == c`.
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High card",
            Category::Pair => "One pair",
            Category::TwoPair => "Two pair",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full house",
            Category::FourOfAKind => "Four of a kind",
            Category::StraightFlush => "Straight flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparable strength of a five-card hand. Higher is better.
///
/// Variants are declared weakest first and their fields are the tie-breakers
/// in significance order, so the derived `Ord` compares the category first and
/// then the tie-breakers lexicographically. Rank values are strengths `1..=14`,
/// where 1 only appears as the ace of an ace-low straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    HighCard(Ranks),
    Pair(u8, Ranks),
    /// High pair, low pair, all ranks.
    TwoPair(u8, u8, Ranks),
    ThreeOfAKind(u8, Ranks),
    /// Highest rank of the straight.
    Straight(u8),
    Flush(Ranks),
    /// Triple rank, pair rank.
    FullHouse(u8, u8),
    /// Quad rank, kicker.
    FourOfAKind(u8, u8),
    StraightFlush(u8),
}

impl HandRank {
    pub const fn category(&self) -> Category {
        match self {
            HandRank::HighCard(..) => Category::HighCard,
            HandRank::Pair(..) => Category::Pair,
            HandRank::TwoPair(..) => Category::TwoPair,
            HandRank::ThreeOfAKind(..) => Category::ThreeOfAKind,
            HandRank::Straight(..) => Category::Straight,
            HandRank::Flush(..) => Category::Flush,
            HandRank::FullHouse(..) => Category::FullHouse,
            HandRank::FourOfAKind(..) => Category::FourOfAKind,
            HandRank::StraightFlush(..) => Category::StraightFlush,
        }
    }
}

/// Tuple form, category index first: `(6, 10, 7)` for tens full of sevens.
impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.category().ordinal();
        match self {
            HandRank::StraightFlush(high) | HandRank::Straight(high) => write!(f, "({c}, {high})"),
            HandRank::FourOfAKind(a, b) | HandRank::FullHouse(a, b) => write!(f, "({c}, {a}, {b})"),
            HandRank::Flush(ranks) | HandRank::HighCard(ranks) => write!(f, "({c}, {ranks:?})"),
            HandRank::ThreeOfAKind(r, ranks) | HandRank::Pair(r, ranks) => {
                write!(f, "({c}, {r}, {ranks:?})")
            }
            HandRank::TwoPair(high, low, ranks) => write!(f, "({c}, ({high}, {low}), {ranks:?})"),
        }
    }
}

/// Rank a five-card hand.
///
/// ```
/// use poker_hands::evaluator::{evaluate, Category, HandRank};
/// use poker_hands::hand::Hand;
///
/// let hand: Hand = "TD TC TH 7C 7D".parse().unwrap();
/// let rank = evaluate(&hand);
/// assert_eq!(rank, HandRank::FullHouse(10, 7));
/// assert_eq!(rank.category(), Category::FullHouse);
/// assert_eq!(rank.to_string(), "(6, 10, 7)");
/// ```
pub fn evaluate(hand: &Hand) -> HandRank {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(hand);
    DETECTORS
        .iter()
        .find_map(|detector| detector.classify(&analysis))
        .unwrap_or(HandRank::HighCard(analysis.ranks))
}
