//! Differential check of `evaluate` against the count-signature formulation:
//! group ranks by multiplicity, look the count signature up in a fixed table,
//! and lift the score for straights and flushes.

use poker_hands::cards::{Card, Rank, Suit};
use poker_hands::evaluator::{evaluate, Category};
use poker_hands::hand::Hand;
use proptest::prelude::*;

/// Count signature → category index, on the same 0..=8 scale as `Category`.
const SIGNATURE_SCORES: &[(&[u8], u8)] = &[
    (&[4, 1], 7),
    (&[3, 2], 6),
    (&[3, 1, 1], 3),
    (&[2, 2, 1], 2),
    (&[2, 1, 1, 1], 1),
    (&[1, 1, 1, 1, 1], 0),
];

/// `(count, rank)` pairs, highest count first, then highest rank.
fn group(ranks: &[u8]) -> Vec<(u8, u8)> {
    let mut groups: Vec<(u8, u8)> = Vec::new();
    for &r in ranks {
        match groups.iter_mut().find(|(_, x)| *x == r) {
            Some(g) => g.0 += 1,
            None => groups.push((1, r)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}

/// Oracle rank: category index, then the grouped ranks as tie-breakers.
fn oracle(hand: &Hand) -> (u8, Vec<u8>) {
    let values: Vec<u8> = hand.iter().map(|c| c.rank().value()).collect();
    let (counts, mut ranks): (Vec<u8>, Vec<u8>) = group(&values).into_iter().unzip();
    if ranks == [14, 5, 4, 3, 2] {
        ranks = vec![5, 4, 3, 2, 1];
    }
    let is_straight = ranks.len() == 5 && ranks[0] - ranks[4] == 4;
    let is_flush = hand.iter().all(|c| c.suit() == hand.cards()[0].suit());
    let table = SIGNATURE_SCORES
        .iter()
        .find(|(sig, _)| *sig == counts.as_slice())
        .map(|&(_, score)| score)
        .expect("every five-card signature is tabulated");
    let bonus = match (is_straight, is_flush) {
        (true, true) => 8,
        (false, true) => 5,
        (true, false) => 4,
        (false, false) => 0,
    };
    (table.max(bonus), ranks)
}

fn full_deck() -> Vec<Card> {
    Suit::ALL.iter().flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s))).collect()
}

fn any_hand() -> impl Strategy<Value = Hand> {
    prop::sample::subsequence(full_deck(), 5)
        .prop_shuffle()
        .prop_map(|cards| Hand::from_slice(&cards).expect("distinct cards"))
}

#[test]
fn group_orders_by_count_then_rank() {
    assert_eq!(group(&[2, 3, 4, 6, 2, 1, 9]), vec![(2, 2), (1, 9), (1, 6), (1, 4), (1, 3), (1, 1)]);
    assert_eq!(group(&[8, 8, 8, 8]), vec![(4, 8)]);
    assert_eq!(group(&[2, 6, 1]), vec![(1, 6), (1, 2), (1, 1)]);
}

#[test]
fn oracle_agrees_on_known_hands() {
    let cases = [
        ("6C 7C 8C 9C TC", (8, vec![10, 9, 8, 7, 6])),
        ("9D 9H 9S 9C 7D", (7, vec![9, 7])),
        ("TD TC TH 7C 7D", (6, vec![10, 7])),
        ("AS 2D 3C 4H 5S", (4, vec![5, 4, 3, 2, 1])),
    ];
    for (s, expected) in cases {
        let hand: Hand = s.parse().unwrap();
        assert_eq!(oracle(&hand), expected);
        assert_eq!(evaluate(&hand).category().ordinal(), expected.0);
    }
}

proptest! {
    #[test]
    fn categories_match_the_oracle(hand in any_hand()) {
        let (score, _) = oracle(&hand);
        prop_assert_eq!(evaluate(&hand).category().ordinal(), score);
        prop_assert_eq!(Category::ALL[usize::from(score)], evaluate(&hand).category());
    }

    #[test]
    fn comparisons_match_the_oracle(a in any_hand(), b in any_hand()) {
        prop_assert_eq!(evaluate(&a).cmp(&evaluate(&b)), oracle(&a).cmp(&oracle(&b)));
    }
}
