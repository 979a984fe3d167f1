use poker_hands::cards::{Card, Rank, Suit};
use poker_hands::evaluator::{evaluate, Category};
use poker_hands::hand::Hand;
use poker_hands::showdown::select_winners;
use proptest::prelude::*;
use std::cmp::Ordering;

fn full_deck() -> Vec<Card> {
    Suit::ALL.iter().flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s))).collect()
}

/// Five distinct cards in random order.
fn any_cards() -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(full_deck(), 5).prop_shuffle()
}

fn any_hand() -> impl Strategy<Value = Hand> {
    any_cards().prop_map(|cards| Hand::from_slice(&cards).expect("distinct cards"))
}

fn rank_from_val(v: u8) -> Rank {
    Rank::from_value(v).expect("rank in 2..=14")
}

fn straight_hand(top: u8) -> Hand {
    let ranks = if top == 5 {
        [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]
    } else {
        [
            rank_from_val(top - 4),
            rank_from_val(top - 3),
            rank_from_val(top - 2),
            rank_from_val(top - 1),
            rank_from_val(top),
        ]
    };
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
    Hand::try_new([
        Card::new(ranks[0], suits[0]),
        Card::new(ranks[1], suits[1]),
        Card::new(ranks[2], suits[2]),
        Card::new(ranks[3], suits[3]),
        Card::new(ranks[4], suits[4]),
    ])
    .expect("distinct cards")
}

fn flush_rank_set() -> impl Strategy<Value = Vec<Rank>> {
    prop::collection::btree_set(2u8..=14u8, 5)
        .prop_filter("non-straight ranks", |set| {
            let vals: Vec<u8> = set.iter().copied().collect();
            let is_wheel = vals == vec![2, 3, 4, 5, 14];
            let is_straight = vals.windows(2).all(|w| w[1] == w[0] + 1);
            !(is_straight || is_wheel)
        })
        .prop_map(|set| set.into_iter().rev().map(rank_from_val).collect())
}

fn suited(ranks: &[Rank], suit: Suit) -> Hand {
    let cards: Vec<Card> = ranks.iter().map(|&r| Card::new(r, suit)).collect();
    Hand::from_slice(&cards).expect("distinct cards")
}

proptest! {
    #[test]
    fn category_index_is_in_range(hand in any_hand()) {
        let c = evaluate(&hand).category();
        prop_assert!(c.ordinal() <= 8);
        prop_assert_eq!(Category::ALL[usize::from(c.ordinal())], c);
    }

    #[test]
    fn ranking_ignores_card_order(
        (cards, shuffled) in any_cards()
            .prop_flat_map(|c| (Just(c.clone()), Just(c).prop_shuffle()))
    ) {
        let a = Hand::from_slice(&cards).unwrap();
        let b = Hand::from_slice(&shuffled).unwrap();
        prop_assert_eq!(evaluate(&a), evaluate(&b));
    }

    #[test]
    fn higher_category_always_wins(a in any_hand(), b in any_hand()) {
        let (ea, eb) = (evaluate(&a), evaluate(&b));
        match ea.category().cmp(&eb.category()) {
            Ordering::Greater => prop_assert!(ea > eb),
            Ordering::Less => prop_assert!(ea < eb),
            Ordering::Equal => {}
        }
    }

    #[test]
    fn ordering_is_antisymmetric_and_transitive(a in any_hand(), b in any_hand(), c in any_hand()) {
        let (ea, eb, ec) = (evaluate(&a), evaluate(&b), evaluate(&c));
        if ea >= eb && eb >= ea { prop_assert_eq!(ea, eb); }
        if ea >= eb && eb >= ec { prop_assert!(ea >= ec); }
    }

    #[test]
    fn straight_ordering_respects_top_card(top_hi in 6u8..=14u8, top_lo in 5u8..=13u8) {
        prop_assume!(top_hi > top_lo);
        let e_hi = evaluate(&straight_hand(top_hi));
        let e_lo = evaluate(&straight_hand(top_lo));
        prop_assert_eq!(e_hi.category(), Category::Straight);
        prop_assert_eq!(e_lo.category(), Category::Straight);
        prop_assert!(e_hi > e_lo);
    }

    #[test]
    fn wheel_is_lowest_straight(top in 6u8..=14u8) {
        let wheel = evaluate(&straight_hand(5));
        let higher = evaluate(&straight_hand(top));
        prop_assert_eq!(wheel.category(), Category::Straight);
        prop_assert!(higher > wheel);
    }

    #[test]
    fn flush_kicker_ordering(a in flush_rank_set(), b in flush_rank_set()) {
        let e_a = evaluate(&suited(&a, Suit::Hearts));
        let e_b = evaluate(&suited(&b, Suit::Spades));
        prop_assert_eq!(e_a.category(), Category::Flush);
        prop_assert_eq!(e_b.category(), Category::Flush);
        // both rank lists are descending
        match a.cmp(&b) {
            Ordering::Greater => prop_assert!(e_a > e_b),
            Ordering::Less => prop_assert!(e_a < e_b),
            Ordering::Equal => prop_assert_eq!(e_a, e_b),
        }
    }

    #[test]
    fn winners_share_the_top_rank_in_input_order(
        hands in prop::collection::vec(any_hand(), 1..12)
    ) {
        let winners = select_winners(&hands).unwrap();
        prop_assert!(!winners.is_empty());
        let best = hands.iter().map(evaluate).max().unwrap();
        prop_assert!(winners.iter().all(|w| evaluate(w) == best));
        let expected: Vec<Hand> = hands.iter().copied().filter(|h| evaluate(h) == best).collect();
        prop_assert_eq!(&winners, &expected);
        prop_assert_eq!(select_winners(&winners).unwrap(), winners);
    }

    #[test]
    fn all_tied_hands_are_returned(hand in any_hand(), n in 1usize..20) {
        let field = vec![hand; n];
        prop_assert_eq!(select_winners(&field).unwrap(), field);
    }
}
