use crate::cards::{Card, Rank, Suit};
use crate::hand::{Hand, HandError, HAND_SIZE};
use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("not enough cards: requested {requested}, {available} left")]
    NotEnoughCards { requested: usize, available: usize },
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// A standard 52-card deck, one card per rank and suit.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_hands::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw up to `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.draw()).collect()
    }

    /// Deal `num_hands` five-card hands off the top of the deck.
    /// Nothing is drawn when the deck is too short.
    pub fn deal_hands(&mut self, num_hands: usize) -> Result<Vec<Hand>, DeckError> {
        let requested = num_hands.checked_mul(HAND_SIZE).unwrap_or(usize::MAX);
        if requested > self.len() {
            return Err(DeckError::NotEnoughCards { requested, available: self.len() });
        }
        let cards = self.draw_n(requested);
        let hands = cards
            .chunks_exact(HAND_SIZE)
            .map(Hand::from_slice)
            .collect::<Result<Vec<_>, HandError>>()?;
        Ok(hands)
    }
}

/// Shuffle a fresh deck and deal `num_hands` hands from it.
///
/// ```
/// use poker_hands::deck::deal;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let hands = deal(4, &mut rng).unwrap();
/// assert_eq!(hands.len(), 4);
/// ```
pub fn deal<R: Rng + ?Sized>(num_hands: usize, rng: &mut R) -> Result<Vec<Hand>, DeckError> {
    let mut deck = Deck::standard();
    deck.shuffle_with(rng);
    debug!("dealing {num_hands} hands");
    deck.deal_hands(num_hands)
}
