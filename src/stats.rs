//! Category frequencies over randomly dealt hands.

use crate::deck::{deal, DeckError};
use crate::evaluator::{evaluate, Category};
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Most five-card hands a single 52-card deck can supply.
pub const MAX_HANDS_PER_DEAL: usize = 10;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SampleError {
    #[error("sample size must be at least one hand")]
    NoHands,
    #[error("hands per deal must be in 1..=10, got {0}")]
    HandsPerDeal(usize),
    #[error(transparent)]
    Deal(#[from] DeckError),
}

/// Sampling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleConfig {
    /// Total number of hands to evaluate.
    pub hands: u64,
    /// Hands dealt from each freshly shuffled deck.
    pub hands_per_deal: usize,
    /// Seed for a reproducible run; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self { hands: 700_000, hands_per_deal: MAX_HANDS_PER_DEAL, seed: None }
    }
}

impl SampleConfig {
    pub fn validate(&self) -> Result<(), SampleError> {
        if self.hands == 0 {
            return Err(SampleError::NoHands);
        }
        if !(1..=MAX_HANDS_PER_DEAL).contains(&self.hands_per_deal) {
            return Err(SampleError::HandsPerDeal(self.hands_per_deal));
        }
        Ok(())
    }
}

/// How often each category came up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFrequencies {
    counts: [u64; Category::ALL.len()],
}

impl CategoryFrequencies {
    pub fn record(&mut self, category: Category) {
        self.counts[usize::from(category.ordinal())] += 1;
    }

    pub fn count(&self, category: Category) -> u64 {
        self.counts[usize::from(category.ordinal())]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Share of `category` in percent; 0 when nothing was recorded.
    pub fn percent(&self, category: Category) -> f64 {
        match self.total() {
            0 => 0.0,
            total => 100.0 * self.count(category) as f64 / total as f64,
        }
    }
}

/// One line per category, strongest first.
impl fmt::Display for CategoryFrequencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in Category::ALL.iter().rev() {
            writeln!(f, "{:>15}: {:6.3} %", c.name(), self.percent(*c))?;
        }
        Ok(())
    }
}

/// Deal `config.hands` random hands and tally their categories.
///
/// ```
/// use poker_hands::evaluator::Category;
/// use poker_hands::stats::{hand_percentages, SampleConfig};
///
/// let config = SampleConfig { hands: 1_000, seed: Some(5), ..SampleConfig::default() };
/// let freq = hand_percentages(&config).unwrap();
/// assert_eq!(freq.total(), 1_000);
/// assert!(freq.percent(Category::HighCard) > 30.0);
/// ```
pub fn hand_percentages(config: &SampleConfig) -> Result<CategoryFrequencies, SampleError> {
    config.validate()?;
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };
    debug!("sampling {} hands, {} per deal", config.hands, config.hands_per_deal);

    let mut freq = CategoryFrequencies::default();
    let mut remaining = config.hands;
    while remaining > 0 {
        let n = config.hands_per_deal.min(usize::try_from(remaining).unwrap_or(usize::MAX));
        for hand in deal(n, &mut rng)? {
            freq.record(evaluate(&hand).category());
        }
        remaining -= n as u64;
    }
    debug!("sampled {} hands", freq.total());
    Ok(freq)
}
