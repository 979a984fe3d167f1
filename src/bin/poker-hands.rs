use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use poker_hands::deck::deal;
use poker_hands::evaluator::evaluate;
use poker_hands::hand::Hand;
use poker_hands::showdown::{select_winner_indices, select_winners};
use poker_hands::stats::{hand_percentages, SampleConfig, MAX_HANDS_PER_DEAL};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Parser)]
#[clap(version, about = "Rank five-card poker hands and pick winners.")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the category and rank tuple of each hand.
    Rank {
        /// Hands of five cards, e.g. "6C 7C 8C 9C TC".
        #[clap(required = true)]
        hands: Vec<String>,
    },
    /// Print the winning hand(s).
    Winners {
        /// Hands of five cards, e.g. "6C 7C 8C 9C TC".
        #[clap(required = true)]
        hands: Vec<String>,
    },
    /// Deal random hands from a shuffled deck and show the winners.
    Deal {
        /// Number of hands to deal.
        #[clap(long, short = 'n', default_value_t = 4,
            value_parser = clap::value_parser!(u8).range(1..=MAX_HANDS_PER_DEAL as i64))]
        hands: u8,
        /// Seed for a reproducible deal.
        #[clap(long, short)]
        seed: Option<u64>,
    },
    /// Sample random hands and print how often each category occurs.
    Percentages {
        /// Total number of hands to sample.
        #[clap(long, short = 'n', default_value_t = 700_000)]
        hands: u64,
        /// Hands dealt from each shuffled deck.
        #[clap(long, default_value_t = MAX_HANDS_PER_DEAL)]
        per_deal: usize,
        /// Seed for a reproducible run.
        #[clap(long, short)]
        seed: Option<u64>,
    },
}

fn parse_hands(args: &[String]) -> Result<Vec<Hand>> {
    args.iter()
        .map(|s| s.parse::<Hand>().with_context(|| format!("invalid hand '{s}'")))
        .collect()
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Rank { hands } => {
            for hand in parse_hands(&hands)? {
                let rank = evaluate(&hand);
                println!("{hand}  {:<15} {rank}", rank.category().name());
            }
        }
        Command::Winners { hands } => {
            let hands = parse_hands(&hands)?;
            for hand in select_winners(&hands)? {
                println!("{hand}  {}", evaluate(&hand).category());
            }
        }
        Command::Deal { hands, seed } => {
            let mut rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_os_rng(),
            };
            let dealt = deal(usize::from(hands), &mut rng)?;
            let winners = select_winner_indices(&dealt)?;
            for (i, hand) in dealt.iter().enumerate() {
                let mark = if winners.contains(&i) { "*" } else { " " };
                println!("{mark} {hand}  {}", evaluate(hand).category());
            }
        }
        Command::Percentages { hands, per_deal, seed } => {
            let config = SampleConfig { hands, hands_per_deal: per_deal, seed };
            info!("sampling {hands} hands");
            let freq = hand_percentages(&config)?;
            print!("{freq}");
        }
    }
    Ok(())
}
