use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use hand_odds::core::{Deck, HandOddsError, Suit, Value};
use hand_odds::holdem::{Enumerator, ProbabilityTable, Traversal};
use tracing::{Level, event};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "hand-odds")]
#[command(about = "Odds of reaching each hand category from every partial deal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate every starting hand and write the probability table
    Generate {
        /// Where to write the table
        #[arg(short, long, default_value = "output.txt")]
        output: PathBuf,
        /// How deals are walked
        #[arg(short, long, value_enum, default_value_t = Traversal::Combinations)]
        traversal: Traversal,
        /// Suit symbols to build the deck from, e.g. CH
        #[arg(long)]
        suits: Option<String>,
        /// Face numbers to build the deck from, e.g. 1,10,11,12,13
        #[arg(long, value_delimiter = ',')]
        ranks: Option<Vec<u8>>,
        /// Indent the written JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Print the probabilities stored for one card set
    Lookup {
        /// A table written by `generate`
        #[arg(short, long, default_value = "output.txt")]
        table: PathBuf,
        /// Card names in any order, e.g. C13C1
        key: String,
    },
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Generate {
            output,
            traversal,
            suits,
            ranks,
            pretty,
        } => build_deck(suits.as_deref(), ranks.as_deref())
            .and_then(|deck| generate(&deck, traversal, &output, pretty)),
        Commands::Lookup { table, key } => lookup(&table, &key),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn build_deck(suits: Option<&str>, ranks: Option<&[u8]>) -> Result<Deck, HandOddsError> {
    if suits.is_none() && ranks.is_none() {
        return Ok(Deck::new());
    }

    let suits = match suits {
        Some(symbols) => symbols
            .chars()
            .map(|c| Suit::from_char(c).ok_or(HandOddsError::UnexpectedSuitChar))
            .collect::<Result<Vec<Suit>, _>>()?,
        None => Suit::suits().to_vec(),
    };
    let values = match ranks {
        Some(numbers) => numbers
            .iter()
            .map(|n| Value::from_number(*n).ok_or(HandOddsError::UnexpectedValue))
            .collect::<Result<Vec<Value>, _>>()?,
        None => Value::values().to_vec(),
    };
    Deck::with_suits_and_values(&suits, &values)
}

fn generate(
    deck: &Deck,
    traversal: Traversal,
    output: &Path,
    pretty: bool,
) -> Result<(), HandOddsError> {
    event!(Level::INFO, cards = deck.len(), ?traversal, "start");
    let table = Enumerator::new(deck).with_traversal(traversal).build_table();

    table.write_json(File::create(output)?, pretty)?;
    event!(
        Level::INFO,
        entries = table.len(),
        "Table written to {}",
        output.display()
    );
    Ok(())
}

fn lookup(path: &Path, key: &str) -> Result<(), HandOddsError> {
    let table = ProbabilityTable::read_json(File::open(path)?)?;
    let probabilities = table.get_key(key)?;

    let canonical: hand_odds::core::CardSet = key.parse()?;
    println!("{}", canonical);
    for (category, p) in probabilities.iter() {
        println!("{:>14} {:.6}", category.name(), p);
    }
    Ok(())
}
