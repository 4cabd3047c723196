mod logging;
mod play;
mod report;
mod simulate;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use lightsout_core::{JsonFileStore, Leaderboard};
use lightsout_data::{Difficulty, PlayerProfile};

use crate::simulate::Scripted;

#[derive(Debug, Parser)]
#[command(name = "lightsout")]
#[command(about = "Start-lights reaction tournament", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Leaderboard file
    #[arg(long, env = "LIGHTSOUT_STORE", default_value = "lightsout-scores.json", global = true)]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct DriverArgs {
    #[arg(long)]
    name: String,
    /// Car number, 1-99
    #[arg(long)]
    number: u8,
    #[arg(long)]
    phone: String,
    #[arg(long, default_value_t = Difficulty::Chaos)]
    difficulty: Difficulty,
}

impl DriverArgs {
    fn into_profile(self) -> PlayerProfile {
        PlayerProfile::new(self.phone, self.name, self.number, self.difficulty)
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play a tournament in the terminal
    Play {
        #[command(flatten)]
        driver: DriverArgs,
        /// Fix the random holds
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a scripted tournament on a virtual clock
    Simulate {
        #[arg(long, default_value = "Simulator")]
        name: String,
        #[arg(long, default_value_t = 1)]
        number: u8,
        #[arg(long, default_value = "000")]
        phone: String,
        #[arg(long, default_value_t = Difficulty::Chaos)]
        difficulty: Difficulty,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Comma-separated reactions in ms after go, or `early`
        #[arg(long, value_delimiter = ',', required = true)]
        reactions: Vec<Scripted>,
        /// Append the result to the leaderboard file
        #[arg(long)]
        save: bool,
    },
    /// Show ranked results
    Leaderboard {
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Highlight this driver (with --number)
        #[arg(long, requires = "number")]
        phone: Option<String>,
        #[arg(long, requires = "phone")]
        number: Option<u8>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let store = JsonFileStore::new(&cli.store);

    match cli.command {
        Command::Play { driver, seed } => {
            play::run_play(driver.into_profile(), &store, seed)?;
        }
        Command::Simulate {
            name,
            number,
            phone,
            difficulty,
            seed,
            reactions,
            save,
        } => {
            let profile = PlayerProfile::new(phone, name, number, difficulty);
            simulate::run_simulation(profile, &reactions, seed, save.then_some(&store))?;
        }
        Command::Leaderboard {
            difficulty,
            phone,
            number,
        } => {
            let board = Leaderboard::load(&store)
                .with_context(|| format!("failed to load: {}", cli.store.display()))?;
            let board = match difficulty {
                Some(d) => board.for_difficulty(d),
                None => board,
            };
            let current = phone
                .zip(number)
                .map(|(phone, number)| PlayerProfile::new(phone, "", number, Difficulty::default()));
            report::print_leaderboard(&board, current.as_ref());
        }
    }

    Ok(())
}
