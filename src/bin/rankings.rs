//! Monte-Carlo hand ranking frequencies.
//!
//! Deals independent hands (seven cards each, or four-card holes on
//! five-card boards with --omaha), classifies each, and prints how often
//! every ranking came up.

use clap::Parser;
use colored::Colorize;
use limitev::cards::HandRanking;
use limitev::cards::OmahaClasses;
use limitev::simulate::Algorithm;
use limitev::simulate::Session;
use limitev::simulate::Tally;

#[derive(Parser)]
#[command(author, version, about = "Monte-Carlo hand ranking frequencies")]
struct Args {
    /// deals to run
    #[arg(long, default_value_t = 1_000_000)]
    deals: u64,
    /// classifier path: slow | fast | fastest | none
    #[arg(long, default_value = "fast")]
    algorithm: Algorithm,
    /// independent hands per deal
    #[arg(long, default_value_t = 1)]
    players: usize,
    /// RNG seed
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// four-card holes on five-card boards
    #[arg(long)]
    omaha: bool,
}

fn main() -> anyhow::Result<()> {
    limitev::log();
    let args = Args::parse();
    anyhow::ensure!(
        (1..=24).contains(&args.players),
        "players must be in 1..=24, got {}",
        args.players
    );
    let session = Session::new(args.deals, args.players, args.seed, args.algorithm);
    if args.omaha {
        let classes = OmahaClasses::build();
        let (tally, counts) = session.omaha(&classes);
        report(&tally);
        let seen = counts.iter().filter(|c| **c > 0).count();
        println!("{} of {} canonical hole classes seen", seen, classes.classes());
    } else {
        report(&session.rankings());
    }
    Ok(())
}

fn report(tally: &Tally) {
    println!(
        "{}",
        format!("{:>16}  {:>12}  {:>9}", "ranking", "count", "percent").bold()
    );
    for ranking in HandRanking::all().iter().rev() {
        println!(
            "{}  {:>12}  {:>8.4}%",
            format!("{:>16}", ranking).green(),
            tally.count(*ranking),
            100.0 * tally.frequency(*ranking)
        );
    }
    println!("{:>16}  {:>12}", "hands".bold(), tally.deals());
}
