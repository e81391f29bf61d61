//! Per-class EV tables for one limit betting round.
//!
//! Deals full hands into the betting tree, optionally adjusts each seat's
//! strategy between passes, and prints a 13x13 grid of mean profit per deal
//! by canonical hole class.

use clap::Parser;
use colored::Colorize;
use limitev::cards::Hole;
use limitev::cards::Rank;
use limitev::simulate::Algorithm;
use limitev::simulate::Session;
use limitev::simulate::Tally;
use limitev::strategy;
use limitev::tree::Odds;

#[derive(Parser)]
#[command(author, version, about = "Per-class EV tables for one limit betting round")]
struct Args {
    /// deals per evaluation pass
    #[arg(long, default_value_t = 100_000)]
    deals: u64,
    /// seats at the table
    #[arg(long, default_value_t = 2)]
    players: usize,
    /// raises allowed in the round
    #[arg(long, default_value_t = 1)]
    raises: u8,
    /// strategy adjustment passes after the first
    #[arg(long, default_value_t = 0)]
    rounds: usize,
    /// adjustment leeway, keeps losing options alive
    #[arg(long, default_value_t = 0.05)]
    leeway: f64,
    /// classifier path: slow | fast | fastest
    #[arg(long, default_value = "fast")]
    algorithm: Algorithm,
    /// RNG seed
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// small blind
    #[arg(long, default_value_t = 1)]
    sblind: u8,
    /// big blind, also the raise increment
    #[arg(long, default_value_t = 2)]
    bblind: u8,
}

fn main() -> anyhow::Result<()> {
    limitev::log();
    let args = Args::parse();
    anyhow::ensure!(
        (2..=10).contains(&args.players),
        "players must be in 2..=10, got {}",
        args.players
    );
    anyhow::ensure!(
        args.algorithm != Algorithm::None,
        "EV tables require a classifier"
    );
    let session = Session::new(args.deals, args.players, args.seed, args.algorithm);
    let mut odds = vec![Odds::uniform(); args.players];
    let mut passes = session.evaluate(args.sblind, args.bblind, args.raises, &odds);
    for round in 1..=args.rounds {
        let profits = passes.0.option_profits();
        for (seat, current) in odds.iter_mut().enumerate() {
            let mut policy = <[f64; 3]>::from(*current);
            strategy::adjust(&mut policy, &profits[seat], args.leeway);
            *current = Odds::from(policy);
        }
        for (seat, current) in odds.iter().enumerate() {
            log::info!("round {} seat {}: {}", round, seat, current);
        }
        passes = session.evaluate(args.sblind, args.bblind, args.raises, &odds);
    }
    let (tree, tally) = passes;
    for seat in 0..args.players {
        println!(
            "seat {}: {:+.4} per deal",
            seat,
            tree.evs()[seat] / tally.deals() as f64
        );
    }
    grid(&tally);
    extremes(&tally);
    Ok(())
}

/// 13x13 grid, pairs on the diagonal, suited below, offsuit above
fn grid(tally: &Tally) {
    let rank = |i: usize| Rank::from(i as u8 + 1);
    print!("{:>3}", "");
    for col in (0..13).rev() {
        print!("{:>7}", rank(col).to_string());
    }
    println!();
    for row in (0..13).rev() {
        print!("{}", format!("{:>3}", rank(row)).bold());
        for col in (0..13).rev() {
            match tally.ev(row * 13 + col) {
                Some(ev) if ev >= 0.0 => print!("{}", format!("{:>+7.2}", ev).green()),
                Some(ev) => print!("{}", format!("{:>+7.2}", ev).red()),
                None => print!("{:>7}", "-"),
            }
        }
        println!();
    }
}

fn extremes(tally: &Tally) {
    let mut seen = (0..Hole::classes())
        .filter_map(|class| tally.ev(class).map(|ev| (class, ev)))
        .collect::<Vec<_>>();
    seen.sort_by(|a, b| b.1.partial_cmp(&a.1).expect("finite EVs"));
    if let (Some(best), Some(worst)) = (seen.first(), seen.last()) {
        println!(
            "best {} {:+.3}  worst {} {:+.3}",
            Hole::label(best.0).green(),
            best.1,
            Hole::label(worst.0).red(),
            worst.1
        );
    }
}
