use std::io::{self, Write};

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{
    init_logging, write_board, CliSource, ConsoleReporter, GameController, GameOutcome,
    MAX_TURNS, SHOTS_PER_TURN,
};

#[derive(Parser)]
#[command(author, version, about = "Single-player salvo Battleship on a 16x16 grid", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game on the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Show ship positions on the board before every turn")]
        cheat: bool,
    },
    /// Place a random fleet and print it.
    Demo {
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (fleet will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, cheat } => {
            let mut rng = make_rng(seed);
            let controller = GameController::default();
            let mut session = controller.setup(&mut rng)?;
            println!(
                "Sink the hidden fleet. You have {} turns of {} shots each.",
                MAX_TURNS, SHOTS_PER_TURN
            );

            let stdin = io::stdin();
            let mut source = CliSource::new(stdin.lock(), io::stdout());
            let mut reporter = ConsoleReporter::new(io::stdout(), cheat);
            let report = controller.play(&mut session, &mut source, &mut reporter)?;
            if let Some(e) = reporter.take_error() {
                return Err(e.into());
            }
            if report.outcome == GameOutcome::Lost {
                println!("The fleet was:");
                write_board(&mut io::stdout(), session.board(), true)?;
            }
        }
        Commands::Demo { seed } => {
            let mut rng = make_rng(seed);
            let session = GameController::default().setup(&mut rng)?;
            let mut out = io::stdout();
            for p in session.board().placements() {
                writeln!(
                    out,
                    "{} (length {}, {} pts) at {} {:?}",
                    p.kind,
                    p.kind.length(),
                    p.kind.points(),
                    p.origin,
                    p.orientation
                )?;
            }
            write_board(&mut out, session.board(), true)?;
        }
    }
    Ok(())
}
