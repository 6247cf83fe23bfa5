use rand::{rngs::SmallRng, SeedableRng};
use salvo::{init_logging, GameController, LogReporter, RandomShooter};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    init_logging();

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut shooter = RandomShooter::seeded(seed.wrapping_add(1));
    let controller = GameController::default();

    let report = controller.run(&mut rng, &mut shooter, &mut LogReporter)?;

    let result = json!({
        "seed": seed,
        "report": report,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
