use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use salvo::{GameSession, ShipPlacer, ShotOutcome, BOARD_SIZE, SHIPS};

fn random_session(seed: u64) -> GameSession {
    let mut rng = SmallRng::seed_from_u64(seed);
    GameSession::random(&ShipPlacer::default(), &mut rng).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn second_shot_is_always_rejected(seed in any::<u64>(), x in 0..BOARD_SIZE, y in 0..BOARD_SIZE) {
        let mut session = random_session(seed);
        let first = session.resolve(x, y);
        prop_assert!(first.is_valid());
        let board_after = session.board().clone();
        let score_after = session.score();
        let ledger_after = *session.ledger();
        for _ in 0..3 {
            prop_assert_eq!(session.resolve(x, y), ShotOutcome::AlreadyShot);
        }
        prop_assert_eq!(session.board(), &board_after);
        prop_assert_eq!(session.score(), score_after);
        prop_assert_eq!(session.ledger(), &ledger_after);
    }

    #[test]
    fn off_board_never_mutates(seed in any::<u64>(), x in 0..64usize, y in 16..64usize, swap in any::<bool>()) {
        let (x, y) = if swap { (y, x) } else { (x, y) };
        let mut session = random_session(seed);
        let board = session.board().clone();
        let ledger = *session.ledger();
        prop_assert_eq!(session.resolve(x, y), ShotOutcome::OutOfBounds);
        prop_assert_eq!(session.board(), &board);
        prop_assert_eq!(session.ledger(), &ledger);
        prop_assert_eq!(session.score(), 0);
    }

    #[test]
    fn score_is_sinks_minus_misses(
        seed in any::<u64>(),
        shots in prop::collection::vec((0..20usize, 0..20usize), 0..200)
    ) {
        let mut session = random_session(seed);
        let mut misses = 0;
        let mut sinks = Vec::new();
        for (x, y) in shots {
            let before = session.score();
            match session.resolve(x, y) {
                ShotOutcome::Miss => {
                    misses += 1;
                    prop_assert_eq!(session.score(), before - 1);
                }
                ShotOutcome::Hit(_) | ShotOutcome::AlreadyShot | ShotOutcome::OutOfBounds => {
                    prop_assert_eq!(session.score(), before);
                }
                ShotOutcome::Sunk(kind) => {
                    prop_assert!(!sinks.contains(&kind), "{} sunk twice", kind);
                    sinks.push(kind);
                    prop_assert_eq!(session.score(), before + kind.points());
                }
            }
        }
        let earned: i32 = sinks.iter().map(|k| k.points()).sum();
        prop_assert_eq!(session.score(), earned - misses);
        for kind in SHIPS {
            prop_assert!(session.ledger().hits(kind) <= kind.length());
            prop_assert_eq!(session.is_sunk(kind), sinks.contains(&kind));
        }
        prop_assert_eq!(session.has_won(), sinks.len() == SHIPS.len());
    }
}
