use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{
    Board, BoardError, GameSession, Orientation, ShipKind, ShipPlacer, Square, BOARD_SIZE,
    SHIPS, TOTAL_SHIP_CELLS,
};

#[test]
fn test_place_all_fills_catalog() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    ShipPlacer::default().place_all(&mut rng, &mut board).unwrap();

    assert!(board.fully_placed());
    for kind in SHIPS {
        assert_eq!(board.count_kind(kind), kind.length(), "{}", kind);
    }
    assert_eq!(
        board.ship_cells(),
        TOTAL_SHIP_CELLS,
        "all ships should be placed without overlap"
    );
    assert_eq!(board.shots_taken(), 0);
}

#[test]
fn test_same_seed_same_fleet() {
    let placer = ShipPlacer::default();
    let a = GameSession::random(&placer, &mut SmallRng::seed_from_u64(7)).unwrap();
    let b = GameSession::random(&placer, &mut SmallRng::seed_from_u64(7)).unwrap();
    for kind in SHIPS {
        assert_eq!(a.board().placement(kind), b.board().placement(kind));
    }
    assert_eq!(a.board(), b.board());
}

#[test]
fn test_zero_attempts_is_infeasible() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(1);
    let err = ShipPlacer::new(0).place_all(&mut rng, &mut board).unwrap_err();
    assert_eq!(
        err,
        BoardError::PlacementInfeasible {
            kind: ShipKind::AircraftCarrier,
            attempts: 0
        }
    );
    assert_eq!(board.ship_cells(), 0);
}

#[test]
fn test_crowded_board_is_infeasible() {
    let mut board = Board::new();
    for x in 0..BOARD_SIZE {
        for y in 0..BOARD_SIZE {
            board.set(x, y, Square::ship(ShipKind::Cruiser)).unwrap();
        }
    }
    let mut rng = SmallRng::seed_from_u64(3);
    let err = ShipPlacer::new(50)
        .random_placement(&mut rng, &board, ShipKind::PatrolBoat)
        .unwrap_err();
    assert_eq!(
        err,
        BoardError::PlacementInfeasible {
            kind: ShipKind::PatrolBoat,
            attempts: 50
        }
    );
}

#[test]
fn test_candidate_stays_inside_axis_range() {
    let mut rng = SmallRng::seed_from_u64(99);
    for _ in 0..2000 {
        for kind in SHIPS {
            let p = ShipPlacer::candidate(&mut rng, kind);
            assert!(p.fits());
            let along = match p.orientation {
                Orientation::Horizontal => p.origin.x,
                Orientation::Vertical => p.origin.y,
            };
            assert!(along < BOARD_SIZE - kind.length());
        }
    }
}

#[test]
fn test_candidate_draws_cover_both_orientations() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut horizontal = 0;
    let mut vertical = 0;
    let mut max_across = 0;
    let mut max_along = 0;
    for _ in 0..4000 {
        let p = ShipPlacer::candidate(&mut rng, ShipKind::PatrolBoat);
        let (along, across) = match p.orientation {
            Orientation::Horizontal => {
                horizontal += 1;
                (p.origin.x, p.origin.y)
            }
            Orientation::Vertical => {
                vertical += 1;
                (p.origin.y, p.origin.x)
            }
        };
        max_along = max_along.max(along);
        max_across = max_across.max(across);
    }
    assert!(horizontal > 1500, "horizontal drawn {} times", horizontal);
    assert!(vertical > 1500, "vertical drawn {} times", vertical);
    assert_eq!(max_across, BOARD_SIZE - 1);
    assert_eq!(max_along, BOARD_SIZE - ShipKind::PatrolBoat.length() - 1);
}
