use salvo::{
    render_board, Board, BoardError, Coordinate, Orientation, Placement, ShipKind, Square,
    Symbol, BOARD_SIZE,
};

fn patrol_boat() -> Placement {
    Placement::new(
        ShipKind::PatrolBoat,
        Coordinate::new(3, 4),
        Orientation::Horizontal,
    )
}

#[test]
fn test_get_set_bounds() {
    let mut board = Board::new();
    assert_eq!(board.get(0, 0).unwrap(), Square::EMPTY);
    assert_eq!(
        board.get(BOARD_SIZE, 0).unwrap_err(),
        BoardError::OutOfBounds { x: 16, y: 0 }
    );
    assert_eq!(
        board.set(0, BOARD_SIZE, Square::EMPTY).unwrap_err(),
        BoardError::OutOfBounds { x: 0, y: 16 }
    );

    let sq = Square::ship(ShipKind::Cruiser);
    board.set(15, 15, sq).unwrap();
    assert_eq!(board.get(15, 15).unwrap(), sq);
}

#[test]
fn test_place_marks_run() {
    let mut board = Board::new();
    board.place(patrol_boat()).unwrap();

    for x in 3..5 {
        let sq = board.get(x, 4).unwrap();
        assert!(sq.has_ship());
        assert!(!sq.been_hit);
        assert_eq!(sq.ship_kind, Some(ShipKind::PatrolBoat));
    }
    assert!(!board.get(5, 4).unwrap().has_ship());
    assert!(!board.get(3, 5).unwrap().has_ship());
    assert_eq!(board.count_kind(ShipKind::PatrolBoat), 2);
    assert_eq!(board.placement(ShipKind::PatrolBoat), Some(patrol_boat()));
}

#[test]
fn test_place_vertical_cells() {
    let p = Placement::new(ShipKind::Battleship, Coordinate::new(7, 2), Orientation::Vertical);
    let cells: Vec<_> = p.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(7, 2),
            Coordinate::new(7, 3),
            Coordinate::new(7, 4),
            Coordinate::new(7, 5),
        ]
    );
}

#[test]
fn test_place_rejects_overlap_and_duplicates() {
    let mut board = Board::new();
    board.place(patrol_boat()).unwrap();

    let crossing = Placement::new(ShipKind::Cruiser, Coordinate::new(4, 2), Orientation::Vertical);
    assert_eq!(board.place(crossing).unwrap_err(), BoardError::ShipOverlaps);
    assert_eq!(board.count_kind(ShipKind::Cruiser), 0);

    let again = Placement::new(ShipKind::PatrolBoat, Coordinate::new(0, 0), Orientation::Vertical);
    assert_eq!(board.place(again).unwrap_err(), BoardError::ShipAlreadyPlaced);
}

#[test]
fn test_place_rejects_out_of_bounds() {
    let mut board = Board::new();
    let off = Placement::new(
        ShipKind::AircraftCarrier,
        Coordinate::new(12, 0),
        Orientation::Horizontal,
    );
    assert_eq!(board.place(off).unwrap_err(), BoardError::ShipOutOfBounds);

    let edge = Placement::new(
        ShipKind::AircraftCarrier,
        Coordinate::new(11, 15),
        Orientation::Horizontal,
    );
    board.place(edge).unwrap();
    assert!(board.get(15, 15).unwrap().has_ship());
}

#[test]
fn test_render_symbols() {
    let mut board = Board::new();
    board.place(patrol_boat()).unwrap();
    let mut sq = board.get(3, 4).unwrap();
    sq.been_hit = true;
    board.set(3, 4, sq).unwrap();
    let mut water = board.get(0, 0).unwrap();
    water.been_hit = true;
    board.set(0, 0, water).unwrap();

    let revealed = render_board(&board, true);
    let rows: Vec<&str> = revealed.lines().collect();
    assert_eq!(rows.len(), BOARD_SIZE);
    assert_eq!(rows[0], "X . . . . . . . . . . . . . . .");
    assert_eq!(rows[4], ". . . X S . . . . . . . . . . .");

    let hidden = board.render(false);
    assert_eq!(hidden.lines().nth(4), Some(". . . X . . . . . . . . . . . ."));
    assert!(!hidden.contains(Symbol::Ship.as_char()));
}
