use seabattle::{
    board::{CannotPlaceReason, CannotShootReason},
    config::{STANDARD_FLEET, STANDARD_FLEET_DECKS},
    Board, Coordinate, ShotOutcome, Symbol,
};

/// The standard fleet laid out by hand.
fn standard_fleet() -> Vec<((usize, usize), (usize, usize))> {
    vec![
        ((0, 0), (0, 3)),
        ((0, 5), (0, 7)),
        ((2, 0), (4, 0)),
        ((2, 2), (2, 3)),
        ((9, 8), (9, 9)),
        ((6, 4), (7, 4)),
        ((4, 9), (4, 9)),
        ((5, 7), (5, 7)),
        ((7, 0), (7, 0)),
        ((9, 3), (9, 3)),
    ]
}

#[test]
fn scenario_from_one_ship() {
    let mut board = Board::new(vec![((2, 2), (2, 4))]).unwrap();
    let fire = |board: &mut Board, row, col| board.fire(Coordinate::new(row, col)).unwrap();
    let outcomes: Vec<String> = vec![
        fire(&mut board, 2, 2),
        fire(&mut board, 2, 2),
        fire(&mut board, 2, 3),
        fire(&mut board, 2, 4),
        fire(&mut board, 2, 4),
        fire(&mut board, 5, 5),
    ]
    .into_iter()
    .map(|outcome| outcome.to_string())
    .collect();
    assert_eq!(
        outcomes,
        vec![
            "Hit!",
            "The deck has already been struck",
            "Hit!",
            "Sunk!",
            "The ship in this location already drowned",
            "Miss!",
        ]
    );
}

#[test]
fn clearing_the_standard_fleet() {
    let mut board = Board::new(standard_fleet()).unwrap();
    assert_eq!(board.iter_ships().count(), STANDARD_FLEET.len());
    assert_eq!(board.ships_afloat(), STANDARD_FLEET.len());

    let (mut misses, mut hits, mut sunk) = (0, 0, 0);
    for row in 0..10 {
        for col in 0..10 {
            match board.fire(Coordinate::new(row, col)).unwrap() {
                ShotOutcome::Miss => misses += 1,
                ShotOutcome::Hit(_) => hits += 1,
                ShotOutcome::Sunk(_) => sunk += 1,
                other => panic!("unexpected outcome {:?} at ({}, {})", other, row, col),
            }
        }
    }
    assert_eq!(sunk, STANDARD_FLEET.len());
    assert_eq!(hits + sunk, STANDARD_FLEET_DECKS);
    assert_eq!(misses, 100 - STANDARD_FLEET_DECKS);
    assert!(board.defeated());
    assert_eq!(board.ships_afloat(), 0);
}

#[test]
fn rendering_surface() {
    let mut board = Board::new(standard_fleet()).unwrap();
    board.fire((0, 0).into()).unwrap();
    board.fire((7, 0).into()).unwrap();
    board.fire((1, 1).into()).unwrap();

    let rows: Vec<String> = board
        .iter_rows()
        .map(|row| row.map(|cell| cell.symbol().as_char()).collect())
        .collect();
    assert_eq!(rows[0], "*□□□~□□□~~");
    assert_eq!(rows[1], "~~~~~~~~~~");
    assert_eq!(rows[7], "x~~~□~~~~~");

    let cell = board.get_coord((0, 2).into()).unwrap();
    let ship = cell.ship().unwrap();
    assert_eq!(ship.get_deck((0, 2).into()).unwrap().symbol(), Symbol::Intact);
    assert_eq!(ship.start(), Coordinate::new(0, 0));
    assert_eq!(ship.end(), Coordinate::new(0, 3));
    assert!(board.get_coord((10, 0).into()).is_none());
}

#[test]
fn overlapping_fleet_rejected() {
    let mut fleet = standard_fleet();
    fleet.push(((3, 0), (3, 1)));
    let err = Board::new(fleet).unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
    assert_eq!(err.placement(), (Coordinate::new(3, 0), Coordinate::new(3, 1)));
}

#[test]
fn malformed_locations() {
    let mut board = Board::new(standard_fleet()).unwrap();
    for text in &["", "1", "1,2,3", "a,b", "1.5,2"] {
        let err = board.fire_str(text).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::Malformed, "{:?}", text);
        assert_eq!(err.location(), *text);
    }
    assert_eq!(board.fire_str("9,9").unwrap().to_string(), "Hit!");
    assert_eq!(
        board.fire_str("10,9").unwrap_err().reason(),
        CannotShootReason::OutOfBounds
    );
    assert_eq!(
        board.fire_str("18446744073709551616,0").unwrap_err().reason(),
        CannotShootReason::OutOfBounds
    );
}

#[test]
fn extreme_placements_are_out_of_bounds() {
    for &(start, end) in &[
        ((0, 0), (0, usize::MAX)),
        ((usize::MAX, 0), (0, 0)),
        ((5, 5), (5, usize::MAX / 2)),
        ((8, 8), (8, 11)),
    ] {
        let err = Board::new(vec![(start, end)]).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds, "{:?}", (start, end));
        assert_eq!(err.placement(), (start.into(), end.into()));
    }
}
