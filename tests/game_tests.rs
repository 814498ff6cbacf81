use broadside::{Game, GameError, Grid, Orientation, Player, ShipType, ShotOutcome, TurnState};

fn one_ship_grid(name: &str) -> Grid {
    let mut grid = Grid::new(10, Player::new(name));
    grid.place_ship(ShipType::new("Cruiser", 3), 2, 2, Orientation::Horizontal)
        .unwrap();
    grid
}

fn two_ship_grid(name: &str) -> Grid {
    let mut grid = Grid::new(10, Player::new(name));
    grid.place_ship(ShipType::new("Cruiser", 3), 2, 2, Orientation::Horizontal)
        .unwrap();
    grid.place_ship(ShipType::new("Destroyer", 2), 0, 5, Orientation::Vertical)
        .unwrap();
    grid
}

#[test]
fn match_requires_placed_fleets() {
    let empty = Grid::new(10, Player::new("Ada"));
    let ready = one_ship_grid("Grace");
    assert_eq!(Game::new(empty, ready).unwrap_err(), GameError::FleetNotPlaced);
}

#[test]
fn first_player_starts_active() {
    let game = Game::new(one_ship_grid("Ada"), one_ship_grid("Grace")).unwrap();
    assert_eq!(game.active_player().name(), "Ada");
    assert_eq!(game.opponent().name(), "Grace");
    assert!(game.active_grid().is_active());
    assert!(!game.target_grid().is_active());
    assert_eq!(game.turn_state(), TurnState::AwaitingShot);
}

#[test]
fn one_shot_per_turn() {
    let mut game = Game::new(one_ship_grid("Ada"), one_ship_grid("Grace")).unwrap();

    // a turn cannot end before its shot
    assert_eq!(game.end_turn().unwrap_err(), GameError::IllegalTurn);

    game.fire_shot(0, 0).unwrap();
    assert_eq!(game.turn_state(), TurnState::ShotResolved);
    assert_eq!(game.fire_shot(0, 1).unwrap_err(), GameError::IllegalTurn);

    game.end_turn().unwrap();
    game.fire_shot(0, 0).unwrap();
}

#[test]
fn end_turn_swaps_active_flags() {
    let mut game = Game::new(one_ship_grid("Ada"), one_ship_grid("Grace")).unwrap();
    game.fire_shot(0, 0).unwrap();
    game.end_turn().unwrap();

    assert_eq!(game.active_player().name(), "Grace");
    assert_eq!(game.opponent().name(), "Ada");
    assert!(game.active_grid().is_active());
    assert!(!game.target_grid().is_active());
    assert_eq!(game.turn_state(), TurnState::AwaitingShot);
}

#[test]
fn is_shootable_tracks_viewability_and_bounds() {
    let mut game = Game::new(one_ship_grid("Ada"), one_ship_grid("Grace")).unwrap();
    assert!(game.is_shootable(4, 4));
    assert!(!game.is_shootable(10, 4));

    game.fire_shot(4, 4).unwrap();
    assert!(!game.is_shootable(4, 4));

    // the same coordinate is fresh on the other player's target grid
    game.end_turn().unwrap();
    assert!(game.is_shootable(4, 4));
}

#[test]
fn sunk_notice_composed_and_cleared() {
    let mut game = Game::new(two_ship_grid("Ada"), two_ship_grid("Grace")).unwrap();

    game.fire_shot(0, 5).unwrap();
    assert!(game.sunk_notice().is_none());
    game.end_turn().unwrap();

    game.fire_shot(9, 9).unwrap();
    game.end_turn().unwrap();

    let outcome = game.fire_shot(0, 6).unwrap();
    assert_eq!(outcome, ShotOutcome::Sunk("Destroyer".to_string()));
    assert_eq!(game.sunk_notice(), Some("Ada has sunk your Destroyer"));
    assert!(!game.is_over());

    game.end_turn().unwrap();
    assert!(game.sunk_notice().is_none());
}

#[test]
fn win_on_last_sink() {
    let mut game = Game::new(one_ship_grid("Ada"), one_ship_grid("Grace")).unwrap();

    game.fire_shot(2, 2).unwrap();
    game.end_turn().unwrap();
    game.fire_shot(9, 9).unwrap();
    game.end_turn().unwrap();
    game.fire_shot(3, 2).unwrap();
    game.end_turn().unwrap();
    game.fire_shot(9, 8).unwrap();
    game.end_turn().unwrap();

    let outcome = game.fire_shot(4, 2).unwrap();
    assert!(matches!(outcome, ShotOutcome::Sunk(_)));
    assert!(game.is_over());
    assert_eq!(game.winner().map(|p| p.name()), Some("Ada"));
    assert!(!game.target_grid().ships_remaining());
    assert_eq!(game.shots_fired(), 5);

    // terminal state rejects everything
    assert_eq!(game.fire_shot(0, 0).unwrap_err(), GameError::MatchOver);
    assert_eq!(game.end_turn().unwrap_err(), GameError::MatchOver);
    assert!(!game.is_shootable(0, 0));
}

#[test]
fn scripted_match_classifies_every_shot() {
    // 10x10, one 3-segment ship per side, head at (2, 2) running along x.
    let mut game = Game::new(one_ship_grid("Ada"), one_ship_grid("Grace")).unwrap();

    assert_eq!(game.fire_shot(2, 2).unwrap(), ShotOutcome::Hit);
    game.end_turn().unwrap();
    assert_eq!(game.fire_shot(5, 5).unwrap(), ShotOutcome::Miss);
    game.end_turn().unwrap();
    assert_eq!(game.fire_shot(3, 2).unwrap(), ShotOutcome::Hit);
    game.end_turn().unwrap();
    assert_eq!(game.fire_shot(6, 6).unwrap(), ShotOutcome::Miss);
    game.end_turn().unwrap();
    assert_eq!(
        game.fire_shot(4, 2).unwrap(),
        ShotOutcome::Sunk("Cruiser".to_string())
    );

    assert!(!game.target_grid().ships_remaining());
    assert_eq!(game.winner().map(|p| p.name()), Some("Ada"));
}
