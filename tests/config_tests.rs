use broadside::{standard_fleet, GameConfig, GameError, ShipType};

#[test]
fn standard_config() {
    let config = GameConfig::standard();
    assert_eq!(config.grid_size(), 10);
    assert_eq!(config.fleet().len(), 5);
    assert_eq!(config.total_segments(), 17);
}

#[test]
fn rejects_unplayable_setups() {
    assert!(matches!(
        GameConfig::new(0, standard_fleet()).unwrap_err(),
        GameError::InvalidConfig(_)
    ));
    assert!(matches!(
        GameConfig::new(10, vec![]).unwrap_err(),
        GameError::InvalidConfig(_)
    ));
    assert!(matches!(
        GameConfig::new(4, vec![ShipType::new("Leviathan", 9)]).unwrap_err(),
        GameError::InvalidConfig(_)
    ));
    assert!(matches!(
        GameConfig::new(8, vec![ShipType::new("Raft", 0)]).unwrap_err(),
        GameError::InvalidConfig(_)
    ));
}

#[test]
fn custom_roster_accepted() {
    let config = GameConfig::new(6, vec![ShipType::new("Sloop", 2), ShipType::new("Brig", 3)])
        .unwrap();
    assert_eq!(config.grid_size(), 6);
    assert_eq!(config.total_segments(), 5);
}
