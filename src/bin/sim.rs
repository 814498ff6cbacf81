#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{Game, GameConfig, Grid, Player};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, Rng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let config = GameConfig::standard();
    let mut g1 = Grid::new(config.grid_size(), Player::new("player1"));
    let mut g2 = Grid::new(config.grid_size(), Player::new("player2"));
    g1.place_fleet_random(&mut rng, config.fleet())
        .map_err(|e| anyhow::anyhow!(e))?;
    g2.place_fleet_random(&mut rng, config.fleet())
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut game = Game::new(g1, g2).map_err(|e| anyhow::anyhow!(e))?;

    while !game.is_over() {
        let size = game.target_grid().size();
        let open: Vec<(u8, u8)> = (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .filter(|&(x, y)| game.is_shootable(x, y))
            .collect();
        let (x, y) = open[rng.random_range(0..open.len())];
        game.fire_shot(x, y).map_err(|e| anyhow::anyhow!(e))?;
        if game.is_over() {
            break;
        }
        game.end_turn().map_err(|e| anyhow::anyhow!(e))?;
    }

    let result = json!({
        "winner": game.winner().map(|p| p.name().to_string()),
        "shots": game.shots_fired(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
