#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, standard_fleet, ui, Game, GameConfig, Grid, Orientation, Player, ShipType,
    ShotOutcome, STANDARD_GRID_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, Write};

#[derive(Parser)]
#[command(author, version, about = "Hot-seat grid combat for two players", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Name of the player who shoots first.
    #[arg(long, default_value = "Player 1")]
    player1: String,
    /// Name of the second player.
    #[arg(long, default_value = "Player 2")]
    player2: String,
    /// Grid dimension; columns stay single letters up to 26.
    #[arg(long, default_value_t = STANDARD_GRID_SIZE, value_parser = clap::value_parser!(u8).range(1..=26))]
    grid_size: u8,
    /// Place both fleets randomly instead of prompting.
    #[arg(long)]
    auto_place: bool,
    /// Fix the RNG seed for reproducible placement (e.g., --seed 12345)
    #[arg(long)]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn prompt(msg: &str) -> anyhow::Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(feature = "std")]
fn place_fleet(grid: &mut Grid, fleet: &[ShipType], rng: &mut SmallRng) -> anyhow::Result<()> {
    println!(
        "\n{}: place your ships (e.g. B4 H). Press enter for random placement.",
        grid.player().name()
    );
    for class in fleet {
        loop {
            ui::print_own_view(grid);
            let line = prompt(&format!(
                "Place {} (length {}): ",
                class.name(),
                class.length()
            ))?;
            if line.is_empty() {
                let (x, y, o) = grid
                    .random_placement(rng, class)
                    .map_err(|e| anyhow::anyhow!(e))?;
                grid.place_ship(class.clone(), x, y, o)
                    .map_err(|e| anyhow::anyhow!(e))?;
                break;
            }
            let mut parts = line.split_whitespace();
            let coord = parts.next().and_then(ui::parse_coord);
            let orient = parts.next().and_then(|p| p.chars().next()).unwrap_or('H');
            match coord {
                Some((x, y)) => {
                    let o = if orient == 'v' || orient == 'V' {
                        Orientation::Vertical
                    } else {
                        Orientation::Horizontal
                    };
                    match grid.place_ship(class.clone(), x, y, o) {
                        Ok(()) => break,
                        Err(e) => println!("Error: {}", e),
                    }
                }
                None => println!("Invalid input"),
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config =
        GameConfig::new(cli.grid_size, standard_fleet()).map_err(|e| anyhow::anyhow!(e))?;

    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut grid1 = Grid::new(config.grid_size(), Player::new(cli.player1));
    let mut grid2 = Grid::new(config.grid_size(), Player::new(cli.player2));

    if cli.auto_place {
        grid1
            .place_fleet_random(&mut rng, config.fleet())
            .map_err(|e| anyhow::anyhow!(e))?;
        grid2
            .place_fleet_random(&mut rng, config.fleet())
            .map_err(|e| anyhow::anyhow!(e))?;
    } else {
        place_fleet(&mut grid1, config.fleet(), &mut rng)?;
        place_fleet(&mut grid2, config.fleet(), &mut rng)?;
    }

    let mut game = Game::new(grid1, grid2).map_err(|e| anyhow::anyhow!(e))?;

    loop {
        println!("\n=== {}'s turn ===", game.active_player().name());
        println!("Target grid ({}):", game.opponent().name());
        ui::print_target_view(game.target_grid());

        let (x, y) = loop {
            let line = prompt("Fire at: ")?;
            match ui::parse_coord(&line) {
                Some((x, y)) if game.is_shootable(x, y) => break (x, y),
                Some(_) => println!("That cell is out of range or already shot."),
                None => println!("Invalid coordinate"),
            }
        };

        let outcome = game.fire_shot(x, y).map_err(|e| anyhow::anyhow!(e))?;
        match &outcome {
            ShotOutcome::Miss => println!("{}: miss.", ui::coord_to_string(x, y)),
            ShotOutcome::Hit => println!("{}: hit!", ui::coord_to_string(x, y)),
            ShotOutcome::Sunk(ship) => {
                println!("{}: you sunk the {}!", ui::coord_to_string(x, y), ship)
            }
        }
        if let Some(notice) = game.sunk_notice() {
            println!("({})", notice);
        }

        if game.is_over() {
            break;
        }
        game.end_turn().map_err(|e| anyhow::anyhow!(e))?;
        prompt(&format!(
            "Pass to {} and press enter...",
            game.active_player().name()
        ))?;
    }

    if let Some(winner) = game.winner() {
        println!("\n{} wins after {} shots!", winner.name(), game.shots_fired());
    }
    Ok(())
}
