use clap::Parser;
use log::info;

use revolver::cli::Args;
use revolver::game_engine::draw::SeededDraws;
use revolver::services::game::Game;
use revolver::GameController;

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.default_log_level()),
    )
    .init();

    println!("*** REVOLVER ***");
    println!();

    let draws = match args.seed {
        Some(seed) => {
            info!("using seed {}", seed);
            SeededDraws::new(seed)
        }
        None => SeededDraws::from_entropy(),
    };

    let mut game = Game::new(GameController::with_draws(draws));
    if let Err(e) = game.run(args.players) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
