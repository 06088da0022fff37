use std::env;

use config::Config;
use libgame::Game;

mod cli;
mod config;
mod renderer;
mod ticker;

pub struct State {
    game: Game,
    config: Config,
}

fn main() -> anyhow::Result<()> {
    let config = match env::args().nth(1) {
        Some(config_path) => Config::load(config_path)?,
        None => Config::default(),
    };

    let game = config.build_game()?;
    let mut state = State { game, config };

    renderer::print(&state.game);
    cli::run_cli(&mut state)
}
