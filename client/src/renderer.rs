use colored::Colorize;
use libgame::{Game, board::TileState};

pub fn header(game: &Game) -> String {
    format!(
        "generation {} | alive {}",
        game.generation(),
        game.cell_count()
    )
}

pub fn render(game: &Game) -> String {
    let mut rendered = header(game).bold().to_string();

    for row in game.grid().rows() {
        rendered.push('\n');

        for tile in row {
            let symbol = match tile {
                TileState::Alive => "O".bright_green(),
                TileState::Dead => ".".bright_black(),
            };
            rendered.push_str(&symbol.to_string());
        }
    }

    rendered
}

pub fn print(game: &Game) {
    println!("{}", render(game));
}
