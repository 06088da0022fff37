use std::{io, time::Duration};

use anyhow::{Context, bail};
use itertools::Itertools;
use libgame::{
    Game,
    board::{GameBoard, TileState},
    patterns::NamedPattern,
};
use strum::IntoEnumIterator;

use crate::{State, renderer, ticker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn run_cli(state: &mut State) -> anyhow::Result<()> {
    for line_res in io::stdin().lines() {
        let line = line_res.context("Couldn't read command")?;
        let args = line.split_whitespace();

        match handle_cmd(state, args) {
            Ok(Flow::Continue) => println!("OK"),
            Ok(Flow::Exit) => break,
            Err(e) => eprintln!("! {e:?}"),
        }
    }

    Ok(())
}

pub fn handle_cmd<'a, I>(state: &mut State, mut args: I) -> anyhow::Result<Flow>
where
    I: Iterator<Item = &'a str>,
{
    match args.next().context("No command")? {
        "step" => {
            let times = args.next().unwrap_or("1").parse::<usize>()?;

            state.game.step(times);
            renderer::print(&state.game);
        }

        "run" => {
            let times = args.next().unwrap_or("10").parse::<usize>()?;
            let interval = match args.next() {
                Some(rate) => Duration::from_millis(rate.parse::<u64>()?),
                None => state.config.tick_interval(),
            };

            ticker::run(&mut state.game, times, interval, renderer::print);
        }

        "set" => {
            let (x, y) = parse_coords(&mut args)?;
            let value = args.next().unwrap_or("1").parse::<u8>()?;

            state.game.set_cell(x, y, value);
        }

        "get" => {
            let (x, y) = parse_coords(&mut args)?;

            println!("{}", state.game.get_cell(x, y).as_u8());
        }

        "load" => {
            let name = args.next().context("missing pattern name")?;
            let pattern = name
                .parse::<NamedPattern>()
                .with_context(|| format!("Unknown pattern {name:?}"))?;
            let (x, y) = parse_coords(&mut args)?;

            state.game.load_pattern(pattern, x, y);
        }

        "random" => {
            let alive_count = args
                .next()
                .context("missing alive count")?
                .parse::<usize>()?;

            let (width, height) = (state.game.width(), state.game.height());
            state.game = Game::from_board(GameBoard::new_random(width, height, alive_count)?);
        }

        "clear" => {
            state.game.clear();
        }

        "count" => {
            println!("{}", state.game.cell_count());
        }

        "print" => {
            renderer::print(&state.game);
        }

        "patterns" => {
            println!("{}", NamedPattern::iter().join(" "));
        }

        "exit" => {
            return Ok(Flow::Exit);
        }

        _ => bail!("Unknown command"),
    }

    Ok(Flow::Continue)
}

fn parse_coords<'a, I>(args: &mut I) -> anyhow::Result<(isize, isize)>
where
    I: Iterator<Item = &'a str>,
{
    let x = args.next().context("missing x")?.parse::<isize>()?;
    let y = args.next().context("missing y")?.parse::<isize>()?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn state() -> State {
        let config = Config {
            width: 6,
            height: 6,
            tick_interval_ms: 0,
            patterns: Vec::new(),
        };
        let game = config.build_game().unwrap();
        State { game, config }
    }

    fn cmd(state: &mut State, line: &str) -> anyhow::Result<Flow> {
        handle_cmd(state, line.split_whitespace())
    }

    #[test]
    fn set_step_and_clear() {
        let mut state = state();

        for line in ["set 1 2", "set 2 2 1", "set 3 2"] {
            assert_eq!(cmd(&mut state, line).unwrap(), Flow::Continue);
        }
        assert_eq!(state.game.cell_count(), 3);

        cmd(&mut state, "step").unwrap();
        assert_eq!(state.game.get_cell(2, 1), TileState::Alive);
        assert_eq!(state.game.generation(), 1);

        cmd(&mut state, "clear").unwrap();
        assert_eq!(state.game.cell_count(), 0);
    }

    #[test]
    fn load_and_run() {
        let mut state = state();

        cmd(&mut state, "load toad 1 2").unwrap();
        let initial = state.game.grid().clone();

        cmd(&mut state, "run 2 0").unwrap();
        assert_eq!(state.game.grid(), &initial);
        assert_eq!(state.game.generation(), 2);
    }

    #[test]
    fn random_keeps_board_size() {
        let mut state = state();

        cmd(&mut state, "random 10").unwrap();
        assert_eq!(state.game.cell_count(), 10);
        assert_eq!((state.game.width(), state.game.height()), (6, 6));

        assert!(cmd(&mut state, "random 37").is_err());
    }

    #[test]
    fn bad_input_is_reported() {
        let mut state = state();

        assert!(cmd(&mut state, "").is_err());
        assert!(cmd(&mut state, "fly").is_err());
        assert!(cmd(&mut state, "set 1").is_err());
        assert!(cmd(&mut state, "set x 1").is_err());
        assert!(cmd(&mut state, "load pulsar 0 0").is_err());
    }

    #[test]
    fn exit_stops_the_loop() {
        let mut state = state();
        assert_eq!(cmd(&mut state, "exit").unwrap(), Flow::Exit);
    }
}
