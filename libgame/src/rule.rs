//! Conway's B3/S23 rule.

use crate::board::TileState;

/// Alive-neighbor counts that bring a dead tile to life.
pub const BIRTH: &[usize] = &[3];

/// Alive-neighbor counts that keep an alive tile alive.
pub const SURVIVE: &[usize] = &[2, 3];

pub fn next_state(tile: TileState, alive_neighbor_count: usize) -> TileState {
    let alive = match tile {
        TileState::Alive => SURVIVE.contains(&alive_neighbor_count),
        TileState::Dead => BIRTH.contains(&alive_neighbor_count),
    };

    TileState::from(alive)
}
