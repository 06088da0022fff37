use std::{fmt, ops::Index};

use itertools::Itertools;
use rand::Rng;

use crate::{error::BoardError, pattern::Pattern, pos::Position};

/// A fixed-size, row-major grid of tiles. Every coordinate outside the board reads
/// as dead and ignores writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    width: usize,
    height: usize,
    tiles: Vec<TileState>,
}

impl GameBoard {
    pub fn new(width: usize, height: usize) -> Self {
        let tiles = vec![TileState::default(); width * height];
        Self::with_tiles(width, height, tiles)
    }

    /// Copies a row-major initial state into a new board. The state must have exactly
    /// `height` rows of exactly `width` cells each.
    pub fn from_rows<R, T>(
        width: usize,
        height: usize,
        rows: impl IntoIterator<Item = R>,
    ) -> Result<Self, BoardError>
    where
        R: AsRef<[T]>,
        T: Copy + Into<TileState>,
    {
        let mut tiles: Vec<TileState> = Vec::with_capacity(width * height);
        let mut row_count = 0;

        for (row_index, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();

            if row.len() != width {
                return Err(BoardError::RowLengthMismatch {
                    row: row_index,
                    expected: width,
                    actual: row.len(),
                });
            }

            tiles.extend(row.iter().map(|&cell| cell.into()));
            row_count += 1;
        }

        if row_count != height {
            return Err(BoardError::RowCountMismatch {
                expected: height,
                actual: row_count,
            });
        }

        Ok(Self::with_tiles(width, height, tiles))
    }

    pub fn new_random(width: usize, height: usize, alive_cells: usize) -> Result<Self, BoardError> {
        Self::new_random_with(width, height, alive_cells, &mut rand::rng())
    }

    pub fn new_random_with<G>(
        width: usize,
        height: usize,
        alive_cells: usize,
        rng: &mut G,
    ) -> Result<Self, BoardError>
    where
        G: Rng,
    {
        let mut board = Self::new(width, height);

        if alive_cells > board.tiles.len() {
            return Err(BoardError::TooManyAliveCells {
                requested: alive_cells,
                capacity: board.tiles.len(),
            });
        }

        let mut available_board_positions = (0..width)
            .cartesian_product(0..height)
            .map(|(x, y)| Position::new(x as isize, y as isize))
            .collect_vec();

        for _ in 0..alive_cells {
            let chosen_position_index = rng.random_range(0..available_board_positions.len());
            let chosen_position = available_board_positions.swap_remove(chosen_position_index);

            board.set(chosen_position, TileState::Alive);
        }

        Ok(board)
    }

    pub(crate) fn with_tiles(width: usize, height: usize, tiles: Vec<TileState>) -> Self {
        debug_assert_eq!(tiles.len(), width * height);

        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get(index)
    }

    pub fn tile_mut<P>(&mut self, pos: P) -> Option<&mut TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get_mut(index)
    }

    /// Returns the tile at `pos`, or [`TileState::Dead`] outside the board.
    pub fn get<P>(&self, pos: P) -> TileState
    where
        P: Into<Position>,
    {
        self.tile(pos).copied().unwrap_or_default()
    }

    /// Writes the tile at `pos`. Positions outside the board are ignored.
    pub fn set<P, S>(&mut self, pos: P, state: S)
    where
        P: Into<Position>,
        S: Into<TileState>,
    {
        if let Some(tile) = self.tile_mut(pos) {
            *tile = state.into();
        }
    }

    pub fn alive_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_alive()).count()
    }

    pub fn clear(&mut self) {
        self.tiles.fill(TileState::Dead);
    }

    /// Activates every alive marker of `pattern`, shifted by `offset`. Never kills a
    /// tile; markers landing outside the board are dropped.
    pub fn load_pattern<P>(&mut self, pattern: &Pattern, offset: P)
    where
        P: Into<Position>,
    {
        let offset = offset.into();

        for relative_pos in pattern.alive_positions() {
            let pos = offset.offset(relative_pos.x, relative_pos.y);
            self.set(pos, TileState::Alive);
        }
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.index_to_pos(index), tile))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[TileState]> {
        (0..self.height).map(move |y| &self[y])
    }

    pub fn to_rows(&self) -> Vec<Vec<TileState>> {
        self.rows().map(<[TileState]>::to_vec).collect()
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();

        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;

        if x >= self.width {
            return None;
        }

        if y >= self.height {
            return None;
        }

        Some(x + (y * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let y = index / self.width;
        let x = index % self.width;
        Position::new(x as isize, y as isize)
    }
}

impl Index<usize> for GameBoard {
    type Output = [TileState];

    /// Row `y` of the board, so tiles can be read as `board[y][x]`.
    fn index(&self, y: usize) -> &Self::Output {
        assert!(y < self.height, "row {y} out of range for board height {}", self.height);

        let start = y * self.width;
        &self.tiles[start..start + self.width]
    }
}

impl fmt::Display for GameBoard {
    /// Renders the board in pattern template form, `O` alive and `.` dead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }

            for tile in row {
                let symbol = match tile {
                    TileState::Alive => 'O',
                    TileState::Dead => '.',
                };
                write!(f, "{symbol}")?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl TileState {
    pub fn is_alive(self) -> bool {
        self == TileState::Alive
    }

    pub fn as_u8(self) -> u8 {
        match self {
            TileState::Alive => 1,
            TileState::Dead => 0,
        }
    }
}

impl From<bool> for TileState {
    fn from(alive: bool) -> Self {
        if alive {
            TileState::Alive
        } else {
            TileState::Dead
        }
    }
}

impl From<u8> for TileState {
    /// Any non-zero value is alive.
    fn from(value: u8) -> Self {
        TileState::from(value != 0)
    }
}
