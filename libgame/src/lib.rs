use board::{GameBoard, TileState};
use error::BoardError;
use pattern::Pattern;
use pos::Position;

pub mod board;
pub mod error;
pub mod pattern;
pub mod patterns;
pub mod pos;
pub mod rule;

/// A Game of Life simulation on a fixed-size board with hard edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: GameBoard,
    generation: u64,
}

impl Game {
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_board(GameBoard::new(width, height))
    }

    /// Starts from a copy of `rows`, which must be exactly `height` rows of `width` cells.
    pub fn with_initial_state<R, T>(
        width: usize,
        height: usize,
        rows: impl IntoIterator<Item = R>,
    ) -> Result<Self, BoardError>
    where
        R: AsRef<[T]>,
        T: Copy + Into<TileState>,
    {
        GameBoard::from_rows(width, height, rows).map(Self::from_board)
    }

    pub fn from_board(board: GameBoard) -> Self {
        Self {
            board,
            generation: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_cell<S>(&mut self, x: isize, y: isize, state: S)
    where
        S: Into<TileState>,
    {
        self.board.set(Position::new(x, y), state);
    }

    pub fn get_cell(&self, x: isize, y: isize) -> TileState {
        self.board.get(Position::new(x, y))
    }

    /// The live board. Rows index first, so a tile reads as `game.grid()[y][x]`.
    pub fn grid(&self) -> &GameBoard {
        &self.board
    }

    pub fn cell_count(&self) -> usize {
        self.board.alive_count()
    }

    /// Kills every tile and resets the generation counter.
    pub fn clear(&mut self) {
        self.board.clear();
        self.generation = 0;
    }

    pub fn load_pattern<'a, P>(&mut self, pattern: P, offset_x: isize, offset_y: isize)
    where
        P: Into<Pattern<'a>>,
    {
        self.board
            .load_pattern(&pattern.into(), Position::new(offset_x, offset_y));
    }

    /// Advances the board by one generation.
    ///
    /// Every next state is computed from the untouched current board into a fresh tile
    /// vector, which then replaces the board as a whole. Updating tiles in place would
    /// let already advanced neighbors leak into the counts of the tiles after them.
    pub fn tick(&mut self) {
        let next_tiles = self
            .board
            .enumerate_tiles()
            .map(|(tile_pos, tile)| self.tick_tile(tile_pos, *tile))
            .collect();

        self.board = GameBoard::with_tiles(self.board.width(), self.board.height(), next_tiles);
        self.generation += 1;
    }

    pub fn step(&mut self, times: usize) {
        for _ in 0..times {
            self.tick();
        }
    }

    /// Counts the alive tiles among the up to 8 neighbors of `tile_pos` that lie on
    /// the board.
    pub fn alive_neighbors<P>(&self, tile_pos: P) -> usize
    where
        P: Into<Position>,
    {
        let tile_pos = tile_pos.into();

        self.tile_neighbors(tile_pos)
            .filter(|neighbor| neighbor.is_alive())
            .count()
    }

    fn tick_tile(&self, tile_pos: Position, tile: TileState) -> TileState {
        rule::next_state(tile, self.alive_neighbors(tile_pos))
    }

    fn tile_neighbors(&self, tile_pos: Position) -> impl Iterator<Item = &TileState> {
        const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
            [-1, -1],
            [-1, 0],
            [-1, 1],
            [0, -1],
            [0, 1],
            [1, -1],
            [1, 0],
            [1, 1],
        ];

        NEIGHBOR_RELATIVE_POSITIONS.iter().filter_map(move |rel_pos| {
            let pos = tile_pos.offset(rel_pos[0], rel_pos[1]);
            self.board.tile(pos)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_and_edge_tiles_have_fewer_neighbors() {
        let game = Game::with_initial_state(3, 3, [[1u8; 3]; 3]).unwrap();

        assert_eq!(game.alive_neighbors(Position::new(0, 0)), 3);
        assert_eq!(game.alive_neighbors(Position::new(1, 0)), 5);
        assert_eq!(game.alive_neighbors(Position::new(1, 1)), 8);
        assert_eq!(game.alive_neighbors(Position::new(-1, -1)), 1);
        assert_eq!(game.alive_neighbors(Position::new(5, 5)), 0);
    }

    #[test]
    fn neighbors_do_not_wrap_around() {
        let mut game = Game::new(5, 5);
        game.set_cell(0, 2, 1u8);
        game.set_cell(4, 1, 1u8);
        game.set_cell(4, 3, 1u8);

        // (4, 2) would be born if the left column wrapped onto the right one.
        assert_eq!(game.alive_neighbors(Position::new(4, 2)), 2);
        game.tick();
        assert_eq!(game.get_cell(4, 2), TileState::Dead);
    }

    #[test]
    fn generation_counts_ticks_until_cleared() {
        let mut game = Game::new(4, 4);
        game.step(3);
        assert_eq!(game.generation(), 3);

        game.clear();
        assert_eq!(game.generation(), 0);
    }

    #[test]
    fn full_board_keeps_only_its_corners() {
        let mut game = Game::with_initial_state(3, 3, [[true; 3]; 3]).unwrap();
        game.tick();

        assert_eq!(game.grid().to_string(), "O.O\n...\nO.O");
    }
}
