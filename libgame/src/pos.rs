/// A cell coordinate. Signed so that positions left of or above the board can be
/// expressed; the board rejects them in its bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: isize,
    pub y: isize,
}

impl Position {
    pub fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: isize, dy: isize) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<[isize; 2]> for Position {
    fn from(value: [isize; 2]) -> Self {
        Self {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<(isize, isize)> for Position {
    fn from((x, y): (isize, isize)) -> Self {
        Self { x, y }
    }
}

impl From<Position> for [isize; 2] {
    fn from(value: Position) -> Self {
        [value.x, value.y]
    }
}
