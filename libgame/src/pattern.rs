use crate::pos::Position;

/// A textual pattern template: lines separated by `'\n'`, where `O`, `o` and `*`
/// mark alive tiles and every other character is filler.
///
/// Templates are taken as given. Blank leading or trailing lines are not trimmed and
/// still count towards [`Pattern::height`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern<'a> {
    text: &'a str,
}

impl<'a> Pattern<'a> {
    pub const ALIVE_MARKERS: [char; 3] = ['O', 'o', '*'];

    pub const fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn is_alive_marker(c: char) -> bool {
        Self::ALIVE_MARKERS.contains(&c)
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn lines(self) -> impl Iterator<Item = &'a str> {
        self.text.split('\n')
    }

    pub fn width(&self) -> usize {
        self.lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.lines().count()
    }

    /// Positions of the alive markers relative to the pattern's top-left corner.
    /// Columns count characters, not bytes.
    pub fn alive_positions(self) -> impl Iterator<Item = Position> + 'a {
        self.lines().enumerate().flat_map(|(y, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, c)| Self::is_alive_marker(c))
                .map(move |(x, _)| Position::new(x as isize, y as isize))
        })
    }
}

impl<'a> From<&'a str> for Pattern<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_every_marker_kind() {
        let pattern = Pattern::new("O.o\n.*.\n#x ");

        let positions: Vec<_> = pattern.alive_positions().collect();
        assert_eq!(
            positions,
            vec![Position::new(0, 0), Position::new(2, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn measures_ragged_lines() {
        let pattern = Pattern::new(".O\nOOO.\n");

        assert_eq!(pattern.width(), 4);
        assert_eq!(pattern.height(), 3);
    }

    #[test]
    fn columns_count_characters() {
        let pattern = Pattern::new("é·O");

        assert_eq!(pattern.alive_positions().collect::<Vec<_>>(), vec![Position::new(2, 0)]);
    }

    #[test]
    fn carriage_returns_are_filler() {
        let pattern = Pattern::new("O\r\n.O\r");

        assert_eq!(
            pattern.alive_positions().collect::<Vec<_>>(),
            vec![Position::new(0, 0), Position::new(1, 1)]
        );
    }
}
