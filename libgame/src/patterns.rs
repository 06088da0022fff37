//! Well-known pattern templates, already trimmed for [`Pattern`].

use strum::{Display, EnumIter, EnumString};

use crate::pattern::Pattern;

/// Period 2 oscillator.
pub const BLINKER: &str = "...\nOOO\n...";

/// Diagonal spaceship, travels one tile down and right every 4 generations.
pub const GLIDER: &str = ".O.\n..O\nOOO";

/// Still life.
pub const BLOCK: &str = "OO\nOO";

/// Period 2 oscillator.
pub const TOAD: &str = ".OOO\nOOO.";

/// Period 2 oscillator.
pub const BEACON: &str = "OO..\nOO..\n..OO\n..OO";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NamedPattern {
    Blinker,
    Glider,
    Block,
    Toad,
    Beacon,
}

impl NamedPattern {
    pub fn template(self) -> &'static str {
        match self {
            NamedPattern::Blinker => BLINKER,
            NamedPattern::Glider => GLIDER,
            NamedPattern::Block => BLOCK,
            NamedPattern::Toad => TOAD,
            NamedPattern::Beacon => BEACON,
        }
    }

    pub fn pattern(self) -> Pattern<'static> {
        Pattern::new(self.template())
    }
}

impl From<NamedPattern> for Pattern<'static> {
    fn from(named: NamedPattern) -> Self {
        named.pattern()
    }
}
