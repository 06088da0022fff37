use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use libgame::{Game, patterns::NamedPattern};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub tick_interval_ms: u64, // Pause between generations of the run command.
    pub patterns: Vec<PatternPlacement>,
}

/// A named pattern loaded at startup, offset by `x` and `y`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PatternPlacement {
    pub name: String,
    pub x: isize,
    pub y: isize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            tick_interval_ms: 200,
            patterns: Vec::new(),
        }
    }
}

impl Config {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        Self::parse(&config_serialized)
    }

    pub fn parse(config_serialized: &[u8]) -> anyhow::Result<Self> {
        let config: Self =
            serde_json::from_slice(config_serialized).context("Couldn't deserialize config")?;

        for placement in &config.patterns {
            placement.named_pattern()?;
        }

        Ok(config)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn build_game(&self) -> anyhow::Result<Game> {
        let mut game = Game::new(self.width, self.height);

        for placement in &self.patterns {
            game.load_pattern(placement.named_pattern()?, placement.x, placement.y);
        }

        Ok(game)
    }
}

impl PatternPlacement {
    pub fn named_pattern(&self) -> anyhow::Result<NamedPattern> {
        self.name
            .parse()
            .with_context(|| format!("Unknown pattern {:?}", self.name))
    }
}
