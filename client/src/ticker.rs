use std::time::{Duration, Instant};

use libgame::Game;

/// Paces a loop so that successive `sleep` calls return at least `target_delta_time`
/// apart.
pub struct Sleeper {
    pub target_delta_time: Duration,
    pub last_instant: Option<Instant>,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    /// Returns whether it actually slept. The first call never does.
    pub fn sleep(&mut self) -> bool {
        let slept = if let Some(last_instant) = self.last_instant {
            let delta_time = Instant::now() - last_instant;

            if self.target_delta_time > delta_time {
                spin_sleep::sleep(self.target_delta_time - delta_time);
                true
            } else {
                false
            }
        } else {
            false
        };

        self.last_instant = Some(Instant::now());
        slept
    }
}

/// Ticks `game` `times` times, calling `on_tick` after each generation and keeping
/// generations at least `interval` apart.
pub fn run<F>(game: &mut Game, times: usize, interval: Duration, mut on_tick: F)
where
    F: FnMut(&Game),
{
    let mut sleeper = Sleeper::new(interval);

    for _ in 0..times {
        sleeper.sleep();
        game.tick();
        on_tick(game);
    }
}
