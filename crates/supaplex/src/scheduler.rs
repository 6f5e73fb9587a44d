//! Fixed-rate driver: one engine tick per display refresh.
//!
//! The loop waits for the next clock boundary, samples input, ticks and hands
//! the frame to a presenter. A tick that runs late is not caught up: the next
//! one starts at once and the schedule restarts from there.

use std::thread;
use std::time::{Duration, Instant};

use crate::assets::AssetTables;
use crate::engine::Engine;
use crate::input::Buttons;
use crate::render::RenderCommands;

/// Display refresh rate of the original hardware.
pub const REFRESH_HZ: f64 = 59.7275;

/// Source of the periodic timing signal.
pub trait Clock {
    /// Block until the next refresh boundary.
    fn wait_for_refresh(&mut self);
}

/// Button state for the coming tick, or `None` once the host wants to stop.
pub trait InputSource {
    fn poll(&mut self) -> Option<Buttons>;
}

/// Puts a finished frame on an actual display.
pub trait Presenter {
    /// Upload graphics once, before the first frame.
    fn load_assets(&mut self, assets: &AssetTables);

    fn present(&mut self, frame: &RenderCommands);
}

/// Sleeps until fixed deadlines derived from a refresh period.
#[derive(Debug)]
pub struct FixedRateClock {
    period: Duration,
    next: Option<Instant>,
}

impl FixedRateClock {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    #[must_use]
    pub fn from_hz(hz: f64) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / hz))
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Default for FixedRateClock {
    fn default() -> Self {
        Self::from_hz(REFRESH_HZ)
    }
}

impl Clock for FixedRateClock {
    fn wait_for_refresh(&mut self) {
        let now = Instant::now();
        let deadline = match self.next {
            Some(deadline) if deadline > now => deadline,
            Some(deadline) => {
                let late = now - deadline;
                if late > self.period {
                    log::warn!("tick overran refresh period by {late:?}");
                }
                // Missed boundaries are dropped, not replayed.
                now
            }
            None => now,
        };
        if deadline > now {
            thread::sleep(deadline - now);
        }
        self.next = Some(deadline + self.period);
    }
}

/// Drive `engine` until `input` reports shutdown. Returns the number of
/// ticks run.
pub fn run<C, I, P>(
    engine: &mut Engine,
    assets: &AssetTables,
    clock: &mut C,
    input: &mut I,
    presenter: &mut P,
) -> u64
where
    C: Clock,
    I: InputSource,
    P: Presenter,
{
    presenter.load_assets(assets);
    log::debug!("scheduler started on level {}", engine.current_level());

    let mut ticks = 0;
    loop {
        clock.wait_for_refresh();
        let Some(buttons) = input.poll() else {
            break;
        };
        presenter.present(engine.tick(buttons));
        ticks += 1;
    }

    log::debug!("scheduler stopped after {ticks} ticks");
    ticks
}
