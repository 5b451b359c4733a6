/// What a single one-second tick did to a [`Countdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The countdown is not running; nothing changed.
    Idle,
    /// Still running with this many seconds left.
    Running(u32),
    /// Reached zero on this tick. Reported once, then the countdown stops.
    Expired,
}

/// Per-question countdown with one-second granularity.
///
/// The owner drives it with [`Countdown::tick`] once per second. A stopped or
/// cancelled countdown ignores ticks, so a stale heartbeat can never expire a
/// question twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    limit_secs: u32,
    remaining_secs: u32,
    running: bool,
}

impl Countdown {
    #[must_use]
    pub fn new(limit_secs: u32) -> Self {
        Self {
            limit_secs,
            remaining_secs: limit_secs,
            running: false,
        }
    }

    /// (Re)arm at the full limit. Any previous run is discarded.
    pub fn start(&mut self) {
        self.remaining_secs = self.limit_secs;
        self.running = true;
    }

    pub fn cancel(&mut self) {
        self.running = false;
    }

    /// Cancel and restore the full limit for display.
    pub fn reset(&mut self) {
        self.cancel();
        self.remaining_secs = self.limit_secs;
    }

    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.running = false;
            return Tick::Expired;
        }
        Tick::Running(self.remaining_secs)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }
}
