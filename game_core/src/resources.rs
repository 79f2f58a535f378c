use crate::Params;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,   // Nominal duration of one tick
    pub now: f32,  // Sum of nominal tick durations
    pub tick: u64, // Ticks run so far
}

impl Time {
    pub fn new(dt: f32) -> Self {
        Self { dt, now: 0.0, tick: 0 }
    }

    /// Advance by one fixed tick. No wall-clock compensation.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.now += self.dt;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new(Params::FIXED_DT)
    }
}

/// Score shown on screen. Nothing ever awards a point, so it stays 0-0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_flipped_x: bool, // Ball reversed its horizontal direction
    pub ball_flipped_y: bool, // Ball reversed its vertical direction
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_flipped_x = false;
        self.ball_flipped_y = false;
    }
}
