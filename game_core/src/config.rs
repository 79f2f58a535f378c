use crate::{Params, Side};
use glam::Vec2;

/// Keys that move one paddle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub up: String,
    pub down: String,
    pub clamped: bool, // Keep the paddle inside the canvas
}

impl KeyBinding {
    pub fn new(up: &str, down: &str, clamped: bool) -> Self {
        Self {
            up: up.to_string(),
            down: down.to_string(),
            clamped,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_bounce_margin: f32,
    pub left_keys: KeyBinding,
    pub right_keys: KeyBinding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: Params::CANVAS_WIDTH,
            canvas_height: Params::CANVAS_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            ball_bounce_margin: Params::BALL_BOUNCE_MARGIN,
            // The left paddle is not kept on screen; set `clamped` to opt in.
            left_keys: KeyBinding::new("KeyW", "KeyS", false),
            right_keys: KeyBinding::new("ArrowUp", "ArrowDown", true),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key binding for the paddle on `side`
    pub fn keys(&self, side: Side) -> &KeyBinding {
        match side {
            Side::Left => &self.left_keys,
            Side::Right => &self.right_keys,
        }
    }

    /// Get X position (left edge) for paddle based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.canvas_width - (self.paddle_margin + self.paddle_width),
        }
    }

    /// Initial Y position (top edge) of both paddles
    pub fn paddle_spawn_y(&self) -> f32 {
        self.canvas_height / 2.0
    }

    /// Lowest allowed top edge for a clamped paddle
    pub fn max_paddle_y(&self) -> f32 {
        self.canvas_height - self.paddle_height
    }

    /// Clamp paddle Y to canvas bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }
}
