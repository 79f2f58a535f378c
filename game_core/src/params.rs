/// Fixed tuning parameters for the canvas Pong loop (pixels, ticks)
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 35.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // Gap between canvas edge and paddle
    pub const PADDLE_SPEED: f32 = 5.0; // pixels per tick

    // Ball
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_SPEED: f32 = 10.0; // pixels per tick, per axis
    pub const BALL_BOUNCE_MARGIN: f32 = 5.0;

    // Score text
    pub const SCORE_PADDING: f32 = 50.0;
    pub const SCORE_FONT_SIZE: f32 = 40.0;
    pub const SCORE_BASELINE: f32 = 40.0;

    // Center line
    pub const CENTER_LINE_TOP: f32 = 5.0;
    pub const CENTER_LINE_DASH: [f64; 2] = [10.0, 10.0];

    // Loop
    pub const TICK_INTERVAL_MS: i32 = 16;
    pub const FIXED_DT: f32 = 0.016;
}
