use glam::Vec2;

/// Which side of the canvas a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - a player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Left edge, fixed for the paddle's lifetime
    pub y: f32, // Top edge
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32) -> Self {
        Self { side, x, y }
    }
}

/// Horizontal travel direction of the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionX {
    Left,
    Right,
}

impl DirectionX {
    /// Sign applied to the ball's horizontal step
    pub fn sign(self) -> f32 {
        match self {
            DirectionX::Left => -1.0,
            DirectionX::Right => 1.0,
        }
    }
}

/// Vertical travel direction of the ball (canvas Y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionY {
    Up,
    Down,
}

impl DirectionY {
    /// Sign applied to the ball's vertical step
    pub fn sign(self) -> f32 {
        match self {
            DirectionY::Up => -1.0,
            DirectionY::Down => 1.0,
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub dir_x: DirectionX,
    pub dir_y: DirectionY,
}

impl Ball {
    pub fn new(pos: Vec2, dir_x: DirectionX, dir_y: DirectionY) -> Self {
        Self { pos, dir_x, dir_y }
    }

    /// Ball at `pos` heading left and up, the serve direction
    pub fn serve(pos: Vec2) -> Self {
        Self::new(pos, DirectionX::Left, DirectionY::Up)
    }
}
