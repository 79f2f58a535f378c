pub mod components;
pub mod config;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use input::*;
pub use params::*;
pub use render::{draw_frame, Frame, Surface};
pub use resources::*;

use hecs::{Entity, World};
use systems::*;

/// Run one tick of the simulation: paddles, then ball
pub fn step<K: KeyState + ?Sized>(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    keys: &K,
    events: &mut Events,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move paddles from the held keys
    move_paddles(world, keys, config);

    // 2. Bounce and move the ball
    move_ball(world, config, events);

    time.advance();
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, x: f32, y: f32) -> Entity {
    world.spawn((Paddle::new(side, x, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> Entity {
    world.spawn((ball,))
}

/// Complete game: two paddles, one ball, the held keys and the score
pub struct Game {
    pub world: World,
    pub left_paddle: Entity,
    pub right_paddle: Entity,
    pub ball: Entity,
    pub keys: PressedKeys,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub events: Events,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();

        let spawn_y = config.paddle_spawn_y();
        let left_paddle = create_paddle(&mut world, Side::Left, config.paddle_x(Side::Left), spawn_y);
        let right_paddle =
            create_paddle(&mut world, Side::Right, config.paddle_x(Side::Right), spawn_y);
        let ball = create_ball(&mut world, Ball::serve(config.ball_spawn()));

        Self {
            world,
            left_paddle,
            right_paddle,
            ball,
            keys: PressedKeys::new(),
            time: Time::default(),
            config,
            score: Score::new(),
            events: Events::new(),
        }
    }

    /// Key-down event from the host
    pub fn key_down(&mut self, code: &str) {
        self.keys.press(code);
    }

    /// Key-up event from the host
    pub fn key_up(&mut self, code: &str) {
        self.keys.release(code);
    }

    /// Advance the simulation by one tick without drawing
    pub fn step(&mut self) {
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &self.keys,
            &mut self.events,
        );
    }

    /// One full tick: update, then redraw the whole frame
    pub fn tick<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        self.step();
        self.render(surface)
    }

    /// Draw the current state without advancing it
    pub fn render<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        match self.frame() {
            Some(frame) => draw_frame(&frame, surface),
            None => Ok(()),
        }
    }

    /// Snapshot of everything on screen
    pub fn frame(&self) -> Option<Frame<'_>> {
        Some(Frame {
            config: &self.config,
            left: self.paddle(Side::Left)?,
            right: self.paddle(Side::Right)?,
            ball: self.ball()?,
            score: self.score,
        })
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        };
        self.world.get::<&Paddle>(entity).ok().map(|paddle| *paddle)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    /// Move a paddle to `y` (top edge)
    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let entity = match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        };
        if let Ok(mut paddle) = self.world.get::<&mut Paddle>(entity) {
            paddle.y = y;
        }
    }

    /// Replace the ball's position and direction
    pub fn set_ball(&mut self, ball: Ball) {
        if let Ok(mut current) = self.world.get::<&mut Ball>(self.ball) {
            *current = ball;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
