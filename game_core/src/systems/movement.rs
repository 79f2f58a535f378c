use crate::{Ball, Config, DirectionX, DirectionY, Events, KeyState, Paddle};
use hecs::World;

/// Apply paddle movement from the held keys
pub fn move_paddles<K: KeyState + ?Sized>(world: &mut World, keys: &K, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let binding = config.keys(paddle.side);

        // "up" wins when both keys are held
        let delta = if keys.is_down(&binding.up) {
            -config.paddle_speed
        } else if keys.is_down(&binding.down) {
            config.paddle_speed
        } else {
            continue;
        };

        paddle.y += delta;
        if binding.clamped {
            paddle.y = config.clamp_paddle_y(paddle.y);
        }
    }
}

/// Bounce the ball off the canvas edges, then move it one step
pub fn move_ball(world: &mut World, config: &Config, events: &mut Events) {
    let margin = config.ball_bounce_margin;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Bounds are checked before moving, so a flip moves the ball away
        // from the wall on the same tick.
        let dir_x = if ball.pos.x >= config.canvas_width - margin {
            DirectionX::Left
        } else if ball.pos.x <= margin {
            DirectionX::Right
        } else {
            ball.dir_x
        };
        if dir_x != ball.dir_x {
            ball.dir_x = dir_x;
            events.ball_flipped_x = true;
        }
        ball.pos.x += ball.dir_x.sign() * config.ball_speed;

        let dir_y = if ball.pos.y <= margin {
            DirectionY::Down
        } else if ball.pos.y >= config.canvas_height - margin {
            DirectionY::Up
        } else {
            ball.dir_y
        };
        if dir_y != ball.dir_y {
            ball.dir_y = dir_y;
            events.ball_flipped_y = true;
        }
        ball.pos.y += ball.dir_y.sign() * config.ball_speed;
    }
}
