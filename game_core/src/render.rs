//! Frame rendering against an abstract 2D drawing surface
//!
//! The whole frame is redrawn every tick.

use crate::{Ball, Config, Paddle, Params, Score};

pub const WHITE: &str = "#FFFFFF";
pub const CYAN: &str = "#00FFFF";

/// The subset of a 2D canvas context the renderer draws with
pub trait Surface {
    type Error;

    fn save(&mut self);
    fn restore(&mut self);
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_dash(&mut self, segments: &[f64]) -> Result<(), Self::Error>;
    fn set_font(&mut self, font: &str);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<(), Self::Error>;
    fn stroke(&mut self);
    fn fill(&mut self);
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Self::Error>;
}

/// Everything a frame shows
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub config: &'a Config,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
}

/// Draw a full frame: background, center line, score, paddles, ball
pub fn draw_frame<S: Surface>(frame: &Frame<'_>, surface: &mut S) -> Result<(), S::Error> {
    draw_background(frame.config, frame.score, surface)?;
    draw_paddle(frame.config, &frame.left, surface);
    draw_paddle(frame.config, &frame.right, surface);
    draw_ball(frame.config, &frame.ball, surface)
}

fn draw_background<S: Surface>(
    config: &Config,
    score: Score,
    surface: &mut S,
) -> Result<(), S::Error> {
    // Fill style is left at the surface default
    surface.fill_rect(
        0.0,
        0.0,
        config.canvas_width as f64,
        config.canvas_height as f64,
    );
    draw_center_line(config, surface)?;
    draw_score(config, score, surface)
}

fn draw_center_line<S: Surface>(config: &Config, surface: &mut S) -> Result<(), S::Error> {
    let x = (config.canvas_width / 2.0) as f64;

    surface.save();
    surface.set_stroke_style(WHITE);
    surface.begin_path();
    let dashed = surface.set_line_dash(&Params::CENTER_LINE_DASH);
    if dashed.is_ok() {
        surface.move_to(x, Params::CENTER_LINE_TOP as f64);
        surface.line_to(x, config.canvas_height as f64);
        surface.stroke();
    }
    surface.restore();
    dashed
}

fn draw_score<S: Surface>(config: &Config, score: Score, surface: &mut S) -> Result<(), S::Error> {
    let center = config.canvas_width / 2.0;
    let font_size = Params::SCORE_FONT_SIZE;
    let padding = Params::SCORE_PADDING;
    let baseline = Params::SCORE_BASELINE as f64;

    surface.save();
    surface.set_fill_style(WHITE);
    surface.set_font(&format!("{}px Helvetica", font_size));
    let drawn = surface
        .fill_text(
            &score.left.to_string(),
            (center - padding - font_size / 2.0) as f64,
            baseline,
        )
        .and_then(|_| {
            surface.fill_text(&score.right.to_string(), (center + padding) as f64, baseline)
        });
    surface.restore();
    drawn
}

fn draw_paddle<S: Surface>(config: &Config, paddle: &Paddle, surface: &mut S) {
    surface.save();
    surface.set_fill_style(WHITE);
    surface.fill_rect(
        paddle.x as f64,
        paddle.y as f64,
        config.paddle_width as f64,
        config.paddle_height as f64,
    );
    surface.restore();
}

fn draw_ball<S: Surface>(config: &Config, ball: &Ball, surface: &mut S) -> Result<(), S::Error> {
    surface.save();
    surface.begin_path();
    surface.set_stroke_style(CYAN);
    surface.set_fill_style(CYAN);
    let traced = surface.arc(
        ball.pos.x as f64,
        ball.pos.y as f64,
        config.ball_radius as f64,
        0.0,
        std::f64::consts::TAU,
    );
    if traced.is_ok() {
        surface.stroke();
        surface.fill();
    }
    surface.restore();
    traced
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{DirectionX, DirectionY, Side};
    use glam::Vec2;
    use std::convert::Infallible;

    /// Drawing call captured by [`RecordingSurface`]
    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Save,
        Restore,
        FillStyle(String),
        StrokeStyle(String),
        LineDash(Vec<f64>),
        Font(String),
        FillRect(f64, f64, f64, f64),
        BeginPath,
        MoveTo(f64, f64),
        LineTo(f64, f64),
        Arc(f64, f64, f64),
        Stroke,
        Fill,
        FillText(String, f64, f64),
    }

    #[derive(Default)]
    pub struct RecordingSurface {
        pub calls: Vec<Call>,
    }

    impl Surface for RecordingSurface {
        type Error = Infallible;

        fn save(&mut self) {
            self.calls.push(Call::Save);
        }
        fn restore(&mut self) {
            self.calls.push(Call::Restore);
        }
        fn set_fill_style(&mut self, color: &str) {
            self.calls.push(Call::FillStyle(color.to_string()));
        }
        fn set_stroke_style(&mut self, color: &str) {
            self.calls.push(Call::StrokeStyle(color.to_string()));
        }
        fn set_line_dash(&mut self, segments: &[f64]) -> Result<(), Infallible> {
            self.calls.push(Call::LineDash(segments.to_vec()));
            Ok(())
        }
        fn set_font(&mut self, font: &str) {
            self.calls.push(Call::Font(font.to_string()));
        }
        fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
            self.calls.push(Call::FillRect(x, y, width, height));
        }
        fn begin_path(&mut self) {
            self.calls.push(Call::BeginPath);
        }
        fn move_to(&mut self, x: f64, y: f64) {
            self.calls.push(Call::MoveTo(x, y));
        }
        fn line_to(&mut self, x: f64, y: f64) {
            self.calls.push(Call::LineTo(x, y));
        }
        fn arc(&mut self, x: f64, y: f64, radius: f64, _: f64, _: f64) -> Result<(), Infallible> {
            self.calls.push(Call::Arc(x, y, radius));
            Ok(())
        }
        fn stroke(&mut self) {
            self.calls.push(Call::Stroke);
        }
        fn fill(&mut self) {
            self.calls.push(Call::Fill);
        }
        fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Infallible> {
            self.calls.push(Call::FillText(text.to_string(), x, y));
            Ok(())
        }
    }

    fn sample_frame(config: &Config) -> Frame<'_> {
        Frame {
            config,
            left: Paddle::new(Side::Left, 10.0, 100.0),
            right: Paddle::new(Side::Right, 780.0, 200.0),
            ball: Ball::new(Vec2::new(42.0, 24.0), DirectionX::Right, DirectionY::Down),
            score: Score::new(),
        }
    }

    #[test]
    fn test_draw_frame_sequence() {
        let config = Config::new();
        let mut surface = RecordingSurface::default();

        draw_frame(&sample_frame(&config), &mut surface).unwrap();

        let expected = vec![
            Call::FillRect(0.0, 0.0, 800.0, 600.0),
            Call::Save,
            Call::StrokeStyle(WHITE.to_string()),
            Call::BeginPath,
            Call::LineDash(vec![10.0, 10.0]),
            Call::MoveTo(400.0, 5.0),
            Call::LineTo(400.0, 600.0),
            Call::Stroke,
            Call::Restore,
            Call::Save,
            Call::FillStyle(WHITE.to_string()),
            Call::Font("40px Helvetica".to_string()),
            Call::FillText("0".to_string(), 330.0, 40.0),
            Call::FillText("0".to_string(), 450.0, 40.0),
            Call::Restore,
            Call::Save,
            Call::FillStyle(WHITE.to_string()),
            Call::FillRect(10.0, 100.0, 10.0, 35.0),
            Call::Restore,
            Call::Save,
            Call::FillStyle(WHITE.to_string()),
            Call::FillRect(780.0, 200.0, 10.0, 35.0),
            Call::Restore,
            Call::Save,
            Call::BeginPath,
            Call::StrokeStyle(CYAN.to_string()),
            Call::FillStyle(CYAN.to_string()),
            Call::Arc(42.0, 24.0, 5.0),
            Call::Stroke,
            Call::Fill,
            Call::Restore,
        ];
        assert_eq!(surface.calls, expected);
    }

    #[test]
    fn test_background_keeps_default_fill_style() {
        let config = Config::new();
        let mut surface = RecordingSurface::default();

        draw_frame(&sample_frame(&config), &mut surface).unwrap();

        assert_eq!(
            surface.calls.first(),
            Some(&Call::FillRect(0.0, 0.0, 800.0, 600.0)),
            "Background is filled before any style is set"
        );
    }

    #[test]
    fn test_save_restore_balanced() {
        let config = Config::new();
        let mut surface = RecordingSurface::default();

        draw_frame(&sample_frame(&config), &mut surface).unwrap();

        let saves = surface.calls.iter().filter(|c| **c == Call::Save).count();
        let restores = surface.calls.iter().filter(|c| **c == Call::Restore).count();
        assert_eq!(saves, 5);
        assert_eq!(saves, restores);
    }
}
