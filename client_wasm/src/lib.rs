//! Canvas client for the Pong loop
//!
//! Draws with the 2D canvas API and drives the game from `setInterval`.
//! Page bootstrapping (finding the `<canvas>`, loading the module) is left
//! to the host page.
//!
//! Note: only compiled for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod input;
mod renderer;

use game_core::{Config, Game, Params};
use renderer::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement, Window};

fn log(msg: &str) {
    console::log_1(&JsValue::from_str(msg));
}

/// Size the canvas and get its 2d context
fn init_canvas(canvas: &HtmlCanvasElement, config: &Config) -> Result<CanvasSurface, JsValue> {
    canvas.set_width(config.canvas_width as u32);
    canvas.set_height(config.canvas_height as u32);

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|e| JsValue::from_str(&format!("Unexpected 2d context type: {:?}", e)))?;

    Ok(CanvasSurface::new(ctx))
}

/// Run update-then-render every `Params::TICK_INTERVAL_MS`
fn schedule_ticks(
    window: &Window,
    game: Rc<RefCell<Game>>,
    mut surface: CanvasSurface,
) -> Result<i32, JsValue> {
    let callback = Closure::<dyn FnMut()>::new(move || {
        if let Err(e) = game.borrow_mut().tick(&mut surface) {
            console::error_2(&JsValue::from_str("Failed to draw frame:"), &e);
        }
    });

    let handle = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            Params::TICK_INTERVAL_MS,
        )
        .map_err(|e| JsValue::from_str(&format!("Failed to start game loop: {:?}", e)))?;

    // The loop has no stop operation; it runs until the page goes away
    callback.forget();
    Ok(handle)
}

/// Start the game on `canvas`: size it, listen for keys and start the loop
#[wasm_bindgen]
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let config = Config::new();
    let surface = init_canvas(&canvas, &config)?;

    log(&format!(
        "Starting Pong: {}x{} canvas, tick every {}ms",
        config.canvas_width,
        config.canvas_height,
        Params::TICK_INTERVAL_MS
    ));

    let game = Rc::new(RefCell::new(Game::new(config)));
    input::listen(&window, &game)?;
    let handle = schedule_ticks(&window, game, surface)?;

    log(&format!("Game loop running (interval id {})", handle));
    Ok(())
}
