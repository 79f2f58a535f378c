//! Keyboard input handling

use game_core::Game;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Window};

/// Handle key down event
pub fn handle_key_down(game: &mut Game, code: &str) {
    game.key_down(code);
}

/// Handle key up event
pub fn handle_key_up(game: &mut Game, code: &str) {
    game.key_up(code);
}

/// Extract the physical key code ("KeyW", "ArrowUp") from a keyboard event
pub fn get_code_from_event(event: &KeyboardEvent) -> String {
    event.code()
}

/// Route window `keydown`/`keyup` events into the game's pressed-key set
pub fn listen(window: &Window, game: &Rc<RefCell<Game>>) -> Result<(), JsValue> {
    add_key_listener(window, "keydown", game, handle_key_down)?;
    add_key_listener(window, "keyup", game, handle_key_up)
}

fn add_key_listener(
    window: &Window,
    event_type: &str,
    game: &Rc<RefCell<Game>>,
    handler: fn(&mut Game, &str),
) -> Result<(), JsValue> {
    let game = Rc::clone(game);
    let callback = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        handler(&mut game.borrow_mut(), &get_code_from_event(&event));
    });

    window
        .add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
        .map_err(|e| {
            JsValue::from_str(&format!("Failed to listen for {}: {:?}", event_type, e))
        })?;

    // Listeners stay registered for the page lifetime
    callback.forget();
    Ok(())
}
