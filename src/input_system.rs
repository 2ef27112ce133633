use crate::grid::Direction;
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// Discrete input events the game loop understands
///
/// Raw SDL2 events are translated into these so the loop never sees keycodes
/// and can be driven by a scripted source in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyPress(Direction),
}

/// Produces the input events that arrived since the previous poll.
///
/// Polling never blocks: an empty Vec means nothing happened.
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Map a pressed key to an input event
///
/// Arrow keys and WASD steer, Escape quits. Everything else is ignored.
pub fn translate_key(key: Keycode) -> Option<InputEvent> {
    match key {
        Keycode::Up | Keycode::W => Some(InputEvent::KeyPress(Direction::Up)),
        Keycode::Down | Keycode::S => Some(InputEvent::KeyPress(Direction::Down)),
        Keycode::Left | Keycode::A => Some(InputEvent::KeyPress(Direction::Left)),
        Keycode::Right | Keycode::D => Some(InputEvent::KeyPress(Direction::Right)),
        Keycode::Escape => Some(InputEvent::Quit),
        _ => None,
    }
}

/// InputSource backed by the SDL2 event pump
pub struct SdlInput {
    event_pump: EventPump,
}

impl SdlInput {
    pub fn new(event_pump: EventPump) -> Self {
        SdlInput { event_pump }
    }
}

impl InputSource for SdlInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    ..
                } => {
                    if let Some(input) = translate_key(key) {
                        events.push(input);
                    }
                }
                _ => {
                    // Mouse, window and key-up events are irrelevant
                }
            }
        }

        events
    }
}
