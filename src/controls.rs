//! Keyboard → navigation translation.

use fnv::FnvHashSet;
use winit::event::{ElementState, KeyboardInput, VirtualKeyCode};

use crate::viewport::{Command, Navigation, Pan, Zoom};

pub fn command_for(key: VirtualKeyCode) -> Option<Command> {
    match key {
        VirtualKeyCode::Up => Some(Command::Pan(Pan::Up)),
        VirtualKeyCode::Down => Some(Command::Pan(Pan::Down)),
        VirtualKeyCode::Right => Some(Command::Pan(Pan::Right)),
        VirtualKeyCode::Left => Some(Command::Pan(Pan::Left)),
        VirtualKeyCode::W => Some(Command::Zoom(Zoom::In)),
        VirtualKeyCode::S => Some(Command::Zoom(Zoom::Out)),
        _ => None,
    }
}

/// Edge-triggered navigation keys.
///
/// A key counts once when it goes down; the repeated presses the OS sends while it is held are
/// ignored until it is released.
#[derive(Debug, Default)]
pub struct Controls {
    held: FnvHashSet<VirtualKeyCode>,
    pressed: FnvHashSet<Command>,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyboard_input(&mut self, input: &KeyboardInput) {
        if let Some(key) = input.virtual_keycode {
            self.key(key, input.state);
        }
    }

    pub fn key(&mut self, key: VirtualKeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.held.insert(key) {
                    if let Some(command) = command_for(key) {
                        self.pressed.insert(command);
                    }
                }
            }
            ElementState::Released => {
                self.held.remove(&key);
            }
        }
    }

    /// Lost focus: forget held keys, the matching releases won't arrive.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// The navigation for the cycle that just ended. Clears the presses of the cycle.
    pub fn take(&mut self) -> Navigation {
        let navigation = Navigation::resolve(|command| self.pressed.contains(&command));
        self.pressed.clear();
        navigation
    }
}
