//! Input management system
//!
//! Translates raw key, mouse and touch input into the discrete commands the
//! demos react to. Each key press or touch tap is one command; there is no
//! continuous movement and no key repeat.

use std::collections::HashSet;

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// Q key
    Q,
    /// S key
    S,
    /// W key
    W,
    /// Plus / equals key
    Plus,
    /// Minus key
    Minus,
    /// Space key
    Space,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// One of the four directional commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards +Y
    Up,
    /// Towards -Y
    Down,
    /// Towards -X
    Left,
    /// Towards +X
    Right,
}

impl Direction {
    /// All four directions, in on-screen button order
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Map a key to a direction (arrow keys and WASD)
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Up | KeyCode::W => Some(Direction::Up),
            KeyCode::Down | KeyCode::S => Some(Direction::Down),
            KeyCode::Left | KeyCode::A => Some(Direction::Left),
            KeyCode::Right | KeyCode::D => Some(Direction::Right),
            _ => None,
        }
    }

    /// Unit offset `(x, y)` on the plane perpendicular to the forward axis
    pub fn offset(self) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, 1.0),
            Direction::Down => (0.0, -1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }

    /// Lowercase name as typed on the console
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// On-screen directional buttons for touch devices
///
/// The four buttons exist only when touch support was detected at startup;
/// taps on a hidden layout are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchControls {
    visible: bool,
}

impl TouchControls {
    /// Create the control layout, showing buttons only if touch is supported
    pub fn new(touch_supported: bool) -> Self {
        if touch_supported {
            log::info!("Touch support detected, showing on-screen direction buttons");
        }
        Self { visible: touch_supported }
    }

    /// Whether the buttons are shown
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Buttons currently shown
    pub fn buttons(&self) -> &'static [Direction] {
        if self.visible { &Direction::ALL } else { &[] }
    }

    /// Translate a tap on a button into a direction command
    pub fn tap(&self, button: Direction) -> Option<Direction> {
        self.visible.then_some(button)
    }
}

/// Input manager
///
/// Tracks held keys and mouse drag state between frames.
#[derive(Debug, Default)]
pub struct InputManager {
    pressed_keys: HashSet<KeyCode>,
    pressed_buttons: HashSet<MouseButton>,
    cursor: Option<(f64, f64)>,
    drag_delta: (f64, f64),
}

impl InputManager {
    /// Create a new input manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset per-frame accumulators
    pub fn update(&mut self) {
        self.drag_delta = (0.0, 0.0);
    }

    /// Handle key input
    ///
    /// Returns `true` only on the transition from released to pressed, so a
    /// held key yields a single command.
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) -> bool {
        if pressed {
            self.pressed_keys.insert(key)
        } else {
            self.pressed_keys.remove(&key);
            false
        }
    }

    /// Handle mouse button input
    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.pressed_buttons.insert(button);
        } else {
            self.pressed_buttons.remove(&button);
        }
    }

    /// Handle mouse movement, accumulating drag while the left button is held
    pub fn handle_mouse_move(&mut self, x: f64, y: f64) {
        if let Some((last_x, last_y)) = self.cursor {
            if self.is_button_down(MouseButton::Left) {
                self.drag_delta.0 += x - last_x;
                self.drag_delta.1 += y - last_y;
            }
        }
        self.cursor = Some((x, y));
    }

    /// Add a relative drag directly (console and scripted sources)
    pub fn add_drag(&mut self, dx: f64, dy: f64) {
        self.drag_delta.0 += dx;
        self.drag_delta.1 += dy;
    }

    /// Whether a mouse button is currently held
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    /// Drag accumulated since the last `update`, in pixels
    pub fn drag_delta(&self) -> (f64, f64) {
        self.drag_delta
    }
}
