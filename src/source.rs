//! Polling seam between the tracker and the windowing layer

use glam::Vec2;
use winit::event::{ElementState, MouseScrollDelta};
use winit::keyboard::KeyCode;

use crate::device::{KeyboardSnapshot, MouseButton, MouseSnapshot};

/// Scroll wheel units per line of a line-based scroll delta
pub const WHEEL_DETENT: i32 = 120;

/// On-demand reads of live input device state.
///
/// The tracker polls a source once per device per tick; implementations
/// return the device state as of the moment of the call.
pub trait InputSource {
    /// Capture the current keyboard state
    fn poll_keyboard(&mut self) -> KeyboardSnapshot;

    /// Capture the current mouse state
    fn poll_mouse(&mut self) -> MouseSnapshot;
}

/// Live device state fed from winit window events.
///
/// winit reports input as events rather than pollable state, so this source
/// folds events into a current device picture and serves snapshots of it on
/// demand. Feed it from the window event handler, poll it from the tick.
#[derive(Debug)]
pub struct WinitSource {
    keyboard: KeyboardSnapshot,
    mouse: MouseSnapshot,
    /// Wheel travel including fractional line deltas from trackpads
    wheel_units: f32,
}

impl WinitSource {
    /// Create a source with every key and button up
    pub fn new() -> Self {
        Self {
            keyboard: KeyboardSnapshot::new(),
            mouse: MouseSnapshot::default(),
            wheel_units: 0.0,
        }
    }

    /// Record a key press or release
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        self.keyboard.set_down(key, state.is_pressed());
    }

    /// Record a mouse button press or release.
    ///
    /// Buttons outside the five logical ones are ignored.
    pub fn process_mouse_button(
        &mut self,
        button: winit::event::MouseButton,
        state: ElementState,
    ) {
        if let Some(button) = MouseButton::from_winit(button) {
            self.mouse.set_down(button, state.is_pressed());
        }
    }

    /// Advance the cumulative scroll wheel position
    pub fn process_scroll(&mut self, delta: MouseScrollDelta) {
        self.wheel_units += match delta {
            MouseScrollDelta::LineDelta(_, y) => y * WHEEL_DETENT as f32,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
        };
        self.mouse.wheel = self.wheel_units as i32;
    }

    /// Record cursor movement
    pub fn process_cursor(&mut self, position: Vec2) {
        self.mouse.position = position;
    }
}

impl InputSource for WinitSource {
    fn poll_keyboard(&mut self) -> KeyboardSnapshot {
        self.keyboard.clone()
    }

    fn poll_mouse(&mut self) -> MouseSnapshot {
        self.mouse
    }
}

impl Default for WinitSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_events_update_live_state() {
        let mut source = WinitSource::new();

        source.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        assert!(source.poll_keyboard().is_down(KeyCode::KeyW));

        source.process_keyboard(KeyCode::KeyW, ElementState::Released);
        assert!(source.poll_keyboard().is_up(KeyCode::KeyW));
    }

    #[test]
    fn test_poll_is_a_read_not_a_consume() {
        let mut source = WinitSource::new();
        source.process_keyboard(KeyCode::Space, ElementState::Pressed);

        assert!(source.poll_keyboard().is_down(KeyCode::Space));
        assert!(source.poll_keyboard().is_down(KeyCode::Space));
    }

    #[test]
    fn test_button_events_update_live_state() {
        let mut source = WinitSource::new();

        source.process_mouse_button(winit::event::MouseButton::Right, ElementState::Pressed);
        assert!(source.poll_mouse().is_down(MouseButton::Right));

        source.process_mouse_button(winit::event::MouseButton::Right, ElementState::Released);
        assert!(source.poll_mouse().is_up(MouseButton::Right));
    }

    #[test]
    fn test_untracked_button_is_ignored() {
        let mut source = WinitSource::new();

        source.process_mouse_button(winit::event::MouseButton::Other(7), ElementState::Pressed);

        let snapshot = source.poll_mouse();
        for button in MouseButton::ALL {
            assert!(snapshot.is_up(button));
        }
    }

    #[test]
    fn test_line_scroll_accumulates_in_detents() {
        let mut source = WinitSource::new();

        source.process_scroll(MouseScrollDelta::LineDelta(0.0, 1.0));
        assert_eq!(source.poll_mouse().wheel, WHEEL_DETENT);

        source.process_scroll(MouseScrollDelta::LineDelta(0.0, -2.0));
        assert_eq!(source.poll_mouse().wheel, -WHEEL_DETENT);
    }

    #[test]
    fn test_fractional_line_scroll_is_not_lost() {
        let mut source = WinitSource::new();

        // four quarter-line events add up to one detent
        for _ in 0..4 {
            source.process_scroll(MouseScrollDelta::LineDelta(0.0, 0.25));
        }
        assert_eq!(source.poll_mouse().wheel, WHEEL_DETENT);
    }

    #[test]
    fn test_pixel_scroll_accumulates_directly() {
        let mut source = WinitSource::new();

        source.process_scroll(MouseScrollDelta::PixelDelta(
            winit::dpi::PhysicalPosition::new(0.0, 48.0),
        ));
        assert_eq!(source.poll_mouse().wheel, 48);
    }

    #[test]
    fn test_cursor_position_tracks_last_event() {
        let mut source = WinitSource::new();

        source.process_cursor(Vec2::new(320.0, 240.0));
        assert_eq!(source.poll_mouse().position, Vec2::new(320.0, 240.0));
    }
}
