//! Mouse snapshots and the logical button set

use glam::Vec2;

/// Logical mouse buttons tracked by the snapshot.
///
/// This is the closed set of buttons the tracker accounts for; anything a
/// device reports beyond these five is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left button
    Left,
    /// Middle button (wheel click)
    Middle,
    /// Right button
    Right,
    /// First extra button (usually "back")
    Extra1,
    /// Second extra button (usually "forward")
    Extra2,
}

impl MouseButton {
    /// Every logical button, in per-button table order
    pub const ALL: [MouseButton; 5] = [
        MouseButton::Left,
        MouseButton::Middle,
        MouseButton::Right,
        MouseButton::Extra1,
        MouseButton::Extra2,
    ];

    /// Index into fixed per-button tables
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Map a winit button to a logical button.
    ///
    /// Returns `None` for `Other(_)` buttons, which are not tracked.
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(MouseButton::Left),
            winit::event::MouseButton::Middle => Some(MouseButton::Middle),
            winit::event::MouseButton::Right => Some(MouseButton::Right),
            winit::event::MouseButton::Back => Some(MouseButton::Extra1),
            winit::event::MouseButton::Forward => Some(MouseButton::Extra2),
            _ => None,
        }
    }
}

/// Mouse state captured at one instant
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseSnapshot {
    /// Left button down
    pub left: bool,
    /// Middle button down
    pub middle: bool,
    /// Right button down
    pub right: bool,
    /// First extra button down
    pub extra1: bool,
    /// Second extra button down
    pub extra2: bool,
    /// Cumulative scroll wheel position, 120 units per detent
    pub wheel: i32,
    /// Cursor position in window coordinates
    pub position: Vec2,
}

impl MouseSnapshot {
    /// Resolve a logical button to its field in this snapshot
    pub fn is_down(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Middle => self.middle,
            MouseButton::Right => self.right,
            MouseButton::Extra1 => self.extra1,
            MouseButton::Extra2 => self.extra2,
        }
    }

    /// Check if a button was up at capture time
    pub fn is_up(&self, button: MouseButton) -> bool {
        !self.is_down(button)
    }

    pub(crate) fn set_down(&mut self, button: MouseButton, down: bool) {
        match button {
            MouseButton::Left => self.left = down,
            MouseButton::Middle => self.middle = down,
            MouseButton::Right => self.right = down,
            MouseButton::Extra1 => self.extra1 = down,
            MouseButton::Extra2 => self.extra2 = down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_resolves_each_button() {
        for button in MouseButton::ALL {
            let mut snapshot = MouseSnapshot::default();
            snapshot.set_down(button, true);

            assert!(snapshot.is_down(button));
            for other in MouseButton::ALL {
                if other != button {
                    assert!(snapshot.is_up(other));
                }
            }
        }
    }

    #[test]
    fn test_default_snapshot_has_every_button_up() {
        let snapshot = MouseSnapshot::default();

        for button in MouseButton::ALL {
            assert!(snapshot.is_up(button));
        }
        assert_eq!(snapshot.wheel, 0);
        assert_eq!(snapshot.position, Vec2::ZERO);
    }

    #[test]
    fn test_from_winit_maps_named_buttons() {
        assert_eq!(
            MouseButton::from_winit(winit::event::MouseButton::Left),
            Some(MouseButton::Left)
        );
        assert_eq!(
            MouseButton::from_winit(winit::event::MouseButton::Back),
            Some(MouseButton::Extra1)
        );
        assert_eq!(
            MouseButton::from_winit(winit::event::MouseButton::Forward),
            Some(MouseButton::Extra2)
        );
    }

    #[test]
    fn test_from_winit_ignores_other_buttons() {
        assert_eq!(
            MouseButton::from_winit(winit::event::MouseButton::Other(7)),
            None
        );
    }
}
