//! Frame-to-Frame Input State Tracking
//!
//! This module implements the two-snapshot diffing core: the tracker keeps
//! the prior and current capture of each device, rotates them once per tick,
//! and answers edge and held-duration queries by comparing the pair.
//!
//! # Design Principles
//!
//! - **Two frames only**: prior and current are the tracker's whole memory;
//!   there is no event history or queue
//! - **Total queries**: every lookup is defined for every key and button,
//!   before and after initialization
//! - **Loop-driven**: the host loop owns the cadence; `update` runs exactly
//!   once per tick with the elapsed time since the previous one
//!
//! # Example
//!
//! ```ignore
//! let mut source = WinitSource::new();
//! let mut tracker = InputTracker::new();
//! tracker.initialize(&mut source);
//!
//! // once per tick:
//! tracker.update(&mut source, frame_elapsed);
//! if tracker.key_was_pressed(KeyCode::Space) {
//!     player.jump();
//! }
//! ```

use std::time::Duration;

use glam::Vec2;
use rustc_hash::FxHashMap;
use winit::keyboard::KeyCode;

use crate::device::{KeyboardSnapshot, MouseButton, MouseSnapshot};
use crate::source::InputSource;

/// Two-snapshot input tracker with held-duration accounting.
///
/// Holds the prior and current capture of keyboard and mouse state plus how
/// long each key and button has been continuously down. Mutated only by
/// [`initialize`](Self::initialize) and [`update`](Self::update); every query
/// is a pure read.
#[derive(Debug)]
pub struct InputTracker {
    prior_keyboard: KeyboardSnapshot,
    current_keyboard: KeyboardSnapshot,
    prior_mouse: MouseSnapshot,
    current_mouse: MouseSnapshot,
    /// Continuous hold time per key; an absent entry means zero
    key_held: FxHashMap<KeyCode, Duration>,
    /// Continuous hold time per button, in `MouseButton::ALL` order
    button_held: [Duration; 5],
}

impl InputTracker {
    /// Create a tracker with every input up and all hold times at zero.
    ///
    /// Queries are already well-defined at this point (everything reads as
    /// up, idle, unscrolled); call [`initialize`](Self::initialize) before
    /// the first tick so inputs held at startup don't surface as edges.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prior_keyboard: KeyboardSnapshot::new(),
            current_keyboard: KeyboardSnapshot::new(),
            prior_mouse: MouseSnapshot::default(),
            current_mouse: MouseSnapshot::default(),
            key_held: FxHashMap::default(),
            button_held: [Duration::ZERO; 5],
        }
    }

    /// Seed both snapshot pairs from a live read.
    ///
    /// Sets prior = current for each device, so the first real tick cannot
    /// report a press edge for an input that was already held when the
    /// tracker came up.
    pub fn initialize(&mut self, source: &mut impl InputSource) {
        self.current_keyboard = source.poll_keyboard();
        self.prior_keyboard = self.current_keyboard.clone();
        self.current_mouse = source.poll_mouse();
        self.prior_mouse = self.current_mouse;

        log::debug!(
            "Input tracker initialized ({} keys down)",
            self.current_keyboard.keys_down().count()
        );
    }

    /// Advance one tick: rotate snapshots and account held time.
    ///
    /// Call exactly once per tick of the host loop, with the elapsed time
    /// since the previous call.
    pub fn update(&mut self, source: &mut impl InputSource, elapsed: Duration) {
        // Keyboard
        std::mem::swap(&mut self.prior_keyboard, &mut self.current_keyboard);
        self.current_keyboard = source.poll_keyboard();

        for key in self.current_keyboard.keys_down() {
            *self.key_held.entry(key).or_insert(Duration::ZERO) += elapsed;
        }
        let keyboard = &self.current_keyboard;
        self.key_held.retain(|key, _| keyboard.is_down(*key));

        // Mouse
        self.prior_mouse = self.current_mouse;
        self.current_mouse = source.poll_mouse();

        for button in MouseButton::ALL {
            if self.current_mouse.is_down(button) {
                self.button_held[button.index()] += elapsed;
            } else {
                self.button_held[button.index()] = Duration::ZERO;
            }
        }
    }

    // ========================================================================
    // Keyboard queries
    // ========================================================================

    /// Whether the key went down this tick (up in prior, down in current)
    #[must_use]
    pub fn key_was_pressed(&self, key: KeyCode) -> bool {
        self.current_keyboard.is_down(key) && self.prior_keyboard.is_up(key)
    }

    /// Whether the key has been continuously down for at least `threshold`
    #[must_use]
    pub fn key_was_pressed_for(&self, key: KeyCode, threshold: Duration) -> bool {
        self.key_held_time(key) >= threshold
    }

    /// Whether the key went down this tick with every modifier currently down
    #[must_use]
    pub fn key_was_pressed_with_modifiers(&self, key: KeyCode, modifiers: &[KeyCode]) -> bool {
        self.key_was_pressed(key)
            && modifiers.iter().all(|&m| self.current_keyboard.is_down(m))
    }

    /// Whether the key came up this tick (down in prior, up in current)
    #[must_use]
    pub fn key_was_released(&self, key: KeyCode) -> bool {
        self.current_keyboard.is_up(key) && self.prior_keyboard.is_down(key)
    }

    /// Whether the key is down in the current snapshot
    #[must_use]
    pub fn key_is_down(&self, key: KeyCode) -> bool {
        self.current_keyboard.is_down(key)
    }

    /// Whether the key is up in the current snapshot
    #[must_use]
    pub fn key_is_up(&self, key: KeyCode) -> bool {
        self.current_keyboard.is_up(key)
    }

    /// How long the key has been continuously down.
    ///
    /// Zero for any key that is up, including on the tick it was released.
    #[must_use]
    pub fn key_held_time(&self, key: KeyCode) -> Duration {
        self.key_held.get(&key).copied().unwrap_or(Duration::ZERO)
    }

    // ========================================================================
    // Mouse queries
    // ========================================================================

    /// Whether the button is down in the current snapshot
    #[must_use]
    pub fn button_is_down(&self, button: MouseButton) -> bool {
        self.current_mouse.is_down(button)
    }

    /// Whether the button is up in the current snapshot
    #[must_use]
    pub fn button_is_up(&self, button: MouseButton) -> bool {
        self.current_mouse.is_up(button)
    }

    /// Whether the button went down this tick (up in prior, down in current)
    #[must_use]
    pub fn button_was_pressed(&self, button: MouseButton) -> bool {
        self.current_mouse.is_down(button) && self.prior_mouse.is_up(button)
    }

    /// Whether the button came up this tick (down in prior, up in current)
    #[must_use]
    pub fn button_was_released(&self, button: MouseButton) -> bool {
        self.current_mouse.is_up(button) && self.prior_mouse.is_down(button)
    }

    /// Whether a click completed this tick.
    ///
    /// A click is observed on the release tick, so this is the same falling
    /// edge as [`button_was_released`](Self::button_was_released); it exists
    /// as a separate name for call sites that read as clicks.
    #[must_use]
    pub fn button_was_clicked(&self, button: MouseButton) -> bool {
        self.button_was_released(button)
    }

    /// Whether a click completed this tick with every listed key currently down
    #[must_use]
    pub fn button_was_clicked_with_modifiers(
        &self,
        button: MouseButton,
        modifiers: &[KeyCode],
    ) -> bool {
        self.button_was_clicked(button)
            && modifiers.iter().all(|&m| self.current_keyboard.is_down(m))
    }

    /// How long the button has been continuously down.
    ///
    /// Zero for any button that is up, including on the tick it was released.
    #[must_use]
    pub fn button_held_time(&self, button: MouseButton) -> Duration {
        self.button_held[button.index()]
    }

    /// Signed scroll travel since the previous tick
    #[must_use]
    pub fn scroll_distance(&self) -> i32 {
        self.current_mouse.wheel - self.prior_mouse.wheel
    }

    /// Whether the wheel moved up since the previous tick
    #[must_use]
    pub fn is_scrolling_up(&self) -> bool {
        self.scroll_distance() > 0
    }

    /// Whether the wheel moved down since the previous tick
    #[must_use]
    pub fn is_scrolling_down(&self) -> bool {
        self.scroll_distance() < 0
    }

    /// Cursor position from the current snapshot
    #[must_use]
    pub fn cursor_position(&self) -> Vec2 {
        self.current_mouse.position
    }

    /// Cursor travel since the previous tick
    #[must_use]
    pub fn cursor_delta(&self) -> Vec2 {
        self.current_mouse.position - self.prior_mouse.position
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
