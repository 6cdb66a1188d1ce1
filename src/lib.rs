//! Per-frame input state tracking for game loops
//!
//! This crate provides:
//! - Two-snapshot diffing of keyboard and mouse state, once per update tick
//! - Press/release edge detection, held-duration and scroll-delta queries
//! - A polling seam (`InputSource`) with a winit-backed implementation

pub mod device;
pub mod source;
pub mod tracker;

// Re-exports for convenience
pub use glam;
pub use winit;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::device::{KeyboardSnapshot, MouseButton, MouseSnapshot};
    pub use crate::source::{InputSource, WinitSource};
    pub use crate::tracker::InputTracker;
    pub use glam::Vec2;
    pub use winit::keyboard::KeyCode;
}
