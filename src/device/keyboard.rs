//! Keyboard snapshots

use rustc_hash::FxHashSet;
use winit::keyboard::KeyCode;

/// Keyboard state captured at one instant.
///
/// Stores the set of keys that were down at capture time; every key not in
/// the set was up, so lookups are defined for the whole key enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardSnapshot {
    /// Keys that were down at capture time
    down: FxHashSet<KeyCode>,
}

impl KeyboardSnapshot {
    /// Create a snapshot with every key up
    pub fn new() -> Self {
        Self {
            down: FxHashSet::default(),
        }
    }

    /// Check if a key was down at capture time
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.down.contains(&key)
    }

    /// Check if a key was up at capture time
    pub fn is_up(&self, key: KeyCode) -> bool {
        !self.down.contains(&key)
    }

    /// Iterate over the keys that were down at capture time
    pub fn keys_down(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.down.iter().copied()
    }

    pub(crate) fn set_down(&mut self, key: KeyCode, down: bool) {
        if down {
            self.down.insert(key);
        } else {
            self.down.remove(&key);
        }
    }
}

impl Default for KeyboardSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<KeyCode> for KeyboardSnapshot {
    fn from_iter<I: IntoIterator<Item = KeyCode>>(iter: I) -> Self {
        Self {
            down: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_has_every_key_up() {
        let snapshot = KeyboardSnapshot::new();

        assert!(snapshot.is_up(KeyCode::KeyA));
        assert!(!snapshot.is_down(KeyCode::Space));
        assert_eq!(snapshot.keys_down().count(), 0);
    }

    #[test]
    fn test_from_iter_marks_keys_down() {
        let snapshot: KeyboardSnapshot =
            [KeyCode::KeyW, KeyCode::ShiftLeft].into_iter().collect();

        assert!(snapshot.is_down(KeyCode::KeyW));
        assert!(snapshot.is_down(KeyCode::ShiftLeft));
        assert!(snapshot.is_up(KeyCode::KeyS));
    }

    #[test]
    fn test_set_down_toggles_state() {
        let mut snapshot = KeyboardSnapshot::new();

        snapshot.set_down(KeyCode::KeyE, true);
        assert!(snapshot.is_down(KeyCode::KeyE));

        snapshot.set_down(KeyCode::KeyE, false);
        assert!(snapshot.is_up(KeyCode::KeyE));
    }
}
