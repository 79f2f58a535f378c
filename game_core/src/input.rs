use std::collections::HashSet;

/// Read access to "is this key currently held down"
pub trait KeyState {
    fn is_down(&self, key: &str) -> bool;
}

/// Set of key codes currently held down
#[derive(Debug, Clone, Default)]
pub struct PressedKeys {
    keys: HashSet<String>,
}

impl PressedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down event. Pressing a held key again is a no-op.
    pub fn press(&mut self, key: &str) {
        if !self.keys.contains(key) {
            self.keys.insert(key.to_string());
        }
    }

    /// Record a key-up event. Releasing a key that is not held is a no-op.
    pub fn release(&mut self, key: &str) {
        self.keys.remove(key);
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

impl KeyState for PressedKeys {
    fn is_down(&self, key: &str) -> bool {
        self.is_pressed(key)
    }
}

impl<K: KeyState + ?Sized> KeyState for &K {
    fn is_down(&self, key: &str) -> bool {
        (**self).is_down(key)
    }
}
