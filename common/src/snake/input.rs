use std::collections::HashSet;
use std::time::Instant;

use super::types::Key;

/// Frame time source.
pub trait Clock {
    /// Seconds elapsed since the previous call.
    fn delta_time(&mut self) -> f32;
}

pub trait InputSource {
    fn is_pressed(&self, key: Key) -> bool;
}

pub trait RandomSource {
    /// Uniform integer in `0..=max_inclusive`.
    fn uniform_int(&mut self, max_inclusive: u32) -> u32;
}

pub struct SystemClock {
    last_frame: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn delta_time(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        delta
    }
}

/// Returns the same step every frame.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    pub step: f32,
}

impl FixedClock {
    pub fn new(step: f32) -> Self {
        Self { step }
    }
}

impl Clock for FixedClock {
    fn delta_time(&mut self) -> f32 {
        self.step
    }
}

/// Keys held down during the current frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PressedKeys {
    keys: HashSet<Key>,
}

impl PressedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.keys.insert(key);
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<const N: usize> From<[Key; N]> for PressedKeys {
    fn from(keys: [Key; N]) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }
}

impl InputSource for PressedKeys {
    fn is_pressed(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }
}
