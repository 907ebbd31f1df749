use ringbuffer::{AllocRingBuffer, RingBuffer};

use crate::constants::FRAME_RATE_SAMPLES;

/// Rolling frames-per-second average over the most recent frame times.
pub struct FrameRate {
    frame_times: AllocRingBuffer<f32>,
}

impl FrameRate {
    pub fn new() -> Self {
        Self::with_capacity(FRAME_RATE_SAMPLES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frame_times: AllocRingBuffer::new(capacity),
        }
    }

    pub fn update(&mut self, delta: f32) {
        if delta.is_finite() && delta > 0.0 {
            self.frame_times.enqueue(delta);
        }
    }

    pub fn fps(&self) -> Option<f32> {
        if self.frame_times.is_empty() {
            return None;
        }
        let total: f32 = self.frame_times.iter().sum();
        Some(self.frame_times.len() as f32 / total)
    }
}
