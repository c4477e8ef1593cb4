use crate::params::StreamParameters;

/// A fixed-shape channels × frames grid of normalized f32 samples.
///
/// Samples live in one contiguous allocation, one channel after another,
/// so each channel is addressable as a plain slice. The buffer is owned by
/// the render callback's caller and passed by reference into each fill;
/// callers that might get a short write are expected to `zero()` first.
#[derive(Debug)]
pub struct SampleBuffer {
    channels: usize,
    frames: usize,
    data: Vec<f32>,
}

impl SampleBuffer {
    /// Creates a zeroed buffer.
    ///
    /// # Panics
    /// Panics if `channels` or `frames` is zero.
    pub fn new(channels: usize, frames: usize) -> Self {
        assert!(channels > 0, "buffer needs at least one channel");
        assert!(frames > 0, "buffer needs at least one frame");
        Self {
            channels,
            frames,
            data: vec![0.0; channels * frames],
        }
    }

    /// Creates a buffer shaped after `params` (channel count and
    /// frames-per-buffer).
    pub fn from_parameters(params: &StreamParameters) -> Self {
        Self::new(params.channels(), params.frames_per_buffer())
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Samples of one channel, frame-indexed.
    ///
    /// # Panics
    /// Panics if `channel >= self.channels()`.
    pub fn channel(&self, channel: usize) -> &[f32] {
        let start = channel * self.frames;
        &self.data[start..start + self.frames]
    }

    /// Mutable samples of one channel, frame-indexed.
    ///
    /// # Panics
    /// Panics if `channel >= self.channels()`.
    pub fn channel_mut(&mut self, channel: usize) -> &mut [f32] {
        let start = channel * self.frames;
        &mut self.data[start..start + self.frames]
    }

    pub fn zero(&mut self) {
        self.data.fill(0.0);
    }
}
