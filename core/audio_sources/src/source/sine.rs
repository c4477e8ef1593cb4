use std::f32::consts::PI;
use std::time::Duration;

use crate::bus::SampleBuffer;
use crate::source::AudioSource;

/// Deterministic sine tone for testing and diagnostics.
///
/// The generator tracks its position as a running sample count, so the
/// value at index `n` since the last reset is always
/// `sin(2π · freq · n / sample_rate)` regardless of how the fill calls
/// were sized. An optional cumulative cap bounds how many samples are
/// produced before the source goes silent until `reset()`.
#[derive(Clone, Copy, Debug)]
pub struct SineWaveAudioSource {
    channels: usize,
    freq: f32,
    sample_rate: f32,
    /// Samples generated since the last reset; the time argument of the
    /// sine. Grows without wraparound.
    pos: u64,
    cap: Option<u64>,
    consumed: u64,
    callbacks: u32,
    errors: u32,
}

impl SineWaveAudioSource {
    pub fn new(channels: usize, freq: f32, sample_rate: f32) -> Self {
        Self {
            channels,
            freq,
            sample_rate,
            pos: 0,
            cap: None,
            consumed: 0,
            callbacks: 0,
            errors: 0,
        }
    }

    /// Caps cumulative output at `n` samples, counted from the current
    /// position forward. Once the budget is spent every fill writes zero
    /// frames until `reset()`.
    pub fn cap_samples(&mut self, n: u64) {
        self.cap = Some(n);
        self.consumed = 0;
    }

    /// Rewinds the tone to phase zero and restores the full cap budget.
    /// Callback and error counters are untouched.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.consumed = 0;
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of `fill_buffer` calls made so far.
    pub fn callbacks(&self) -> u32 {
        self.callbacks
    }

    /// Number of `report_error` calls made so far.
    pub fn errors(&self) -> u32 {
        self.errors
    }
}

impl AudioSource for SineWaveAudioSource {
    fn fill_buffer(
        &mut self,
        buffer: &mut SampleBuffer,
        _delay: Duration,
        _delay_hint: Duration,
    ) -> usize {
        self.callbacks += 1;

        let want = buffer.frames() as u64;
        let allowed = match self.cap {
            Some(cap) => want.min(cap.saturating_sub(self.consumed)) as usize,
            None => want as usize,
        };

        // Channel 0 carries the tone; further source channels mirror it.
        let channels = self.channels.min(buffer.channels());
        for frame in 0..allowed {
            let n = (self.pos + frame as u64) as f32;
            let sample = (2.0 * PI * self.freq * n / self.sample_rate).sin();
            for ch in 0..channels {
                buffer.channel_mut(ch)[frame] = sample;
            }
        }

        self.pos += allowed as u64;
        self.consumed += allowed as u64;
        allowed
    }

    fn report_error(&mut self) {
        self.errors += 1;
    }
}
