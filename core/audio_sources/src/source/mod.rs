use std::time::Duration;

use crate::bus::SampleBuffer;

pub mod file;
pub mod sine;

/// The render callback contract: something that produces PCM samples on
/// demand for an audio output stream.
///
/// The render thread owns a source for its lifetime and drives it from a
/// single callback context; there is no internal locking.
pub trait AudioSource
where
    Self: Send,
{
    /// Write up to `buffer.frames()` frames into `buffer` and return the
    /// number of frames actually written. Frames past the returned count
    /// are left unwritten, so callers that might get a short write should
    /// pre-zero the buffer.
    ///
    /// `delay` is the output latency accumulated since the previous call;
    /// `delay_hint` is the device's own estimate. Sources that do not
    /// schedule against wall time ignore both.
    fn fill_buffer(
        &mut self,
        buffer: &mut SampleBuffer,
        delay: Duration,
        delay_hint: Duration,
    ) -> usize;

    /// Side channel for downstream stream errors (device failure and the
    /// like). Generation state is unaffected; sources at most count or log
    /// the report.
    fn report_error(&mut self);
}
