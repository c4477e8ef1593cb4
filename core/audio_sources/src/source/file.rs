use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::warn;

use crate::bus::SampleBuffer;
use crate::params::StreamParameters;
use crate::source::AudioSource;
use crate::wav::WavPcm;

/// Outcome of the one-shot load attempt. Both `Valid` and `Invalid` are
/// terminal for the lifetime of a `FileSource`.
#[derive(Debug)]
enum LoadState {
    Unloaded,
    Valid(WavPcm),
    Invalid,
}

/// Replays a PCM16 WAV file through the render callback interface.
///
/// The file is read and parsed once, on the first fill. Any I/O or
/// format failure degrades the source permanently to silence: every
/// subsequent fill returns zero frames and leaves the buffer untouched.
/// The caller cannot distinguish a missing file from a corrupt one; both
/// are logged and absorbed.
#[derive(Debug)]
pub struct FileSource {
    params: StreamParameters,
    path: PathBuf,
    state: LoadState,
    /// Frames already delivered to fill calls.
    position: usize,
}

impl FileSource {
    pub fn new(params: StreamParameters, path: impl Into<PathBuf>) -> Self {
        Self {
            params,
            path: path.into(),
            state: LoadState::Unloaded,
            position: 0,
        }
    }

    /// The target stream parameters this source was constructed for.
    pub fn parameters(&self) -> &StreamParameters {
        &self.params
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&mut self) {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("failed to read {}: {err}", self.path.display());
                self.state = LoadState::Invalid;
                return;
            }
        };

        match WavPcm::parse(bytes) {
            Ok(wav) => self.state = LoadState::Valid(wav),
            Err(err) => {
                warn!("rejected {}: {err:?}", self.path.display());
                self.state = LoadState::Invalid;
            }
        }
    }
}

impl AudioSource for FileSource {
    fn fill_buffer(
        &mut self,
        buffer: &mut SampleBuffer,
        _delay: Duration,
        _delay_hint: Duration,
    ) -> usize {
        if matches!(self.state, LoadState::Unloaded) {
            self.load();
        }
        let LoadState::Valid(wav) = &self.state else {
            return 0;
        };

        let remaining = wav.frames().saturating_sub(self.position);
        let frames = buffer.frames().min(remaining);
        let channels = wav.channels().min(buffer.channels());

        for frame in 0..frames {
            for ch in 0..channels {
                let sample = wav.sample(self.position + frame, ch);
                buffer.channel_mut(ch)[frame] = f32::from(sample) / f32::from(i16::MAX);
            }
        }

        self.position += frames;
        frames
    }

    fn report_error(&mut self) {
        warn!("stream error reported for {}", self.path.display());
    }
}
