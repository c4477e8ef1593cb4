/// Speaker arrangement of a stream. Only the layouts the render path
/// actually produces are represented; remixing is out of scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelLayout {
    Mono,
    Stereo,
}

impl ChannelLayout {
    pub fn channels(self) -> usize {
        match self {
            Self::Mono => 1,
            Self::Stereo => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterError {
    ZeroSampleRate,
    UnsupportedBitDepth(u16),
    ZeroBufferSize,
}

/// Immutable description of a PCM stream, validated once at construction.
#[derive(Clone, Copy, Debug)]
pub struct StreamParameters {
    sample_rate: u32,
    bits_per_sample: u16,
    channel_layout: ChannelLayout,
    frames_per_buffer: usize,
}

impl StreamParameters {
    pub fn new(
        sample_rate: u32,
        bits_per_sample: u16,
        channel_layout: ChannelLayout,
        frames_per_buffer: usize,
    ) -> Result<Self, ParameterError> {
        if sample_rate == 0 {
            return Err(ParameterError::ZeroSampleRate);
        }
        if !matches!(bits_per_sample, 8 | 16 | 24 | 32) {
            return Err(ParameterError::UnsupportedBitDepth(bits_per_sample));
        }
        if frames_per_buffer == 0 {
            return Err(ParameterError::ZeroBufferSize);
        }

        Ok(Self {
            sample_rate,
            bits_per_sample,
            channel_layout,
            frames_per_buffer,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    pub fn channel_layout(&self) -> ChannelLayout {
        self.channel_layout
    }

    pub fn channels(&self) -> usize {
        self.channel_layout.channels()
    }

    pub fn frames_per_buffer(&self) -> usize {
        self.frames_per_buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_parameters_are_accepted() {
        let params = StreamParameters::new(48000, 16, ChannelLayout::Stereo, 10).unwrap();
        assert_eq!(params.sample_rate(), 48000);
        assert_eq!(params.bits_per_sample(), 16);
        assert_eq!(params.channels(), 2);
        assert_eq!(params.frames_per_buffer(), 10);
    }

    #[test]
    fn test_zero_sample_rate_is_rejected() {
        let result = StreamParameters::new(0, 16, ChannelLayout::Mono, 10);
        assert_eq!(result.unwrap_err(), ParameterError::ZeroSampleRate);
    }

    #[test]
    fn test_odd_bit_depth_is_rejected() {
        let result = StreamParameters::new(8000, 12, ChannelLayout::Mono, 10);
        assert_eq!(result.unwrap_err(), ParameterError::UnsupportedBitDepth(12));
    }

    #[test]
    fn test_zero_buffer_size_is_rejected() {
        let result = StreamParameters::new(8000, 16, ChannelLayout::Mono, 0);
        assert_eq!(result.unwrap_err(), ParameterError::ZeroBufferSize);
    }

    #[test]
    fn test_mono_layout_has_one_channel() {
        assert_eq!(ChannelLayout::Mono.channels(), 1);
        assert_eq!(ChannelLayout::Stereo.channels(), 2);
    }
}
