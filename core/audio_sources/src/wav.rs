use byteorder::{ByteOrder as _, LittleEndian};

/// Fixed header length of the one container shape we accept:
/// `RIFF` + size + `WAVE` + `fmt ` chunk (16 bytes of fields) + `data` + size.
pub const HEADER_LEN: usize = 44;

/// The `fmt ` chunk size of a canonical PCM file.
const PCM_FMT_CHUNK_SIZE: u32 = 16;

/// Format code for uncompressed linear PCM.
const FORMAT_PCM: u16 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WavError {
    /// Shorter than the fixed 44-byte header.
    TooShort,
    /// One of the `RIFF`/`WAVE`/`fmt `/`data` tags is wrong.
    BadTag(&'static str),
    /// The `fmt ` chunk is not the canonical 16-byte PCM shape.
    UnexpectedFmtSize(u32),
    /// Format code other than linear PCM.
    UnsupportedFormat(u16),
    /// Only 16-bit samples are decoded.
    UnsupportedBitDepth(u16),
    ZeroChannels,
    /// A declared chunk size exceeds the bytes actually present.
    DeclaredSizeExceedsData { declared: u32, available: usize },
}

/// The PCM16 payload of a RIFF/WAVE container, parsed from the fixed
/// layout above. Holds the raw bytes; samples are decoded lazily per
/// access so a fill call only touches the frames it delivers.
#[derive(Debug)]
pub struct WavPcm {
    bytes: Vec<u8>,
    channels: usize,
    sample_rate: u32,
    bits_per_sample: u16,
    data_len: usize,
}

impl WavPcm {
    /// Parses `bytes` as a canonical PCM16 WAV container.
    ///
    /// Any structural inconsistency rejects the whole container: a bad
    /// tag, a non-PCM format code, a bit depth other than 16, or a
    /// declared size larger than the bytes present. Trailing bytes past
    /// the declared data chunk are tolerated.
    pub fn parse(bytes: Vec<u8>) -> Result<Self, WavError> {
        if bytes.len() < HEADER_LEN {
            return Err(WavError::TooShort);
        }

        if &bytes[0..4] != b"RIFF" {
            return Err(WavError::BadTag("RIFF"));
        }
        let riff_size = LittleEndian::read_u32(&bytes[4..8]);
        if riff_size as usize + 8 > bytes.len() {
            return Err(WavError::DeclaredSizeExceedsData {
                declared: riff_size,
                available: bytes.len(),
            });
        }
        if &bytes[8..12] != b"WAVE" {
            return Err(WavError::BadTag("WAVE"));
        }

        if &bytes[12..16] != b"fmt " {
            return Err(WavError::BadTag("fmt "));
        }
        let fmt_size = LittleEndian::read_u32(&bytes[16..20]);
        if fmt_size != PCM_FMT_CHUNK_SIZE {
            return Err(WavError::UnexpectedFmtSize(fmt_size));
        }
        let format = LittleEndian::read_u16(&bytes[20..22]);
        if format != FORMAT_PCM {
            return Err(WavError::UnsupportedFormat(format));
        }
        let channels = LittleEndian::read_u16(&bytes[22..24]);
        if channels == 0 {
            return Err(WavError::ZeroChannels);
        }
        let sample_rate = LittleEndian::read_u32(&bytes[24..28]);
        let bits_per_sample = LittleEndian::read_u16(&bytes[34..36]);
        if bits_per_sample != 16 {
            return Err(WavError::UnsupportedBitDepth(bits_per_sample));
        }

        if &bytes[36..40] != b"data" {
            return Err(WavError::BadTag("data"));
        }
        let data_size = LittleEndian::read_u32(&bytes[40..44]);
        if data_size as usize + HEADER_LEN > bytes.len() {
            return Err(WavError::DeclaredSizeExceedsData {
                declared: data_size,
                available: bytes.len(),
            });
        }

        Ok(Self {
            bytes,
            channels: channels as usize,
            sample_rate,
            bits_per_sample,
            data_len: data_size as usize,
        })
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    /// Whole frames in the data chunk.
    pub fn frames(&self) -> usize {
        self.data_len / (self.channels * 2)
    }

    /// The raw 16-bit sample for one channel of one frame.
    ///
    /// # Panics
    /// Panics if `frame >= self.frames()` or `channel >= self.channels()`.
    pub fn sample(&self, frame: usize, channel: usize) -> i16 {
        assert!(frame < self.frames());
        assert!(channel < self.channels);
        let offset = HEADER_LEN + (frame * self.channels + channel) * 2;
        LittleEndian::read_i16(&self.bytes[offset..offset + 2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn wav_bytes(channels: u16, samples: &[i16]) -> Vec<u8> {
        let spec = hound::WavSpec {
            channels,
            sample_rate: 48000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut buffer = Cursor::new(Vec::new());
        let mut writer = hound::WavWriter::new(&mut buffer, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_parses_canonical_stereo_container() {
        let wav = WavPcm::parse(wav_bytes(2, &[100, -200, 300, -400])).unwrap();
        assert_eq!(wav.channels(), 2);
        assert_eq!(wav.sample_rate(), 48000);
        assert_eq!(wav.bits_per_sample(), 16);
        assert_eq!(wav.frames(), 2);
        assert_eq!(wav.sample(0, 0), 100);
        assert_eq!(wav.sample(0, 1), -200);
        assert_eq!(wav.sample(1, 0), 300);
        assert_eq!(wav.sample(1, 1), -400);
    }

    #[test]
    fn test_rejects_short_input() {
        assert_eq!(WavPcm::parse(vec![0; 10]).unwrap_err(), WavError::TooShort);
    }

    #[test]
    fn test_rejects_corrupt_riff_tag() {
        let mut bytes = wav_bytes(2, &[1, 2, 3, 4]);
        bytes[3] = b'0';
        assert_eq!(
            WavPcm::parse(bytes).unwrap_err(),
            WavError::BadTag("RIFF")
        );
    }

    #[test]
    fn test_rejects_corrupt_data_tag() {
        let mut bytes = wav_bytes(1, &[1, 2]);
        bytes[36] = b'x';
        assert_eq!(
            WavPcm::parse(bytes).unwrap_err(),
            WavError::BadTag("data")
        );
    }

    #[test]
    fn test_rejects_truncated_data_chunk() {
        let mut bytes = wav_bytes(1, &[1, 2, 3, 4]);
        bytes.truncate(bytes.len() - 2);
        // The shortened RIFF size is noticed first.
        assert!(matches!(
            WavPcm::parse(bytes).unwrap_err(),
            WavError::DeclaredSizeExceedsData { .. }
        ));
    }

    #[test]
    fn test_rejects_overstated_data_size() {
        let mut bytes = wav_bytes(1, &[1, 2]);
        let huge = u32::MAX.to_le_bytes();
        bytes[40..44].copy_from_slice(&huge);
        assert!(matches!(
            WavPcm::parse(bytes).unwrap_err(),
            WavError::DeclaredSizeExceedsData { .. }
        ));
    }

    #[test]
    fn test_rejects_non_pcm_format_code() {
        let mut bytes = wav_bytes(1, &[1, 2]);
        bytes[20] = 3; // IEEE float
        assert_eq!(
            WavPcm::parse(bytes).unwrap_err(),
            WavError::UnsupportedFormat(3)
        );
    }

    #[test]
    fn test_rejects_unsupported_bit_depth() {
        let mut bytes = wav_bytes(1, &[1, 2]);
        bytes[34] = 8;
        assert_eq!(
            WavPcm::parse(bytes).unwrap_err(),
            WavError::UnsupportedBitDepth(8)
        );
    }

    #[test]
    fn test_rejects_zero_channels() {
        let mut bytes = wav_bytes(1, &[1, 2]);
        bytes[22] = 0;
        assert_eq!(WavPcm::parse(bytes).unwrap_err(), WavError::ZeroChannels);
    }

    #[test]
    fn test_tolerates_trailing_bytes_past_data_chunk() {
        let mut bytes = wav_bytes(1, &[7]);
        bytes.extend_from_slice(&[0xAA, 0xBB]);
        let wav = WavPcm::parse(bytes).unwrap();
        assert_eq!(wav.frames(), 1);
        assert_eq!(wav.sample(0, 0), 7);
    }
}
