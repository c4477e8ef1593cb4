/// Tolerance for comparing normalized f32 samples.
pub const AUDIO_SAMPLE_EPSILON: f32 = 1e-6;
