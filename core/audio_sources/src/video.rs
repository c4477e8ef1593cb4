/// Whether an optional accelerator operation is available on this
/// implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Support {
    Supported,
    Unsupported,
}

impl Support {
    pub fn is_supported(self) -> bool {
        matches!(self, Self::Supported)
    }
}

/// Interface to a video decode accelerator living in another process.
///
/// Optional operations are capability queries with an `Unsupported`
/// default, so a host probes and falls back instead of treating a
/// missing capability as fatal. Accelerator-backed implementations
/// override what they actually provide. No decode logic lives here.
pub trait DecodeAccelerator
where
    Self: Send,
{
    /// Attach a content-decryption session to the decoder.
    fn attach_cdm(&mut self, _cdm_id: u32) -> Support {
        Support::Unsupported
    }

    /// Whether decode calls may be issued from the caller's I/O thread
    /// instead of being marshalled to the accelerator's own thread.
    fn io_thread_decode(&self) -> Support {
        Support::Unsupported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BareAccelerator;
    impl DecodeAccelerator for BareAccelerator {}

    #[test]
    fn test_defaults_report_unsupported() {
        let mut vda = BareAccelerator;
        assert_eq!(vda.attach_cdm(1), Support::Unsupported);
        assert_eq!(vda.io_thread_decode(), Support::Unsupported);
        assert!(!vda.io_thread_decode().is_supported());
    }

    #[test]
    fn test_overrides_are_visible_through_the_trait() {
        struct IoCapable;
        impl DecodeAccelerator for IoCapable {
            fn io_thread_decode(&self) -> Support {
                Support::Supported
            }
        }

        let vda: &dyn DecodeAccelerator = &IoCapable;
        assert!(vda.io_thread_decode().is_supported());
    }
}
