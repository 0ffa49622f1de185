//! Top-level error type.

/// Error type for the high-level forcing-extension entry point.
///
/// Wraps the member-crate errors without reinterpreting them; the variant
/// tells you which stage of the pipeline failed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a forcing file failed.
    #[error(transparent)]
    Io(#[from] firn_io::IoError),

    /// The bootstrap transform rejected its inputs.
    #[error(transparent)]
    Resample(#[from] firn_resample::ResampleError),
}
