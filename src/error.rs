//! Error types for the presentation host.
//!
//! The animation core itself never fails; these cover configuration,
//! surface allocation and the optional frame recorder.

/// Result type alias for host operations.
pub type Result<T> = std::result::Result<T, PresentationError>;

#[derive(Debug, thiserror::Error)]
pub enum PresentationError {
    /// Rejected command line or derived settings
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The render texture backing the canvas could not be created
    #[error("failed to allocate drawing surface ({width}x{height}): {reason}")]
    Surface {
        width: i32,
        height: i32,
        reason: String,
    },

    /// ffmpeg could not be started
    #[error("failed to start ffmpeg: {0}")]
    RecorderSpawn(#[source] std::io::Error),

    /// Writing a frame to ffmpeg failed
    #[error("failed to write frame to ffmpeg: {0}")]
    RecorderWrite(#[source] std::io::Error),

    /// Waiting for ffmpeg to exit failed
    #[error("failed to wait for ffmpeg: {0}")]
    RecorderWait(#[source] std::io::Error),

    /// ffmpeg exited unsuccessfully
    #[error("ffmpeg exited with {0}")]
    RecorderExit(std::process::ExitStatus),
}
