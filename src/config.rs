use std::path::PathBuf;

use clap::Parser;

use crate::constants::*;
use crate::error::{PresentationError, Result};

/// Aurora lyric presentation
#[derive(Debug, Clone, Parser)]
#[command(name = "about-you", version, about)]
pub struct Args {
    /// Initial window width
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: i32,

    /// Initial window height
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Override the device pixel ratio (capped at 2)
    #[arg(long)]
    pub pixel_ratio: Option<f32>,

    /// Seed for the particle generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start the lyrics immediately instead of waiting for the button
    #[arg(long)]
    pub autostart: bool,

    /// Record every frame to this video file through ffmpeg
    #[arg(long, value_name = "FILE")]
    pub record: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(PresentationError::InvalidConfig(format!(
                "window size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.fps == 0 {
            return Err(PresentationError::InvalidConfig("fps must be at least 1".into()));
        }
        if let Some(ratio) = self.pixel_ratio {
            if !ratio.is_finite() || ratio <= 0.0 {
                return Err(PresentationError::InvalidConfig(format!(
                    "pixel ratio must be a positive number, got {}",
                    ratio
                )));
            }
        }
        Ok(())
    }

    /// Fixed frame period used when recording
    pub fn frame_time(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }

    pub fn recording(&self) -> bool {
        self.record.is_some()
    }
}
