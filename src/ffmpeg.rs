use std::io::Write;
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};

use raylib::prelude::*;
use tracing::{info, warn};

use crate::error::{PresentationError, Result};

/// Pipes raw RGBA frames into an ffmpeg child encoding H.264
pub struct Ffmpeg {
    process: Child,
    stdin: Option<ChildStdin>,
    frames: u64,
}

impl Ffmpeg {
    pub fn spawn(width: i32, height: i32, fps: u32, output: &Path) -> Result<Ffmpeg> {
        let mut process = Command::new("ffmpeg")
            .stdin(Stdio::piped())
            .args(["-loglevel", "error"])
            .arg("-y")
            .args(["-f", "rawvideo"])
            .args(["-pixel_format", "rgba"])
            .args(["-video_size", &format!("{}x{}", width, height)])
            .args(["-framerate", &format!("{}", fps)])
            .args(["-i", "-"])
            .args(["-c:v", "libx264"])
            .args(["-pix_fmt", "yuv420p"])
            .arg(output)
            .spawn()
            .map_err(PresentationError::RecorderSpawn)?;

        let stdin = process.stdin.take();
        info!(?output, width, height, fps, "recording started");
        Ok(Ffmpeg { process, stdin, frames: 0 })
    }

    /// Write one frame read back from a render texture.
    pub fn write(&mut self, image: &Image) -> Result<()> {
        let Some(stdin) = self.stdin.as_mut() else {
            return Ok(());
        };

        let width = image.width() as usize;
        let height = image.height() as usize;
        let row_len = width * 4; // RGBA8
        let pixels = unsafe {
            std::slice::from_raw_parts(image.data() as *const u8, row_len * height)
        };

        // Render textures are read back bottom-up; ffmpeg wants top-down
        for row in pixels.chunks_exact(row_len).rev() {
            stdin.write_all(row).map_err(PresentationError::RecorderWrite)?;
        }
        self.frames += 1;
        Ok(())
    }

    /// Close the pipe and wait for the encoder to flush
    pub fn finish(mut self) -> Result<()> {
        self.stdin = None;
        let status = self.process.wait().map_err(PresentationError::RecorderWait)?;
        if !status.success() {
            return Err(PresentationError::RecorderExit(status));
        }
        info!(frames = self.frames, "recording finished");
        Ok(())
    }
}

impl Drop for Ffmpeg {
    fn drop(&mut self) {
        // Only reached without finish(), e.g. on an early error
        if self.stdin.take().is_some() {
            if let Err(e) = self.process.wait() {
                warn!("failed to wait for ffmpeg: {}", e);
            }
        }
    }
}
