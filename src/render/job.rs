use std::sync::mpsc;
use std::time::Duration;

use crate::foundation::error::{PhotoplateError, PhotoplateResult};
use crate::render::bitmap::Bitmap;
use crate::render::snapshot::RenderSnapshot;

/// Handle to an export running on the rayon thread pool.
#[derive(Debug)]
pub struct RenderJob {
    rx: mpsc::Receiver<PhotoplateResult<Bitmap>>,
}

impl RenderJob {
    /// Start rendering `snapshot` in the background.
    pub fn spawn(snapshot: RenderSnapshot) -> Self {
        let (tx, rx) = mpsc::sync_channel(1);
        rayon::spawn(move || {
            let out = snapshot.render();
            // The receiver may already be gone; nobody is waiting for the result then.
            let _ = tx.send(out);
        });
        Self { rx }
    }

    /// Block until the export finishes.
    pub fn wait(self) -> PhotoplateResult<Bitmap> {
        self.rx
            .recv()
            .map_err(|_| PhotoplateError::render("background render stopped without a result"))?
    }

    /// Block for at most `timeout`. On timeout the job is handed back so the caller can keep
    /// waiting.
    pub fn wait_timeout(self, timeout: Duration) -> Result<PhotoplateResult<Bitmap>, Self> {
        match self.rx.recv_timeout(timeout) {
            Ok(out) => Ok(out),
            Err(mpsc::RecvTimeoutError::Timeout) => Err(self),
            Err(mpsc::RecvTimeoutError::Disconnected) => Ok(Err(PhotoplateError::render(
                "background render stopped without a result",
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/job.rs"]
mod tests;
