//! Frame-rate counter: counts frames and emits one sample per second.

const WINDOW_MS: f64 = 1000.0;

#[derive(Clone, Copy, Debug)]
pub struct FpsCounter {
    frames: u32,
    window_start_ms: f64,
}

impl FpsCounter {
    pub fn new(now_ms: f64) -> Self {
        Self {
            frames: 0,
            window_start_ms: now_ms,
        }
    }

    /// Record one frame. Returns the frame count of the last full second when
    /// a second has elapsed, `None` otherwise.
    pub fn frame(&mut self, now_ms: f64) -> Option<u32> {
        self.frames += 1;
        if now_ms - self.window_start_ms >= WINDOW_MS {
            let fps = self.frames;
            self.frames = 0;
            self.window_start_ms = now_ms;
            Some(fps)
        } else {
            None
        }
    }
}
