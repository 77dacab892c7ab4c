//! Frame timing: elapsed-time source and frame-rate readout.
use std::time::{Duration, Instant};

/// Tracks elapsed time between frames and keeps a once-per-second smoothed
/// FPS string for the overlay. `tick` is called exactly once per frame,
/// before animating.
pub struct FrameTimer {
    last_tick: Instant,
    elapsed: f32,
    window_start: Instant,
    window_frames: u32,
    frame_rate: String,
}

impl FrameTimer {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_tick: now,
            elapsed: 0.0,
            window_start: now,
            window_frames: 0,
            frame_rate: String::from("FPS: --"),
        }
    }

    /// Advances the timer and returns the seconds elapsed since the previous
    /// tick. When `lock_fps` is set, sleeps off the remainder of the frame
    /// first so the loop does not spin faster than the cap.
    pub fn tick(&mut self, lock_fps: Option<f32>) -> f32 {
        if let Some(fps) = lock_fps {
            let target = Duration::from_secs_f32(1.0 / fps);
            let spent = self.last_tick.elapsed();
            if spent < target {
                std::thread::sleep(target - spent);
            }
        }

        let now = Instant::now();
        self.elapsed = (now - self.last_tick).as_secs_f32();
        self.last_tick = now;

        self.window_frames += 1;
        let window = (now - self.window_start).as_secs_f32();
        if window >= 1.0 {
            let fps = self.window_frames as f32 / window;
            self.frame_rate = format!("FPS: {fps:.1}");
            self.window_frames = 0;
            self.window_start = now;
        }

        self.elapsed
    }

    /// Seconds elapsed at the most recent tick.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Human-readable frame rate, refreshed about once a second.
    pub fn frame_rate(&self) -> &str {
        &self.frame_rate
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_measures_elapsed_time() {
        let mut timer = FrameTimer::new();
        std::thread::sleep(Duration::from_millis(15));
        let elapsed = timer.tick(None);
        assert!(elapsed >= 0.010);
        assert_eq!(elapsed, timer.elapsed());
    }

    #[test]
    fn lock_fps_enforces_a_floor_on_frame_time() {
        let mut timer = FrameTimer::new();
        timer.tick(None);
        let elapsed = timer.tick(Some(100.0));
        assert!(elapsed >= 0.009);
    }

    #[test]
    fn frame_rate_starts_as_placeholder() {
        let timer = FrameTimer::new();
        assert_eq!(timer.frame_rate(), "FPS: --");
    }
}
