use crate::consts;
use crate::game::Axis;
use std::thread::sleep;
use std::time::{Duration, Instant};

/// Fixed-timestep frame synchronizer.
///
/// [`begin_frame`][FrameClock::begin_frame] stamps the top of the tick;
/// [`end_frame_and_wait`][FrameClock::end_frame_and_wait] sleeps off the rest
/// of the frame period and hands back the input-poll timeout to use on the
/// next tick, so faster target rates poll for keys more often.
///
/// The target rate depends on the movement axis: vertical travel runs at
/// `fps_horizontal × fps_factor` because terminal cells are taller than they
/// are wide.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrameClock {
    fps_horizontal: u32,
    fps_factor: f64,
    fps: u32,
    frame_start: Option<Instant>,
}

impl FrameClock {
    pub(crate) fn new(fps_horizontal: u32, fps_factor: f64) -> FrameClock {
        FrameClock {
            fps_horizontal,
            fps_factor,
            fps: fps_horizontal,
            frame_start: None,
        }
    }

    /// Current target frame rate
    pub(crate) fn fps(&self) -> u32 {
        self.fps
    }

    /// Retarget the clock for the axis the snake is travelling along
    pub(crate) fn set_axis(&mut self, axis: Axis) {
        self.fps = match axis {
            Axis::Horizontal => self.fps_horizontal,
            Axis::Vertical => self.fps_vertical(),
        };
    }

    /// Dev command: jump the horizontal rate to
    /// [`DEV_FPS`][consts::DEV_FPS]
    pub(crate) fn speed_up(&mut self) {
        self.fps_horizontal = consts::DEV_FPS;
    }

    /// Dev command: raise the horizontal rate by one frame per second
    pub(crate) fn speed_up_small(&mut self) {
        self.fps_horizontal += 1;
    }

    /// Record the monotonic timestamp the current frame started at
    pub(crate) fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Sleep off whatever remains of the frame period and return the
    /// recommended input-poll timeout for the next tick (a tenth of the
    /// sleep, floored at [`MIN_POLL_TIMEOUT`][consts::MIN_POLL_TIMEOUT]).
    ///
    /// If the frame ran past its budget, or past
    /// [`STALL_LIMIT`][consts::STALL_LIMIT], skip the sleep and reset the
    /// baseline instead of accumulating drift.
    pub(crate) fn end_frame_and_wait(&mut self) -> Duration {
        let Some(start) = self.frame_start else {
            return consts::DEFAULT_POLL_TIMEOUT;
        };
        let elapsed = start.elapsed();
        let period = Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)));
        if elapsed >= consts::STALL_LIMIT || elapsed >= period {
            self.frame_start = None;
            return consts::MIN_POLL_TIMEOUT;
        }
        let pause = period - elapsed;
        sleep(pause);
        self.frame_start = None;
        (pause / 10).max(consts::MIN_POLL_TIMEOUT)
    }

    fn fps_vertical(&self) -> u32 {
        ((f64::from(self.fps_horizontal) * self.fps_factor) as u32).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_retargeting() {
        let mut clock = FrameClock::new(16, 0.65);
        assert_eq!(clock.fps(), 16);
        clock.set_axis(Axis::Vertical);
        assert_eq!(clock.fps(), 10);
        clock.set_axis(Axis::Horizontal);
        assert_eq!(clock.fps(), 16);
    }

    #[test]
    fn dev_speed_ups() {
        let mut clock = FrameClock::new(16, 0.65);
        clock.speed_up();
        clock.set_axis(Axis::Horizontal);
        assert_eq!(clock.fps(), 25);
        clock.set_axis(Axis::Vertical);
        assert_eq!(clock.fps(), 16);
        clock.speed_up_small();
        clock.set_axis(Axis::Horizontal);
        assert_eq!(clock.fps(), 26);
    }

    #[test]
    fn default_timeout_before_first_frame() {
        let mut clock = FrameClock::new(16, 0.65);
        assert_eq!(clock.end_frame_and_wait(), consts::DEFAULT_POLL_TIMEOUT);
    }

    #[test]
    fn running_behind_skips_the_sleep() {
        let mut clock = FrameClock::new(1000, 0.65);
        clock.begin_frame();
        sleep(Duration::from_millis(5));
        let before = Instant::now();
        assert_eq!(clock.end_frame_and_wait(), consts::MIN_POLL_TIMEOUT);
        assert!(before.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn timeout_is_floored() {
        let mut clock = FrameClock::new(1000, 0.65);
        clock.begin_frame();
        let timeout = clock.end_frame_and_wait();
        assert!(timeout >= consts::MIN_POLL_TIMEOUT);
    }

    #[test]
    fn timeout_tracks_the_sleep() {
        let mut clock = FrameClock::new(10, 0.65);
        clock.begin_frame();
        let timeout = clock.end_frame_and_wait();
        // 100ms period, near-zero elapsed: the poll wait is about a tenth
        assert!(timeout <= Duration::from_millis(10));
        assert!(timeout >= consts::MIN_POLL_TIMEOUT);
    }
}
