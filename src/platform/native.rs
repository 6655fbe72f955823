//! Native frame loop

use std::thread;
use std::time::Duration;

use rand::RngCore;

use crate::animator::Animator;
use crate::renderer::Surface;

/// Roughly one display refresh at 60 Hz
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Drive `animator` until it is stopped or `max_frames` have been drawn.
///
/// Sleeps `interval` between frames. Returns the number of frames drawn.
pub fn run_frames<S: Surface, R: RngCore>(
    animator: &mut Animator<S, R>,
    max_frames: Option<u64>,
    interval: Duration,
) -> u64 {
    let mut drawn = 0u64;
    while max_frames.is_none_or(|max| drawn < max) {
        if !animator.frame() {
            break;
        }
        drawn += 1;
        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }
    log::debug!("Frame loop ended after {} frames", drawn);
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HexConfig;
    use crate::platform::seeded_rng;
    use crate::renderer::RecordingSurface;

    fn animator() -> Animator<RecordingSurface> {
        Animator::new(
            RecordingSurface::default(),
            (640, 480),
            HexConfig::default(),
            seeded_rng(11),
        )
    }

    #[test]
    fn test_runs_requested_frames() {
        let mut a = animator();
        assert_eq!(run_frames(&mut a, Some(25), Duration::ZERO), 25);
        assert_eq!(a.surface().frames(), 25);
    }

    #[test]
    fn test_stopped_animator_draws_nothing() {
        let mut a = animator();
        a.stop();
        assert_eq!(run_frames(&mut a, Some(25), Duration::ZERO), 0);
        assert_eq!(a.surface().frames(), 0);
    }

    #[test]
    fn test_stop_from_another_thread() {
        let mut a = animator();
        let handle = a.stop_handle();
        let stopper = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            handle.stop();
        });

        let drawn = run_frames(&mut a, None, Duration::from_millis(1));
        stopper.join().unwrap();
        assert!(drawn > 0);
        assert!(!a.is_active());
    }
}
