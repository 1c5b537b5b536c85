const SPINNER_FRAMES: [&str; 6] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴"];
const SPINNER_SPEED: f64 = 10.0;
const SPINNER_MAX_FRAME_DELTA: f64 = 0.25;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SpinnerMode {
    Running,
    Paused,
}

/// Loading indicator phase, driven by the page clock.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Spinner {
    counter: f64,
    last_tick: Option<f64>,
}

impl Spinner {
    pub fn advance(&mut self, now_seconds: f64, mode: SpinnerMode) {
        (self.counter, self.last_tick) =
            advance_spinner_counter(self.counter, self.last_tick, now_seconds, mode);
    }

    pub fn frame(&self) -> &'static str {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = self.counter as usize % SPINNER_FRAMES.len();
        SPINNER_FRAMES[index]
    }
}

pub fn advance_spinner_counter(
    counter: f64,
    last_tick: Option<f64>,
    now_seconds: f64,
    mode: SpinnerMode,
) -> (f64, Option<f64>) {
    let delta = last_tick
        .map(|last| (now_seconds - last).max(0.0).min(SPINNER_MAX_FRAME_DELTA))
        .unwrap_or(0.0);

    #[allow(clippy::cast_precision_loss)]
    let cycle = SPINNER_FRAMES.len() as f64;
    let next_counter = match mode {
        SpinnerMode::Running => (counter + delta * SPINNER_SPEED).rem_euclid(cycle),
        SpinnerMode::Paused => counter.rem_euclid(cycle),
    };

    (next_counter, Some(now_seconds))
}

#[cfg(test)]
mod tests {
    use super::{advance_spinner_counter, Spinner, SpinnerMode, SPINNER_FRAMES, SPINNER_SPEED};

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual}, diff {diff}"
        );
    }

    #[test]
    fn first_tick_initializes_time_without_advancing() {
        let (counter, last_tick) = advance_spinner_counter(1.5, None, 10.0, SpinnerMode::Running);

        assert_close(counter, 1.5);
        assert_eq!(last_tick, Some(10.0));
    }

    #[test]
    fn running_mode_advances_and_wraps() {
        let (counter, _) = advance_spinner_counter(5.5, Some(4.0), 4.1, SpinnerMode::Running);
        assert_close(counter, 0.1f64.mul_add(SPINNER_SPEED, 5.5) % 6.0);
    }

    #[test]
    fn paused_mode_keeps_counter_but_updates_clock() {
        let (counter, last_tick) = advance_spinner_counter(2.25, Some(1.0), 1.2, SpinnerMode::Paused);

        assert_close(counter, 2.25);
        assert_eq!(last_tick, Some(1.2));
    }

    #[test]
    fn large_frame_gap_is_clamped() {
        let (counter, _) = advance_spinner_counter(0.0, Some(3.0), 30.0, SpinnerMode::Running);
        assert_close(counter, 0.25 * SPINNER_SPEED % 6.0);
    }

    #[test]
    fn backwards_time_does_not_reverse() {
        let (counter, _) = advance_spinner_counter(3.5, Some(10.0), 9.0, SpinnerMode::Running);
        assert_close(counter, 3.5);
    }

    #[test]
    fn frame_follows_counter() {
        let mut spinner = Spinner::default();
        assert_eq!(spinner.frame(), SPINNER_FRAMES[0]);

        spinner.advance(0.0, SpinnerMode::Running);
        spinner.advance(0.2, SpinnerMode::Running);
        assert_eq!(spinner.frame(), SPINNER_FRAMES[2]);
    }
}
