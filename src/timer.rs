/// Fixed-cadence tick schedule driven by elapsed frame time.
#[derive(Debug, Clone, PartialEq)]
pub struct TickTimer {
    interval: f32,
    since_last: f32,
    active: bool,
}

impl Default for TickTimer {
    fn default() -> Self {
        Self { interval: crate::config::DEFAULT_SPEED, since_last: 0.0, active: false }
    }
}

impl TickTimer {
    /// (Re)starts the schedule, dropping any partially elapsed interval.
    pub fn schedule(&mut self, interval: f32) {
        self.interval = interval;
        self.since_last = 0.0;
        self.active = interval > 0.0;
    }

    pub fn cancel(&mut self) {
        self.active = false;
        self.since_last = 0.0;
    }

    pub fn is_scheduled(&self) -> bool {
        self.active
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Feeds `elapsed` seconds and reports whether a tick fell due.
    ///
    /// At most one tick fires per call; a backlog longer than one interval is
    /// dropped, keeping only the remainder.
    pub fn poll(&mut self, elapsed: f32) -> bool {
        if !self.active || !elapsed.is_finite() || elapsed <= 0.0 {
            return false;
        }
        self.since_last += elapsed;
        if self.since_last < self.interval {
            return false;
        }
        self.since_last %= self.interval;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscheduled_timer_never_fires() {
        let mut t = TickTimer::default();
        assert!(!t.poll(10.0));
    }

    #[test]
    fn accumulates_partial_intervals() {
        let mut t = TickTimer::default();
        t.schedule(0.25);
        assert!(!t.poll(0.125));
        assert!(t.poll(0.125));
        assert!(!t.poll(0.125));
    }

    #[test]
    fn long_frame_fires_once_and_keeps_the_remainder() {
        let mut t = TickTimer::default();
        t.schedule(0.5);
        assert!(t.poll(1.75));
        assert!(!t.poll(0.125));
        assert!(t.poll(0.125));
    }

    #[test]
    fn huge_or_bogus_frames_do_not_stall() {
        let mut t = TickTimer::default();
        t.schedule(0.05);
        assert!(t.poll(2.0e6));
        assert!(!t.poll(f32::INFINITY));
        assert!(!t.poll(f32::NAN));
        assert!(t.is_scheduled());
    }

    #[test]
    fn cancel_and_reschedule_drop_progress() {
        let mut t = TickTimer::default();
        t.schedule(0.5);
        t.poll(0.25);
        t.cancel();
        assert!(!t.is_scheduled());
        assert!(!t.poll(1.0));
        t.schedule(0.5);
        assert!(!t.poll(0.25));
        assert!(t.poll(0.25));
    }
}
