/// Most overdue firings run in one pump; the rest are dropped and the
/// cadence re-anchors on the current time (e.g. after a backgrounded tab).
pub const MAX_CATCH_UP: u32 = 8;

/// Fixed-period timer driven by an external monotonic clock.
///
/// The first poll fires immediately, then once per elapsed period.
#[derive(Clone, Debug)]
pub struct Cadence {
    period_ms: f64,
    next_due_ms: Option<f64>,
}

impl Cadence {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: f64::from(period_ms.max(1)),
            next_due_ms: None,
        }
    }

    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }

    /// Number of firings due at `now_ms`
    pub fn due(&mut self, now_ms: f64) -> u32 {
        let next = *self.next_due_ms.get_or_insert(now_ms);
        if now_ms < next {
            return 0;
        }

        let overdue = ((now_ms - next) / self.period_ms).floor() as u64 + 1;
        if overdue > MAX_CATCH_UP as u64 {
            self.next_due_ms = Some(now_ms + self.period_ms);
            return MAX_CATCH_UP;
        }

        self.next_due_ms = Some(next + overdue as f64 * self.period_ms);
        overdue as u32
    }

    /// Forget the anchor; the next poll fires immediately
    pub fn reset(&mut self) {
        self.next_due_ms = None;
    }
}
