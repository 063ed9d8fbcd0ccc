//! Whole-percent progress notifications for long runs
//!
//! Reports by threshold crossing: a percentage is emitted only when it is
//! strictly greater than the last one reported, so values never repeat or
//! go backwards regardless of how `total_steps` divides into 100.

#[derive(Debug, Clone)]
pub struct ProgressTracker {
    total_steps: u64,
    last_reported: Option<u32>,
}

impl ProgressTracker {
    pub fn new(total_steps: u64) -> Self {
        Self {
            total_steps,
            last_reported: None,
        }
    }

    /// Whole percent complete at `step`, clamped to 100
    pub fn percent(&self, step: u64) -> u32 {
        if self.total_steps == 0 {
            return 100;
        }
        let p = (step as u128 * 100) / self.total_steps as u128;
        p.min(100) as u32
    }

    /// Returns the new percentage if `step` crossed past the last one reported
    /// When several thresholds are crossed at once only the latest is returned
    pub fn update(&mut self, step: u64) -> Option<u32> {
        let p = self.percent(step);
        match self.last_reported {
            Some(last) if p <= last => None,
            _ => {
                self.last_reported = Some(p);
                Some(p)
            }
        }
    }

    pub fn last_reported(&self) -> Option<u32> {
        self.last_reported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(total: u64) -> Vec<u32> {
        let mut tracker = ProgressTracker::new(total);
        (0..=total).filter_map(|s| tracker.update(s)).collect()
    }

    #[test]
    fn every_percent_reported_once_for_long_runs() {
        let reported = collect(250);
        assert_eq!(reported, (0..=100).collect::<Vec<u32>>());
    }

    #[test]
    fn short_runs_skip_but_never_repeat() {
        let reported = collect(50);
        assert_eq!(reported.len(), 51);
        assert_eq!(reported.first(), Some(&0));
        assert_eq!(reported.last(), Some(&100));
        assert!(reported.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn same_step_twice_reports_once() {
        let mut tracker = ProgressTracker::new(1000);
        assert_eq!(tracker.update(10), Some(1));
        assert_eq!(tracker.update(10), None);
        assert_eq!(tracker.update(19), None);
        assert_eq!(tracker.update(20), Some(2));
        assert_eq!(tracker.last_reported(), Some(2));
    }
}
