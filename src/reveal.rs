//! Scroll reveal bookkeeping.
//!
//! [`RevealController`] owns the `target -> state` map for one attach cycle.
//! It knows nothing about the DOM: the host feeds it intersection entries
//! and applies whatever transitions it reports.

use std::collections::HashMap;
use std::hash::Hash;

pub const REVEAL_CLASS: &str = "reveal";
pub const REVEAL_VISIBLE_CLASS: &str = "reveal-visible";
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.12;
pub const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px";

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub root_margin: String,
    pub threshold: f64,
}

impl RevealOptions {
    pub fn new(root_margin: impl Into<String>, threshold: f64) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_REVEAL_THRESHOLD
        };

        Self {
            root_margin: root_margin.into(),
            threshold,
        }
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_ROOT_MARGIN, DEFAULT_REVEAL_THRESHOLD)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Visible,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry<K> {
    pub target: K,
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Debug)]
pub struct RevealController<K> {
    targets: HashMap<K, RevealState>,
    threshold: f64,
    disposed: bool,
}

impl<K> RevealController<K>
where
    K: Clone + Eq + Hash,
{
    /// Starts tracking exactly the targets present now. Targets that show up
    /// later need a fresh controller.
    pub fn attach(targets: impl IntoIterator<Item = K>, options: &RevealOptions) -> Self {
        Self {
            targets: targets
                .into_iter()
                .map(|target| (target, RevealState::Pending))
                .collect(),
            threshold: options.threshold,
            disposed: false,
        }
    }

    pub fn state(&self, target: &K) -> Option<RevealState> {
        self.targets.get(target).copied()
    }

    pub fn pending(&self) -> usize {
        self.targets
            .values()
            .filter(|state| **state == RevealState::Pending)
            .count()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Applies one batch of intersection entries and returns the targets that
    /// became visible in this batch, in entry order. The caller must stop
    /// observing each returned target.
    pub fn handle_entries(&mut self, entries: impl IntoIterator<Item = IntersectionEntry<K>>) -> Vec<K> {
        if self.disposed {
            return Vec::new();
        }

        let mut revealed = Vec::new();
        for entry in entries {
            if !self.qualifies(&entry) {
                continue;
            }

            if let Some(state) = self.targets.get_mut(&entry.target) {
                if *state == RevealState::Pending {
                    *state = RevealState::Visible;
                    revealed.push(entry.target);
                }
            }
        }

        revealed
    }

    /// Marks every pending target visible at once, for hosts without an
    /// intersection primitive.
    pub fn reveal_all(&mut self) -> Vec<K> {
        if self.disposed {
            return Vec::new();
        }

        let mut revealed = Vec::new();
        for (target, state) in self.targets.iter_mut() {
            if *state == RevealState::Pending {
                *state = RevealState::Visible;
                revealed.push(target.clone());
            }
        }

        revealed
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    fn qualifies(&self, entry: &IntersectionEntry<K>) -> bool {
        entry.is_intersecting && entry.ratio >= self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(target: usize, ratio: f64) -> IntersectionEntry<usize> {
        IntersectionEntry {
            target,
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }

    #[test]
    fn target_crossing_threshold_flips_once() {
        let mut controller = RevealController::attach([0, 1], &RevealOptions::default());

        assert_eq!(controller.handle_entries([entry(0, 0.05)]), Vec::<usize>::new());
        assert_eq!(controller.state(&0), Some(RevealState::Pending));

        assert_eq!(controller.handle_entries([entry(0, 0.12)]), vec![0]);
        assert_eq!(controller.state(&0), Some(RevealState::Visible));
        assert_eq!(controller.pending(), 1);
    }

    #[test]
    fn leaving_and_reentering_does_not_retrigger() {
        let mut controller = RevealController::attach([7], &RevealOptions::default());
        let mut flips = 0;

        for ratio in [0.5, 0.0, 0.8, 0.0, 1.0] {
            flips += controller.handle_entries([entry(7, ratio)]).len();
        }

        assert_eq!(flips, 1);
        assert_eq!(controller.state(&7), Some(RevealState::Visible));
    }

    #[test]
    fn duplicate_entries_in_one_batch_flip_once() {
        let mut controller = RevealController::attach([3], &RevealOptions::default());

        assert_eq!(controller.handle_entries([entry(3, 0.4), entry(3, 0.9)]), vec![3]);
    }

    #[test]
    fn events_after_dispose_change_nothing() {
        let mut controller = RevealController::attach([0, 1], &RevealOptions::default());
        controller.handle_entries([entry(0, 1.0)]);
        controller.dispose();
        controller.dispose();

        assert!(controller.is_disposed());
        assert!(controller.handle_entries([entry(1, 1.0)]).is_empty());
        assert!(controller.reveal_all().is_empty());
        assert_eq!(controller.state(&1), Some(RevealState::Pending));
    }

    #[test]
    fn targets_unknown_at_attach_time_are_ignored() {
        let mut controller = RevealController::attach(["about"], &RevealOptions::default());

        let revealed = controller.handle_entries([IntersectionEntry {
            target: "late-card",
            is_intersecting: true,
            ratio: 1.0,
        }]);

        assert!(revealed.is_empty());
        assert_eq!(controller.state(&"late-card"), None);
    }

    #[test]
    fn non_intersecting_entries_never_reveal() {
        let mut controller = RevealController::attach([0], &RevealOptions::default());

        let revealed = controller.handle_entries([IntersectionEntry {
            target: 0,
            is_intersecting: false,
            ratio: 0.5,
        }]);

        assert!(revealed.is_empty());
    }

    #[test]
    fn reveal_all_flips_only_pending_targets() {
        let mut controller = RevealController::attach([0, 1, 2], &RevealOptions::default());
        controller.handle_entries([entry(1, 1.0)]);

        let mut revealed = controller.reveal_all();
        revealed.sort_unstable();

        assert_eq!(revealed, vec![0, 2]);
        assert_eq!(controller.pending(), 0);
    }

    #[test]
    fn options_clamp_threshold_into_unit_range() {
        assert_eq!(RevealOptions::new("0px", 4.0).threshold, 1.0);
        assert_eq!(RevealOptions::new("0px", -1.0).threshold, 0.0);
        assert_eq!(RevealOptions::new("0px", f64::NAN).threshold, DEFAULT_REVEAL_THRESHOLD);
    }

    #[test]
    fn custom_threshold_is_honoured() {
        let options = RevealOptions::new("0px 0px -40px 0px", 0.5);
        let mut controller = RevealController::attach([0], &options);

        assert!(controller.handle_entries([entry(0, 0.3)]).is_empty());
        assert_eq!(controller.handle_entries([entry(0, 0.5)]), vec![0]);
    }
}
