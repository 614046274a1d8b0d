/// One-shot reveal latches
///
/// Each revealable element latches the first time it intersects the
/// viewport and never un-latches, so scrolling away and back does not replay
/// the entrance. Grid items wait out a small stagger between arming and
/// showing; sections show immediately.
use std::collections::HashMap;
use std::time::Duration;

use crate::layout::Section;

/// Stagger step for grid items: position modulo 3 spreads neighbours across
/// three beats.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Identity of a revealable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RevealKey {
    Section(Section),
    Look(usize),
    ArchiveItem(usize),
}

impl RevealKey {
    /// Delay between first visibility and the entrance.
    pub fn stagger(self) -> Duration {
        match self {
            RevealKey::Section(_) => Duration::ZERO,
            RevealKey::Look(index) | RevealKey::ArchiveItem(index) => {
                STAGGER_STEP * (index % 3) as u32
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealPhase {
    /// Never been visible.
    #[default]
    Hidden,
    /// Seen once, waiting out its stagger delay.
    Pending,
    /// Entrance done; terminal.
    Shown,
}

/// Central latch table, keyed by element identity.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    phases: HashMap<RevealKey, RevealPhase>,
}

impl RevealTracker {
    pub fn phase(&self, key: RevealKey) -> RevealPhase {
        self.phases.get(&key).copied().unwrap_or_default()
    }

    pub fn is_shown(&self, key: RevealKey) -> bool {
        self.phase(key) == RevealPhase::Shown
    }

    /// Report that `key` is visible. On the first report the element is
    /// armed: with a zero stagger it shows immediately, otherwise the caller
    /// receives the delay to wait before calling [`settle`](Self::settle).
    /// Every later report is ignored.
    pub fn arm(&mut self, key: RevealKey) -> Option<Duration> {
        if self.phase(key) != RevealPhase::Hidden {
            return None;
        }

        let delay = key.stagger();
        if delay.is_zero() {
            self.phases.insert(key, RevealPhase::Shown);
            None
        } else {
            self.phases.insert(key, RevealPhase::Pending);
            Some(delay)
        }
    }

    /// Stagger elapsed: complete the entrance.
    pub fn settle(&mut self, key: RevealKey) {
        if self.phase(key) == RevealPhase::Pending {
            self.phases.insert(key, RevealPhase::Shown);
        }
    }

    /// Forget every latch. Used when a view is remounted by navigation.
    pub fn reset(&mut self) {
        self.phases.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_show_immediately() {
        let mut tracker = RevealTracker::default();
        let key = RevealKey::Section(Section::Hero);

        assert_eq!(tracker.arm(key), None);
        assert!(tracker.is_shown(key));
    }

    #[test]
    fn test_items_wait_out_their_stagger() {
        let mut tracker = RevealTracker::default();
        let key = RevealKey::ArchiveItem(2);

        assert_eq!(tracker.arm(key), Some(STAGGER_STEP * 2));
        assert_eq!(tracker.phase(key), RevealPhase::Pending);

        tracker.settle(key);
        assert!(tracker.is_shown(key));
    }

    #[test]
    fn test_stagger_is_position_modulo_three() {
        assert_eq!(RevealKey::Look(0).stagger(), Duration::ZERO);
        assert_eq!(RevealKey::Look(1).stagger(), STAGGER_STEP);
        assert_eq!(RevealKey::Look(2).stagger(), STAGGER_STEP * 2);
        assert_eq!(RevealKey::Look(3).stagger(), Duration::ZERO);
        assert_eq!(RevealKey::ArchiveItem(7).stagger(), STAGGER_STEP);
    }

    #[test]
    fn test_latch_is_one_shot() {
        let mut tracker = RevealTracker::default();
        let key = RevealKey::Section(Section::Muse);

        tracker.arm(key);
        assert!(tracker.is_shown(key));

        // Scroll away and back any number of times: no re-arm, no phase
        // change.
        for _ in 0..3 {
            assert_eq!(tracker.arm(key), None);
            assert!(tracker.is_shown(key));
        }
    }

    #[test]
    fn test_pending_item_is_not_rearmed() {
        let mut tracker = RevealTracker::default();
        let key = RevealKey::Look(1);

        assert!(tracker.arm(key).is_some());
        // A second visibility report while pending schedules nothing.
        assert_eq!(tracker.arm(key), None);
        assert_eq!(tracker.phase(key), RevealPhase::Pending);
    }

    #[test]
    fn test_settle_ignores_unarmed_keys() {
        let mut tracker = RevealTracker::default();
        let key = RevealKey::ArchiveItem(4);

        tracker.settle(key);
        assert_eq!(tracker.phase(key), RevealPhase::Hidden);
    }

    #[test]
    fn test_reset_clears_latches() {
        let mut tracker = RevealTracker::default();
        let key = RevealKey::Section(Section::Contact);
        tracker.arm(key);

        tracker.reset();
        assert_eq!(tracker.phase(key), RevealPhase::Hidden);
    }
}
