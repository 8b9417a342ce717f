//! Celebration / de-celebration timers
//!
//! Both count frames down to zero independently. Celebration fires on score
//! milestones, de-celebration on catching an enemy.

use crate::consts::{CELEBRATION_EVERY, EFFECT_FRAMES};

/// How the spider should be drawn this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarStyle {
    Rainbow,
    Gray,
    Default,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectTimers {
    pub celebration: u32,
    pub de_celebration: u32,
    /// Last milestone score that already fired a celebration (0 = none)
    last_milestone: u32,
}

impl EffectTimers {
    /// Start a celebration if `score` is a milestone not celebrated yet.
    /// Returns true when a celebration starts.
    pub fn check_celebration(&mut self, score: u32) -> bool {
        let milestone = score > 0 && score.is_multiple_of(CELEBRATION_EVERY);
        if !milestone || self.celebration > 0 || score == self.last_milestone {
            return false;
        }
        self.celebration = EFFECT_FRAMES;
        self.last_milestone = score;
        true
    }

    pub fn start_de_celebration(&mut self) {
        self.de_celebration = EFFECT_FRAMES;
    }

    /// Count both timers down by one frame, stopping at zero
    pub fn decay(&mut self) {
        self.celebration = self.celebration.saturating_sub(1);
        self.de_celebration = self.de_celebration.saturating_sub(1);
    }

    /// Celebration wins over de-celebration
    pub fn avatar_style(&self) -> AvatarStyle {
        if self.celebration > 0 {
            AvatarStyle::Rainbow
        } else if self.de_celebration > 0 {
            AvatarStyle::Gray
        } else {
            AvatarStyle::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_celebration_fires_once_per_milestone() {
        let mut timers = EffectTimers::default();
        assert!(!timers.check_celebration(9));
        assert!(timers.check_celebration(10));
        assert_eq!(timers.celebration, EFFECT_FRAMES);

        // Score holds at 10 well past the effect
        for _ in 0..(EFFECT_FRAMES * 3) {
            assert!(!timers.check_celebration(10));
            timers.decay();
        }
        assert_eq!(timers.celebration, 0);

        assert!(!timers.check_celebration(11));
        assert!(timers.check_celebration(20));
    }

    #[test]
    fn test_zero_score_never_celebrates() {
        let mut timers = EffectTimers::default();
        assert!(!timers.check_celebration(0));
        assert_eq!(timers.celebration, 0);
    }

    #[test]
    fn test_milestone_waits_for_running_celebration() {
        let mut timers = EffectTimers::default();
        assert!(timers.check_celebration(10));
        timers.decay();
        // Reached 20 while the first celebration is still showing
        assert!(!timers.check_celebration(20));
        while timers.celebration > 0 {
            timers.decay();
        }
        assert!(timers.check_celebration(20));
    }

    #[test]
    fn test_style_priority() {
        let mut timers = EffectTimers::default();
        assert_eq!(timers.avatar_style(), AvatarStyle::Default);

        timers.start_de_celebration();
        assert_eq!(timers.avatar_style(), AvatarStyle::Gray);

        timers.check_celebration(10);
        assert_eq!(timers.avatar_style(), AvatarStyle::Rainbow);
    }

    #[test]
    fn test_timers_decay_independently() {
        let mut timers = EffectTimers::default();
        timers.check_celebration(10);
        for _ in 0..10 {
            timers.decay();
        }
        timers.start_de_celebration();
        assert_eq!(timers.celebration, EFFECT_FRAMES - 10);
        assert_eq!(timers.de_celebration, EFFECT_FRAMES);

        for _ in 0..(EFFECT_FRAMES - 10) {
            timers.decay();
        }
        assert_eq!(timers.celebration, 0);
        assert_eq!(timers.de_celebration, 10);
        assert_eq!(timers.avatar_style(), AvatarStyle::Gray);
    }

    proptest! {
        #[test]
        fn timers_never_underflow(steps in 0u32..200, hit_at in 0u32..200) {
            let mut timers = EffectTimers::default();
            for i in 0..steps {
                if i == hit_at {
                    timers.start_de_celebration();
                }
                timers.decay();
                prop_assert!(timers.celebration <= EFFECT_FRAMES);
                prop_assert!(timers.de_celebration <= EFFECT_FRAMES);
            }
        }
    }
}
