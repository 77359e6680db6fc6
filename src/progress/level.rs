use serde::Serialize;

use crate::model::entity::UserLevel;

/// Breakpoints of the XP ladder as `(tier, floor, ceiling)`. Each tier covers `[floor, ceiling)`.
/// The last ceiling is nominal: Expert is unbounded above.
const TIERS: [(UserLevel, u32, u32); 5] = [
    (UserLevel::Newbie, 0, 500),
    (UserLevel::Learner, 500, 1500),
    (UserLevel::Student, 1500, 3000),
    (UserLevel::Scholar, 3000, 5000),
    (UserLevel::Expert, 5000, 10000),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, utoipa::ToSchema)]
pub struct LevelInfo {
    pub tier: UserLevel,
    pub xp_floor: u32,
    pub xp_ceiling: u32,
    /// Progress from `xp_floor` to `xp_ceiling`. Not clamped: Expert learners past the nominal
    /// ceiling report values above 1.
    pub progress_fraction: f64,
}

impl LevelInfo {
    pub fn progress_percent(&self) -> f64 {
        self.progress_fraction * 100.0
    }

    pub fn xp_to_next(&self, xp: u32) -> u32 {
        self.xp_ceiling.saturating_sub(xp)
    }

    /// The tier after this one, if the ladder has one.
    pub fn next_tier(&self) -> Option<UserLevel> {
        TIERS
            .iter()
            .skip_while(|(tier, ..)| *tier != self.tier)
            .nth(1)
            .map(|(tier, ..)| *tier)
    }
}

/// Tier and progress for an XP total. Boundary values belong to the higher tier.
pub fn level_for(xp: u32) -> LevelInfo {
    let (tier, floor, ceiling) = TIERS
        .iter()
        .rev()
        .find(|(_, floor, _)| xp >= *floor)
        .copied()
        .unwrap_or(TIERS[0]);

    LevelInfo {
        tier,
        xp_floor: floor,
        xp_ceiling: ceiling,
        progress_fraction: f64::from(xp - floor) / f64::from(ceiling - floor),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn zero_is_newbie() {
        let info = level_for(0);
        assert_eq!(info.tier, UserLevel::Newbie);
        assert_eq!((info.xp_floor, info.xp_ceiling), (0, 500));
        assert!(approx(info.progress_fraction, 0.0));
    }

    #[test]
    fn boundaries_belong_to_higher_tier() {
        let cases = [
            (499, UserLevel::Newbie),
            (500, UserLevel::Learner),
            (1499, UserLevel::Learner),
            (1500, UserLevel::Student),
            (2999, UserLevel::Student),
            (3000, UserLevel::Scholar),
            (4999, UserLevel::Scholar),
            (5000, UserLevel::Expert),
        ];

        for (xp, tier) in cases {
            assert_eq!(level_for(xp).tier, tier, "xp = {xp}");
        }

        assert!(approx(level_for(500).progress_fraction, 0.0));
        assert!(approx(level_for(5000).progress_fraction, 0.0));
    }

    #[test]
    fn fraction_within_tier() {
        let info = level_for(2450);
        assert_eq!(info.tier, UserLevel::Student);
        assert!(approx(info.progress_fraction, 950.0 / 1500.0));
        assert!((info.progress_percent() - 63.333).abs() < 0.001);
        assert_eq!(info.xp_to_next(2450), 550);

        assert!(approx(level_for(1000).progress_fraction, 0.5));
        assert!(approx(level_for(4000).progress_fraction, 0.5));
    }

    #[test]
    fn expert_is_unbounded_and_unclamped() {
        let info = level_for(15000);
        assert_eq!(info.tier, UserLevel::Expert);
        assert_eq!(info.xp_ceiling, 10000);
        assert!(approx(info.progress_fraction, 2.0));
        assert_eq!(info.xp_to_next(15000), 0);
        assert_eq!(info.next_tier(), None);
    }

    #[test]
    fn next_tier_follows_ladder() {
        assert_eq!(level_for(0).next_tier(), Some(UserLevel::Learner));
        assert_eq!(level_for(3200).next_tier(), Some(UserLevel::Expert));
    }

    #[test]
    fn fraction_is_monotone_within_tier() {
        for (_, floor, ceiling) in TIERS {
            let mut last = -1.0;
            for xp in (floor..ceiling).step_by(37) {
                let fraction = level_for(xp).progress_fraction;
                assert!((0.0..1.0).contains(&fraction));
                assert!(fraction > last);
                last = fraction;
            }
        }
    }
}
