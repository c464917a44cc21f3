use super::constellation::{Tag, DISPLAY_ORDER, NUM_TAGS};
use crate::config::Tiers;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    pub fn classify(count: usize, tiers: &Tiers) -> Self {
        if count >= tiers.high as usize {
            Self::High
        } else if count >= tiers.medium as usize {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Count {
    pub tag: Tag,
    pub count: usize,
    pub tier: Tier,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Satellites {
    /// Every satellite used in fix, unrecognized constellations included
    #[serde(rename = "in-fix")]
    pub in_fix: usize,
    pub searching: bool,
    pub counts: [Count; NUM_TAGS],
}

impl Default for Satellites {
    fn default() -> Self {
        let counts = DISPLAY_ORDER.map(|tag| Count { tag, count: 0, tier: Tier::Low });
        Self { in_fix: 0, searching: false, counts }
    }
}

impl Satellites {
    pub fn get(&self, tag: Tag) -> &Count {
        &self.counts[tag.index()]
    }
}

mod test {
    #[test]
    fn test_tier_thresholds() {
        use super::Tier;
        use crate::config::Tiers;

        let tiers = Tiers::default();
        assert_eq!(Tier::classify(0, &tiers), Tier::Low);
        assert_eq!(Tier::classify(1, &tiers), Tier::Medium);
        assert_eq!(Tier::classify(2, &tiers), Tier::Medium);
        assert_eq!(Tier::classify(3, &tiers), Tier::Medium);
        assert_eq!(Tier::classify(4, &tiers), Tier::High);
        assert_eq!(Tier::classify(31, &tiers), Tier::High);
    }

    #[test]
    fn test_serialize_satellites() {
        use serde_json::json;

        use super::Satellites;

        let expected = json!({
            "in-fix": 0,
            "searching": false,
            "counts": [
                {"tag": "GPS", "count": 0, "tier": "low"},
                {"tag": "GLO", "count": 0, "tier": "low"},
                {"tag": "GAL", "count": 0, "tier": "low"},
                {"tag": "BEI", "count": 0, "tier": "low"},
                {"tag": "QZSS", "count": 0, "tier": "low"},
                {"tag": "SBAS", "count": 0, "tier": "low"},
                {"tag": "IRNSS", "count": 0, "tier": "low"},
            ]
        });
        assert_eq!(expected, serde_json::to_value(&Satellites::default()).unwrap());
    }
}
