//! Per-constellation used-in-fix counting and signal quality tiers.

pub mod constellation;
pub mod out;

pub use constellation::{Constellation, Tag, DISPLAY_ORDER};

use crate::config::Tiers;
use out::{Satellites, Tier};

/// Maximum satellites in a single status snapshot
pub const MAX_SATELLITES: usize = 128;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Satellite {
    pub constellation: Constellation,
    pub used_in_fix: bool,
}

impl Satellite {
    pub fn new(constellation: Constellation, used_in_fix: bool) -> Self {
        Self { constellation, used_in_fix }
    }
}

/// Satellites of unrecognized constellations count towards `in_fix` but
/// towards no displayed bucket, so `in_fix` may exceed the sum of `counts`.
pub fn aggregate(snapshot: &[Satellite], tiers: &Tiers) -> Satellites {
    let mut satellites = Satellites::default();
    for satellite in snapshot.iter().filter(|s| s.used_in_fix) {
        satellites.in_fix += 1;
        if let Some(tag) = satellite.constellation.tag() {
            satellites.counts[tag.index()].count += 1;
        }
    }
    for count in satellites.counts.iter_mut() {
        count.tier = Tier::classify(count.count, tiers);
    }
    satellites.searching = satellites.in_fix == 0 && !snapshot.is_empty();
    trace!("{} of {} satellites in fix", satellites.in_fix, snapshot.len());
    satellites
}

mod test {
    #[test]
    fn test_aggregate_unrecognized_in_total() {
        use super::{aggregate, out::Tier, Constellation, Satellite, Tag, DISPLAY_ORDER};
        use crate::config::Tiers;

        let gps = Satellite::new(Constellation::GPS, true);
        let snapshot = [
            gps,
            gps,
            gps,
            gps,
            Satellite::new(Constellation::GLONASS, false),
            Satellite::new(Constellation::Other, true),
        ];
        let satellites = aggregate(&snapshot, &Tiers::default());
        assert_eq!(satellites.in_fix, 5);
        assert_eq!(satellites.searching, false);
        assert_eq!(satellites.get(Tag::GPS).count, 4);
        assert_eq!(satellites.get(Tag::GPS).tier, Tier::High);
        for tag in DISPLAY_ORDER.iter().skip(1) {
            assert_eq!(satellites.get(*tag).count, 0);
            assert_eq!(satellites.get(*tag).tier, Tier::Low);
        }
        let tags: Vec<Tag> = satellites.counts.iter().map(|c| c.tag).collect();
        assert_eq!(tags, DISPLAY_ORDER.to_vec());
    }

    #[test]
    fn test_aggregate_empty_snapshot() {
        use super::{aggregate, out::Satellites};
        use crate::config::Tiers;

        let satellites = aggregate(&[], &Tiers::default());
        assert_eq!(satellites, Satellites::default());
        assert_eq!(satellites.in_fix, 0);
        assert!(!satellites.searching);
    }

    #[test]
    fn test_aggregate_searching() {
        use super::{aggregate, Constellation, Satellite};
        use crate::config::Tiers;

        let snapshot = [
            Satellite::new(Constellation::GPS, false),
            Satellite::new(Constellation::Galileo, false),
            Satellite::new(Constellation::Unknown, false),
        ];
        let satellites = aggregate(&snapshot, &Tiers::default());
        assert_eq!(satellites.in_fix, 0);
        assert!(satellites.searching);
    }

    #[test]
    fn test_aggregate_mixed_tiers() {
        use super::{aggregate, out::Tier, Constellation, Satellite, Tag};
        use crate::config::Tiers;

        let mut snapshot = Vec::new();
        for _ in 0..3 {
            snapshot.push(Satellite::new(Constellation::Galileo, true));
        }
        snapshot.push(Satellite::new(Constellation::BeiDou, true));
        snapshot.push(Satellite::new(Constellation::from(2), true));
        let satellites = aggregate(&snapshot, &Tiers::default());
        assert_eq!(satellites.in_fix, 5);
        assert_eq!(satellites.get(Tag::GAL).tier, Tier::Medium);
        assert_eq!(satellites.get(Tag::BEI).tier, Tier::Medium);
        assert_eq!(satellites.get(Tag::SBAS).count, 1);
        assert_eq!(satellites.get(Tag::GPS).tier, Tier::Low);
    }
}
