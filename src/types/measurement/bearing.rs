use core::fmt;

/// Compass angle in degrees, clockwise from magnetic north, always within `[0, 360)`
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Bearing(f32);

impl Bearing {
    pub fn new(degrees: f32) -> Self {
        let mut degrees = degrees % 360.0;
        if degrees < 0.0 {
            degrees += 360.0;
        }
        // -1e-6 + 360.0 rounds to 360.0 in f32
        if degrees >= 360.0 {
            degrees = 0.0;
        }
        // -0.0 becomes 0.0
        Self(degrees + 0.0)
    }

    pub fn from_radians(radians: f32) -> Self {
        Self::new(radians.to_degrees())
    }

    pub fn degrees(self) -> f32 {
        self.0
    }

    pub fn radians(self) -> f32 {
        self.0.to_radians()
    }

    /// Whole degrees, truncated
    pub fn display(self) -> u16 {
        self.0 as u16
    }

    /// Shortest angular distance to another bearing, within `[0, 180]`
    pub fn distance(self, other: Self) -> f32 {
        let delta = Self::new(self.0 - other.0).0;
        if delta > 180.0 {
            360.0 - delta
        } else {
            delta
        }
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}°", self.display())
    }
}

impl serde::Serialize for Bearing {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f32(self.0)
    }
}

impl<'a> serde::Deserialize<'a> for Bearing {
    fn deserialize<D: serde::Deserializer<'a>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::new(f32::deserialize(deserializer)?))
    }
}

mod test {
    #[test]
    fn test_bearing_normalize() {
        use super::Bearing;

        assert_eq!(Bearing::new(0.0).degrees(), 0.0);
        assert_eq!(Bearing::new(360.0).degrees(), 0.0);
        assert_eq!(Bearing::new(-90.0).degrees(), 270.0);
        assert_eq!(Bearing::new(450.0).degrees(), 90.0);
        assert_eq!(Bearing::new(-0.000001).degrees(), 0.0);
        assert_eq!(Bearing::new(-720.5).degrees(), 359.5);
    }

    #[test]
    fn test_bearing_north_is_positive_zero() {
        use super::Bearing;

        assert!(Bearing::new(-0.0).degrees().is_sign_positive());
        let north = Bearing::from_radians((-0.0f32).atan2(1.0));
        assert!(north.degrees().is_sign_positive());
        assert_eq!("0.0", serde_json::to_string(&north).unwrap());
    }

    #[test]
    fn test_bearing_display() {
        use super::Bearing;

        assert_eq!(Bearing::new(359.99).display(), 359);
        assert_eq!(Bearing::new(42.7).display(), 42);
        assert_eq!("42°", format!("{}", Bearing::new(42.7)));
    }

    #[test]
    fn test_bearing_distance() {
        use super::Bearing;

        assert_eq!(Bearing::new(350.0).distance(Bearing::new(10.0)), 20.0);
        assert_eq!(Bearing::new(10.0).distance(Bearing::new(350.0)), 20.0);
        assert_eq!(Bearing::new(0.0).distance(Bearing::new(180.0)), 180.0);
    }
}
