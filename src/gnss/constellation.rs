use core::fmt;

/// Satellite navigation system reported by the receiver
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Constellation {
    Unknown,
    GPS,
    SBAS,
    GLONASS,
    QZSS,
    BeiDou,
    Galileo,
    IRNSS,
    Other,
}

impl Default for Constellation {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Platform constellation type codes
impl From<u8> for Constellation {
    fn from(code: u8) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::GPS,
            2 => Self::SBAS,
            3 => Self::GLONASS,
            4 => Self::QZSS,
            5 => Self::BeiDou,
            6 => Self::Galileo,
            7 => Self::IRNSS,
            _ => Self::Other,
        }
    }
}

impl Constellation {
    pub fn tag(self) -> Option<Tag> {
        match self {
            Self::GPS => Some(Tag::GPS),
            Self::GLONASS => Some(Tag::GLO),
            Self::BeiDou => Some(Tag::BEI),
            Self::Galileo => Some(Tag::GAL),
            Self::QZSS => Some(Tag::QZSS),
            Self::SBAS => Some(Tag::SBAS),
            Self::IRNSS => Some(Tag::IRNSS),
            Self::Unknown | Self::Other => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Tag {
    GPS,
    GLO,
    GAL,
    BEI,
    QZSS,
    SBAS,
    IRNSS,
}

pub const NUM_TAGS: usize = 7;

pub const DISPLAY_ORDER: [Tag; NUM_TAGS] =
    [Tag::GPS, Tag::GLO, Tag::GAL, Tag::BEI, Tag::QZSS, Tag::SBAS, Tag::IRNSS];

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GPS => "GPS",
            Self::GLO => "GLO",
            Self::GAL => "GAL",
            Self::BEI => "BEI",
            Self::QZSS => "QZSS",
            Self::SBAS => "SBAS",
            Self::IRNSS => "IRNSS",
        }
    }

    /// Position in `DISPLAY_ORDER`
    pub fn index(self) -> usize {
        match self {
            Self::GPS => 0,
            Self::GLO => 1,
            Self::GAL => 2,
            Self::BEI => 3,
            Self::QZSS => 4,
            Self::SBAS => 5,
            Self::IRNSS => 6,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

mod test {
    #[test]
    fn test_display_order_index() {
        use super::DISPLAY_ORDER;

        for (i, tag) in DISPLAY_ORDER.iter().enumerate() {
            assert_eq!(tag.index(), i);
        }
    }

    #[test]
    fn test_constellation_tags() {
        use super::{Constellation, Tag};

        assert_eq!(Constellation::from(1).tag(), Some(Tag::GPS));
        assert_eq!(Constellation::from(3).tag(), Some(Tag::GLO));
        assert_eq!(Constellation::from(5).tag(), Some(Tag::BEI));
        assert_eq!(Constellation::from(6).tag(), Some(Tag::GAL));
        assert_eq!(Constellation::from(7).tag().map(|t| t.as_str()), Some("IRNSS"));
        assert_eq!(Constellation::from(0).tag(), None);
        assert_eq!(Constellation::from(42), Constellation::Other);
        assert_eq!(Constellation::Other.tag(), None);
    }

    #[test]
    fn test_deserialize_constellation() {
        use super::Constellation;

        let constellation: Constellation = serde_json::from_str("\"beidou\"").unwrap();
        assert_eq!(constellation, Constellation::BeiDou);
        assert_eq!("\"GAL\"", serde_json::to_string(&Constellation::Galileo.tag()).unwrap());
    }
}
