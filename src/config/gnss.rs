use super::pathset::{Error, Path, PathSet, Value};

const DEFAULT_MEDIUM: u8 = 1;
const DEFAULT_HIGH: u8 = 4;

/// Minimum used-in-fix count of each quality tier
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tiers {
    pub medium: u8,
    pub high: u8,
}

impl Default for Tiers {
    fn default() -> Self {
        Self { medium: DEFAULT_MEDIUM, high: DEFAULT_HIGH }
    }
}

impl Tiers {
    pub fn validate(&self) -> Result<(), Error> {
        if self.medium == 0 || self.medium > self.high {
            return Err(Error::InvalidValue);
        }
        Ok(())
    }
}

impl PathSet for Tiers {
    fn set(&mut self, mut path: Path, value: Value) -> Result<(), Error> {
        let mut tiers = *self;
        match path.str()? {
            "medium" => tiers.medium = value.parse_or(DEFAULT_MEDIUM)?,
            "high" => tiers.high = value.parse_or(DEFAULT_HIGH)?,
            _ => return Err(Error::UnknownPath),
        }
        tiers.validate()?;
        *self = tiers;
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GNSS {
    pub tiers: Tiers,
}

impl PathSet for GNSS {
    fn set(&mut self, mut path: Path, value: Value) -> Result<(), Error> {
        match path.str()? {
            "tiers" => self.tiers.set(path, value),
            _ => Err(Error::UnknownPath),
        }
    }
}
