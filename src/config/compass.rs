use crate::algorithm::attitude::DEFAULT_THRESHOLD;

use super::pathset::{Error, Path, PathSet, Value};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Compass {
    /// Minimum `|m × g|` for a defined attitude
    pub threshold: f32,
}

impl Default for Compass {
    fn default() -> Self {
        Self { threshold: DEFAULT_THRESHOLD }
    }
}

impl Compass {
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.threshold > 0.0) {
            return Err(Error::InvalidValue);
        }
        Ok(())
    }
}

impl PathSet for Compass {
    fn set(&mut self, mut path: Path, value: Value) -> Result<(), Error> {
        let mut compass = *self;
        match path.str()? {
            "threshold" => compass.threshold = value.parse_or(DEFAULT_THRESHOLD)?,
            _ => return Err(Error::UnknownPath),
        }
        compass.validate()?;
        *self = compass;
        Ok(())
    }
}
