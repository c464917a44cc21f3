pub mod compass;
pub mod gnss;
pub mod pathset;

pub use compass::Compass;
pub use gnss::{Tiers, GNSS};
use pathset::{Error, Path, PathSet, Value};

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub compass: Compass,
    pub gnss: GNSS,
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        self.compass.validate()?;
        self.gnss.tiers.validate()
    }

    /// Sets a single entry by dotted path, e.g. `gnss.tiers.high`.
    /// `None` restores the entry's default.
    pub fn set_path(&mut self, path: &str, value: Option<&str>) -> Result<(), Error> {
        self.set(Path::from(path), Value(value))
    }
}

impl PathSet for Config {
    fn set(&mut self, mut path: Path, value: Value) -> Result<(), Error> {
        match path.str()? {
            "compass" => self.compass.set(path, value),
            "gnss" => self.gnss.set(path, value),
            _ => Err(Error::UnknownPath),
        }
    }
}

mod test {
    #[test]
    fn test_default_config() {
        use super::Config;

        let config = Config::default();
        assert_eq!(config.compass.threshold, 0.1);
        assert_eq!(config.gnss.tiers.medium, 1);
        assert_eq!(config.gnss.tiers.high, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        use super::Config;

        let config: Config = serde_json::from_str(r#"{"gnss": {"tiers": {"high": 6}}}"#).unwrap();
        assert_eq!(config.compass, Default::default());
        assert_eq!(config.gnss.tiers.medium, 1);
        assert_eq!(config.gnss.tiers.high, 6);

        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_set_path() {
        use super::{pathset::Error, Config};

        let mut config = Config::default();
        assert_eq!(config.set_path("compass.threshold", Some("0.5")), Ok(()));
        assert_eq!(config.compass.threshold, 0.5);
        assert_eq!(config.set_path("compass.threshold", None), Ok(()));
        assert_eq!(config.compass.threshold, 0.1);

        assert_eq!(config.set_path("gnss.tiers.high", Some("8")), Ok(()));
        assert_eq!(config.gnss.tiers.high, 8);
        assert_eq!(config.set_path("gnss.tiers.medium", Some("9")), Err(Error::InvalidValue));
        assert_eq!(config.gnss.tiers.medium, 1);
        assert_eq!(config.set_path("gnss.tiers.medium", Some("0")), Err(Error::InvalidValue));
        assert_eq!(config.set_path("gnss.tiers.low", Some("0")), Err(Error::UnknownPath));
        assert_eq!(config.set_path("compass.threshold", Some("-1")), Err(Error::InvalidValue));
        assert_eq!(config.set_path("compass.threshold", Some("0")), Err(Error::InvalidValue));
        assert_eq!(config.compass.threshold, 0.1);
        assert_eq!(config.set_path("compass.threshold", Some("abc")), Err(Error::InvalidValue));
        assert_eq!(config.set_path("osd", Some("1")), Err(Error::UnknownPath));
        assert_eq!(config.set_path("gnss", Some("1")), Err(Error::UnknownPath));
    }
}
