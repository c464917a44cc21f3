pub mod out;

use chrono::naive::NaiveDateTime;

/// Location fix as delivered by the platform, SI units
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Fix {
    /// Degrees, positive north
    pub latitude: f64,
    /// Degrees, positive east
    pub longitude: f64,
    pub altitude: f32,
    pub vertical_accuracy: f32,
    /// m/s
    pub speed: f32,
    /// m/s, not positive when unknown
    pub speed_accuracy: f32,
    pub datetime: Option<NaiveDateTime>,
}

mod test {
    #[test]
    fn test_deserialize_fix() {
        use super::Fix;

        let line = r#"{"latitude": 31.2, "longitude": -121.5, "altitude": 12.5, "speed": 2.0}"#;
        let fix: Fix = serde_json::from_str(line).unwrap();
        assert_eq!(fix.latitude, 31.2);
        assert_eq!(fix.longitude, -121.5);
        assert_eq!(fix.altitude, 12.5);
        assert_eq!(fix.vertical_accuracy, 0.0);
        assert_eq!(fix.speed_accuracy, 0.0);
        assert_eq!(fix.datetime, None);

        let line = r#"{"speed-accuracy": 0.5, "datetime": "2021-06-01T08:30:00"}"#;
        let fix: Fix = serde_json::from_str(line).unwrap();
        assert_eq!(fix.speed_accuracy, 0.5);
        assert_eq!(fix.datetime.unwrap().to_string(), "2021-06-01 08:30:00");
    }
}
