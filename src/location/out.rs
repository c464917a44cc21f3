use chrono::naive::NaiveDateTime;

use super::Fix;
use crate::types::measurement::{
    unit::{KMh, Meter, Ms},
    Distance, Velocity,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Hemisphere {
    N,
    S,
    E,
    W,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Coordinate {
    pub degrees: f64,
    pub hemisphere: Hemisphere,
}

impl Coordinate {
    fn latitude(value: f64) -> Self {
        let hemisphere = if value < 0.0 { Hemisphere::S } else { Hemisphere::N };
        Self { degrees: libm::fabs(value), hemisphere }
    }

    fn longitude(value: f64) -> Self {
        let hemisphere = if value < 0.0 { Hemisphere::W } else { Hemisphere::E };
        Self { degrees: libm::fabs(value), hemisphere }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Location {
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    pub altitude: Distance<f32, Meter>,
    pub vertical_accuracy: Distance<f32, Meter>,
    pub speed: Velocity<f32, KMh>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_accuracy: Option<Velocity<f32, KMh>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<NaiveDateTime>,
}

impl From<&Fix> for Location {
    fn from(fix: &Fix) -> Self {
        let speed_accuracy = match fix.speed_accuracy {
            accuracy if accuracy > 0.0 => Some(Velocity::new(accuracy, Ms).u(KMh)),
            _ => None,
        };
        Self {
            latitude: Coordinate::latitude(fix.latitude),
            longitude: Coordinate::longitude(fix.longitude),
            altitude: Distance::new(fix.altitude, Meter),
            vertical_accuracy: Distance::new(fix.vertical_accuracy, Meter),
            speed: Velocity::new(fix.speed, Ms).u(KMh),
            speed_accuracy,
            datetime: fix.datetime,
        }
    }
}

mod test {
    #[test]
    fn test_hemispheres() {
        use super::{Hemisphere, Location};
        use crate::location::Fix;

        let fix = Fix { latitude: -33.9, longitude: 151.2, ..Default::default() };
        let location = Location::from(&fix);
        assert_eq!(location.latitude.hemisphere, Hemisphere::S);
        assert_eq!(location.latitude.degrees, 33.9);
        assert_eq!(location.longitude.hemisphere, Hemisphere::E);

        let fix = Fix { latitude: 0.0, longitude: -0.5, ..Default::default() };
        let location = Location::from(&fix);
        assert_eq!(location.latitude.hemisphere, Hemisphere::N);
        assert_eq!(location.longitude.hemisphere, Hemisphere::W);
        assert_eq!(location.longitude.degrees, 0.5);
    }

    #[test]
    fn test_speed_in_kmh() {
        use super::Location;
        use crate::location::Fix;

        let fix = Fix { speed: 10.0, speed_accuracy: 0.5, ..Default::default() };
        let location = Location::from(&fix);
        assert!((location.speed.raw - 36.0).abs() < 0.001);
        assert!((location.speed_accuracy.unwrap().raw - 1.8).abs() < 0.001);

        let fix = Fix { speed: 10.0, speed_accuracy: 0.0, ..Default::default() };
        assert_eq!(Location::from(&fix).speed_accuracy, None);
        let fix = Fix { speed: 10.0, speed_accuracy: -1.0, ..Default::default() };
        assert_eq!(Location::from(&fix).speed_accuracy, None);
    }

    #[test]
    fn test_serialize_location() {
        use serde_json::json;

        use super::Location;
        use crate::location::Fix;

        let fix = Fix {
            latitude: 31.25,
            longitude: -121.5,
            altitude: 12.5,
            vertical_accuracy: 3.0,
            ..Default::default()
        };
        let expected = json!({
            "latitude": {"degrees": 31.25, "hemisphere": "N"},
            "longitude": {"degrees": 121.5, "hemisphere": "W"},
            "altitude": 12.5,
            "vertical-accuracy": 3.0,
            "speed": 0.0,
        });
        assert_eq!(expected, serde_json::to_value(&Location::from(&fix)).unwrap());
    }
}
