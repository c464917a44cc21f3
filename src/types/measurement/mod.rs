pub mod bearing;
pub mod unit;
pub mod vector;
pub mod vector3;

pub use bearing::Bearing;
pub use vector3::Frame;

pub type Distance<T, U> = vector::Vector<T, U>;
pub type Velocity<T, U> = vector::Vector<T, U>;

/// Accelerometer readout in device frame, gravity included
#[derive(Copy, Clone, Debug, Default)]
pub struct Acceleration(pub vector3::Vector3<f32, unit::M2s, Frame>);

impl Acceleration {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(vector3::Vector3::new(x, y, z, unit::M2s, Frame))
    }
}

impl serde::Serialize for Acceleration {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'a> serde::Deserialize<'a> for Acceleration {
    fn deserialize<D: serde::Deserializer<'a>>(deserializer: D) -> Result<Self, D::Error> {
        let v = vector3::Vector3::deserialize(deserializer)?;
        Ok(Self(v))
    }
}

/// Magnetometer readout in device frame
#[derive(Copy, Clone, Debug, Default)]
pub struct Magnetism(pub vector3::Vector3<f32, unit::MicroTesla, Frame>);

impl Magnetism {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(vector3::Vector3::new(x, y, z, unit::MicroTesla, Frame))
    }
}

impl serde::Serialize for Magnetism {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'a> serde::Deserialize<'a> for Magnetism {
    fn deserialize<D: serde::Deserializer<'a>>(deserializer: D) -> Result<Self, D::Error> {
        let v = vector3::Vector3::deserialize(deserializer)?;
        Ok(Self(v))
    }
}

mod test {
    #[test]
    fn test_velocity_unit_convert() {
        use super::{
            unit::{KMh, Ms},
            Velocity,
        };

        let speed = Velocity::new(10.0f32, Ms).u(KMh);
        assert!((speed.raw - 36.0).abs() < 0.001);
        let speed = Velocity::new(72.0f32, KMh).u(Ms);
        assert!((speed.raw - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_deserialize_readouts() {
        use super::{Acceleration, Magnetism};

        let acceleration: Acceleration = serde_json::from_str("[0.0, 0.0, 9.80665]").unwrap();
        assert_eq!(acceleration.0.raw.z, 9.80665);

        let magnetism: Magnetism = serde_json::from_str("[0.0, 30.0, -40.0]").unwrap();
        assert_eq!(magnetism.0.raw.norm(), 50.0);
        assert_eq!("[0.0,30.0,-40.0]", serde_json::to_string(&magnetism).unwrap());
    }
}
