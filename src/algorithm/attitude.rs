//! Tilt-compensated heading from gravity and geomagnetic field.

use core::fmt;

#[cfg(not(any(test, feature = "std")))]
#[allow(unused_imports)]
use micromath::F32Ext;
use nalgebra::{Matrix3, Vector3};

use crate::types::measurement::{Acceleration, Bearing, Magnetism};

/// Minimum magnitude of `m × g` (µT·m/s²) below which the two vectors are
/// considered collinear.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Error {
    AttitudeUndefined,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::AttitudeUndefined => write!(f, "Gravity and magnetism degenerate"),
        }
    }
}

/// East, North and Up axes of the world expressed in device frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Basis {
    pub east: Vector3<f32>,
    pub north: Vector3<f32>,
    pub up: Vector3<f32>,
}

impl Basis {
    pub fn new(
        gravity: &Vector3<f32>,
        magnetism: &Vector3<f32>,
        threshold: f32,
    ) -> Result<Self, Error> {
        let up = gravity.try_normalize(0.0).ok_or(Error::AttitudeUndefined)?;
        let east = magnetism.cross(gravity);
        if !(east.norm() >= threshold) {
            return Err(Error::AttitudeUndefined);
        }
        let east = east.try_normalize(f32::EPSILON).ok_or(Error::AttitudeUndefined)?;
        // up and east are orthogonal unit vectors
        let north = up.cross(&east);
        Ok(Self { east, north, up })
    }

    /// Rotation from device frame to the East-North-Up world frame
    pub fn rotation(&self) -> Matrix3<f32> {
        Matrix3::from_rows(&[self.east.transpose(), self.north.transpose(), self.up.transpose()])
    }

    /// Bearing of device Y axis projected onto the horizontal plane
    pub fn heading(&self) -> Bearing {
        Bearing::from_radians(self.east.y.atan2(self.north.y))
    }
}

pub fn estimate(
    acceleration: &Acceleration,
    magnetism: &Magnetism,
    threshold: f32,
) -> Result<Bearing, Error> {
    Basis::new(&acceleration.0.raw, &magnetism.0.raw, threshold).map(|basis| basis.heading())
}

mod test {
    #[cfg(test)]
    fn assert_bearing(expected: f32, actual: crate::types::measurement::Bearing) {
        use crate::types::measurement::Bearing;

        let distance = Bearing::new(expected).distance(actual);
        assert!(distance < 0.01, "expected {}, actual {}", expected, actual.degrees());
    }

    #[test]
    fn test_cardinal_headings() {
        use super::{estimate, DEFAULT_THRESHOLD};
        use crate::types::measurement::{Acceleration, Magnetism};

        let flat = Acceleration::new(0.0, 0.0, 9.8);
        let cases = [
            (Magnetism::new(0.0, 20.0, -40.0), 0.0),
            (Magnetism::new(-20.0, 0.0, -40.0), 90.0),
            (Magnetism::new(0.0, -20.0, -40.0), 180.0),
            (Magnetism::new(20.0, 0.0, -40.0), 270.0),
        ];
        for (magnetism, expected) in cases {
            let bearing = estimate(&flat, &magnetism, DEFAULT_THRESHOLD);
            assert_bearing(expected, bearing.unwrap());
        }
    }

    #[test]
    fn test_tilt_compensation() {
        use nalgebra::{Rotation3, Vector3};

        use super::{estimate, DEFAULT_THRESHOLD};
        use crate::types::measurement::{Acceleration, Magnetism};

        let gravity = Vector3::new(0.0, 0.0, 9.8);
        let magnetism = Vector3::new(-20.0, 0.0, -40.0);
        for pitch in [-60.0f32, -30.0, 15.0, 45.0, 80.0] {
            let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), pitch.to_radians());
            let g = rotation * gravity;
            let m = rotation * magnetism;
            let acceleration = Acceleration::new(g.x, g.y, g.z);
            let magnetism = Magnetism::new(m.x, m.y, m.z);
            let bearing = estimate(&acceleration, &magnetism, DEFAULT_THRESHOLD).unwrap();
            assert_bearing(90.0, bearing);
        }
    }

    #[test]
    fn test_orthonormal_basis() {
        use nalgebra::{Matrix3, Vector3};

        use super::{Basis, DEFAULT_THRESHOLD};

        let gravity = Vector3::new(1.2, -3.4, 8.9);
        let magnetism = Vector3::new(12.0, 25.0, -31.0);
        let basis = Basis::new(&gravity, &magnetism, DEFAULT_THRESHOLD).unwrap();
        let rotation = basis.rotation();
        let identity = rotation * rotation.transpose();
        assert!((identity - Matrix3::identity()).norm() < 1e-5);
        assert!((rotation.determinant() - 1.0).abs() < 1e-5);

        let up = rotation * gravity.normalize();
        assert!((up - Vector3::z()).norm() < 1e-5);
    }

    #[test]
    fn test_degenerate_input() {
        use super::{estimate, Error, DEFAULT_THRESHOLD};
        use crate::types::measurement::{Acceleration, Magnetism};

        let magnetism = Magnetism::new(0.0, 20.0, -40.0);
        let result = estimate(&Acceleration::new(0.0, 0.0, 0.0), &magnetism, DEFAULT_THRESHOLD);
        assert_eq!(result, Err(Error::AttitudeUndefined));

        let acceleration = Acceleration::new(0.0, 0.0, 9.8);
        let zero = Magnetism::new(0.0, 0.0, 0.0);
        let result = estimate(&acceleration, &zero, DEFAULT_THRESHOLD);
        assert_eq!(result, Err(Error::AttitudeUndefined));

        let parallel = Magnetism::new(0.0, 0.0, -45.0);
        let result = estimate(&acceleration, &parallel, DEFAULT_THRESHOLD);
        assert_eq!(result, Err(Error::AttitudeUndefined));
    }

    #[test]
    fn test_zero_threshold_still_rejects_collinear() {
        use super::{estimate, Error};
        use crate::types::measurement::{Acceleration, Magnetism};

        let acceleration = Acceleration::new(0.0, 0.0, 9.8);
        let zero = Magnetism::new(0.0, 0.0, 0.0);
        assert_eq!(estimate(&acceleration, &zero, 0.0), Err(Error::AttitudeUndefined));
        let parallel = Magnetism::new(0.0, 0.0, 45.0);
        assert_eq!(estimate(&acceleration, &parallel, 0.0), Err(Error::AttitudeUndefined));
    }
}
