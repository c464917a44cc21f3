pub trait Velocity {}
pub trait Distance {}

/// Accelerometer unit
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct M2s;

/// Magnetometer unit
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct MicroTesla;

macro_rules! units {
    ($($class:ident => ($value:expr, $trait:ty)),+) => {
        $(
            #[derive(Copy, Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
            pub struct $class;

            impl Into<f32> for $class {
                fn into(self) -> f32 {
                    $value
                }
            }

            impl $trait for $class {}
        )+
    };
}

// Scaled against mm/s and mm respectively
units! {
    Ms => (1000.0, Velocity),
    KMh => (1000_000.0 / 3600.0, Velocity),
    Meter => (1000.0, Distance)
}
