use core::marker::PhantomData;

use nalgebra::base::Scalar;
use serde::ser::SerializeSeq;

/// Device axes: X to the right, Y towards the top of the screen, Z out of the screen
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Frame;

/// Three axis readout tagged with its unit and frame
#[derive(Copy, Clone, Debug)]
pub struct Vector3<T, U, C> {
    pub raw: nalgebra::Vector3<T>,
    unit: PhantomData<U>,
    frame: PhantomData<C>,
}

impl<T: Scalar + Default, U, C> Default for Vector3<T, U, C> {
    fn default() -> Self {
        Self { raw: Default::default(), unit: PhantomData, frame: PhantomData }
    }
}

impl<T: Scalar, U, C> Vector3<T, U, C> {
    pub fn new(x: T, y: T, z: T, _: U, _: C) -> Self {
        Self { raw: nalgebra::Vector3::new(x, y, z), unit: PhantomData, frame: PhantomData }
    }
}

impl<T: Scalar + serde::Serialize, U, C> serde::Serialize for Vector3<T, U, C> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(3))?;
        for v in self.raw.iter() {
            seq.serialize_element(v)?;
        }
        seq.end()
    }
}

impl<'a, T, U, C> serde::Deserialize<'a> for Vector3<T, U, C>
where
    T: Scalar + serde::Deserialize<'a>,
{
    fn deserialize<D: serde::Deserializer<'a>>(deserializer: D) -> Result<Self, D::Error> {
        let array = <[T; 3]>::deserialize(deserializer)?;
        Ok(Self { raw: array.into(), unit: PhantomData, frame: PhantomData })
    }
}
