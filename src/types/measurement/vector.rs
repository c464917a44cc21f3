use core::{
    marker,
    ops::{Div, Mul},
};

#[derive(Copy, Clone, Default, Debug)]
pub struct Vector<T, U> {
    pub raw: T,
    unit: marker::PhantomData<U>,
}

impl<T: Copy + Default, U: Copy> Vector<T, U> {
    pub fn new(value: T, _: U) -> Self {
        Self { raw: value, unit: core::marker::PhantomData }
    }
}

impl<T: PartialEq + Copy + Default, U: Copy> PartialEq for Vector<T, U> {
    fn eq(&self, rhs: &Self) -> bool {
        self.raw == rhs.raw
    }
}

impl<V, F: Copy + Default + Into<V>> Vector<V, F>
where
    V: Mul<Output = V> + Div<Output = V> + Copy + Default,
{
    /// Converts into another unit of the same dimension
    pub fn u<T: Copy + Default + Into<V>>(self, _: T) -> Vector<V, T> {
        let from: V = F::default().into();
        let to: V = T::default().into();
        Vector { raw: self.raw * from / to, unit: marker::PhantomData }
    }
}

impl<T: serde::Serialize, U: Copy> serde::Serialize for Vector<T, U> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}
