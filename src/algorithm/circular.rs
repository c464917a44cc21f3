//! Circular statistics over bearings.

#[cfg(not(any(test, feature = "std")))]
#[allow(unused_imports)]
use micromath::F32Ext;
use heapless::Deque;

use crate::types::measurement::Bearing;

pub const CAPACITY: usize = 100;

/// Mean direction of a set of angles, `None` when empty.
///
/// Averages unit vectors instead of the angles themselves, so 350° and 10°
/// average to 0° rather than 180°.
pub fn mean<I: IntoIterator<Item = Bearing>>(bearings: I) -> Option<Bearing> {
    let mut count = 0;
    let (mut sum_x, mut sum_y) = (0.0f32, 0.0f32);
    for bearing in bearings {
        let radians = bearing.radians();
        sum_x += radians.cos();
        sum_y += radians.sin();
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some(Bearing::from_radians(sum_y.atan2(sum_x)))
}

/// Sliding window of the latest `N` bearings, oldest evicted first.
pub struct Window<const N: usize = CAPACITY> {
    samples: Deque<Bearing, N>,
}

impl<const N: usize> Default for Window<N> {
    fn default() -> Self {
        Self { samples: Deque::new() }
    }
}

impl<const N: usize> core::fmt::Debug for Window<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<const N: usize> Window<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bearing: Bearing) {
        if self.samples.is_full() {
            self.samples.pop_front();
        }
        self.samples.push_back(bearing).ok();
    }

    pub fn mean(&self) -> Option<Bearing> {
        mean(self.samples.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn clear(&mut self) {
        self.samples.clear()
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = Bearing> + '_ {
        self.samples.iter().copied()
    }
}

mod test {
    #[test]
    fn test_mean_across_north() {
        use super::mean;
        use crate::types::measurement::Bearing;

        let bearing = mean([Bearing::new(350.0), Bearing::new(10.0)]).unwrap();
        assert!(bearing.distance(Bearing::new(0.0)) < 0.001);

        let bearing = mean([Bearing::new(170.0), Bearing::new(190.0)]).unwrap();
        assert!(bearing.distance(Bearing::new(180.0)) < 0.001);

        assert_eq!(mean([Bearing::new(0.0); 0]), None);
    }

    #[test]
    fn test_window_eviction() {
        use super::{Window, CAPACITY};
        use crate::types::measurement::Bearing;

        let mut window: Window = Window::new();
        for i in 0..150 {
            window.push(Bearing::new(i as f32 * 2.0));
        }
        assert_eq!(window.len(), CAPACITY);
        let expected = (50..150).map(|i| Bearing::new(i as f32 * 2.0));
        assert!(window.iter().eq(expected));
    }

    #[test]
    fn test_window_clear() {
        use super::Window;
        use crate::types::measurement::Bearing;

        let mut window = Window::<4>::new();
        assert_eq!(window.mean(), None);
        window.push(Bearing::new(90.0));
        assert!(window.mean().unwrap().distance(Bearing::new(90.0)) < 0.001);
        window.clear();
        assert!(window.is_empty());
        assert_eq!(window.capacity(), 4);
    }
}
