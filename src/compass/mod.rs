pub mod out;

use crate::{
    algorithm::{
        attitude,
        circular::{Window, CAPACITY},
    },
    config,
    types::measurement::{Acceleration, Bearing, Magnetism},
};

/// Circular mean over the latest `N` raw bearings.
///
/// Every sample in the window weighs the same, and the window is bounded by
/// count rather than time, so bursts of samples shorten the time it spans.
#[derive(Debug, Default)]
pub struct BearingSmoother<const N: usize = CAPACITY> {
    window: Window<N>,
}

impl<const N: usize> BearingSmoother<N> {
    pub fn new() -> Self {
        Self { window: Window::new() }
    }

    pub fn update(&mut self, raw: Bearing) -> Bearing {
        self.window.push(raw);
        self.window.mean().unwrap_or(raw)
    }

    /// `None` until the first update
    pub fn current(&self) -> Option<Bearing> {
        self.window.mean()
    }

    pub fn window(&self) -> &Window<N> {
        &self.window
    }

    pub fn reset(&mut self) {
        self.window.clear()
    }
}

/// Heading pipeline fed by individual sensor events.
///
/// Each event carries a single sensor, so the latest reading of the other one
/// is reused. Output stays at the last defined heading while attitude is
/// undefined.
pub struct Compass {
    threshold: f32,
    acceleration: Option<Acceleration>,
    magnetism: Option<Magnetism>,
    smoother: BearingSmoother,
    output: Option<out::Compass>,
}

impl Compass {
    pub fn new(config: &config::Compass) -> Self {
        Self {
            threshold: config.threshold,
            acceleration: None,
            magnetism: None,
            smoother: BearingSmoother::new(),
            output: None,
        }
    }

    pub fn update_acceleration(&mut self, acceleration: Acceleration) -> Option<out::Compass> {
        self.acceleration = Some(acceleration);
        self.update()
    }

    pub fn update_magnetism(&mut self, magnetism: Magnetism) -> Option<out::Compass> {
        self.magnetism = Some(magnetism);
        self.update()
    }

    fn update(&mut self) -> Option<out::Compass> {
        let (acceleration, magnetism) = match (&self.acceleration, &self.magnetism) {
            (Some(a), Some(m)) => (a, m),
            _ => return self.output,
        };
        match attitude::estimate(acceleration, magnetism, self.threshold) {
            Ok(raw) => {
                let smoothed = self.smoother.update(raw);
                self.output = Some(out::Compass::new(raw, smoothed));
            }
            Err(e) => debug!("{}, keep last heading", e),
        }
        self.output
    }

    pub fn output(&self) -> Option<out::Compass> {
        self.output
    }

    pub fn smoother(&self) -> &BearingSmoother {
        &self.smoother
    }

    pub fn reset(&mut self) {
        self.acceleration = None;
        self.magnetism = None;
        self.smoother.reset();
        self.output = None;
    }
}

mod test {
    #[test]
    fn test_smoother_constant_input() {
        use super::BearingSmoother;
        use crate::types::measurement::Bearing;

        for value in [0.0, 42.0, 180.0, 359.5] {
            let mut smoother: BearingSmoother = BearingSmoother::new();
            assert_eq!(smoother.current(), None);
            for _ in 0..7 {
                let smoothed = smoother.update(Bearing::new(value));
                assert!(smoothed.distance(Bearing::new(value)) < 0.001);
            }
        }
    }

    #[test]
    fn test_smoother_keeps_last_hundred() {
        use super::BearingSmoother;
        use crate::types::measurement::Bearing;

        let mut smoother: BearingSmoother = BearingSmoother::new();
        for i in 0..150 {
            smoother.update(Bearing::new(i as f32 * 2.0));
        }
        assert_eq!(smoother.window().len(), 100);
        let first = smoother.window().iter().next().unwrap();
        assert_eq!(first, Bearing::new(100.0));

        smoother.reset();
        assert!(smoother.window().is_empty());
        assert_eq!(smoother.current(), None);
    }

    #[test]
    fn test_smoother_wraps_north() {
        use super::BearingSmoother;
        use crate::types::measurement::Bearing;

        let mut smoother: BearingSmoother = BearingSmoother::new();
        smoother.update(Bearing::new(350.0));
        let smoothed = smoother.update(Bearing::new(10.0));
        assert!(smoothed.distance(Bearing::new(0.0)) < 0.001);
    }

    #[test]
    fn test_compass_waits_for_both_sensors() {
        use super::Compass;
        use crate::{
            config,
            types::measurement::{Acceleration, Magnetism},
        };

        let mut compass = Compass::new(&config::Compass::default());
        assert_eq!(compass.update_acceleration(Acceleration::new(0.0, 0.0, 9.8)), None);
        let output = compass.update_magnetism(Magnetism::new(-20.0, 0.0, -40.0)).unwrap();
        assert_eq!(output.degree, 90);
        assert_eq!(compass.smoother().window().len(), 1);

        compass.update_acceleration(Acceleration::new(0.0, 0.0, 9.7));
        assert_eq!(compass.smoother().window().len(), 2);
    }

    #[test]
    fn test_compass_holds_on_degenerate_input() {
        use super::Compass;
        use crate::{
            config,
            types::measurement::{Acceleration, Bearing, Magnetism},
        };

        let mut compass = Compass::new(&config::Compass::default());
        compass.update_acceleration(Acceleration::new(0.0, 0.0, 9.8));
        let before = compass.update_magnetism(Magnetism::new(0.0, -20.0, -40.0));
        assert!(before.unwrap().smoothed.distance(Bearing::new(180.0)) < 0.01);

        let after = compass.update_acceleration(Acceleration::new(0.0, 0.0, 0.0));
        assert_eq!(after, before);
        assert_eq!(compass.output(), before);
        assert_eq!(compass.smoother().window().len(), 1);
    }

    #[test]
    fn test_compass_zero_threshold_keeps_window_clean() {
        use super::Compass;
        use crate::{
            config,
            types::measurement::{Acceleration, Bearing, Magnetism},
        };

        let mut compass = Compass::new(&config::Compass { threshold: 0.0 });
        compass.update_acceleration(Acceleration::new(0.0, 0.0, 9.8));
        let before = compass.update_magnetism(Magnetism::new(-20.0, 0.0, -40.0));
        assert_eq!(compass.update_magnetism(Magnetism::new(0.0, 0.0, 0.0)), before);
        assert_eq!(compass.smoother().window().len(), 1);

        let output = compass.update_magnetism(Magnetism::new(-20.0, 0.0, -40.0)).unwrap();
        assert!(output.smoothed.distance(Bearing::new(90.0)) < 0.01);
        assert_eq!(compass.smoother().window().len(), 2);
    }

    #[test]
    fn test_compass_reset() {
        use super::Compass;
        use crate::{
            config,
            types::measurement::{Acceleration, Magnetism},
        };

        let mut compass = Compass::new(&config::Compass::default());
        compass.update_acceleration(Acceleration::new(0.0, 0.0, 9.8));
        compass.update_magnetism(Magnetism::new(0.0, 20.0, -40.0));
        assert!(compass.output().is_some());

        compass.reset();
        assert_eq!(compass.output(), None);
        assert!(compass.smoother().window().is_empty());
        assert_eq!(compass.update_magnetism(Magnetism::new(0.0, 20.0, -40.0)), None);
    }
}
