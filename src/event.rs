use heapless::Vec;

use crate::{
    gnss::{Satellite, MAX_SATELLITES},
    location::Fix,
    types::measurement::{Acceleration, Magnetism},
};

/// Platform callbacks, invoked at unrelated rates
pub trait Listener {
    fn on_acceleration(&self, acceleration: Acceleration);
    fn on_magnetism(&self, magnetism: Magnetism);
    fn on_satellite_status(&self, snapshot: &[Satellite]);
    fn on_location(&self, fix: &Fix);
    fn on_restart(&self);
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Event {
    Acceleration(Acceleration),
    Magnetism(Magnetism),
    Satellites(Vec<Satellite, MAX_SATELLITES>),
    Location(Fix),
    Restart,
}

impl Event {
    pub fn dispatch(&self, listener: &impl Listener) {
        match self {
            Self::Acceleration(acceleration) => listener.on_acceleration(*acceleration),
            Self::Magnetism(magnetism) => listener.on_magnetism(*magnetism),
            Self::Satellites(snapshot) => listener.on_satellite_status(snapshot),
            Self::Location(fix) => listener.on_location(fix),
            Self::Restart => listener.on_restart(),
        }
    }
}

mod test {
    #[test]
    fn test_deserialize_events() {
        use super::Event;
        use crate::gnss::Constellation;

        let event: Event = serde_json::from_str(r#"{"acceleration": [0.0, 0.0, 9.8]}"#).unwrap();
        assert!(matches!(event, Event::Acceleration(a) if a.0.raw.z == 9.8));

        let line = r#"{"satellites": [
            {"constellation": "gps", "used-in-fix": true},
            {"constellation": "glonass", "used-in-fix": false}
        ]}"#;
        match serde_json::from_str(line).unwrap() {
            Event::Satellites(snapshot) => {
                assert_eq!(snapshot.len(), 2);
                assert_eq!(snapshot[0].constellation, Constellation::GPS);
                assert!(snapshot[0].used_in_fix);
                assert_eq!(snapshot[1].constellation, Constellation::GLONASS);
            }
            event => panic!("Unexpected {:?}", event),
        }

        let event: Event = serde_json::from_str(r#""restart""#).unwrap();
        assert!(matches!(event, Event::Restart));
    }

    #[test]
    fn test_dispatch() {
        use std::cell::RefCell;

        use super::{Event, Listener};
        use crate::{
            gnss::Satellite,
            location::Fix,
            types::measurement::{Acceleration, Magnetism},
        };

        #[derive(Default)]
        struct Recorder(RefCell<std::vec::Vec<&'static str>>);

        impl Listener for Recorder {
            fn on_acceleration(&self, _: Acceleration) {
                self.0.borrow_mut().push("acceleration")
            }

            fn on_magnetism(&self, _: Magnetism) {
                self.0.borrow_mut().push("magnetism")
            }

            fn on_satellite_status(&self, _: &[Satellite]) {
                self.0.borrow_mut().push("satellites")
            }

            fn on_location(&self, _: &Fix) {
                self.0.borrow_mut().push("location")
            }

            fn on_restart(&self) {
                self.0.borrow_mut().push("restart")
            }
        }

        let recorder = Recorder::default();
        Event::Magnetism(Magnetism::new(0.0, 20.0, -40.0)).dispatch(&recorder);
        Event::Location(Fix::default()).dispatch(&recorder);
        Event::Restart.dispatch(&recorder);
        assert_eq!(*recorder.0.borrow(), ["magnetism", "location", "restart"]);
    }
}
