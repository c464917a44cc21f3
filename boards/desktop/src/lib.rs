#[macro_use]
extern crate log;
extern crate simple_altimeter;

use simple_altimeter::collection::{Collection, Collector};
use simple_altimeter::config::Config;
use simple_altimeter::dashboard::Dashboard;
use simple_altimeter::datastore::DataStore;
use simple_altimeter::event::Event;

/// Replays recorded platform events through the dashboard
pub struct Replay {
    datastore: &'static DataStore,
    dashboard: Dashboard<'static>,
}

impl Replay {
    pub fn new(config: &Config) -> Self {
        let datastore = Box::leak(Box::new(DataStore::default()));
        Self { datastore, dashboard: Dashboard::new(datastore, config) }
    }

    /// Feeds one JSON encoded event, blank lines are ignored
    pub fn feed(&self, line: &str) -> Result<(), serde_json::Error> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }
        let event: Event = serde_json::from_str(line)?;
        trace!("Dispatch {:?}", event);
        event.dispatch(&self.dashboard);
        Ok(())
    }

    pub fn collect(&self) -> Collection {
        Collector::new(self.datastore).collect()
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn test_replay() {
        use simple_altimeter::config::Config;

        use super::Replay;

        let replay = Replay::new(&Config::default());
        assert_eq!(replay.collect().to_string(), "{}");

        replay.feed(r#"{"acceleration": [0.0, 0.0, 9.8]}"#).unwrap();
        replay.feed(r#"{"magnetism": [-20.0, 0.0, -40.0]}"#).unwrap();
        replay.feed("").unwrap();
        replay.feed(r#"{"satellites": [{"constellation": "gps", "used-in-fix": true}]}"#).unwrap();
        assert!(replay.feed("{\"gyroscope\": [0, 0, 0]}").is_err());

        let collection = replay.collect();
        assert_eq!(collection.compass.map(|c| c.degree), Some(90));
        assert_eq!(collection.satellites.map(|s| s.in_fix), Some(1));
        assert_eq!(collection.location, None);
    }
}
