use spin::Mutex;

use crate::{
    compass::Compass,
    config::{Config, Tiers},
    datastore::DataStore,
    event::Listener,
    gnss::{self, Satellite},
    location::{out::Location, Fix},
    types::measurement::{Acceleration, Magnetism},
};

/// Feeds platform callbacks through each pipeline and publishes the outputs
pub struct Dashboard<'a> {
    datastore: &'a DataStore,
    compass: Mutex<Compass>,
    tiers: Tiers,
}

impl<'a> Dashboard<'a> {
    pub fn new(datastore: &'a DataStore, config: &Config) -> Self {
        let compass = Mutex::new(Compass::new(&config.compass));
        Self { datastore, compass, tiers: config.gnss.tiers }
    }
}

impl<'a> Listener for Dashboard<'a> {
    fn on_acceleration(&self, acceleration: Acceleration) {
        if let Some(output) = self.compass.lock().update_acceleration(acceleration) {
            self.datastore.write_compass(output);
        }
    }

    fn on_magnetism(&self, magnetism: Magnetism) {
        if let Some(output) = self.compass.lock().update_magnetism(magnetism) {
            self.datastore.write_compass(output);
        }
    }

    fn on_satellite_status(&self, snapshot: &[Satellite]) {
        self.datastore.write_satellites(gnss::aggregate(snapshot, &self.tiers));
    }

    fn on_location(&self, fix: &Fix) {
        self.datastore.write_location(Location::from(fix));
    }

    fn on_restart(&self) {
        info!("Restart compass");
        self.compass.lock().reset();
    }
}

mod test {
    #[test]
    fn test_compass_pipeline() {
        use super::Dashboard;
        use crate::{
            config::Config,
            datastore::DataStore,
            event::Listener,
            types::measurement::{Acceleration, Magnetism},
        };

        let datastore = DataStore::default();
        let dashboard = Dashboard::new(&datastore, &Config::default());
        dashboard.on_magnetism(Magnetism::new(-20.0, 0.0, -40.0));
        assert_eq!(datastore.read_compass(), None);

        dashboard.on_acceleration(Acceleration::new(0.0, 0.0, 9.8));
        assert_eq!(datastore.read_compass().map(|c| c.degree), Some(90));

        // Free fall, heading retained
        dashboard.on_acceleration(Acceleration::new(0.0, 0.0, 0.0));
        assert_eq!(datastore.read_compass().map(|c| c.degree), Some(90));
    }

    #[test]
    fn test_restart_reseeds_window() {
        use super::Dashboard;
        use crate::{
            config::Config,
            datastore::DataStore,
            event::Listener,
            types::measurement::{Acceleration, Magnetism},
        };

        let datastore = DataStore::default();
        let dashboard = Dashboard::new(&datastore, &Config::default());
        dashboard.on_acceleration(Acceleration::new(0.0, 0.0, 9.8));
        for _ in 0..10 {
            dashboard.on_magnetism(Magnetism::new(0.0, 20.0, -40.0));
        }
        assert_eq!(datastore.read_compass().map(|c| c.degree), Some(0));

        dashboard.on_restart();
        dashboard.on_magnetism(Magnetism::new(-20.0, 0.0, -40.0));
        assert_eq!(datastore.read_compass().map(|c| c.degree), Some(0));
        dashboard.on_acceleration(Acceleration::new(0.0, 0.0, 9.8));
        assert_eq!(datastore.read_compass().map(|c| c.degree), Some(90));
    }

    #[test]
    fn test_satellites_and_location() {
        use super::Dashboard;
        use crate::{
            config::Config,
            datastore::DataStore,
            event::Listener,
            gnss::{out::Tier, Constellation, Satellite, Tag},
            location::{out::Hemisphere, Fix},
        };

        let datastore = DataStore::default();
        let mut config = Config::default();
        config.set_path("gnss.tiers.high", Some("2")).unwrap();
        let dashboard = Dashboard::new(&datastore, &config);

        let snapshot = [
            Satellite::new(Constellation::Galileo, true),
            Satellite::new(Constellation::Galileo, true),
            Satellite::new(Constellation::BeiDou, true),
        ];
        dashboard.on_satellite_status(&snapshot);
        let satellites = datastore.read_satellites().unwrap();
        assert_eq!(satellites.in_fix, 3);
        assert_eq!(satellites.get(Tag::GAL).tier, Tier::High);
        assert_eq!(satellites.get(Tag::BEI).tier, Tier::Medium);

        dashboard.on_location(&Fix { latitude: -10.0, ..Default::default() });
        let location = datastore.read_location().unwrap();
        assert_eq!(location.latitude.hemisphere, Hemisphere::S);
    }
}
