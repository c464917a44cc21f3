use crate::{
    compass::out::Compass, datastore::DataStore, gnss::out::Satellites, location::out::Location,
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct Collection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compass: Option<Compass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub satellites: Option<Satellites>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl core::fmt::Display for Collection {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        serde_json_core_fmt::to_fmt(f, self)
    }
}

pub struct Collector<'a>(&'a DataStore);

impl<'a> Collector<'a> {
    pub fn new(datastore: &'a DataStore) -> Self {
        Self(datastore)
    }

    pub fn collect(&self) -> Collection {
        Collection {
            compass: self.0.read_compass(),
            satellites: self.0.read_satellites(),
            location: self.0.read_location(),
        }
    }
}

mod test {
    #[test]
    fn test_display_empty() {
        use super::Collection;

        assert_eq!("{}", format!("{}", Collection::default()));
    }

    #[test]
    fn test_collect() {
        use super::Collector;
        use crate::{compass::out::Compass, datastore::DataStore, types::measurement::Bearing};

        let datastore = DataStore::default();
        datastore.write_compass(Compass::new(Bearing::new(90.0), Bearing::new(90.0)));
        let collection = Collector::new(&datastore).collect();
        assert_eq!(collection.satellites, None);
        assert_eq!(collection.location, None);

        let value: serde_json::Value = serde_json::from_str(&collection.to_string()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(value["compass"]["degree"].as_u64(), Some(90));
        assert_eq!(value["compass"]["rotation"].as_f64(), Some(-90.0));
    }
}
