use concat_idents::concat_idents;

use crate::{
    compass::out::Compass, gnss::out::Satellites, location::out::Location, sync::ReadSpinLock,
};

macro_rules! datastore {
    ($($names:ident: $types:ty),+) => {
        /// Latest output of each pipeline, `None` until first written
        #[derive(Default)]
        pub struct DataStore {
            $($names: ReadSpinLock<Option<$types>>),+
        }

        impl DataStore {
            $(
                concat_idents!(getter = read_, $names {
                    pub fn getter(&self) -> Option<$types> {
                        self.$names.read()
                    }
                });

                concat_idents!(setter = write_, $names {
                    pub fn setter(&self, data: $types) {
                        if self.$names.write(Some(data)).is_err() {
                            error!("Write {} conflict", core::any::type_name::<$types>())
                        }
                    }
                });
            )+
        }
    }
}

datastore! {
    compass: Compass,
    location: Location,
    satellites: Satellites
}

mod test {
    #[test]
    fn test_read_write() {
        use super::DataStore;
        use crate::{
            compass::out::Compass,
            gnss::out::Satellites,
            types::measurement::Bearing,
        };

        let datastore = DataStore::default();
        assert_eq!(datastore.read_compass(), None);
        assert_eq!(datastore.read_satellites(), None);
        assert_eq!(datastore.read_location(), None);

        let compass = Compass::new(Bearing::new(10.0), Bearing::new(12.0));
        datastore.write_compass(compass);
        assert_eq!(datastore.read_compass(), Some(compass));

        let satellites = Satellites { in_fix: 3, ..Default::default() };
        datastore.write_satellites(satellites);
        assert_eq!(datastore.read_satellites().map(|s| s.in_fix), Some(3));
        assert_eq!(datastore.read_location(), None);
    }
}
