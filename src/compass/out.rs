use crate::types::measurement::Bearing;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct Compass {
    /// Latest defined estimate, before smoothing
    pub raw: Bearing,
    pub smoothed: Bearing,
    /// Smoothed bearing in whole degrees
    pub degree: u16,
    /// Dial rotation the renderer animates to, not unwrapped against the
    /// previous rotation
    pub rotation: f32,
}

impl Compass {
    pub fn new(raw: Bearing, smoothed: Bearing) -> Self {
        Self { raw, smoothed, degree: smoothed.display(), rotation: 0.0 - smoothed.degrees() }
    }
}

mod test {
    #[test]
    fn test_serialize() {
        use serde_json::json;

        use super::Compass;
        use crate::types::measurement::Bearing;

        let compass = Compass::new(Bearing::new(91.5), Bearing::new(90.5));
        let expected = json!({"raw": 91.5, "smoothed": 90.5, "degree": 90, "rotation": -90.5});
        assert_eq!(expected, serde_json::to_value(&compass).unwrap());
    }

    #[test]
    fn test_serialize_north() {
        use super::Compass;
        use crate::types::measurement::Bearing;

        let compass = Compass::new(Bearing::new(-0.0), Bearing::new(-0.0));
        let expected = r#"{"raw":0.0,"smoothed":0.0,"degree":0,"rotation":0.0}"#;
        assert_eq!(expected, serde_json::to_string(&compass).unwrap());
    }
}
