//! Static map content: advisories, gate points, zones, region buttons and
//! the flood level table.
//!
//! The campus the app ships with is available as [`MapDataset::campus`];
//! other maps can be loaded from JSON with the same shape.

use crate::data::{
    levels::FloodLevels,
    points::{MapPoint, Region},
};
use crate::{Error, Result};
use fxhash::{FxHashMap, FxHashSet};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapDataset {
    /// Advisory labels in display order
    pub advisories: Vec<String>,
    pub points: Vec<MapPoint>,
    /// Labels drawn over colored blocks
    pub zones: Vec<Region>,
    /// Targets for the region zoom buttons
    pub regions: Vec<Region>,
    pub levels: FloodLevels,
    /// Display names overriding `MapPoint::name`
    pub friendly_names: FxHashMap<String, String>,
}

static CAMPUS: Lazy<MapDataset> = Lazy::new(build_campus);

impl MapDataset {
    /// The built-in campus map
    pub fn campus() -> &'static MapDataset {
        &CAMPUS
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: MapDataset = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects duplicate point ids and point coordinates outside `[0,1]`
    pub fn validate(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        for point in &self.points {
            if !seen.insert(point.id.as_str()) {
                return Err(Error::InvalidDataset(format!("duplicate point id {}", point.id)));
            }
            if !(0.0..=1.0).contains(&point.x) || !(0.0..=1.0).contains(&point.y) {
                return Err(Error::InvalidDataset(format!(
                    "point {} lies outside the map ({}, {})",
                    point.id, point.x, point.y
                )));
            }
        }
        Ok(())
    }

    pub fn point(&self, id: &str) -> Option<&MapPoint> {
        self.points.iter().find(|point| point.id == id)
    }

    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.id == id)
    }

    pub fn level_for(&self, advisory: &str, id: &str) -> Option<&str> {
        self.levels.level_for(advisory, id)
    }

    /// Display name: override table, then the point's own name, then its id
    pub fn friendly_name(&self, point: &MapPoint) -> String {
        if let Some(name) = self.friendly_names.get(&point.id) {
            return name.clone();
        }
        if !point.name.is_empty() {
            return point.name.clone();
        }
        point.short_label()
    }
}

fn build_campus() -> MapDataset {
    let points = vec![
        MapPoint::new("SV-6", 0.28, 0.40)
            .with_name("SV Vehicle/Ped Entrance/Exit (#6)")
            .with_zoom(2.0)
            .with_zoom_target(0.0, -10.0),
        MapPoint::new("SV-10", 0.0, 0.40)
            .with_name("SVP Church Gate (#10)")
            .with_zoom(1.6)
            .with_zoom_target(-10.0, -10.0),
        MapPoint::new("ST-2", 0.35, 0.49)
            .with_name("ST Pedestrian Entrance/Exit (#2)")
            .with_zoom(1.6)
            .with_zoom_target(0.2, 0.0),
        MapPoint::new("ST-10", 0.36, 0.90)
            .with_name("OZ Vehicle/Ped Entrance/Exit (#10)")
            .with_zoom(1.6)
            .with_zoom_target(0.2, 1.0),
        MapPoint::new("CS-2", 0.51, 0.49)
            .with_name("CS Vehicle/Ped Entrance/Exit (#2)")
            .with_zoom(1.8)
            .with_zoom_target(0.3, 0.49),
        MapPoint::new("CS-3", 0.740, 0.50)
            .with_name("CS Annex Service Gate (#3)")
            .with_zoom(1.6)
            .with_zoom_target(0.640, 0.50),
        MapPoint::new("CS-8", 0.925, 0.750)
            .with_name("Chemistry Laboratory (#8)")
            .with_zoom(1.6)
            .with_zoom_target(0.725, 0.750),
    ];

    let zones = vec![
        Region::new("ZONE-SV", "SV", 0.145, 0.345),
        Region::new("ZONE-ST", "ST", 0.265, 0.660),
        Region::new("ZONE-CS", "CS", 0.705, 0.600),
    ];

    let regions = vec![
        Region::new("STOZ", "ST/OZ Building", -0.265, -10.0),
        Region::new("CSFRC", "CS/FRC Building", 0.525, 0.600),
        Region::new("SV", "SV Building", 0.150, 0.6),
    ];

    let mut levels = FloodLevels::new();
    let table: [(&str, [&str; 10]); 3] = [
        (
            "Yellow Warning",
            [
                "Knee-level", "Gutter-deep", "Knee-level", "Gutter-deep", "Knee-level",
                "Knee-level", "Gutter-deep", "Knee-level", "Knee-level", "Gutter-deep",
            ],
        ),
        (
            "Orange Warning",
            [
                "Gutter-deep", "Half-tire", "Gutter-deep", "Half-tire", "Gutter-deep",
                "Half-tire", "Half-tire", "Gutter-deep", "Half-tire", "Half-tire",
            ],
        ),
        ("Red Warning", ["Half-tire"; 10]),
    ];
    let ids = [
        "SV-6", "SV-10", "ST-2", "ST-10", "CS-2", "CS-3", "CS-8", "ZONE-SV", "ZONE-ST", "ZONE-CS",
    ];
    for (advisory, row) in table {
        for (id, level) in ids.iter().zip(row) {
            levels.insert(advisory, *id, level);
        }
    }

    let friendly_names = [
        ("ST-2", "ST Gate"),
        ("ST-10", "OZ Gate"),
        ("CS-2", "CS Gate"),
        ("CS-3", "Meralco Gate"),
        ("CS-8", "BED Gate"),
        ("SV-10", "SVP Church Gate"),
        ("SV-6", "SV Gate"),
    ]
    .into_iter()
    .map(|(id, name)| (id.to_string(), name.to_string()))
    .collect();

    MapDataset {
        advisories: vec![
            "Red Warning".to_string(),
            "Orange Warning".to_string(),
            "Yellow Warning".to_string(),
        ],
        points,
        zones,
        regions,
        levels,
        friendly_names,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campus_is_valid() {
        let campus = MapDataset::campus();
        campus.validate().unwrap();
        assert_eq!(campus.points.len(), 7);
        assert_eq!(campus.regions.len(), 3);
        assert_eq!(campus.level_for("Orange Warning", "SV-10"), Some("Half-tire"));
        assert_eq!(campus.level_for("Yellow Warning", "ZONE-CS"), Some("Gutter-deep"));
    }

    #[test]
    fn test_friendly_name_fallbacks() {
        let mut dataset = MapDataset::campus().clone();
        let sv6 = dataset.point("SV-6").unwrap().clone();
        assert_eq!(dataset.friendly_name(&sv6), "SV Gate");

        dataset.friendly_names.clear();
        assert_eq!(dataset.friendly_name(&sv6), "SV Vehicle/Ped Entrance/Exit (#6)");

        let bare = MapPoint::new("XY-3", 0.5, 0.5);
        assert_eq!(dataset.friendly_name(&bare), "XY - 3");
    }

    #[test]
    fn test_json_roundtrip_of_campus() {
        let json = MapDataset::campus().to_json().unwrap();
        let parsed = MapDataset::from_json(&json).unwrap();
        assert_eq!(&parsed, MapDataset::campus());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"{ "points": [ { "id": "A", "x": 0.1, "y": 0.1 }, { "id": "A", "x": 0.2, "y": 0.2 } ] }"#;
        assert!(matches!(MapDataset::from_json(json), Err(Error::InvalidDataset(_))));
    }

    #[test]
    fn test_rejects_out_of_range_point() {
        let json = r#"{ "points": [ { "id": "A", "x": 1.2, "y": 0.1 } ] }"#;
        assert!(MapDataset::from_json(json).is_err());
    }
}
