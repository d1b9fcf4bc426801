use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Where programmatic zoom should center for a point, in normalized coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ZoomTarget {
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

/// A tappable gate marker on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Normalized position in `[0,1]`
    pub x: f64,
    pub y: f64,
    /// Scale to use when zooming to this point
    #[serde(default)]
    pub zoom: Option<f64>,
    #[serde(default, alias = "zoom_coordinates")]
    pub zoom_target: Option<ZoomTarget>,
}

impl MapPoint {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            x,
            y,
            zoom: None,
            zoom_target: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = Some(zoom);
        self
    }

    pub fn with_zoom_target(mut self, x: f64, y: f64) -> Self {
        self.zoom_target = Some(ZoomTarget {
            x: Some(x),
            y: Some(y),
        });
        self
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Normalized point zoom centers on: the zoom target when both axes are
    /// set, the marker position otherwise
    pub fn zoom_focus(&self) -> Point {
        match self.zoom_target {
            Some(ZoomTarget {
                x: Some(x),
                y: Some(y),
            }) if x.is_finite() && y.is_finite() => Point::new(x, y),
            _ => self.position(),
        }
    }

    /// Short label derived from the id, `"SV-6"` becomes `"SV - 6"`
    pub fn short_label(&self) -> String {
        self.id.replacen('-', " - ", 1)
    }
}

/// A named area with a normalized center, used for labels and region zoom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    #[serde(default, alias = "title")]
    pub label: String,
    /// Normalized center; may lie outside `[0,1]`, clamping absorbs it
    pub x: f64,
    pub y: f64,
}

impl Region {
    pub fn new(id: impl Into<String>, label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            x,
            y,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
