use crate::animation::interpolation::EasingFunction;
use crate::core::config::ViewportConfig;
use crate::core::geo::{Point, Size};
use crate::traits::Lerp;
use serde::{Deserialize, Serialize};

/// Placement of the scaled content inside the viewport.
///
/// `offset` is the viewport-space position of the content's top-left corner
/// after scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Scale factor (1.0 = rendered size)
    pub scale: f64,
    /// Translation in viewport pixels
    pub offset: Point,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Point::zero(),
        }
    }
}

impl Transform {
    pub fn new(scale: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            scale,
            offset: Point::new(offset_x, offset_y),
        }
    }

    /// Create identity transform (no change)
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn is_identity(&self) -> bool {
        (self.scale - 1.0).abs() < 0.001 && self.offset.x.abs() < 0.1 && self.offset.y.abs() < 0.1
    }

    /// Interpolate between two transforms with easing
    pub fn lerp_with_easing(&self, other: &Transform, t: f64, easing: EasingFunction) -> Transform {
        self.lerp(other, easing.apply(t))
    }
}

impl Lerp for Transform {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Transform {
            scale: self.scale.lerp(&other.scale, t),
            offset: self.offset.lerp(&other.offset, t),
        }
    }
}

/// Geometry of the visible window and the content drawn inside it.
///
/// Owns the viewport size and the content's natural size (both supplied by
/// the host), and derives the rendered content size at scale 1 plus the
/// gutter-bounded offset box for any scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The size of the viewport in pixels
    pub size: Size,
    /// Natural pixel size of the background image, as last reported
    natural_size: Size,
    overscan: f64,
    pan_gutter: f64,
    extra_bottom: f64,
    fallback_natural_size: Size,
}

impl Viewport {
    /// Creates a new viewport; the natural size starts at the configured fallback
    pub fn new(size: Size, config: &ViewportConfig) -> Self {
        Self {
            size,
            natural_size: config.fallback_natural_size,
            overscan: config.overscan,
            pan_gutter: config.pan_gutter,
            extra_bottom: config.extra_bottom,
            fallback_natural_size: config.fallback_natural_size,
        }
    }

    /// Sets the viewport size
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Records the content's natural size once asset metadata resolves
    pub fn set_natural_size(&mut self, size: Size) {
        if size.aspect_ratio().is_none() {
            log::warn!(
                "ignoring degenerate natural size {}x{}, keeping fallback aspect",
                size.width,
                size.height
            );
        }
        self.natural_size = size;
    }

    pub fn natural_size(&self) -> Size {
        self.natural_size
    }

    /// Natural aspect ratio, falling back while the reported size is degenerate
    pub fn aspect_ratio(&self) -> f64 {
        self.natural_size
            .aspect_ratio()
            .or_else(|| self.fallback_natural_size.aspect_ratio())
            .unwrap_or(1.0)
    }

    /// Content size at scale 1
    pub fn rendered_size(&self) -> Size {
        let width = (self.size.width * self.overscan).max(self.size.width);
        Size::new(width, width / self.aspect_ratio())
    }

    /// How far the content may travel left/up before the gutter kicks in
    pub fn max_offset(&self, scale: f64) -> Point {
        let rendered = self.rendered_size();
        Point::new(
            (rendered.width * scale - self.size.width).max(0.0),
            (rendered.height * scale - self.size.height + self.extra_bottom).max(0.0),
        )
    }

    /// Inclusive `(min, max)` offset corners for the given scale
    pub fn offset_bounds(&self, scale: f64) -> (Point, Point) {
        let max_offset = self.max_offset(scale);
        (
            Point::new(-max_offset.x - self.pan_gutter, -max_offset.y - self.pan_gutter),
            Point::new(self.pan_gutter, self.pan_gutter),
        )
    }

    /// Clamps an offset into the gutter-bounded box for `scale`
    pub fn clamp_offset(&self, offset: Point, scale: f64) -> Point {
        let (min, max) = self.offset_bounds(scale);
        Point::new(
            offset.x.max(min.x).min(max.x),
            offset.y.max(min.y).min(max.y),
        )
    }

    /// Whether `transform`'s offset already lies inside its bounds
    pub fn contains_offset(&self, transform: &Transform) -> bool {
        let (min, max) = self.offset_bounds(transform.scale);
        (min.x..=max.x).contains(&transform.offset.x) && (min.y..=max.y).contains(&transform.offset.y)
    }

    /// Converts a viewport pixel into unscaled content pixels
    pub fn viewport_to_content(&self, point: &Point, transform: &Transform) -> Point {
        point.subtract(&transform.offset).multiply(1.0 / transform.scale)
    }

    /// Converts unscaled content pixels into a viewport pixel
    pub fn content_to_viewport(&self, point: &Point, transform: &Transform) -> Point {
        point.multiply(transform.scale).add(&transform.offset)
    }

    /// Unscaled content pixel for a normalized `[0,1]` coordinate
    pub fn normalized_to_content(&self, normalized: &Point) -> Point {
        let rendered = self.rendered_size();
        Point::new(normalized.x * rendered.width, normalized.y * rendered.height)
    }

    /// Offset that places `content` (unscaled) at the viewport center at `scale`
    pub fn offset_centering(&self, content: &Point, scale: f64) -> Point {
        self.size.center().subtract(&content.multiply(scale))
    }

    /// Normalized coordinate under a tap given in scaled-layer pixels, clamped to `[0,1]`
    pub fn normalized_at(&self, layer_point: &Point, scale: f64) -> Point {
        let rendered = self.rendered_size();
        Point::new(
            (layer_point.x / (rendered.width * scale)).clamp(0.0, 1.0),
            (layer_point.y / (rendered.height * scale)).clamp(0.0, 1.0),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Size::new(390.0, 844.0), &ViewportConfig::default())
    }
}
