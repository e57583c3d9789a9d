use crate::normalize::NormalizeError;
use geo::{Coord, Intersects, Rect};
use serde::{Deserialize, Serialize};

/// latitude/longitude rectangle deciding whether a trajectory point is valid.
/// all four edges are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    /// the region around Beijing covered by the Geolife dataset
    pub const BEIJING: BoundingBox = BoundingBox {
        min_latitude: 39.0,
        max_latitude: 41.0,
        min_longitude: 115.0,
        max_longitude: 117.0,
    };

    pub fn as_rect(&self) -> Rect<f64> {
        Rect::new(
            Coord {
                x: self.min_longitude,
                y: self.min_latitude,
            },
            Coord {
                x: self.max_longitude,
                y: self.max_latitude,
            },
        )
    }

    /// true if the point lies within the box. non-finite coordinates never match.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        if !latitude.is_finite() || !longitude.is_finite() {
            return false;
        }
        let coord = Coord {
            x: longitude,
            y: latitude,
        };
        self.as_rect().intersects(&coord)
    }

    pub fn validate(&self) -> Result<(), NormalizeError> {
        let bounds = [
            self.min_latitude,
            self.max_latitude,
            self.min_longitude,
            self.max_longitude,
        ];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(NormalizeError::ConfigurationError(format!(
                "bounding box must have finite bounds, found {self:?}"
            )));
        }
        if self.min_latitude > self.max_latitude || self.min_longitude > self.max_longitude {
            return Err(NormalizeError::ConfigurationError(format!(
                "bounding box minimum exceeds maximum: {self:?}"
            )));
        }
        Ok(())
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::BEIJING
    }
}
