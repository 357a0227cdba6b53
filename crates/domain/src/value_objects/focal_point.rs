//! Portrait focal point, expressed as a CSS `object-position` percentage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A focal point in percent of the image's width and height (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FocalPoint {
    x: f32,
    y: f32,
}

/// Size of a rectangle in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Where an image lands inside its container under `object-fit: contain`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedBounds {
    pub offset_x: f64,
    pub offset_y: f64,
    pub width: f64,
    pub height: f64,
}

impl RenderedBounds {
    /// Letterbox (wide image) or pillarbox (tall image) `natural` inside `container`.
    pub fn contain(container: Size, natural: Size) -> Option<Self> {
        if container.width <= 0.0
            || container.height <= 0.0
            || natural.width <= 0.0
            || natural.height <= 0.0
        {
            return None;
        }

        let container_aspect = container.width / container.height;
        let image_aspect = natural.width / natural.height;

        Some(if image_aspect > container_aspect {
            let height = container.width / image_aspect;
            Self {
                offset_x: 0.0,
                offset_y: (container.height - height) / 2.0,
                width: container.width,
                height,
            }
        } else {
            let width = container.height * image_aspect;
            Self {
                offset_x: (container.width - width) / 2.0,
                offset_y: 0.0,
                width,
                height: container.height,
            }
        })
    }
}

impl FocalPoint {
    pub const CENTER: Self = Self { x: 50.0, y: 50.0 };

    /// Create a focal point, clamping both axes to 0-100.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(0.0, 100.0),
            y: y.clamp(0.0, 100.0),
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Focal point under a click at (`click_x`, `click_y`), relative to the
    /// container's top-left corner. Clicks in the letterbox clamp to the edge.
    pub fn from_click(click_x: f64, click_y: f64, bounds: RenderedBounds) -> Self {
        let x = (click_x - bounds.offset_x) / bounds.width * 100.0;
        let y = (click_y - bounds.offset_y) / bounds.height * 100.0;
        Self::new(x as f32, y as f32)
    }

    /// Marker position inside the container for this focal point.
    pub fn marker_in(&self, bounds: RenderedBounds) -> (f64, f64) {
        (
            bounds.offset_x + f64::from(self.x) / 100.0 * bounds.width,
            bounds.offset_y + f64::from(self.y) / 100.0 * bounds.height,
        )
    }
}

impl Default for FocalPoint {
    fn default() -> Self {
        Self::CENTER
    }
}

impl fmt::Display for FocalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}% {:.1}%", self.x, self.y)
    }
}

impl FromStr for FocalPoint {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        let keyword = match value.as_str() {
            "center" => Some((50.0, 50.0)),
            "top left" => Some((0.0, 0.0)),
            "top" => Some((50.0, 0.0)),
            "top right" => Some((100.0, 0.0)),
            "left" => Some((0.0, 50.0)),
            "right" => Some((100.0, 50.0)),
            "bottom left" => Some((0.0, 100.0)),
            "bottom" => Some((50.0, 100.0)),
            "bottom right" => Some((100.0, 100.0)),
            _ => None,
        };
        if let Some((x, y)) = keyword {
            return Ok(Self::new(x, y));
        }

        let mut parts = value.split_whitespace();
        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(DomainError::parse(format!("Invalid focal point: {}", s)));
        };
        let percent = |part: &str| {
            part.strip_suffix('%')
                .and_then(|n| n.parse::<f32>().ok())
                .filter(|n| n.is_finite())
                .ok_or_else(|| DomainError::parse(format!("Invalid focal point: {}", s)))
        };
        Ok(Self::new(percent(x)?, percent(y)?))
    }
}

impl TryFrom<String> for FocalPoint {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<FocalPoint> for String {
    fn from(point: FocalPoint) -> String {
        point.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod parsing {
        use super::*;

        #[test]
        fn center_keyword() {
            assert_eq!("center".parse::<FocalPoint>().unwrap(), FocalPoint::CENTER);
        }

        #[test]
        fn legacy_keywords() {
            let p: FocalPoint = "bottom right".parse().unwrap();
            assert_eq!((p.x(), p.y()), (100.0, 100.0));
            let p: FocalPoint = "top".parse().unwrap();
            assert_eq!((p.x(), p.y()), (50.0, 0.0));
        }

        #[test]
        fn percentages() {
            let p: FocalPoint = "12.5% 80%".parse().unwrap();
            assert_eq!((p.x(), p.y()), (12.5, 80.0));
        }

        #[test]
        fn out_of_range_is_clamped() {
            let p: FocalPoint = "150% 40%".parse().unwrap();
            assert_eq!(p.x(), 100.0);
        }

        #[test]
        fn rejects_garbage() {
            assert!("middle".parse::<FocalPoint>().is_err());
            assert!("10 20".parse::<FocalPoint>().is_err());
            assert!("10% 20% 30%".parse::<FocalPoint>().is_err());
        }

        #[test]
        fn display_uses_one_decimal() {
            assert_eq!(FocalPoint::new(33.333, 0.0).to_string(), "33.3% 0.0%");
        }
    }

    mod clicking {
        use super::*;

        #[test]
        fn wide_image_is_letterboxed() {
            let bounds = RenderedBounds::contain(
                Size { width: 400.0, height: 400.0 },
                Size { width: 800.0, height: 400.0 },
            )
            .unwrap();
            assert_eq!(bounds.offset_y, 100.0);
            assert_eq!(bounds.height, 200.0);
        }

        #[test]
        fn tall_image_is_pillarboxed() {
            let bounds = RenderedBounds::contain(
                Size { width: 400.0, height: 400.0 },
                Size { width: 200.0, height: 400.0 },
            )
            .unwrap();
            assert_eq!(bounds.offset_x, 100.0);
            assert_eq!(bounds.width, 200.0);
        }

        #[test]
        fn click_maps_into_image_space() {
            let bounds = RenderedBounds {
                offset_x: 0.0,
                offset_y: 100.0,
                width: 400.0,
                height: 200.0,
            };
            let p = FocalPoint::from_click(100.0, 200.0, bounds);
            assert_eq!((p.x(), p.y()), (25.0, 50.0));
            assert_eq!(p.marker_in(bounds), (100.0, 200.0));
        }

        #[test]
        fn click_in_letterbox_clamps() {
            let bounds = RenderedBounds {
                offset_x: 0.0,
                offset_y: 100.0,
                width: 400.0,
                height: 200.0,
            };
            let p = FocalPoint::from_click(-10.0, 20.0, bounds);
            assert_eq!((p.x(), p.y()), (0.0, 0.0));
        }

        #[test]
        fn degenerate_sizes_have_no_bounds() {
            assert!(RenderedBounds::contain(
                Size { width: 0.0, height: 10.0 },
                Size { width: 10.0, height: 10.0 },
            )
            .is_none());
        }
    }
}
