//! Class and inline style builders.

use legends_domain::FocalPoint;

/// Aspect ratio of a library grid card; varies by position for a
/// masonry look.
pub fn card_aspect(index: usize) -> &'static str {
    if index % 4 == 0 {
        "aspect-[3/4]"
    } else if index % 3 == 0 {
        "aspect-square"
    } else {
        "aspect-video"
    }
}

/// `object-position` for a portrait.
pub fn object_position(focal_point: FocalPoint) -> String {
    format!("object-position: {focal_point};")
}

/// Inline glow colour for accent-themed elements.
pub fn glow_color(color: &str) -> String {
    format!("--glow-color: {color};")
}

/// Filled bars out of five for a 0-10 rating.
pub fn rating_bars(rating: u8) -> usize {
    ((f32::from(rating) / 2.0).round() as usize).min(5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masonry_aspects_cycle() {
        assert_eq!(card_aspect(0), "aspect-[3/4]");
        assert_eq!(card_aspect(3), "aspect-square");
        assert_eq!(card_aspect(1), "aspect-video");
        assert_eq!(card_aspect(8), "aspect-[3/4]");
    }

    #[test]
    fn rating_maps_to_five_bars() {
        assert_eq!(rating_bars(0), 0);
        assert_eq!(rating_bars(3), 2);
        assert_eq!(rating_bars(9), 5);
        assert_eq!(rating_bars(10), 5);
    }

    #[test]
    fn object_position_uses_focal_display() {
        assert_eq!(object_position(FocalPoint::new(25.0, 75.0)), "object-position: 25.0% 75.0%;");
    }
}
