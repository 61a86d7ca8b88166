use serde::Deserialize;

use super::mapping::{Mapping, MappingError};
use super::scroll::ScrollOffset;

/// Hero banner transform: scroll offset drives a vertical shift and a fade.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parallax {
    pub shift: Mapping,
    pub fade: Mapping,
}

/// Resolved transform for one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxFrame {
    pub shift_px: f64,
    pub opacity: f64,
}

impl ParallaxFrame {
    /// Resting frame, also used when no parallax is configured.
    pub const NEUTRAL: ParallaxFrame = ParallaxFrame {
        shift_px: 0.0,
        opacity: 1.0,
    };

    pub fn style(&self) -> String {
        format!(
            "transform: translate3d(0, {:.2}px, 0); opacity: {:.3};",
            self.shift_px, self.opacity
        )
    }
}

impl Parallax {
    /// Shift `[0, 600] -> [0, -80]`, opacity `[0, 400] -> [1, 0.6]`.
    pub fn hero() -> Result<Self, MappingError> {
        Ok(Self {
            shift: Mapping::linear((0.0, 600.0), (0.0, -80.0))?,
            fade: Mapping::linear((0.0, 400.0), (1.0, 0.6))?,
        })
    }

    pub fn frame(&self, offset: ScrollOffset) -> ParallaxFrame {
        ParallaxFrame {
            shift_px: self.shift.sample(offset.get()),
            opacity: self.fade.sample(offset.get()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn frame_at(px: f64) -> ParallaxFrame {
        Parallax::hero().unwrap().frame(ScrollOffset::new(px))
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn top_of_page_is_neutral() {
        for px in [-300.0, -1.0, 0.0] {
            assert_eq!(frame_at(px), ParallaxFrame::NEUTRAL);
        }
    }

    #[test]
    fn clamps_past_the_end_of_each_domain() {
        for px in [600.0, 601.0, 5_000.0] {
            assert_close(frame_at(px).shift_px, -80.0);
        }
        for px in [400.0, 450.0, 5_000.0] {
            assert_close(frame_at(px).opacity, 0.6);
        }
    }

    #[test]
    fn midpoints() {
        assert_close(frame_at(300.0).shift_px, -40.0);
        assert_close(frame_at(200.0).opacity, 0.8);
    }

    #[test]
    fn scroll_down_and_back_is_reversible() {
        let parallax = Parallax::hero().unwrap();

        let start = parallax.frame(ScrollOffset::new(0.0));
        let down = parallax.frame(ScrollOffset::new(450.0));
        let back = parallax.frame(ScrollOffset::new(0.0));

        assert_close(down.opacity, 0.6);
        assert_close(down.shift_px, -60.0);
        assert_eq!(start, back);
        assert_eq!(back, ParallaxFrame::NEUTRAL);
    }

    #[test]
    fn style_renders_transform_and_opacity() {
        assert_eq!(
            frame_at(450.0).style(),
            "transform: translate3d(0, -60.00px, 0); opacity: 0.600;"
        );
    }
}
