// submenu placement against the visible viewport
use serde::{Deserialize, Serialize};

use crate::core::types::Placement;

/// Visible area of the host page, in page pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub height: f64,
    pub scroll_top: f64,
}

impl Viewport {
    pub fn new(height: f64) -> Self {
        Self {
            height,
            scroll_top: 0.0,
        }
    }

    pub fn scrolled(mut self, top: f64) -> Self {
        self.scroll_top = top;
        self
    }
}

/// Measured box of a submenu list, top relative to the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmenuRect {
    pub top: f64,
    pub height: f64,
}

impl SubmenuRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// How far the submenu spills out on each side; `<= 0` means it fits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overflow {
    pub top: f64,
    pub bottom: f64,
}

pub fn overflow(rect: SubmenuRect, viewport: Viewport) -> Overflow {
    Overflow {
        top: (rect.top - viewport.scroll_top + rect.height) - viewport.height,
        bottom: -(rect.top - rect.height),
    }
}

/// Pick the side a submenu opens towards.
///
/// `Top` is preferred whenever it fits, `Bottom` next. When neither fits the
/// side that clips less wins, ties going to `Top`.
pub fn choose_placement(rect: SubmenuRect, viewport: Viewport) -> Placement {
    let o = overflow(rect, viewport);
    if o.top <= 0.0 {
        Placement::Top
    } else if o.bottom <= 0.0 || o.top > o.bottom {
        Placement::Bottom
    } else {
        Placement::Top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_below_the_anchor_keeps_top() {
        //y=100, h=200 ends at 300 inside an 800px viewport
        let p = choose_placement(SubmenuRect::new(100.0, 200.0), Viewport::new(800.0));
        assert_eq!(p, Placement::Top);
    }

    #[test]
    fn flips_to_bottom_near_the_viewport_end() {
        //y=700, h=200 ends at 900 > 800, opening upwards needs 700-200 >= 0
        let p = choose_placement(SubmenuRect::new(700.0, 200.0), Viewport::new(800.0));
        assert_eq!(p, Placement::Bottom);
    }

    #[test]
    fn scroll_offset_is_taken_into_account() {
        //page y=1100 is 300px into a viewport scrolled by 800
        let vp = Viewport::new(800.0).scrolled(800.0);
        let p = choose_placement(SubmenuRect::new(1100.0, 200.0), vp);
        assert_eq!(p, Placement::Top);
    }

    #[test]
    fn neither_fits_picks_the_smaller_overflow() {
        let vp = Viewport::new(400.0);

        //top overflow (300-0+500)-400 = 400, bottom overflow -(300-500) = 200
        let p = choose_placement(SubmenuRect::new(300.0, 500.0), vp);
        assert_eq!(p, Placement::Bottom);

        //top overflow (100+500)-400 = 200, bottom overflow -(100-500) = 400
        let p = choose_placement(SubmenuRect::new(100.0, 500.0), vp);
        assert_eq!(p, Placement::Top);
    }

    #[test]
    fn overflow_matches_formula() {
        let o = overflow(
            SubmenuRect::new(250.0, 100.0),
            Viewport::new(300.0).scrolled(50.0),
        );
        assert_eq!(o.top, 0.0);
        assert_eq!(o.bottom, -150.0);
    }

    #[test]
    fn host_metrics_carry_only_vertical_fields() {
        let vp: Viewport = serde_json::from_str(r#"{"height": 800, "scroll_top": 800}"#).unwrap();
        let rect: SubmenuRect = serde_json::from_str(r#"{"top": 1100, "height": 200}"#).unwrap();

        assert_eq!(vp, Viewport::new(800.0).scrolled(800.0));
        assert_eq!(choose_placement(rect, vp), Placement::Top);
        assert_eq!(
            serde_json::to_value(vp).unwrap(),
            serde_json::json!({"height": 800.0, "scroll_top": 800.0})
        );
    }
}
