//! Per-event cosmetic transforms derived from scroll and pointer positions.

pub const NAVBAR_SCROLLED_OFFSET: f64 = 50.0;
pub const SECTION_ACTIVATION_OFFSET: f64 = 200.0;
pub const HEADER_OFFSET: f64 = 80.0;
const HERO_CONTENT_PARALLAX: f64 = 0.3;
const HERO_GRID_PARALLAX: f64 = 0.1;
const HERO_FADE_DISTANCE: f64 = 700.0;
const TILT_DAMPING: f64 = 20.0;
const TILT_LIFT_PX: f64 = -10.0;
const TILT_PERSPECTIVE_PX: f64 = 1000.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_OFFSET
}

/// Last section in document order whose top, less the activation offset,
/// has scrolled past.
pub fn active_section(sections: &[SectionOffset], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| scroll_y >= section.top - SECTION_ACTIVATION_OFFSET)
        .last()
        .map(|section| section.id.as_str())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroContentStyle {
    pub translate_y: f64,
    pub opacity: f64,
}

impl Default for HeroContentStyle {
    fn default() -> Self {
        Self {
            translate_y: 0.0,
            opacity: 1.0,
        }
    }
}

impl HeroContentStyle {
    pub fn to_css(self) -> String {
        format!(
            "transform: translateY({:.2}px); opacity: {:.3};",
            self.translate_y, self.opacity
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    /// `None` once the hero has scrolled out of view; the last style stays.
    pub content: Option<HeroContentStyle>,
    pub grid_translate_y: f64,
}

pub fn parallax(metrics: ScrollMetrics) -> Parallax {
    let scrolled = metrics.scroll_y.max(0.0);
    let content = (scrolled < metrics.viewport_height).then(|| HeroContentStyle {
        translate_y: scrolled * HERO_CONTENT_PARALLAX,
        opacity: 1.0 - scrolled / HERO_FADE_DISTANCE,
    });

    Parallax {
        content,
        grid_translate_y: scrolled * HERO_GRID_PARALLAX,
    }
}

/// Percentage of the scrollable distance already covered, in `0..=100`.
pub fn scroll_progress(metrics: ScrollMetrics) -> f64 {
    let scrollable = metrics.document_height - metrics.viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }

    (metrics.scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Page offset that lands `element_top` just below the fixed header.
pub fn anchor_scroll_target(element_top: f64, page_y_offset: f64) -> f64 {
    element_top + page_y_offset - HEADER_OFFSET
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub lift: f64,
}

impl Tilt {
    /// `x`/`y` are relative to the card's top-left corner.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;

        Self {
            rotate_x: (y - center_y) / TILT_DAMPING,
            rotate_y: (center_x - x) / TILT_DAMPING,
            lift: TILT_LIFT_PX,
        }
    }

    pub fn rest() -> Self {
        Self::default()
    }

    pub fn to_css(self) -> String {
        format!(
            "transform: perspective({TILT_PERSPECTIVE_PX}px) rotateX({:.2}deg) rotateY({:.2}deg) translateY({}px);",
            self.rotate_x, self.rotate_y, self.lift
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionOffset> {
        [("home", 0.0), ("about", 700.0), ("projects", 1_500.0)]
            .iter()
            .map(|(id, top)| SectionOffset { id: id.to_string(), top: *top })
            .collect()
    }

    #[test]
    fn navbar_flips_past_fifty_pixels() {
        assert!(!navbar_scrolled(50.0));
        assert!(navbar_scrolled(50.5));
    }

    #[test]
    fn active_section_uses_activation_offset() {
        let sections = sections();

        assert_eq!(active_section(&sections, 0.0), Some("home"));
        assert_eq!(active_section(&sections, 499.0), Some("home"));
        assert_eq!(active_section(&sections, 500.0), Some("about"));
        assert_eq!(active_section(&sections, 5_000.0), Some("projects"));
        assert_eq!(active_section(&[], 10.0), None);
    }

    #[test]
    fn parallax_stops_updating_content_below_the_fold() {
        let metrics = ScrollMetrics { scroll_y: 350.0, viewport_height: 800.0, document_height: 4_000.0 };
        let near = parallax(metrics);
        let content = near.content.expect("hero still in view");

        assert!((content.translate_y - 105.0).abs() < 1e-9);
        assert!((content.opacity - 0.5).abs() < 1e-9);
        assert!((near.grid_translate_y - 35.0).abs() < 1e-9);

        let far = parallax(ScrollMetrics { scroll_y: 900.0, ..metrics });
        assert!(far.content.is_none());
        assert!((far.grid_translate_y - 90.0).abs() < 1e-9);
    }

    #[test]
    fn progress_is_clamped_and_safe_for_short_pages() {
        let metrics = ScrollMetrics { scroll_y: 600.0, viewport_height: 800.0, document_height: 2_000.0 };

        assert!((scroll_progress(metrics) - 50.0).abs() < 1e-9);
        assert_eq!(scroll_progress(ScrollMetrics { scroll_y: 5_000.0, ..metrics }), 100.0);
        assert_eq!(scroll_progress(ScrollMetrics { document_height: 800.0, ..metrics }), 0.0);
    }

    #[test]
    fn tilt_leans_away_from_the_pointer() {
        let tilt = Tilt::from_pointer(0.0, 0.0, 200.0, 100.0);

        assert!((tilt.rotate_x + 2.5).abs() < 1e-9);
        assert!((tilt.rotate_y - 5.0).abs() < 1e-9);
        assert_eq!(Tilt::from_pointer(100.0, 50.0, 200.0, 100.0).rotate_x, 0.0);
        assert_eq!(
            Tilt::rest().to_css(),
            "transform: perspective(1000px) rotateX(0.00deg) rotateY(0.00deg) translateY(0px);"
        );
    }

    #[test]
    fn anchor_target_subtracts_header() {
        assert_eq!(anchor_scroll_target(300.0, 1_000.0), 1_220.0);
    }
}
