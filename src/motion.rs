pub const NAVBAR_SCROLLED_AFTER_PX: f64 = 100.0;
pub const SCROLL_TOP_VISIBLE_AFTER_PX: f64 = 500.0;
pub const ANCHOR_HEADER_OFFSET_PX: f64 = 80.0;
pub const TILT_DIVISOR: f64 = 10.0;
pub const TILT_LIFT_PX: f64 = 10.0;
pub const PARALLAX_SPEED_STEP: f64 = 20.0;
pub const NEUTRAL_TILT: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

pub fn navbar_scrolled(offset: f64) -> bool {
    offset > NAVBAR_SCROLLED_AFTER_PX
}

pub fn scroll_top_visible(offset: f64) -> bool {
    offset > SCROLL_TOP_VISIBLE_AFTER_PX
}

/// Percentage of the document scrolled, in `[0, 100]`.
///
/// A page that fits the viewport has nothing to scroll and reports 0.
pub fn scroll_progress(offset: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !(scrollable > 0.0) || !offset.is_finite() {
        return 0.0;
    }

    (offset / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn anchor_scroll_top(element_offset_top: f64) -> f64 {
    element_offset_top - ANCHOR_HEADER_OFFSET_PX
}

/// Rectangle of a card relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn at_pointer(rect: CardRect, client_x: f64, client_y: f64) -> Self {
        let x = client_x - rect.left;
        let y = client_y - rect.top;
        let center_x = rect.width / 2.0;
        let center_y = rect.height / 2.0;

        Self {
            rotate_x: (y - center_y) / TILT_DIVISOR,
            rotate_y: (center_x - x) / TILT_DIVISOR,
        }
    }

    pub fn transform(self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-{TILT_LIFT_PX}px)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Translation for the orb at `index` (0-based) given the pointer position.
pub fn parallax_offset(
    index: usize,
    client_x: f64,
    client_y: f64,
    viewport: (f64, f64),
) -> (f64, f64) {
    let speed = (index + 1) as f64 * PARALLAX_SPEED_STEP;
    let (width, height) = viewport;
    let normalized_x = if width > 0.0 { client_x / width } else { 0.5 };
    let normalized_y = if height > 0.0 { client_y / height } else { 0.5 };

    ((normalized_x - 0.5) * speed, (normalized_y - 0.5) * speed)
}

pub fn translate(offset: (f64, f64)) -> String {
    format!("translate({}px, {}px)", offset.0, offset.1)
}

/// True when a nav link `href` points at the section with `section_id`.
pub fn link_targets_section(href: Option<&str>, section_id: &str) -> bool {
    !section_id.is_empty() && href.and_then(|href| href.strip_prefix('#')) == Some(section_id)
}

pub fn project_visible(filter: &str, category: Option<&str>) -> bool {
    filter == "all" || category == Some(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_progress_is_a_percentage_of_the_scrollable_range() {
        assert_eq!(scroll_progress(250.0, 1_500.0, 1_000.0), 50.0);
        assert_eq!(scroll_progress(0.0, 1_500.0, 1_000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 1_500.0, 1_000.0), 100.0);
    }

    #[test]
    fn scroll_progress_is_zero_when_page_fits_viewport() {
        let progress = scroll_progress(0.0, 900.0, 900.0);

        assert!(progress.is_finite());
        assert_eq!(progress, 0.0);
        assert_eq!(scroll_progress(10.0, 800.0, 900.0), 0.0);
    }

    #[test]
    fn scroll_progress_clamps_overscroll() {
        assert_eq!(scroll_progress(700.0, 1_500.0, 1_000.0), 100.0);
        assert_eq!(scroll_progress(-40.0, 1_500.0, 1_000.0), 0.0);
    }

    #[test]
    fn thresholds_are_strict() {
        assert!(!navbar_scrolled(100.0));
        assert!(navbar_scrolled(100.5));
        assert!(!scroll_top_visible(500.0));
        assert!(scroll_top_visible(501.0));
    }

    #[test]
    fn tilt_is_neutral_at_card_center() {
        let rect = CardRect { left: 100.0, top: 50.0, width: 200.0, height: 100.0 };
        let tilt = Tilt::at_pointer(rect, 200.0, 100.0);

        assert_eq!(tilt, Tilt { rotate_x: 0.0, rotate_y: 0.0 });
    }

    #[test]
    fn tilt_leans_toward_pointer() {
        let rect = CardRect { left: 0.0, top: 0.0, width: 200.0, height: 100.0 };
        let tilt = Tilt::at_pointer(rect, 0.0, 100.0);

        assert_eq!(tilt, Tilt { rotate_x: 5.0, rotate_y: 10.0 });
        assert_eq!(
            tilt.transform(),
            "perspective(1000px) rotateX(5deg) rotateY(10deg) translateY(-10px)"
        );
    }

    #[test]
    fn parallax_speed_grows_with_orb_index() {
        let viewport = (1_000.0, 500.0);

        assert_eq!(parallax_offset(0, 1_000.0, 500.0, viewport), (10.0, 10.0));
        assert_eq!(parallax_offset(2, 0.0, 250.0, viewport), (-30.0, 0.0));
        assert_eq!(translate((-30.0, 0.0)), "translate(-30px, 0px)");
    }

    #[test]
    fn nav_links_match_by_fragment() {
        assert!(link_targets_section(Some("#about"), "about"));
        assert!(!link_targets_section(Some("#about"), "projects"));
        assert!(!link_targets_section(Some("about"), "about"));
        assert!(!link_targets_section(Some("#"), ""));
        assert!(!link_targets_section(None, "about"));
    }

    #[test]
    fn project_filter_shows_matching_category_or_all() {
        assert!(project_visible("all", None));
        assert!(project_visible("cloud", Some("cloud")));
        assert!(!project_visible("cloud", Some("web")));
        assert!(!project_visible("cloud", None));
    }
}
