//! Palette constants and viewport breakpoints.

/// Brand accent, also advertised as `theme-color` in the document head.
pub const PRIMARY: &str = "#6c63ff";
pub const SURFACE: &str = "#111123";
pub const TEXT: &str = "#f4f4f8";

/// Fill painted behind the navbar once the page is scrolled away from the
/// top.
pub const NAV_BLUR_FILL: &str = "rgba(17, 17, 35, 0.55)";

/// Inline style for the navbar surface. Transparent with no blur exactly at
/// the top of the document, translucent + blurred for any nonzero offset.
pub fn navbar_surface(scrolled: bool) -> String {
    if scrolled {
        format!("background:{NAV_BLUR_FILL};backdrop-filter:blur(20px);")
    } else {
        "background:transparent;backdrop-filter:none;".to_owned()
    }
}

/// Width classes the layout distinguishes between. The same markup is
/// served to every client; rules produced from these classes decide what is
/// visible, so hydration never has to patch structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewport {
    Narrow,
    Medium,
    Wide,
}

impl Viewport {
    pub const fn min_width(self) -> u32 {
        match self {
            Viewport::Narrow => 0,
            Viewport::Medium => 600,
            Viewport::Wide => 900,
        }
    }

    pub fn from_width(width: u32) -> Self {
        if width >= Viewport::Wide.min_width() {
            Viewport::Wide
        } else if width >= Viewport::Medium.min_width() {
            Viewport::Medium
        } else {
            Viewport::Narrow
        }
    }

    /// Media prelude matching this class and everything wider.
    pub fn and_up(self) -> String {
        format!("@media (min-width:{}px)", self.min_width())
    }

    /// Media prelude matching strictly below this class.
    pub fn below(self) -> String {
        format!("@media (max-width:{}px)", self.min_width().saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_is_transparent_only_at_top() {
        assert!(navbar_surface(false).contains("background:transparent"));
        assert!(navbar_surface(false).contains("backdrop-filter:none"));
        assert!(navbar_surface(true).contains(NAV_BLUR_FILL));
        assert!(navbar_surface(true).contains("blur(20px)"));
    }

    #[test]
    fn widths_map_to_classes_at_exact_boundaries() {
        assert_eq!(Viewport::from_width(0), Viewport::Narrow);
        assert_eq!(Viewport::from_width(599), Viewport::Narrow);
        assert_eq!(Viewport::from_width(600), Viewport::Medium);
        assert_eq!(Viewport::from_width(899), Viewport::Medium);
        assert_eq!(Viewport::from_width(900), Viewport::Wide);
        assert_eq!(Viewport::from_width(2560), Viewport::Wide);
    }

    #[test]
    fn media_preludes_do_not_overlap() {
        assert_eq!(Viewport::Wide.and_up(), "@media (min-width:900px)");
        assert_eq!(Viewport::Wide.below(), "@media (max-width:899px)");
    }
}
