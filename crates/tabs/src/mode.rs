//! Presentation mode decision.

/// Viewport width (logical px) below which the viewport counts as narrow.
pub const NARROW_VIEWPORT_PX: f64 = 768.0;

/// Tab count above which a narrow viewport collapses into a dropdown.
pub const DEFAULT_COLLAPSE_THRESHOLD: usize = 4;

/// How the tab navigation is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentationMode {
    /// Horizontal strip of tab buttons.
    Expanded,
    /// Single trigger plus popup menu.
    Collapsed,
}

/// Decides the presentation mode for one render pass.
///
/// Collapses only when the viewport is narrow and there are more tabs than
/// the threshold; a wide viewport always gets the strip. Recomputed on every
/// render pass, never cached.
pub fn presentation_mode(
    is_narrow: bool,
    tab_count: usize,
    collapse_threshold: usize,
) -> PresentationMode {
    if is_narrow && tab_count > collapse_threshold {
        PresentationMode::Collapsed
    } else {
        PresentationMode::Expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_only_when_narrow_and_over_threshold() {
        for is_narrow in [false, true] {
            for tab_count in 0..=8 {
                for threshold in 0..=6 {
                    let expected = if is_narrow && tab_count > threshold {
                        PresentationMode::Collapsed
                    } else {
                        PresentationMode::Expanded
                    };
                    assert_eq!(
                        presentation_mode(is_narrow, tab_count, threshold),
                        expected,
                        "is_narrow={} tab_count={} threshold={}",
                        is_narrow,
                        tab_count,
                        threshold
                    );
                }
            }
        }
    }

    #[test]
    fn test_wide_viewport_never_collapses() {
        assert_eq!(
            presentation_mode(false, 100, 0),
            PresentationMode::Expanded
        );
    }

    #[test]
    fn test_count_at_threshold_stays_expanded() {
        assert_eq!(presentation_mode(true, 4, 4), PresentationMode::Expanded);
        assert_eq!(presentation_mode(true, 5, 4), PresentationMode::Collapsed);
    }

    #[test]
    fn test_six_tabs_default_threshold_on_narrow() {
        assert_eq!(
            presentation_mode(true, 6, DEFAULT_COLLAPSE_THRESHOLD),
            PresentationMode::Collapsed
        );
    }

    #[test]
    fn test_empty_tab_set_stays_expanded() {
        assert_eq!(presentation_mode(true, 0, 0), PresentationMode::Expanded);
    }
}
