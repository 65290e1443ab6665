/// Smallest caption size the fit search will return
pub const MIN_CAPTION_SIZE: u32 = 8;

/// Largest caption size the fit search will return
pub const MAX_CAPTION_SIZE: u32 = 120;

/// Text measurement seam for the caption fit search
pub trait MeasureText {
    /// Rendered pixel width of `text` at integer font size `size`
    fn text_width(&self, size: u32, text: &str) -> u32;
}

/// Find the largest integer font size whose measured width does not
/// exceed `bound`, starting from `nominal`.
///
/// Two-phase monotonic search: shrink while the current size
/// overflows the bound, then grow while the *next* size would still
/// fit, so the accepted size is the last one measuring <= bound.
/// Both phases are clamped to [MIN_CAPTION_SIZE, MAX_CAPTION_SIZE],
/// so the search terminates even if measurement is not perfectly
/// monotonic in size (hinting artifacts).
pub fn fit_caption_size(measure: &impl MeasureText, text: &str, bound: u32, nominal: u32) -> u32 {
    let mut size = nominal.clamp(MIN_CAPTION_SIZE, MAX_CAPTION_SIZE);

    while size > MIN_CAPTION_SIZE && measure.text_width(size, text) > bound {
        size -= 1;
    }

    while size < MAX_CAPTION_SIZE && measure.text_width(size + 1, text) <= bound {
        size += 1;
    }

    size
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-advance measurer: every glyph is size/2 pixels wide
    struct FixedAdvance;

    impl MeasureText for FixedAdvance {
        fn text_width(&self, size: u32, text: &str) -> u32 {
            text.chars().count() as u32 * size / 2
        }
    }

    #[test]
    fn test_converges_to_largest_size_within_bound() {
        // 10 chars, width = 5 * size; bound 250 -> largest fit is 50
        let size = fit_caption_size(&FixedAdvance, "Anna Muste", 250, 24);
        assert_eq!(size, 50);
        assert!(FixedAdvance.text_width(size, "Anna Muste") <= 250);
        assert!(FixedAdvance.text_width(size + 1, "Anna Muste") > 250);
    }

    #[test]
    fn test_shrinks_from_oversized_nominal() {
        let size = fit_caption_size(&FixedAdvance, "Anna Muste", 250, 100);
        assert_eq!(size, 50);
    }

    #[test]
    fn test_deterministic_across_runs() {
        for _ in 0..5 {
            assert_eq!(fit_caption_size(&FixedAdvance, "Maximiliane Habsburg", 300, 24), 30);
        }
    }

    #[test]
    fn test_clamped_to_minimum_when_bound_too_tight() {
        // Even at the minimum size a 40-char caption overflows bound 10
        let text = "x".repeat(40);
        let size = fit_caption_size(&FixedAdvance, &text, 10, 24);
        assert_eq!(size, MIN_CAPTION_SIZE);
    }

    #[test]
    fn test_clamped_to_maximum_for_tiny_text() {
        let size = fit_caption_size(&FixedAdvance, "A", 100_000, 24);
        assert_eq!(size, MAX_CAPTION_SIZE);
    }

    #[test]
    fn test_nominal_out_of_range_is_clamped() {
        let size = fit_caption_size(&FixedAdvance, "Anna Muste", 250, 0);
        assert_eq!(size, 50);
        let size = fit_caption_size(&FixedAdvance, "Anna Muste", 250, 10_000);
        assert_eq!(size, 50);
    }
}
