//! # Seven-Segment Glyphs
//!
//! Decomposes decimal labels into axis-aligned segment rectangles in a 2D
//! label frame: x runs left-to-right along the text, y runs bottom-to-top.
//!
//! ```text
//!    ── Top ──
//!   |         |
//!  UL         UR
//!   |         |
//!    ─ Middle ─
//!   |         |
//!  LL         LR
//!   |         |
//!    ─ Bottom ─
//! ```

use crate::error::MeshError;
use config::constants::{GLYPH_GAP_RATIO, GLYPH_STROKE_RATIO, GLYPH_WIDTH_RATIO};
use glam::DVec2;

/// One of the seven canonical stroke positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Top,
    UpperLeft,
    UpperRight,
    Middle,
    LowerLeft,
    LowerRight,
    Bottom,
}

impl Segment {
    /// All segments in canonical order.
    pub const ALL: [Segment; 7] = [
        Segment::Top,
        Segment::UpperLeft,
        Segment::UpperRight,
        Segment::Middle,
        Segment::LowerLeft,
        Segment::LowerRight,
        Segment::Bottom,
    ];

    /// Rectangle covered by this segment in a glyph whose lower-left corner
    /// is at the origin.
    pub fn rect(self, metrics: &GlyphMetrics) -> Rect {
        let GlyphMetrics {
            height: h,
            stroke: s,
            width: w,
            ..
        } = *metrics;
        let bar = |y_center: f64| {
            Rect::new(
                DVec2::new(0.0, y_center - s / 2.0),
                DVec2::new(w, y_center + s / 2.0),
            )
        };
        let post = |x0: f64, y_center: f64| {
            let half_len = (h / 2.0 - s / 2.0) / 2.0;
            Rect::new(
                DVec2::new(x0, y_center - half_len),
                DVec2::new(x0 + s, y_center + half_len),
            )
        };

        match self {
            Segment::Top => bar(h - s / 2.0),
            Segment::Middle => bar(h / 2.0),
            Segment::Bottom => bar(s / 2.0),
            Segment::UpperLeft => post(0.0, 0.75 * h),
            Segment::UpperRight => post(w - s, 0.75 * h),
            Segment::LowerLeft => post(0.0, 0.25 * h),
            Segment::LowerRight => post(w - s, 0.25 * h),
        }
    }
}

/// Segments lit for a decimal digit.
///
/// # Errors
///
/// [`MeshError::UnsupportedGlyph`] for anything other than `'0'..='9'`.
///
/// # Example
///
/// ```rust
/// use wheel_mesh::builders::glyph::{digit_segments, Segment};
///
/// assert_eq!(
///     digit_segments('1').unwrap(),
///     &[Segment::UpperRight, Segment::LowerRight]
/// );
/// assert!(digit_segments('x').is_err());
/// ```
pub fn digit_segments(digit: char) -> Result<&'static [Segment], MeshError> {
    use Segment::*;

    Ok(match digit {
        '0' => &[Top, UpperLeft, UpperRight, LowerLeft, LowerRight, Bottom],
        '1' => &[UpperRight, LowerRight],
        '2' => &[Top, UpperRight, Middle, LowerLeft, Bottom],
        '3' => &[Top, UpperRight, Middle, LowerRight, Bottom],
        '4' => &[UpperLeft, UpperRight, Middle, LowerRight],
        '5' => &[Top, UpperLeft, Middle, LowerRight, Bottom],
        '6' => &[Top, UpperLeft, Middle, LowerLeft, LowerRight, Bottom],
        '7' => &[Top, UpperRight, LowerRight],
        '8' => &[Top, UpperLeft, UpperRight, Middle, LowerLeft, LowerRight, Bottom],
        '9' => &[Top, UpperLeft, UpperRight, Middle, LowerRight, Bottom],
        ch => return Err(MeshError::UnsupportedGlyph { ch }),
    })
}

/// Axis-aligned rectangle in the label plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    /// Creates a rectangle from two corners.
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Width and height.
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    /// Centre point.
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) / 2.0
    }

    /// Returns this rectangle shifted by `offset`.
    pub fn translated(&self, offset: DVec2) -> Self {
        Self::new(self.min + offset, self.max + offset)
    }

    /// True if `other` lies inside this rectangle, allowing `tolerance`.
    pub fn contains(&self, other: &Rect, tolerance: f64) -> bool {
        other.min.x >= self.min.x - tolerance
            && other.min.y >= self.min.y - tolerance
            && other.max.x <= self.max.x + tolerance
            && other.max.y <= self.max.y + tolerance
    }
}

/// Glyph proportions derived from the glyph height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    /// Glyph height.
    pub height: f64,
    /// Stroke width.
    pub stroke: f64,
    /// Body width.
    pub width: f64,
    /// Distance between the left edges of consecutive glyphs.
    pub advance: f64,
}

impl GlyphMetrics {
    /// Metrics for a glyph of the given height.
    pub fn new(height: f64) -> Self {
        let width = GLYPH_WIDTH_RATIO * height;
        Self {
            height,
            stroke: GLYPH_STROKE_RATIO * height,
            width,
            advance: width + GLYPH_GAP_RATIO * height,
        }
    }

    /// Bounding box of one glyph with its lower-left corner at the origin.
    pub fn glyph_box(&self) -> Rect {
        Rect::new(DVec2::ZERO, DVec2::new(self.width, self.height))
    }

    /// Total width of a run of `count` glyphs.
    pub fn text_width(&self, count: usize) -> f64 {
        match count {
            0 => 0.0,
            n => (n - 1) as f64 * self.advance + self.width,
        }
    }
}

/// A segment rectangle placed in the label frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedSegment {
    /// Position of the owning character in the text.
    pub glyph: usize,
    /// Which stroke this is.
    pub segment: Segment,
    /// Rectangle in the label frame.
    pub rect: Rect,
}

/// Text printed for a face: the distance rounded to the nearest integer
/// (halves away from zero).
///
/// # Example
///
/// ```rust
/// use wheel_mesh::builders::glyph::label_text;
///
/// assert_eq!(label_text(7.4), "7");
/// assert_eq!(label_text(2.5), "3");
/// assert_eq!(label_text(25.0), "25");
/// ```
pub fn label_text(distance: f64) -> String {
    format!("{:.0}", distance.round())
}

/// Lays out `text` as seven-segment rectangles, centred on the origin both
/// horizontally and vertically.
pub fn layout_text(text: &str, metrics: &GlyphMetrics) -> Result<Vec<PlacedSegment>, MeshError> {
    let count = text.chars().count();
    let origin = DVec2::new(-metrics.text_width(count) / 2.0, -metrics.height / 2.0);

    let mut placed = Vec::new();
    for (glyph, ch) in text.chars().enumerate() {
        let offset = origin + DVec2::new(glyph as f64 * metrics.advance, 0.0);
        for &segment in digit_segments(ch)? {
            placed.push(PlacedSegment {
                glyph,
                segment,
                rect: segment.rect(metrics).translated(offset),
            });
        }
    }
    Ok(placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    fn lit(digit: char) -> HashSet<Segment> {
        digit_segments(digit).unwrap().iter().copied().collect()
    }

    #[test]
    fn test_zero_and_one() {
        use Segment::*;
        assert_eq!(
            lit('0'),
            HashSet::from([Top, UpperLeft, UpperRight, LowerLeft, LowerRight, Bottom])
        );
        assert_eq!(lit('1'), HashSet::from([UpperRight, LowerRight]));
    }

    #[test]
    fn test_eight_lights_everything() {
        assert_eq!(lit('8'), Segment::ALL.into_iter().collect());
    }

    #[test]
    fn test_segment_counts() {
        let counts: Vec<usize> = ('0'..='9').map(|d| lit(d).len()).collect();
        assert_eq!(counts, vec![6, 2, 5, 5, 4, 5, 6, 3, 7, 6]);
    }

    #[test]
    fn test_unmapped_characters() {
        for ch in ['a', '-', '.', ' '] {
            assert!(matches!(
                digit_segments(ch),
                Err(MeshError::UnsupportedGlyph { .. })
            ));
        }
    }

    #[test]
    fn test_segments_inside_glyph_box() {
        let metrics = GlyphMetrics::new(5.0);
        let bounds = metrics.glyph_box();
        assert_relative_eq!(bounds.size().x, 3.0, epsilon = 1e-12);
        for segment in Segment::ALL {
            assert!(bounds.contains(&segment.rect(&metrics), 1e-12), "{segment:?}");
        }
    }

    #[test]
    fn test_segment_dimensions() {
        let metrics = GlyphMetrics::new(10.0);
        let top = Segment::Top.rect(&metrics).size();
        assert_relative_eq!(top.x, 6.0, epsilon = 1e-12);
        assert_relative_eq!(top.y, 1.8, epsilon = 1e-12);

        let post = Segment::LowerLeft.rect(&metrics).size();
        assert_relative_eq!(post.x, 1.8, epsilon = 1e-12);
        assert_relative_eq!(post.y, 5.0 - 0.9, epsilon = 1e-12);
    }

    #[test]
    fn test_layout_is_centered() {
        let metrics = GlyphMetrics::new(5.0);
        let placed = layout_text("88", &metrics).unwrap();
        assert_eq!(placed.len(), 14);

        let min_x = placed.iter().map(|p| p.rect.min.x).fold(f64::MAX, f64::min);
        let max_x = placed.iter().map(|p| p.rect.max.x).fold(f64::MIN, f64::max);
        assert_relative_eq!(min_x, -max_x, epsilon = 1e-12);
        assert_relative_eq!(max_x - min_x, metrics.text_width(2), epsilon = 1e-12);
    }

    #[test]
    fn test_layout_advances_per_glyph() {
        let metrics = GlyphMetrics::new(4.0);
        let placed = layout_text("11", &metrics).unwrap();
        let first = placed.iter().find(|p| p.glyph == 0).unwrap();
        let second = placed.iter().find(|p| p.glyph == 1).unwrap();
        assert_relative_eq!(
            second.rect.min.x - first.rect.min.x,
            metrics.advance,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_label_text_rounding() {
        assert_eq!(label_text(1.49), "1");
        assert_eq!(label_text(1.5), "2");
        assert_eq!(label_text(9.6), "10");
        assert_eq!(label_text(0.3), "0");
    }

    #[test]
    fn test_label_text_beyond_integer_range() {
        assert_eq!(label_text(3e19), "30000000000000000000");
        assert_eq!(label_text(1e20), "100000000000000000000");
        let placed = layout_text(&label_text(1e20), &GlyphMetrics::new(5.0)).unwrap();
        assert_eq!(placed.iter().map(|p| p.glyph).max(), Some(20));
    }
}
