use crate::math::{Rect, Vector};

/// Converts `inset_amount` into per-axis offsets that keep a stroke along a
/// diamond's sloped edges the same visual width for any aspect ratio.
///
/// The axes are cross-divided: the x offset grows as the rectangle gets
/// shorter, and the y offset grows as it gets narrower.
///
/// ```text
/// diagonal = sqrt(width² + height²)
/// x        = inset_amount * diagonal / height
/// y        = inset_amount * diagonal / width
/// ```
///
/// A rectangle with a zero width or height yields exactly `(0, 0)`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn aspect_corrected_insets<S>(rect: &Rect<f32, S>, inset_amount: f32) -> Vector<f32, S> {
    let width = rect.size.width;
    let height = rect.size.height;
    if width == 0. || height == 0. {
        tracing::trace!(width, height, "degenerate rect, skipping inset");
        return Vector::zero();
    }

    let diagonal = width.hypot(height);
    Vector::new(
        inset_amount * diagonal / height,
        inset_amount * diagonal / width,
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::{Point, Points, Size};

    fn rect(width: f32, height: f32) -> Rect<f32, Points> {
        Rect::new(Point::origin(), Size::new(width, height))
    }

    #[test]
    fn square_offsets_are_equal() {
        let insets = aspect_corrected_insets(&rect(100., 100.), 10.);
        assert_relative_eq!(insets.x, 14.142_136, epsilon = 1e-4);
        assert_relative_eq!(insets.y, 14.142_136, epsilon = 1e-4);
        assert_relative_eq!(insets.x, insets.y);
    }

    #[test]
    fn tall_rect_offsets() {
        let insets = aspect_corrected_insets(&rect(100., 200.), 10.);
        assert_relative_eq!(insets.x, 11.180_34, epsilon = 1e-4);
        assert_relative_eq!(insets.y, 22.360_68, epsilon = 1e-4);
    }

    #[test]
    fn wide_rect_swaps_axes() {
        let insets = aspect_corrected_insets(&rect(200., 100.), 10.);
        assert_relative_eq!(insets.x, 22.360_68, epsilon = 1e-4);
        assert_relative_eq!(insets.y, 11.180_34, epsilon = 1e-4);
    }

    #[test]
    fn zero_sized_rect_does_not_produce_nan() {
        let insets = aspect_corrected_insets(&rect(0., 0.), 10.);
        assert_eq!(insets, Vector::zero());

        let insets = aspect_corrected_insets(&rect(0., 50.), 10.);
        assert_eq!(insets, Vector::zero());
        let insets = aspect_corrected_insets(&rect(50., 0.), 10.);
        assert_eq!(insets, Vector::zero());
    }

    #[test]
    fn offsets_scale_linearly_with_inset_amount() {
        let sizes = [(100., 100.), (100., 66.), (3., 250.), (0.5, 0.25)];
        for &(width, height) in &sizes {
            let rect = rect(width, height);
            let base = aspect_corrected_insets(&rect, 4.);
            for &factor in &[0., 0.5, 1., 2.5, 10.] {
                let scaled = aspect_corrected_insets(&rect, 4. * factor);
                assert_relative_eq!(scaled.x, base.x * factor, max_relative = 1e-5);
                assert_relative_eq!(scaled.y, base.y * factor, max_relative = 1e-5);
            }
        }
    }

    #[test]
    fn offsets_are_finite_and_non_negative() {
        for &(width, height) in &[(1., 1.), (100., 66.), (1e-3, 1e3), (640., 480.)] {
            for &amount in &[0., 0.5, 5., 50.] {
                let insets = aspect_corrected_insets(&rect(width, height), amount);
                assert!(insets.x.is_finite() && insets.x >= 0.);
                assert!(insets.y.is_finite() && insets.y >= 0.);
            }
        }
    }
}
