use std::fmt::{self, Display, Write as _};

use lyon_tessellation::math::point as lyon_point;

use crate::math::{Point, Scale};

/// A point on a [`Path`].
pub type Endpoint<S> = Point<f32, S>;
/// A control point used to create curves.
pub type ControlPoint<S> = Point<f32, S>;

/// An entry in a [`Path`].
#[derive(Debug, PartialEq)]
pub enum PathEvent<S> {
    /// Begins a new subpath.
    MoveTo {
        /// The location to begin at.
        at: Endpoint<S>,
    },
    /// A straight line segment from the current location.
    LineTo {
        /// The end location of the line.
        to: Endpoint<S>,
    },
    /// A cubic curve (two control points) from the current location.
    CurveTo {
        /// The first control point for the curve.
        ctrl1: ControlPoint<S>,
        /// The second control point for the curve.
        ctrl2: ControlPoint<S>,
        /// The end location of the curve.
        to: Endpoint<S>,
    },
    /// Closes the current subpath, connecting it back to its start.
    Close,
}

#[allow(clippy::expl_impl_clone_on_copy)]
impl<S> Clone for PathEvent<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for PathEvent<S> {}

impl<U> PathEvent<U> {
    /// Returns the path event with the new unit. Does not alter the underlying
    /// coordinate data.
    #[must_use]
    pub fn cast_unit<V>(self) -> PathEvent<V> {
        match self {
            Self::MoveTo { at } => PathEvent::MoveTo { at: at.cast_unit() },
            Self::LineTo { to } => PathEvent::LineTo { to: to.cast_unit() },
            Self::CurveTo { ctrl1, ctrl2, to } => PathEvent::CurveTo {
                ctrl1: ctrl1.cast_unit(),
                ctrl2: ctrl2.cast_unit(),
                to: to.cast_unit(),
            },
            Self::Close => PathEvent::Close,
        }
    }

    /// The on-curve point this event ends at, if any.
    #[must_use]
    pub fn endpoint(&self) -> Option<Endpoint<U>> {
        match self {
            Self::MoveTo { at } => Some(*at),
            Self::LineTo { to } | Self::CurveTo { to, .. } => Some(*to),
            Self::Close => None,
        }
    }
}

/// A geometric outline made of one or more subpaths.
#[derive(Debug, PartialEq)]
pub struct Path<S> {
    events: Vec<PathEvent<S>>,
}

impl<S> Clone for Path<S> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
        }
    }
}

impl<S> Default for Path<S> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<U> Path<U> {
    /// Returns the path with the new unit. Does not alter the underlying
    /// coordinate data.
    #[must_use]
    pub fn cast_unit<V>(self) -> Path<V> {
        Path {
            events: self.events.into_iter().map(PathEvent::cast_unit).collect(),
        }
    }

    /// The events making up this path, in drawing order.
    #[must_use]
    pub fn events(&self) -> &[PathEvent<U>] {
        &self.events
    }

    /// Returns true if this path has no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Every on-curve point of the path, in drawing order. Control points are
    /// not included.
    #[must_use]
    pub fn endpoints(&self) -> Vec<Endpoint<U>> {
        self.events.iter().filter_map(PathEvent::endpoint).collect()
    }

    /// The number of subpaths, one for each [`PathEvent::MoveTo`].
    #[must_use]
    pub fn subpath_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, PathEvent::MoveTo { .. }))
            .count()
    }

    /// Returns true if the last subpath ends with [`PathEvent::Close`].
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.events.last(), Some(PathEvent::Close))
    }

    /// Converts this path into a lyon path. Each subpath is begun and ended
    /// explicitly; subpaths without a [`PathEvent::Close`] are left open.
    #[must_use]
    pub fn as_lyon(&self) -> lyon_tessellation::path::Path {
        let mut builder = lyon_tessellation::path::Path::builder();
        let mut subpath_start = None;
        let mut current = None;

        for event in &self.events {
            match *event {
                PathEvent::MoveTo { at } => {
                    if subpath_start.take().is_some() {
                        builder.end(false);
                    }
                    builder.begin(lyon_point(at.x, at.y));
                    subpath_start = Some(at);
                    current = Some(at);
                }
                PathEvent::LineTo { to } => {
                    Self::ensure_begun(&mut builder, &mut subpath_start, current);
                    builder.line_to(lyon_point(to.x, to.y));
                    current = Some(to);
                }
                PathEvent::CurveTo { ctrl1, ctrl2, to } => {
                    Self::ensure_begun(&mut builder, &mut subpath_start, current);
                    builder.cubic_bezier_to(
                        lyon_point(ctrl1.x, ctrl1.y),
                        lyon_point(ctrl2.x, ctrl2.y),
                        lyon_point(to.x, to.y),
                    );
                    current = Some(to);
                }
                PathEvent::Close => {
                    if let Some(start) = subpath_start.take() {
                        builder.end(true);
                        current = Some(start);
                    }
                }
            }
        }

        if subpath_start.is_some() {
            builder.end(false);
        }

        builder.build()
    }

    // A segment after a Close continues from the closed subpath's start.
    fn ensure_begun(
        builder: &mut lyon_tessellation::path::Builder,
        subpath_start: &mut Option<Endpoint<U>>,
        current: Option<Endpoint<U>>,
    ) {
        if subpath_start.is_none() {
            let at = current.unwrap_or_else(Point::origin);
            builder.begin(lyon_point(at.x, at.y));
            *subpath_start = Some(at);
        }
    }
}

impl<S, T> From<T> for Path<S>
where
    T: IntoIterator<Item = PathEvent<S>>,
{
    fn from(source: T) -> Self {
        Self {
            events: source.into_iter().collect(),
        }
    }
}

/// Writes the path in the Core Graphics description format, for example
/// `0 50 m 50 0 l 100 50 l 50 100 l h`.
impl<S> Display for Path<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words = Vec::with_capacity(self.events.len());
        for event in &self.events {
            let mut word = String::new();
            match event {
                PathEvent::MoveTo { at } => write_points(&mut word, &[*at], "m")?,
                PathEvent::LineTo { to } => write_points(&mut word, &[*to], "l")?,
                PathEvent::CurveTo { ctrl1, ctrl2, to } =>
                    write_points(&mut word, &[*ctrl1, *ctrl2, *to], "c")?,
                PathEvent::Close => word.push('h'),
            }
            words.push(word);
        }

        f.write_str(&words.join(" "))
    }
}

fn write_points<S>(out: &mut String, points: &[Point<f32, S>], operator: &str) -> fmt::Result {
    for point in points {
        write!(
            out,
            "{} {} ",
            format_coordinate(point.x),
            format_coordinate(point.y)
        )?;
    }
    out.push_str(operator);
    Ok(())
}

/// Formats `value` like C's `%g`: six significant digits, trailing zeros
/// removed, scientific notation outside of `1e-4..1e6`.
#[allow(clippy::float_cmp, clippy::cast_sign_loss)]
pub(crate) fn format_coordinate(value: f32) -> String {
    if value == 0. {
        // Also catches -0.
        return String::from("0");
    }

    let scientific = format!("{:.5e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => return scientific,
    };

    if (-4..6).contains(&exponent) {
        let decimals = (5 - exponent) as usize;
        trim_fraction(format!("{:.*}", decimals, value))
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa.to_string()),
            sign,
            exponent.abs()
        )
    }
}

fn trim_fraction(mut number: String) -> String {
    if number.contains('.') {
        let trimmed = number.trim_end_matches('0').trim_end_matches('.').len();
        number.truncate(trimmed);
    }
    number
}

/// Builds a [`Path`].
#[derive(Debug)]
pub struct PathBuilder<S> {
    path: Path<S>,
}

impl<S> PathBuilder<S> {
    /// Creates a new path with the initial position `start_at`.
    #[must_use]
    pub fn new(start_at: Endpoint<S>) -> Self {
        Self {
            path: Path::from(vec![PathEvent::MoveTo { at: start_at }]),
        }
    }

    /// Returns the built path.
    #[must_use]
    pub fn build(self) -> Path<S> {
        self.path
    }

    /// Begins a new subpath at `start_at`, leaving the current one open.
    #[must_use]
    pub fn move_to(mut self, start_at: Endpoint<S>) -> Self {
        self.path.events.push(PathEvent::MoveTo { at: start_at });
        self
    }

    /// Create a straight line from the current location to `end_at`.
    #[must_use]
    pub fn line_to(mut self, end_at: Endpoint<S>) -> Self {
        self.path.events.push(PathEvent::LineTo { to: end_at });
        self
    }

    /// Create a cubic curve from the current location to `end_at` using
    /// `control1` and `control2` as the curve's control points.
    #[must_use]
    pub fn cubic_curve_to(
        mut self,
        control1: ControlPoint<S>,
        control2: ControlPoint<S>,
        end_at: Endpoint<S>,
    ) -> Self {
        self.path.events.push(PathEvent::CurveTo {
            ctrl1: control1,
            ctrl2: control2,
            to: end_at,
        });
        self
    }

    /// Closes the current subpath, connecting the current location to the
    /// subpath's starting location.
    #[must_use]
    pub fn close(mut self) -> Self {
        self.path.events.push(PathEvent::Close);
        self
    }
}

impl<Src, Dst> std::ops::Mul<Scale<f32, Src, Dst>> for Path<Src> {
    type Output = Path<Dst>;

    fn mul(self, scale: Scale<f32, Src, Dst>) -> Self::Output {
        Self::Output {
            events: self.events.into_iter().map(|event| event * scale).collect(),
        }
    }
}

impl<Src, Dst> std::ops::Mul<Scale<f32, Src, Dst>> for PathEvent<Src> {
    type Output = PathEvent<Dst>;

    fn mul(self, scale: Scale<f32, Src, Dst>) -> Self::Output {
        match self {
            PathEvent::MoveTo { at } => Self::Output::MoveTo { at: at * scale },
            PathEvent::LineTo { to } => Self::Output::LineTo { to: to * scale },
            PathEvent::CurveTo { ctrl1, ctrl2, to } => Self::Output::CurveTo {
                ctrl1: ctrl1 * scale,
                ctrl2: ctrl2 * scale,
                to: to * scale,
            },
            PathEvent::Close => Self::Output::Close,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Pixels, Points, ScreenScale};

    fn point(x: f32, y: f32) -> Point<f32, Points> {
        Point::new(x, y)
    }

    #[test]
    fn coordinates_format_like_printf_g() {
        assert_eq!(format_coordinate(0.), "0");
        assert_eq!(format_coordinate(-0.), "0");
        assert_eq!(format_coordinate(50.), "50");
        assert_eq!(format_coordinate(14.142_136), "14.1421");
        assert_eq!(format_coordinate(85.857_864), "85.8579");
        assert_eq!(format_coordinate(6.698_73), "6.69873");
        assert_eq!(format_coordinate(143.301_27), "143.301");
        assert_eq!(format_coordinate(-2.5), "-2.5");
        assert_eq!(format_coordinate(0.000_012_5), "1.25e-05");
        assert_eq!(format_coordinate(1_234_567.), "1.23457e+06");
    }

    #[test]
    fn description_uses_core_graphics_operators() {
        let path = PathBuilder::new(point(0., 0.))
            .line_to(point(10., 0.))
            .cubic_curve_to(point(10., 5.), point(5., 10.), point(0., 10.))
            .close()
            .move_to(point(20., 20.))
            .build();

        assert_eq!(
            path.to_string(),
            "0 0 m 10 0 l 10 5 5 10 0 10 c h 20 20 m"
        );
        assert_eq!(path.subpath_count(), 2);
        assert!(!path.is_closed());
    }

    #[test]
    fn endpoints_skip_control_points() {
        let path = PathBuilder::new(point(0., 0.))
            .cubic_curve_to(point(1., 1.), point(2., 2.), point(3., 0.))
            .close()
            .build();

        assert_eq!(path.endpoints(), vec![point(0., 0.), point(3., 0.)]);
        assert!(path.is_closed());
    }

    #[test]
    fn scaling_converts_units() {
        let path = PathBuilder::new(point(1., 2.))
            .line_to(point(3., 4.))
            .close()
            .build();
        let scaled: Path<Pixels> = path * ScreenScale::new(2.);

        assert_eq!(scaled.to_string(), "2 4 m 6 8 l h");
    }

    #[test]
    fn lyon_conversion_ends_every_subpath() {
        use lyon_tessellation::path::Event;

        let path = PathBuilder::new(point(0., 10.))
            .cubic_curve_to(point(2., -10.), point(8., 20.), point(10., 0.))
            .move_to(point(10., 0.))
            .cubic_curve_to(point(8., 20.), point(2., -10.), point(0., 10.))
            .build();

        let events: Vec<_> = path.as_lyon().iter().collect();
        let begins = events
            .iter()
            .filter(|event| matches!(event, Event::Begin { .. }))
            .count();
        let open_ends = events
            .iter()
            .filter(|event| matches!(event, Event::End { close: false, .. }))
            .count();
        assert_eq!(begins, 2);
        assert_eq!(open_ends, 2);
    }

    #[test]
    fn lyon_conversion_closes_closed_subpaths() {
        use lyon_tessellation::path::Event;

        let path = PathBuilder::new(point(0., 0.))
            .line_to(point(10., 0.))
            .line_to(point(10., 10.))
            .close()
            .build();

        let closed = path
            .as_lyon()
            .iter()
            .filter(|event| matches!(event, Event::End { close: true, .. }))
            .count();
        assert_eq!(closed, 1);
    }
}
