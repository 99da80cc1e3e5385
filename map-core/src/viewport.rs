use crate::location::{Location, Position};

/// Center used when there is nothing to frame (London).
pub const FALLBACK_CENTER: Position = Position::new(51.5074, -0.1278);
pub const FALLBACK_ZOOM: f64 = 13.0;

/// Smallest span in degrees fed into the zoom heuristic.
///
/// A single location (or several at one spot) would otherwise end up
/// in `log2(0)`. With this floor the zoom tops out at 18.
pub const MIN_SPAN_DEG: f64 = 0.001;

const ZOOM_OFFSET: f64 = 15.5;
const KM_PER_DEGREE: f64 = 111.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Returns `None` for an empty set of positions.
    pub fn from_positions<I>(positions: I) -> Option<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        positions.into_iter().fold(None, |bbox, pos| {
            let bbox = bbox.unwrap_or(Self {
                min_lat: pos.lat,
                max_lat: pos.lat,
                min_lng: pos.lng,
                max_lng: pos.lng,
            });
            Some(Self {
                min_lat: bbox.min_lat.min(pos.lat),
                max_lat: bbox.max_lat.max(pos.lat),
                min_lng: bbox.min_lng.min(pos.lng),
                max_lng: bbox.max_lng.max(pos.lng),
            })
        })
    }

    /// Arithmetic midpoint, not a great-circle centroid.
    #[must_use]
    pub fn center(&self) -> Position {
        Position::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    #[must_use]
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    #[must_use]
    pub fn lng_span(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    #[must_use]
    pub fn max_span(&self) -> f64 {
        self.lat_span().max(self.lng_span())
    }

    #[must_use]
    pub const fn south_west(&self) -> Position {
        Position::new(self.min_lat, self.min_lng)
    }

    #[must_use]
    pub const fn north_east(&self) -> Position {
        Position::new(self.max_lat, self.max_lng)
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        (self.min_lat..=self.max_lat).contains(&pos.lat)
            && (self.min_lng..=self.max_lng).contains(&pos.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialView {
    pub bounds: Option<BoundingBox>,
    pub center: Position,
    pub zoom: f64,
}

impl Default for InitialView {
    fn default() -> Self {
        Self {
            bounds: None,
            center: FALLBACK_CENTER,
            zoom: FALLBACK_ZOOM,
        }
    }
}

/// Zoom heuristic: `floor(15.5 - log2(span * 111))`.
///
/// Ignores the aspect ratio of the viewport and the latitude dependent
/// length of a degree of longitude.
#[must_use]
pub fn zoom_for_span(max_span: f64) -> f64 {
    (ZOOM_OFFSET - (max_span.max(MIN_SPAN_DEG) * KM_PER_DEGREE).log2()).floor()
}

pub fn compute_initial_view<'a, I>(locations: I) -> InitialView
where
    I: IntoIterator<Item = &'a Location>,
{
    let Some(bounds) = BoundingBox::from_positions(locations.into_iter().map(|l| l.position))
    else {
        log::debug!("No locations to frame, using fallback view");
        return InitialView::default();
    };
    let view = InitialView {
        bounds: Some(bounds),
        center: bounds.center(),
        zoom: zoom_for_span(bounds.max_span()),
    };
    log::debug!("Initial view: {view:?}");
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::tests::location;

    #[test]
    fn fallback_for_empty_input() {
        let view = compute_initial_view(std::iter::empty());
        assert_eq!(view.bounds, None);
        assert_eq!(view.center, FALLBACK_CENTER);
        assert_eq!(view.zoom, FALLBACK_ZOOM);
    }

    #[test]
    fn frame_two_locations() {
        let locations = [
            location(1, "A", 52.0, 13.0, &[]),
            location(2, "B", 52.1, 13.2, &[]),
        ];
        let view = compute_initial_view(&locations);
        let bounds = view.bounds.unwrap();
        assert_eq!(bounds.min_lat, 52.0);
        assert_eq!(bounds.max_lat, 52.1);
        assert_eq!(bounds.min_lng, 13.0);
        assert_eq!(bounds.max_lng, 13.2);
        assert!((view.center.lat - 52.05).abs() < 1e-9);
        assert!((view.center.lng - 13.1).abs() < 1e-9);
        assert_eq!(view.zoom, 11.0);
    }

    #[test]
    fn center_lies_within_bounds() {
        let locations = [
            location(1, "A", -33.9, 151.2, &[]),
            location(2, "B", 40.7, -74.0, &[]),
            location(3, "C", 1.3, 103.8, &[]),
            location(4, "D", 52.5, 13.4, &[]),
        ];
        let view = compute_initial_view(&locations);
        let bounds = view.bounds.unwrap();
        assert!(bounds.min_lat <= bounds.max_lat);
        assert!(bounds.min_lng <= bounds.max_lng);
        assert!(bounds.contains(view.center));
        for l in &locations {
            assert!(bounds.contains(l.position));
        }
    }

    #[test]
    fn clamp_zero_span_for_single_location() {
        let view = compute_initial_view(&[location(1, "A", 52.52, 13.405, &[])]);
        let bounds = view.bounds.unwrap();
        assert_eq!(bounds.max_span(), 0.0);
        assert_eq!(view.center, Position::new(52.52, 13.405));
        assert!(view.zoom.is_finite());
        assert_eq!(view.zoom, 18.0);
    }

    #[test]
    fn zoom_for_typical_spans() {
        assert_eq!(zoom_for_span(0.2), 11.0);
        // ~2.2 km
        assert_eq!(zoom_for_span(0.02), 14.0);
        // continental scale
        assert_eq!(zoom_for_span(20.0), 4.0);
    }
}
