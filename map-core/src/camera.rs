use crate::{
    location::Position,
    viewport::{BoundingBox, InitialView},
};

/// Zoom used when flying to a single location.
pub const DETAIL_ZOOM: f64 = 16.0;

/// Zoom used when flying to the device position.
pub const LOCATE_ZOOM: f64 = 15.0;

/// Space in pixels kept free around the bounds on the initial fit.
pub const FIT_BOUNDS_PADDING: f64 = 20.0;

/// Above this zoom a marker sitting at the camera center keeps its tooltip.
pub const PIN_ZOOM_THRESHOLD: f64 = 14.0;

/// Monotonic counter attached to every camera request.
///
/// A new stamp makes the map animate again even if center and zoom did
/// not change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CameraStamp(u64);

impl CameraStamp {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    pub center: Position,
    pub zoom: f64,
}

impl CameraTarget {
    #[must_use]
    pub const fn new(center: Position, zoom: f64) -> Self {
        Self { center, zoom }
    }

    #[must_use]
    pub const fn detail(center: Position) -> Self {
        Self::new(center, DETAIL_ZOOM)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub center: Position,
    pub zoom: f64,
    pub stamp: CameraStamp,
}

impl CameraState {
    #[must_use]
    pub fn new(view: &InitialView) -> Self {
        Self {
            center: view.center,
            zoom: view.zoom,
            stamp: CameraStamp::default(),
        }
    }

    /// Retargets the camera and always issues a fresh stamp.
    pub fn fly_to(&mut self, target: CameraTarget) {
        self.center = target.center;
        self.zoom = target.zoom;
        self.stamp = self.stamp.next();
        log::debug!("Camera {:?}: {target:?}", self.stamp);
    }

    /// `true` if the camera sits on `pos` zoomed in past the pin threshold.
    #[must_use]
    pub fn is_pinned_on(&self, pos: Position) -> bool {
        self.center == pos && self.zoom > PIN_ZOOM_THRESHOLD
    }
}

/// Instructions for the map surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    FitBounds { bounds: BoundingBox, padding: f64 },
    FlyTo(CameraTarget),
    SetView(CameraTarget),
}

/// Translates camera state changes into map commands.
///
/// The first observed state fits the initial bounds, every later stamp
/// produces a fly-to.
#[derive(Debug, Clone, Default)]
pub struct CameraDriver {
    last_stamp: Option<CameraStamp>,
}

impl CameraDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.last_stamp.is_some()
    }

    pub fn next_command(
        &mut self,
        state: &CameraState,
        initial_bounds: Option<BoundingBox>,
    ) -> Option<CameraCommand> {
        match self.last_stamp.replace(state.stamp) {
            None => initial_bounds.map(|bounds| CameraCommand::FitBounds {
                bounds,
                padding: FIT_BOUNDS_PADDING,
            }),
            Some(last) if last == state.stamp => None,
            Some(_) => Some(CameraCommand::FlyTo(CameraTarget::new(state.center, state.zoom))),
        }
    }

    /// Re-centers after the map container changed its size.
    #[must_use]
    pub fn resize_command(&self, state: &CameraState) -> Option<CameraCommand> {
        self.is_initialized()
            .then(|| CameraCommand::SetView(CameraTarget::new(state.center, state.zoom)))
    }
}
