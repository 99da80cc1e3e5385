//! Hover and selection state shared by the sidebar, the markers and the
//! detail panel.

use crate::{
    camera::{CameraState, CameraTarget},
    location::{Location, LocationId, Position},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Focus {
    #[default]
    Idle,
    Hovered(LocationId),
    Open(Location),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FocusEvent {
    /// Sidebar row, marker or tooltip click.
    Select(Location),
    /// Close button or a click outside of the detail panel.
    Close,
    MarkerEnter(LocationId),
    MarkerLeave { id: LocationId, position: Position },
    /// Click on the map background.
    MapClick,
}

impl Focus {
    #[must_use]
    pub const fn open_location(&self) -> Option<&Location> {
        match self {
            Self::Open(location) => Some(location),
            _ => None,
        }
    }

    /// Marker whose tooltip is shown.
    #[must_use]
    pub const fn tooltip_marker(&self) -> Option<LocationId> {
        match self {
            Self::Idle => None,
            Self::Hovered(id) => Some(*id),
            Self::Open(location) => Some(location.id),
        }
    }

    /// Applies `event` and returns where the camera has to go, if anywhere.
    pub fn apply(&mut self, event: FocusEvent, camera: &CameraState) -> Option<CameraTarget> {
        let (next, target) = match (&*self, event) {
            (_, FocusEvent::Select(location)) => {
                let target = CameraTarget::detail(location.position);
                (Self::Open(location), Some(target))
            }
            (Self::Open(_), FocusEvent::Close) => (Self::Idle, None),
            (Self::Open(_), _) => return None,
            (_, FocusEvent::MarkerEnter(id)) => (Self::Hovered(id), None),
            (Self::Hovered(hovered), FocusEvent::MarkerLeave { id, position })
                if *hovered == id && !camera.is_pinned_on(position) =>
            {
                (Self::Idle, None)
            }
            (Self::Hovered(_), FocusEvent::MapClick) => (Self::Idle, None),
            _ => return None,
        };
        if *self != next {
            log::debug!("Focus: {:?} -> {:?}", self.tooltip_marker(), next.tooltip_marker());
        }
        *self = next;
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{camera::DETAIL_ZOOM, location::tests::location, viewport::InitialView};

    fn camera() -> CameraState {
        CameraState::new(&InitialView::default())
    }

    #[test]
    fn select_opens_and_targets_camera() {
        let b = location(2, "B", 52.1, 13.2, &[]);
        let mut focus = Focus::Hovered(1);
        let target = focus.apply(FocusEvent::Select(b.clone()), &camera());
        assert_eq!(focus, Focus::Open(b.clone()));
        assert_eq!(target, Some(CameraTarget::new(b.position, DETAIL_ZOOM)));
    }

    #[test]
    fn repeated_select_refreshes_camera_stamp() {
        let b = location(2, "B", 52.1, 13.2, &[]);
        let mut camera = camera();
        let mut focus = Focus::Idle;

        let target = focus.apply(FocusEvent::Select(b.clone()), &camera).unwrap();
        camera.fly_to(target);
        let first = camera.stamp;

        let target = focus.apply(FocusEvent::Select(b.clone()), &camera).unwrap();
        assert_eq!(target.center, camera.center);
        assert_eq!(target.zoom, camera.zoom);
        camera.fly_to(target);
        assert!(camera.stamp > first);
        assert_eq!(focus.open_location(), Some(&b));
    }

    #[test]
    fn close_returns_to_idle() {
        let mut focus = Focus::Open(location(1, "A", 52.0, 13.0, &[]));
        assert_eq!(focus.apply(FocusEvent::Close, &camera()), None);
        assert_eq!(focus, Focus::Idle);
    }

    #[test]
    fn last_hover_wins() {
        let mut focus = Focus::Idle;
        focus.apply(FocusEvent::MarkerEnter(1), &camera());
        focus.apply(FocusEvent::MarkerEnter(2), &camera());
        assert_eq!(focus, Focus::Hovered(2));
        assert_eq!(focus.tooltip_marker(), Some(2));

        // leaving a marker that is no longer hovered changes nothing
        let stale = FocusEvent::MarkerLeave {
            id: 1,
            position: Position::new(52.0, 13.0),
        };
        focus.apply(stale, &camera());
        assert_eq!(focus, Focus::Hovered(2));
    }

    #[test]
    fn leave_clears_hover() {
        let mut focus = Focus::Hovered(1);
        let leave = FocusEvent::MarkerLeave {
            id: 1,
            position: Position::new(52.0, 13.0),
        };
        focus.apply(leave, &camera());
        assert_eq!(focus, Focus::Idle);
    }

    #[test]
    fn keep_tooltip_of_marker_flown_to() {
        let a = location(1, "A", 52.0, 13.0, &[]);
        let mut camera = camera();
        camera.fly_to(CameraTarget::detail(a.position));

        let mut focus = Focus::Hovered(a.id);
        let leave = FocusEvent::MarkerLeave {
            id: a.id,
            position: a.position,
        };
        focus.apply(leave.clone(), &camera);
        assert_eq!(focus, Focus::Hovered(a.id));

        // zoomed out again: the pin no longer holds
        camera.fly_to(CameraTarget::new(a.position, 12.0));
        focus.apply(leave, &camera);
        assert_eq!(focus, Focus::Idle);
    }

    #[test]
    fn map_click_clears_hover_but_not_open() {
        let mut focus = Focus::Hovered(3);
        focus.apply(FocusEvent::MapClick, &camera());
        assert_eq!(focus, Focus::Idle);

        let a = location(1, "A", 52.0, 13.0, &[]);
        let mut focus = Focus::Open(a.clone());
        focus.apply(FocusEvent::MapClick, &camera());
        assert_eq!(focus, Focus::Open(a.clone()));
        focus.apply(FocusEvent::MarkerEnter(5), &camera());
        assert_eq!(focus, Focus::Open(a));
    }

    #[test]
    fn leave_keeps_open_details() {
        let a = location(1, "A", 52.0, 13.0, &[]);
        let mut focus = Focus::Open(a.clone());
        let leave = FocusEvent::MarkerLeave {
            id: a.id,
            position: a.position,
        };
        assert_eq!(focus.apply(leave, &camera()), None);
        assert_eq!(focus, Focus::Open(a));
        assert_eq!(focus.tooltip_marker(), Some(1));
    }

    #[test]
    fn idle_ignores_close_and_click() {
        let mut focus = Focus::Idle;
        assert_eq!(focus.apply(FocusEvent::Close, &camera()), None);
        assert_eq!(focus.apply(FocusEvent::MapClick, &camera()), None);
        assert_eq!(focus, Focus::Idle);
    }
}
