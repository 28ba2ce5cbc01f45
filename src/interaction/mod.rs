use serde::{Deserialize, Serialize};

/// The sample nearest the current pointer position, in canvas pixels plus the
/// raw values it represents. At most one exists per pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivePoint {
    pub canvas_x: f64,
    pub canvas_y: f64,
    pub price: f64,
    pub unix: i64,
}

/// Typed message emitted to the host whenever the active point changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActivePointEvent {
    Changed(ActivePoint),
    Cleared,
}

/// Hover ownership for the active point: replaced or cleared on every pointer
/// event, visually retained between events until one changes it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverState {
    active: Option<ActivePoint>,
}

impl HoverState {
    #[must_use]
    pub fn active(self) -> Option<ActivePoint> {
        self.active
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.active.is_some()
    }

    /// Applies a pointer-move resolution. An unresolvable position (pointer
    /// outside the drawable area) behaves like a leave, never an error.
    ///
    /// Returns an event only when the active point actually changed.
    pub fn on_pointer_move(&mut self, resolved: Option<ActivePoint>) -> Option<ActivePointEvent> {
        match resolved {
            Some(point) => {
                if self.active == Some(point) {
                    return None;
                }
                self.active = Some(point);
                Some(ActivePointEvent::Changed(point))
            }
            None => self.on_pointer_leave(),
        }
    }

    /// Clears the active point, reporting the change if there was one.
    pub fn on_pointer_leave(&mut self) -> Option<ActivePointEvent> {
        if self.active.take().is_some() {
            Some(ActivePointEvent::Cleared)
        } else {
            None
        }
    }
}
