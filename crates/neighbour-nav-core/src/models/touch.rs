/// A single touch contact in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Host touch identifier, stable for the lifetime of one contact
    pub id: i32,
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(id: i32, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}
