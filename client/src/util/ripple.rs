//! Click ripple geometry for the project tech tags.
//!
//! A ripple is a circle as large as the tag's longer side, centred on the
//! click point. Each click replaces the previous ripple; its removal timer
//! carries the ripple's sequence number so an old timer never clears a newer
//! ripple.

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

/// Lifetime of one ripple, matching the CSS animation.
pub const RIPPLE_MS: u32 = 600;

/// Ripple circle in the tag's local coordinates, px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleBox {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleBox {
    /// Centre a ripple on the click at (`client_x`, `client_y`) inside the
    /// tag whose bounding rect is `rect` = (left, top, width, height).
    #[must_use]
    pub fn centered_on(rect: (f64, f64, f64, f64), client_x: f64, client_y: f64) -> Self {
        let (left, top, width, height) = rect;
        let size = width.max(height);
        Self { size, left: client_x - left - size / 2.0, top: client_y - top - size / 2.0 }
    }

    #[must_use]
    pub fn style(&self) -> String {
        format!("width: {0}px; height: {0}px; left: {1}px; top: {2}px", self.size, self.left, self.top)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RippleState {
    active: Option<(u64, RippleBox)>,
    next_seq: u64,
}

impl RippleState {
    #[must_use]
    pub fn active(&self) -> Option<(u64, RippleBox)> {
        self.active
    }

    /// Show `ripple`, replacing any running one. Returns its sequence number.
    pub fn start(&mut self, ripple: RippleBox) -> u64 {
        self.next_seq += 1;
        self.active = Some((self.next_seq, ripple));
        self.next_seq
    }

    /// Removal timer callback. Only clears the ripple it was armed for.
    pub fn finish(&mut self, seq: u64) -> bool {
        if self.active.is_some_and(|(active, _)| active == seq) {
            self.active = None;
            return true;
        }
        false
    }
}
