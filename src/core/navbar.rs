use serde::Serialize;

pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavbarAppearance {
    Transparent,
    Solid,
}

/// Scroll-driven navbar state owned by one page instance.
///
/// Only reacts while attached, so re-initialising a page never leaves a
/// stale listener behind.
#[derive(Debug, Clone)]
pub struct NavbarTracker {
    threshold: f64,
    attached: bool,
    appearance: NavbarAppearance,
}

impl NavbarTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            attached: false,
            appearance: NavbarAppearance::Transparent,
        }
    }

    /// Starts tracking from the page's current scroll offset.
    pub fn attach(&mut self, offset: f64) -> NavbarAppearance {
        self.attached = true;
        self.appearance = self.appearance_for(offset);
        tracing::debug!("Navbar attached ({:?})", self.appearance);
        self.appearance
    }

    pub fn detach(&mut self) {
        if self.attached {
            tracing::debug!("Navbar detached");
        }
        self.attached = false;
    }

    /// Returns the new appearance only when it changed.
    pub fn on_scroll(&mut self, offset: f64) -> Option<NavbarAppearance> {
        if !self.attached {
            return None;
        }

        let next = self.appearance_for(offset);
        if next == self.appearance {
            return None;
        }
        self.appearance = next;
        Some(next)
    }

    pub fn appearance(&self) -> NavbarAppearance {
        self.appearance
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    fn appearance_for(&self, offset: f64) -> NavbarAppearance {
        if offset > self.threshold {
            NavbarAppearance::Solid
        } else {
            NavbarAppearance::Transparent
        }
    }
}

impl Default for NavbarTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}
