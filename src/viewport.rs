use crate::persistence::AppConfig;

/// Layout class derived from the terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

/// Tracks whether the terminal is narrow enough for the compact layout
///
/// Widths are compared in logical pixels: columns times the configured cell width.
#[derive(Debug, Clone)]
pub struct Viewport {
    narrow_max_width_px: u32,
    cell_width_px: u32,
    class: ViewportClass,
}

impl Viewport {
    pub fn new(narrow_max_width_px: u32, cell_width_px: u32) -> Self {
        Self {
            narrow_max_width_px,
            cell_width_px: cell_width_px.max(1),
            class: ViewportClass::Wide,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.narrow_max_width_px, config.cell_width_px)
    }

    /// Recompute the class for a new width; true when the class changed
    pub fn observe(&mut self, columns: u16) -> bool {
        let width_px = u32::from(columns) * self.cell_width_px;
        let class = if width_px <= self.narrow_max_width_px {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        };
        let changed = class != self.class;
        self.class = class;
        changed
    }

    pub fn is_narrow(&self) -> bool {
        self.class == ViewportClass::Narrow
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive() {
        let mut viewport = Viewport::new(768, 8);
        viewport.observe(96); // 768px
        assert!(viewport.is_narrow());
        viewport.observe(97); // 776px
        assert!(!viewport.is_narrow());
    }

    #[test]
    fn test_observe_reports_changes() {
        let mut viewport = Viewport::default();
        assert!(!viewport.observe(120));
        assert!(viewport.observe(60));
        assert!(!viewport.observe(70));
        assert!(viewport.is_narrow());
        assert!(viewport.observe(200));
    }

    #[test]
    fn test_zero_cell_width_is_clamped() {
        let mut viewport = Viewport::new(768, 0);
        viewport.observe(500);
        assert!(viewport.is_narrow());
        viewport.observe(769);
        assert!(!viewport.is_narrow());
    }
}
