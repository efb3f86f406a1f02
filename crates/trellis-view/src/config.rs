//! Scrolling tunables.

/// Settings shared by a scroll view and its scrollbars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Line steps scrolled per wheel notch.
    pub wheel_steps: f32,
    /// Line step a new scrollbar starts with.
    pub line_step: f32,
    /// Scrollbar thickness when its style sets no `width`/`height`.
    pub scrollbar_thickness: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            wheel_steps: 3.0,
            line_step: 1.0,
            scrollbar_thickness: 16.0,
        }
    }
}
