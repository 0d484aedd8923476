//! Layout Mode
//!
//! Desktop sidebar versus mobile bottom bar.

/// Default viewport width (px) at or below which the mobile layout is used
pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Vertical list: primary section, divider, secondary section
    Desktop,
    /// Bottom action bar built from the primary catalog plus a profile slot
    Mobile,
}

impl LayoutMode {
    /// Equivalent of the `(max-width: <breakpoint>px)` media query
    pub fn for_width(width: f64, breakpoint: u32) -> Self {
        if width <= f64::from(breakpoint) {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, LayoutMode::Mobile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_inclusive() {
        assert_eq!(LayoutMode::for_width(800.0, 800), LayoutMode::Mobile);
        assert_eq!(LayoutMode::for_width(800.5, 800), LayoutMode::Desktop);
        assert_eq!(LayoutMode::for_width(375.0, 800), LayoutMode::Mobile);
        assert_eq!(LayoutMode::for_width(1440.0, 800), LayoutMode::Desktop);
    }

    #[test]
    fn test_custom_breakpoint() {
        assert!(LayoutMode::for_width(900.0, 1024).is_mobile());
    }
}
