//! Layout control keywords.
//!
//! ```css
//! .list { overflow-y: auto; }
//! .canvas { overflow: scroll; }
//! ```

use crate::Style;

/// Per-axis overflow policy of a scrollable region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentOverflow {
    /// Content is not clipped and no scrollbar is shown.
    Visible,
    /// Clip content and never show a scrollbar (default).
    #[default]
    Hidden,
    /// Always show the scrollbar.
    Scroll,
    /// Show the scrollbar only when content overflows.
    Automatic,
}

impl ContentOverflow {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "visible" => Some(ContentOverflow::Visible),
            "hidden" => Some(ContentOverflow::Hidden),
            "scroll" => Some(ContentOverflow::Scroll),
            "auto" => Some(ContentOverflow::Automatic),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            ContentOverflow::Visible => "visible",
            ContentOverflow::Hidden => "hidden",
            ContentOverflow::Scroll => "scroll",
            ContentOverflow::Automatic => "auto",
        }
    }

    /// Read an overflow keyword from a style, if one is set.
    pub fn from_style(style: &Style, property_name: &str) -> Option<Self> {
        Self::from_keyword(style.keyword(property_name))
    }
}
