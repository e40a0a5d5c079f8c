//! View state and cursor direction types.
//!
//! The engine is always in exactly one view:
//! - **Search**: the search surface (initial state, or reached via back)
//! - **Results**: one county's migration figures
//!
//! # Example
//!
//! ```rust
//! use countyflow::app::modes::ViewState;
//! use countyflow::domain::CountyIdentity;
//!
//! let view = ViewState::Results(CountyIdentity::new("42_101"));
//! assert!(!view.is_search());
//! ```

use crate::domain::CountyIdentity;

/// Which view is displayed.
///
/// Being an enum, the view can never be both or neither.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// The search surface.
    #[default]
    Search,

    /// The migration figures of one county.
    Results(CountyIdentity),
}

impl ViewState {
    #[must_use]
    pub const fn is_search(&self) -> bool {
        matches!(self, Self::Search)
    }

    /// The county displayed, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&CountyIdentity> {
        match self {
            Self::Search => None,
            Self::Results(identity) => Some(identity),
        }
    }
}

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}
