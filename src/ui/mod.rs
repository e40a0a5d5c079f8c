//! Terminal rendering layer.
//!
//! Turns engine state into ANSI-styled output through view models and small
//! composable components.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`format`]: number, currency and data-completeness formatting
//! - [`viewmodel`]: display-ready view model types
//! - [`renderer`]: rendering entry point
//! - [`components`]: header, footer, search surface, stats, flow tables
//! - [`helpers`]: cursor positioning, width-aware padding, highlighting
//! - [`theme`]: color themes and escape sequences

pub mod components;
pub mod format;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use format::{format_count, format_currency, format_signed_count, has_limited_data, Polarity};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    Body, CountyViewModel, EmptyState, FeaturedItem, FlowRow, FooterInfo, HeaderInfo, Notice, ResultItem,
    SearchPanel, SearchResults, UIViewModel,
};
