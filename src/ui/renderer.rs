//! Top-level rendering entry point.
//!
//! ```text
//! Controller → viewmodel(cols) → UIViewModel → components → ANSI on stdout
//! ```

use crate::app::Controller;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

/// Renders the current phase of `controller` to stdout.
///
/// Does not clear the screen; Zellij hands the plugin a fresh frame.
pub fn render(controller: &Controller, rows: usize, cols: usize) {
    let viewmodel = controller.viewmodel(cols);
    render_viewmodel(&viewmodel, controller.theme(), rows, cols);
}

/// Dispatches a view model to the layout matching its body.
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    match &vm.body {
        Body::Empty(empty) => components::render_empty_state(empty, theme, cols),
        Body::Search(panel) => components::render_search_screen(vm, panel, theme, cols, rows),
        Body::County(county) => components::render_county_screen(vm, county, theme, cols, rows),
    }
}
