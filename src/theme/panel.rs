//! Open/closed state of the theme settings drawer.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// Where a click landed relative to the drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelClick {
    /// The drawer's own open/close button.
    ToggleButton,
    /// Anywhere inside the drawer.
    Inside,
    /// Neither the drawer nor its button.
    Outside,
}

/// What the render step has to do after a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelEffect {
    Unchanged,
    Opened,
    Closed {
        /// Drop any inline position override left on the drawer.
        clear_inline_position: bool,
    },
}

/// Advance the drawer state for one click.
///
/// Only the toggle button can open the drawer. While open, the button
/// closes it and an outside click dismisses it.
#[must_use]
pub fn transition(state: PanelState, click: PanelClick) -> (PanelState, PanelEffect) {
    match (state, click) {
        (PanelState::Closed, PanelClick::ToggleButton) => (PanelState::Open, PanelEffect::Opened),
        (PanelState::Open, PanelClick::ToggleButton) => {
            (PanelState::Closed, PanelEffect::Closed { clear_inline_position: false })
        }
        (PanelState::Open, PanelClick::Outside) => {
            (PanelState::Closed, PanelEffect::Closed { clear_inline_position: true })
        }
        (state, _) => (state, PanelEffect::Unchanged),
    }
}
