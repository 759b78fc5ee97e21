use super::*;

#[test]
fn panel_starts_closed() {
    assert_eq!(PanelState::default(), PanelState::Closed);
}

#[test]
fn toggle_button_flips_state() {
    let (open, effect) = transition(PanelState::Closed, PanelClick::ToggleButton);
    assert_eq!(open, PanelState::Open);
    assert_eq!(effect, PanelEffect::Opened);

    let (closed, effect) = transition(open, PanelClick::ToggleButton);
    assert_eq!(closed, PanelState::Closed);
    assert_eq!(effect, PanelEffect::Closed { clear_inline_position: false });
}

#[test]
fn outside_click_dismisses_open_panel_and_clears_position() {
    let (state, effect) = transition(PanelState::Open, PanelClick::Outside);
    assert_eq!(state, PanelState::Closed);
    assert_eq!(effect, PanelEffect::Closed { clear_inline_position: true });
}

#[test]
fn inside_click_keeps_panel_open() {
    assert_eq!(transition(PanelState::Open, PanelClick::Inside), (PanelState::Open, PanelEffect::Unchanged));
}

#[test]
fn closed_panel_ignores_everything_but_the_button() {
    for click in [PanelClick::Inside, PanelClick::Outside] {
        assert_eq!(transition(PanelState::Closed, click), (PanelState::Closed, PanelEffect::Unchanged));
    }
}
