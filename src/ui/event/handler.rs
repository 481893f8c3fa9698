use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use edtable_app::action::Action;
use edtable_app::ports::HostView;
use edtable_app::state::TableState;

use super::Event;

/// Horizontal scroll per key press or wheel notch, in terminal cells.
pub const SCROLL_STEP_CELLS: f64 = 4.0;

pub fn handle_event(event: Event, state: &TableState, host: &HostView) -> Action {
    match event {
        Event::Init => Action::Mount,
        Event::Resize(w, h) => Action::Resize(w, h),
        Event::Key(key) => handle_key_event(key, state),
        Event::Mouse(mouse) => handle_mouse_event(mouse, state, host),
    }
}

fn scroll_step(state: &TableState) -> f64 {
    SCROLL_STEP_CELLS * state.cell_px
}

fn handle_key_event(key: KeyEvent, state: &TableState) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::ResetWidths,

        // Horizontal scroll
        KeyCode::Left | KeyCode::Char('h') => Action::ScrollBy(-scroll_step(state)),
        KeyCode::Right | KeyCode::Char('l') => Action::ScrollBy(scroll_step(state)),
        KeyCode::Home | KeyCode::Char('0') => Action::ScrollHome,
        KeyCode::End | KeyCode::Char('$') => Action::ScrollEnd,

        _ => Action::None,
    }
}

/// While a drag is active the host routes motion and release to the gesture,
/// wherever the pointer is.
fn handle_mouse_event(mouse: MouseEvent, state: &TableState, host: &HostView) -> Action {
    let Some(area) = state.area else {
        return Action::None;
    };
    let x = area.pointer_px(mouse.column);
    let region = area.region_of(mouse.column, mouse.row);
    let horizontal_wheel = mouse.modifiers.contains(KeyModifiers::SHIFT);

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
            if host.drag_listeners {
                Action::DragMove { x }
            } else {
                Action::PointerMove { x, region }
            }
        }
        MouseEventKind::Down(MouseButton::Left) => Action::PointerDown { x, region },
        MouseEventKind::Up(MouseButton::Left) if host.drag_listeners => Action::PointerUp { x },
        MouseEventKind::ScrollLeft => Action::ScrollBy(-scroll_step(state)),
        MouseEventKind::ScrollRight => Action::ScrollBy(scroll_step(state)),
        MouseEventKind::ScrollUp if horizontal_wheel => Action::ScrollBy(-scroll_step(state)),
        MouseEventKind::ScrollDown if horizontal_wheel => Action::ScrollBy(scroll_step(state)),
        _ => Action::None,
    }
}
