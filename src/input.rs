use crate::config::Controls;
use crate::moves::{Move, Turn};
use crate::terminal::surface_size;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Everything a user can ask for, independent of how the terminal reported it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Turn(Turn),
    /// Pointer movement in cells since the previous drag event
    RotateCamera { dx: f64, dy: f64 },
    /// Start of a zoom drag
    AnchorZoom,
    /// Rows moved since the zoom drag started
    Zoom { dy: f64 },
    ResizeCube { delta: isize },
    ResetCamera,
    ToggleView,
    /// New drawing surface size in pixels
    Resize { width: usize, height: usize },
    Quit,
}

/// Pointer gestures in progress, as `(column, row)` positions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    /// Last position seen during a rotation drag
    rotating: Option<(u16, u16)>,
    /// Where the zoom drag started
    zoom_origin: Option<(u16, u16)>,
    /// Where the face-turn drag started
    face_drag_origin: Option<(u16, u16)>,
}

/// Turns one terminal event into at most one command
pub fn translate(
    state: InputState,
    event: &Event,
    controls: &Controls,
) -> (InputState, Option<Command>) {
    match event {
        Event::Key(key) => (state, translate_key(key)),
        Event::Mouse(mouse) => translate_mouse(state, mouse, controls),
        Event::Resize(cols, rows) => {
            let (width, height) = surface_size(*cols, *rows);
            (state, Some(Command::Resize { width, height }))
        }
        _ => (state, None),
    }
}

fn translate_key(key: &KeyEvent) -> Option<Command> {
    // Only some platforms report releases
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let c = match key.code {
        KeyCode::Char(c) => c,
        KeyCode::Esc => return Some(Command::Quit),
        _ => return None,
    };
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return (c == 'c').then_some(Command::Quit);
    }

    let inverse = key.modifiers.contains(KeyModifiers::SHIFT) || c.is_ascii_uppercase();
    match c.to_ascii_lowercase() {
        'q' => Some(Command::Quit),
        'w' => Some(Command::ResetCamera),
        'v' => Some(Command::ToggleView),
        '+' | '=' => Some(Command::ResizeCube { delta: 1 }),
        '-' | '_' => Some(Command::ResizeCube { delta: -1 }),
        other => Move::from_symbol(other).map(|mv| Command::Turn(Turn::new(mv, inverse))),
    }
}

fn translate_mouse(
    mut state: InputState,
    mouse: &MouseEvent,
    controls: &Controls,
) -> (InputState, Option<Command>) {
    let pos = (mouse.column, mouse.row);
    let command = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            state.rotating = Some(pos);
            None
        }
        MouseEventKind::Down(MouseButton::Middle) => {
            state.zoom_origin = Some(pos);
            Some(Command::AnchorZoom)
        }
        MouseEventKind::Down(MouseButton::Right) => {
            state.face_drag_origin = Some(pos);
            None
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            state.rotating.replace(pos).map(|(x, y)| Command::RotateCamera {
                dx: offset(x, pos.0),
                dy: offset(y, pos.1),
            })
        }
        MouseEventKind::Drag(MouseButton::Middle) => state
            .zoom_origin
            .map(|(_, y)| Command::Zoom { dy: offset(y, pos.1) }),
        MouseEventKind::Up(MouseButton::Left) => {
            state.rotating = None;
            None
        }
        MouseEventKind::Up(MouseButton::Middle) => {
            state.zoom_origin = None;
            None
        }
        MouseEventKind::Up(MouseButton::Right) => state
            .face_drag_origin
            .take()
            .and_then(|(x, _)| face_drag(x, pos.0, mouse.modifiers, controls)),
        MouseEventKind::ScrollUp => Some(Command::ResizeCube { delta: 1 }),
        MouseEventKind::ScrollDown => Some(Command::ResizeCube { delta: -1 }),
        _ => None,
    };
    (state, command)
}

fn offset(from: u16, to: u16) -> f64 {
    f64::from(to) - f64::from(from)
}

/// A long enough horizontal right-button drag turns the front face.
/// Rightwards is clockwise, Shift flips it.
fn face_drag(start: u16, end: u16, modifiers: KeyModifiers, controls: &Controls) -> Option<Command> {
    let dx = i32::from(end) - i32::from(start);
    if dx.unsigned_abs() <= u32::from(controls.face_drag_threshold) {
        return None;
    }
    let inverse = (dx < 0) != modifiers.contains(KeyModifiers::SHIFT);
    Some(Command::Turn(Turn::new(Move::F, inverse)))
}
