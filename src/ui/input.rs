//! Mapping of terminal input events to stopwatch commands

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

use super::render::TapSurface;

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Toggle,
    Reset,
    ToggleFullscreen,
    Quit,
}

/// Translate a terminal event into a command. `surface` is the area of the
/// tap surface as last drawn; clicks outside it are ignored.
pub fn map_event(event: &Event, surface: Rect) -> Option<Command> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse, surface),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::Toggle),
        KeyCode::F(5) | KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Esc | KeyCode::Char('f') => Some(Command::ToggleFullscreen),
        _ => None,
    }
}

fn map_mouse(mouse: &MouseEvent, surface: Rect) -> Option<Command> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left)
            if TapSurface::hit_test(surface, mouse.column, mouse.row) =>
        {
            Some(Command::Toggle)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    const SURFACE: Rect = Rect { x: 0, y: 0, width: 80, height: 24 };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn keys_map_to_commands() {
        let cases = [
            (KeyCode::Char(' '), Some(Command::Toggle)),
            (KeyCode::Enter, Some(Command::Toggle)),
            (KeyCode::F(5), Some(Command::Reset)),
            (KeyCode::Char('r'), Some(Command::Reset)),
            (KeyCode::Esc, Some(Command::ToggleFullscreen)),
            (KeyCode::Char('f'), Some(Command::ToggleFullscreen)),
            (KeyCode::Char('q'), Some(Command::Quit)),
            (KeyCode::Char('x'), None),
            (KeyCode::F(6), None),
        ];
        for (code, expected) in cases {
            assert_eq!(map_event(&key(code), SURFACE), expected, "{:?}", code);
        }
    }

    #[test]
    fn ctrl_c_quits() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(&event, SURFACE), Some(Command::Quit));
        assert_eq!(map_event(&key(KeyCode::Char('c')), SURFACE), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::F(5),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(&event, SURFACE), None);
    }

    #[test]
    fn left_click_anywhere_toggles() {
        for (column, row) in [(0, 0), (40, 12), (79, 23)] {
            assert_eq!(
                map_event(&click(MouseEventKind::Down(MouseButton::Left), column, row), SURFACE),
                Some(Command::Toggle)
            );
        }
    }

    #[test]
    fn other_mouse_events_are_ignored() {
        let ignored = [
            click(MouseEventKind::Down(MouseButton::Right), 5, 5),
            click(MouseEventKind::Up(MouseButton::Left), 5, 5),
            click(MouseEventKind::Moved, 5, 5),
            click(MouseEventKind::ScrollDown, 5, 5),
            click(MouseEventKind::Down(MouseButton::Left), 80, 5),
            click(MouseEventKind::Down(MouseButton::Left), 5, 24),
        ];
        for event in ignored {
            assert_eq!(map_event(&event, SURFACE), None, "{:?}", event);
        }
    }

    #[test]
    fn clicks_follow_surface_bounds() {
        let surface = Rect::new(2, 3, 10, 5);
        let down = MouseEventKind::Down(MouseButton::Left);
        assert_eq!(map_event(&click(down, 2, 3), surface), Some(Command::Toggle));
        assert_eq!(map_event(&click(down, 11, 7), surface), Some(Command::Toggle));
        assert_eq!(map_event(&click(down, 1, 3), surface), None);
        assert_eq!(map_event(&click(down, 12, 7), surface), None);
    }

    #[test]
    fn resize_is_not_a_command() {
        assert_eq!(map_event(&Event::Resize(100, 30), SURFACE), None);
        assert_eq!(map_event(&Event::FocusGained, SURFACE), None);
    }
}
