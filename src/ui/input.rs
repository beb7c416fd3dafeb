use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.on_dice_screen() {
        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char(' ') => app.roll(),
            KeyCode::Char('s') | KeyCode::Char('S') => app.share_result(),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => app.close_dice_screen(),
            KeyCode::Char('q') => app.request_quit(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => app.open_dice_screen(),
        KeyCode::Esc | KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
