use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Screen};

/// Years the current year moves per `[` / `]` press on the results screen.
const YEAR_STEP: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Quit,
    /// Run `service.compute_statistics`(...) and `service.settlements_for_map`(...)
    RunQuery,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{BackTab, Backspace, Char, Down, Enter, Esc, Left, Right, Tab, Up};

    // Global quit shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if key.code == Char('q') && key.modifiers.is_empty() {
        return Action::Quit;
    }

    let mut action = Action::None;

    match app.screen {
        Screen::Query => match key.code {
            Tab | Down => {
                app.focused = app.focused.next();
            }
            BackTab | Up => {
                app.focused = app.focused.previous();
            }
            Char(character) if character.is_ascii_digit() || character == '-' => {
                app.focused_input_mut().push(character);
            }
            Backspace => {
                app.focused_input_mut().pop();
            }
            Right | Char('g') => {
                app.screen = Screen::GroupSelect;
            }
            Enter => {
                action = Action::RunQuery;
            }
            _ => {}
        },

        Screen::GroupSelect => match key.code {
            Up | Char('k') => {
                app.group_list_index = app.group_list_index.saturating_sub(1);
            }
            Down | Char('j') => {
                if app.group_list_index + 1 < app.groups.len() {
                    app.group_list_index += 1;
                }
            }
            Char(' ') => {
                app.toggle_current_group();
            }
            Char('c') => {
                app.selected_groups.clear();
            }
            Enter => {
                action = Action::RunQuery;
            }
            Left | Esc => {
                app.screen = Screen::Query;
            }
            _ => {}
        },

        Screen::Results => match key.code {
            Char(bracket @ ('[' | ']')) => {
                let delta = if bracket == '[' { -YEAR_STEP } else { YEAR_STEP };
                match app.shift_current_year(delta) {
                    Ok(()) => action = Action::RunQuery,
                    Err(msg) => app.error_message = Some(msg),
                }
            }
            Char('g') => {
                app.screen = Screen::GroupSelect;
            }
            Left | Esc | Char('b') => {
                app.screen = Screen::Query;
            }
            _ => {}
        },
    }
    action
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;

    use super::*;
    use crate::app::Field;
    use crate::testing::app;

    fn press(app: &mut App, code: KeyCode) -> Action {
        handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), app)
    }

    #[test]
    fn year_fields_accept_only_signed_digits() {
        let mut app = app();
        app.start_input.clear();

        for code in [KeyCode::Char('-'), KeyCode::Char('3'), KeyCode::Char('x'), KeyCode::Char('0')] {
            press(&mut app, code);
        }
        assert_eq!(app.start_input, "-30", "letters are ignored");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused, Field::EndYear, "tab moves to the next field");
    }

    #[test]
    fn enter_runs_query_from_group_screen() {
        let mut app = app();
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.screen, Screen::GroupSelect, "g opens groups");

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.selected_groups.len(), 1, "space toggles");
        assert_eq!(press(&mut app, KeyCode::Enter), Action::RunQuery, "enter queries");
    }

    #[test]
    fn brackets_step_the_current_year() {
        let mut app = app();
        app.screen = Screen::Results;

        assert_eq!(press(&mut app, KeyCode::Char(']')), Action::RunQuery, "re-query");
        assert_eq!(app.current_input, "10", "stepped forward");
        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.current_input, "-10", "stepped back");
    }

    #[test]
    fn q_quits_everywhere() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), Action::Quit, "quit");
    }
}
