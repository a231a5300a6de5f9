use crossterm::event::KeyCode;

use crate::app::state::{App, AppScreen, EditTarget};

pub fn handle_input(app: &mut App, key: KeyCode) {
    if app.editing.is_some() {
        handle_edit_input(app, key);
        return;
    }

    if handle_help_toggle(app, key) {
        return;
    }

    if handle_global_input(app, key) {
        return;
    }

    match app.screen {
        AppScreen::Main => {}
        AppScreen::Ticks => handle_ticks_input(app, key),
        AppScreen::FirstSends => handle_first_sends_input(app, key),
        AppScreen::Charts => handle_charts_input(app, key),
    }
}

fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if key == KeyCode::F(1) {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if key == KeyCode::Esc {
            app.show_help = false;
        }
        return true;
    }

    false
}

/// Keys valid on every screen: quit, navigation between screens, refresh
/// and the two text fields.
fn handle_global_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Esc => {
            if app.screen == AppScreen::Main {
                app.running = false;
            } else {
                app.screen = AppScreen::Main;
            }
        }
        KeyCode::Char('r') => {
            app.request_refresh();
        }
        KeyCode::Char('u') => {
            app.editing = Some(EditTarget::ProfileUrl);
        }
        KeyCode::Char('f') => {
            app.editing = Some(EditTarget::RouteTypeFilter);
        }
        KeyCode::Char('m') => {
            app.screen = AppScreen::Main;
        }
        KeyCode::Char('t') => {
            app.screen = AppScreen::Ticks;
        }
        KeyCode::Char('s') => {
            app.screen = AppScreen::FirstSends;
        }
        KeyCode::Char('c') => {
            app.screen = AppScreen::Charts;
        }
        _ => return false,
    }

    true
}

/// Line editing for the profile URL and route-type filter fields. Enter
/// commits: a new URL queues a refresh, a new filter only recomputes the
/// derived first sends.
fn handle_edit_input(app: &mut App, key: KeyCode) {
    let Some(target) = app.editing else { return };

    match key {
        KeyCode::Enter => {
            app.editing = None;
            match target {
                EditTarget::ProfileUrl => app.request_refresh(),
                EditTarget::RouteTypeFilter => {
                    app.recompute_first_sends();
                    app.status_message = match app.route_type_query() {
                        Some(filter) => format!("Filtering first sends by {filter:?}"),
                        None => "Route type filter cleared".to_string(),
                    };
                }
            }
        }
        KeyCode::Esc => {
            app.editing = None;
        }
        KeyCode::Backspace => {
            field_mut(app, target).pop();
        }
        KeyCode::Char(c) => {
            field_mut(app, target).push(c);
        }
        _ => {}
    }
}

fn field_mut(app: &mut App, target: EditTarget) -> &mut String {
    match target {
        EditTarget::ProfileUrl => &mut app.profile_url,
        EditTarget::RouteTypeFilter => &mut app.route_type_filter,
    }
}

fn handle_ticks_input(app: &mut App, key: KeyCode) {
    let total = app.dataset.len();
    app.selected_tick_index = navigate(key, app.selected_tick_index, total);
}

fn handle_first_sends_input(app: &mut App, key: KeyCode) {
    let total = app.first_sends.len();
    app.selected_send_index = navigate(key, app.selected_send_index, total);
}

fn handle_charts_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Tab | KeyCode::Right | KeyCode::Left => {
            app.chart_tab_index = (app.chart_tab_index + 1) % 2;
        }
        _ => {}
    }
}

/// Shared table navigation: arrows, PgUp/PgDn (5 rows), Home/End.
fn navigate(key: KeyCode, selected: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    let last = total - 1;

    match key {
        KeyCode::Up => selected.saturating_sub(1),
        KeyCode::Down => (selected + 1).min(last),
        KeyCode::PageUp => selected.saturating_sub(5),
        KeyCode::PageDown => (selected + 5).min(last),
        KeyCode::Home => 0,
        KeyCode::End => last,
        _ => selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_is_clamped_to_the_table() {
        assert_eq!(navigate(KeyCode::Up, 0, 10), 0);
        assert_eq!(navigate(KeyCode::Down, 9, 10), 9);
        assert_eq!(navigate(KeyCode::PageDown, 7, 10), 9);
        assert_eq!(navigate(KeyCode::PageUp, 3, 10), 0);
        assert_eq!(navigate(KeyCode::End, 0, 10), 9);
        assert_eq!(navigate(KeyCode::Home, 9, 10), 0);
        assert_eq!(navigate(KeyCode::Down, 0, 0), 0);
    }

    #[tokio::test]
    async fn typing_a_url_and_committing_queues_a_refresh() {
        let mut app = App::new();
        handle_input(&mut app, KeyCode::Char('u'));
        assert_eq!(app.editing, Some(EditTarget::ProfileUrl));

        for c in "https://x".chars() {
            handle_input(&mut app, KeyCode::Char(c));
        }
        handle_input(&mut app, KeyCode::Backspace);
        handle_input(&mut app, KeyCode::Enter);

        assert_eq!(app.profile_url, "https://");
        assert!(app.editing.is_none());
        assert!(app.refresh_requested);
    }

    #[tokio::test]
    async fn committing_a_filter_recomputes_without_refresh() {
        let mut app = App::new();
        handle_input(&mut app, KeyCode::Char('f'));
        for c in "sport".chars() {
            handle_input(&mut app, KeyCode::Char(c));
        }
        handle_input(&mut app, KeyCode::Enter);

        assert_eq!(app.route_type_filter, "sport");
        assert!(!app.refresh_requested);
    }

    #[tokio::test]
    async fn screen_keys_are_ignored_while_editing() {
        let mut app = App::new();
        handle_input(&mut app, KeyCode::Char('u'));
        handle_input(&mut app, KeyCode::Char('t'));

        // 't' went into the URL, not to the screen switcher.
        assert_eq!(app.screen, AppScreen::Main);
        assert_eq!(app.profile_url, "t");
    }

    #[tokio::test]
    async fn escape_returns_to_main_then_quits() {
        let mut app = App::new();
        handle_input(&mut app, KeyCode::Char('t'));
        assert_eq!(app.screen, AppScreen::Ticks);

        handle_input(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, AppScreen::Main);
        assert!(app.running);

        handle_input(&mut app, KeyCode::Esc);
        assert!(!app.running);
    }
}
