use crossterm::event::KeyCode;
use uth_rs::config::TableConfig;
use uth_rs::tui::app::{AppState, InputAction};
use uth_rs::tui::controller::handle_key;

fn setup_app() -> AppState {
    AppState::new(TableConfig::default().with_players(3).with_seed(11)).unwrap()
}

#[test]
fn new_hand_appends_and_selects_latest() {
    let mut app = setup_app();
    assert!(app.selected_report().is_none());
    assert!(app.handle_input(InputAction::NewHand));
    assert!(app.handle_input(InputAction::NewHand));
    assert_eq!(app.reports().len(), 2);
    assert_eq!(app.selected_report().map(|r| r.hand_number), Some(2));
    assert!(app.viewing_latest());
}

#[test]
fn browsing_stops_at_both_ends() {
    let mut app = setup_app();
    for _ in 0..3 {
        let _ = app.handle_input(InputAction::NewHand);
    }
    assert!(!app.handle_input(InputAction::NextHand));
    assert!(app.handle_input(InputAction::PrevHand));
    assert!(app.handle_input(InputAction::PrevHand));
    assert!(!app.handle_input(InputAction::PrevHand));
    assert_eq!(app.selected_index(), 0);
    assert!(!app.viewing_latest());
    assert!(app.handle_input(InputAction::NextHand));
    assert_eq!(app.selected_report().map(|r| r.hand_number), Some(2));
}

#[test]
fn help_and_log_are_exclusive() {
    let mut app = setup_app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleLog);
    assert!(!app.help_open());
    assert!(app.log_open());
    let _ = app.handle_input(InputAction::ToggleLog);
    assert!(!app.log_open());
}

#[test]
fn keys_map_to_actions() {
    let mut app = setup_app();
    assert!(!handle_key(&mut app, KeyCode::Char(' ')));
    assert_eq!(app.reports().len(), 1);

    // Dealing is blocked while an overlay is open.
    assert!(!handle_key(&mut app, KeyCode::Char('?')));
    assert!(!handle_key(&mut app, KeyCode::Char(' ')));
    assert_eq!(app.reports().len(), 1);
    assert!(!handle_key(&mut app, KeyCode::Esc));
    assert!(!app.help_open());

    assert!(handle_key(&mut app, KeyCode::Char('q')));
}
