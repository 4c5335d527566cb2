use super::*;
use std::collections::VecDeque;

struct ScriptedKeys(VecDeque<MenuKey>);

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<MenuKey> {
        self.0
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more keys"))
    }
}

fn menu() -> Menu {
    Menu::new(
        "Main Menu",
        vec!["First".to_string(), "Second".to_string(), "Third".to_string()],
    )
}

#[test]
fn test_down_wraps_to_first() {
    let mut menu = menu().with_selected(2);
    assert_eq!(menu.handle_key(MenuKey::Down), MenuEvent::Moved);
    assert_eq!(menu.selected(), 0);
}

#[test]
fn test_up_wraps_to_last() {
    let mut menu = menu();
    menu.move_up();
    assert_eq!(menu.selected(), 2);
}

#[test]
fn test_enter_returns_one_based_index() {
    let mut menu = menu();
    menu.move_down();
    assert_eq!(menu.handle_key(MenuKey::Enter), MenuEvent::Selected(2));
}

#[test]
fn test_other_keys_ignored() {
    let mut menu = menu();
    assert_eq!(menu.handle_key(MenuKey::Other), MenuEvent::Ignored);
    assert_eq!(menu.selected(), 0);
}

#[test]
fn test_with_selected_clamps() {
    assert_eq!(menu().with_selected(99).selected(), 2);
}

#[test]
fn test_empty_menu_is_inert() {
    let mut menu = Menu::new("Empty", Vec::new());
    menu.move_down();
    menu.move_up();
    assert_eq!(menu.selected(), 0);
    assert_eq!(menu.handle_key(MenuKey::Enter), MenuEvent::Ignored);
}

#[test]
fn test_run_until_enter() {
    let mut keys = ScriptedKeys(VecDeque::from(vec![
        MenuKey::Up,
        MenuKey::Up,
        MenuKey::Other,
        MenuKey::Enter,
    ]));
    let mut out = Vec::new();

    let choice = menu().run(&mut keys, &mut out).unwrap();
    assert_eq!(choice, Some(2));
}

#[test]
fn test_run_cancelled() {
    let mut keys = ScriptedKeys(VecDeque::from(vec![MenuKey::Down, MenuKey::Cancel]));
    let mut out = Vec::new();
    assert_eq!(menu().run(&mut keys, &mut out).unwrap(), None);
}

#[test]
fn test_run_propagates_key_errors() {
    let mut keys = ScriptedKeys(VecDeque::new());
    let mut out = Vec::new();
    assert!(menu().run(&mut keys, &mut out).is_err());
}

#[test]
fn test_render_marks_selection() {
    let mut out = Vec::new();
    menu().with_selected(1).render(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Main Menu\n=========\n"));
    assert!(text.contains("  First\n"));
    assert!(text.contains("> Second"));
    assert!(text.contains("  Third\n"));
    assert!(text.contains("Enter to confirm"));
}
