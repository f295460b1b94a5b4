//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::LotteryAction;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Trigger a backend action
    Invoke(LotteryAction),

    // Activity log
    ScrollUp,
    ScrollDown,

    // Popups
    DismissNotification,
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context.
///
/// Action keys are dropped while a request is outstanding, the same way
/// the buttons render disabled.
pub fn key_to_ui_event(
    key: KeyEvent,
    is_loading: bool,
    show_help: bool,
    has_notification: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }
    if key.code == KeyCode::Char('q') {
        return Some(UiEvent::Quit);
    }

    // Popups swallow any other key
    if has_notification {
        return Some(UiEvent::DismissNotification);
    }
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Up => Some(UiEvent::ScrollUp),
        KeyCode::Down => Some(UiEvent::ScrollDown),
        KeyCode::Char(c) => match LotteryAction::from_hotkey(c) {
            Some(_) if is_loading => None,
            Some(action) => Some(UiEvent::Invoke(action)),
            None => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('b')), false, false, false),
            Some(UiEvent::Invoke(LotteryAction::PurchaseTicket))
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('c')), false, false, false),
            Some(UiEvent::Invoke(LotteryAction::CloseLottery))
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('p')), false, false, false),
            Some(UiEvent::Invoke(LotteryAction::ClaimPrize))
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('r')), false, false, false),
            Some(UiEvent::Invoke(LotteryAction::RefreshState))
        );
    }

    #[test]
    fn test_actions_disabled_while_loading() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('b')), true, false, false), None);
        // Non-action keys still work
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('q')), true, false, false),
            Some(UiEvent::Quit)
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Down), true, false, false),
            Some(UiEvent::ScrollDown)
        );
    }

    #[test]
    fn test_notification_swallows_key() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('b')), false, false, true),
            Some(UiEvent::DismissNotification)
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('x')), false, true, false),
            Some(UiEvent::CloseHelp)
        );
    }

    #[test]
    fn test_q_quits_through_popups() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('q')), false, false, true),
            Some(UiEvent::Quit)
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('q')), false, true, false),
            Some(UiEvent::Quit)
        );
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(key, true, true, true), Some(UiEvent::Quit));
    }
}
