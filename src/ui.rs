//! Drawing - renders a `RenderState` into a ratatui frame

use ratatui::{prelude::*, widgets::*};

use crate::constants::APP_NAME;
use crate::messages::RenderState;
use crate::models::{ActivityEntry, LotteryAction, NotificationKind};

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(8), // Lottery view
            Constraint::Length(3), // Buttons
            Constraint::Min(3),    // Activity
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title(f, state, chunks[0]);
    draw_lottery_panel(f, state, chunks[1]);
    draw_buttons(f, state, chunks[2]);
    draw_activity(f, state, chunks[3]);
    draw_status_bar(f, state, chunks[4]);

    if state.show_help {
        draw_help_popup(f, area);
    }

    if state.notification.is_some() {
        draw_notification_popup(f, state, area);
    }
}

fn draw_title(f: &mut Frame, state: &RenderState, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", APP_NAME),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::styled(format!(" {}", state.base_url), Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_lottery_panel(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    if state.is_loading {
        lines.push(Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::Yellow),
        )));
    }

    match &state.lottery_state {
        Some(text) => {
            lines.push(Line::from("Lottery State:"));
            lines.extend(highlight_json(text));
        }
        None => lines.push(Line::from("Lottery State: Loading...")),
    }

    if !state.ticket_id.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("Your Ticket ID: "),
            Span::styled(state.ticket_id.clone(), Style::default().fg(Color::Green).bold()),
        ]));
    }

    if let Some(winner) = &state.winner {
        lines.push(Line::from(vec![
            Span::raw("Winner: "),
            Span::styled(winner.clone(), Style::default().fg(Color::Magenta).bold()),
        ]));
    }

    let block = Block::default().borders(Borders::ALL).title(" Lottery ");
    let panel = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(panel, area);
}

fn draw_buttons(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut spans = Vec::new();
    for action in LotteryAction::BUTTONS {
        let style = if state.is_in_flight(action) {
            Style::default().fg(Color::Yellow)
        } else if state.is_loading {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        };
        let suffix = if state.is_in_flight(action) { " ..." } else { "" };
        spans.push(Span::styled(
            format!(" [{}] {}{} ", action.hotkey(), action.label(), suffix),
            style,
        ));
        spans.push(Span::raw("  "));
    }

    let block = Block::default().borders(Borders::ALL).title(" Actions ");
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_activity(f: &mut Frame, state: &RenderState, area: Rect) {
    let lines: Vec<Line> = if state.activity.is_empty() {
        vec![Line::from(Span::styled(
            "No requests yet.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        state.activity.iter().map(activity_line).collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Activity (↑/↓ scroll) ");
    let log = Paragraph::new(lines)
        .block(block)
        .scroll((state.activity_scroll, 0));
    f.render_widget(log, area);
}

fn activity_line(entry: &ActivityEntry) -> Line<'static> {
    let color = if entry.ok { Color::Green } else { Color::Red };
    Line::from(vec![
        Span::styled(
            entry.timestamp.format("%H:%M:%S ").to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{:<6}", entry.action.method().as_str()),
            Style::default().fg(method_color(entry.action.method().as_str())).bold(),
        ),
        Span::raw(format!("{} ", entry.action.path())),
        Span::styled(entry.summary.clone(), Style::default().fg(color)),
        Span::styled(
            format!(" {}ms", entry.time_ms),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_loading {
        " Loading... "
    } else {
        " b:buy ticket | c:close lottery | p:claim prize | r:refresh | ?:help | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_notification_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let Some(note) = &state.notification else {
        return;
    };
    let popup_area = centered_rect(60, 25, area);

    let (title, color) = match note.kind {
        NotificationKind::Success => (" Success ", Color::Green),
        NotificationKind::Error => (" Error ", Color::Red),
        NotificationKind::Info => (" Notice ", Color::Cyan),
    };
    let footer = if state.queued_notifications > 0 {
        format!(" {} more | any key to dismiss ", state.queued_notifications)
    } else {
        String::from(" any key to dismiss ")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title)
        .title_bottom(Line::from(footer).right_aligned())
        .style(Style::default().bg(Color::Black));

    let body = Paragraph::new(note.text.as_str())
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(body, popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 LOTTERY TUI - Keyboard Shortcuts

 ACTIONS (disabled while a request is running)
   b                  Buy a ticket
   c                  Close the lottery and pick a winner
   p                  Claim prize
   r                  Refresh lottery state

 VIEW
   ↑ / ↓              Scroll activity log

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Colour pretty-printed JSON: keys cyan, strings green, literals magenta
pub fn highlight_json(text: &str) -> Vec<Line<'static>> {
    text.lines().map(highlight_json_line).collect()
}

fn highlight_json_line(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut rest = line;

    while let Some(start) = rest.find('"') {
        if start > 0 {
            spans.push(literal_span(&rest[..start]));
        }
        let after = &rest[start + 1..];
        let end = string_end(after).map(|e| start + 1 + e + 1).unwrap_or(rest.len());
        let quoted = &rest[start..end];
        let is_key = rest[end..].trim_start().starts_with(':');
        let color = if is_key { Color::Cyan } else { Color::Green };
        spans.push(Span::styled(quoted.to_string(), Style::default().fg(color)));
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        spans.push(literal_span(rest));
    }

    Line::from(spans)
}

/// Byte offset of the closing quote, skipping escaped quotes
fn string_end(s: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        match c {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => return Some(i),
            _ => escaped = false,
        }
    }
    None
}

fn literal_span(text: &str) -> Span<'static> {
    let trimmed = text.trim().trim_end_matches(',').trim_start_matches(':').trim();
    let color = match trimmed {
        "true" | "false" | "null" => Color::Magenta,
        t if !t.is_empty() && t.parse::<f64>().is_ok() => Color::Yellow,
        _ => Color::White,
    };
    Span::styled(text.to_string(), Style::default().fg(color))
}

/// Method color
pub fn method_color(method: &str) -> Color {
    match method {
        "GET" => Color::Green,
        "POST" => Color::Yellow,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Notification;
    use ratatui::backend::TestBackend;

    fn render(state: &RenderState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_initial_view() {
        let screen = render(&RenderState::default());
        assert!(screen.contains("Lottery State: Loading..."));
        assert!(screen.contains("Buy Ticket"));
        assert!(screen.contains("Close Lottery"));
        assert!(screen.contains("Claim Prize"));
        assert!(!screen.contains("Your Ticket ID"));
        assert!(!screen.contains("Winner:"));
    }

    #[test]
    fn test_ticket_and_winner_shown() {
        let state = RenderState {
            ticket_id: "T1".into(),
            winner: Some("0xABC".into()),
            ..RenderState::default()
        };
        let screen = render(&state);
        assert!(screen.contains("Your Ticket ID: T1"));
        assert!(screen.contains("Winner: 0xABC"));
    }

    #[test]
    fn test_loading_indicator() {
        let state = RenderState {
            is_loading: true,
            in_flight: vec![LotteryAction::PurchaseTicket],
            ..RenderState::default()
        };
        let screen = render(&state);
        assert!(screen.contains("Loading..."));
        assert!(screen.contains("Buy Ticket ..."));
    }

    #[test]
    fn test_notification_popup() {
        let state = RenderState {
            notification: Some(Notification::info("no prize")),
            queued_notifications: 2,
            ..RenderState::default()
        };
        let screen = render(&state);
        assert!(screen.contains("no prize"));
        assert!(screen.contains("2 more"));
    }

    #[test]
    fn test_highlight_json_colors_keys_and_values() {
        let lines = highlight_json("{\n  \"state\": \"Open\",\n  \"sold\": 3\n}");
        assert_eq!(lines.len(), 4);

        let key = lines[1]
            .spans
            .iter()
            .find(|s| s.content == "\"state\"")
            .unwrap();
        assert_eq!(key.style.fg, Some(Color::Cyan));
        let value = lines[1]
            .spans
            .iter()
            .find(|s| s.content == "\"Open\"")
            .unwrap();
        assert_eq!(value.style.fg, Some(Color::Green));
        let number = lines[2].spans.last().unwrap();
        assert_eq!(number.style.fg, Some(Color::Yellow));
    }

    #[test]
    fn test_highlight_json_handles_escaped_quotes() {
        let lines = highlight_json(r#"  "msg": "say \"hi\"""#);
        let value = lines[0].spans.last().unwrap();
        assert_eq!(value.content, r#""say \"hi\"""#);
    }
}
