use crate::constants::DIALOG_TITLE_DEBUG_LOGS;
use crate::logger::Logger;
use crate::ui::components::dialogs::scroll_behavior::DialogScroll;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
    Frame,
};

const HELP_TEXT: &str = r"
ADMINDASH - Admin Dashboard
===========================

SCREENS
-------
1 / F1      Users
2 / F2      Cards
Tab         Switch screen

TABLE NAVIGATION
----------------
j/k ↓↑      Move row cursor
l/n →       Next page
h/p ←       Previous page
Home/End    First / last page
+ / -       More / fewer rows per page
r           Reload current page

SORTING & FILTERING
-------------------
s           Cycle sort on the focused column (asc, desc, none)
[ / ]       Focus previous / next column
/           Open filters (empty value clears a filter)
v           Show or hide columns

ROW ACTIONS
-----------
Space       Select row
a           Select or clear the whole page
e           Edit user
b           Block / activate user, activate / deactivate card
d           Delete (with confirmation)

GENERAL
-------
?           Toggle this help
G           Show logs
q / Ctrl+C  Quit

DIALOG SCROLLING
----------------
j/k ↑↓      Scroll
PageUp/Down Page through content
Home/End    Jump to top / bottom

Press 'Esc', '?' or 'q' to close this help panel
";

fn scrollbar() -> Scrollbar<'static> {
    Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(Style::default().fg(Color::Gray))
        .thumb_style(Style::default().fg(Color::White))
}

/// Small boxed message with a scrollable body and an instructions line.
fn render_message_box(
    f: &mut Frame,
    dialog_area: Rect,
    title: &str,
    color: Color,
    message: &str,
    scroll: &mut DialogScroll,
) {
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(color));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );
    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let lines: Vec<&str> = message.lines().collect();
    let visible_height = content_area.height as usize;
    let window = scroll.window(lines.len(), visible_height);

    let message_paragraph = Paragraph::new(lines[window].join("\n"))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    let instructions = Paragraph::new("Press any key to continue • j/k to scroll if needed")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions, instructions_area);

    if lines.len() > visible_height {
        f.render_stateful_widget(scrollbar(), content_area, &mut scroll.state);
    }
}

/// Large overlay listing `content` line by line.
fn render_overlay(f: &mut Frame, area: Rect, title: &str, content: &str, scroll: &mut DialogScroll) {
    let overlay_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, overlay_area);

    let content_area = Rect::new(
        overlay_area.x + 2,
        overlay_area.y + 1,
        overlay_area.width.saturating_sub(4),
        overlay_area.height.saturating_sub(2),
    );

    let lines: Vec<&str> = content.lines().collect();
    let visible_height = content_area.height.saturating_sub(2) as usize;
    let window = scroll.window(lines.len(), visible_height);

    let paragraph = Paragraph::new(lines[window].join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, content_area);

    if lines.len() > visible_height {
        f.render_stateful_widget(scrollbar(), content_area, &mut scroll.state);
    }
}

pub fn render_error_dialog(f: &mut Frame, area: Rect, message: &str, scroll: &mut DialogScroll) {
    let dialog_area = LayoutManager::centered_rect_lines(70, 12, area);
    render_message_box(f, dialog_area, "⚠️  Error", Color::Red, message, scroll);
}

pub fn render_info_dialog(f: &mut Frame, area: Rect, message: &str, scroll: &mut DialogScroll) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    render_message_box(f, dialog_area, "ℹ️  Info", Color::Blue, message, scroll);
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut DialogScroll) {
    render_overlay(f, area, "📖 Help - Press 'Esc', '?' or 'q' to close", HELP_TEXT, scroll);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logger: Option<&Logger>, scroll: &mut DialogScroll) {
    let content = match logger {
        Some(logger) => {
            let logs = logger.get_logs();
            if logs.is_empty() {
                "No logs available".to_string()
            } else {
                logs.join("\n")
            }
        }
        None => "Logging is not enabled".to_string(),
    };

    render_overlay(f, area, DIALOG_TITLE_DEBUG_LOGS, &content, scroll);
}
