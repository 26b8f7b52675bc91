use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::ScrollbarState;

const PAGE_LINES: usize = 10;

/// Scroll position of a read-only dialog body
#[derive(Debug, Default)]
pub struct DialogScroll {
    pub offset: usize,
    pub state: ScrollbarState,
}

impl DialogScroll {
    pub fn reset(&mut self) {
        self.offset = 0;
        self.state = ScrollbarState::new(0);
    }

    /// Apply a scrolling key. Returns false when the key does not scroll.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.offset = match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.offset.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.offset.saturating_add(1),
            KeyCode::PageUp => self.offset.saturating_sub(PAGE_LINES),
            KeyCode::PageDown => self.offset.saturating_add(PAGE_LINES),
            KeyCode::Home => 0,
            // clamped against the content height when rendered
            KeyCode::End => usize::MAX,
            _ => return false,
        };
        self.state = self.state.position(self.offset);
        true
    }

    /// Clamp the offset to the content and return the visible line window
    pub fn window(&mut self, total_lines: usize, visible_height: usize) -> std::ops::Range<usize> {
        let max_scroll = total_lines.saturating_sub(visible_height);
        self.offset = self.offset.min(max_scroll);
        self.state = self
            .state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(self.offset);
        self.offset..(self.offset + visible_height).min(total_lines)
    }
}
