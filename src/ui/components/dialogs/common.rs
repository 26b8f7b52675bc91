use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Single-line text input with a character cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_pos(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(pos, _)| pos)
    }

    pub fn insert(&mut self, c: char) {
        let pos = self.byte_pos(self.cursor);
        self.value.insert(pos, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let pos = self.byte_pos(self.cursor);
            self.value.remove(pos);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let pos = self.byte_pos(self.cursor);
            self.value.remove(pos);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Apply an editing key. Returns false when the key is not an edit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.value.chars().count(),
            _ => return false,
        }
        true
    }

    /// Value with a block cursor drawn at the cursor position
    pub fn display_with_cursor(&self) -> String {
        let pos = self.byte_pos(self.cursor);
        format!("{}█{}", &self.value[..pos], &self.value[pos..])
    }
}

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field block, showing the cursor only when focused
pub fn create_input_paragraph(input: &TextInput, field_title: &str, focused: bool) -> Paragraph<'static> {
    let (text, border_color) = if focused {
        (input.display_with_cursor(), Color::Cyan)
    } else {
        (input.value().to_string(), Color::Gray)
    };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color));

    Paragraph::new(text)
        .block(input_block)
        .style(Style::default().fg(Color::White))
}

/// One-line error or status message shown inside a dialog
pub fn create_status_paragraph(pending: bool, error: Option<&str>) -> Paragraph<'static> {
    match (pending, error) {
        (true, _) => Paragraph::new("Saving...")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center),
        (false, Some(message)) => Paragraph::new(message.to_string())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center),
        (false, None) => Paragraph::new(""),
    }
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const ENTER_SAVE: InstructionShortcut = ("Enter", Color::Green, " Save");
    pub const ENTER_CONFIRM: InstructionShortcut = ("Enter/y", Color::Green, " Confirm");
    pub const ESC_DECLINE: InstructionShortcut = ("Esc/n", Color::Red, " Cancel");
    pub const SPACE_TOGGLE: InstructionShortcut = ("Space", Color::Cyan, " Toggle");
}
