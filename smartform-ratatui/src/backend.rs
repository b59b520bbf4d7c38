//! Ratatui form backend implementation for the FormBackend trait.
//!
//! Displays all fields at once in a scrollable form with keyboard navigation.
//! Every edit is forwarded to the controller as a change event.

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use smartform::{
    FieldDescriptor, FormBackend, FormController, SUCCESS_MESSAGE, SubmitOutcome, Values,
};
use std::io::{self, Stdout};
use thiserror::Error;

/// Error type for the Ratatui form backend.
#[derive(Debug, Error)]
pub enum RatatuiFormError {
    /// User aborted the form with Ctrl+C.
    #[error("Form cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Color theme for the TUI form.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
    pub placeholder: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Indexed(62),
            secondary: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
            placeholder: Color::DarkGray,
        }
    }
}

/// Ratatui form backend that displays all fields at once.
#[derive(Debug, Clone)]
pub struct RatatuiFormBackend {
    /// Title shown at the top of the form.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
}

impl Default for RatatuiFormBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiFormBackend {
    /// Create a new Ratatui form backend with default settings.
    pub fn new() -> Self {
        Self {
            title: "Dynamic Smart Form 🚀".to_string(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown at the top of the form.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiFormError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiFormError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
    Cancel,
}

/// Height of one field: bordered input (3 rows) plus the error line beneath.
const FIELD_HEIGHT: u16 = 4;

/// UI state for the form. Values and errors live in the controller.
struct FormState {
    focused_idx: usize,
    /// Cursor position per field, in characters.
    cursors: Vec<usize>,
    /// Scroll offset in rows (vertical)
    scroll_offset: u16,
    /// Whether the submit button is focused
    submit_focused: bool,
    /// Acknowledgment shown in a modal until the next key press.
    acknowledgment: Option<String>,
    submissions: Vec<Values>,
    theme: Theme,
    title: String,
}

impl FormState {
    fn new(controller: &FormController, theme: Theme, title: String) -> Self {
        let cursors = controller
            .registry()
            .iter()
            .map(|f| controller.value(f.name()).chars().count())
            .collect();

        Self {
            focused_idx: 0,
            cursors,
            scroll_offset: 0,
            submit_focused: controller.registry().is_empty(),
            acknowledgment: None,
            submissions: Vec::new(),
            theme,
            title,
        }
    }

    fn field_count(&self) -> usize {
        self.cursors.len()
    }

    fn focused_field<'a>(&self, controller: &'a FormController) -> Option<&'a FieldDescriptor> {
        if self.submit_focused {
            return None;
        }
        controller.registry().fields().get(self.focused_idx)
    }

    /// Adjust scroll offset to ensure the focused field is visible
    fn adjust_scroll(&mut self, viewport_height: u16) {
        let field_y = self.focused_idx as u16 * FIELD_HEIGHT;

        if field_y < self.scroll_offset {
            self.scroll_offset = field_y;
        }

        let field_bottom = field_y + FIELD_HEIGHT;
        let viewport_bottom = self.scroll_offset + viewport_height;
        if field_bottom > viewport_bottom {
            self.scroll_offset = field_bottom.saturating_sub(viewport_height);
        }
    }

    fn total_content_height(&self) -> u16 {
        self.field_count() as u16 * FIELD_HEIGHT
    }

    fn next_field(&mut self) {
        if self.submit_focused {
            // Already on submit button, can't go further
            return;
        }
        if self.focused_idx + 1 < self.field_count() {
            self.focused_idx += 1;
        } else {
            self.submit_focused = true;
        }
    }

    fn prev_field(&mut self) {
        if self.submit_focused {
            if self.field_count() > 0 {
                self.submit_focused = false;
                self.focused_idx = self.field_count() - 1;
            }
            return;
        }
        self.focused_idx = self.focused_idx.saturating_sub(1);
    }

    /// Apply an edit to the focused field's value and forward it to the controller.
    fn edit(
        &mut self,
        controller: &mut FormController,
        edit: impl FnOnce(&mut Vec<char>, &mut usize),
    ) {
        let Some(field) = self.focused_field(controller) else {
            return;
        };
        let name = field.name().to_string();
        let mut chars: Vec<char> = controller.value(&name).chars().collect();
        let cursor = &mut self.cursors[self.focused_idx];
        *cursor = (*cursor).min(chars.len());

        let before = chars.len();
        edit(&mut chars, cursor);
        if chars.len() != before {
            controller.on_change(name, chars.into_iter().collect::<String>());
        }
    }

    fn handle_text_input(&mut self, controller: &mut FormController, c: char) {
        self.edit(controller, |chars, cursor| {
            chars.insert(*cursor, c);
            *cursor += 1;
        });
    }

    fn handle_backspace(&mut self, controller: &mut FormController) {
        self.edit(controller, |chars, cursor| {
            if *cursor > 0 {
                *cursor -= 1;
                chars.remove(*cursor);
            }
        });
    }

    fn handle_delete(&mut self, controller: &mut FormController) {
        self.edit(controller, |chars, cursor| {
            if *cursor < chars.len() {
                chars.remove(*cursor);
            }
        });
    }

    fn move_cursor(
        &mut self,
        controller: &FormController,
        to: impl FnOnce(usize, usize) -> usize,
    ) {
        let Some(field) = self.focused_field(controller) else {
            return;
        };
        let len = controller.value(field.name()).chars().count();
        let cursor = &mut self.cursors[self.focused_idx];
        *cursor = to((*cursor).min(len), len);
    }

    fn submit(&mut self, controller: &mut FormController) {
        match controller.submit() {
            SubmitOutcome::Accepted(values) => {
                self.submissions.push(values);
                self.acknowledgment = Some(SUCCESS_MESSAGE.to_string());
                self.cursors.iter_mut().for_each(|c| *c = 0);
                self.focused_idx = 0;
                self.submit_focused = self.field_count() == 0;
                self.scroll_offset = 0;
            }
            SubmitOutcome::Rejected(errors) => {
                // Focus the first field with an error, in display order
                if let Some(idx) = controller
                    .registry()
                    .iter()
                    .position(|f| errors.contains(f.name()))
                {
                    self.focused_idx = idx;
                    self.submit_focused = false;
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent, controller: &mut FormController) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Flow::Cancel;
        }

        // Any key dismisses the acknowledgment
        if self.acknowledgment.take().is_some() {
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Esc => return Flow::Quit,
            // Ctrl+Enter or F10 submits from anywhere
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit(controller);
            }
            KeyCode::F(10) => self.submit(controller),
            KeyCode::Enter => {
                if self.submit_focused {
                    self.submit(controller);
                } else {
                    self.next_field();
                }
            }
            KeyCode::BackTab => self.prev_field(),
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => self.prev_field(),
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::Up => self.prev_field(),
            KeyCode::Left => self.move_cursor(controller, |c, _| c.saturating_sub(1)),
            KeyCode::Right => self.move_cursor(controller, |c, len| (c + 1).min(len)),
            KeyCode::Home => self.move_cursor(controller, |_, _| 0),
            KeyCode::End => self.move_cursor(controller, |_, len| len),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.handle_text_input(controller, c)
            }
            KeyCode::Backspace => self.handle_backspace(controller),
            KeyCode::Delete => self.handle_delete(controller),
            KeyCode::PageDown => {
                for _ in 0..5 {
                    self.next_field();
                }
            }
            KeyCode::PageUp => {
                for _ in 0..5 {
                    self.prev_field();
                }
            }
            _ => {}
        }

        Flow::Continue
    }
}

fn draw_form(frame: &mut Frame, state: &mut FormState, controller: &FormController) {
    let area = frame.area();
    let theme = state.theme.clone();

    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Title
            Constraint::Min(FIELD_HEIGHT), // Form content
            Constraint::Length(3),         // Submit button
            Constraint::Length(1),         // Help bar
        ])
        .split(area);

    let title = Paragraph::new(state.title.clone())
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(title, chunks[0]);

    // Form content area - reserve space for scrollbar on the right
    let form_area = chunks[1];
    let content_width = form_area.width.saturating_sub(2); // 1 for left margin, 1 for scrollbar
    let viewport_height = form_area.height;

    state.adjust_scroll(viewport_height);

    let total_height = state.total_content_height();
    let scroll_offset = state.scroll_offset;

    for (idx, field) in controller.registry().iter().enumerate() {
        let field_top = idx as u16 * FIELD_HEIGHT;

        // Skip fields scrolled above the viewport; they look odd half-drawn
        if field_top < scroll_offset {
            continue;
        }
        let visible_top = field_top - scroll_offset;
        if visible_top >= viewport_height {
            break;
        }

        let field_area = Rect {
            x: form_area.x + 1,
            y: form_area.y + visible_top,
            width: content_width,
            height: FIELD_HEIGHT.min(viewport_height - visible_top),
        };
        let is_focused = !state.submit_focused && idx == state.focused_idx;
        draw_field(
            frame,
            field,
            controller,
            state.cursors[idx],
            field_area,
            is_focused,
            &theme,
        );
    }

    // Draw scrollbar if content exceeds viewport
    if total_height > viewport_height {
        let scrollbar_area = Rect {
            x: form_area.x + form_area.width.saturating_sub(1),
            y: form_area.y,
            width: 1,
            height: viewport_height,
        };

        let mut scrollbar_state = ScrollbarState::new(total_height as usize)
            .position(scroll_offset as usize)
            .viewport_content_length(viewport_height as usize);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"))
            .track_symbol(Some("│"))
            .thumb_symbol("█");

        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }

    // Submit button
    let submit_style = if state.submit_focused {
        Style::default()
            .fg(theme.text)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD)
    };
    let submit_text = if state.submit_focused {
        "  [ Submit Form ]  "
    } else {
        "    Submit Form    "
    };
    let submit_button = Paragraph::new(submit_text)
        .style(submit_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if state.submit_focused {
                    theme.primary
                } else {
                    theme.border
                })),
        );
    frame.render_widget(submit_button, chunks[2]);

    let help_text = "Tab/↑/↓: Navigate  Enter: Next/Submit  F10: Submit  Esc: Quit";
    let help = Paragraph::new(help_text).style(Style::default().fg(theme.border));
    frame.render_widget(help, chunks[3]);

    if let Some(message) = &state.acknowledgment {
        draw_acknowledgment(frame, message, area, &theme);
    }
}

fn draw_field(
    frame: &mut Frame,
    field: &FieldDescriptor,
    controller: &FormController,
    cursor_pos: usize,
    area: Rect,
    is_focused: bool,
    theme: &Theme,
) {
    let error = controller.error_for(field.name());
    let border_color = if error.is_some() {
        theme.error
    } else if is_focused {
        theme.primary
    } else {
        theme.border
    };

    let input_area = Rect {
        height: area.height.min(3),
        ..area
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", field.label()))
        .title_style(Style::default().fg(if is_focused {
            theme.highlight
        } else {
            theme.text
        }));

    let inner = block.inner(input_area);
    frame.render_widget(block, input_area);

    let value = controller.value(field.name());
    let text = if value.is_empty() {
        Paragraph::new(field.placeholder()).style(
            Style::default()
                .fg(theme.placeholder)
                .add_modifier(Modifier::ITALIC),
        )
    } else if field.kind().is_masked() {
        Paragraph::new("●".repeat(value.chars().count())).style(Style::default().fg(theme.text))
    } else {
        Paragraph::new(value.to_string()).style(Style::default().fg(theme.text))
    };
    frame.render_widget(text, inner);

    if is_focused {
        let cursor_x = inner.x + cursor_pos as u16;
        if cursor_x < inner.x + inner.width {
            frame.set_cursor_position((cursor_x, inner.y));
        }
    }

    // Error message beneath the input
    if let Some(error) = error
        && area.height > input_area.height
    {
        let error_area = Rect {
            x: area.x + 1,
            y: input_area.y + input_area.height,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        let error_text =
            Paragraph::new(format!("⚠ {error}")).style(Style::default().fg(theme.error));
        frame.render_widget(error_text, error_area);
    }
}

fn draw_acknowledgment(frame: &mut Frame, message: &str, area: Rect, theme: &Theme) {
    let width = (message.chars().count() as u16 + 6).min(area.width);
    let height = 5.min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let dialog = Paragraph::new(format!("{message}\n\npress any key"))
        .style(
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.success)),
        );
    frame.render_widget(Clear, popup);
    frame.render_widget(dialog, popup);
}

impl FormBackend for RatatuiFormBackend {
    type Error = RatatuiFormError;

    fn run(&self, controller: &mut FormController) -> Result<Vec<Values>, Self::Error> {
        let mut terminal = self.setup_terminal()?;
        let mut state = FormState::new(controller, self.theme.clone(), self.title.clone());

        let flow = loop {
            if let Err(err) = terminal.draw(|frame| draw_form(frame, &mut state, controller)) {
                break Err(err);
            }

            match event::read() {
                Ok(Event::Key(key)) => match state.handle_key(key, controller) {
                    Flow::Continue => {}
                    flow => break Ok(flow),
                },
                Ok(_) => {}
                Err(err) => break Err(err),
            }
        };

        self.restore_terminal(&mut terminal)?;

        match flow? {
            Flow::Cancel => Err(RatatuiFormError::Cancelled),
            _ => {
                log::debug!("Form closed after {} submission(s)", state.submissions.len());
                Ok(state.submissions)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use smartform::smart_form;

    fn controller() -> FormController {
        FormController::new(smart_form().unwrap())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(state: &mut FormState, form: &mut FormController, text: &str) {
        for c in text.chars() {
            state.handle_key(press(KeyCode::Char(c)), form);
        }
    }

    fn render(state: &mut FormState, form: &FormController) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
        terminal.draw(|frame| draw_form(frame, state, form)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn backend_creation() {
        let _backend = RatatuiFormBackend::new();
        let _with_title = RatatuiFormBackend::new().with_title("Test");
        let _with_theme = RatatuiFormBackend::new().with_theme(Theme::default());
    }

    #[test]
    fn error_types() {
        let err = RatatuiFormError::Cancelled;
        assert_eq!(err.to_string(), "Form cancelled by user");

        let err = RatatuiFormError::from(io::Error::other("broken pipe"));
        assert_eq!(err.to_string(), "I/O error: broken pipe");
    }

    #[test]
    fn typing_forwards_changes() {
        let mut form = controller();
        let mut state = FormState::new(&form, Theme::default(), "Form".into());
        type_text(&mut state, &mut form, "Ada");
        state.handle_key(press(KeyCode::Left), &mut form);
        state.handle_key(press(KeyCode::Backspace), &mut form);
        assert_eq!(form.value("name"), "Aa");

        state.handle_key(press(KeyCode::Tab), &mut form);
        type_text(&mut state, &mut form, "a@b.co");
        assert_eq!(form.value("email"), "a@b.co");
    }

    #[test]
    fn navigation_reaches_submit_button() {
        let mut form = controller();
        let mut state = FormState::new(&form, Theme::default(), "Form".into());
        for _ in 0..form.registry().len() {
            state.handle_key(press(KeyCode::Tab), &mut form);
        }
        assert!(state.submit_focused);
        state.handle_key(press(KeyCode::BackTab), &mut form);
        assert!(!state.submit_focused);
        assert_eq!(state.focused_idx, form.registry().len() - 1);
    }

    #[test]
    fn rejected_submit_focuses_first_error() {
        let mut form = controller();
        let mut state = FormState::new(&form, Theme::default(), "Form".into());
        type_text(&mut state, &mut form, "Ada Lovelace");
        state.handle_key(press(KeyCode::F(10)), &mut form);
        assert_eq!(state.focused_idx, 1);
        assert!(state.acknowledgment.is_none());
        assert_eq!(form.value("name"), "Ada Lovelace");

        let screen = render(&mut state, &form);
        assert!(screen.contains("Email is required"));
        assert!(!screen.contains("Full Name is required"));
    }

    #[test]
    fn accepted_submit_shows_acknowledgment_and_resets() {
        let mut form = controller();
        for (name, value) in [
            ("name", "Ada Lovelace"),
            ("email", "ada@example.org"),
            ("phone", "4915112345678"),
            ("age", "36"),
            ("password", "analytical"),
            ("confirmPassword", "analytical"),
            ("address", "12 St James's Square"),
            ("city", "London"),
            ("country", "United Kingdom"),
            ("username", "adal"),
        ] {
            form.on_change(name, value);
        }
        let mut state = FormState::new(&form, Theme::default(), "Form".into());
        state.handle_key(press(KeyCode::F(10)), &mut form);

        assert_eq!(state.submissions.len(), 1);
        assert_eq!(state.submissions[0].get("city"), "London");
        assert_eq!(state.acknowledgment.as_deref(), Some(SUCCESS_MESSAGE));
        assert!(form.values().is_empty());

        let screen = render(&mut state, &form);
        assert!(screen.contains("Form submitted successfully!"));

        // The next key only dismisses the dialog
        assert_eq!(state.handle_key(press(KeyCode::Esc), &mut form), Flow::Continue);
        assert!(state.acknowledgment.is_none());
        assert_eq!(state.handle_key(press(KeyCode::Esc), &mut form), Flow::Quit);
    }

    #[test]
    fn masked_fields_hide_input() {
        let mut form = controller();
        form.on_change("name", "Ada Lovelace");
        form.on_change("password", "secret");
        let mut state = FormState::new(&form, Theme::default(), "Form".into());
        let screen = render(&mut state, &form);
        assert!(screen.contains("Ada Lovelace"));
        assert!(!screen.contains("secret"));
        assert!(screen.contains("●●●●●●"));
        assert!(screen.contains("Enter Email"));
    }

    #[test]
    fn ctrl_c_cancels() {
        let mut form = controller();
        let mut state = FormState::new(&form, Theme::default(), "Form".into());
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(state.handle_key(key, &mut form), Flow::Cancel);
    }

    #[test]
    fn modified_letters_are_not_typed() {
        let mut form = controller();
        let mut state = FormState::new(&form, Theme::default(), "Form".into());
        type_text(&mut state, &mut form, "Ad");
        state.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL), &mut form);
        state.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT), &mut form);
        state.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT), &mut form);
        assert_eq!(form.value("name"), "AdA");
    }

    #[test]
    fn theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.error, Color::Red);
        assert_eq!(theme.placeholder, Color::DarkGray);
    }
}
