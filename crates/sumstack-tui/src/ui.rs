//! TUI rendering.
//!
//! Pure view over [`App`]: operand fields, backend result, status message,
//! and the newest-first history list, with the resolved backend address in
//! the header and key hints in the footer.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use sumstack::client::CalculationApi;
use sumstack::session::{FAILURE_PREFIX, SUCCESS_PREFIX};

use crate::app::{App, Field};

/// Application title
pub const APP_TITLE: &str = " 🧮 Sumstack Calculator ";

/// History panel title
pub const HISTORY_TITLE: &str = " 📊 History (newest first) ";

/// Placeholder shown before the first calculation arrives
pub const HISTORY_EMPTY: &str = "No calculations yet. Submit one above!";

/// Footer hint while idle
pub const HINT_IDLE: &str = "Enter calculate · Tab switch field · Ctrl+R refresh · Ctrl+C quit";

/// Footer hint while a submit is in flight
pub const HINT_LOADING: &str = "🔄 Calculating...";

/// Renders the calculator UI to the frame
pub fn render<A: CalculationApi>(app: &App<A>, frame: &mut Frame) {
    let area = frame.area();
    let view = CalculatorView::new(app);
    frame.render_widget(view, area);
}

/// Calculator UI widget
pub struct CalculatorView<'a, A> {
    app: &'a App<A>,
}

impl<A> std::fmt::Debug for CalculatorView<'_, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalculatorView").finish_non_exhaustive()
    }
}

impl<'a, A: CalculationApi> CalculatorView<'a, A> {
    /// Creates a view over the app state
    #[must_use]
    pub fn new(app: &'a App<A>) -> Self {
        Self { app }
    }

    /// Creates the vertical layout chunks
    fn create_layout(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Backend address
                Constraint::Length(3), // Operand inputs
                Constraint::Length(3), // Result
                Constraint::Length(3), // Status message
                Constraint::Min(4),    // History
                Constraint::Length(1), // Key hints
            ])
            .split(area)
            .to_vec()
    }

    /// Renders the backend address line
    fn render_backend_line(&self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("Backend: ", Style::default().fg(Color::Gray)),
            Span::styled(
                self.app.backend_url(),
                Style::default().fg(Color::Cyan),
            ),
        ]);
        Paragraph::new(line).render(area, buf);
    }

    /// Renders one operand input box
    fn render_operand(&self, field: Field, value: &str, area: Rect, buf: &mut Buffer) {
        let focused = self.app.focus() == field;
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let title = match field {
            Field::Num1 => " Operand 1 ",
            Field::Num2 => " Operand 2 ",
        };

        let mut text = Style::default();
        if focused {
            text = text.add_modifier(Modifier::BOLD);
        }

        Paragraph::new(Span::styled(value, text))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .render(area, buf);
    }

    /// Renders the operand input row
    fn render_inputs(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(10),   // Operand 1
                Constraint::Length(3), // Plus sign
                Constraint::Min(10),   // Operand 2
            ])
            .split(area);

        self.render_operand(Field::Num1, self.app.session().num1(), chunks[0], buf);

        Paragraph::new(Span::styled(
            "+",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
        .centered()
        .render(centered_line(chunks[1]), buf);

        self.render_operand(Field::Num2, self.app.session().num2(), chunks[2], buf);
    }

    /// Renders the result area
    fn render_result(&self, area: Rect, buf: &mut Buffer) {
        let result = format!("{}", self.app.session().result());
        Paragraph::new(Span::styled(
            result,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))
        .block(
            Block::default()
                .title(" Backend Result ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .render(area, buf);
    }

    /// Renders the status message area
    fn render_message(&self, area: Rect, buf: &mut Buffer) {
        let message = self.app.session().message();
        let style = if message.starts_with(FAILURE_PREFIX) {
            Style::default().fg(Color::Red)
        } else if message.starts_with(SUCCESS_PREFIX) {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };

        Paragraph::new(Span::styled(message, style))
            .block(
                Block::default()
                    .title(" Status ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    /// Renders the history area, newest entries first
    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let session = self.app.session();

        let block = Block::default()
            .title(HISTORY_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));

        if session.history().is_empty() {
            Paragraph::new(Span::styled(
                HISTORY_EMPTY,
                Style::default().fg(Color::DarkGray),
            ))
            .block(block)
            .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = session
            .history_newest_first()
            .map(|record| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} + {} = ", record.num1, record.num2),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(
                        format!("{}", record.result),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(
                        format!("  {}", record.timestamp.format("%H:%M:%S")),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        List::new(items).block(block).render(area, buf);
    }

    /// Renders the footer hint line
    fn render_hints(&self, area: Rect, buf: &mut Buffer) {
        let hint = if self.app.session().is_loading() {
            HINT_LOADING
        } else {
            HINT_IDLE
        };
        Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray)))
            .render(area, buf);
    }
}

/// Returns the middle row of a bordered-height area, for single-line labels
/// that sit beside bordered boxes.
fn centered_line(area: Rect) -> Rect {
    if area.height >= 3 {
        Rect::new(area.x, area.y + 1, area.width, 1)
    } else {
        area
    }
}

impl<A: CalculationApi> Widget for CalculatorView<'_, A> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let chunks = self.create_layout(area);
        if chunks.len() >= 6 {
            self.render_backend_line(chunks[0], buf);
            self.render_inputs(chunks[1], buf);
            self.render_result(chunks[2], buf);
            self.render_message(chunks[3], buf);
            self.render_history(chunks[4], buf);
            self.render_hints(chunks[5], buf);
        }
    }
}
