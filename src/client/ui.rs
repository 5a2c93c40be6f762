// src/client/ui.rs
use std::io;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::info;

use super::api::{Responder, ResponderClient};
use super::form::{Field, Form, FormAction, Outcome, Phase, SERVER_ERROR_TEXT};
use crate::config::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE};

const TITLE: &str = "Chatbot with Axum and Ratatui";
const DESCRIPTION: &str = "Enter your question, longitude, latitude and name. \
The server replies with a message and your data.";

const HEADER_HEIGHT: u16 = 4;
// Four bordered inputs and the Send row.
const FORM_HEIGHT: u16 = 13;
const FORM_WIDTH: u16 = 30;
// Below this width the panel goes under the form instead of beside it.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 70;
const SCROLL_STEP: u16 = 5;

const KEY_HINTS: [&str; 5] = [
    "Tab/Up/Down  move",
    "Enter        next / send",
    "F1           API docs",
    "PgUp/PgDn    scroll",
    "Esc          quit",
];

/// Raw mode and the alternate screen; both are undone on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on a failure still restores the terminal through drop.
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}

/// What the right-hand panel shows and how far it is scrolled.
#[derive(Debug, Default)]
struct Screen {
    show_docs: bool,
    scroll: u16,
}

impl Screen {
    fn toggle_docs(&mut self) {
        self.show_docs = !self.show_docs;
        self.scroll = 0;
    }

    fn show_outcome(&mut self) {
        self.show_docs = false;
        self.scroll = 0;
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(SCROLL_STEP);
    }

    fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(SCROLL_STEP);
    }
}

/// Takes over the terminal and runs the form until the user quits.
pub fn run(client: &ResponderClient) -> Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut form = Form::new();
    run_app(&mut terminal, &mut form, client)
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, form: &mut Form, client: &ResponderClient) -> Result<()> {
    let mut screen = Screen::default();
    loop {
        terminal.draw(|f| ui(f, form, &mut screen, client.endpoint()))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        match form.handle_key(key) {
            FormAction::Quit => {
                info!("client closed");
                return Ok(());
            }
            FormAction::Submit => {
                if let Some(request) = form.begin_submit() {
                    // Show the waiting state; the call below blocks this loop.
                    terminal.draw(|f| ui(f, form, &mut screen, client.endpoint()))?;
                    let result = client.submit(&request);
                    form.finish_submit(result);
                }
                screen.show_outcome();
            }
            FormAction::ScrollUp => screen.scroll_up(),
            FormAction::ScrollDown => screen.scroll_down(),
            FormAction::ToggleDocs => screen.toggle_docs(),
            FormAction::None => {}
        }
    }
}

fn ui(f: &mut Frame, form: &Form, screen: &mut Screen, endpoint: &str) {
    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(f.area());

    let (form_area, panel_area) = if body.width >= SIDE_BY_SIDE_MIN_WIDTH {
        let [left, right] =
            Layout::horizontal([Constraint::Length(FORM_WIDTH), Constraint::Min(0)]).areas(body);
        (left, right)
    } else {
        let [top, bottom] =
            Layout::vertical([Constraint::Length(FORM_HEIGHT), Constraint::Min(0)]).areas(body);
        (top, bottom)
    };

    render_header(f, header);
    render_form(f, form, form_area);
    render_panel(f, form, screen, endpoint, panel_area);
}

fn render_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(DESCRIPTION),
    ];
    let header = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

fn api_docs(endpoint: &str) -> Text<'static> {
    let code = Style::default().fg(Color::Cyan);
    Text::from(vec![
        Line::from(vec![Span::raw("POST "), Span::styled(endpoint.to_string(), code)]),
        Line::from(""),
        Line::from("Request body (JSON):"),
        Line::from(Span::styled("{", code)),
        Line::from(Span::styled("  \"q\": \"Your question here\",", code)),
        Line::from(Span::styled(format!("  \"long\": {},", DEFAULT_LONGITUDE), code)),
        Line::from(Span::styled(format!("  \"lat\": {},", DEFAULT_LATITUDE), code)),
        Line::from(Span::styled("  \"user\": \"Your Name\"", code)),
        Line::from(Span::styled("}", code)),
    ])
}

/// Column of the text cursor for an input box at `row` holding `value`.
fn cursor_x(row: Rect, value: &str) -> u16 {
    let width = u16::try_from(Span::raw(value).width()).unwrap_or(u16::MAX);
    row.x
        .saturating_add(1)
        .saturating_add(width)
        .min(row.right().saturating_sub(2))
}

fn render_form(f: &mut Frame, form: &Form, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(area);

    for (field, row) in Field::ALL.iter().zip(rows.iter()) {
        let focused = form.focus == *field;
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        if *field == Field::Send {
            let label = if form.phase == Phase::AwaitingResponse {
                "[ Sending... ]".to_string()
            } else {
                format!("[ {} ]", field.label())
            };
            let button = if focused { style.add_modifier(Modifier::REVERSED) } else { style };
            f.render_widget(Paragraph::new(Span::styled(label, button)), *row);
            continue;
        }

        let value = form.value(*field);
        let input = Paragraph::new(value)
            .style(style)
            .block(Block::default().borders(Borders::ALL).title(field.label()));
        f.render_widget(input, *row);

        if focused {
            f.set_cursor_position((cursor_x(*row, value), row.y.saturating_add(1)));
        }
    }

    let hints: Vec<Line> = KEY_HINTS
        .iter()
        .map(|h| Line::from(Span::styled(*h, Style::default().fg(Color::DarkGray))))
        .collect();
    let hints = Paragraph::new(hints).block(Block::default().borders(Borders::TOP));
    f.render_widget(hints, rows[5]);
}

fn render_panel(f: &mut Frame, form: &Form, screen: &mut Screen, endpoint: &str, area: Rect) {
    let (title, body, style) = match &form.outcome {
        _ if screen.show_docs => ("API Documentation", api_docs(endpoint), Style::default()),
        Outcome::None => ("API Documentation", api_docs(endpoint), Style::default()),
        Outcome::Warning(w) => ("Warning", Text::from(w.to_string()), Style::default().fg(Color::Yellow)),
        Outcome::Error => ("Error", Text::from(SERVER_ERROR_TEXT), Style::default().fg(Color::Red)),
        Outcome::Response(value) => (
            "Response from Chatbot",
            Text::from(serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())),
            Style::default().fg(Color::Green),
        ),
    };

    let last_line = u16::try_from(body.lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
    screen.scroll = screen.scroll.min(last_line);

    let panel = Paragraph::new(body)
        .style(style)
        .wrap(Wrap { trim: false })
        .scroll((screen.scroll, 0))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(panel, area);
}
