use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::format::format_gbp;
use crate::model::{CalculationResult, Field, Mode};

const ACCENT: Color = Color::Yellow;
const MUTED: Color = Color::DarkGray;
const ERROR: Color = Color::Red;

pub fn ui(f: &mut Frame, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(f.size());

    render_form(f, app, columns[0]);
    render_results(f, app.state.result.as_ref(), columns[1]);
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Min(1),
            ]
            .as_ref(),
        )
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(20)].as_ref())
        .split(chunks[0]);
    let title = Paragraph::new("Mortgage Calculator")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, header[0]);
    let clear = Paragraph::new(Span::styled(
        "Clear All (Ctrl+L)",
        Style::default().fg(MUTED).add_modifier(Modifier::UNDERLINED),
    ))
    .alignment(Alignment::Right)
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(clear, header[1]);

    render_text_field(f, app, Field::Amount, chunks[1]);

    let term_rate = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(chunks[2]);
    render_text_field(f, app, Field::Term, term_rate[0]);
    render_text_field(f, app, Field::Rate, term_rate[1]);

    render_mode_field(f, app, chunks[3]);

    let button = Paragraph::new("Calculate Repayments (Enter)")
        .style(Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(ACCENT)));
    f.render_widget(button, chunks[4]);

    let help = Paragraph::new("Tab/↑/↓: move | ←/→/Space: mortgage type | Enter: calculate | Ctrl+L: clear | Esc: quit")
        .style(Style::default().fg(MUTED))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(help, chunks[5]);
}

/// Unit shown beside the typed text: `(prefix, suffix)`.
fn adornment(field: Field) -> (&'static str, &'static str) {
    match field {
        Field::Amount => ("£ ", ""),
        Field::Term => ("", " years"),
        Field::Rate => ("", " %"),
        Field::Mode => ("", ""),
    }
}

fn border_style(app: &App, field: Field) -> Style {
    if app.state.errors.get(field).is_some() {
        Style::default().fg(ERROR)
    } else if app.focus == field {
        Style::default().fg(ACCENT)
    } else {
        Style::default()
    }
}

fn error_line(app: &App, field: Field) -> Paragraph<'static> {
    let message = app
        .state
        .errors
        .get(field)
        .map(|e| e.to_string())
        .unwrap_or_default();
    Paragraph::new(message).style(Style::default().fg(ERROR))
}

fn render_text_field(f: &mut Frame, app: &App, field: Field, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)].as_ref())
        .split(area);

    let text = app.state.input.text(field).unwrap_or_default();
    let (prefix, suffix) = adornment(field);
    let adornment_style = if app.state.errors.get(field).is_some() {
        Style::default().fg(Color::White).bg(ERROR)
    } else {
        Style::default().fg(MUTED)
    };
    let value = if text.is_empty() {
        Span::styled("0", Style::default().fg(MUTED))
    } else {
        Span::raw(text.to_string())
    };
    let line = Line::from(vec![
        Span::styled(prefix, adornment_style),
        value,
        Span::styled(suffix, adornment_style),
    ]);

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(field.label())
            .border_style(border_style(app, field)),
    );
    f.render_widget(input, rows[0]);
    f.render_widget(error_line(app, field), rows[1]);

    if app.focus == field {
        let offset = prefix.chars().count() + text.chars().count();
        f.set_cursor(cursor_x(rows[0], offset), rows[0].y.saturating_add(1));
    }
}

/// Column of the text cursor inside a bordered input, pinned to the last
/// inner column when the text is wider than the box.
fn cursor_x(input: Rect, offset: usize) -> u16 {
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    let max_x = input.x.saturating_add(input.width.saturating_sub(2));
    input.x.saturating_add(1).saturating_add(offset).min(max_x)
}

fn render_mode_field(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(1)].as_ref())
        .split(area);

    let selected = app.state.input.mode;
    let options: Vec<Line> = [Mode::Repayment, Mode::InterestOnly]
        .into_iter()
        .map(|mode| {
            if selected == Some(mode) {
                Line::from(format!("(●) {}", mode.label()))
                    .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            } else {
                Line::from(format!("( ) {}", mode.label())).style(Style::default().fg(MUTED))
            }
        })
        .collect();

    let input = Paragraph::new(options).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Field::Mode.label())
            .border_style(border_style(app, Field::Mode)),
    );
    f.render_widget(input, rows[0]);
    f.render_widget(error_line(app, Field::Mode), rows[1]);
}

fn render_results(f: &mut Frame, result: Option<&CalculationResult>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    let text = match result {
        Some(result) => vec![
            Line::from(Span::styled(
                "Your results",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Your results are shown below based on the information you provided. \
                 To adjust the results, edit the form and press Enter to calculate \
                 repayments again.",
                Style::default().fg(MUTED),
            )),
            Line::from(""),
            Line::from(Span::styled("Your monthly repayments", Style::default().fg(MUTED))),
            Line::from(Span::styled(
                format_gbp(result.monthly_payment),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Total you'll repay over the term",
                Style::default().fg(MUTED),
            )),
            Line::from(Span::styled(
                format_gbp(result.total_repayment),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
        ],
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Results shown here",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Complete the form and press Enter to calculate repayments \
                 and see what your monthly repayments would be.",
                Style::default().fg(MUTED),
            )),
        ],
    };

    let alignment = if result.is_some() {
        Alignment::Left
    } else {
        Alignment::Center
    };
    let panel = Paragraph::new(text)
        .block(block)
        .alignment(alignment)
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}
