use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, info};

use crate::model::{Field, Mode};
use crate::state::{reduce, Action, FormState};
use crate::ui::ui;

/// Interactive form: the reducer state plus which field has focus.
#[derive(Debug, Clone)]
pub struct App {
    pub state: FormState,
    pub focus: Field,
}

impl Default for App {
    fn default() -> Self {
        Self {
            state: FormState::new(),
            focus: Field::Amount,
        }
    }
}

impl App {
    pub fn dispatch(&mut self, action: Action) {
        let submitting = matches!(action, Action::Submit);
        let clearing = matches!(action, Action::Clear);
        self.state = reduce(&self.state, action);

        if clearing {
            self.focus = Field::Amount;
        } else if submitting {
            // jump to the first field that needs attention
            if let Some(field) = self.state.errors.fields().next() {
                self.focus = field;
            }
        }
    }

    fn focused_text(&self) -> Option<&str> {
        self.state.input.text(self.focus)
    }

    fn push_char(&mut self, c: char) {
        if let Some(text) = self.focused_text() {
            let mut text = text.to_string();
            text.push(c);
            self.dispatch(Action::EditField(self.focus, text));
        }
    }

    fn pop_char(&mut self) {
        if let Some(text) = self.focused_text() {
            let mut text = text.to_string();
            if text.pop().is_some() {
                self.dispatch(Action::EditField(self.focus, text));
            }
        }
    }

    fn toggle_mode(&mut self) {
        let mode = self.state.input.mode.unwrap_or_default().toggled();
        self.dispatch(Action::SelectMode(mode));
    }
}

/// Applies one key press. Returns `true` when the user asked to quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return true,
        KeyCode::Esc => return true,
        KeyCode::Char('l') if ctrl => app.dispatch(Action::Clear),
        KeyCode::Enter => app.dispatch(Action::Submit),
        KeyCode::Tab | KeyCode::Down => app.focus = app.focus.next(),
        KeyCode::BackTab | KeyCode::Up => app.focus = app.focus.prev(),
        _ if app.focus == Field::Mode => handle_mode_key(app, key),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(c) if !ctrl && !c.is_control() => app.push_char(c),
        _ => {}
    }
    false
}

fn handle_mode_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => app.toggle_mode(),
        KeyCode::Char('1') => app.dispatch(Action::SelectMode(Mode::Repayment)),
        KeyCode::Char('2') => app.dispatch(Action::SelectMode(Mode::InterestOnly)),
        _ => {}
    }
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    info!("interactive form started");
    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key(&mut app, key) {
                debug!("quit requested");
                return Ok(());
            }
        }
    }
}
