//! Terminal surface: materializes the view-model with ratatui and maps
//! key events onto controller actions.

use crate::controller::{Controller, Focus};
use crate::view::ViewModel;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::time::{Duration, Instant};

/// Idle tick so scheduled removals fire without input.
const IDLE_TICK: Duration = Duration::from_millis(100);

/// Which region of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    NewTask,
    Search,
    List,
}

/// Top-level TUI state: the controller plus purely-visual concerns
/// (pane focus, list selection, quit flag).
pub struct App {
    pub controller: Controller,
    pub pane: Pane,
    pub selected: Option<usize>,
    pub should_quit: bool,
}

impl App {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            pane: Pane::NewTask,
            selected: None,
            should_quit: false,
        }
    }

    /// Poll timeout for the event loop: wake at the next removal
    /// deadline if one is pending, otherwise idle.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.controller.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(IDLE_TICK),
            None => IDLE_TICK,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, now: Instant) {
        // Global chords first.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('d') => {
                    self.controller.delete_all();
                    self.selected = None;
                }
                _ => {}
            }
            // Unbound chords never type into an input field.
            return;
        }

        if key.code == KeyCode::Tab {
            self.cycle_pane();
            return;
        }

        match self.pane {
            Pane::NewTask | Pane::Search => self.on_input_key(key),
            Pane::List => self.on_list_key(key, now),
        }
    }

    fn cycle_pane(&mut self) {
        self.pane = match self.pane {
            Pane::NewTask => Pane::Search,
            Pane::Search => Pane::List,
            Pane::List => Pane::NewTask,
        };
        match self.pane {
            Pane::NewTask => self.controller.set_focus(Focus::NewTask),
            Pane::Search => self.controller.set_focus(Focus::Search),
            Pane::List => {
                if self.selected.is_none() && !self.controller.view().items.is_empty() {
                    self.selected = Some(0);
                }
            }
        }
    }

    fn on_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.controller.input_char(c),
            KeyCode::Backspace => self.controller.backspace(),
            KeyCode::Enter => match self.pane {
                Pane::NewTask => {
                    self.controller.submit_new_task();
                    self.selected = None;
                }
                Pane::Search => self.controller.submit_search(),
                Pane::List => {}
            },
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn on_list_key(&mut self, key: KeyEvent, now: Instant) {
        let items = self.controller.view().items;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(items.len()),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(items.len()),
            KeyCode::Char(' ') => {
                if let Some(item) = self.selected.and_then(|i| items.get(i)) {
                    self.controller.toggle_item(&item.id);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(item) = self.selected.and_then(|i| items.get(i)) {
                    self.controller.request_delete(&item.id, now);
                }
            }
            KeyCode::Char('u') => {
                if let Some(item) = self.selected.and_then(|i| items.get(i)) {
                    self.controller.cancel_removal(&item.id);
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn select_prev(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => 0,
            Some(i) => i - 1,
        });
    }

    fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1).min(len - 1),
        });
    }

    /// Keep the selection inside the (possibly shrunk) visible list.
    pub fn clamp_selection(&mut self, visible: usize) {
        self.selected = match (self.selected, visible) {
            (_, 0) => None,
            (Some(i), n) if i >= n => Some(n - 1),
            (sel, _) => sel,
        };
    }
}

pub fn draw(frame: &mut Frame, app: &mut App) {
    let view = app.controller.view();
    app.clamp_selection(view.items.len());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_inputs(frame, app, chunks[0]);
    draw_list(frame, app, &view, chunks[1]);
    draw_status(frame, &view, chunks[2]);
}

fn draw_inputs(frame: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let input_block = |title: &'static str, focused: bool| {
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(style)
    };

    let new_task = Paragraph::new(app.controller.new_task_input())
        .block(input_block("New task", app.pane == Pane::NewTask));
    frame.render_widget(new_task, halves[0]);

    let search = Paragraph::new(app.controller.search_input())
        .block(input_block("Search", app.pane == Pane::Search));
    frame.render_widget(search, halves[1]);

    match app.pane {
        Pane::NewTask => {
            let width = app.controller.new_task_input().chars().count() as u16;
            let x = halves[0].x + 1 + width;
            frame.set_cursor_position((x.min(halves[0].right().saturating_sub(2)), halves[0].y + 1));
        }
        Pane::Search => {
            let width = app.controller.search_input().chars().count() as u16;
            let x = halves[1].x + 1 + width;
            frame.set_cursor_position((x.min(halves[1].right().saturating_sub(2)), halves[1].y + 1));
        }
        Pane::List => {}
    }
}

fn draw_list(frame: &mut Frame, app: &App, view: &ViewModel, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Tasks")
        .border_style(if app.pane == Pane::List {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        });

    if let Some(message) = view.empty_message {
        let empty = Paragraph::new(Line::from(Span::styled(
            message.text(),
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = view
        .items
        .iter()
        .map(|item| {
            let marker = if item.checked { "[x] " } else { "[ ] " };
            let mut style = Style::default();
            if item.checked {
                style = style.fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT);
            }
            if item.disappearing {
                style = style.fg(Color::DarkGray).add_modifier(Modifier::DIM);
            }
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(item.title.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(app.selected.filter(|_| app.pane == Pane::List));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status(frame: &mut Frame, view: &ViewModel, area: Rect) {
    let mut spans = vec![Span::raw(format!("Total: {}", view.total))];
    if view.show_delete_all {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(
            "Ctrl-D delete all",
            Style::default().fg(Color::Red),
        ));
    }
    spans.push(Span::raw("  |  "));
    spans.push(Span::styled(
        "Tab switch  Space toggle  d delete  Ctrl-C quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
