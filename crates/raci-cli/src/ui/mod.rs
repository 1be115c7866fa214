//! TUI rendering — orchestrates all panes.

pub mod form;
pub mod matrix;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Flex, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph},
};
use raci_core::matrix::CellColor;

use crate::app::{App, Screen};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, legend, matrix, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Length(1), // legend
      Constraint::Min(0),    // matrix
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  matrix::draw_legend(f, rows[1]);
  matrix::draw(f, rows[2], app);
  draw_status(f, rows[3], app);

  match &app.screen {
    Screen::Matrix => {}
    Screen::NewActivity => form::draw(f, centered(area, 52, 14), &app.form),
    Screen::ConfirmDelete(id) => draw_confirm(f, centered(area, 40, 3), &id.to_string()),
  }
}

/// Terminal colour for a logical cell colour.
pub fn to_color(color: CellColor) -> Option<Color> {
  color.rgb().map(|(r, g, b)| Color::Rgb(r, g, b))
}

/// A `width` × `height` rectangle centred in `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
  let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
    .flex(Flex::Center)
    .areas(area);
  let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
    .flex(Flex::Center)
    .areas(row);
  rect
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    " RACI matrix  [n] new  [d] delete  [/] search  [q] quit",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(
    format!("{date} "),
    Style::default().fg(Color::Gray),
  );

  // Simple left-right header: pad the middle.
  let left_width = left.content.chars().count() as u16;
  let right_width = right.content.chars().count() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  let block = Block::default().style(Style::default().bg(Color::Rgb(0x2e, 0x31, 0x92)));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Delete confirmation ──────────────────────────────────────────────────────

fn draw_confirm(f: &mut Frame, area: Rect, id: &str) {
  let block = Block::default()
    .title(" Delete ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Red));
  let inner = block.inner(area);
  f.render_widget(Clear, area);
  f.render_widget(block, area);
  f.render_widget(
    Paragraph::new(Line::from(vec![
      Span::raw(format!("Delete activity #{id}? ")),
      Span::styled("[y/N]", Style::default().add_modifier(Modifier::BOLD)),
    ])),
    inner,
  );
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match &app.screen {
    Screen::Matrix if app.filter_active => (
      "SEARCH",
      "Type to filter  Esc cancel  Enter apply",
    ),
    Screen::Matrix => (
      "NORMAL",
      "↑↓/jk navigate  n new  d delete  / search  r reload  q quit",
    ),
    Screen::NewActivity => (
      "NEW",
      "Tab next field  r/a/c/i set  ←→ cycle  Space clear  Enter save  Esc cancel",
    ),
    Screen::ConfirmDelete(_) => ("DELETE", "y confirm  any other key cancels"),
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(
    format!("  {status}"),
    Style::default().fg(Color::DarkGray),
  );

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
