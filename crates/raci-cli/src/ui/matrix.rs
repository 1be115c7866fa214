//! Matrix pane and legend line.

use ratatui::{
  Frame,
  layout::{Constraint, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use raci_core::matrix::{DisplayCell, DisplayTable, HEADER, legend};

use crate::app::App;

/// Render the matrix into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let visible = app.visible_rows();
  let total = app.table.rows().len();

  let title = if app.filter_active || !app.filter.is_empty() {
    format!(" Activities ({}/{}) ", visible.len(), total)
  } else {
    format!(" Activities ({}) ", total)
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let mut inner_area = block.inner(area);
  f.render_widget(block, area);

  // Filter bar along the bottom of the pane.
  if (app.filter_active || !app.filter.is_empty()) && inner_area.height > 2 {
    let filter_area = Rect {
      x:      inner_area.x,
      y:      inner_area.y + inner_area.height - 1,
      width:  inner_area.width,
      height: 1,
    };
    inner_area.height = inner_area.height.saturating_sub(1);

    let filter_text = if app.filter_active {
      format!("/{}_", app.filter)
    } else {
      format!("/{}", app.filter)
    };
    f.render_widget(
      Paragraph::new(filter_text).style(Style::default().fg(Color::Yellow)),
      filter_area,
    );
  }

  if let DisplayTable::Placeholder { message } = &app.table {
    f.render_widget(
      Paragraph::new(*message).style(Style::default().fg(Color::DarkGray)),
      inner_area,
    );
    return;
  }

  if visible.is_empty() {
    f.render_widget(
      Paragraph::new("No activities match the filter.")
        .style(Style::default().fg(Color::DarkGray)),
      inner_area,
    );
    return;
  }

  let header = Row::new(HEADER.map(Cell::from))
    .style(
      Style::default()
        .fg(Color::White)
        .bg(Color::Rgb(0x2e, 0x31, 0x92))
        .add_modifier(Modifier::BOLD),
    );

  let rows = visible.iter().map(|row| {
    let mut cells = vec![Cell::from(row.id.to_string()), Cell::from(row.title.clone())];
    cells.extend(row.cells.iter().map(role_cell));
    Row::new(cells)
  });

  let mut widths = vec![Constraint::Length(5), Constraint::Min(20)];
  widths.extend(HEADER[2..].iter().map(|h| Constraint::Length(h.len() as u16)));

  let mut state = TableState::default();
  state.select(Some(app.cursor));

  f.render_stateful_widget(
    Table::new(rows, widths)
      .header(header)
      .column_spacing(1)
      .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED)),
    inner_area,
    &mut state,
  );
}

fn role_cell(cell: &DisplayCell) -> Cell<'static> {
  let style = match super::to_color(cell.color) {
    Some(bg) => Style::default()
      .fg(Color::White)
      .bg(bg)
      .add_modifier(Modifier::BOLD),
    None => Style::default(),
  };
  Cell::from(format!(" {} ", cell.text)).style(style)
}

/// Render the static colour key as a single line.
pub fn draw_legend(f: &mut Frame, area: Rect) {
  let mut spans = vec![Span::raw(" ")];
  for entry in legend() {
    let bg = super::to_color(entry.color).unwrap_or(Color::Reset);
    spans.push(Span::styled(
      format!(" {} – {} ", entry.code, entry.label),
      Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::raw("  "));
  }
  f.render_widget(Paragraph::new(Line::from(spans)), area);
}
