//! New-activity form popup.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use raci_core::{matrix::CellColor, role::Role};

use crate::form::ActivityForm;

/// Render `form` as a bordered popup over `area`.
pub fn draw(f: &mut Frame, area: Rect, form: &ActivityForm) {
  let block = Block::default()
    .title(" New activity ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  let inner = block.inner(area);
  f.render_widget(Clear, area);
  f.render_widget(block, area);

  let label_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
  let focus_style = Style::default().add_modifier(Modifier::REVERSED);

  let mut lines = Vec::with_capacity(10);

  let title_text = if form.focus == 0 {
    format!("{}_", form.title)
  } else {
    form.title.clone()
  };
  lines.push(Line::from(vec![
    Span::styled(format!("{:<19}", "Title *"), label_style),
    Span::styled(title_text, if form.focus == 0 { focus_style } else { Style::default() }),
  ]));
  lines.push(Line::from(""));

  for (i, role) in Role::all().enumerate() {
    let code = form.codes[i];
    let color = CellColor::for_code(code);
    let mut value_style = match super::to_color(color) {
      Some(bg) => Style::default().fg(Color::White).bg(bg).add_modifier(Modifier::BOLD),
      None => Style::default().fg(Color::DarkGray),
    };
    if form.focus == i + 1 {
      value_style = value_style.add_modifier(Modifier::REVERSED);
    }

    let shown = if code.is_empty() { "-".to_string() } else { code.letter().to_string() };
    lines.push(Line::from(vec![
      Span::styled(format!("{:<19}", role.label()), label_style),
      Span::styled(format!(" {shown} "), value_style),
      Span::styled(format!("  {}", code.label()), Style::default().fg(Color::DarkGray)),
    ]));
  }

  if let Some(err) = &form.error {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
      err.clone(),
      Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )));
  }

  f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
