//! Non-interactive subcommands: print the matrix, add and delete rows.

use std::io::{self, Write};

use crossterm::style::{Attribute, Color, Stylize as _};
use raci_core::{
  activity::{ActivityDraft, ActivityId, records_to_json},
  matrix::{self, CellColor, DisplayTable, HEADER, legend},
  role::Role,
  store::ActivityStore,
};
use raci_store_sqlite::SqliteStore;

/// Per-role codes as given on the command line, in canonical role order.
pub struct AddRequest {
  pub title: String,
  pub codes: [String; 5],
}

impl AddRequest {
  fn into_draft(self) -> ActivityDraft {
    Role::all()
      .zip(self.codes)
      .fold(ActivityDraft::new(self.title), |draft, (role, code)| {
        draft.assign(role.label(), code)
      })
  }
}

pub async fn list(store: &SqliteStore, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
  let records = store.list_all().await?;
  if json {
    writeln!(out, "{}", records_to_json(&records)?)?;
    return Ok(());
  }
  write_legend(out, true)?;
  writeln!(out)?;
  write_table(out, &matrix::render(&records), true)?;
  Ok(())
}

pub async fn add(store: &SqliteStore, req: AddRequest, out: &mut impl Write) -> anyhow::Result<()> {
  let record = store.create(req.into_draft()).await?;
  writeln!(out, "Added activity #{}: {}", record.id, record.title)?;
  Ok(())
}

pub async fn delete(store: &SqliteStore, id: ActivityId, out: &mut impl Write) -> anyhow::Result<()> {
  if store.delete(id).await? {
    writeln!(out, "Deleted activity #{id}.")?;
  } else {
    writeln!(out, "No activity #{id}; nothing to delete.")?;
  }
  Ok(())
}

// ─── Plain-text rendering ─────────────────────────────────────────────────────

fn paint(text: &str, color: CellColor, styled: bool) -> String {
  match color.rgb() {
    Some((r, g, b)) if styled => text
      .with(Color::White)
      .on(Color::Rgb { r, g, b })
      .attribute(Attribute::Bold)
      .to_string(),
    _ => text.to_string(),
  }
}

pub fn write_legend(out: &mut impl Write, styled: bool) -> io::Result<()> {
  let entries: Vec<String> = legend()
    .iter()
    .map(|e| paint(&format!(" {} – {} ", e.code, e.label), e.color, styled))
    .collect();
  writeln!(out, "{}", entries.join("  "))
}

/// Write `table` as aligned text columns. `styled` adds ANSI colours to the
/// role cells.
pub fn write_table(out: &mut impl Write, table: &DisplayTable, styled: bool) -> io::Result<()> {
  let rows = match table {
    DisplayTable::Placeholder { message } => return writeln!(out, "{message}"),
    DisplayTable::Grid { rows, .. } => rows,
  };

  let id_width = rows
    .iter()
    .map(|r| r.id.to_string().len())
    .chain([HEADER[0].len()])
    .max()
    .unwrap_or(2);
  let title_width = rows
    .iter()
    .map(|r| r.title.chars().count())
    .chain([HEADER[1].len()])
    .max()
    .unwrap_or(5);

  write!(out, "{:<id_width$}  {:<title_width$}", HEADER[0], HEADER[1])?;
  for h in &HEADER[2..] {
    write!(out, "  {h}")?;
  }
  writeln!(out)?;

  for row in rows {
    write!(out, "{:<id_width$}  {:<title_width$}", row.id.to_string(), row.title)?;
    for (cell, h) in row.cells.iter().zip(&HEADER[2..]) {
      // Centre the letter under its header; colour only the letter's box.
      let cell_text = format!(" {:^1} ", cell.text);
      let pad = h.len().saturating_sub(3);
      let left = pad / 2;
      write!(
        out,
        "  {}{}{}",
        " ".repeat(left),
        paint(&cell_text, cell.color, styled),
        " ".repeat(pad - left),
      )?;
    }
    writeln!(out)?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn text(table: &DisplayTable) -> String {
    let mut buf = Vec::new();
    write_table(&mut buf, table, false).unwrap();
    String::from_utf8(buf).unwrap()
  }

  fn codes(c: [&str; 5]) -> [String; 5] { c.map(str::to_owned) }

  #[tokio::test]
  async fn empty_store_prints_placeholder() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let mut buf = Vec::new();
    list(&store, false, &mut buf).await.unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains(matrix::NO_ACTIVITIES));
    assert!(out.contains("Accountable"));
  }

  #[tokio::test]
  async fn add_then_list_shows_row() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let mut sink = Vec::new();
    add(
      &store,
      AddRequest {
        title: "Approve annual budget".into(),
        codes: codes(["A", "c", "", "I", "r"]),
      },
      &mut sink,
    )
    .await
    .unwrap();

    let table = matrix::render(&store.list_all().await.unwrap());
    let out = text(&table);
    let mut lines = out.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("ID"));
    assert!(header.ends_with("ExecutiveManager"));

    let row = lines.next().unwrap();
    assert!(row.contains("Approve annual budget"));
    let letters: Vec<_> = row
      .trim_start_matches(|c: char| c.is_ascii_digit())
      .replace("Approve annual budget", "")
      .split_whitespace()
      .map(str::to_owned)
      .collect();
    assert_eq!(letters, ["A", "C", "I", "R"]);
  }

  #[tokio::test]
  async fn add_rejects_bad_code() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let err = add(
      &store,
      AddRequest { title: "x".into(), codes: codes(["Z", "", "", "", ""]) },
      &mut Vec::new(),
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("invalid responsibility code"));
    assert!(store.list_all().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn delete_reports_absent_id() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let mut buf = Vec::new();
    delete(&store, ActivityId::new(42).unwrap(), &mut buf).await.unwrap();
    assert!(String::from_utf8(buf).unwrap().contains("nothing to delete"));
  }

  #[tokio::test]
  async fn json_listing_uses_letters() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    store
      .create(ActivityDraft::new("Sign").assign("BoardAdvisor", "informed"))
      .await
      .unwrap();
    let mut buf = Vec::new();
    list(&store, true, &mut buf).await.unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("\"BoardAdvisor\": \"I\""));
  }
}
