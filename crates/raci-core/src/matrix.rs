//! Matrix rendering — records in, a colour-annotated display grid out.
//!
//! Everything here is pure. The colours are logical attributes; turning them
//! into terminal styles or markup is the presentation layer's job.

use serde::Serialize;
use strum::EnumCount as _;

use crate::{
  activity::{ActivityId, ActivityRecord},
  role::{ResponsibilityCode, Role},
};

/// Text shown instead of an empty grid.
pub const NO_ACTIVITIES: &str = "No activities recorded yet.";

/// Column labels of the grid, in order.
pub const HEADER: [&str; 2 + Role::COUNT] = [
  "ID",
  "Title",
  "CEO",
  "AreaPresident",
  "ExecutiveDirector",
  "BoardAdvisor",
  "ExecutiveManager",
];

// ─── Colours ─────────────────────────────────────────────────────────────────

/// Logical background colour of a role cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellColor {
  None,
  Red,
  Green,
  Yellow,
  Blue,
}

impl CellColor {
  /// The colour a code is painted with. Total over every code.
  pub fn for_code(code: ResponsibilityCode) -> Self {
    match code {
      ResponsibilityCode::Accountable => Self::Red,
      ResponsibilityCode::Responsible => Self::Green,
      ResponsibilityCode::Consulted => Self::Yellow,
      ResponsibilityCode::Informed => Self::Blue,
      ResponsibilityCode::Empty => Self::None,
    }
  }

  /// `(r, g, b)` for shells that paint exact colours.
  pub fn rgb(self) -> Option<(u8, u8, u8)> {
    match self {
      Self::None => None,
      Self::Red => Some((0xff, 0x4d, 0x4d)),
      Self::Green => Some((0x28, 0xa7, 0x45)),
      Self::Yellow => Some((0xff, 0xc1, 0x07)),
      Self::Blue => Some((0x00, 0x7b, 0xff)),
    }
  }

  /// CSS-style hex string, e.g. `"#ff4d4d"`.
  pub fn hex(self) -> Option<String> {
    self.rgb().map(|(r, g, b)| format!("#{r:02x}{g:02x}{b:02x}"))
  }
}

// ─── Display table ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayCell {
  /// Canonical letter, or `""` when unassigned.
  pub text:  &'static str,
  pub color: CellColor,
}

impl DisplayCell {
  pub fn for_code(code: ResponsibilityCode) -> Self {
    Self { text: code.letter(), color: CellColor::for_code(code) }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
  pub id:    ActivityId,
  pub title: String,
  /// One cell per role, in [`HEADER`] order.
  pub cells: [DisplayCell; Role::COUNT],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayTable {
  /// There is nothing to show; display `message` instead of a table shell.
  Placeholder { message: &'static str },
  Grid {
    header: [&'static str; 2 + Role::COUNT],
    rows:   Vec<DisplayRow>,
  },
}

impl DisplayTable {
  pub fn is_placeholder(&self) -> bool { matches!(self, Self::Placeholder { .. }) }

  /// Data rows, excluding the header. Zero for the placeholder.
  pub fn rows(&self) -> &[DisplayRow] {
    match self {
      Self::Placeholder { .. } => &[],
      Self::Grid { rows, .. } => rows,
    }
  }
}

/// Lay `records` out as a grid, one row per record in the order given.
///
/// Callers supply ids ascending; no sorting happens here.
pub fn render(records: &[ActivityRecord]) -> DisplayTable {
  if records.is_empty() {
    return DisplayTable::Placeholder { message: NO_ACTIVITIES };
  }

  let rows = records
    .iter()
    .map(|record| DisplayRow {
      id:    record.id,
      title: record.title.clone(),
      cells: record.assignments.codes().map(DisplayCell::for_code),
    })
    .collect();

  DisplayTable::Grid { header: HEADER, rows }
}

// ─── Legend ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
  pub code:  ResponsibilityCode,
  pub color: CellColor,
  pub label: &'static str,
}

/// The static key: `A`, `R`, `C`, `I` with their colours and names.
pub fn legend() -> [LegendEntry; 4] {
  [
    ResponsibilityCode::Accountable,
    ResponsibilityCode::Responsible,
    ResponsibilityCode::Consulted,
    ResponsibilityCode::Informed,
  ]
  .map(|code| LegendEntry {
    code,
    color: CellColor::for_code(code),
    label: code.label(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::activity::ActivityDraft;

  fn record(id: i64, draft: ActivityDraft) -> ActivityRecord {
    draft.validate().unwrap().into_record(ActivityId::new(id).unwrap())
  }

  #[test]
  fn empty_input_yields_placeholder() {
    let table = render(&[]);
    assert_eq!(table, DisplayTable::Placeholder { message: NO_ACTIVITIES });
    assert!(table.rows().is_empty());
  }

  #[test]
  fn header_is_fixed() {
    let table = render(&[record(1, ActivityDraft::new("x"))]);
    let DisplayTable::Grid { header, .. } = table else {
      panic!("expected grid");
    };
    assert_eq!(header, [
      "ID",
      "Title",
      "CEO",
      "AreaPresident",
      "ExecutiveDirector",
      "BoardAdvisor",
      "ExecutiveManager",
    ]);
    let labels: Vec<_> = Role::all().map(Role::label).collect();
    assert_eq!(&header[2..], labels.as_slice());
  }

  #[test]
  fn budget_example_renders_expected_cells() {
    let r = record(
      1,
      ActivityDraft::new("Approve annual budget")
        .assign("CEO", "A")
        .assign("AreaPresident", "c")
        .assign("ExecutiveDirector", "")
        .assign("BoardAdvisor", "I")
        .assign("ExecutiveManager", "r"),
    );
    let table = render(&[r]);
    let row = &table.rows()[0];

    let cells: Vec<_> = row.cells.iter().map(|c| (c.text, c.color)).collect();
    assert_eq!(cells, [
      ("A", CellColor::Red),
      ("C", CellColor::Yellow),
      ("", CellColor::None),
      ("I", CellColor::Blue),
      ("R", CellColor::Green),
    ]);
    assert_eq!(row.title, "Approve annual budget");
  }

  #[test]
  fn rows_keep_input_order() {
    let records = [
      record(5, ActivityDraft::new("five")),
      record(2, ActivityDraft::new("two")),
      record(9, ActivityDraft::new("nine")),
    ];
    let ids: Vec<_> = render(&records).rows().iter().map(|r| r.id.get()).collect();
    assert_eq!(ids, [5, 2, 9]);
  }

  #[test]
  fn render_is_deterministic() {
    let records = [
      record(1, ActivityDraft::new("a").assign("CEO", "R")),
      record(2, ActivityDraft::new("b").assign("BoardAdvisor", "c")),
    ];
    assert_eq!(render(&records), render(&records));
  }

  #[test]
  fn colour_lookup_is_total_and_fixed() {
    use ResponsibilityCode::*;
    let expected = [
      (Accountable, CellColor::Red),
      (Responsible, CellColor::Green),
      (Consulted, CellColor::Yellow),
      (Informed, CellColor::Blue),
      (Empty, CellColor::None),
    ];
    for (code, color) in expected {
      assert_eq!(CellColor::for_code(code), color);
      assert_eq!(DisplayCell::for_code(code).color, color);
    }
  }

  #[test]
  fn hex_values_match_palette() {
    assert_eq!(CellColor::Red.hex().as_deref(), Some("#ff4d4d"));
    assert_eq!(CellColor::Green.hex().as_deref(), Some("#28a745"));
    assert_eq!(CellColor::Yellow.hex().as_deref(), Some("#ffc107"));
    assert_eq!(CellColor::Blue.hex().as_deref(), Some("#007bff"));
    assert_eq!(CellColor::None.hex(), None);
  }

  #[test]
  fn legend_order_and_labels() {
    let entries: Vec<_> = legend()
      .iter()
      .map(|e| (e.code.letter(), e.color, e.label))
      .collect();
    assert_eq!(entries, [
      ("A", CellColor::Red, "Accountable"),
      ("R", CellColor::Green, "Responsible"),
      ("C", CellColor::Yellow, "Consulted"),
      ("I", CellColor::Blue, "Informed"),
    ]);
  }
}
