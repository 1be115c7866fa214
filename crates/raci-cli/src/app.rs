//! Application state machine and event dispatcher.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use raci_core::{
  activity::ActivityId,
  matrix::{self, DisplayRow, DisplayTable},
  store::ActivityStore,
};
use raci_store_sqlite::{ErrorKind, SqliteStore};

use crate::form::{ActivityForm, FormAction};

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
  /// Browsing the matrix.
  Matrix,
  /// The new-activity form is open over the matrix.
  NewActivity,
  /// Waiting for `y` to delete the given activity.
  ConfirmDelete(ActivityId),
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Current screen / keyboard focus.
  pub screen: Screen,

  /// Matrix rendered from the last full read of the store.
  pub table: DisplayTable,

  /// Current fuzzy-filter string over titles.
  pub filter: String,

  /// Whether the user is typing a filter query.
  pub filter_active: bool,

  /// Cursor position within the *filtered* rows.
  pub cursor: usize,

  pub form: ActivityForm,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  pub store: Arc<SqliteStore>,
}

impl App {
  pub fn new(store: SqliteStore) -> Self {
    Self {
      screen: Screen::Matrix,
      table: matrix::render(&[]),
      filter: String::new(),
      filter_active: false,
      cursor: 0,
      form: ActivityForm::new(),
      status_msg: String::new(),
      store: Arc::new(store),
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Re-read every record and re-render the matrix.
  pub async fn reload(&mut self) -> anyhow::Result<()> {
    match self.store.list_all().await {
      Ok(records) => {
        self.table = matrix::render(&records);
        let len = self.visible_rows().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
        Ok(())
      }
      Err(e) => {
        tracing::error!(error = %e, "failed to list activities");
        self.status_msg = format!("Error: {e}");
        Err(e.into())
      }
    }
  }

  // ── Filtered rows ─────────────────────────────────────────────────────────

  /// Rows whose title matches the current filter query.
  pub fn visible_rows(&self) -> Vec<&DisplayRow> {
    let rows = self.table.rows().iter();
    if self.filter.is_empty() {
      return rows.collect();
    }
    let matcher = SkimMatcherV2::default();
    rows
      .filter(|row| {
        matcher.fuzzy_match(&row.title, &self.filter).is_some()
          || row.id.to_string() == self.filter
      })
      .collect()
  }

  /// The row under the cursor in the filtered view, if any.
  pub fn cursor_row(&self) -> Option<&DisplayRow> {
    self.visible_rows().get(self.cursor).copied()
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return Ok(false);
    }

    if self.filter_active {
      self.handle_filter_key(key);
      return Ok(true);
    }

    match self.screen.clone() {
      Screen::Matrix => self.handle_matrix_key(key).await,
      Screen::NewActivity => {
        self.handle_form_key(key).await;
        Ok(true)
      }
      Screen::ConfirmDelete(id) => {
        self.handle_confirm_key(key, id).await;
        Ok(true)
      }
    }
  }

  fn handle_filter_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.filter_active = false;
        self.filter.clear();
        self.cursor = 0;
      }
      KeyCode::Enter => {
        self.filter_active = false;
        self.cursor = 0;
      }
      KeyCode::Backspace => {
        self.filter.pop();
        self.cursor = 0;
      }
      KeyCode::Char(c) => {
        self.filter.push(c);
        self.cursor = 0;
      }
      _ => {}
    }
  }

  async fn handle_matrix_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Char('q') => return Ok(false),

      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.visible_rows().len();
        if len > 0 && self.cursor + 1 < len {
          self.cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.cursor = self.cursor.saturating_sub(1);
      }

      KeyCode::Char('n') => {
        self.form = ActivityForm::new();
        self.screen = Screen::NewActivity;
        self.status_msg.clear();
      }

      KeyCode::Char('d') | KeyCode::Delete => {
        if let Some(id) = self.cursor_row().map(|row| row.id) {
          self.screen = Screen::ConfirmDelete(id);
          self.status_msg.clear();
        }
      }

      KeyCode::Char('r') => {
        if self.reload().await.is_ok() {
          self.status_msg = "Reloaded.".into();
        }
      }

      KeyCode::Char('/') => {
        self.filter_active = true;
        self.filter.clear();
        self.cursor = 0;
      }

      KeyCode::Esc if !self.filter.is_empty() => {
        self.filter.clear();
        self.cursor = 0;
      }

      _ => {}
    }
    Ok(true)
  }

  async fn handle_form_key(&mut self, key: KeyEvent) {
    match self.form.handle_key(key) {
      FormAction::None => {}
      FormAction::Cancel => self.screen = Screen::Matrix,
      FormAction::Submit => self.submit_form().await,
    }
  }

  /// Create the activity in the form. Rejections keep the form open with the
  /// message shown inside it.
  async fn submit_form(&mut self) {
    let result = self.store.create(self.form.to_draft()).await;
    match result {
      Ok(record) => {
        self.screen = Screen::Matrix;
        self.form = ActivityForm::new();
        if self.reload().await.is_ok() {
          self.status_msg = format!("Activity #{} added.", record.id);
          let pos = self.visible_rows().iter().position(|r| r.id == record.id);
          if let Some(pos) = pos {
            self.cursor = pos;
          }
        }
      }
      Err(e) => {
        if e.kind() == ErrorKind::Storage {
          tracing::error!(error = %e, "failed to create activity");
        }
        self.form.error = Some(e.to_string());
      }
    }
  }

  async fn handle_confirm_key(&mut self, key: KeyEvent, id: ActivityId) {
    self.screen = Screen::Matrix;
    if !matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
      self.status_msg = "Delete cancelled.".into();
      return;
    }

    let result = self.store.delete(id).await;
    match result {
      Ok(_) => {
        if self.reload().await.is_ok() {
          self.status_msg = format!("Activity #{id} deleted.");
        }
      }
      Err(e) => {
        tracing::error!(error = %e, %id, "failed to delete activity");
        self.status_msg = format!("Error: {e}");
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use raci_core::activity::ActivityDraft;

  use super::*;

  fn key(code: KeyCode) -> KeyEvent { KeyEvent::new(code, KeyModifiers::NONE) }

  async fn app_with(titles: &[&str]) -> App {
    let store = SqliteStore::open_in_memory().await.unwrap();
    for title in titles {
      store.create(ActivityDraft::new(*title)).await.unwrap();
    }
    let mut app = App::new(store);
    app.reload().await.unwrap();
    app
  }

  async fn press(app: &mut App, codes: &[KeyCode]) {
    for code in codes {
      app.handle_key(key(*code)).await.unwrap();
    }
  }

  #[tokio::test]
  async fn empty_store_shows_placeholder() {
    let app = app_with(&[]).await;
    assert!(app.table.is_placeholder());
    assert!(app.cursor_row().is_none());
  }

  #[tokio::test]
  async fn form_submit_creates_and_reloads() {
    let mut app = app_with(&["existing"]).await;

    press(&mut app, &[KeyCode::Char('n')]).await;
    assert_eq!(app.screen, Screen::NewActivity);
    for c in "Approve budget".chars() {
      press(&mut app, &[KeyCode::Char(c)]).await;
    }
    press(&mut app, &[KeyCode::Tab, KeyCode::Char('a'), KeyCode::Enter]).await;

    assert_eq!(app.screen, Screen::Matrix);
    assert_eq!(app.table.rows().len(), 2);
    let row = app.cursor_row().unwrap();
    assert_eq!(row.title, "Approve budget");
    assert_eq!(row.cells[0].text, "A");
  }

  #[tokio::test]
  async fn blank_title_keeps_form_open_with_error() {
    let mut app = app_with(&[]).await;

    press(&mut app, &[KeyCode::Char('n'), KeyCode::Char(' '), KeyCode::Enter]).await;

    assert_eq!(app.screen, Screen::NewActivity);
    assert!(app.form.error.is_some());
    assert!(app.store.list_all().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn delete_requires_confirmation() {
    let mut app = app_with(&["a", "b"]).await;

    press(&mut app, &[KeyCode::Char('j'), KeyCode::Char('d'), KeyCode::Char('n')]).await;
    assert_eq!(app.table.rows().len(), 2);

    press(&mut app, &[KeyCode::Char('d'), KeyCode::Char('y')]).await;
    let titles: Vec<_> = app.table.rows().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["a"]);
    assert_eq!(app.cursor, 0);
  }

  #[tokio::test]
  async fn filter_narrows_rows() {
    let mut app = app_with(&["Approve budget", "Hire CFO", "Budget review"]).await;

    press(&mut app, &[KeyCode::Char('/')]).await;
    for c in "budget".chars() {
      press(&mut app, &[KeyCode::Char(c)]).await;
    }
    press(&mut app, &[KeyCode::Enter]).await;

    assert_eq!(app.visible_rows().len(), 2);
    assert!(!app.filter_active);

    press(&mut app, &[KeyCode::Esc]).await;
    assert_eq!(app.visible_rows().len(), 3);
  }

  #[tokio::test]
  async fn q_quits_from_matrix() {
    let mut app = app_with(&[]).await;
    assert!(!app.handle_key(key(KeyCode::Char('q'))).await.unwrap());
  }
}
