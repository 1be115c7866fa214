//! New-activity form state: a title field followed by one selector per role.

use crossterm::event::{KeyCode, KeyEvent};
use raci_core::{
  activity::ActivityDraft,
  role::{ResponsibilityCode, Role},
};

/// Codes in the order Left/Right cycles through them.
const CYCLE: [ResponsibilityCode; 5] = [
  ResponsibilityCode::Empty,
  ResponsibilityCode::Responsible,
  ResponsibilityCode::Accountable,
  ResponsibilityCode::Consulted,
  ResponsibilityCode::Informed,
];

/// Number of focusable fields: the title plus one per role.
pub const FIELD_COUNT: usize = 6;

/// What the caller should do after a key has been applied to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
  None,
  Submit,
  Cancel,
}

#[derive(Debug, Clone, Default)]
pub struct ActivityForm {
  pub title: String,
  pub codes: [ResponsibilityCode; 5],
  /// `0` is the title; `1..FIELD_COUNT` are the roles in canonical order.
  pub focus: usize,
  /// Last rejection message, shown under the fields.
  pub error: Option<String>,
}

impl ActivityForm {
  pub fn new() -> Self { Self::default() }

  /// The role under the cursor, if the cursor is not on the title.
  pub fn focused_role(&self) -> Option<Role> {
    self.focus.checked_sub(1).and_then(|i| Role::all().nth(i))
  }

  /// Loosely-typed draft for the store, exactly as the user entered it.
  pub fn to_draft(&self) -> ActivityDraft {
    Role::all()
      .zip(self.codes)
      .fold(ActivityDraft::new(self.title.clone()), |draft, (role, code)| {
        draft.assign(role.label(), code.letter())
      })
  }

  pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
    match key.code {
      KeyCode::Esc => return FormAction::Cancel,
      KeyCode::Enter => return FormAction::Submit,
      KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % FIELD_COUNT,
      KeyCode::BackTab | KeyCode::Up => {
        self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
      }
      _ => match self.focused_role() {
        None => self.edit_title(key.code),
        Some(role) => self.edit_role(role, key.code),
      },
    }
    FormAction::None
  }

  fn edit_title(&mut self, code: KeyCode) {
    match code {
      KeyCode::Backspace => {
        self.title.pop();
      }
      KeyCode::Char(c) => self.title.push(c),
      _ => {}
    }
  }

  fn edit_role(&mut self, role: Role, code: KeyCode) {
    let slot = &mut self.codes[role.index()];
    match code {
      KeyCode::Char(' ') | KeyCode::Backspace | KeyCode::Delete => {
        *slot = ResponsibilityCode::Empty;
      }
      KeyCode::Char(c) => {
        if let Ok(parsed) = ResponsibilityCode::parse(&c.to_string()) {
          *slot = parsed;
        }
      }
      KeyCode::Right => *slot = step(*slot, 1),
      KeyCode::Left => *slot = step(*slot, CYCLE.len() - 1),
      _ => {}
    }
  }
}

fn step(code: ResponsibilityCode, by: usize) -> ResponsibilityCode {
  let pos = CYCLE.iter().position(|c| *c == code).unwrap_or(0);
  CYCLE[(pos + by) % CYCLE.len()]
}
