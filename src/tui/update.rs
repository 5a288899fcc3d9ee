use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use gradepoint_core::app::Command;
use gradepoint_core::domain::{CourseEdit, CourseField, CourseId, GradeSymbol};
use tracing::debug;

use super::model::{InputMode, TuiModel, ViewMode};

/// Messages produced by the Update step
#[derive(Debug, Clone, PartialEq)]
pub enum TuiMessage {
    /// Apply a command to the gradebook
    Command(Command),

    /// Leave the application
    Quit,

    /// No action needed
    None,
}

/// The Update function - handles user input and updates the model
pub struct TuiUpdate;

impl TuiUpdate {
    /// Handle a key press and update the model accordingly.
    /// Returns a TuiMessage for the caller to dispatch.
    pub fn handle_key(model: &mut TuiModel, key: KeyCode, modifiers: KeyModifiers) -> Result<TuiMessage> {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(TuiMessage::Quit);
        }

        if let InputMode::Editing { id, field } = model.input.mode.clone() {
            return Self::handle_input_keys(model, key, id, field);
        }

        match model.mode.clone() {
            ViewMode::Intro => Self::handle_intro_keys(model, key),
            ViewMode::Courses => Self::handle_course_keys(model, key),
            ViewMode::GradePicker { id, cursor } => Self::handle_picker_keys(model, key, id, cursor),
            ViewMode::Help => Self::handle_help_keys(model, key),
        }
    }

    /// Apply a message to the model. Commands run against the gradebook and
    /// the resulting event is folded back into UI state before returning.
    pub fn dispatch(model: &mut TuiModel, message: TuiMessage) {
        match message {
            TuiMessage::Command(command) => {
                debug!("Applying command: {:?}", command);
                let event = model.gradebook.execute(command);
                debug!("Gradebook event: {:?}, cgpa now {}", event, model.gradebook.cgpa());
                model.apply_event(&event);
            }
            TuiMessage::Quit => {
                model.should_quit = true;
            }
            TuiMessage::None => {}
        }
    }

    /// Handle terminal resize
    pub fn handle_resize(model: &mut TuiModel, width: u16, height: u16) -> Result<TuiMessage> {
        model.ui_state.terminal_width = width;
        model.ui_state.terminal_height = height;
        Ok(TuiMessage::None)
    }

    fn handle_intro_keys(model: &mut TuiModel, key: KeyCode) -> Result<TuiMessage> {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                model.mode = ViewMode::Courses;
                Ok(TuiMessage::None)
            }
            KeyCode::Char('q') | KeyCode::Esc => Ok(TuiMessage::Quit),
            _ => Ok(TuiMessage::None),
        }
    }

    /// Handle keys while typing into a field. Every keystroke is sent as an
    /// update so the CGPA follows the text live.
    fn handle_input_keys(model: &mut TuiModel, key: KeyCode, id: CourseId, field: CourseField) -> Result<TuiMessage> {
        let Some(course) = model.gradebook.course(id) else {
            model.input.mode = InputMode::None;
            return Ok(TuiMessage::None);
        };

        let mut text = match field {
            CourseField::Name => course.name.clone(),
            CourseField::CreditHours => course.credit_hours.clone(),
            CourseField::Grade => {
                model.input.mode = InputMode::None;
                return Ok(TuiMessage::None);
            }
        };

        match key {
            KeyCode::Char(c) => text.push(c),
            KeyCode::Backspace => {
                if text.pop().is_none() {
                    return Ok(TuiMessage::None);
                }
            }
            KeyCode::Enter | KeyCode::Esc => {
                model.input.mode = InputMode::None;
                return Ok(TuiMessage::None);
            }
            KeyCode::Tab => {
                model.input.mode = InputMode::None;
                model.ui_state.selected_field = field.next();
                return Ok(TuiMessage::None);
            }
            _ => return Ok(TuiMessage::None),
        }

        let edit = match field {
            CourseField::Name => CourseEdit::Name(text),
            _ => CourseEdit::CreditHours(text),
        };
        Ok(TuiMessage::Command(Command::UpdateCourse { id, edit }))
    }

    /// Handle keys on the course form
    fn handle_course_keys(model: &mut TuiModel, key: KeyCode) -> Result<TuiMessage> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => Ok(TuiMessage::Quit),

            KeyCode::Char('?') => {
                model.mode = ViewMode::Help;
                Ok(TuiMessage::None)
            }

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => {
                model.select_prev_row();
                Ok(TuiMessage::None)
            }

            KeyCode::Down | KeyCode::Char('j') => {
                model.select_next_row();
                Ok(TuiMessage::None)
            }

            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
                model.ui_state.selected_field = model.ui_state.selected_field.prev();
                Ok(TuiMessage::None)
            }

            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                model.ui_state.selected_field = model.ui_state.selected_field.next();
                Ok(TuiMessage::None)
            }

            // Actions
            KeyCode::Enter => {
                let Some(course) = model.selected_course() else {
                    return Ok(TuiMessage::None);
                };
                let id = course.id;
                let grade = course.grade;

                match model.ui_state.selected_field {
                    CourseField::Grade => {
                        let cursor = GradeSymbol::ALL.iter().position(|g| *g == grade).unwrap_or(0);
                        model.mode = ViewMode::GradePicker { id, cursor };
                    }
                    field => {
                        model.input.mode = InputMode::Editing { id, field };
                    }
                }
                Ok(TuiMessage::None)
            }

            KeyCode::Char('a') => Ok(TuiMessage::Command(Command::AddCourse)),

            KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
                match model.selected_course_id() {
                    Some(id) => Ok(TuiMessage::Command(Command::RemoveCourse { id })),
                    None => Ok(TuiMessage::None),
                }
            }

            _ => Ok(TuiMessage::None),
        }
    }

    /// Handle keys in the grade picker popup
    fn handle_picker_keys(model: &mut TuiModel, key: KeyCode, id: CourseId, cursor: usize) -> Result<TuiMessage> {
        let last = GradeSymbol::ALL.len() - 1;

        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                model.mode = ViewMode::GradePicker { id, cursor: cursor.saturating_sub(1) };
                Ok(TuiMessage::None)
            }

            KeyCode::Down | KeyCode::Char('j') => {
                model.mode = ViewMode::GradePicker { id, cursor: (cursor + 1).min(last) };
                Ok(TuiMessage::None)
            }

            KeyCode::Enter => {
                model.mode = ViewMode::Courses;
                let grade = TuiModel::picker_grade(cursor);
                Ok(TuiMessage::Command(Command::UpdateCourse {
                    id,
                    edit: CourseEdit::Grade(grade),
                }))
            }

            KeyCode::Esc | KeyCode::Char('q') => {
                model.mode = ViewMode::Courses;
                Ok(TuiMessage::None)
            }

            _ => Ok(TuiMessage::None),
        }
    }

    /// Handle keys in help view
    fn handle_help_keys(model: &mut TuiModel, _key: KeyCode) -> Result<TuiMessage> {
        // Any key exits help
        model.mode = ViewMode::Courses;
        Ok(TuiMessage::None)
    }
}
