use gradepoint_core::app::Gradebook;
use gradepoint_core::domain::{Course, CourseField, CourseId, Event, GradeSymbol};

use crate::config::UiConfig;

/// Oldest status messages are dropped past this many
const MAX_MESSAGES: usize = 20;

/// The TUI Model - the complete UI state.
/// Course data lives in the core `Gradebook`; everything else here is
/// cursor and mode state that only the terminal cares about.
#[derive(Debug, Default)]
pub struct TuiModel {
    /// Course list and CGPA
    pub gradebook: Gradebook,

    /// Display options from the config file
    pub settings: UiConfig,

    /// Cursor state
    pub ui_state: UiState,

    /// Current input state
    pub input: InputState,

    /// Current view mode
    pub mode: ViewMode,

    /// Status messages to display (latest last)
    pub messages: Vec<String>,

    /// Whether the application should quit
    pub should_quit: bool,
}

/// Cursor position in the course form
#[derive(Debug, Default)]
pub struct UiState {
    /// Display position of the focused course
    pub selected_row: usize,

    /// Focused field within the row
    pub selected_field: CourseField,

    /// First visible row
    pub scroll_offset: usize,

    /// Terminal size
    pub terminal_width: u16,
    pub terminal_height: u16,
}

/// Input state for editing a text field
#[derive(Debug, Default)]
pub struct InputState {
    pub mode: InputMode,
}

/// Which text field (if any) is receiving keystrokes
#[derive(Debug, Default, Clone, PartialEq)]
pub enum InputMode {
    #[default]
    None,

    /// Typing into a course's name or credit hours
    Editing { id: CourseId, field: CourseField },
}

/// Different view modes for the TUI
#[derive(Debug, Default, Clone, PartialEq)]
pub enum ViewMode {
    /// Welcome screen
    Intro,

    #[default]
    /// The course form
    Courses,

    /// Grade selection popup over the form
    GradePicker { id: CourseId, cursor: usize },

    /// Help view
    Help,
}

impl TuiModel {
    pub fn new(gradebook: Gradebook, settings: UiConfig) -> Self {
        let mode = if settings.show_intro {
            ViewMode::Intro
        } else {
            ViewMode::Courses
        };

        Self {
            gradebook,
            settings,
            mode,
            ..Self::default()
        }
    }

    /// The focused course, if the cursor is on a row
    pub fn selected_course(&self) -> Option<&Course> {
        self.gradebook.course_at(self.ui_state.selected_row)
    }

    pub fn selected_course_id(&self) -> Option<CourseId> {
        self.selected_course().map(|c| c.id)
    }

    pub fn is_editing(&self) -> bool {
        self.input.mode != InputMode::None
    }

    /// Apply the outcome of a gradebook command to UI state
    pub fn apply_event(&mut self, event: &Event) {
        match event {
            Event::CourseAdded { id } => {
                if let Some(index) = self.gradebook.course_list().position(*id) {
                    self.ui_state.selected_row = index;
                    self.ui_state.selected_field = CourseField::Name;
                }
                self.add_message(format!("Added Course {}", self.gradebook.len()));
            }

            Event::CourseRemoved { .. } => {
                self.clamp_selection();
                self.add_message("Course removed".to_string());
            }

            Event::RemovalRejected { .. } => {
                self.add_message("At least one course is required".to_string());
            }

            Event::CourseUpdated { .. } => {
                // Live edits: the header already shows the new CGPA
            }

            Event::CourseNotFound { id } => {
                self.add_message(format!("Course {} no longer exists", id));
                self.clamp_selection();
            }
        }
    }

    /// Keep the cursor inside the list after it shrinks
    pub fn clamp_selection(&mut self) {
        let last = self.gradebook.len().saturating_sub(1);
        if self.ui_state.selected_row > last {
            self.ui_state.selected_row = last;
        }
        if self.ui_state.scroll_offset > self.ui_state.selected_row {
            self.ui_state.scroll_offset = self.ui_state.selected_row;
        }
    }

    pub fn select_next_row(&mut self) {
        if self.ui_state.selected_row + 1 < self.gradebook.len() {
            self.ui_state.selected_row += 1;
        }
    }

    pub fn select_prev_row(&mut self) {
        if self.ui_state.selected_row > 0 {
            self.ui_state.selected_row -= 1;
        }
    }

    /// Adjust the scroll offset so the selected row is on screen
    pub fn ensure_selection_visible(&mut self, visible_rows: usize) {
        let selected = self.ui_state.selected_row;
        if selected < self.ui_state.scroll_offset {
            self.ui_state.scroll_offset = selected;
        } else if visible_rows > 0 && selected >= self.ui_state.scroll_offset + visible_rows {
            self.ui_state.scroll_offset = selected + 1 - visible_rows;
        }
    }

    /// Grade under the picker cursor
    pub fn picker_grade(cursor: usize) -> GradeSymbol {
        GradeSymbol::ALL[cursor.min(GradeSymbol::ALL.len() - 1)]
    }

    pub fn add_message(&mut self, message: String) {
        if self.messages.len() >= MAX_MESSAGES {
            self.messages.remove(0);
        }
        self.messages.push(message);
    }

    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }
}
