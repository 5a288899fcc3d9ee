use gradepoint_core::domain::{Course, CourseField, GradeSymbol};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::model::{InputMode, TuiModel, ViewMode};

const TITLE: &str = "CGPA Calculator";
const ACCENT: Color = Color::Rgb(76, 102, 159);
const FAILING: Color = Color::Rgb(255, 68, 68);

/// Rows taken by everything except the course list
const CHROME_HEIGHT: u16 = 1 + 3 + 3 + 2;

/// The View component of MVU - responsible for rendering the model
pub struct TuiView;

impl TuiView {
    /// Render the entire TUI based on the current model state
    pub fn render(model: &TuiModel, frame: &mut Frame) {
        let size = frame.area();

        if model.mode == ViewMode::Intro {
            Self::render_intro(frame, size);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Length(3), // CGPA header
                Constraint::Min(0),    // Course list
                Constraint::Length(3), // Status bar
            ])
            .split(size);

        Self::render_title_bar(frame, chunks[0]);
        Self::render_cgpa_header(model, frame, chunks[1]);
        Self::render_course_list(model, frame, chunks[2]);
        Self::render_status_bar(model, frame, chunks[3]);

        match &model.mode {
            ViewMode::GradePicker { cursor, .. } => Self::render_grade_picker(model, *cursor, frame, size),
            ViewMode::Help => Self::render_help(frame, size),
            _ => {}
        }
    }

    /// How many course rows fit on a terminal of the given height
    pub fn visible_course_rows(terminal_height: u16) -> usize {
        terminal_height.saturating_sub(CHROME_HEIGHT) as usize
    }

    fn render_intro(frame: &mut Frame, area: Rect) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(Span::styled(TITLE, bold.fg(Color::White))),
            Line::from(""),
            Line::from("Track your academic progress with ease"),
            Line::from(""),
            Line::from("  ◆ Calculate CGPA"),
            Line::from("  ◆ Track Progress"),
            Line::from("  ◆ Grade Analysis"),
            Line::from(""),
            Line::from(vec![
                Span::raw("Press "),
                Span::styled("Enter", bold.fg(Color::Yellow)),
                Span::raw(" to get started, "),
                Span::styled("q", bold.fg(Color::Yellow)),
                Span::raw(" to quit"),
            ]),
        ];

        let popup_area = Self::centered_rect(60, 50, area);
        let intro = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White).bg(ACCENT))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        frame.render_widget(intro, popup_area);
    }

    fn render_title_bar(frame: &mut Frame, area: Rect) {
        let title_paragraph = Paragraph::new(TITLE)
            .style(Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);

        frame.render_widget(title_paragraph, area);
    }

    fn render_cgpa_header(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::raw("Current CGPA  "),
            Span::styled(
                model.gradebook.cgpa().to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]);

        let header = Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);

        frame.render_widget(header, area);
    }

    fn render_course_list(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let editing = match &model.input.mode {
            InputMode::Editing { id, field } => Some((*id, *field)),
            InputMode::None => None,
        };

        let items: Vec<ListItem> = model
            .gradebook
            .courses()
            .iter()
            .enumerate()
            .skip(model.ui_state.scroll_offset)
            .take(visible.max(1))
            .map(|(index, course)| {
                let selected = index == model.ui_state.selected_row;
                let focus = if selected {
                    Some(model.ui_state.selected_field)
                } else {
                    None
                };
                let editing_field = editing.filter(|(id, _)| *id == course.id).map(|(_, f)| f);

                let line = Self::course_line(model, index, course, focus, editing_field);
                let style = if selected {
                    Style::default().bg(Color::DarkGray)
                } else {
                    Style::default()
                };
                ListItem::new(line).style(style)
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Courses"));

        frame.render_widget(list, area);
    }

    fn course_line<'a>(
        model: &TuiModel,
        index: usize,
        course: &'a Course,
        focus: Option<CourseField>,
        editing: Option<CourseField>,
    ) -> Line<'a> {
        let field_style = |field: CourseField| {
            if editing == Some(field) {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else if focus == Some(field) {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            }
        };

        let text_cell = |text: &str, placeholder: &str, width: usize, field: CourseField| {
            let mut shown = if text.is_empty() && editing != Some(field) {
                placeholder.to_string()
            } else {
                text.to_string()
            };
            if editing == Some(field) {
                shown.push('_');
            }
            let style = if text.is_empty() && editing != Some(field) && focus != Some(field) {
                Style::default().fg(Color::Gray)
            } else {
                field_style(field)
            };
            Span::styled(format!("{:<width$}", shown, width = width), style)
        };

        let mut grade_style = field_style(CourseField::Grade).add_modifier(Modifier::BOLD);
        if model.settings.highlight_failing && course.grade.is_failing() {
            grade_style = grade_style.fg(FAILING);
        }

        Line::from(vec![
            Span::styled(
                format!("Course {:<4}", index + 1),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            text_cell(&course.name, CourseField::Name.label(), 28, CourseField::Name),
            Span::raw(" "),
            text_cell(&course.credit_hours, CourseField::CreditHours.label(), 14, CourseField::CreditHours),
            Span::raw(" "),
            Span::styled(format!(" {:<3}▾", course.grade.to_string()), grade_style),
        ])
    }

    fn render_status_bar(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        // Message line
        let message = match &model.input.mode {
            InputMode::Editing { field, .. } => format!("Editing {} - Enter to finish", field.label()),
            InputMode::None => model.last_message().unwrap_or_default().to_string(),
        };
        frame.render_widget(
            Paragraph::new(message).style(Style::default().fg(Color::Yellow)),
            chunks[0],
        );

        // Status line
        let status_paragraph = Paragraph::new(Self::build_status_text(model))
            .style(Style::default().fg(Color::White).bg(Color::DarkGray));
        frame.render_widget(status_paragraph, chunks[1]);

        // Key hints
        let hints_paragraph = Paragraph::new(Self::get_key_hints(model))
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(hints_paragraph, chunks[2]);
    }

    /// Build status text for the status bar
    fn build_status_text(model: &TuiModel) -> String {
        let totals = model.gradebook.totals();
        let course_word = if model.gradebook.len() == 1 { "course" } else { "courses" };

        [
            format!("{} {}", model.gradebook.len(), course_word),
            format!("{} counted", totals.counted),
            format!("{} credits", Self::format_credits(totals.total_credits)),
        ]
        .join(" | ")
    }

    /// Two decimals at most, without trailing zeros: `7`, `3.5`, `0.3`
    fn format_credits(credits: f64) -> String {
        let fixed = format!("{:.2}", credits);
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    }

    /// Get key hints for current mode
    fn get_key_hints(model: &TuiModel) -> String {
        if model.is_editing() {
            return "Type to edit | Backspace Delete | Enter/Esc Done | Tab Next field".to_string();
        }

        match &model.mode {
            ViewMode::Intro => "Enter Start | q Quit",
            ViewMode::Courses => "? Help | a Add | d Remove | Enter Edit | Tab Field | q Quit",
            ViewMode::GradePicker { .. } => "j/k Move | Enter Select | Esc Close",
            ViewMode::Help => "Any key to close",
        }
        .to_string()
    }

    fn render_grade_picker(model: &TuiModel, cursor: usize, frame: &mut Frame, area: Rect) {
        let popup_area = Self::centered_rect(40, 60, area);
        frame.render_widget(Clear, popup_area);

        let items: Vec<ListItem> = GradeSymbol::ALL
            .iter()
            .enumerate()
            .map(|(index, grade)| {
                let failing = model.settings.highlight_failing && grade.is_failing();
                let mut spans = vec![Span::styled(
                    format!("{:<4}", grade.to_string()),
                    Style::default().add_modifier(Modifier::BOLD),
                )];
                if model.settings.show_grade_points {
                    spans.push(Span::raw(format!("({} points)", grade.points())));
                }

                let mut style = if failing {
                    Style::default().fg(FAILING)
                } else {
                    Style::default()
                };
                if index == cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                ListItem::new(Line::from(spans)).style(style)
            })
            .collect();

        let picker = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Select Grade"));

        frame.render_widget(picker, popup_area);
    }

    fn render_help(frame: &mut Frame, area: Rect) {
        let underlined = Style::default().add_modifier(Modifier::UNDERLINED);
        let help_text = vec![
            Line::from(Span::styled("Navigation:", underlined)),
            Line::from("  ↑/k ↓/j - Previous / next course"),
            Line::from("  ←/h →/l Tab - Previous / next field"),
            Line::from(""),
            Line::from(Span::styled("Editing:", underlined)),
            Line::from("  Enter - Edit name or credits, pick a grade"),
            Line::from("  a - Add a course"),
            Line::from("  d/x - Remove the selected course"),
            Line::from(""),
            Line::from(Span::styled("Grades:", underlined)),
            Line::from("  O=10 A+=9 A=8 B+=7 B=6 RA=0"),
            Line::from("  RA credits still count toward the average"),
            Line::from(""),
            Line::from("  ? - Show this help"),
            Line::from("  Ctrl+C / Esc / q - Quit"),
        ];

        let popup_area = Self::centered_rect(60, 70, area);
        frame.render_widget(Clear, popup_area);

        let help = Paragraph::new(help_text)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .wrap(Wrap { trim: false });

        frame.render_widget(help, popup_area);
    }

    /// Helper to create centered rectangle
    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
