// Composition root: wires config, the core gradebook and the terminal UI together

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gradepoint_core::app::Gradebook;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::tui::{TuiMessage, TuiModel, TuiUpdate, TuiView};

/// The interactive course form
pub struct GradepointApp {
    tui_model: TuiModel,
}

impl GradepointApp {
    pub fn new(gradebook: Gradebook, config: &Config) -> Self {
        Self {
            tui_model: TuiModel::new(gradebook, config.ui.clone()),
        }
    }

    pub fn model(&self) -> &TuiModel {
        &self.tui_model
    }

    /// Take over the terminal, run until the user quits, then restore it
    pub fn run(mut self) -> Result<Gradebook> {
        info!("Starting course form");

        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

        let result = run_main_loop(&mut self.tui_model, &mut terminal);

        // Restore the terminal even when the loop failed
        if let Err(e) = shutdown(&mut terminal) {
            error!("Failed to restore terminal: {:#}", e);
        }

        result.map(|()| self.tui_model.gradebook)
    }
}

/// Main loop: draw, wait for a key, apply it
pub fn run_main_loop<B: Backend>(tui_model: &mut TuiModel, terminal: &mut Terminal<B>) -> Result<()> {
    loop {
        if let Ok(size) = terminal.size() {
            TuiUpdate::handle_resize(tui_model, size.width, size.height)?;
            tui_model.ensure_selection_visible(TuiView::visible_course_rows(size.height));
        }

        terminal.draw(|frame| TuiView::render(tui_model, frame))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        if let Event::Key(key_event) = event::read()? {
            if key_event.kind != KeyEventKind::Press {
                continue;
            }

            let message = TuiUpdate::handle_key(tui_model, key_event.code, key_event.modifiers)?;
            if message != TuiMessage::None {
                debug!("Key {:?} produced {:?}", key_event.code, message);
            }
            TuiUpdate::dispatch(tui_model, message);
        }

        if tui_model.should_quit {
            info!("Quit requested, exiting main loop");
            break;
        }
    }

    Ok(())
}

fn shutdown<B: Backend + io::Write>(terminal: &mut Terminal<B>) -> Result<()> {
    info!("Shutting down course form");

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
