use std::io::{stderr, BufWriter, Stderr};

use crossterm::{
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};

use crate::error::AppError;

type Backend = CrosstermBackend<BufWriter<Stderr>>;

/// Alternate screen in raw mode. Dropping the wrapper without `shutdown`
/// (panic in update or view, early return) still hands the shell back.
pub struct TerminalWrapper {
    inner: Option<Terminal<Backend>>,
}

impl TerminalWrapper {
    pub fn start() -> Result<Self, AppError> {
        enter()?;

        let mut inner = Terminal::new(CrosstermBackend::new(BufWriter::new(stderr())))?;
        inner.clear()?;

        Ok(Self { inner: Some(inner) })
    }

    pub fn shutdown(&mut self) -> Result<(), AppError> {
        if self.inner.take().is_some() {
            leave()?;
        }

        Ok(())
    }

    pub fn size(&self) -> Result<Rect, AppError> {
        let inner = self.inner.as_ref().ok_or(AppError::TerminalNotInitialized)?;
        let size = inner.size()?;

        Ok(Rect::new(0, 0, size.width, size.height))
    }

    pub fn draw(&mut self, view: impl FnMut(&mut Frame<'_>)) -> Result<(), AppError> {
        if let Some(inner) = &mut self.inner {
            inner.draw(view)?;
        }

        Ok(())
    }

    pub fn resize(&mut self, width: u16, height: u16) -> Result<(), AppError> {
        if let Some(inner) = &mut self.inner {
            inner.resize(Rect::new(0, 0, width, height))?;
        }

        Ok(())
    }
}

impl Drop for TerminalWrapper {
    fn drop(&mut self) {
        if let Err(error) = self.shutdown() {
            tracing::error!("restoring terminal failed: {:?}", error);
        }
    }
}

fn enter() -> Result<(), AppError> {
    stderr().execute(EnterAlternateScreen)?;
    terminal::enable_raw_mode()?;

    Ok(())
}

fn leave() -> Result<(), AppError> {
    terminal::disable_raw_mode()?;
    stderr().execute(LeaveAlternateScreen)?;

    Ok(())
}
