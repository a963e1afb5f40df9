use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{self, ClearType},
    ExecutableCommand,
};

use crate::cli::ui::test_mode;

/// Asks for a single confirmation keystroke while painting a countdown.
///
/// Only the keystroke decides: `y`/`Y` confirms, anything else cancels.
/// When the clock reaches zero the prompt keeps waiting under a neutral
/// banner; elapsed time never cancels on the user's behalf.
pub fn confirm_with_countdown(prompt: &str, seconds: u64) -> io::Result<bool> {
    if let Some(scripted) = test_mode::next_confirm(prompt) {
        return Ok(scripted);
    }

    let raw = RawMode::enable()?;
    let mut stdout = io::stdout();
    let deadline = Instant::now() + Duration::from_secs(seconds);
    let mut painted: Option<u64> = None;

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now()).as_secs();
        if painted != Some(remaining) {
            redraw(&mut stdout, prompt, remaining)?;
            painted = Some(remaining);
        }

        if !event::poll(Duration::from_millis(200))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let confirmed = matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y'));
                drop(raw);
                println!();
                return Ok(confirmed);
            }
            _ => {}
        }
    }
}

fn redraw(stdout: &mut Stdout, prompt: &str, remaining: u64) -> io::Result<()> {
    stdout.execute(cursor::MoveToColumn(0))?;
    stdout.execute(terminal::Clear(ClearType::CurrentLine))?;
    if remaining > 0 {
        write!(stdout, "{prompt} [y/N] ({remaining}s) ")?;
    } else {
        write!(stdout, "{prompt} [y/N] (waiting for your answer) ")?;
    }
    stdout.flush()
}

/// Raw mode stays on only while this guard lives.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
