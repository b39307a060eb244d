use crossterm::event::{poll, read, KeyEvent};
use crossterm::{cursor, execute, terminal};
use std::io;
use std::time::Duration;

/// Wait up to `timeout` for a key press.  Returns `Ok(None)` when the wait
/// times out or the event was not a key press; this is the loop's single
/// suspension point per tick.
pub(crate) fn read_key(timeout: Duration) -> io::Result<Option<KeyEvent>> {
    if !poll(timeout)? {
        return Ok(None);
    }
    Ok(read()?.as_key_press_event())
}

/// Scoped terminal-state acquisition: raw mode on and cursor hidden while
/// the game runs, restored on every exit path.
///
/// Restoration is idempotent (a second call is a no-op) and best-effort: a
/// failure is reported on stderr but never blocks shutdown.  `Drop` restores
/// as a backstop for early error returns.
#[derive(Debug)]
pub(crate) struct TermGuard {
    restored: bool,
}

impl TermGuard {
    pub(crate) fn acquire() -> io::Result<TermGuard> {
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), cursor::Hide) {
            // don't leave raw mode dangling if only the cursor toggle failed
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(TermGuard { restored: false })
    }

    pub(crate) fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        if let Err(e) = terminal::disable_raw_mode() {
            eprintln!("warning: failed to restore terminal mode: {e}");
        }
        if let Err(e) = execute!(io::stdout(), cursor::Show) {
            eprintln!("warning: failed to restore cursor: {e}");
        }
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        self.restore();
    }
}
