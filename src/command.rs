use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A resolved input for one tick.  Keys that map to nothing (and ticks with
/// no key at all) produce no command, and the snake continues straight.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Turn(Direction),
    Quit,
    /// Dev: re-arm the growth throttle with a wide interval
    GrowBurst,
    /// Dev: re-arm the growth throttle with a very wide interval
    GrowBurstLarge,
    /// Dev: restore the default growth interval
    GrowReset,
    /// Dev: jump the horizontal frame rate up
    SpeedUp,
    /// Dev: raise the horizontal frame rate by one
    SpeedUpSmall,
    /// Dev: relocate the food dot
    RelocateFood,
    /// One-way latch enabling the dev commands above
    EnableDevMode,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w') | KeyCode::Up) => {
                Some(Command::Turn(Direction::North))
            }
            (KeyModifiers::NONE, KeyCode::Char('s') | KeyCode::Down) => {
                Some(Command::Turn(Direction::South))
            }
            (KeyModifiers::NONE, KeyCode::Char('a') | KeyCode::Left) => {
                Some(Command::Turn(Direction::West))
            }
            (KeyModifiers::NONE, KeyCode::Char('d') | KeyCode::Right) => {
                Some(Command::Turn(Direction::East))
            }
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('i')) => Some(Command::GrowBurst),
            (KeyModifiers::NONE, KeyCode::Char('u')) => Some(Command::GrowBurstLarge),
            (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Command::GrowReset),
            (KeyModifiers::NONE, KeyCode::Char('e')) => Some(Command::SpeedUp),
            (KeyModifiers::NONE, KeyCode::Char('y')) => Some(Command::SpeedUpSmall),
            (KeyModifiers::NONE, KeyCode::Char('n')) => Some(Command::RelocateFood),
            (KeyModifiers::NONE, KeyCode::Char('t')) => Some(Command::EnableDevMode),
            _ => None,
        }
    }

    /// Commands which are no-ops until dev mode has been enabled
    pub(crate) fn is_dev(self) -> bool {
        matches!(
            self,
            Command::GrowBurst
                | Command::GrowBurstLarge
                | Command::GrowReset
                | Command::SpeedUp
                | Command::SpeedUpSmall
                | Command::RelocateFood
        )
    }
}
