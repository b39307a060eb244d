use crate::config::{Config, GameConfig};
use crate::consts;
use lexopt::prelude::*;
use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

pub(crate) static HELP: &str = "\
Usage: sidewinder [options]

Steer with w/a/s/d or the arrow keys; quit with q or Ctrl-C.

Options:
  --config <PATH>          Read configuration from <PATH>
  --width <N>              Board width in cells, wall included  [default: 80]
  --height <N>             Board height in cells, wall included [default: 24]
  --fps <N>                Base horizontal frame rate           [default: 16]
  --fps-factor <RATIO>     Vertical/horizontal speed ratio      [default: 0.65]
  --growth-interval <N>    Length gained per food               [default: 1]
  -h, --help               Show this message and exit
  -V, --version            Show the program version and exit
";

/// Parsed command line: either a game run or an informational exit
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Args {
    Run(RunArgs),
    Help,
    Version,
}

impl Args {
    pub(crate) fn parse() -> Result<Args, lexopt::Error> {
        Args::parse_from(std::env::args_os().skip(1))
    }

    pub(crate) fn parse_from<I>(args: I) -> Result<Args, lexopt::Error>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut run = RunArgs::default();
        // the binary name has already been stripped by the caller
        let mut parser = lexopt::Parser::from_args(args);
        while let Some(arg) = parser.next()? {
            match arg {
                Long("config") => run.config = Some(PathBuf::from(parser.value()?)),
                Long("width") => run.overrides.width = Some(parser.value()?.parse()?),
                Long("height") => run.overrides.height = Some(parser.value()?.parse()?),
                Long("fps") => run.overrides.fps = Some(parser.value()?.parse()?),
                Long("fps-factor") => run.overrides.fps_factor = Some(parser.value()?.parse()?),
                Long("growth-interval") => {
                    run.overrides.growth_interval = Some(parser.value()?.parse()?);
                }
                Short('h') | Long("help") => return Ok(Args::Help),
                Short('V') | Long("version") => return Ok(Args::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Args::Run(run))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct RunArgs {
    /// Explicit configuration file; when absent the default path is tried
    /// and a missing file is tolerated
    pub(crate) config: Option<PathBuf>,
    pub(crate) overrides: Overrides,
}

/// Flag values layered over the configuration file
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Overrides {
    pub(crate) width: Option<u16>,
    pub(crate) height: Option<u16>,
    pub(crate) fps: Option<u32>,
    pub(crate) fps_factor: Option<f64>,
    pub(crate) growth_interval: Option<usize>,
}

/// The session's effective settings: config-file values with CLI flags
/// applied on top, validated
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Options {
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) fps: u32,
    pub(crate) fps_factor: f64,
    pub(crate) growth_interval: usize,
}

impl Options {
    pub(crate) fn resolve(config: &Config, overrides: Overrides) -> Result<Options, UsageError> {
        let GameConfig {
            width,
            height,
            fps,
            fps_factor,
            growth_interval,
        } = config.game;
        let opts = Options {
            width: overrides.width.unwrap_or(width),
            height: overrides.height.unwrap_or(height),
            fps: overrides.fps.unwrap_or(fps),
            fps_factor: overrides.fps_factor.unwrap_or(fps_factor),
            growth_interval: overrides.growth_interval.unwrap_or(growth_interval),
        };
        opts.validate()?;
        Ok(opts)
    }

    fn validate(&self) -> Result<(), UsageError> {
        if self.width < consts::MIN_BOARD_WIDTH {
            return Err(UsageError::Width);
        }
        if self.height < consts::MIN_BOARD_HEIGHT {
            return Err(UsageError::Height);
        }
        if self.fps == 0 {
            return Err(UsageError::Fps);
        }
        if !(self.fps_factor > 0.0 && self.fps_factor <= 1.0) {
            return Err(UsageError::FpsFactor);
        }
        if self.growth_interval == 0 {
            return Err(UsageError::GrowthInterval);
        }
        Ok(())
    }
}

impl Default for Options {
    fn default() -> Options {
        Options {
            width: consts::BOARD_WIDTH,
            height: consts::BOARD_HEIGHT,
            fps: consts::FPS_HORIZONTAL,
            fps_factor: consts::FPS_FACTOR,
            growth_interval: consts::GROWTH_INTERVAL,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum UsageError {
    #[error("--width must be at least {}", consts::MIN_BOARD_WIDTH)]
    Width,
    #[error("--height must be at least {}", consts::MIN_BOARD_HEIGHT)]
    Height,
    #[error("--fps must be at least 1")]
    Fps,
    #[error("--fps-factor must be in (0, 1]")]
    FpsFactor,
    #[error("--growth-interval must be at least 1")]
    GrowthInterval,
}
