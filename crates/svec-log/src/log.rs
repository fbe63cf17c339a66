use std::{
    io::Write,
    sync::{OnceLock, Mutex},
};

use core::str::FromStr;

use termcolor::{WriteColor, StandardStream, ColorChoice};

pub use termcolor::{ColorSpec, Color};

use rustc_hash::FxHashMap;

use compact_str::CompactString;

use crate::*;

use fmt::SegmentSpec;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CustomFmt(usize);

#[repr(i8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Level {
    Always = -1,
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

pub enum LevelFmt {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Other(CustomFmt, Level),
}

impl LevelFmt {

    #[inline(always)]
    fn level(&self) -> Level {
        match self {
            Self::Error => Level::Error,
            Self::Warn => Level::Warn,
            Self::Info => Level::Info,
            Self::Debug => Level::Debug,
            Self::Trace => Level::Trace,
            Self::Other(_, level) => *level,
        }
    }
}

impl FromStr for Level {

    type Err = ();

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("warn") {
            Ok(Self::Warn)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("trace") {
            Ok(Self::Trace)
        } else {
            Err(())
        }
    }
}

/// Per-target maximum levels, in `RUST_LOG` syntax.
///
/// Entries are separated by commas and are either a bare level, which sets the
/// base level, or `target=level`. A target matches itself and every module
/// below it, the longest `::` prefix wins. Unparseable entries are ignored.
#[derive(Clone, Debug)]
pub struct Filter {
    target_levels: FxHashMap<CompactString, Level>,
    base_level: Level,
}

impl Default for Filter {

    fn default() -> Self {
        Self {
            target_levels: FxHashMap::default(),
            base_level: Level::Error,
        }
    }
}

impl Filter {

    pub fn parse(spec: &str) -> Self {
        let mut filter = Self::default();
        for arg in spec.split(',') {
            let (module, level) = match arg.find('=') {
                Some(j) => (Some(arg[..j].trim()), arg[j + 1..].trim()),
                None => (None, arg.trim()),
            };
            let Ok(level) = Level::from_str(level) else {
                continue
            };
            match module {
                Some(module) => {
                    let entry = filter.target_levels
                        .entry(CompactString::new(module))
                        .or_insert(level);
                    *entry = (*entry).min(level);
                },
                None => filter.base_level = level,
            }
        }
        filter
    }

    pub fn from_env() -> Self {
        match std::env::var("RUST_LOG") {
            Ok(env) => Self::parse(&env),
            Err(_) => Self::default(),
        }
    }

    pub fn level(&self, target: &str) -> Level {
        let mut substr = target;
        if let Some(&level) = self.target_levels.get(substr) {
            return level
        }
        while let Some(i) = substr.rfind("::") {
            substr = &substr[..i];
            if let Some(&level) = self.target_levels.get(substr) {
                return level
            }
        }
        self.base_level
    }

    #[inline(always)]
    pub fn enabled(&self, target: &str, level: Level) -> bool {
        level <= self.level(target)
    }
}

pub(crate) struct Logger<W: WriteColor> {
    out: W,
    info_fmt: LogFmt,
    warn_fmt: LogFmt,
    error_fmt: LogFmt,
    debug_fmt: LogFmt,
    trace_fmt: LogFmt,
    custom_fmt: Vec<LogFmt>,
    filter: Filter,
}

impl<W: WriteColor> Logger<W> {

    fn new(out: W, filter: Filter) -> Self {
        Self {
            out,
            info_fmt: LogFmt::tagged("info", Color::Green),
            warn_fmt: LogFmt::tagged("warn", Color::Yellow),
            error_fmt: LogFmt::tagged("error", Color::Red),
            debug_fmt: LogFmt::tagged("debug", Color::Blue),
            trace_fmt: LogFmt::tagged("trace", Color::Magenta),
            custom_fmt: Vec::new(),
            filter,
        }
    }

    fn level_fmt_mut(&mut self, level: Level) -> &mut LogFmt {
        match level {
            Level::Always | Level::Error => &mut self.error_fmt,
            Level::Warn => &mut self.warn_fmt,
            Level::Info => &mut self.info_fmt,
            Level::Debug => &mut self.debug_fmt,
            Level::Trace => &mut self.trace_fmt,
        }
    }

    fn log(&mut self, target: &str, level: LevelFmt, msg: core::fmt::Arguments) -> Result<bool> {
        if !self.filter.enabled(target, level.level()) {
            return Ok(false)
        }
        let fmt = match level {
            LevelFmt::Error => &self.error_fmt,
            LevelFmt::Warn => &self.warn_fmt,
            LevelFmt::Info => &self.info_fmt,
            LevelFmt::Debug => &self.debug_fmt,
            LevelFmt::Trace => &self.trace_fmt,
            LevelFmt::Other(CustomFmt(index), _) => {
                self.custom_fmt
                    .get(index)
                    .ok_or(LogError::UnknownFormat { index })?
            },
        };
        for segment in fmt {
            match segment {
                SegmentSpec::Message(log_spec) => {
                    if let Some(color_spec) = &log_spec.color_spec {
                        self.out.set_color(color_spec)?;
                        write!(self.out, "{}", msg)?;
                        self.out.reset()?;
                    } else {
                        write!(self.out, "{}", msg)?;
                    }
                },
                SegmentSpec::Text(text, log_spec) => {
                    if let Some(color_spec) = &log_spec.color_spec {
                        self.out.set_color(color_spec)?;
                        self.out.write_all(text.as_bytes())?;
                        self.out.reset()?;
                    } else {
                        self.out.write_all(text.as_bytes())?;
                    }
                },
            }
        }
        self.out.write_all(b"\n")?;
        Ok(true)
    }
}

static LOGGER: OnceLock<Mutex<Logger<StandardStream>>> = OnceLock::new();

/// Installs the global stderr logger, filtered by `RUST_LOG`.
///
/// Later calls are ignored.
pub fn init() {
    init_with(Filter::from_env())
}

pub fn init_with(filter: Filter) {
    LOGGER.get_or_init(|| Mutex::new(
        Logger::new(StandardStream::stderr(ColorChoice::Auto), filter)
    ));
}

fn with_logger<R>(f: impl FnOnce(&mut Logger<StandardStream>) -> Result<R>) -> Result<R> {
    let logger = LOGGER.get().ok_or(LogError::Uninitialized)?;
    let mut logger = logger.lock().map_err(|_| LogError::Poisoned)?;
    f(&mut logger)
}

/// Rebuilds the format used for records at `level`.
pub fn set_fmt(level: Level, mut f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    with_logger(|logger| {
        let mut builder = LogFmtBuilder::new(logger.level_fmt_mut(level));
        f(&mut builder);
        Ok(())
    })
}

pub fn custom_fmt(fmt: LogFmt) -> Result<CustomFmt> {
    with_logger(|logger| {
        logger.custom_fmt.push(fmt);
        Ok(CustomFmt(logger.custom_fmt.len() - 1))
    })
}

/// Returns whether the record was written. Before [`init`] nothing is written.
pub fn log(target: &str, level: LevelFmt, args: core::fmt::Arguments) -> Result<bool> {
    match LOGGER.get() {
        Some(logger) => logger
            .lock()
            .map_err(|_| LogError::Poisoned)?
            .log(target, level, args),
        None => Ok(false),
    }
}

#[macro_export]
macro_rules! error {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Error, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! warn {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Warn, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! info {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Info, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! debug {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Debug, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! trace {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Trace, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}
