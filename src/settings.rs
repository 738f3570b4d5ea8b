//! Speed settings file: one whitespace-delimited integer in [1, 10].
//!
//! Reads are fail-soft. Every failure is reported to the caller and the
//! previously applied speed stays in effect.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default settings file, looked up relative to the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "settings.txt";

/// Longest token read from the file. Anything past it cannot change the outcome:
/// the digit run is already out of range or the token is already garbage.
const MAX_TOKEN_LEN: usize = 32;

/// Rotation speed in degrees per tick, always within [`SpeedLevel::MIN`, `SpeedLevel::MAX`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 10;

    /// `None` when `value` is out of range
    pub fn new(value: i64) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then(|| Self(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Degrees the blades advance per tick
    pub fn degrees_per_tick(self) -> f32 {
        f32::from(self.0)
    }
}

impl Default for SpeedLevel {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for SpeedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Could not read settings file: {}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Settings file {} holds no speed value", .path.display())]
    Empty { path: PathBuf },

    #[error("Invalid speed value ({token:?}) in {}. Must be an integer between 1 and 10.", .path.display())]
    Unparsable { path: PathBuf, token: String },

    #[error("Invalid speed value ({value}) in {}. Must be between 1 and 10.", .path.display())]
    OutOfRange { path: PathBuf, value: i64 },
}

/// Speed source backed by a text file, re-read on every poll
#[derive(Debug, Clone)]
pub struct SpeedSettings {
    path: PathBuf,
}

impl SpeedSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the file. The file is closed before this returns.
    ///
    /// Only the first token is read; the rest of the file is never touched.
    pub fn read(&self) -> Result<SpeedLevel, SettingsError> {
        let unavailable = |source| SettingsError::Unavailable {
            path: self.path.clone(),
            source,
        };

        let file = File::open(&self.path).map_err(unavailable)?;
        let token = first_token(BufReader::new(file)).map_err(unavailable)?;
        parse_token(&self.path, &token)
    }

    /// Poll the file and apply a valid value to `speed`, reporting the outcome
    ///
    /// Returns true if `speed` was updated. Failures are logged and leave
    /// `speed` as it was.
    pub fn poll(&self, speed: &mut SpeedLevel) -> bool {
        match self.read() {
            Ok(level) => {
                *speed = level;
                println!("Turbine speed updated to: {}", level);
                log::debug!("speed {} loaded from {}", level, self.path.display());
                true
            }
            Err(e) => {
                log::error!("{}", e);
                false
            }
        }
    }
}

impl Default for SpeedSettings {
    fn default() -> Self {
        Self::new(DEFAULT_SETTINGS_FILE)
    }
}

/// Parse the first whitespace-delimited token; anything after it is ignored
pub fn parse_speed(path: &Path, contents: &str) -> Result<SpeedLevel, SettingsError> {
    let token = contents.split_whitespace().next().unwrap_or_default();
    parse_token(path, token.as_bytes())
}

/// Skip leading whitespace and collect bytes up to the next whitespace,
/// stopping after [`MAX_TOKEN_LEN`] bytes
fn first_token(mut reader: impl BufRead) -> io::Result<Vec<u8>> {
    let mut token = Vec::new();

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(token);
        }

        let mut consumed = 0;
        for &byte in buf {
            consumed += 1;
            if byte.is_ascii_whitespace() {
                if token.is_empty() {
                    continue;
                }
                return Ok(token);
            }
            token.push(byte);
            if token.len() == MAX_TOKEN_LEN {
                return Ok(token);
            }
        }
        reader.consume(consumed);
    }
}

/// Validate a token: an optional sign then a leading digit run, which must land in [1, 10]
///
/// Trailing bytes after the digits are ignored, so "5abc" reads as 5 and "7.5" as 7.
/// A digit run too large for `i64` saturates and is reported as out of range.
fn parse_token(path: &Path, token: &[u8]) -> Result<SpeedLevel, SettingsError> {
    if token.is_empty() {
        return Err(SettingsError::Empty { path: path.to_path_buf() });
    }

    let value = leading_integer(token).ok_or_else(|| SettingsError::Unparsable {
        path: path.to_path_buf(),
        token: String::from_utf8_lossy(token).into_owned(),
    })?;

    SpeedLevel::new(value).ok_or_else(|| SettingsError::OutOfRange {
        path: path.to_path_buf(),
        value,
    })
}

/// Signed integer prefix of `token`, saturating at the `i64` bounds. `None` without digits.
fn leading_integer(token: &[u8]) -> Option<i64> {
    let (negative, rest) = match token.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, token),
    };

    let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    let value = rest[..digits].iter().try_fold(0i64, |acc, &d| {
        let digit = i64::from(d - b'0');
        acc.checked_mul(10).and_then(|acc| {
            if negative {
                acc.checked_sub(digit)
            } else {
                acc.checked_add(digit)
            }
        })
    });

    Some(value.unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}
