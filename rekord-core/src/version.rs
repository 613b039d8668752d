use crate::{DialectError, Error, Result};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Version reported by (or configured for) a database server.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServerVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ServerVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn at_least(&self, major: u32, minor: u32, patch: u32) -> bool {
        *self >= Self::new(major, minor, patch)
    }
}

impl FromStr for ServerVersion {
    type Err = Error;

    /// Accepts `16`, `8.0`, `3.45.1` and vendor suffixes such as `8.0.36-log` or `15.4 (Debian)`.
    fn from_str(s: &str) -> Result<Self> {
        let numeric = s
            .trim()
            .split(|c: char| !(c.is_ascii_digit() || c == '.'))
            .next()
            .unwrap_or_default();
        let mut parts = numeric.split('.').filter(|v| !v.is_empty());
        let mut next = |required: bool| -> Result<u32> {
            match parts.next() {
                Some(v) => v.parse::<u32>().map_err(|e| {
                    DialectError::InvalidConfiguration(format!("Invalid server version `{s}`: {e}"))
                        .into()
                }),
                None if required => Err(DialectError::InvalidConfiguration(format!(
                    "Invalid server version `{s}`"
                ))
                .into()),
                None => Ok(0),
            }
        };
        Ok(Self {
            major: next(true)?,
            minor: next(false)?,
            patch: next(false)?,
        })
    }
}

impl Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
