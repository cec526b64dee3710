//! Units of measure attached to metric values.
//!
//! The set mirrors the units accepted by CloudWatch. Anything else is kept
//! verbatim in [`Unit::Other`] so newer units pass through without a release.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    #[default]
    None,
    Seconds,
    Microseconds,
    Milliseconds,
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
    Bits,
    Kilobits,
    Megabits,
    Gigabits,
    Terabits,
    Percent,
    Count,
    BytesSecond,
    KilobytesSecond,
    MegabytesSecond,
    GigabytesSecond,
    TerabytesSecond,
    BitsSecond,
    KilobitsSecond,
    MegabitsSecond,
    GigabitsSecond,
    TerabitsSecond,
    CountSecond,
    /// Unit symbol not in the known set; carried through unchanged.
    Other(String),
}

impl Unit {
    /// Wire symbol (e.g. `"Bytes/Second"`).
    pub fn as_str(&self) -> &str {
        match self {
            Unit::None => "None",
            Unit::Seconds => "Seconds",
            Unit::Microseconds => "Microseconds",
            Unit::Milliseconds => "Milliseconds",
            Unit::Bytes => "Bytes",
            Unit::Kilobytes => "Kilobytes",
            Unit::Megabytes => "Megabytes",
            Unit::Gigabytes => "Gigabytes",
            Unit::Terabytes => "Terabytes",
            Unit::Bits => "Bits",
            Unit::Kilobits => "Kilobits",
            Unit::Megabits => "Megabits",
            Unit::Gigabits => "Gigabits",
            Unit::Terabits => "Terabits",
            Unit::Percent => "Percent",
            Unit::Count => "Count",
            Unit::BytesSecond => "Bytes/Second",
            Unit::KilobytesSecond => "Kilobytes/Second",
            Unit::MegabytesSecond => "Megabytes/Second",
            Unit::GigabytesSecond => "Gigabytes/Second",
            Unit::TerabytesSecond => "Terabytes/Second",
            Unit::BitsSecond => "Bits/Second",
            Unit::KilobitsSecond => "Kilobits/Second",
            Unit::MegabitsSecond => "Megabits/Second",
            Unit::GigabitsSecond => "Gigabits/Second",
            Unit::TerabitsSecond => "Terabits/Second",
            Unit::CountSecond => "Count/Second",
            Unit::Other(s) => s,
        }
    }

    /// True when the unit is one of the known CloudWatch symbols.
    pub fn is_known(&self) -> bool {
        !matches!(self, Unit::Other(_))
    }
}

impl FromStr for Unit {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s {
            "None" => Unit::None,
            "Seconds" => Unit::Seconds,
            "Microseconds" => Unit::Microseconds,
            "Milliseconds" => Unit::Milliseconds,
            "Bytes" => Unit::Bytes,
            "Kilobytes" => Unit::Kilobytes,
            "Megabytes" => Unit::Megabytes,
            "Gigabytes" => Unit::Gigabytes,
            "Terabytes" => Unit::Terabytes,
            "Bits" => Unit::Bits,
            "Kilobits" => Unit::Kilobits,
            "Megabits" => Unit::Megabits,
            "Gigabits" => Unit::Gigabits,
            "Terabits" => Unit::Terabits,
            "Percent" => Unit::Percent,
            "Count" => Unit::Count,
            "Bytes/Second" => Unit::BytesSecond,
            "Kilobytes/Second" => Unit::KilobytesSecond,
            "Megabytes/Second" => Unit::MegabytesSecond,
            "Gigabytes/Second" => Unit::GigabytesSecond,
            "Terabytes/Second" => Unit::TerabytesSecond,
            "Bits/Second" => Unit::BitsSecond,
            "Kilobits/Second" => Unit::KilobitsSecond,
            "Megabits/Second" => Unit::MegabitsSecond,
            "Gigabits/Second" => Unit::GigabitsSecond,
            "Terabits/Second" => Unit::TerabitsSecond,
            "Count/Second" => Unit::CountSecond,
            other => Unit::Other(other.to_string()),
        };
        Ok(unit)
    }
}

impl From<&str> for Unit {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(u) => u,
            Err(never) => match never {},
        }
    }
}

impl From<String> for Unit {
    fn from(s: String) -> Self {
        Unit::from(s.as_str())
    }
}

impl From<Unit> for String {
    fn from(u: Unit) -> Self {
        match u {
            Unit::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
