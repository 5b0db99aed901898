//! Parameter value types and their TR-069 wire encoding.
//!
//! On the wire every parameter value is a string. Numbers use their decimal
//! form, booleans `true`/`false` (`1`/`0` accepted on input), date-times
//! ISO 8601 with a `Z` suffix, binary blobs hex. List-valued parameters are
//! comma-separated strings of items.

use std::fmt;
use std::net::IpAddr;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::schema::ParamKind;

/// The dateTime value TR-069 uses for "unknown time".
pub const UNKNOWN_TIME: &str = "0001-01-01T00:00:00Z";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("invalid boolean '{0}'")]
    InvalidBoolean(String),
    #[error("invalid {kind} '{value}'")]
    InvalidNumber { kind: &'static str, value: String },
    #[error("invalid dateTime '{0}'")]
    InvalidDateTime(String),
    #[error("invalid hexBinary '{0}'")]
    InvalidHexBinary(String),
}

/// A Rust type that can hold a TR-069 parameter value.
pub trait ParamValue: Sized {
    const KIND: ParamKind;

    /// Encode as the CWMP wire string.
    fn to_wire(&self) -> String;

    /// Decode from the CWMP wire string.
    fn from_wire(wire: &str) -> Result<Self, ValueError>;
}

impl ParamValue for String {
    const KIND: ParamKind = ParamKind::String;

    fn to_wire(&self) -> String {
        self.clone()
    }

    fn from_wire(wire: &str) -> Result<Self, ValueError> {
        Ok(wire.to_string())
    }
}

impl ParamValue for bool {
    const KIND: ParamKind = ParamKind::Boolean;

    fn to_wire(&self) -> String {
        if *self { "true" } else { "false" }.to_string()
    }

    fn from_wire(wire: &str) -> Result<Self, ValueError> {
        match wire.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(ValueError::InvalidBoolean(other.to_string())),
        }
    }
}

macro_rules! integer_value {
    ($($ty:ty => $kind:ident, $label:literal;)*) => {
        $(
            impl ParamValue for $ty {
                const KIND: ParamKind = ParamKind::$kind;

                fn to_wire(&self) -> String {
                    self.to_string()
                }

                fn from_wire(wire: &str) -> Result<Self, ValueError> {
                    wire.trim().parse().map_err(|_| ValueError::InvalidNumber {
                        kind: $label,
                        value: wire.to_string(),
                    })
                }
            }
        )*
    };
}

integer_value! {
    i32 => Int, "int";
    u32 => UnsignedInt, "unsignedInt";
    i64 => Long, "long";
    u64 => UnsignedLong, "unsignedLong";
}

impl ParamValue for DateTime<Utc> {
    const KIND: ParamKind = ParamKind::DateTime;

    fn to_wire(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    fn from_wire(wire: &str) -> Result<Self, ValueError> {
        let text = wire.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
            return Ok(parsed.with_timezone(&Utc));
        }
        // Without a zone designator the value is local time; treat it as UTC.
        NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f"))
            .map(|naive| naive.and_utc())
            .map_err(|_| ValueError::InvalidDateTime(wire.to_string()))
    }
}

/// Binary blob, hex encoded on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct HexBinary(pub Vec<u8>);

impl HexBinary {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for HexBinary {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl ParamValue for HexBinary {
    const KIND: ParamKind = ParamKind::HexBinary;

    fn to_wire(&self) -> String {
        hex::encode(&self.0)
    }

    fn from_wire(wire: &str) -> Result<Self, ValueError> {
        hex::decode(wire.trim())
            .map(Self)
            .map_err(|_| ValueError::InvalidHexBinary(wire.to_string()))
    }
}

impl Serialize for HexBinary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for HexBinary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_wire(&text).map_err(serde::de::Error::custom)
    }
}

/// Instance identifier of a table row.
///
/// A non-volatile handle for the row that survives renumbering. Values the
/// device assigns itself carry the `cpe-` prefix; once a management system
/// has set an alias the device does not change it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alias(String);

impl Alias {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Alias the device assigns to a row it created itself.
    pub fn cpe_assigned(instance: usize) -> Self {
        Self(format!("cpe-{instance}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_cpe_assigned(&self) -> bool {
        self.0.starts_with("cpe-")
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Alias {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl ParamValue for Alias {
    const KIND: ParamKind = ParamKind::Alias;

    fn to_wire(&self) -> String {
        self.0.clone()
    }

    fn from_wire(wire: &str) -> Result<Self, ValueError> {
        Ok(Self(wire.to_string()))
    }
}

/// IPv4 or IPv6 address in its string form. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IpAddress(String);

impl IpAddress {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse the address; `None` when empty or malformed.
    pub fn parse(&self) -> Option<IpAddr> {
        self.0.trim().parse().ok()
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<IpAddr> for IpAddress {
    fn from(addr: IpAddr) -> Self {
        Self(addr.to_string())
    }
}

impl From<&str> for IpAddress {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl ParamValue for IpAddress {
    const KIND: ParamKind = ParamKind::IpAddress;

    fn to_wire(&self) -> String {
        self.0.clone()
    }

    fn from_wire(wire: &str) -> Result<Self, ValueError> {
        Ok(Self(wire.trim().to_string()))
    }
}

/// Conversion accepted by the generated `with_*` builders.
///
/// Implemented on the field type rather than on the argument, so a bare
/// literal takes the field's type: `with_max_channels(8)` needs no suffix.
/// Every value type converts from itself; the string-like types also accept
/// `&str`, and `IpAddress` accepts a parsed `IpAddr`.
pub trait FromArg<A>: Sized {
    fn from_arg(arg: A) -> Self;
}

impl<T: ParamValue> FromArg<T> for T {
    fn from_arg(arg: T) -> T {
        arg
    }
}

impl FromArg<&str> for String {
    fn from_arg(arg: &str) -> Self {
        arg.to_string()
    }
}

impl FromArg<&str> for Alias {
    fn from_arg(arg: &str) -> Self {
        Alias::from(arg)
    }
}

impl FromArg<&str> for IpAddress {
    fn from_arg(arg: &str) -> Self {
        IpAddress::from(arg)
    }
}

impl FromArg<IpAddr> for IpAddress {
    fn from_arg(arg: IpAddr) -> Self {
        IpAddress::from(arg)
    }
}

/// Decode a schema default. Defaults are written as wire strings.
pub fn default_value<T: ParamValue>(wire: Option<&str>) -> Option<T> {
    wire.and_then(|w| T::from_wire(w).ok())
}

/// Join list items into the comma-separated wire form.
pub fn join_list<T: ParamValue>(items: &[T]) -> String {
    items
        .iter()
        .map(ParamValue::to_wire)
        .collect::<Vec<_>>()
        .join(",")
}

/// Split a comma-separated wire list. Whitespace around items is ignored.
pub fn split_list<T: ParamValue>(wire: &str) -> Result<Vec<T>, ValueError> {
    if wire.trim().is_empty() {
        return Ok(Vec::new());
    }
    wire.split(',').map(|item| T::from_wire(item.trim())).collect()
}

/// Check that a wire string decodes as `kind` without keeping the value.
pub fn check_wire(kind: ParamKind, list: bool, wire: &str) -> Result<(), ValueError> {
    fn one(kind: ParamKind, item: &str) -> Result<(), ValueError> {
        match kind {
            ParamKind::String | ParamKind::Alias | ParamKind::IpAddress => Ok(()),
            ParamKind::Boolean => bool::from_wire(item).map(drop),
            ParamKind::Int => i32::from_wire(item).map(drop),
            ParamKind::UnsignedInt => u32::from_wire(item).map(drop),
            ParamKind::Long => i64::from_wire(item).map(drop),
            ParamKind::UnsignedLong => u64::from_wire(item).map(drop),
            ParamKind::DateTime => DateTime::<Utc>::from_wire(item).map(drop),
            ParamKind::HexBinary => HexBinary::from_wire(item).map(drop),
        }
    }

    if !list {
        return one(kind, wire);
    }
    if wire.trim().is_empty() {
        return Ok(());
    }
    wire.split(',').try_for_each(|item| one(kind, item.trim()))
}

/// Serde adapter for list-valued parameters: a `Vec<T>` in memory, a
/// comma-separated string in every serialized form.
pub mod list {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{ParamValue, join_list, split_list};

    #[allow(clippy::ptr_arg)]
    pub fn serialize<T: ParamValue, S: Serializer>(
        items: &Vec<T>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&join_list(items))
    }

    pub fn deserialize<'de, T: ParamValue, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<T>, D::Error> {
        let text = String::deserialize(deserializer)?;
        split_list(&text).map_err(serde::de::Error::custom)
    }
}
