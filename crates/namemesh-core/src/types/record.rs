//! Zone resource records and their positional wire form.
//!
//! On the wire a record is a JSON array, not an object:
//! `["www", "A", "1.2.3.4"]`, or `["mail", "MX", 10, "mx.example.nm"]`
//! for MX. Multi-part values (e.g. split TXT payloads) arrive as extra
//! trailing elements and are joined with a single space.

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{NameMeshError, Result};

/// Record types accepted by the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address
    A,
    /// IPv6 address
    Aaaa,
    /// Canonical name alias
    Cname,
    /// Mail exchanger (carries a priority)
    Mx,
    /// Arbitrary text
    Txt,
}

impl RecordType {
    /// String form as it appears on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = NameMeshError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::Aaaa),
            "CNAME" => Ok(Self::Cname),
            "MX" => Ok(Self::Mx),
            "TXT" => Ok(Self::Txt),
            other => Err(NameMeshError::validation(
                "type",
                format!("unknown record type '{other}'"),
            )),
        }
    }
}

/// A single zone entry.
///
/// Equality is structural over all fields; two records with identical
/// fields are indistinguishable. Domain names are compared byte-for-byte,
/// so callers must canonicalize them (see [`crate::name::to_ascii`])
/// before comparison or divergent-looking duplicates will accumulate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRecord {
    /// Domain label, canonical ASCII form
    pub name: String,
    /// Record type
    pub rtype: RecordType,
    /// MX priority; present exactly when `rtype` is MX
    pub priority: Option<u16>,
    /// Record value
    pub value: String,
}

impl ResourceRecord {
    /// Create a non-MX record
    #[must_use]
    pub fn new(name: impl Into<String>, rtype: RecordType, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rtype,
            priority: None,
            value: value.into(),
        }
    }

    /// Create an MX record with the given priority
    #[must_use]
    pub fn mx(name: impl Into<String>, priority: u16, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rtype: RecordType::Mx,
            priority: Some(priority),
            value: value.into(),
        }
    }

    /// Check field consistency before submission
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(NameMeshError::validation("name", "empty domain label"));
        }
        if !self.name.is_ascii() {
            return Err(NameMeshError::validation(
                "name",
                format!("'{}' is not in canonical ASCII form", self.name),
            ));
        }
        match (self.rtype, self.priority) {
            (RecordType::Mx, None) => Err(NameMeshError::validation(
                "priority",
                "MX record without a priority",
            )),
            (RecordType::Mx, Some(_)) => Ok(()),
            (_, Some(_)) => Err(NameMeshError::validation(
                "priority",
                format!("{} record must not carry a priority", self.rtype),
            )),
            (_, None) => Ok(()),
        }
    }

    /// Returns true if this is an A or AAAA record
    #[must_use]
    pub const fn is_address_record(&self) -> bool {
        matches!(self.rtype, RecordType::A | RecordType::Aaaa)
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.priority {
            Some(p) => write!(f, "{} {} {} {}", self.name, self.rtype, p, self.value),
            None => write!(f, "{} {} {}", self.name, self.rtype, self.value),
        }
    }
}

impl Serialize for ResourceRecord {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mx = self.rtype == RecordType::Mx;
        let mut seq = serializer.serialize_seq(Some(if mx { 4 } else { 3 }))?;
        seq.serialize_element(&self.name)?;
        seq.serialize_element(&self.rtype)?;
        if mx {
            let Some(priority) = self.priority else {
                return Err(serde::ser::Error::custom("MX record without a priority"));
            };
            seq.serialize_element(&priority)?;
        }
        seq.serialize_element(&self.value)?;
        seq.end()
    }
}

impl<'de> Deserialize<'de> for ResourceRecord {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = ResourceRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a record tuple [name, type, value] or [name, \"MX\", priority, value]")
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let name: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let rtype: RecordType = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;

                let priority = if rtype == RecordType::Mx {
                    Some(
                        seq.next_element::<u16>()?
                            .ok_or_else(|| de::Error::invalid_length(2, &self))?,
                    )
                } else {
                    None
                };

                // Value may span several trailing elements; join with a space.
                let mut parts: Vec<String> = Vec::new();
                while let Some(part) = seq.next_element::<String>()? {
                    parts.push(part);
                }
                if parts.is_empty() {
                    let seen = if priority.is_some() { 3 } else { 2 };
                    return Err(de::Error::invalid_length(seen, &self));
                }

                Ok(ResourceRecord {
                    name,
                    rtype,
                    priority,
                    value: parts.join(" "),
                })
            }
        }

        deserializer.deserialize_seq(EntryVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_form_round_trips() {
        let rec = ResourceRecord::new("www", RecordType::A, "1.2.3.4");
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, r#"["www","A","1.2.3.4"]"#);
        let back: ResourceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn mx_carries_priority() {
        let rec = ResourceRecord::mx("mail", 10, "mx.example.nm");
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, r#"["mail","MX",10,"mx.example.nm"]"#);
        let back: ResourceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.priority, Some(10));
    }

    #[test]
    fn mx_without_priority_rejected() {
        let err = serde_json::from_str::<ResourceRecord>(r#"["mail","MX","mx.example.nm"]"#);
        assert!(err.is_err());

        let mut rec = ResourceRecord::new("mail", RecordType::Mx, "mx.example.nm");
        assert!(rec.validate().unwrap_err().is_validation());
        rec.priority = Some(5);
        assert!(rec.validate().is_ok());
    }

    #[test]
    fn priority_on_non_mx_rejected() {
        let mut rec = ResourceRecord::new("www", RecordType::A, "1.2.3.4");
        rec.priority = Some(1);
        let err = rec.validate().unwrap_err();
        assert_eq!(err.field(), Some("priority"));
    }

    #[test]
    fn multi_part_value_joined() {
        let back: ResourceRecord =
            serde_json::from_str(r#"["_spf","TXT","v=spf1","include:example.nm","-all"]"#).unwrap();
        assert_eq!(back.value, "v=spf1 include:example.nm -all");
    }

    #[test]
    fn case_divergent_names_are_not_equal() {
        let a = ResourceRecord::new("WWW", RecordType::A, "1.2.3.4");
        let b = ResourceRecord::new("www", RecordType::A, "1.2.3.4");
        assert_ne!(a, b);
    }

    #[test]
    fn record_type_parses_case_insensitively() {
        assert_eq!("cname".parse::<RecordType>().unwrap(), RecordType::Cname);
        assert!("NS".parse::<RecordType>().is_err());
    }
}
