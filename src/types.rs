use serde::{Deserialize, Serialize};

use crate::error::{GratisDnsError, Result};

/// TTL applied when a record carries no explicit value, in seconds.
///
/// This is the panel's own default; update forms always submit a `ttl` field.
pub const DEFAULT_TTL: u32 = 43200;

// ============ Record Types ============

/// DNS record type tag for the record kinds the panel exposes.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"MX"`, `"TXT"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Mail exchange record.
    Mx,
    /// Text record.
    Txt,
}

impl RecordType {
    /// Uppercase tag as used in the panel's section headings and detail maps.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Mx => "MX",
            Self::Txt => "TXT",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-specific record data.
///
/// Field values are kept exactly as the panel rendered them; the library
/// performs no validation of its own, the provider is the source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum RecordData {
    /// A record — hostname to IPv4 address.
    A {
        /// IPv4 address (e.g. `"1.2.3.4"`).
        ip: String,
    },

    /// AAAA record — hostname to IPv6 address.
    AAAA {
        /// IPv6 address (e.g. `"2001:db8::1"`).
        ip: String,
    },

    /// MX record — mail exchange server.
    MX {
        /// Mail server hostname.
        exchanger: String,
        /// Priority, lower is preferred. Kept as panel text (e.g. `"10"`).
        preference: String,
    },

    /// TXT record — arbitrary text data.
    TXT {
        /// Text content.
        txtdata: String,
    },
}

impl RecordData {
    /// Returns the [`RecordType`] discriminant for this record data.
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::A { .. } => RecordType::A,
            Self::AAAA { .. } => RecordType::Aaaa,
            Self::MX { .. } => RecordType::Mx,
            Self::TXT { .. } => RecordType::Txt,
        }
    }

    /// Returns the primary display value (the IP for A/AAAA, the exchanger
    /// for MX, the text for TXT).
    pub fn display_value(&self) -> &str {
        match self {
            Self::A { ip } | Self::AAAA { ip } => ip,
            Self::MX { exchanger, .. } => exchanger,
            Self::TXT { txtdata } => txtdata,
        }
    }

    /// The `action` value of the panel's update form for this record kind.
    fn update_action(&self) -> &'static str {
        match self {
            Self::A { .. } => "dns_primary_record_update_a",
            Self::AAAA { .. } => "dns_primary_record_update_aaaa",
            Self::MX { .. } => "dns_primary_record_update_mx",
            Self::TXT { .. } => "dns_primary_record_update_txt",
        }
    }
}

/// A DNS record scraped from a domain detail page.
///
/// Instances are plain data: equality is value equality across all fields,
/// and mutating a field changes nothing on the provider side until the
/// record is passed to [`GratisDns::update_record`](crate::GratisDns::update_record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    /// Panel-assigned row identifier. `None` for implicit rows the panel
    /// renders without an edit form (e.g. the synthesized localhost entry);
    /// such records cannot be updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Domain the record belongs to, taken from the row's edit form.
    /// Absent whenever [`id`](Self::id) is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Fully qualified record name (e.g. `"*.mytest.dk"`).
    pub name: String,
    /// Time to live in seconds; `None` falls back to [`DEFAULT_TTL`] when
    /// the update form is built.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Type-specific record data.
    pub data: RecordData,
}

impl DnsRecord {
    /// Builds the `application/x-www-form-urlencoded` payload that updates
    /// this record, dispatching on the record kind.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when the record carries no row identifier or no
    /// owning domain; only records scraped from a detail page can be
    /// pushed back.
    pub fn update_payload(&self) -> Result<Vec<(&'static str, String)>> {
        let id = self.id.clone().ok_or_else(|| missing_field("id"))?;
        let domain = self
            .domain
            .clone()
            .ok_or_else(|| missing_field("user_domain"))?;

        let mut form = vec![
            ("action", self.data.update_action().to_string()),
            ("user_domain", domain),
            ("name", self.name.clone()),
        ];
        match &self.data {
            RecordData::A { ip } | RecordData::AAAA { ip } => {
                form.push(("ip", ip.clone()));
            }
            RecordData::MX {
                exchanger,
                preference,
            } => {
                form.push(("exchanger", exchanger.clone()));
                form.push(("preference", preference.clone()));
            }
            RecordData::TXT { txtdata } => {
                form.push(("txtdata", txtdata.clone()));
            }
        }
        form.push(("id", id));
        form.push(("ttl", self.ttl.unwrap_or(DEFAULT_TTL).to_string()));
        Ok(form)
    }
}

fn missing_field(param: &str) -> GratisDnsError {
    GratisDnsError::InvalidParameter {
        param: param.to_string(),
        detail: "record was not scraped from a detail page and cannot be updated".to_string(),
    }
}

// ============ Detail Mapping ============

/// All records of a primary domain, one ordered sequence per record type.
///
/// Every detail fetch yields exactly these four sequences, each possibly
/// empty, each preserving the document order of the panel's tables.
/// Serializes as the `{"A": [...], "AAAA": [...], "MX": [...], "TXT": [...]}`
/// mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainDetails {
    /// A records.
    #[serde(rename = "A")]
    pub a: Vec<DnsRecord>,
    /// AAAA records.
    #[serde(rename = "AAAA")]
    pub aaaa: Vec<DnsRecord>,
    /// MX records.
    #[serde(rename = "MX")]
    pub mx: Vec<DnsRecord>,
    /// TXT records.
    #[serde(rename = "TXT")]
    pub txt: Vec<DnsRecord>,
}

impl DomainDetails {
    /// The sequence for one record type.
    pub fn records(&self, record_type: RecordType) -> &[DnsRecord] {
        match record_type {
            RecordType::A => &self.a,
            RecordType::Aaaa => &self.aaaa,
            RecordType::Mx => &self.mx,
            RecordType::Txt => &self.txt,
        }
    }

    /// Total record count across all four types.
    pub fn len(&self) -> usize {
        self.a.len() + self.aaaa.len() + self.mx.len() + self.txt.len()
    }

    /// Whether the domain has no records at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All records in A, AAAA, MX, TXT order.
    pub fn iter(&self) -> impl Iterator<Item = &DnsRecord> {
        self.a
            .iter()
            .chain(self.aaaa.iter())
            .chain(self.mx.iter())
            .chain(self.txt.iter())
    }
}
