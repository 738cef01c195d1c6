//! ECB daily reference-rate document model
//!
//! The ECB publishes the daily euro reference rates as a small XML document:
//! a `gesmes:Envelope` wrapping an outer `Cube`, which holds one dated `Cube`
//! snapshot per publication day, which in turn holds one `Cube` entry per
//! currency with `currency` and `rate` attributes. The "daily" endpoint
//! carries a single snapshot, but the parser never assumes that and always
//! selects snapshot zero explicitly.

use crate::error::{EcbError, Result};
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Parsed daily publication
///
/// Holds every dated snapshot found in the document; queries only ever
/// consult the first one.
#[derive(Debug, Deserialize)]
pub struct RateDocument {
    #[serde(rename = "Cube", default)]
    cube: CubeSet,
}

#[derive(Debug, Default, Deserialize)]
struct CubeSet {
    #[serde(rename = "Cube", default)]
    snapshots: Vec<Snapshot>,
}

/// All currency rates published for a single date
#[derive(Debug, Default, Deserialize)]
pub struct Snapshot {
    /// Publication date as written in the document (`YYYY-MM-DD`)
    #[serde(rename = "time", default)]
    pub time: String,
    /// Per-currency rate entries, in document order
    #[serde(rename = "Cube", default)]
    pub entries: Vec<RateEntry>,
}

/// One (symbol, rate) pair within a snapshot
///
/// The rate stays textual here; conversion to a numeric value happens only
/// when a query materialises it, through [`RateEntry::value`].
#[derive(Debug, Clone, Deserialize)]
pub struct RateEntry {
    /// 3-letter currency code, e.g. "USD"
    #[serde(rename = "currency")]
    pub symbol: String,
    /// Units of this currency per one euro, as a decimal string
    pub rate: String,
}

impl RateDocument {
    /// Parse a reference-rate document from its XML text
    pub fn parse(body: &str) -> Result<Self> {
        serde_xml_rs::from_str(body)
            .map_err(|e| EcbError::MalformedDocument(format!("XML parse error: {}", e)))
    }

    /// The most recent snapshot (first in document order)
    ///
    /// The document's publisher guarantees the daily endpoint carries exactly
    /// one snapshot, but that is not assumed: an empty snapshot sequence is
    /// reported as a malformed document.
    pub fn current_snapshot(&self) -> Result<&Snapshot> {
        self.cube
            .snapshots
            .first()
            .ok_or_else(|| EcbError::MalformedDocument("document contains no snapshots".to_string()))
    }

    /// All snapshots in document order
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.cube.snapshots
    }
}

impl Snapshot {
    /// Publication date, if the `time` attribute is well-formed
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.time, "%Y-%m-%d").ok()
    }
}

impl RateEntry {
    /// Numeric value of the rate string
    ///
    /// Goes through an arbitrary-precision decimal before the final f64 so
    /// the text is never fed to a binary-float parser directly. The source
    /// format guarantees non-negative rates; anything else is malformed.
    pub fn value(&self) -> Result<f64> {
        let decimal = Decimal::from_str(&self.rate).map_err(|e| {
            EcbError::MalformedDocument(format!(
                "rate '{}' for {} is not a decimal: {}",
                self.rate, self.symbol, e
            ))
        })?;

        if decimal.is_sign_negative() {
            return Err(EcbError::MalformedDocument(format!(
                "rate '{}' for {} is negative",
                self.rate, self.symbol
            )));
        }

        decimal.to_f64().ok_or_else(|| {
            EcbError::MalformedDocument(format!(
                "rate '{}' for {} does not fit in an f64",
                self.rate, self.symbol
            ))
        })
    }
}
