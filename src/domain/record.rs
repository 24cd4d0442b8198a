//! Raw ledger records as stored by clients.
//!
//! A ledger is a JSON object keyed by date. Each day holds one of three record
//! shapes that accumulated over time:
//! - split: `calc` and `use` arrays
//! - mixed: a single `entries` array tagged by `entryType`
//! - flat: scalar fields directly on the day object
//!
//! Nothing here validates; malformed pieces degrade to empty values so that a
//! single bad day never prevents aggregation of the rest.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::date_key::{format_date_key, parse_date_key};

/// One element of a `calc`, `use` or `entries` array.
///
/// Fields stay as raw JSON so that presence can be told apart from value; a
/// JSON `null` reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    pub entry_type: Option<Value>,
    pub wear: Option<Value>,
    pub init_balance: Option<Value>,
    pub final_balance: Option<Value>,
    pub transaction: Option<Value>,
    pub token_name: Option<Value>,
    pub token_qty: Option<Value>,
    pub token_val: Option<Value>,
    pub used_pts: Option<Value>,
    pub profit_gross: Option<Value>,
}

impl RawEntry {
    /// Whether this entry records a token redemption.
    ///
    /// A non-empty `entryType` decides on its own (`"use"` only). Without one,
    /// any token-related field marks the entry as a redemption.
    pub fn is_use_like(&self) -> bool {
        match &self.entry_type {
            Some(Value::String(kind)) if !kind.is_empty() => kind == "use",
            Some(Value::String(_)) | None => {
                self.token_name.is_some()
                    || self.token_qty.is_some()
                    || self.token_val.is_some()
                    || self.used_pts.is_some()
                    || self.profit_gross.is_some()
            }
            Some(_) => false,
        }
    }

    fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return RawEntry::default();
        }
        RawEntry::deserialize(value).unwrap_or_default()
    }
}

/// Scalar fields of a flat (oldest generation) day record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatFields {
    pub init_balance: Option<Value>,
    pub final_balance: Option<Value>,
    pub transaction: Option<Value>,
    pub used_pts: Option<Value>,
    pub token_qty: Option<Value>,
    pub token_val: Option<Value>,
    pub profit: Option<Value>,
    pub token_name: Option<Value>,
}

/// A single day's raw record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayRecord {
    pub calc: Vec<RawEntry>,
    pub uses: Vec<RawEntry>,
    pub entries: Vec<RawEntry>,
    pub flat: FlatFields,
    /// Number of keys on the day object; 0 means no data for the day.
    pub key_count: usize,
}

impl DayRecord {
    /// Build a day record from any JSON value. Non-objects are empty days.
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return DayRecord::default();
        };

        DayRecord {
            calc: entry_list(map, "calc"),
            uses: entry_list(map, "use"),
            entries: entry_list(map, "entries"),
            flat: FlatFields::deserialize(value).unwrap_or_default(),
            key_count: map.len(),
        }
    }

    /// True when the day object carries no keys at all.
    pub fn is_blank(&self) -> bool {
        self.key_count == 0
    }
}

fn entry_list(map: &Map<String, Value>, key: &str) -> Vec<RawEntry> {
    match map.get(key) {
        Some(Value::Array(items)) => items.iter().map(RawEntry::from_value).collect(),
        _ => Vec::new(),
    }
}

/// The whole ledger: raw date keys to day records.
///
/// Keys are kept verbatim; invalid keys are retained but never match a date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    days: BTreeMap<String, DayRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from a JSON value. A non-object value is an empty ledger.
    pub fn from_value(value: &Value) -> Self {
        let days = value
            .as_object()
            .map(|map| {
                map.iter()
                    .map(|(key, day)| (key.clone(), DayRecord::from_value(day)))
                    .collect()
            })
            .unwrap_or_default();
        Ledger { days }
    }

    /// Parse a stored ledger blob.
    ///
    /// # Errors
    /// Returns an error only if `json` is not valid JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// All records whose key parses to a valid date.
    pub fn dated_days(&self) -> impl Iterator<Item = (NaiveDate, &DayRecord)> {
        self.days
            .iter()
            .filter_map(|(key, day)| parse_date_key(key).map(|date| (date, day)))
    }

    /// Keys that do not parse as dates.
    pub fn invalid_keys(&self) -> impl Iterator<Item = &str> {
        self.days
            .keys()
            .filter(|key| parse_date_key(key).is_none())
            .map(String::as_str)
    }

    /// Record for a calendar day, preferring the zero-padded key.
    pub fn day(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.days.get(&format_date_key(date)).or_else(|| {
            self.dated_days()
                .find(|(d, _)| *d == date)
                .map(|(_, day)| day)
        })
    }
}
