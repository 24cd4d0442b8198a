//! Domain types for the rewards ledger.
//!
//! This module provides:
//! - Raw day records in all three stored shapes, read leniently from JSON
//! - Canonical calc/use entries the engine works on
//! - Date-key parsing and lenient numeric coercion

pub mod date_key;
pub mod entry;
pub mod number;
pub mod record;

pub use date_key::{format_date_key, parse_date_key};
pub use entry::{CalcEntry, Generation, NormalizedDay, UseEntry};
pub use record::{DayRecord, FlatFields, Ledger, RawEntry};
