//! Day record normalization.
//!
//! Decides once which record shape a day uses and converts it into canonical
//! calc/use streams. Shapes are checked newest first:
//! split (`calc`/`use`), then mixed (`entries`), then flat scalars.

use serde_json::Value;

use crate::domain::number::{coerce_f64, coerce_opt_f64, coerce_opt_i64};
use crate::domain::{
    CalcEntry, DayRecord, FlatFields, Generation, NormalizedDay, RawEntry, UseEntry,
};

/// Normalize a day record. Returns `None` when the day holds no data at all.
pub fn normalize(day: &DayRecord) -> Option<NormalizedDay> {
    if !day.calc.is_empty() || !day.uses.is_empty() {
        return Some(NormalizedDay {
            generation: Generation::Split,
            calc: day.calc.iter().map(calc_entry).collect(),
            uses: day.uses.iter().map(use_entry).collect(),
            fallback_token: day.uses.last().and_then(|e| token_name(e.token_name.as_ref())),
        });
    }

    if !day.entries.is_empty() {
        let (uses, calc): (Vec<&RawEntry>, Vec<&RawEntry>) =
            day.entries.iter().partition(|e| e.is_use_like());
        return Some(NormalizedDay {
            generation: Generation::Mixed,
            calc: calc.into_iter().map(calc_entry).collect(),
            uses: uses.into_iter().map(use_entry).collect(),
            fallback_token: day
                .entries
                .last()
                .and_then(|e| token_name(e.token_name.as_ref())),
        });
    }

    if day.is_blank() {
        return None;
    }

    Some(flat_day(&day.flat))
}

fn calc_entry(raw: &RawEntry) -> CalcEntry {
    CalcEntry {
        wear: coerce_opt_f64(raw.wear.as_ref()),
        init_balance: coerce_opt_f64(raw.init_balance.as_ref()),
        final_balance: coerce_opt_f64(raw.final_balance.as_ref()),
        transaction: coerce_opt_f64(raw.transaction.as_ref()),
    }
}

fn use_entry(raw: &RawEntry) -> UseEntry {
    UseEntry {
        token_name: token_name(raw.token_name.as_ref()).unwrap_or_default(),
        token_qty: coerce_opt_f64(raw.token_qty.as_ref()),
        token_val: coerce_opt_f64(raw.token_val.as_ref()),
        used_pts: coerce_opt_i64(raw.used_pts.as_ref()),
        profit_gross: raw.profit_gross.as_ref().map(coerce_f64),
    }
}

fn flat_day(flat: &FlatFields) -> NormalizedDay {
    let init_balance = coerce_opt_f64(flat.init_balance.as_ref());
    let final_balance = coerce_opt_f64(flat.final_balance.as_ref());
    let token = token_name(flat.token_name.as_ref());

    let calc = CalcEntry {
        wear: init_balance - final_balance,
        init_balance,
        final_balance,
        transaction: coerce_opt_f64(flat.transaction.as_ref()),
    };
    let use_ = UseEntry {
        // The day-level tokenName only serves as the display fallback.
        token_name: String::new(),
        token_qty: coerce_opt_f64(flat.token_qty.as_ref()),
        token_val: coerce_opt_f64(flat.token_val.as_ref()),
        used_pts: coerce_opt_i64(flat.used_pts.as_ref()),
        profit_gross: flat.profit.as_ref().map(coerce_f64),
    };

    NormalizedDay {
        generation: Generation::Flat,
        calc: vec![calc],
        uses: vec![use_],
        fallback_token: token,
    }
}

/// Uppercased token name, or `None` when missing or empty.
fn token_name(value: Option<&Value>) -> Option<String> {
    let name = match value? {
        Value::String(s) => s.to_uppercase(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day(value: serde_json::Value) -> DayRecord {
        DayRecord::from_value(&value)
    }

    #[test]
    fn test_split_takes_precedence_over_entries() {
        let normalized = normalize(&day(json!({
            "calc": [{"wear": 5, "finalBalance": 900, "initBalance": 905, "transaction": 40}],
            "entries": [{"wear": 1000, "finalBalance": 1, "transaction": 1}]
        })))
        .unwrap();

        assert_eq!(normalized.generation, Generation::Split);
        assert_eq!(normalized.calc.len(), 1);
        assert_eq!(normalized.calc[0].wear, 5.0);
        assert!(normalized.uses.is_empty());
    }

    #[test]
    fn test_split_with_only_use_entries() {
        let normalized = normalize(&day(json!({
            "calc": [],
            "use": [{"tokenName": "abc", "tokenQty": "2", "tokenVal": 10, "usedPts": "1"}]
        })))
        .unwrap();

        assert_eq!(normalized.generation, Generation::Split);
        assert!(normalized.calc.is_empty());
        assert_eq!(normalized.uses[0].token_name, "ABC");
        assert_eq!(normalized.uses[0].token_qty, 2.0);
        assert_eq!(normalized.uses[0].used_pts, 1);
        assert_eq!(normalized.uses[0].profit_gross, None);
        assert_eq!(normalized.fallback_token.as_deref(), Some("ABC"));
    }

    #[test]
    fn test_mixed_entries_classified_once() {
        let normalized = normalize(&day(json!({
            "calc": [],
            "use": [],
            "entries": [
                {"entryType": "calc", "wear": 3, "finalBalance": 500, "transaction": 20},
                {"entryType": "use", "tokenName": "x", "wear": 99, "usedPts": 2},
                {"tokenQty": 1, "tokenVal": 4},
                {"finalBalance": 450, "tokenName": "late"}
            ]
        })))
        .unwrap();

        assert_eq!(normalized.generation, Generation::Mixed);
        assert_eq!(normalized.calc.len(), 1);
        assert_eq!(normalized.uses.len(), 3);
        assert_eq!(normalized.calc[0].final_balance, 500.0);
        assert_eq!(normalized.uses[0].token_name, "X");
        assert_eq!(normalized.uses[2].token_name, "LATE");
        assert_eq!(normalized.fallback_token.as_deref(), Some("LATE"));
    }

    #[test]
    fn test_mixed_fallback_uses_last_entry_even_if_calc() {
        let normalized = normalize(&day(json!({
            "entries": [{"entryType": "calc", "finalBalance": 500, "tokenName": "keep"}]
        })))
        .unwrap();

        assert!(normalized.uses.is_empty());
        assert_eq!(normalized.fallback_token.as_deref(), Some("KEEP"));
    }

    #[test]
    fn test_flat_record_synthesizes_single_entries() {
        let normalized = normalize(&day(json!({
            "initBalance": 1000,
            "finalBalance": "940",
            "transaction": 64,
            "usedPts": 3,
            "tokenQty": 2,
            "tokenVal": 5,
            "profit": 12,
            "tokenName": "old"
        })))
        .unwrap();

        assert_eq!(normalized.generation, Generation::Flat);
        assert_eq!(
            normalized.calc,
            vec![CalcEntry {
                wear: 60.0,
                init_balance: 1000.0,
                final_balance: 940.0,
                transaction: 64.0,
            }]
        );
        assert_eq!(normalized.uses.len(), 1);
        assert_eq!(normalized.uses[0].used_pts, 3);
        assert_eq!(normalized.uses[0].gross_profit(), 12.0);
        assert_eq!(normalized.fallback_token.as_deref(), Some("OLD"));
    }

    #[test]
    fn test_empty_arrays_fall_through_to_flat() {
        let normalized = normalize(&day(json!({"calc": [], "use": [], "entries": []}))).unwrap();
        assert_eq!(normalized.generation, Generation::Flat);
        assert_eq!(normalized.calc[0], CalcEntry::default());
    }

    #[test]
    fn test_blank_record_is_empty_day() {
        assert_eq!(normalize(&day(json!({}))), None);
        assert_eq!(normalize(&day(json!(null))), None);
    }

    #[test]
    fn test_unparseable_profit_override_is_zero() {
        let normalized = normalize(&day(json!({
            "use": [{"tokenQty": 2, "tokenVal": 3, "profitGross": "n/a"}]
        })))
        .unwrap();
        assert_eq!(normalized.uses[0].profit_gross, Some(0.0));
    }
}
