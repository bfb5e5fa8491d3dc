//! Currency formatting over integer cents.
//!
//! RULE: amounts are `Cents` everywhere in the crate. This module is the
//! only place cents are turned into dollar strings.

use crate::types::Cents;

/// Format cents as a two-decimal dollar string with thousands
/// separators, e.g. `1234550` → `"$12,345.50"`.
pub fn fmt_usd(amount: Cents) -> String {
    let negative = amount < 0;
    let abs = amount.unsigned_abs();
    let dollars = abs / 100;
    let cents = abs % 100;

    let mut grouped = String::new();
    let digits = dollars.to_string();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{cents:02}")
}
