//! The ratio calculation behind the "Calculate" button.

use crate::config::RESULT_SIGNIFICANT_DIGITS;
use crate::form::{FormState, Slot};
use crate::reference::ReferenceTables;
use crate::utils::{coerce_number, format_significant};
use log::{info, warn};
use wasm_bindgen::prelude::*;

/// Divide two looked-up values and format the quotient for display.
///
/// Division by zero and non-numeric input are not rejected; the result is
/// shown as `Infinity` or `NaN`.
pub fn ratio(numerator: &str, denominator: &str) -> String {
    let quotient = coerce_number(numerator) / coerce_number(denominator);
    if !quotient.is_finite() {
        warn!(
            "Ratio of '{}' / '{}' is not finite ({})",
            numerator, denominator, quotient
        );
    }
    format_significant(quotient, RESULT_SIGNIFICANT_DIGITS)
}

/// Write `1b / 2b` into slot `3`.
///
/// Goes through the ordinary edit path, so slot `3` is stored verbatim.
/// Callers are expected to gate this on [`FormState::can_calculate`].
pub fn calculate(form: &FormState, tables: &ReferenceTables) -> FormState {
    let result = ratio(form.get(Slot::SpO2Value), form.get(Slot::FlowValue));
    info!("Calculated P/F ratio {}", result);
    let (next, _) = form.edit(Slot::Ratio, &result, tables);
    next
}

/// Ratio of two raw values, for scripts on the host page.
#[wasm_bindgen(js_name = pfRatio)]
pub fn pf_ratio(numerator: &str, denominator: &str) -> String {
    ratio(numerator, denominator)
}
