//! Derived quote numbers and the chat summary.
//!
//! All functions here are pure: they take fetched prices and return either a
//! derived value or a `StonksError` describing why none can be given.
use log::info;

use crate::error::StonksError;
use crate::quote::{QuoteDetail, RawQuote, ReferencePrice};
use crate::result::Result;

/// Percentage change of `current` against `previous_close`.
///
/// A zero previous close (or any other input producing a non-finite result)
/// is reported as `DataUnavailable` instead of leaking `inf`/`NaN`.
pub fn daily_change_percent(current: f64, previous_close: f64) -> Result<f64> {
    if previous_close == 0.0 {
        return Err(StonksError::DataUnavailable(String::from(
            "previous close is zero, daily change undefined",
        )));
    }
    let percent = 100.0 * (current - previous_close) / previous_close;
    if !percent.is_finite() {
        return Err(StonksError::DataUnavailable(format!(
            "daily change is not finite for {current} / {previous_close}"
        )));
    }
    Ok(percent)
}

/// Mean of the first and last close in `closes`.
///
/// An empty series means the symbol did not trade in the window (e.g. it
/// listed later); that yields `ReferencePrice::Unavailable`, not an error.
pub fn reference_price(closes: &[f64]) -> ReferencePrice {
    match (closes.first(), closes.last()) {
        (Some(first), Some(last)) => ReferencePrice::Available((first + last) / 2.0),
        _ => ReferencePrice::Unavailable,
    }
}

/// Rejects quotes that carry no data at all.
///
/// Providers answer unknown symbols with an all-zero quote rather than an
/// error; a zero previous close together with a zero open is treated as such.
pub fn validate(symbol: &str, quote: &RawQuote) -> Result<()> {
    if quote.previous_close == 0.0 && quote.open == 0.0 {
        return Err(StonksError::NoData(symbol.to_string()));
    }
    Ok(())
}

/// Assembles the enriched detail and renders its summary.
pub fn build_detail(
    symbol: &str,
    quote: &RawQuote,
    reference: ReferencePrice,
    description: Option<String>,
) -> Result<QuoteDetail> {
    let daily_change = daily_change_percent(quote.current, quote.previous_close)?;
    let summary = format_summary(
        symbol,
        description.as_deref().unwrap_or_default(),
        quote.current,
        daily_change,
        reference,
    );
    info!("{}", summary);

    Ok(QuoteDetail {
        symbol: symbol.to_string(),
        price: quote.current,
        high: quote.high,
        low: quote.low,
        open: quote.open,
        previous_close: quote.previous_close,
        daily_change_percent: daily_change,
        reference_price: reference,
        description,
        summary,
    })
}

/// Chat rendering of a quote, fenced as a Markdown code block.
pub fn format_summary(
    symbol: &str,
    description: &str,
    price: f64,
    daily_change: f64,
    reference: ReferencePrice,
) -> String {
    format!(
        "```\n [{symbol}] {description} \n Price: {price:5.2} \n Today: {daily_change:5.2}% Reference: {reference}```"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn quote(current: f64, previous_close: f64, open: f64) -> RawQuote {
        RawQuote {
            current,
            high: current,
            low: current,
            open,
            previous_close,
        }
    }

    #[test]
    fn daily_change_matches_formula() {
        for (c, p) in [(300.0, 250.0), (99.5, 100.0), (0.0, 12.0), (1.0e-3, 3.0e-3), (42.0, 42.0)] {
            let expected = 100.0 * (c - p) / p;
            assert!((daily_change_percent(c, p).unwrap() - expected).abs() < EPSILON);
        }
    }

    #[test]
    fn daily_change_with_zero_previous_close_is_unavailable() {
        assert!(matches!(daily_change_percent(10.0, 0.0), Err(StonksError::DataUnavailable(_))));
        assert!(matches!(daily_change_percent(0.0, 0.0), Err(StonksError::DataUnavailable(_))));
        assert!(matches!(daily_change_percent(0.0, -0.0), Err(StonksError::DataUnavailable(_))));
    }

    #[test]
    fn daily_change_rejects_nan_input() {
        assert!(daily_change_percent(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn reference_price_averages_first_and_last() {
        assert_eq!(reference_price(&[100.0, 120.0]), ReferencePrice::Available(110.0));
        assert_eq!(reference_price(&[100.0, 5.0, 7.0, 120.0]), ReferencePrice::Available(110.0));
        assert_eq!(reference_price(&[50.0]), ReferencePrice::Available(50.0));
    }

    #[test]
    fn empty_series_is_unavailable_not_zero() {
        let reference = reference_price(&[]);
        assert_eq!(reference, ReferencePrice::Unavailable);
        assert_eq!(reference.value(), None);
    }

    #[test]
    fn validate_rejects_all_zero_quote() {
        let err = validate("ZZZZ", &quote(0.0, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, StonksError::NoData(ref s) if s == "ZZZZ"));
    }

    #[test]
    fn validate_accepts_quote_with_open_only() {
        assert!(validate("NEW", &quote(10.0, 0.0, 9.0)).is_ok());
    }

    #[test]
    fn build_detail_fills_every_field() {
        let raw = RawQuote {
            current: 300.0,
            high: 305.0,
            low: 290.0,
            open: 248.0,
            previous_close: 250.0,
        };
        let detail = build_detail(
            "MSFT",
            &raw,
            ReferencePrice::Available(180.5),
            Some("Microsoft Corp".into()),
        )
        .unwrap();

        assert_eq!(detail.symbol, "MSFT");
        assert_eq!(detail.high, 305.0);
        assert_eq!(detail.low, 290.0);
        assert_eq!(detail.open, 248.0);
        assert!((detail.daily_change_percent - 20.0).abs() < EPSILON);
        assert_eq!(
            detail.summary,
            "```\n [MSFT] Microsoft Corp \n Price: 300.00 \n Today: 20.00% Reference: 180.50```"
        );
    }

    #[test]
    fn summary_without_description_or_reference() {
        let detail = build_detail("NEW", &quote(12.0, 10.0, 11.0), ReferencePrice::Unavailable, None).unwrap();
        assert_eq!(
            detail.to_string(),
            "```\n [NEW]  \n Price: 12.00 \n Today: 20.00% Reference: n/a```"
        );
    }
}
