//! Boundary checks for evaluation requests.
//!
//! Fails fast on the first offending field, in declaration order. Values
//! are never clamped or coerced.

use crate::core::{AdvisorInput, Error, Result};

pub fn validate_input(input: &AdvisorInput) -> Result<()> {
    check_amount("monthly_budget", input.monthly_budget)?;

    if input.channel_count < 1 {
        return Err(Error::invalid_input(
            "channel_count",
            format!("must be at least 1, got {}", input.channel_count),
        ));
    }

    if input.ios_share > 100 {
        return Err(Error::invalid_input(
            "ios_share",
            format!("must be a percentage in 0..=100, got {}", input.ios_share),
        ));
    }

    if let Some(dedicated) = input.dedicated_ios_budget {
        check_amount("dedicated_ios_budget", dedicated)?;
        if dedicated > input.monthly_budget {
            return Err(Error::invalid_input(
                "dedicated_ios_budget",
                format!(
                    "cannot exceed the monthly budget ({} > {})",
                    dedicated, input.monthly_budget
                ),
            ));
        }
    }

    Ok(())
}

fn check_amount(field: &'static str, amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(Error::invalid_input(
            field,
            format!("must be a finite amount, got {amount}"),
        ));
    }
    if amount < 0.0 {
        return Err(Error::invalid_input(
            field,
            format!("must not be negative, got {amount}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> AdvisorInput {
        AdvisorInput {
            monthly_budget: 2_000.0,
            channel_count: 2,
            ios_share: 40,
            ..Default::default()
        }
    }

    fn field_of(input: AdvisorInput) -> Option<&'static str> {
        validate_input(&input).unwrap_err().field()
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(validate_input(&valid()).is_ok());
        assert!(validate_input(&AdvisorInput::default()).is_ok());
    }

    #[test]
    fn test_rejects_negative_budget() {
        let input = AdvisorInput {
            monthly_budget: -1.0,
            ..valid()
        };
        assert_eq!(field_of(input), Some("monthly_budget"));
    }

    #[test]
    fn test_rejects_nan_budget() {
        let input = AdvisorInput {
            monthly_budget: f64::NAN,
            ..valid()
        };
        assert_eq!(field_of(input), Some("monthly_budget"));
    }

    #[test]
    fn test_rejects_zero_channels() {
        let input = AdvisorInput {
            channel_count: 0,
            ..valid()
        };
        assert_eq!(field_of(input), Some("channel_count"));
    }

    #[test]
    fn test_rejects_share_above_hundred() {
        let input = AdvisorInput {
            ios_share: 101,
            ..valid()
        };
        assert_eq!(field_of(input), Some("ios_share"));
    }

    #[test]
    fn test_rejects_dedicated_budget_above_monthly() {
        let input = AdvisorInput {
            dedicated_ios_budget: Some(2_500.0),
            ..valid()
        };
        assert_eq!(field_of(input), Some("dedicated_ios_budget"));

        let input = AdvisorInput {
            dedicated_ios_budget: Some(-5.0),
            ..valid()
        };
        assert_eq!(field_of(input), Some("dedicated_ios_budget"));
    }

    #[test]
    fn test_first_offending_field_wins() {
        let input = AdvisorInput {
            monthly_budget: -1.0,
            channel_count: 0,
            ios_share: 200,
            ..valid()
        };
        assert_eq!(field_of(input), Some("monthly_budget"));
    }
}
