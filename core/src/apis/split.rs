//! Split payments: route parts of a charge to other Asaas wallets.
//!
//! `validate_splits` checks a split configuration locally before it is sent,
//! so obviously broken configurations fail without a round trip.

use serde::Serialize;
use thiserror::Error;

use crate::apis::payments::{Payment, PaymentData};
use crate::client::AsaasClient;
use crate::error::ApiError;
use crate::query::Query;
use crate::types::Split;

/// Why a split configuration was rejected. `Display` is the human-readable
/// reason.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SplitConfigError {
    #[error("at least one split entry required")]
    Empty,
    #[error("cannot mix percentage and fixed values in splits")]
    MixedAllocation,
    #[error("total percentage of splits ({total}) exceeds 100%")]
    PercentageExceeded { total: f64 },
    #[error("total fixed value of splits ({total}) exceeds payment value ({payment_value})")]
    FixedExceeded { total: f64, payment_value: f64 },
    #[error("split entry {index} has no wallet id")]
    MissingWallet { index: usize },
}

/// Validate a split configuration against an optional payment value.
///
/// Checks run in order and the first failure wins: non-empty, no mix of
/// percentage and fixed entries, percentages sum to at most 100, fixed values
/// sum to at most `payment_value` when known, every entry names a wallet.
pub fn validate_splits(splits: &[Split], payment_value: Option<f64>) -> Result<(), SplitConfigError> {
    if splits.is_empty() {
        return Err(SplitConfigError::Empty);
    }

    let has_percentage = splits.iter().any(|s| s.percentual_value.is_some());
    let has_fixed = splits.iter().any(|s| s.fixed_value.is_some());
    if has_percentage && has_fixed {
        return Err(SplitConfigError::MixedAllocation);
    }

    if has_percentage {
        let total: f64 = splits.iter().filter_map(|s| s.percentual_value).sum();
        if total > 100.0 {
            return Err(SplitConfigError::PercentageExceeded { total });
        }
    }

    if let (true, Some(payment_value)) = (has_fixed, payment_value) {
        let total: f64 = splits.iter().filter_map(|s| s.fixed_value).sum();
        if total > payment_value {
            return Err(SplitConfigError::FixedExceeded {
                total,
                payment_value,
            });
        }
    }

    if let Some(index) = splits.iter().position(|s| s.wallet_id.trim().is_empty()) {
        return Err(SplitConfigError::MissingWallet { index });
    }

    Ok(())
}

#[derive(Serialize)]
struct SplitBody<'a> {
    split: &'a [Split],
}

#[derive(Debug, Clone, Copy)]
pub struct SplitApi<'a> {
    pub(crate) client: &'a AsaasClient,
}

impl SplitApi<'_> {
    /// Create a payment carrying `splits`. The configuration is sent as given;
    /// call `validate_splits` first for a local check.
    pub fn create_payment_with_split(
        &self,
        data: &PaymentData,
        splits: &[Split],
    ) -> Result<Payment, ApiError> {
        let mut data = data.clone();
        data.split = Some(splits.to_vec());
        self.client.post("/payments", &data)
    }

    pub fn update_payment_split(&self, payment_id: &str, splits: &[Split]) -> Result<Payment, ApiError> {
        self.client
            .put(&format!("/payments/{payment_id}"), &SplitBody { split: splits })
    }

    pub fn remove_payment_split(&self, payment_id: &str) -> Result<Payment, ApiError> {
        self.client
            .put(&format!("/payments/{payment_id}"), &SplitBody { split: &[] })
    }

    /// The split configuration of a payment, empty when it has none.
    pub fn payment_splits(&self, payment_id: &str) -> Result<Vec<Split>, ApiError> {
        let payment: Payment = self.client.get(&format!("/payments/{payment_id}"), Query::new())?;
        Ok(payment.split.unwrap_or_default())
    }
}
