//! Property query filter.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Optional-field filter narrowing the property result set.
///
/// Every field is independently optional and present fields combine with
/// logical AND; an absent field imposes no constraint on that dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyFilter {
    /// Accent and case insensitive substring match on the property name.
    pub name: Option<String>,
    /// Accent and case insensitive substring match on the property address.
    pub address: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound.
    pub max_price: Option<Decimal>,
}
