// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Pricing strategies.
//!
//! A strategy turns a nightly rate and a number of nights into a subtotal.
//! Strategies are pure: they never read the configuration store or any
//! lodging state, so one instance can be shared across threads and calls.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use stay_pricing_rs::{LongStayDiscount, PricingStrategy, Standard};
//!
//! assert_eq!(Standard.compute(dec!(100), 5).unwrap(), dec!(500));
//!
//! let discount = LongStayDiscount::new(7, dec!(0.15)).unwrap();
//! assert_eq!(discount.compute(dec!(100), 6).unwrap(), dec!(600));
//! assert_eq!(discount.compute(dec!(100), 7).unwrap(), dec!(595));
//! ```

use crate::error::PricingError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;

/// Computes the subtotal of a stay from a nightly rate and a number of nights.
pub trait PricingStrategy: fmt::Debug + Send + Sync {
    /// Returns the subtotal for `nights` nights at `base_rate`.
    ///
    /// Pure: depends only on the arguments and the strategy's own
    /// parameters. Returns `None` if the subtotal overflows [`Decimal`].
    fn compute(&self, base_rate: Decimal, nights: u32) -> Option<Decimal>;

    /// Stable label used in quotes and reports.
    fn name(&self) -> &'static str;
}

/// Rate times nights, nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Standard;

impl PricingStrategy for Standard {
    fn compute(&self, base_rate: Decimal, nights: u32) -> Option<Decimal> {
        base_rate.checked_mul(Decimal::from(nights))
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

/// Applies a fractional discount to stays of at least `threshold` nights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongStayDiscount {
    threshold: u32,
    discount: Decimal,
}

impl LongStayDiscount {
    pub const DEFAULT_THRESHOLD: u32 = 7;
    pub const DEFAULT_DISCOUNT: Decimal = dec!(0.1);

    /// Creates a discount of `discount` (a fraction) for stays of `threshold`
    /// nights or more.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidDiscount`] unless `0 <= discount <= 1`.
    pub fn new(threshold: u32, discount: Decimal) -> Result<Self, PricingError> {
        if discount < Decimal::ZERO || discount > Decimal::ONE {
            return Err(PricingError::InvalidDiscount);
        }
        Ok(Self {
            threshold,
            discount,
        })
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn discount(&self) -> Decimal {
        self.discount
    }
}

impl Default for LongStayDiscount {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            discount: Self::DEFAULT_DISCOUNT,
        }
    }
}

impl PricingStrategy for LongStayDiscount {
    fn compute(&self, base_rate: Decimal, nights: u32) -> Option<Decimal> {
        let subtotal = base_rate.checked_mul(Decimal::from(nights))?;
        // Inclusive: a stay of exactly `threshold` nights is discounted.
        if nights >= self.threshold {
            subtotal.checked_mul(Decimal::ONE - self.discount)
        } else {
            Some(subtotal)
        }
    }

    fn name(&self) -> &'static str {
        "long-stay-discount"
    }
}
