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

//! Lodgings and their cost composition.
//!
//! A [`Lodging`] pairs a shared identity (name, location, optional nightly
//! rate) with a [`LodgingKind`] that decides how a strategy's subtotal is
//! turned into a total:
//!
//! | Kind | Total |
//! |------|-------|
//! | Hotel | `(subtotal + breakfast * nights) * (1 + tax)` |
//! | Apartment | `subtotal + cleaning_fee` |
//!
//! Totals are rounded with [`round_amount`].
//!
//! # Rate resolution
//!
//! A lodging built without an explicit nightly rate reads `tarifa_base` from
//! the [`ConfigurationStore`] on every call. Changing the base rate later
//! changes the next price of such lodgings; lodgings with an explicit rate
//! are unaffected.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use stay_pricing_rs::{Lodging, Standard};
//!
//! let apartment = Lodging::apartment("Depto Central", "Buenos Aires", Some(dec!(60.0)), dec!(25.0)).unwrap();
//! assert_eq!(apartment.compute_cost(5, &Standard).unwrap(), dec!(325.00));
//! ```

use crate::base::{BASE_RATE_KEY, DEFAULT_BASE_RATE, round_amount};
use crate::config::ConfigurationStore;
use crate::error::PricingError;
use crate::strategy::PricingStrategy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::trace;

/// Per-night surcharge for hotels that include breakfast.
pub const BREAKFAST_PER_NIGHT: Decimal = dec!(10.0);

/// Tax fraction hotels charge unless told otherwise.
pub const DEFAULT_HOTEL_TAX: Decimal = dec!(0.12);

/// One-time cleaning fee apartments charge unless told otherwise.
pub const DEFAULT_CLEANING_FEE: Decimal = dec!(30.0);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Identity {
    name: String,
    location: String,
    /// `None` defers to the configured base rate at call time.
    nightly_rate: Option<Decimal>,
}

impl Identity {
    fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        nightly_rate: Option<Decimal>,
    ) -> Result<Self, PricingError> {
        let name = name.into();
        let location = location.into();
        if name.trim().is_empty() {
            return Err(PricingError::EmptyName);
        }
        if location.trim().is_empty() {
            return Err(PricingError::EmptyLocation);
        }
        if nightly_rate.is_some_and(|rate| rate < Decimal::ZERO) {
            return Err(PricingError::NegativeRate);
        }
        Ok(Self {
            name,
            location,
            nightly_rate,
        })
    }

    fn effective_rate(&self) -> Result<Decimal, PricingError> {
        if let Some(rate) = self.nightly_rate {
            return Ok(rate);
        }
        let configured = ConfigurationStore::global().get_or(BASE_RATE_KEY, DEFAULT_BASE_RATE);
        match configured.as_decimal() {
            Some(rate) if rate >= Decimal::ZERO => Ok(rate),
            _ => Err(PricingError::InvalidBaseRate {
                value: configured.to_string(),
            }),
        }
    }
}

/// Variant-specific pricing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LodgingKind {
    Hotel {
        breakfast_included: bool,
        /// Fraction added on top of the subtotal, e.g. `0.12`.
        tax: Decimal,
    },
    Apartment {
        /// Charged once per stay, not per night.
        cleaning_fee: Decimal,
    },
}

/// A bookable hotel or apartment.
///
/// Immutable once built; every price is recomputed from its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lodging {
    identity: Identity,
    kind: LodgingKind,
}

impl Lodging {
    /// Builds a hotel.
    ///
    /// # Errors
    ///
    /// - [`PricingError::EmptyName`] / [`PricingError::EmptyLocation`] - blank identity.
    /// - [`PricingError::NegativeRate`] - explicit rate below zero.
    /// - [`PricingError::NegativeTax`] - tax fraction below zero.
    pub fn hotel(
        name: impl Into<String>,
        location: impl Into<String>,
        nightly_rate: Option<Decimal>,
        breakfast_included: bool,
        tax: Decimal,
    ) -> Result<Self, PricingError> {
        let identity = Identity::new(name, location, nightly_rate)?;
        if tax < Decimal::ZERO {
            return Err(PricingError::NegativeTax);
        }
        Ok(Self {
            identity,
            kind: LodgingKind::Hotel {
                breakfast_included,
                tax,
            },
        })
    }

    /// Builds an apartment.
    ///
    /// # Errors
    ///
    /// - [`PricingError::EmptyName`] / [`PricingError::EmptyLocation`] - blank identity.
    /// - [`PricingError::NegativeRate`] - explicit rate below zero.
    /// - [`PricingError::NegativeCleaningFee`] - cleaning fee below zero.
    pub fn apartment(
        name: impl Into<String>,
        location: impl Into<String>,
        nightly_rate: Option<Decimal>,
        cleaning_fee: Decimal,
    ) -> Result<Self, PricingError> {
        let identity = Identity::new(name, location, nightly_rate)?;
        if cleaning_fee < Decimal::ZERO {
            return Err(PricingError::NegativeCleaningFee);
        }
        Ok(Self {
            identity,
            kind: LodgingKind::Apartment { cleaning_fee },
        })
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }

    pub fn location(&self) -> &str {
        &self.identity.location
    }

    /// The explicit nightly rate, if one was given at construction.
    pub fn nightly_rate(&self) -> Option<Decimal> {
        self.identity.nightly_rate
    }

    pub fn kind(&self) -> LodgingKind {
        self.kind
    }

    /// Returns the rate a computation made now would use.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidBaseRate`] when no explicit rate was
    /// given and the configured `tarifa_base` is not a non-negative number.
    pub fn effective_rate(&self) -> Result<Decimal, PricingError> {
        self.identity.effective_rate()
    }

    /// Prices a stay of `nights` nights under `strategy`.
    ///
    /// # Errors
    ///
    /// - [`PricingError::InvalidBaseRate`] - rate resolution failed.
    /// - [`PricingError::AmountOverflow`] - the total does not fit a [`Decimal`].
    pub fn compute_cost(
        &self,
        nights: u32,
        strategy: &dyn PricingStrategy,
    ) -> Result<Decimal, PricingError> {
        let rate = self.effective_rate()?;
        self.compute_cost_at(rate, nights, strategy)
    }

    /// Prices a stay at an already resolved `rate`.
    pub(crate) fn compute_cost_at(
        &self,
        rate: Decimal,
        nights: u32,
        strategy: &dyn PricingStrategy,
    ) -> Result<Decimal, PricingError> {
        let subtotal = strategy
            .compute(rate, nights)
            .ok_or(PricingError::AmountOverflow)?;

        let total = match self.kind {
            LodgingKind::Hotel {
                breakfast_included,
                tax,
            } => {
                let subtotal = if breakfast_included {
                    BREAKFAST_PER_NIGHT
                        .checked_mul(Decimal::from(nights))
                        .and_then(|breakfast| subtotal.checked_add(breakfast))
                } else {
                    Some(subtotal)
                };
                let factor = Decimal::ONE.checked_add(tax);
                subtotal
                    .zip(factor)
                    .and_then(|(amount, factor)| amount.checked_mul(factor))
            }
            LodgingKind::Apartment { cleaning_fee } => subtotal.checked_add(cleaning_fee),
        }
        .ok_or(PricingError::AmountOverflow)?;
        let total = round_amount(total);

        trace!(
            lodging = %self.identity.name,
            strategy = strategy.name(),
            nights,
            rate = %rate,
            total = %total,
            "cost computed"
        );
        Ok(total)
    }

    /// Human-readable summary including the rate in effect right now.
    ///
    /// # Errors
    ///
    /// Propagates [`PricingError::InvalidBaseRate`] from rate resolution.
    pub fn describe(&self) -> Result<String, PricingError> {
        let rate = self.effective_rate()?;
        let Identity { name, location, .. } = &self.identity;

        let text = match self.kind {
            LodgingKind::Hotel {
                breakfast_included, ..
            } => {
                let breakfast = if breakfast_included { "yes" } else { "no" };
                format!("Hotel '{name}' in {location} - rate ${rate}/night, breakfast={breakfast}")
            }
            LodgingKind::Apartment { cleaning_fee } => {
                format!("Apartment '{name}' in {location} - rate ${rate}/night, cleaning fee ${cleaning_fee}")
            }
        };
        Ok(text)
    }
}
