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

//! Pricing context.
//!
//! The [`PricingContext`] holds the currently selected strategy so callers
//! can price lodgings without knowing which strategy is in force. Swapping
//! the strategy takes effect on the next computation. Nothing is cached:
//! every call re-resolves the lodging's rate, so base-rate changes in the
//! [`ConfigurationStore`](crate::ConfigurationStore) show up immediately.

use crate::error::PricingError;
use crate::lodging::Lodging;
use crate::strategy::PricingStrategy;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// One priced stay, ready for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub lodging: String,
    pub strategy: &'static str,
    pub nights: u32,
    /// Rate in effect when the quote was computed.
    pub nightly_rate: Decimal,
    pub total: Decimal,
}

/// Holder of the strategy currently in force.
#[derive(Debug, Clone)]
pub struct PricingContext {
    strategy: Arc<dyn PricingStrategy>,
}

impl PricingContext {
    pub fn new(strategy: Arc<dyn PricingStrategy>) -> Self {
        Self { strategy }
    }

    /// Replaces the strategy used by subsequent computations.
    pub fn set_strategy(&mut self, strategy: Arc<dyn PricingStrategy>) {
        debug!(
            from = self.strategy.name(),
            to = strategy.name(),
            "pricing strategy swapped"
        );
        self.strategy = strategy;
    }

    pub fn strategy(&self) -> &Arc<dyn PricingStrategy> {
        &self.strategy
    }

    /// Prices `nights` nights at `lodging` with the current strategy.
    ///
    /// # Errors
    ///
    /// Propagates [`PricingError::InvalidBaseRate`] and
    /// [`PricingError::AmountOverflow`] from the lodging.
    pub fn compute_cost(&self, lodging: &Lodging, nights: u32) -> Result<Decimal, PricingError> {
        lodging.compute_cost(nights, self.strategy.as_ref())
    }

    /// Like [`compute_cost`](Self::compute_cost), but returns a [`Quote`]
    /// carrying the rate and strategy that produced the total.
    ///
    /// The rate is resolved once, so a concurrent base-rate change cannot
    /// pair it with a total computed from another rate.
    pub fn quote(&self, lodging: &Lodging, nights: u32) -> Result<Quote, PricingError> {
        let nightly_rate = lodging.effective_rate()?;
        let total = lodging.compute_cost_at(nightly_rate, nights, self.strategy.as_ref())?;
        Ok(Quote {
            lodging: lodging.name().to_string(),
            strategy: self.strategy.name(),
            nights,
            nightly_rate,
            total,
        })
    }
}
