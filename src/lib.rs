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

//! # Stay Pricing
//!
//! This library prices lodging stays: a process-wide configuration store,
//! pluggable pricing strategies, and hotel/apartment cost composition on top
//! of a strategy's subtotal.
//!
//! ## Core Components
//!
//! - [`ConfigurationStore`]: Process-wide settings, created once on first access
//! - [`PricingStrategy`]: Subtotal from rate and nights ([`Standard`], [`LongStayDiscount`])
//! - [`Lodging`]: Hotel or apartment with its own cost composition
//! - [`PricingContext`]: Holder of the strategy currently in force
//! - [`PricingError`]: Error types for caller-contract violations
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use rust_decimal_macros::dec;
//! use stay_pricing_rs::{DEFAULT_HOTEL_TAX, LongStayDiscount, Lodging, PricingContext, Standard};
//!
//! let hotel = Lodging::hotel("Gran Sol", "Mar del Plata", None, true, DEFAULT_HOTEL_TAX).unwrap();
//! let apartment =
//!     Lodging::apartment("Depto Central", "Buenos Aires", Some(dec!(60.0)), dec!(25.0)).unwrap();
//!
//! let mut context = PricingContext::new(Arc::new(Standard));
//! assert_eq!(context.compute_cost(&hotel, 5).unwrap(), dec!(616.00));
//! assert_eq!(context.compute_cost(&apartment, 5).unwrap(), dec!(325.00));
//!
//! context.set_strategy(Arc::new(LongStayDiscount::new(7, dec!(0.15)).unwrap()));
//! assert_eq!(context.compute_cost(&apartment, 7).unwrap(), dec!(382.00));
//! ```
//!
//! ## Thread Safety
//!
//! The configuration store is the only shared mutable state. Its creation is
//! guarded so concurrent first access yields a single instance, and its
//! per-key reads and writes never observe partial values. Strategies and
//! lodgings are immutable and can be shared freely.

mod base;
pub mod config;
mod context;
pub mod error;
pub mod lodging;
pub mod records;
pub mod strategy;

pub use base::{AMOUNT_PRECISION, BASE_RATE_KEY, DEFAULT_BASE_RATE, DEFAULT_MODE, MODE_KEY, round_amount};
pub use config::{ConfigurationStore, SettingValue};
pub use context::{PricingContext, Quote};
pub use error::PricingError;
pub use lodging::{BREAKFAST_PER_NIGHT, DEFAULT_CLEANING_FEE, DEFAULT_HOTEL_TAX, Lodging, LodgingKind};
pub use records::{Booking, Room};
pub use strategy::{LongStayDiscount, PricingStrategy, Standard};
