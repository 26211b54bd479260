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

//! Error types for pricing operations.

use thiserror::Error;

/// Pricing errors.
///
/// Every variant is a caller-contract violation reported at the boundary
/// where it is detected. None of them leave shared state partially written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Lodging name is empty or blank
    #[error("lodging name must not be empty")]
    EmptyName,

    /// Lodging location is empty or blank
    #[error("lodging location must not be empty")]
    EmptyLocation,

    /// Explicit nightly rate is negative
    #[error("nightly rate must not be negative")]
    NegativeRate,

    /// Hotel tax fraction is negative
    #[error("tax fraction must not be negative")]
    NegativeTax,

    /// Apartment cleaning fee is negative
    #[error("cleaning fee must not be negative")]
    NegativeCleaningFee,

    /// Discount fraction lies outside `[0, 1]`
    #[error("discount fraction must be between 0 and 1")]
    InvalidDiscount,

    /// The configured base rate is not a non-negative number
    #[error("configured base rate is not a valid amount: {value}")]
    InvalidBaseRate { value: String },

    /// A computed amount does not fit a `Decimal`
    #[error("amount overflow")]
    AmountOverflow,
}
