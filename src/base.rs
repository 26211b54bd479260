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

//! Well-known setting keys, defaults, and amount rounding.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Setting key holding the fallback nightly rate.
pub const BASE_RATE_KEY: &str = "tarifa_base";

/// Setting key holding the deployment mode label.
pub const MODE_KEY: &str = "modo";

/// Built-in value of [`BASE_RATE_KEY`].
pub const DEFAULT_BASE_RATE: Decimal = dec!(100.0);

/// Built-in value of [`MODE_KEY`].
pub const DEFAULT_MODE: &str = "produccion";

/// Number of decimal places every computed total carries.
pub const AMOUNT_PRECISION: u32 = 2;

/// Rounds a computed total to [`AMOUNT_PRECISION`] decimal places.
///
/// Ties go to the even neighbour (banker's rounding), so `0.125` becomes
/// `0.12` and `0.135` becomes `0.14`. The result always carries exactly two
/// decimal places, which keeps `325` rendering as `325.00`.
pub fn round_amount(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(AMOUNT_PRECISION, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(AMOUNT_PRECISION);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_to_even() {
        assert_eq!(round_amount(dec!(0.125)), dec!(0.12));
        assert_eq!(round_amount(dec!(0.135)), dec!(0.14));
        assert_eq!(round_amount(dec!(2.675)), dec!(2.68));
    }

    #[test]
    fn pads_to_two_decimal_places() {
        assert_eq!(round_amount(dec!(325)).to_string(), "325.00");
        assert_eq!(round_amount(dec!(616.0000)).to_string(), "616.00");
        assert_eq!(round_amount(dec!(0.1)).to_string(), "0.10");
    }

    #[test]
    fn defaults_match_reference_values() {
        assert_eq!(DEFAULT_BASE_RATE, dec!(100));
        assert_eq!(DEFAULT_MODE, "produccion");
        assert_eq!(AMOUNT_PRECISION, 2);
    }
}
