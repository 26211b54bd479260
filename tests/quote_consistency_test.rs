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

//! Quotes taken while another thread rewrites the base rate.
//!
//! A single test, because it rewrites the process-wide `tarifa_base`.

use rust_decimal_macros::dec;
use stay_pricing_rs::{BASE_RATE_KEY, ConfigurationStore, Lodging, PricingContext, Standard, round_amount};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

const QUOTES: usize = 50_000;

#[test]
fn quote_total_matches_its_rate_under_concurrent_updates() {
    let store = ConfigurationStore::global();
    let context = PricingContext::new(Arc::new(Standard));
    // One night, no fees: the total is exactly the rate in effect.
    let apartment = Lodging::apartment("Depto Central", "Buenos Aires", None, dec!(0)).unwrap();

    let done = Arc::new(AtomicBool::new(false));
    let writer = {
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut high = false;
            while !done.load(Ordering::Relaxed) {
                let rate = if high { dec!(130.0) } else { dec!(100.0) };
                ConfigurationStore::global().set(BASE_RATE_KEY, rate);
                high = !high;
            }
        })
    };

    let mut rates_seen = Vec::new();
    for _ in 0..QUOTES {
        let quote = context.quote(&apartment, 1).unwrap();
        assert_eq!(quote.total, round_amount(quote.nightly_rate));
        if !rates_seen.contains(&quote.nightly_rate) {
            rates_seen.push(quote.nightly_rate);
        }
    }

    done.store(true, Ordering::Relaxed);
    writer.join().unwrap();

    assert!(rates_seen.iter().all(|rate| *rate == dec!(100) || *rate == dec!(130)));
    store.set(BASE_RATE_KEY, dec!(100.0));
}
