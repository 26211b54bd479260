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

//! Pricing context integration tests.

use rust_decimal_macros::dec;
use stay_pricing_rs::{
    DEFAULT_HOTEL_TAX, Lodging, LongStayDiscount, PricingContext, PricingStrategy, Standard,
};
use std::sync::Arc;
use std::thread;

fn make_lodgings() -> Vec<Lodging> {
    vec![
        Lodging::hotel("Gran Sol", "Mar del Plata", None, true, DEFAULT_HOTEL_TAX).unwrap(),
        Lodging::apartment("Depto Central", "Buenos Aires", Some(dec!(60.0)), dec!(25.0)).unwrap(),
    ]
}

#[test]
fn context_prices_each_lodging_with_its_own_rule() {
    let context = PricingContext::new(Arc::new(Standard));
    let totals: Vec<_> = make_lodgings()
        .iter()
        .map(|lodging| context.compute_cost(lodging, 5).unwrap())
        .collect();
    assert_eq!(totals, [dec!(616.00), dec!(325.00)]);
}

#[test]
fn swapping_strategy_changes_later_results_only() {
    let lodgings = make_lodgings();
    let mut context = PricingContext::new(Arc::new(Standard));
    let before = context.compute_cost(&lodgings[1], 7).unwrap();

    context.set_strategy(Arc::new(LongStayDiscount::new(7, dec!(0.15)).unwrap()));
    let after = context.compute_cost(&lodgings[1], 7).unwrap();

    assert_eq!(before, dec!(445.00));
    assert_eq!(after, dec!(382.00));
}

#[test]
fn swapping_back_restores_original_prices() {
    let lodgings = make_lodgings();
    let standard: Arc<dyn PricingStrategy> = Arc::new(Standard);
    let mut context = PricingContext::new(Arc::clone(&standard));
    let first = context.compute_cost(&lodgings[0], 10).unwrap();

    context.set_strategy(Arc::new(LongStayDiscount::default()));
    assert_ne!(context.compute_cost(&lodgings[0], 10).unwrap(), first);

    context.set_strategy(standard);
    assert_eq!(context.compute_cost(&lodgings[0], 10).unwrap(), first);
}

#[test]
fn quotes_carry_strategy_name() {
    let lodgings = make_lodgings();
    let mut context = PricingContext::new(Arc::new(Standard));
    assert_eq!(context.quote(&lodgings[0], 5).unwrap().strategy, "standard");

    context.set_strategy(Arc::new(LongStayDiscount::default()));
    let quote = context.quote(&lodgings[0], 5).unwrap();
    assert_eq!(quote.strategy, "long-stay-discount");
    assert_eq!(quote.lodging, "Gran Sol");
    assert_eq!(quote.nightly_rate, dec!(100.0));
    assert_eq!(quote.total, dec!(616.00));
}

#[test]
fn shared_strategy_is_usable_from_many_threads() {
    let strategy: Arc<dyn PricingStrategy> = Arc::new(LongStayDiscount::new(7, dec!(0.15)).unwrap());
    let lodgings = Arc::new(make_lodgings());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let context = PricingContext::new(Arc::clone(&strategy));
            let lodgings = Arc::clone(&lodgings);
            thread::spawn(move || context.compute_cost(&lodgings[1], 7).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), dec!(382.00));
    }
}
