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

//! One-time initialisation of the configuration store.
//!
//! A single test, because only the first initialisation in a process applies
//! its overlay.

use rust_decimal_macros::dec;
use stay_pricing_rs::{BASE_RATE_KEY, ConfigurationStore, MODE_KEY, SettingValue};
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 16;

#[test]
fn concurrent_first_access_creates_one_store() {
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let store = ConfigurationStore::init([(MODE_KEY, format!("hilo_{}", i))]);
                store as *const ConfigurationStore as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));

    let store = ConfigurationStore::global();
    assert_eq!(store as *const ConfigurationStore as usize, addresses[0]);

    // Exactly one overlay won; the defaults it did not override survive.
    let mode = store.get(MODE_KEY).unwrap();
    let winner = mode.as_str().unwrap();
    assert!(winner.starts_with("hilo_"), "unexpected mode {winner}");
    assert_eq!(store.get(BASE_RATE_KEY), Some(SettingValue::Number(dec!(100.0))));
    assert_eq!(store.len(), 2);

    // Later initialisations are ignored entirely.
    let again = ConfigurationStore::init([
        (BASE_RATE_KEY, SettingValue::from(dec!(999))),
        ("nueva", SettingValue::from(true)),
    ]);
    assert!(std::ptr::eq(again, store));
    assert_eq!(again.get(BASE_RATE_KEY), Some(SettingValue::Number(dec!(100.0))));
    assert_eq!(again.get("nueva"), None);
    assert_eq!(again.get(MODE_KEY), Some(mode));
}
