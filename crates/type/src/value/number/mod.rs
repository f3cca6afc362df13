// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod compare;

pub use compare::{Number, compare_numbers};
