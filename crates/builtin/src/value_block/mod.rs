// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod aggregate;
pub mod apply;
pub mod combine;
pub mod compare;
pub mod construct;
pub mod exists;
pub mod fill;
pub mod logical;
