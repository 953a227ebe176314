// SPDX-License-Identifier: MIT

//! Storage layer (in-memory, injectable).

pub mod memory;
pub mod seed;

pub use memory::MemoryStore;
