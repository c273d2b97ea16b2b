// Copyright (c) 2025 Nicholas D. Crosbie
pub mod collector;
pub mod visitor;

pub use collector::*;
pub use visitor::*;
