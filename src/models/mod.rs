// Copyright (c) 2025 Nicholas D. Crosbie
pub mod container_record;
pub mod declaration;
pub mod member_record;

pub use container_record::*;
pub use declaration::*;
pub use member_record::*;
