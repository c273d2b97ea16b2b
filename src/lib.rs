//! declcsv - tabulate the members of parsed C/C++ declarations as
//! pipe-delimited CSV, one row per member, one blank-line-separated block
//! per class/struct/union.

pub mod analysis;
pub mod args;
pub mod models;
pub mod utils;

pub use analysis::{emit_children, CsvCollector, DeclVisitor};
pub use args::{Args, Config};
pub use models::{ContainerRecord, DeclNode, MemberRecord};
pub use utils::load_tree;
