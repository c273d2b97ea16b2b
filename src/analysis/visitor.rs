// Copyright (c) 2025 Nicholas D. Crosbie
use crate::models::DeclNode;
use std::io;

/// Entry points invoked by the traversal driver, one per declaration kind.
///
/// `member_declaration` can also be invoked outside any container cycle:
/// the parser emits global declarations beside the containers at the top
/// level. Implementations decide what to do with those.
pub trait DeclVisitor {
    fn container_declaration(&mut self, node: &DeclNode) -> io::Result<()>;
    fn member_declaration(&mut self, node: &DeclNode) -> io::Result<()>;
}

/// Dispatches each direct child of `node` to the matching visitor entry
/// point. Unrecognised tags are skipped.
pub fn emit_children<V: DeclVisitor>(node: &DeclNode, visitor: &mut V) -> io::Result<()> {
    for child in &node.children {
        if child.is_container() {
            visitor.container_declaration(child)?;
        } else if child.is_member() {
            visitor.member_declaration(child)?;
        }
    }
    Ok(())
}
