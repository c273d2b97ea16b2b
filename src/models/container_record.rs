// Copyright (c) 2025 Nicholas D. Crosbie
use crate::models::member_record::MemberRecord;
use std::io::{self, Write};

// Structure to store one container (class/struct/union) and its collected
// members, in visitation order
#[derive(Debug, Clone, Default)]
pub struct ContainerRecord {
    name: Option<String>,
    members: Vec<MemberRecord>,
}

impl ContainerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` clears the name; an explicit empty string is kept verbatim.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Appends a member in call order. No deduplication, no validation of
    /// field contents.
    pub fn add_member(&mut self, name: &str, member_type: &str, kind: &str, access: &str, decl: &str) {
        self.members
            .push(MemberRecord::new(name, member_type, kind, access, decl));
    }

    /// Writes one row per member in insertion order, each prefixed with the
    /// container name when one is set, then a single blank line terminating
    /// the block. An empty container still produces the blank line and never
    /// a stray name-only row.
    pub fn emit(&self, sink: &mut impl Write) -> io::Result<()> {
        for member in &self.members {
            // first column is the container name
            if let Some(name) = &self.name {
                write!(sink, "{}", name)?;
            }
            member.render(sink)?;
            writeln!(sink)?; // end row
        }
        writeln!(sink)?; // end container
        Ok(())
    }

    /// Clears the name and members; safe on an already-empty record.
    pub fn reset(&mut self) {
        self.name = None;
        self.members.clear();
    }
}
