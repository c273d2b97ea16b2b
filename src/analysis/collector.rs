// Copyright (c) 2025 Nicholas D. Crosbie
use crate::analysis::visitor::DeclVisitor;
use crate::args::Config;
use crate::models::{ContainerRecord, DeclNode};
use std::io::{self, Write};

// Walks the declaration tree and writes one pipe-delimited block per
// matching container
pub struct CsvCollector<'a, W: Write> {
    config: &'a Config,
    sink: W,
    current: Option<ContainerRecord>,
    containers_emitted: usize,
}

impl<'a, W: Write> CsvCollector<'a, W> {
    pub fn new(config: &'a Config, sink: W) -> Self {
        Self {
            config,
            sink,
            current: None,
            containers_emitted: 0,
        }
    }

    pub fn containers_emitted(&self) -> usize {
        self.containers_emitted
    }

    /// Hands the sink back so the driver can flush it.
    pub fn into_sink(self) -> W {
        self.sink
    }

    fn log_verbose(&self, message: &str) {
        if self.config.verbose {
            eprintln!("{}", message);
        }
    }
}

impl<W: Write> DeclVisitor for CsvCollector<'_, W> {
    /// One full container cycle: fresh record, direct members, emit, drop.
    /// A configured filter that does not match the container's symbolic name
    /// (byte-for-byte, no trimming or case folding) skips the container and
    /// all its descendants without emitting anything.
    fn container_declaration(&mut self, node: &DeclNode) -> io::Result<()> {
        let name = node.attr_opt("sym:name");
        if let Some(filter) = self.config.filter.as_deref() {
            // An unnamed container can never match a configured filter
            if name != Some(filter) {
                self.log_verbose(&format!(
                    "Skipping container {}",
                    name.unwrap_or("<unnamed>")
                ));
                return Ok(());
            }
        }

        let mut record = ContainerRecord::new();
        record.set_name(name.map(str::to_string));
        self.current = Some(record);

        for child in &node.children {
            if child.is_member() {
                self.member_declaration(child)?;
            } else if child.is_container() {
                // The model is a flat container list; a nested container is
                // never grouped into its parent's block
                self.log_verbose(&format!(
                    "Skipping nested container {} inside {}",
                    child.attr("sym:name"),
                    node.attr("sym:name")
                ));
            }
        }

        self.log_verbose("Emitting metadata");
        if let Some(record) = self.current.take() {
            record.emit(&mut self.sink)?;
            self.containers_emitted += 1;
        }
        Ok(())
    }

    /// Captures the member's attributes; each one reads as an empty string
    /// when the parser did not supply it, keeping the row shape fixed.
    /// A member seen outside a container cycle (a global declaration sitting
    /// beside the containers) is absorbed without effect.
    fn member_declaration(&mut self, node: &DeclNode) -> io::Result<()> {
        if let Some(record) = self.current.as_mut() {
            record.add_member(
                node.attr("sym:name"),
                node.attr("type"),
                node.attr("kind"),
                node.attr("access"),
                node.attr("decl"),
            );
        }
        Ok(())
    }
}
