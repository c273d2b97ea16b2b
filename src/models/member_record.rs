// Copyright (c) 2025 Nicholas D. Crosbie
use std::io::{self, Write};

// Structure to store one captured member of a container declaration
#[derive(Debug, Clone)]
pub struct MemberRecord {
    name: String,
    member_type: String,
    kind: String,
    access: String,
    decl: String,
}

impl MemberRecord {
    /// All five fields are stored as given; a member attribute the parser did
    /// not supply arrives here as an empty string, so the row shape is fixed.
    pub fn new(name: &str, member_type: &str, kind: &str, access: &str, decl: &str) -> Self {
        Self {
            name: name.to_string(),
            member_type: member_type.to_string(),
            kind: kind.to_string(),
            access: access.to_string(),
            decl: decl.to_string(),
        }
    }

    // member name | member type | member kind | member access | member declaration
    pub fn render(&self, sink: &mut impl Write) -> io::Result<()> {
        write!(
            sink,
            "|{}|{}|{}|{}|{}",
            self.name, self.member_type, self.kind, self.access, self.decl
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(record: &MemberRecord) -> String {
        let mut buffer = Vec::new();
        record.render(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn renders_five_fields_in_fixed_order() {
        let record = MemberRecord::new("x", "int", "variable", "public", "int x");
        assert_eq!(rendered(&record), "|x|int|variable|public|int x");
    }

    #[test]
    fn empty_fields_keep_their_delimiters() {
        let record = MemberRecord::new("x", "int", "", "public", "int x");
        assert_eq!(rendered(&record), "|x|int||public|int x");

        let record = MemberRecord::new("", "", "", "", "");
        assert_eq!(rendered(&record), "|||||");
    }

    #[test]
    fn embedded_delimiters_are_not_escaped() {
        // Known format limitation, preserved on purpose
        let record = MemberRecord::new("a|b", "int", "variable", "public", "int a|b");
        assert_eq!(rendered(&record), "|a|b|int|variable|public|int a|b");
    }
}
