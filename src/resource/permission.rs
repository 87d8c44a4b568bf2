//! Permission levels
//!
//! Access rights stored on every resource. Rights gate non-owner access
//! only; owners bypass them entirely.

use std::fmt;

/// Access rights granted to non-owners of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    None,
    Read,
    Write,
    ReadWrite,
}

impl Permission {
    /// Parses the wire form used by boundary layers: `""`, `"r"`, `"w"`
    /// or `"rw"`.
    pub fn parse(value: &str) -> Option<Permission> {
        match value {
            "" => Some(Permission::None),
            "r" => Some(Permission::Read),
            "w" => Some(Permission::Write),
            "rw" => Some(Permission::ReadWrite),
            _ => None,
        }
    }

    /// The wire form of this permission.
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::None => "",
            Permission::Read => "r",
            Permission::Write => "w",
            Permission::ReadWrite => "rw",
        }
    }

    /// Whether this permission allows a non-owner to read.
    pub fn grants_read(self) -> bool {
        matches!(self, Permission::Read | Permission::ReadWrite)
    }

    /// Whether this permission allows a non-owner to write.
    pub fn grants_write(self) -> bool {
        matches!(self, Permission::Write | Permission::ReadWrite)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_forms() {
        assert_eq!(Permission::parse(""), Some(Permission::None));
        assert_eq!(Permission::parse("r"), Some(Permission::Read));
        assert_eq!(Permission::parse("w"), Some(Permission::Write));
        assert_eq!(Permission::parse("rw"), Some(Permission::ReadWrite));
        assert_eq!(Permission::parse("x"), None);
        assert_eq!(Permission::parse("RW"), None);
    }

    #[test]
    fn test_round_trip() {
        for permission in [
            Permission::None,
            Permission::Read,
            Permission::Write,
            Permission::ReadWrite,
        ] {
            assert_eq!(Permission::parse(permission.as_str()), Some(permission));
        }
    }

    #[test]
    fn test_gates() {
        assert!(!Permission::None.grants_read());
        assert!(!Permission::None.grants_write());
        assert!(Permission::Read.grants_read());
        assert!(!Permission::Read.grants_write());
        assert!(!Permission::Write.grants_read());
        assert!(Permission::Write.grants_write());
        assert!(Permission::ReadWrite.grants_read());
        assert!(Permission::ReadWrite.grants_write());
    }
}
