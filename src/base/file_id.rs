//! Interned file identifiers.

/// A handle to a file known to the analysis host.
///
/// `FileId`s are assigned when a file first enters the host and are only
/// meaningful relative to the host that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(u32);

impl FileId {
    /// Create a FileId from a raw index.
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index.
    pub fn index(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FileId({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_id_roundtrip() {
        let id = FileId::new(42);
        assert_eq!(id.index(), 42);
        assert_eq!(id, FileId::new(42));
        assert_ne!(id, FileId::new(43));
    }
}
