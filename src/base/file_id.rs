//! Handles for files and directories in the host's project snapshot.

use std::fmt;

/// An opaque identifier for a source file in the host's project snapshot.
///
/// `FileId` is a lightweight handle (just a u32). The file's path, content,
/// and directory placement live in the host; the engine only carries the
/// handle for the duration of one resolution call.
///
/// Using `FileId` instead of a path throughout the engine:
/// - Makes comparisons O(1) instead of O(n)
/// - Keeps the engine independent of the host's path representation
/// - Enables cheap copying and hashing (visited sets are sets of handles)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FileId(pub u32);

impl FileId {
    /// Create a new FileId from a raw index.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileId({})", self.0)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file#{}", self.0)
    }
}

impl From<u32> for FileId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<FileId> for u32 {
    #[inline]
    fn from(id: FileId) -> Self {
        id.0
    }
}

/// An opaque identifier for a directory in the host's project snapshot.
///
/// Same representation trade-offs as [`FileId`]. Directory handles appear in
/// the engine only as the starting point and cursor of relative module-path
/// walks; the host owns the actual tree.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DirId(pub u32);

impl DirId {
    /// Create a new DirId from a raw index.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for DirId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DirId({})", self.0)
    }
}

impl fmt::Display for DirId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dir#{}", self.0)
    }
}

impl From<u32> for DirId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_id_equality() {
        let a = FileId::new(1);
        let b = FileId::new(1);
        let c = FileId::new(2);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_handles_in_sets() {
        use std::collections::HashSet;

        let mut files = HashSet::new();
        files.insert(FileId::new(1));
        files.insert(FileId::new(2));
        files.insert(FileId::new(1)); // duplicate

        assert_eq!(files.len(), 2);

        let mut dirs = HashSet::new();
        dirs.insert(DirId::new(0));
        dirs.insert(DirId::new(0));
        assert_eq!(dirs.len(), 1);
    }

    #[test]
    fn test_handle_sizes() {
        assert_eq!(std::mem::size_of::<FileId>(), 4);
        assert_eq!(std::mem::size_of::<DirId>(), 4);
    }
}
