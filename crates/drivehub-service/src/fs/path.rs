//! Slash-joined path helpers for the mock file tree.
//!
//! Paths are POSIX-style strings rooted at `"/"`. Children of a directory
//! are stored as plain names, so joining and splitting must agree on how
//! the root is spelled.

/// Parent directory of `path`. The parent of a top-level entry is `"/"`.
pub fn parent_of(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some(("", _)) => "/",
        Some((parent, _)) => parent,
        None => "/",
    }
}

/// Leaf name of `path` (everything after the final slash).
pub fn leaf_name(path: &str) -> &str {
    path.rsplit_once('/').map(|(_, name)| name).unwrap_or(path)
}

/// Join a directory path and a child name.
pub fn join(parent: &str, name: &str) -> String {
    if parent == "/" {
        format!("/{name}")
    } else {
        format!("{parent}/{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_of() {
        assert_eq!(parent_of("/Documents/work"), "/Documents");
        assert_eq!(parent_of("/Documents"), "/");
        assert_eq!(parent_of("loose"), "/");
    }

    #[test]
    fn test_leaf_name() {
        assert_eq!(leaf_name("/Documents/work"), "work");
        assert_eq!(leaf_name("/Documents"), "Documents");
    }

    #[test]
    fn test_join_handles_root() {
        assert_eq!(join("/", "Documents"), "/Documents");
        assert_eq!(join("/Documents", "work"), "/Documents/work");
    }

    #[test]
    fn test_join_and_split_agree() {
        let full = join("/Documents", "work");
        assert_eq!(parent_of(&full), "/Documents");
        assert_eq!(leaf_name(&full), "work");
    }
}
