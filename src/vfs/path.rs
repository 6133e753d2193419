/// Path separator used by every fragment a client sends
pub const SEPARATOR: char = '/';

/// The filesystem root as a path string
pub const ROOT: &str = "/";

/// An absolute path held as normalized segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualPath {
    /// Path segments (e.g., ["Users", "alice", "notes.txt"])
    segments: Vec<String>,
}

impl VirtualPath {
    /// The absolute root path
    pub fn root() -> Self {
        VirtualPath {
            segments: Vec::new(),
        }
    }

    /// Check if this path has no segments, i.e. it is the root
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Join this path with another, folding `.` and `..` as it goes.
    ///
    /// `..` at the root stays at the root.
    pub fn join(&self, other: &str) -> Self {
        let mut new_segments = self.segments.clone();

        for segment in other.split(SEPARATOR) {
            if segment.is_empty() || segment == "." {
                continue;
            } else if segment == ".." {
                new_segments.pop();
            } else {
                new_segments.push(segment.to_string());
            }
        }

        VirtualPath {
            segments: new_segments,
        }
    }
}

impl std::fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.segments.is_empty() {
            write!(f, "{ROOT}")
        } else {
            write!(f, "{ROOT}{}", self.segments.join("/"))
        }
    }
}

/// Resolve a client-supplied fragment against the current directory.
///
/// Absolute fragments are returned as-is. Relative fragments are joined onto
/// `current` and the result is normalized lexically; the filesystem is never
/// consulted. An empty fragment resolves to `current` (normalized).
pub fn resolve(fragment: &str, current: &str) -> String {
    if fragment.starts_with(SEPARATOR) {
        return fragment.to_string();
    }

    VirtualPath::root().join(current).join(fragment).to_string()
}

/// Whether `path` names the filesystem root once normalized (`/`, `//`, `/a/..`)
pub fn is_root(path: &str) -> bool {
    VirtualPath::root().join(path).is_empty()
}
