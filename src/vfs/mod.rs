pub mod listing;
pub mod node;
pub mod path;

pub use listing::list;
pub use node::{DirEntry, EntryType};
pub use path::{ROOT, VirtualPath, is_root, resolve};
