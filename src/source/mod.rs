//! Package source locations
//!
//! A pin's `location` is free text. Only GitHub locations can be looked up
//! remotely; this module recognises them:
//! - HTTPS: `https://github.com/owner/name.git`, `https://www.github.com/owner/name`
//! - SSH: `git@github.com:owner/name.git`, `ssh://git@github.com/owner/name`
//! - Web UI: `https://github.com/owner/name/tree/main` (extra segments ignored)

pub mod coordinates;

pub use coordinates::RepositoryCoordinates;
