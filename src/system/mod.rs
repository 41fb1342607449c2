//! # System Interaction Layer
//!
//! The boundary between the generators and the outside world.
//!
//! ## Modules
//!
//! - **`fs`**: the `FileSystem` trait and its disk-backed implementation. Creating
//!   directories, writing files without overwriting, and reading the manifest all
//!   go through it.
//! - **`console`**: the `Reporter` trait used for every user-facing message, and the
//!   colored terminal implementation.

pub mod console;
pub mod fs;
