//! # pkgdag-error
//!
//! Unified error handling for pkgdag.
//!
//! ## Design
//!
//! - **ErrorKind**: what went wrong (e.g. `PackageNotFound`, `InvalidPattern`)
//! - **ErrorStatus**: how the run reacts to it (`Recoverable` or `Fatal`)
//! - **Error Context**: key-value pairs that help locate the cause
//! - **Error Source**: the underlying error, wrapped without leaking its type
//!
//! ## Usage
//!
//! ```rust
//! use pkgdag_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::PackageNotFound, "cannot find package")
//!         .with_operation("golist::import")
//!         .with_context("package", "github.com/acme/missing"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, pkgdag_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - An error is classified once; later layers only append context
//! - Nothing is retried: recoverable errors drop one package, fatal errors end the run

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using the pkgdag Error
pub type Result<T> = std::result::Result<T, Error>;
