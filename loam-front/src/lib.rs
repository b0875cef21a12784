#![warn(
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_qualifications
)]
#![forbid(unsafe_code)]

//! A library that provides a frontend (loading files into arena-owned
//! buffers and printing diagnostics) for programs built on the `loam`
//! substrate.
//!
//! # Example
//!
//! ```
//! use loam_core::buf::Buf;
//!
//! // Create a session, which owns a `loam_core::arena::Arena`.
//! let mut session = loam_front::Session::new();
//!
//! // Load a virtual (i.e., not from the file system) file.
//! let haystack = session.load_virt_file("<example>", b"hello world!");
//!
//! assert_eq!(haystack.find(Buf::from("or"), session.arena()), Some(7));
//! ```

mod print;
mod session;

pub use session::Session;
