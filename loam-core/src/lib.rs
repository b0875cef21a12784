#![warn(
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_qualifications
)]
#![forbid(unsafe_code)]

//! Library providing a growable region-based arena allocator and immutable
//! byte-string views allocated from it.
//!
//! See the [`arena`] module for allocation, whole-arena reclamation and
//! savepoint rollback. See the [`buf`] module for the byte-string type and
//! the [`search`] module for exact substring search.

pub mod arena;
pub mod ascii;
pub mod buf;
mod edit;
pub mod search;
