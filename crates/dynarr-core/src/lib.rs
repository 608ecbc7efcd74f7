//! Exclusive-ownership buffer primitive for the dynarr container.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! [`OwnedBuf`], a move-only handle that owns one contiguous block of
//! initialized slots. The buffer knows how many slots it owns (that is
//! allocation bookkeeping) but has no notion of a logical element count —
//! tracking which slots are "live" is the creator's job.
//!
//! # Safety posture
//!
//! All allocation goes through `Box<[T]>`; every slot always holds a valid
//! value. The only `unsafe` in the workspace is the pair of unchecked
//! accessors on [`OwnedBuf`], each with a mandatory `// SAFETY:` comment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod buf;

pub use buf::OwnedBuf;
