//! IPSECKEY record data for Rust.
//!
//! This crate implements the IPSECKEY resource record type defined in
//! [RFC 4025] together with the DNS building blocks it needs: domain names,
//! the relevant IANA registries, resource records, and conversion between
//! wire format and presentation format.
//!
//! # Modules
//!
//! * [base] contains the fundamental types, traits, and functionality to
//!   deal with DNS data,
//! * [rdata] contains the IPSECKEY record data type and its gateway, and
//! * [utils] contains Base 64 encoding and decoding used for the key.
//!
//! # Reference of Feature Flags
//!
//! The following is the complete list of the feature flags available.
//!
//! * `bytes`: Enables using the types `Bytes` and `BytesMut` from the
//!   [bytes](https://github.com/tokio-rs/bytes) crate as octet sequences.
//! * `heapless`: enables the use of the `Vec` type from the
//!   [heapless](https://github.com/japaric/heapless) crate as octet
//!   sequences.
//! * `serde`: Enables serde serialization for a number of basic types.
//! * `smallvec`: enables the use of the `Smallvec` type from the
//!   [smallvec](https://github.com/servo/rust-smallvec) crate as octet
//!   sequences.
//! * `std`: support for the Rust std library. This feature is enabled by
//!   default.
//!
//! Log events are emitted through the [tracing] crate. The library never
//! installs a subscriber.
//!
//! [RFC 4025]: https://tools.ietf.org/html/rfc4025
//! [tracing]: https://docs.rs/tracing

#![no_std]
#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

#[macro_use]
extern crate core;

pub mod base;
pub mod rdata;
pub mod utils;
