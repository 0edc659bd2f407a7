//! Networking-related types used in DNS data.
//!
//! The IP address types live in `core::net`, so they are available both
//! with and without the `std` feature. This module re-exports them under a
//! single path for use throughout the crate.

pub use core::net::{AddrParseError, IpAddr, Ipv4Addr, Ipv6Addr};
