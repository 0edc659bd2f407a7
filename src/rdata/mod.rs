//! Record data implementations.
//!
//! The types are named after the [`Rtype`] they implement and are defined
//! in a submodule for that record type. They are also re-exported here.
//!
//! [`Rtype`]: crate::base::iana::Rtype

pub mod ipseckey;

pub use self::ipseckey::{Gateway, Ipseckey, IpseckeyError};
