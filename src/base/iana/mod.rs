//! IANA registries used by IPSECKEY records.
//!
//! Each registry type is a newtype around the raw integer. The values
//! listed in the registry are associated constants, but any other value
//! can be created through `from_int` and compares equal to a constant with
//! the same integer. All types implement the wire format traits.
//! [`Class`] and [`Rtype`] are written by their mnemonic in presentation
//! format, the IPSECKEY types by their decimal value.

pub use self::class::{Class, ClassFromStrError};
pub use self::ipseckey::{IpseckeyAlgorithm, IpseckeyGatewayType};
pub use self::rtype::{Rtype, RtypeFromStrError};

#[macro_use]
mod macros;

pub mod class;
pub mod ipseckey;
pub mod rtype;
