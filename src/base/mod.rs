//! Fundamental types, traits, and functionality.
//!
//! This module provides what is needed to handle DNS record data: domain
//! names, the IANA registries for the record fields, records themselves,
//! and the machinery for converting all of these between wire format and
//! presentation format.
//!
//! Wire format is composed through the [`Composer`][wire::Composer] trait
//! and any octets builder implementing it, and parsed with octseq’s
//! [`Parser`][octseq::parse::Parser]. Presentation format is read through
//! the [`Scanner`][scan::Scanner] trait and written via
//! [`ZonefileFmt`][zonefile_fmt::ZonefileFmt].

//--- Re-exports

pub use self::cmp::CanonicalOrd;
pub use self::iana::{Class, IpseckeyAlgorithm, IpseckeyGatewayType, Rtype};
pub use self::name::{
    Name, RelativeName, ToLabelIter, ToName, UncertainName,
};
pub use self::rdata::{
    ComposeRecordData, LongRecordData, ParseRecordData, RecordData,
};
pub use self::record::{Record, Ttl};
pub use self::scan::{Scan, Scanner, ScannerError};
pub use self::wire::{Compose, Composer, FormError, Parse, ParseError};
pub use self::zonefile_fmt::ZonefileFmt;

//--- Modules

pub mod cmp;
pub mod iana;
pub mod name;
pub mod net;
pub mod rdata;
pub mod record;
pub mod scan;
pub mod wire;
pub mod zonefile_fmt;
