//! Traits for record data.
//!
//! Record data is the type specific part of a resource record. A type
//! holding record data implements [`RecordData`] to name its record type,
//! [`ComposeRecordData`] to write its wire format, and
//! [`ParseRecordData`] to be read from wire format when it is given the
//! record type. The IPSECKEY data type lives in [`crate::rdata`].

use super::iana::Rtype;
use super::wire::{Compose, Composer, ParseError};
use core::fmt;
use octseq::parse::Parser;

//------------ RecordData ----------------------------------------------------

/// A type holding record data.
pub trait RecordData {
    /// Returns the record type of the data.
    fn rtype(&self) -> Rtype;
}

impl<T: RecordData + ?Sized> RecordData for &T {
    fn rtype(&self) -> Rtype {
        (**self).rtype()
    }
}

//------------ ComposeRecordData ---------------------------------------------

/// Record data that can be written in wire format.
///
/// Names in the record data are never compressed, so the length of the
/// data doesn’t depend on the target. Types check on creation that the
/// length fits into the 16 bit record data length.
pub trait ComposeRecordData: RecordData {
    /// Returns the length of the wire format.
    fn rdlen(&self) -> u16;

    /// Appends the wire format to `target`.
    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;

    /// Appends the canonical wire format to `target`.
    ///
    /// This is the form of RFC 4034 with all names lowercased.
    fn compose_canonical_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;

    /// Appends the record data length and then the wire format.
    fn compose_len_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.rdlen().compose(target)?;
        self.compose_rdata(target)
    }

    /// Appends the record data length and then the canonical wire format.
    fn compose_canonical_len_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.rdlen().compose(target)?;
        self.compose_canonical_rdata(target)
    }
}

impl<T: ComposeRecordData + ?Sized> ComposeRecordData for &T {
    fn rdlen(&self) -> u16 {
        (**self).rdlen()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        (**self).compose_rdata(target)
    }

    fn compose_canonical_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        (**self).compose_canonical_rdata(target)
    }
}

//------------ ParseRecordData -----------------------------------------------

/// Record data that can be read from wire format.
pub trait ParseRecordData<'a, Octs: ?Sized>: RecordData + Sized {
    /// Parses record data of a record with type `rtype`.
    ///
    /// Returns `Ok(None)` without touching `parser` if the type doesn’t
    /// handle `rtype`. Otherwise, `parser` is limited to the record data
    /// and the caller deals with anything left over.
    fn parse_rdata(
        rtype: Rtype,
        parser: &mut Parser<'a, Octs>,
    ) -> Result<Option<Self>, ParseError>;
}

//------------ LongRecordData ------------------------------------------------

/// Record data would be longer than 65535 octets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LongRecordData(());

impl LongRecordData {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        "record data too long"
    }

    /// Checks that `len` octets fit into the record data length field.
    pub fn check_len(len: usize) -> Result<(), Self> {
        if len > usize::from(u16::MAX) {
            Err(LongRecordData(()))
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for LongRecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LongRecordData {}

//============ Testing =======================================================
