//! Wire format basics.
//!
//! Composing appends to any octets builder that implements [`Composer`].
//! Parsing reads from octseq’s [`Parser`]. The fixed-size values used in
//! record data, i.e., integers and IP addresses, get both directions
//! through the [`Compose`] and [`Parse`] extension traits.

use super::name::ToName;
use super::net::{Ipv4Addr, Ipv6Addr};
use core::fmt;
use octseq::builder::{OctetsBuilder, Truncate};
use octseq::parse::{Parser, ShortInput};

//------------ Composer ------------------------------------------------------

/// An octets builder that record data can be composed into.
///
/// Besides appending, the builder must allow looking at and changing what
/// has been written already, so the length prefix of record data can be
/// filled in afterwards.
pub trait Composer:
    OctetsBuilder + AsRef<[u8]> + AsMut<[u8]> + Truncate
{
    /// Appends a domain name, compressing it if the composer can.
    ///
    /// Only names that the record format allows to be compressed may be
    /// given to this method. Without compression support it just appends
    /// the name as is.
    fn append_compressed_name<N: ToName + ?Sized>(
        &mut self,
        name: &N,
    ) -> Result<(), Self::AppendError> {
        name.compose(self)
    }

    /// Returns whether names given to `append_compressed_name` may shrink.
    fn can_compress(&self) -> bool {
        false
    }
}

#[cfg(feature = "std")]
impl Composer for std::vec::Vec<u8> {}

impl<const N: usize> Composer for octseq::array::Array<N> {}

#[cfg(feature = "bytes")]
impl Composer for bytes::BytesMut {}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array<Item = u8>> Composer for smallvec::SmallVec<A> {}

#[cfg(feature = "heapless")]
impl<const N: usize> Composer for heapless::Vec<u8, N> {}

//------------ Compose and Parse ---------------------------------------------

/// Appending fixed-size values in wire format.
pub trait Compose {
    /// The number of octets the value occupies on the wire.
    const COMPOSE_LEN: u16;

    /// Appends the value to `target`.
    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;
}

/// Taking fixed-size values from wire format.
pub trait Parse<'a, Octs: ?Sized>: Sized {
    /// Takes a value from the beginning of the parser.
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError>;
}

/// Implements both traits for types that convert to and from an array.
macro_rules! fixed_wire {
    ( $type:ty, $len:expr, $to:expr, $from:expr ) => {
        impl Compose for $type {
            const COMPOSE_LEN: u16 = $len;

            fn compose<Target: OctetsBuilder + ?Sized>(
                &self,
                target: &mut Target,
            ) -> Result<(), Target::AppendError> {
                target.append_slice(&$to(*self))
            }
        }

        impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for $type {
            fn parse(
                parser: &mut Parser<'a, Octs>,
            ) -> Result<Self, ParseError> {
                let mut buf = [0u8; $len];
                parser.parse_buf(&mut buf)?;
                Ok($from(buf))
            }
        }
    };
}

fixed_wire!(u8, 1, u8::to_be_bytes, u8::from_be_bytes);
fixed_wire!(u16, 2, u16::to_be_bytes, u16::from_be_bytes);
fixed_wire!(u32, 4, u32::to_be_bytes, u32::from_be_bytes);
fixed_wire!(Ipv4Addr, 4, |addr: Ipv4Addr| addr.octets(), Ipv4Addr::from);
fixed_wire!(Ipv6Addr, 16, |addr: Ipv6Addr| addr.octets(), Ipv6Addr::from);

//------------ ParseError ----------------------------------------------------

/// Wire format data could not be parsed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The data ended before the value was complete.
    ShortInput,

    /// The data was not formatted correctly.
    Form(FormError),
}

impl ParseError {
    /// Creates a form error with the given message.
    #[must_use]
    pub fn form_error(msg: &'static str) -> Self {
        FormError::new(msg).into()
    }
}

impl From<ShortInput> for ParseError {
    fn from(_: ShortInput) -> Self {
        ParseError::ShortInput
    }
}

impl From<FormError> for ParseError {
    fn from(err: FormError) -> Self {
        ParseError::Form(err)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ParseError::ShortInput => f.write_str("unexpected end of input"),
            ParseError::Form(ref err) => fmt::Display::fmt(err, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

//------------ FormError -----------------------------------------------------

/// Wire format data was malformed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormError(&'static str);

impl FormError {
    #[must_use]
    pub fn new(msg: &'static str) -> Self {
        FormError(msg)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use octseq::array::Array;

    #[test]
    fn fixed_values() {
        let mut buf = Array::<32>::new();
        0x12u8.compose(&mut buf).unwrap();
        0x3456u16.compose(&mut buf).unwrap();
        0x789a_bcdeu32.compose(&mut buf).unwrap();
        Ipv4Addr::new(192, 0, 2, 1).compose(&mut buf).unwrap();
        let wire: &[u8] = buf.as_ref();
        assert_eq!(wire, b"\x12\x34\x56\x78\x9a\xbc\xde\xc0\x00\x02\x01");

        let mut parser = Parser::from_ref(wire);
        assert_eq!(u8::parse(&mut parser), Ok(0x12));
        assert_eq!(u16::parse(&mut parser), Ok(0x3456));
        assert_eq!(u32::parse(&mut parser), Ok(0x789a_bcde));
        assert_eq!(
            Ipv4Addr::parse(&mut parser),
            Ok(Ipv4Addr::new(192, 0, 2, 1))
        );
        assert_eq!(u8::parse(&mut parser), Err(ParseError::ShortInput));
    }

    #[test]
    fn short_address() {
        let mut parser = Parser::from_ref(b"\x20\x01\x0d\xb8".as_slice());
        assert_eq!(Ipv6Addr::parse(&mut parser), Err(ParseError::ShortInput));
    }
}
