//! Reading values from presentation format.
//!
//! Presentation format arrives as a sequence of tokens. The [`Scanner`]
//! trait hands out these tokens in the forms record data needs them: as
//! short ASCII strings, as domain names, or converted into octets. Types
//! that can be read from a single token implement [`Scan`].
//!
//! [`IterScanner`] is a simple scanner over an iterator of strings, each
//! being one token of a single entry.

use super::name::{append_chars, Name, ToName};
use core::fmt;
use core::iter::Peekable;
use octseq::builder::{EmptyBuilder, FromBuilder, OctetsBuilder};

//------------ Scanner -------------------------------------------------------

/// A source of presentation format tokens for a single entry.
pub trait Scanner {
    /// The octets type produced by the scanner.
    type Octets: AsRef<[u8]>;

    /// The name type produced by the scanner.
    type Name: ToName;

    /// The error type of the scanner.
    type Error: ScannerError;

    /// Returns whether the entry has more tokens.
    fn continues(&mut self) -> bool;

    /// Takes the next token and passes it to `op` as a string.
    ///
    /// The token must consist of ASCII characters only.
    fn scan_ascii_str<F, T>(&mut self, op: F) -> Result<T, Self::Error>
    where
        F: FnOnce(&str) -> Result<T, Self::Error>;

    /// Takes the next token as a domain name.
    ///
    /// A relative name is completed with the origin of the scanner.
    fn scan_name(&mut self) -> Result<Self::Name, Self::Error>;

    /// Converts all remaining tokens of the entry into octets.
    ///
    /// The characters of all tokens are fed into `converter` as one
    /// sequence, so the data may be split up by white space.
    fn convert_entry<C: ConvertSymbols<Self::Error>>(
        &mut self,
        converter: C,
    ) -> Result<Self::Octets, Self::Error>;
}

//------------ ScannerError --------------------------------------------------

/// The error type of a scanner.
pub trait ScannerError: Sized {
    /// Creates an error with the given message.
    fn custom(msg: &'static str) -> Self;

    /// Creates an error for running out of tokens.
    fn end_of_entry() -> Self;

    /// Creates an error for running out of buffer space.
    fn short_buf() -> Self;
}

//------------ ConvertSymbols ------------------------------------------------

/// Converting the characters of presentation format into octets.
pub trait ConvertSymbols<Error> {
    /// Processes a character.
    ///
    /// Returns octets if the character completed some.
    fn process_char(&mut self, ch: char) -> Result<Option<&[u8]>, Error>;

    /// Processes the end of the data.
    ///
    /// Returns any octets still pending.
    fn process_tail(&mut self) -> Result<Option<&[u8]>, Error>;
}

//------------ Scan ----------------------------------------------------------

/// A type that can be scanned from a single token.
pub trait Scan<S: Scanner>: Sized {
    fn scan(scanner: &mut S) -> Result<Self, S::Error>;
}

macro_rules! scan_decimal {
    ( $type:ty ) => {
        impl<S: Scanner> Scan<S> for $type {
            /// Scans an unsigned decimal number that fits the type.
            fn scan(scanner: &mut S) -> Result<Self, S::Error> {
                scanner.scan_ascii_str(|token| {
                    if token.is_empty() {
                        return Err(S::Error::custom("expected decimal number"));
                    }
                    token.bytes().try_fold(0 as $type, |res, ch| {
                        if !ch.is_ascii_digit() {
                            return Err(S::Error::custom(
                                "expected decimal number",
                            ));
                        }
                        res.checked_mul(10)
                            .and_then(|res| {
                                res.checked_add(<$type>::from(ch - b'0'))
                            })
                            .ok_or_else(|| {
                                S::Error::custom("decimal number overflow")
                            })
                    })
                })
            }
        }
    };
}

scan_decimal!(u8);
scan_decimal!(u16);
scan_decimal!(u32);

//------------ IterScanner ---------------------------------------------------

/// A scanner over an iterator of tokens.
///
/// All tokens belong to one entry. Domain names are completed with the
/// origin given at creation. Without an origin, relative names are taken
/// to be absolute.
pub struct IterScanner<Iter: Iterator, Octets> {
    tokens: Peekable<Iter>,
    origin: Option<Name<Octets>>,
}

impl<Iter: Iterator, Octets> IterScanner<Iter, Octets> {
    /// Creates a new scanner without an origin.
    pub fn new<I: IntoIterator<IntoIter = Iter>>(tokens: I) -> Self {
        IterScanner {
            tokens: tokens.into_iter().peekable(),
            origin: None,
        }
    }

    /// Creates a new scanner completing relative names with `origin`.
    pub fn with_origin<I: IntoIterator<IntoIter = Iter>>(
        tokens: I,
        origin: Name<Octets>,
    ) -> Self {
        IterScanner {
            tokens: tokens.into_iter().peekable(),
            origin: Some(origin),
        }
    }

    pub fn origin(&self) -> Option<&Name<Octets>> {
        self.origin.as_ref()
    }

    /// Returns whether all tokens have been consumed.
    pub fn is_exhausted(&mut self) -> bool {
        self.tokens.peek().is_none()
    }
}

impl<Iter, Octets> Scanner for IterScanner<Iter, Octets>
where
    Iter: Iterator,
    Iter::Item: AsRef<str>,
    Octets: FromBuilder,
    <Octets as FromBuilder>::Builder: EmptyBuilder,
{
    type Octets = Octets;
    type Name = Name<Octets>;
    type Error = StrError;

    fn continues(&mut self) -> bool {
        !self.is_exhausted()
    }

    fn scan_ascii_str<F, T>(&mut self, op: F) -> Result<T, Self::Error>
    where
        F: FnOnce(&str) -> Result<T, Self::Error>,
    {
        let token = self.tokens.next().ok_or_else(StrError::end_of_entry)?;
        let token = token.as_ref();
        if !token.is_ascii() {
            return Err(StrError::custom("expected ASCII token"));
        }
        op(token)
    }

    fn scan_name(&mut self) -> Result<Self::Name, Self::Error> {
        let token = self.tokens.next().ok_or_else(StrError::end_of_entry)?;
        let mut builder = <Octets as FromBuilder>::Builder::with_capacity(64);
        let (len, absolute) = append_chars(token.as_ref().chars(), &mut builder)
            .map_err(|err| StrError(err.as_str()))?;
        let suffix = match self.origin {
            Some(ref origin) if !absolute => origin.as_slice(),
            _ => b"\0".as_slice(),
        };
        if len + suffix.len() > 255 {
            return Err(StrError::custom("domain name too long"));
        }
        builder
            .append_slice(suffix)
            .map_err(|_| StrError::short_buf())?;
        // The labels were checked and the suffix is an absolute name.
        Ok(unsafe { Name::from_octets_unchecked(Octets::from_builder(builder)) })
    }

    fn convert_entry<C: ConvertSymbols<Self::Error>>(
        &mut self,
        mut converter: C,
    ) -> Result<Self::Octets, Self::Error> {
        let mut builder = <Octets as FromBuilder>::Builder::empty();
        for token in self.tokens.by_ref() {
            for ch in token.as_ref().chars() {
                if let Some(data) = converter.process_char(ch)? {
                    builder
                        .append_slice(data)
                        .map_err(|_| StrError::short_buf())?;
                }
            }
        }
        if let Some(data) = converter.process_tail()? {
            builder
                .append_slice(data)
                .map_err(|_| StrError::short_buf())?;
        }
        Ok(Octets::from_builder(builder))
    }
}

//------------ StrError ------------------------------------------------------

/// The error of an [`IterScanner`], a static message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StrError(&'static str);

impl StrError {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl ScannerError for StrError {
    fn custom(msg: &'static str) -> Self {
        StrError(msg)
    }

    fn end_of_entry() -> Self {
        StrError("unexpected end of entry")
    }

    fn short_buf() -> Self {
        StrError("short buffer")
    }
}

impl fmt::Display for StrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StrError {}

//============ Testing =======================================================
