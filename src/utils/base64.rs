//! Base 64 as used in DNS presentation format.
//!
//! This is the original alphabet of [RFC 4648] with padding. Decoding is
//! available for whole strings via [`decode`] and for the characters of a
//! scanned entry via [`SymbolConverter`]. Both go through the same group
//! decoder, so they accept and reject exactly the same input.
//!
//! [RFC 4648]: https://tools.ietf.org/html/rfc4648

use crate::base::scan::{ConvertSymbols, ScannerError};
use core::fmt;
use octseq::builder::{EmptyBuilder, FromBuilder, OctetsBuilder};
#[cfg(feature = "std")]
use std::string::String;

/// Decodes a complete Base 64 string.
pub fn decode<Octets>(s: &str) -> Result<Octets, DecodeError>
where
    Octets: FromBuilder,
    <Octets as FromBuilder>::Builder: EmptyBuilder,
{
    let mut target = <Octets as FromBuilder>::Builder::with_capacity(
        s.len() / 4 * 3,
    );
    let mut group = Group::default();
    for ch in s.chars() {
        if let Some(data) = group.push(ch)? {
            target
                .append_slice(data)
                .map_err(|_| DecodeError::ShortBuf)?;
        }
    }
    group.finish()?;
    Ok(Octets::from_builder(target))
}

/// Returns a value displaying `octets` in Base 64.
pub fn encode_display<Octs: AsRef<[u8]> + ?Sized>(
    octets: &Octs,
) -> Base64Display<'_> {
    Base64Display(octets.as_ref())
}

#[cfg(feature = "std")]
pub fn encode_string<Octs: AsRef<[u8]> + ?Sized>(octets: &Octs) -> String {
    use std::string::ToString;

    encode_display(octets).to_string()
}

//------------ Base64Display -------------------------------------------------

/// Octets displayed in Base 64.
#[derive(Clone, Copy, Debug)]
pub struct Base64Display<'a>(&'a [u8]);

impl fmt::Display for Base64Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for chunk in self.0.chunks(3) {
            let b0 = chunk[0];
            let b1 = chunk.get(1).copied().unwrap_or(0);
            let b2 = chunk.get(2).copied().unwrap_or(0);
            let sextets = [
                b0 >> 2,
                (b0 & 0x03) << 4 | b1 >> 4,
                (b1 & 0x0F) << 2 | b2 >> 6,
                b2 & 0x3F,
            ];
            // n octets need n + 1 symbols, the rest is padding.
            for &sextet in &sextets[..=chunk.len()] {
                f.write_char(char::from(ALPHABET[usize::from(sextet)]))?;
            }
            for _ in chunk.len()..3 {
                f.write_char(PAD)?;
            }
        }
        Ok(())
    }
}

//------------ SymbolConverter -----------------------------------------------

/// Decodes the Base 64 data of a scanned entry.
///
/// The data may be split over several tokens. Errors are reported as
/// scanner errors with the message of the [`DecodeError`].
#[derive(Clone, Debug, Default)]
pub struct SymbolConverter {
    group: Group,
}

impl SymbolConverter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Error: ScannerError> ConvertSymbols<Error> for SymbolConverter {
    fn process_char(&mut self, ch: char) -> Result<Option<&[u8]>, Error> {
        self.group.push(ch).map_err(|err| Error::custom(err.as_str()))
    }

    fn process_tail(&mut self) -> Result<Option<&[u8]>, Error> {
        self.group
            .finish()
            .map(|_| None)
            .map_err(|err| Error::custom(err.as_str()))
    }
}

//------------ Group ---------------------------------------------------------

/// The decoder for one group of four symbols.
#[derive(Clone, Debug, Default)]
struct Group {
    /// The values of the symbols seen so far, padding counts as zero.
    sextets: [u8; 4],

    /// The number of symbols in `sextets`.
    len: usize,

    /// The number of padding symbols in the current group.
    pad: usize,

    /// A padded group has ended the data.
    done: bool,

    /// The octets of the last completed group.
    octets: [u8; 3],
}

impl Group {
    /// Adds a symbol, returning the octets of a completed group.
    fn push(&mut self, ch: char) -> Result<Option<&[u8]>, DecodeError> {
        if self.done {
            return Err(DecodeError::TrailingInput);
        }
        if ch == PAD {
            // At least two symbols are needed for one octet.
            if self.len < 2 {
                return Err(DecodeError::IllegalChar(ch));
            }
            self.pad += 1;
            self.sextets[self.len] = 0;
        } else {
            let value = symbol_value(ch).ok_or(DecodeError::IllegalChar(ch))?;
            if self.pad > 0 {
                return Err(DecodeError::TrailingInput);
            }
            self.sextets[self.len] = value;
        }
        self.len += 1;
        if self.len < 4 {
            return Ok(None);
        }

        let [a, b, c, d] = self.sextets;
        self.octets = [a << 2 | b >> 4, b << 4 | c >> 2, c << 6 | d];
        self.len = 0;
        self.done = self.pad > 0;
        Ok(Some(&self.octets[..3 - self.pad]))
    }

    fn finish(&self) -> Result<(), DecodeError> {
        if self.len == 0 {
            Ok(())
        } else {
            Err(DecodeError::ShortInput)
        }
    }
}

fn symbol_value(ch: char) -> Option<u8> {
    let value = match ch {
        'A'..='Z' => ch as u32 - 'A' as u32,
        'a'..='z' => ch as u32 - 'a' as u32 + 26,
        '0'..='9' => ch as u32 - '0' as u32 + 52,
        '+' => 62,
        '/' => 63,
        _ => return None,
    };
    Some(value as u8)
}

const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const PAD: char = '=';

//------------ serde ---------------------------------------------------------

/// Serde support for octets as Base 64.
///
/// For use with `#[serde(with = "...")]`. Human readable formats get a
/// Base 64 string, compact formats the raw octets.
#[cfg(feature = "serde")]
pub mod serde {
    use core::fmt;
    use core::marker::PhantomData;
    use octseq::builder::{EmptyBuilder, FromBuilder};
    use octseq::serde::{DeserializeOctets, SerializeOctets};

    pub fn serialize<Octets, S>(
        octets: &Octets,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        Octets: AsRef<[u8]> + SerializeOctets,
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(&super::encode_display(octets))
        } else {
            octets.serialize_octets(serializer)
        }
    }

    pub fn deserialize<'de, Octets, D>(
        deserializer: D,
    ) -> Result<Octets, D::Error>
    where
        Octets: FromBuilder + DeserializeOctets<'de>,
        <Octets as FromBuilder>::Builder: EmptyBuilder,
        D: serde::Deserializer<'de>,
    {
        struct Base64Visitor<Octets>(PhantomData<Octets>);

        impl<'de, Octets> serde::de::Visitor<'de> for Base64Visitor<Octets>
        where
            Octets: FromBuilder,
            <Octets as FromBuilder>::Builder: EmptyBuilder,
        {
            type Value = Octets;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a Base 64 string")
            }

            fn visit_str<E: serde::de::Error>(
                self,
                v: &str,
            ) -> Result<Self::Value, E> {
                super::decode(v).map_err(E::custom)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(Base64Visitor(PhantomData))
        } else {
            Octets::deserialize_octets(deserializer)
        }
    }
}

//------------ DecodeError ---------------------------------------------------

/// Base 64 data could not be decoded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// A character outside the alphabet or misplaced padding.
    IllegalChar(char),

    /// Data after the padding.
    TrailingInput,

    /// The data ended inside a group.
    ShortInput,

    /// The decoded data didn’t fit into the target.
    ShortBuf,
}

impl DecodeError {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DecodeError::IllegalChar(_) => "illegal Base 64 data",
            DecodeError::TrailingInput => "trailing Base 64 data",
            DecodeError::ShortInput => "incomplete Base 64 data",
            DecodeError::ShortBuf => "buffer size exceeded",
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DecodeError::IllegalChar(ch) => {
                write!(f, "illegal Base 64 character '{}'", ch.escape_debug())
            }
            _ => f.write_str(self.as_str()),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

//============ Testing =======================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::*;
    use crate::base::scan::{IterScanner, Scanner};
    use std::vec::Vec;

    fn decode_vec(s: &str) -> Result<Vec<u8>, DecodeError> {
        decode(s)
    }

    #[test]
    fn decode_str() {
        assert_eq!(decode_vec("").unwrap(), b"");
        assert_eq!(decode_vec("Zg==").unwrap(), b"f");
        assert_eq!(decode_vec("Zm8=").unwrap(), b"fo");
        assert_eq!(decode_vec("Zm9vYmFy").unwrap(), b"foobar");
        assert_eq!(decode_vec("q80=").unwrap(), b"\xab\xcd");
        assert_eq!(decode_vec("+/+/").unwrap(), b"\xfb\xff\xbf");
    }

    #[test]
    fn decode_errors() {
        assert_eq!(decode_vec("FPucA"), Err(DecodeError::ShortInput));
        assert_eq!(decode_vec("FPucA="), Err(DecodeError::IllegalChar('=')));
        assert_eq!(decode_vec("FPucAw="), Err(DecodeError::ShortInput));
        assert_eq!(decode_vec("FPucAw=a"), Err(DecodeError::TrailingInput));
        assert_eq!(decode_vec("FPucAw==a"), Err(DecodeError::TrailingInput));
        assert_eq!(decode_vec("FPucAw==Zg=="), Err(DecodeError::TrailingInput));
        assert_eq!(decode_vec("q8!="), Err(DecodeError::IllegalChar('!')));
        assert_eq!(decode_vec("q8ö="), Err(DecodeError::IllegalChar('ö')));
    }

    #[test]
    fn encode() {
        assert_eq!(encode_string(b""), "");
        assert_eq!(encode_string(b"f"), "Zg==");
        assert_eq!(encode_string(b"fo"), "Zm8=");
        assert_eq!(encode_string(b"foo"), "Zm9v");
        assert_eq!(encode_string(b"foob"), "Zm9vYg==");
        assert_eq!(encode_string(b"foobar"), "Zm9vYmFy");
        assert_eq!(encode_string(b"\xfb\xff\xbf"), "+/+/");
    }

    #[test]
    fn symbol_converter() {
        fn convert(tokens: &[&str]) -> Result<Vec<u8>, &'static str> {
            IterScanner::<_, Vec<u8>>::new(tokens.iter().copied())
                .convert_entry(SymbolConverter::new())
                .map_err(|err| err.as_str())
        }

        assert_eq!(convert(&["q80="]).unwrap(), b"\xab\xcd");
        assert_eq!(convert(&["Zm9v", "YmE="]).unwrap(), b"fooba");
        assert_eq!(convert(&["Zm", "9v"]).unwrap(), b"foo");
        assert_eq!(convert(&[]).unwrap(), b"");
        assert_eq!(convert(&["Zm9"]).unwrap_err(), "incomplete Base 64 data");
        assert_eq!(convert(&["Zm9v!"]).unwrap_err(), "illegal Base 64 data");
    }
}
