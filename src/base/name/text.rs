//! Reading names from their presentation format.

use super::label::Label;
use core::fmt;
use octseq::builder::OctetsBuilder;

/// Appends the wire format of the labels in `chars` to `target`.
///
/// The root label is never appended. Returns the number of octets
/// appended and whether the name was absolute, i.e., ended in a dot. A
/// single dot is the root name and appends nothing.
pub(crate) fn append_chars<C, Target>(
    chars: C,
    target: &mut Target,
) -> Result<(usize, bool), FromStrError>
where
    C: IntoIterator<Item = char>,
    Target: OctetsBuilder + ?Sized,
{
    let mut chars = chars.into_iter().peekable();
    if chars.peek().is_none() {
        return Err(FromStrError::EmptyName);
    }
    if chars.peek() == Some(&'.') {
        chars.next();
        return match chars.next() {
            None => Ok((0, true)),
            Some(_) => Err(FromStrError::EmptyLabel),
        };
    }

    let mut label = [0u8; Label::MAX_LEN];
    let mut label_len = 0;
    let mut written = 0;
    let mut absolute = false;
    while let Some(ch) = chars.next() {
        let octet = match ch {
            '.' => {
                if label_len == 0 {
                    return Err(FromStrError::EmptyLabel);
                }
                written += push_label(&label[..label_len], target)?;
                label_len = 0;
                if chars.peek().is_none() {
                    absolute = true;
                }
                continue;
            }
            '\\' => unescape(&mut chars)?,
            ' '..='~' => ch as u8,
            _ => return Err(FromStrError::IllegalCharacter(ch)),
        };
        if label_len == Label::MAX_LEN {
            return Err(FromStrError::LongLabel);
        }
        label[label_len] = octet;
        label_len += 1;
    }
    if label_len > 0 {
        written += push_label(&label[..label_len], target)?;
    }
    if written > 254 {
        return Err(FromStrError::LongName);
    }
    Ok((written, absolute))
}

fn push_label<Target: OctetsBuilder + ?Sized>(
    label: &[u8],
    target: &mut Target,
) -> Result<usize, FromStrError> {
    // The label length is at most 63 octets.
    target
        .append_slice(&[label.len() as u8])
        .and_then(|_| target.append_slice(label))
        .map_err(|_| FromStrError::ShortBuf)?;
    Ok(label.len() + 1)
}

/// Reads the rest of an escape sequence after the backslash.
fn unescape<C: Iterator<Item = char>>(chars: &mut C) -> Result<u8, FromStrError> {
    let first = chars.next().ok_or(FromStrError::IllegalEscape)?;
    let Some(high) = first.to_digit(10) else {
        return if first.is_ascii() {
            Ok(first as u8)
        } else {
            Err(FromStrError::IllegalCharacter(first))
        };
    };
    let mut value = high;
    for _ in 0..2 {
        let digit = chars
            .next()
            .and_then(|ch| ch.to_digit(10))
            .ok_or(FromStrError::IllegalEscape)?;
        value = value * 10 + digit;
    }
    u8::try_from(value).map_err(|_| FromStrError::IllegalEscape)
}

//------------ FromStrError --------------------------------------------------

/// A name could not be read from its presentation format.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FromStrError {
    /// The string was empty.
    EmptyName,

    /// A label other than the root label was empty.
    EmptyLabel,

    /// A label was longer than 63 octets.
    LongLabel,

    /// The name was longer than 255 octets.
    LongName,

    /// A backslash wasn’t followed by a character or by three digits
    /// giving a value up to 255.
    IllegalEscape,

    /// A character outside of printable ASCII appeared unescaped.
    IllegalCharacter(char),

    /// The octets builder ran out of space.
    ShortBuf,
}

impl FromStrError {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FromStrError::EmptyName => "empty domain name",
            FromStrError::EmptyLabel => "empty label",
            FromStrError::LongLabel => "label too long",
            FromStrError::LongName => "domain name too long",
            FromStrError::IllegalEscape => "illegal escape sequence",
            FromStrError::IllegalCharacter(_) => "illegal character",
            FromStrError::ShortBuf => "buffer size exceeded",
        }
    }
}

impl fmt::Display for FromStrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FromStrError::IllegalCharacter(ch) => {
                write!(f, "illegal character '{}'", ch)
            }
            _ => f.write_str(self.as_str()),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FromStrError {}

//============ Testing =======================================================
