//! Domain names.
//!
//! A domain name is a sequence of labels, each up to 63 octets. In wire
//! format every label is preceded by an octet with its length. An absolute
//! name ends in the empty root label and is at most 255 octets long.
//!
//! Names in IPSECKEY record data are never compressed, so only the flat,
//! uncompressed form is supported here:
//!
//! * [`Name`] is an absolute name,
//! * [`RelativeName`] a sequence of labels without the root label, and
//! * [`UncertainName`] either of the two, which is what record data made
//!   relative to an origin holds.
//!
//! The traits [`ToLabelIter`] and [`ToName`] provide comparison and
//! composing on top of the wire format of a name.

pub use self::absolute::{Name, NameError};
pub use self::label::{Label, LabelIter};
pub use self::relative::RelativeName;
pub use self::text::FromStrError;
pub use self::traits::{DisplayWithDot, ToLabelIter, ToName};
pub use self::uncertain::UncertainName;

pub(crate) use self::text::append_chars;

mod absolute;
mod label;
mod relative;
mod text;
mod traits;
mod uncertain;

//--- ZonefileFmt

use super::zonefile_fmt::{self, Formatter, ZonefileFmt};

impl<Octs: AsRef<[u8]> + ?Sized> ZonefileFmt for Name<Octs> {
    fn fmt(&self, p: &mut impl Formatter) -> zonefile_fmt::Result {
        p.write_token(self.fmt_with_dot())
    }
}

impl<Octs: AsRef<[u8]>> ZonefileFmt for UncertainName<Octs> {
    fn fmt(&self, p: &mut impl Formatter) -> zonefile_fmt::Result {
        p.write_token(self)
    }
}
