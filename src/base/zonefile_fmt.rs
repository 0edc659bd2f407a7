//! Writing values in presentation format.
//!
//! A type implements [`ZonefileFmt`] by handing its tokens to a
//! [`Formatter`]. The formatter puts everything on a single line or, in
//! pretty mode, spreads a block over several lines with a comment after
//! each annotated field. [`ZonefileFmt::display_zonefile`] turns a value
//! into something that implements `Display`.

use core::fmt;

//------------ Error and Result ----------------------------------------------

/// Writing presentation format failed.
#[derive(Clone, Copy, Debug)]
pub struct Error;

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Error
    }
}

pub type Result = core::result::Result<(), Error>;

//------------ ZonefileFmt ---------------------------------------------------

/// A value that can be written in presentation format.
pub trait ZonefileFmt {
    fn fmt(&self, p: &mut impl Formatter) -> Result;

    /// Returns a displayable value, in multi-line form if `pretty` is set.
    fn display_zonefile(&self, pretty: bool) -> DisplayZonefile<'_, Self> {
        DisplayZonefile { value: self, pretty }
    }
}

impl<T: ZonefileFmt + ?Sized> ZonefileFmt for &T {
    fn fmt(&self, p: &mut impl Formatter) -> Result {
        T::fmt(self, p)
    }
}

/// The `Display` adapter returned by [`ZonefileFmt::display_zonefile`].
pub struct DisplayZonefile<'a, T: ?Sized> {
    value: &'a T,
    pretty: bool,
}

impl<T: ZonefileFmt + ?Sized> fmt::Display for DisplayZonefile<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = Writer {
            target: f,
            pretty: self.pretty,
            first: true,
            column: 0,
            indent: None,
        };
        self.value.fmt(&mut writer).map_err(|_| fmt::Error)
    }
}

//------------ Formatter -----------------------------------------------------

/// The receiving end of presentation format output.
pub trait Formatter: Sized {
    /// Writes a token, separated from the previous one by white space.
    fn write_token(&mut self, token: impl fmt::Display) -> Result;

    /// Writes a comment about the preceding token.
    ///
    /// Comments only appear inside a block in pretty mode.
    fn write_comment(&mut self, comment: impl fmt::Display) -> Result;

    /// Writes the tokens produced by `op` as a group.
    ///
    /// In pretty mode, the group is enclosed in parentheses so that it can
    /// span multiple lines.
    fn block(&mut self, op: impl FnOnce(&mut Self) -> Result) -> Result;

    /// Writes a value that knows how to present itself.
    fn write_show(&mut self, value: impl ZonefileFmt) -> Result {
        value.fmt(self)
    }
}

/// The formatter behind [`DisplayZonefile`].
struct Writer<'a, 'b> {
    target: &'a mut fmt::Formatter<'b>,
    pretty: bool,

    /// Whether no token has been written on the current line yet.
    first: bool,

    /// The number of characters on the current line.
    column: usize,

    /// The indentation of continuation lines inside a block.
    indent: Option<usize>,
}

impl fmt::Write for Writer<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.column += s.chars().count();
        self.target.write_str(s)
    }
}

impl Formatter for Writer<'_, '_> {
    fn write_token(&mut self, token: impl fmt::Display) -> Result {
        use fmt::Write;

        if !self.first {
            self.write_char(' ')?;
        }
        self.first = false;
        write!(self, "{}", token)?;
        Ok(())
    }

    fn write_comment(&mut self, comment: impl fmt::Display) -> Result {
        let Some(indent) = self.indent else {
            return Ok(());
        };
        write!(self.target, "\t; {}\n{:indent$}", comment, "")?;
        self.column = indent;
        self.first = true;
        Ok(())
    }

    fn block(&mut self, op: impl FnOnce(&mut Self) -> Result) -> Result {
        if !self.pretty {
            return op(self);
        }
        self.write_token("(")?;
        self.indent = Some(self.column + 1);
        op(self)?;
        self.indent = None;
        self.write_token(")")
    }
}

//============ Testing =======================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::*;
    use std::string::ToString;

    struct Pair(u8, &'static str);

    impl ZonefileFmt for Pair {
        fn fmt(&self, p: &mut impl Formatter) -> Result {
            p.write_token("PAIR")?;
            p.block(|p| {
                p.write_token(self.0)?;
                p.write_comment("number")?;
                p.write_token(self.1)
            })
        }
    }

    #[test]
    fn single_line() {
        assert_eq!(
            Pair(7, "seven").display_zonefile(false).to_string(),
            "PAIR 7 seven"
        );
    }

    #[test]
    fn multi_line() {
        assert_eq!(
            Pair(7, "seven").display_zonefile(true).to_string(),
            "PAIR ( 7\t; number\n       seven )"
        );
    }
}
