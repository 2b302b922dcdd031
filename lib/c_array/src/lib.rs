//! Renders byte blobs as C array declarations so that they can be compiled into firmware or other
//! binaries.
//!
//! Only the formatting lives here. Reading the blob and deciding where the declaration ends up is
//! left to the caller.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use core::{error, fmt};

pub mod identifier;

pub use identifier::{derive_identifier, is_identifier};

/// A `static const unsigned char` array declaration.
///
/// The rendered form is:
///
/// ```text
/// static const unsigned char <identifier>[] = {
/// 0x89,0x50,0x4e,0x47
/// };
/// ```
///
/// Every byte is emitted as a single lowercase, unpadded `0x` literal, in order, with no
/// whitespace between the tokens and no line wrapping.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct ArrayDecl<'a> {
    /// The name of the array.
    identifier: &'a str,
    /// The contents of the array.
    bytes: &'a [u8],
}

impl<'a> ArrayDecl<'a> {
    /// Creates a new [`ArrayDecl`] named `identifier` containing `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdentifier`] if `identifier` is not a valid C identifier.
    pub fn new(identifier: &'a str, bytes: &'a [u8]) -> Result<Self, InvalidIdentifier> {
        if !is_identifier(identifier) {
            return Err(InvalidIdentifier);
        }

        Ok(Self { identifier, bytes })
    }

    /// Returns the name of the array.
    pub const fn identifier(&self) -> &'a str {
        self.identifier
    }

    /// Returns the contents of the array.
    pub const fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Dumps the rendered [`ArrayDecl`] into the `writer`.
    ///
    /// # Errors
    ///
    /// Returns any error produced by `writer`.
    #[cfg(feature = "std")]
    pub fn dump<W: std::io::Write>(&self, mut writer: W) -> std::io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }
}

impl fmt::Display for ArrayDecl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "static const unsigned char {}[] = {{", self.identifier)?;

        let mut bytes = self.bytes.iter();
        if let Some(first) = bytes.next() {
            write!(f, "{first:#x}")?;
            for byte in bytes {
                write!(f, ",{byte:#x}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "}};")
    }
}

/// The name handed to [`ArrayDecl::new`] is not a valid C identifier.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct InvalidIdentifier;

impl fmt::Display for InvalidIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("array name is not a valid C identifier")
    }
}

impl error::Error for InvalidIdentifier {}
