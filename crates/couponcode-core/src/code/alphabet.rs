//! Code alphabet and per-part checksum.
//!
//! The alphabet holds the ten digits and the uppercase letters except `I`, `O`,
//! `S` and `Z`. Those four are read back as `1`, `0`, `5` and `2` during
//! normalization, so they never appear in a canonical code.

use crate::error::{Error, Result};

/// The symbols a code is made of, in index order.
pub const SYMBOLS: &[u8; 32] = b"0123456789ABCDEFGHJKLMNPQRTUVWXY";

/// Modulus of the check character computation.
///
/// One less than the alphabet size. Changing it invalidates every code issued so far.
pub const CHECK_MODULUS: usize = SYMBOLS.len() - 1;

/// Multiplier folded into the checksum accumulator for each symbol.
pub const CHECK_MULTIPLIER: usize = 19;

/// Separator between parts of a canonical code.
pub const SEPARATOR: char = '-';

/// Returns the index of `symbol` in [`SYMBOLS`].
///
/// # Errors
///
/// Returns [`Error::UnknownSymbol`] if the symbol is not in the alphabet.
/// Lookup is exact: lowercase letters are not accepted.
pub fn index_of(symbol: char) -> Result<usize> {
    u8::try_from(symbol)
        .ok()
        .and_then(|b| SYMBOLS.iter().position(|&s| s == b))
        .ok_or(Error::UnknownSymbol(symbol))
}

/// Returns the symbol at `index`.
///
/// Panics if `index` is not below [`SYMBOLS`]'s length.
#[must_use]
pub fn symbol_at(index: usize) -> char {
    char::from(SYMBOLS[index])
}

/// Returns whether `symbol` belongs to the alphabet.
#[must_use]
pub fn is_symbol(symbol: char) -> bool {
    index_of(symbol).is_ok()
}

/// Computes the check character for a part body at a 1-based part position.
///
/// The accumulator starts at `position` and absorbs each symbol as
/// `acc * 19 + index`. The result is the symbol at `acc % 31`. The
/// accumulator is reduced after every step, which gives the same residue as
/// the unreduced sum without overflowing on long bodies.
///
/// # Errors
///
/// Returns [`Error::UnknownSymbol`] if `body` contains a symbol outside the alphabet.
pub fn check_character(body: &str, position: usize) -> Result<char> {
    let mut acc = position % CHECK_MODULUS;
    for symbol in body.chars() {
        acc = (acc * CHECK_MULTIPLIER + index_of(symbol)?) % CHECK_MODULUS;
    }
    Ok(symbol_at(acc))
}
