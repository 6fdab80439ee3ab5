//! > port-number := [0-9]+ ; must fit in 16 bits

use crate::err::Error;

/// Parse the text after a host's `:` as a base-10 port. Unlike
/// `u16::from_str`, a leading `+` is rejected. Leading zeros are fine.
/// Errors are reported at index 0 of `src`.
pub(crate) fn parse_port(src: &str) -> Result<u16, Error> {
    if src.is_empty() || !src.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::illegal_port(0, src));
    }
    src.parse::<u16>().map_err(|_| Error::illegal_port(0, src))
}
