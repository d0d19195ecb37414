use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::InvalidMessage;

/// A cursor over a borrowed byte slice.
pub struct Reader<'a> {
    buffer: &'a [u8],
    cursor: usize,
}

impl<'a> Reader<'a> {
    /// Start reading `bytes` from the beginning.
    pub fn init(bytes: &'a [u8]) -> Self {
        Self {
            buffer: bytes,
            cursor: 0,
        }
    }

    /// Consume the next `length` bytes, or nothing if fewer remain.
    pub fn take(&mut self, length: usize) -> Option<&'a [u8]> {
        if self.left() < length {
            return None;
        }
        let current = self.cursor;
        self.cursor += length;
        Some(&self.buffer[current..current + length])
    }

    /// Whether any bytes remain unread.
    pub fn any_left(&self) -> bool {
        self.cursor < self.buffer.len()
    }

    /// Fails with `TrailingData(name)` unless every byte has been consumed.
    pub fn expect_empty(&self, name: &'static str) -> Result<(), InvalidMessage> {
        match self.any_left() {
            true => Err(InvalidMessage::TrailingData(name)),
            false => Ok(()),
        }
    }

    /// Bytes not yet consumed.
    pub fn left(&self) -> usize {
        self.buffer.len() - self.cursor
    }
}

/// Values with a fixed TLS wire encoding.
pub trait Codec<'a>: Debug + Sized {
    /// Append the encoding of `self` to `bytes`.
    fn encode(&self, bytes: &mut Vec<u8>);

    /// Decode one value from the front of the reader.
    fn read(_: &mut Reader<'a>) -> Result<Self, InvalidMessage>;

    /// The encoding of `self` as a fresh vector.
    fn get_encoding(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        self.encode(&mut bytes);
        bytes
    }

    /// Decode a value that occupies exactly `bytes`.
    ///
    /// Returns `Err(InvalidMessage::TrailingData(_))` if not all of
    /// `bytes` is consumed.
    fn read_bytes(bytes: &'a [u8]) -> Result<Self, InvalidMessage> {
        let mut reader = Reader::init(bytes);
        let value = Self::read(&mut reader)?;
        reader.expect_empty(core::any::type_name::<Self>())?;
        Ok(value)
    }
}

impl Codec<'_> for u8 {
    fn encode(&self, bytes: &mut Vec<u8>) {
        bytes.push(*self);
    }

    fn read(r: &mut Reader<'_>) -> Result<Self, InvalidMessage> {
        match r.take(1) {
            Some(&[byte]) => Ok(byte),
            _ => Err(InvalidMessage::MissingData("u8")),
        }
    }
}

impl Codec<'_> for u16 {
    fn encode(&self, bytes: &mut Vec<u8>) {
        bytes.extend_from_slice(&self.to_be_bytes());
    }

    fn read(r: &mut Reader<'_>) -> Result<Self, InvalidMessage> {
        match r.take(2) {
            Some(&[hi, lo]) => Ok(Self::from_be_bytes([hi, lo])),
            _ => Err(InvalidMessage::MissingData("u16")),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::vec;

    use super::*;

    #[test]
    fn reader_take() {
        let bytes = [0x01, 0x02, 0x03];
        let mut r = Reader::init(&bytes);
        assert_eq!(r.take(1), Some(&[0x01][..]));
        assert_eq!(r.left(), 2);
        assert_eq!(r.take(3), None);
        assert_eq!(
            r.expect_empty("test"),
            Err(InvalidMessage::TrailingData("test"))
        );
        assert_eq!(r.take(2), Some(&[0x02, 0x03][..]));
        assert!(!r.any_left());
        assert_eq!(r.expect_empty("test"), Ok(()));
    }

    #[test]
    fn u16_is_big_endian() {
        assert_eq!(0x0804u16.get_encoding(), vec![0x08, 0x04]);
        assert_eq!(u16::read_bytes(&[0x04, 0x03]), Ok(0x0403));
    }

    #[test]
    fn short_reads_are_missing_data() {
        assert_eq!(
            u16::read_bytes(&[0x04]),
            Err(InvalidMessage::MissingData("u16"))
        );
        assert_eq!(u8::read_bytes(&[]), Err(InvalidMessage::MissingData("u8")));
    }

    #[test]
    fn read_bytes_rejects_trailing_data() {
        assert!(matches!(
            u8::read_bytes(&[0x01, 0x02]),
            Err(InvalidMessage::TrailingData(_))
        ));
    }
}
