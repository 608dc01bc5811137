//! HID report reading utilities

use crate::{HidCommonError, HidCommonResult};

/// Sequential little-endian reader over a borrowed report.
///
/// Every read is bounds-checked; running off the end yields
/// [`HidCommonError::OutOfBounds`] instead of panicking.
#[derive(Debug, Clone)]
pub struct ReportParser<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> ReportParser<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Start reading at `offset` (e.g. just past a report ID).
    pub fn at(buffer: &'a [u8], offset: usize) -> Self {
        let mut parser = Self::new(buffer);
        parser.skip(offset);
        parser
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    fn take<const N: usize>(&mut self) -> HidCommonResult<[u8; N]> {
        let out_of_bounds = HidCommonError::OutOfBounds {
            offset: self.position,
            width: N,
            len: self.buffer.len(),
        };
        let end = self.position.checked_add(N).ok_or(out_of_bounds.clone())?;
        let bytes = self
            .buffer
            .get(self.position..end)
            .and_then(|slice| <[u8; N]>::try_from(slice).ok())
            .ok_or(out_of_bounds)?;
        self.position = end;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> HidCommonResult<u8> {
        let [value] = self.take::<1>()?;
        Ok(value)
    }

    pub fn read_u16_le(&mut self) -> HidCommonResult<u16> {
        Ok(u16::from_le_bytes(self.take::<2>()?))
    }

    pub fn read_i16_le(&mut self) -> HidCommonResult<i16> {
        Ok(i16::from_le_bytes(self.take::<2>()?))
    }

    pub fn peek_u8(&self) -> HidCommonResult<u8> {
        self.buffer
            .get(self.position)
            .copied()
            .ok_or(HidCommonError::OutOfBounds {
                offset: self.position,
                width: 1,
                len: self.buffer.len(),
            })
    }

    pub fn skip(&mut self, count: usize) {
        self.position = self
            .position
            .saturating_add(count)
            .min(self.buffer.len());
    }

    pub fn slice(&self) -> &'a [u8] {
        self.buffer
    }
}
