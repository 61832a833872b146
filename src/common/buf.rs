//! Guarded writes into caller-owned result buffers.

use crate::common::error::{NowMsecError, NowMsecResult};

/// Size of the result buffer the MySQL server hands to string UDFs.
pub const HOST_RESULT_CAPACITY: usize = 255;

/// Wrapper over a borrowed byte slice owned by the caller.
#[derive(Debug)]
pub struct ResultBuffer<'a> {
    inner: &'a mut [u8],
}

impl<'a> ResultBuffer<'a> {
    pub fn new(inner: &'a mut [u8]) -> Self {
        Self { inner }
    }

    pub fn capacity(&self) -> usize {
        self.inner.len()
    }

    /// Copy `data` to the start of the buffer and return the number of bytes
    /// written. Nothing is written when `data` does not fit.
    pub fn write(&mut self, data: &[u8]) -> NowMsecResult<usize> {
        let capacity = self.capacity();
        let dst = self
            .inner
            .get_mut(..data.len())
            .ok_or(NowMsecError::BufferTooSmall {
                needed: data.len(),
                capacity,
            })?;
        dst.copy_from_slice(data);
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_at_the_start() {
        let mut raw = [b'x'; 8];
        assert_eq!(ResultBuffer::new(&mut raw).write(b"abc"), Ok(3));
        assert_eq!(&raw, b"abcxxxxx");
    }

    #[test]
    fn exact_fit_is_accepted() {
        let mut raw = [0u8; 4];
        assert_eq!(ResultBuffer::new(&mut raw).write(b"abcd"), Ok(4));
        assert_eq!(&raw, b"abcd");
    }

    #[test]
    fn refuses_to_overflow() {
        let mut raw = [0u8; 2];
        let err = ResultBuffer::new(&mut raw).write(b"abc").unwrap_err();
        assert_eq!(
            err,
            NowMsecError::BufferTooSmall {
                needed: 3,
                capacity: 2
            }
        );
        assert_eq!(raw, [0, 0]);
    }
}
