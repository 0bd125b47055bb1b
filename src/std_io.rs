extern crate std;

use std::io::{IoSlice, Write};

use crate::{SimpleVector, utils::capacity_overflow};

/// Sums buffer lengths, panicking on overflow like any other growth request.
fn total_len(lens: impl IntoIterator<Item = usize>) -> usize {
    lens.into_iter()
        .try_fold(0usize, usize::checked_add)
        .unwrap_or_else(|| capacity_overflow())
}

/// Write is implemented for `SimpleVector<u8>` by appending to the vector.
/// The vector will grow as needed, so writes are never short.
impl Write for SimpleVector<u8> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.extend_from_slice(buf);
        Ok(buf.len())
    }

    #[inline(always)]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }

    #[inline]
    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> std::io::Result<usize> {
        let num = total_len(bufs.iter().map(|b| b.len()));

        // One reallocation at most for the whole batch.
        self.reserve_for(num);
        for buf in bufs {
            self.extend_from_slice(buf);
        }

        Ok(num)
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.extend_from_slice(buf);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn write_and_vectored() {
        let mut v: SimpleVector<u8> = SimpleVector::new();

        let n = v.write(b"hello").unwrap();
        assert_eq!(n, 5);
        assert_eq!(v.len(), 5);
        assert_eq!(v, b"hello");

        let bufs = [IoSlice::new(b" "), IoSlice::new(b"world")];
        let n = v.write_vectored(&bufs).unwrap();
        assert_eq!(n, 6);
        assert_eq!(v, b"hello world");
        assert_eq!(v.capacity(), 11);
    }

    #[test]
    fn total_len_overflow_panics() {
        assert_eq!(total_len([3, 4]), 7);
        assert_eq!(total_len([0usize; 0]), 0);

        let result = std::panic::catch_unwind(|| total_len([usize::MAX, 1]));
        assert!(result.is_err());
    }

    #[test]
    fn write_all_grows() {
        let mut v: SimpleVector<u8> = SimpleVector::with_capacity(3);
        let data = [b'x'; 257];
        v.write_all(&data).unwrap();
        assert_eq!(v.len(), 257);
        assert!(v.as_slice().iter().all(|&c| c == b'x'));
    }

    #[test]
    fn write_fmt_appends() {
        let mut v: SimpleVector<u8> = SimpleVector::new();
        write!(v, "{}-{}", 1, 2).unwrap();
        v.flush().unwrap();
        assert_eq!(v, b"1-2");
    }
}
