use crate::error::BitmapError;

/// Forward-only reader over the input bytes.
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Skip `n` bytes, stopping at end of input instead of failing.
    pub(crate) fn skip_up_to(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.data.len());
    }

    pub(crate) fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BitmapError> {
        let mut buf = [0u8; N];
        self.read_exact_bytes(&mut buf)?;
        Ok(buf)
    }

    pub(crate) fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), BitmapError> {
        let n = buf.len();
        let src = self
            .data
            .get(self.pos..)
            .and_then(|rest| rest.get(..n))
            .ok_or(BitmapError::UnexpectedEof)?;
        buf.copy_from_slice(src);
        self.pos += n;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_read_is_eof_and_keeps_position() {
        let mut c = Cursor::new(&[1, 2, 3]);
        assert_eq!(c.read_fixed_bytes::<2>().unwrap(), [1, 2]);
        assert!(matches!(
            c.read_fixed_bytes::<2>(),
            Err(BitmapError::UnexpectedEof)
        ));
        assert_eq!(c.remaining(), 1);
        c.skip_up_to(10);
        assert_eq!(c.remaining(), 0);
    }
}
