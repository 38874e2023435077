use std::fmt;

use crate::error::{Error, Result, error};

/// Destination for formatted text.
///
/// A sink is either growable (`String`) or bounded by a caller buffer
/// ([`FixedSink`]). Every formatter writes through this trait once and gets
/// both behaviours. Appends are all-or-nothing: a failed append writes
/// nothing.
pub trait TextSink {
    /// Makes room for `additional` more code units.
    fn reserve(&mut self, additional: usize) -> Result<()>;

    fn append(&mut self, text: &str) -> Result<()>;

    /// Number of code units written so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of code units the sink accepts, `None` when unbounded.
    fn capacity(&self) -> Option<usize>;

    /// Target of the `write!` macro.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        let mut adapter = Adapter {
            sink: self,
            error: None,
        };

        match fmt::Write::write_fmt(&mut adapter, args) {
            Ok(()) => Ok(()),
            Err(fmt::Error) => Err(adapter
                .error
                .take()
                .unwrap_or_else(|| error::Error::Formatter.into())),
        }
    }
}

struct Adapter<'a, S: ?Sized> {
    sink: &'a mut S,
    error: Option<Error>,
}

impl<S: TextSink + ?Sized> fmt::Write for Adapter<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sink.append(s).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}

impl TextSink for String {
    fn reserve(&mut self, additional: usize) -> Result<()> {
        self.try_reserve(additional)?;
        Ok(())
    }

    fn append(&mut self, text: &str) -> Result<()> {
        self.try_reserve(text.len())?;
        self.push_str(text);
        Ok(())
    }

    fn len(&self) -> usize {
        String::len(self)
    }

    fn capacity(&self) -> Option<usize> {
        None
    }
}

/// Sink over a caller supplied buffer.
///
/// The buffer is zeroed on construction and the last slot is reserved for a
/// NUL terminator, so at most `buf.len() - 1` code units are ever written.
#[derive(Debug)]
pub struct FixedSink<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> FixedSink<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        buf.fill(0);
        Self { buf, len: 0 }
    }

    /// Runs `write` against a fresh sink over `buf` and returns the number of
    /// code units written. On failure the whole buffer is zeroed again.
    pub fn write_with<F>(buf: &'a mut [u8], write: F) -> Result<usize>
    where
        F: FnOnce(&mut FixedSink<'a>) -> Result<()>,
    {
        let mut sink = FixedSink::new(buf);
        match write(&mut sink) {
            Ok(()) => Ok(sink.len),
            Err(err) => {
                sink.clear();
                Err(err)
            }
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn as_str(&self) -> Result<&str> {
        std::str::from_utf8(self.as_bytes()).map_err(|_| error::Error::Formatter.into())
    }

    pub fn clear(&mut self) {
        self.buf.fill(0);
        self.len = 0;
    }

    fn limit(&self) -> usize {
        self.buf.len().saturating_sub(1)
    }
}

impl TextSink for FixedSink<'_> {
    fn reserve(&mut self, additional: usize) -> Result<()> {
        match self.len.checked_add(additional) {
            Some(needed) if needed <= self.limit() => Ok(()),
            _ => {
                tracing::trace!(
                    capacity = self.buf.len(),
                    additional,
                    "fixed buffer can't hold reserved text"
                );
                Err(error::Error::BufferTooSmall {
                    capacity: self.buf.len(),
                }
                .into())
            }
        }
    }

    fn append(&mut self, text: &str) -> Result<()> {
        self.reserve(text.len())?;

        let end = self.len + text.len();
        self.buf[self.len..end].copy_from_slice(text.as_bytes());
        self.len = end;
        Ok(())
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.limit())
    }
}
