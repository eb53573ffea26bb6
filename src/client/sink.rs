use std::io;

/// Destination for response bytes written by an [`HttpTransport`](super::HttpTransport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseSink {
    /// Drop every byte.
    Discard,
    /// Accumulate the body in memory.
    Buffer(Vec<u8>),
}

impl ResponseSink {
    /// `Buffer` when verbose diagnostics were requested, `Discard` otherwise.
    pub fn for_verbosity(verbose: bool) -> Self {
        if verbose {
            Self::Buffer(Vec::new())
        } else {
            Self::Discard
        }
    }

    pub fn is_discarding(&self) -> bool {
        matches!(self, Self::Discard)
    }

    /// Captured body as text; empty for a discarding sink.
    pub fn into_diagnostic(self) -> String {
        match self {
            Self::Discard => String::new(),
            Self::Buffer(bytes) => match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
            },
        }
    }
}

impl io::Write for ResponseSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Discard => Ok(buf.len()),
            Self::Buffer(bytes) => {
                bytes.extend_from_slice(buf);
                Ok(buf.len())
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn discard_accepts_and_drops_everything() {
        let mut sink = ResponseSink::for_verbosity(false);
        assert!(sink.is_discarding());
        assert_eq!(sink.write(b"ignored").unwrap(), 7);
        assert_eq!(sink.into_diagnostic(), "");
    }

    #[test]
    fn buffer_accumulates_across_writes() {
        let mut sink = ResponseSink::for_verbosity(true);
        sink.write_all(b"{\"sid\":").unwrap();
        sink.write_all(b"\"SM1\"}").unwrap();
        assert_eq!(sink.into_diagnostic(), "{\"sid\":\"SM1\"}");
    }

    #[test]
    fn non_utf8_body_is_rendered_lossily() {
        let sink = ResponseSink::Buffer(b"ok\xff".to_vec());
        assert_eq!(sink.into_diagnostic(), "ok\u{FFFD}");
    }
}
