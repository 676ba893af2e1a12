// embedded-io adapters so generic socket/serial code can stream into
// a response chunk. Their flush() is a no-op: bytes are already in the
// chunk, submission stays with ResponseWriter::flush / drop.

use crate::error::WriteError;
use crate::sink::ResponseSink;
use crate::writer::ResponseWriter;

impl<S: ResponseSink> ResponseWriter<'_, S> {
    fn io_write(&mut self, buf: &[u8]) -> Result<usize, WriteError> {
        if buf.is_empty() {
            return Ok(0);
        }
        if self.is_submitted() {
            return Err(WriteError::Submitted);
        }
        match self.write(buf) {
            0 => Err(WriteError::ChunkFull),
            n => Ok(n),
        }
    }
}

impl<S: ResponseSink> embedded_io::ErrorType for ResponseWriter<'_, S> {
    type Error = WriteError;
}

impl<S: ResponseSink> embedded_io::Write for ResponseWriter<'_, S> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.io_write(buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<S: ResponseSink> embedded_io_async::Write for ResponseWriter<'_, S> {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.io_write(buf)
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
