// Bounded response writer: one chunk, one handler, one submission.
//
// The chunk buffer, the sink and the block offset all belong to the
// caller. Every byte goes through chunk_fmt::clamp_copy, so len never
// passes the end of the buffer; short writes are reported through the
// return value and the sticky truncated flag, never as errors.
//
// The payload is handed to the sink exactly once: by flush(),
// set_payload(), or on drop, whichever comes first. After that the
// writer is sealed and further writes return 0.

use core::cell::Cell;
use core::fmt;

use crate::block::BlockCursor;
use crate::chunk_fmt::{clamp_copy, format_into};
use crate::config::WriterConfig;
use crate::error::SubmitError;
use crate::print::Printable;
use crate::sink::{ContentFormat, ResponseCode, ResponseSink};

pub struct ResponseWriter<'a, S: ResponseSink> {
    sink: &'a mut S,
    buf: &'a mut [u8],
    len: usize,
    offset: BlockCursor<'a>,
    config: WriterConfig,
    submitted: bool,
    truncated: bool,
}

impl<'a, S: ResponseSink> ResponseWriter<'a, S> {
    pub fn new(sink: &'a mut S, buf: &'a mut [u8], offset: &'a Cell<i32>) -> Self {
        Self::with_config(sink, buf, offset, WriterConfig::default())
    }

    pub fn with_config(
        sink: &'a mut S,
        buf: &'a mut [u8],
        offset: &'a Cell<i32>,
        config: WriterConfig,
    ) -> Self {
        Self {
            sink,
            buf,
            len: 0,
            offset: BlockCursor::new(offset),
            config,
            submitted: false,
            truncated: false,
        }
    }

    #[inline]
    pub fn config(&self) -> WriterConfig {
        self.config
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.len
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Body so far as text; empty if a truncated write split a UTF-8
    /// sequence or binary data was written.
    #[inline]
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.as_bytes()).unwrap_or("")
    }

    /// True once any write, print or printf dropped bytes.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// True once the payload has gone to the sink.
    #[inline]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    // ── Bounded writes ──────────────────────────────────────────────

    /// Append as much of `data` as fits; returns the bytes copied.
    pub fn write(&mut self, data: &[u8]) -> usize {
        if self.refuse_sealed() {
            return 0;
        }
        let n = clamp_copy(self.buf, self.len, data);
        self.len += n;
        if n < data.len() {
            self.mark_truncated(n, data.len());
        }
        n
    }

    /// Format `args` into the free tail of the chunk.
    ///
    /// Rendering is bounded by the remaining capacity, not the chunk
    /// size, so earlier output is never overwritten. The length only
    /// advances by what actually fit, which is also the return value.
    pub fn printf(&mut self, args: fmt::Arguments<'_>) -> usize {
        if self.refuse_sealed() {
            return 0;
        }
        let out = format_into(&mut self.buf[self.len..], args);
        self.len += out.written;
        if out.truncated {
            self.truncated = true;
            log::trace!("rest: printf truncated at {} bytes", self.len);
        }
        out.written
    }

    #[inline]
    pub fn print<P: Printable>(&mut self, value: P) -> usize {
        value.print_to(self)
    }

    pub fn print_char(&mut self, c: char) -> usize {
        let mut tmp = [0u8; 4];
        self.write(c.encode_utf8(&mut tmp).as_bytes())
    }

    #[inline]
    pub fn print_str(&mut self, s: &str) -> usize {
        self.write(s.as_bytes())
    }

    #[inline]
    pub fn print_i32(&mut self, v: i32) -> usize {
        self.printf(format_args!("{}", v))
    }

    #[inline]
    pub fn print_u32(&mut self, v: u32) -> usize {
        self.printf(format_args!("{}", v))
    }

    #[inline]
    pub fn print_i64(&mut self, v: i64) -> usize {
        self.printf(format_args!("{}", v))
    }

    #[inline]
    pub fn print_u64(&mut self, v: u64) -> usize {
        self.printf(format_args!("{}", v))
    }

    /// Declare the body length without touching the bytes, e.g. after a
    /// serializer or DMA filled the chunk directly.
    /// Lengths past the chunk are clamped.
    pub fn set_payload_length(&mut self, len: usize) {
        if len > self.buf.len() {
            log::warn!(
                "rest: payload length {} exceeds chunk of {}, clamping",
                len,
                self.buf.len()
            );
        }
        self.len = len.min(self.buf.len());
    }

    // ── Submission ──────────────────────────────────────────────────

    /// Hand `payload` straight to the sink, bypassing the chunk.
    /// Counts as this writer's one submission; once a payload went out
    /// (by flush or an earlier call) the bytes are refused with
    /// [`SubmitError::AlreadySubmitted`].
    pub fn set_payload(&mut self, payload: &[u8]) -> Result<(), SubmitError<S::Error>> {
        if self.submitted {
            log::warn!("rest: payload already submitted, dropping {} bytes", payload.len());
            return Err(SubmitError::AlreadySubmitted);
        }
        self.set_payload_length(payload.len());
        self.submitted = true;
        self.sink.set_response_payload(payload).map_err(SubmitError::Sink)
    }

    /// Submit `[0, len)` to the sink. Only the first call (or drop)
    /// submits; later calls return `Ok(())` without touching the sink.
    pub fn flush(&mut self) -> Result<(), S::Error> {
        if self.submitted {
            return Ok(());
        }
        // sealed even if the sink rejects it; no retries on drop
        self.submitted = true;
        log::debug!("rest: flush {} bytes", self.len);
        self.sink.set_response_payload(&self.buf[..self.len])
    }

    // ── Header passthrough ──────────────────────────────────────────

    pub fn set_status_code(&mut self, code: ResponseCode) -> Result<(), S::Error> {
        self.sink.set_response_status(code)
    }

    pub fn set_content_type(&mut self, format: ContentFormat) -> Result<(), S::Error> {
        self.sink.set_header_content_type(format)
    }

    pub fn set_max_age(&mut self, seconds: u32) -> Result<(), S::Error> {
        self.sink.set_header_max_age(seconds)
    }

    pub fn set_etag(&mut self, etag: &[u8]) -> Result<(), S::Error> {
        self.sink.set_header_etag(etag)
    }

    pub fn set_location(&mut self, path: &str) -> Result<(), S::Error> {
        self.sink.set_header_location(path)
    }

    // ── Block control ───────────────────────────────────────────────

    #[inline]
    pub fn offset(&self) -> i32 {
        self.offset.get()
    }

    #[inline]
    pub fn block_append(&mut self, n: i32) {
        self.offset.append(n);
    }

    #[inline]
    pub fn block_complete(&mut self) {
        self.offset.complete();
    }

    /// Emit the next block of a resource larger than one chunk.
    ///
    /// Copies `resource[offset..]` into the chunk, advances the offset
    /// by what fit and marks the transfer complete once the tail of the
    /// resource went out. A completed or negative offset writes nothing;
    /// an offset past the end just completes.
    pub fn write_block(&mut self, resource: &[u8]) -> usize {
        let Ok(start) = usize::try_from(self.offset()) else {
            return 0;
        };
        if start >= resource.len() {
            self.block_complete();
            return 0;
        }

        let n = self.write(&resource[start..]);
        self.block_append(i32::try_from(n).unwrap_or(i32::MAX));

        if start + n >= resource.len() {
            self.block_complete();
        }
        n
    }

    // ── Internals ───────────────────────────────────────────────────

    fn refuse_sealed(&self) -> bool {
        if self.submitted {
            log::warn!("rest: write after submission ignored");
        }
        self.submitted
    }

    fn mark_truncated(&mut self, written: usize, requested: usize) {
        self.truncated = true;
        log::trace!("rest: truncated write, {} of {} bytes fit", written, requested);
    }
}

impl<S: ResponseSink> fmt::Write for ResponseWriter<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write(s.as_bytes());
        Ok(())
    }
}

impl<S: ResponseSink> Drop for ResponseWriter<'_, S> {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            log::warn!("rest: payload rejected by sink: {:?}", e);
        }
    }
}

impl<S: ResponseSink> fmt::Debug for ResponseWriter<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseWriter")
            .field("len", &self.len)
            .field("capacity", &self.buf.len())
            .field("offset", &self.offset)
            .field("submitted", &self.submitted)
            .field("truncated", &self.truncated)
            .finish()
    }
}
