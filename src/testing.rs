// Sink double for unit tests: records every call, optionally fails.

use std::string::String;
use std::vec::Vec;

use crate::sink::{ContentFormat, ResponseCode, ResponseSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejected;

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub payloads: Vec<Vec<u8>>,
    pub payload_calls: usize,
    pub status: Option<ResponseCode>,
    pub content_type: Option<ContentFormat>,
    pub max_age: Option<u32>,
    pub etag: Vec<u8>,
    pub location: String,
    fail: bool,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), Rejected> {
        if self.fail { Err(Rejected) } else { Ok(()) }
    }
}

impl ResponseSink for RecordingSink {
    type Error = Rejected;

    fn set_response_payload(&mut self, payload: &[u8]) -> Result<(), Rejected> {
        self.payload_calls += 1;
        self.check()?;
        self.payloads.push(payload.to_vec());
        Ok(())
    }

    fn set_response_status(&mut self, code: ResponseCode) -> Result<(), Rejected> {
        self.check()?;
        self.status = Some(code);
        Ok(())
    }

    fn set_header_content_type(&mut self, format: ContentFormat) -> Result<(), Rejected> {
        self.check()?;
        self.content_type = Some(format);
        Ok(())
    }

    fn set_header_max_age(&mut self, seconds: u32) -> Result<(), Rejected> {
        self.check()?;
        self.max_age = Some(seconds);
        Ok(())
    }

    fn set_header_etag(&mut self, etag: &[u8]) -> Result<(), Rejected> {
        self.check()?;
        self.etag = etag.to_vec();
        Ok(())
    }

    fn set_header_location(&mut self, path: &str) -> Result<(), Rejected> {
        self.check()?;
        self.location = String::from(path);
        Ok(())
    }
}
