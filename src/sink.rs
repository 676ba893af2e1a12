// Response sink: the object that owns the outgoing message.
//
// The writer never interprets these values, it only forwards them.
// Codes follow CoAP numbering (class << 5 | detail) so a Contiki-style
// REST engine can take them as-is.

use core::fmt;

/// Receives the finished body and header values for one response.
///
/// `set_response_payload` is called at most once per writer. The slice
/// is only valid for the duration of the call, so implementations copy.
pub trait ResponseSink {
    type Error: fmt::Debug;

    fn set_response_payload(&mut self, payload: &[u8]) -> Result<(), Self::Error>;
    fn set_response_status(&mut self, code: ResponseCode) -> Result<(), Self::Error>;
    fn set_header_content_type(&mut self, format: ContentFormat) -> Result<(), Self::Error>;
    fn set_header_max_age(&mut self, seconds: u32) -> Result<(), Self::Error>;
    fn set_header_etag(&mut self, etag: &[u8]) -> Result<(), Self::Error>;
    fn set_header_location(&mut self, path: &str) -> Result<(), Self::Error>;
}

impl<S: ResponseSink + ?Sized> ResponseSink for &mut S {
    type Error = S::Error;

    fn set_response_payload(&mut self, payload: &[u8]) -> Result<(), Self::Error> {
        (**self).set_response_payload(payload)
    }

    fn set_response_status(&mut self, code: ResponseCode) -> Result<(), Self::Error> {
        (**self).set_response_status(code)
    }

    fn set_header_content_type(&mut self, format: ContentFormat) -> Result<(), Self::Error> {
        (**self).set_header_content_type(format)
    }

    fn set_header_max_age(&mut self, seconds: u32) -> Result<(), Self::Error> {
        (**self).set_header_max_age(seconds)
    }

    fn set_header_etag(&mut self, etag: &[u8]) -> Result<(), Self::Error> {
        (**self).set_header_etag(etag)
    }

    fn set_header_location(&mut self, path: &str) -> Result<(), Self::Error> {
        (**self).set_header_location(path)
    }
}

/// Response status, encoded as `class << 5 | detail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Created,
    Deleted,
    Valid,
    Changed,
    Content,
    BadRequest,
    Unauthorized,
    BadOption,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    NotAcceptable,
    RequestEntityIncomplete,
    PreconditionFailed,
    RequestEntityTooLarge,
    UnsupportedContentFormat,
    InternalServerError,
    NotImplemented,
    BadGateway,
    ServiceUnavailable,
    GatewayTimeout,
    ProxyingNotSupported,
    Other(u8),
}

impl ResponseCode {
    pub const fn code(self) -> u8 {
        match self {
            ResponseCode::Created => 65,
            ResponseCode::Deleted => 66,
            ResponseCode::Valid => 67,
            ResponseCode::Changed => 68,
            ResponseCode::Content => 69,
            ResponseCode::BadRequest => 128,
            ResponseCode::Unauthorized => 129,
            ResponseCode::BadOption => 130,
            ResponseCode::Forbidden => 131,
            ResponseCode::NotFound => 132,
            ResponseCode::MethodNotAllowed => 133,
            ResponseCode::NotAcceptable => 134,
            ResponseCode::RequestEntityIncomplete => 136,
            ResponseCode::PreconditionFailed => 140,
            ResponseCode::RequestEntityTooLarge => 141,
            ResponseCode::UnsupportedContentFormat => 143,
            ResponseCode::InternalServerError => 160,
            ResponseCode::NotImplemented => 161,
            ResponseCode::BadGateway => 162,
            ResponseCode::ServiceUnavailable => 163,
            ResponseCode::GatewayTimeout => 164,
            ResponseCode::ProxyingNotSupported => 165,
            ResponseCode::Other(code) => code,
        }
    }

    #[inline]
    pub const fn class(self) -> u8 {
        self.code() >> 5
    }

    #[inline]
    pub const fn detail(self) -> u8 {
        self.code() & 0x1F
    }
}

impl From<ResponseCode> for u8 {
    fn from(code: ResponseCode) -> u8 {
        code.code()
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.class(), self.detail())
    }
}

/// Content-Format option values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    TextPlain,
    LinkFormat,
    Xml,
    OctetStream,
    Exi,
    Json,
    Other(u16),
}

impl ContentFormat {
    pub const fn id(self) -> u16 {
        match self {
            ContentFormat::TextPlain => 0,
            ContentFormat::LinkFormat => 40,
            ContentFormat::Xml => 41,
            ContentFormat::OctetStream => 42,
            ContentFormat::Exi => 47,
            ContentFormat::Json => 50,
            ContentFormat::Other(id) => id,
        }
    }
}

impl From<ContentFormat> for u16 {
    fn from(format: ContentFormat) -> u16 {
        format.id()
    }
}
