// pulp-rest: bounded response writer for REST/CoAP resource handlers.
//
// writer:    ResponseWriter, one chunk per response, clamped writes,
//            flush-once to the sink, block offset control
// print:     Printable, the overloaded print() entry point
// float:     float printing, core::fmt or integer-only digit renderer
// chunk_fmt: clamped fmt::Write over a byte slice
// sink:      ResponseSink trait, status and content-format codes
// block:     shared blockwise-transfer offset cursor
// config:    chunk size, float strategy, writer config
// error:     embedded-io error type

#![cfg_attr(not(test), no_std)]

pub mod block;
pub mod chunk_fmt;
pub mod config;
pub mod error;
mod float;
mod io;
mod print;
pub mod sink;
mod writer;

#[cfg(test)]
mod testing;

pub use block::{BLOCK_COMPLETE, BlockCursor};
pub use config::{ChunkBuf, FloatMode, MAX_CHUNK_SIZE, WriterConfig, new_chunk};
pub use error::{SubmitError, WriteError};
pub use print::Printable;
pub use sink::{ContentFormat, ResponseCode, ResponseSink};
pub use writer::ResponseWriter;
