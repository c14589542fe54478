//! Response Decoding
//!
//! Raw output is checked for the busy marker first, then decoded as an
//! envelope, then handed to an entity mapper through the schema accessors.

pub mod busy;
pub mod envelope;
pub mod tree;

pub use busy::{is_busy, BUSY_MARKER};
pub use envelope::{decode_envelope, parse_document, Envelope, EnvelopeError};
pub use tree::{NodeExt, SchemaError};
