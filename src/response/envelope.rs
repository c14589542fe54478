//! Response Decoder
//!
//! Every `--xml` response is wrapped in a `cliOutput` envelope carrying
//! `opRet`, `opErrno` and `opErrstr`. A non-zero `opErrno` is more specific
//! than `opRet` and becomes the effective failure code.

use super::tree::NodeExt;
use roxmltree::{Document, Node};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("operation failed with code {code}: {message}")]
    Failed { code: i32, message: String },
}

/// A successfully decoded envelope
#[derive(Debug)]
pub struct Envelope<'input> {
    doc: Document<'input>,
    op_errstr: Option<String>,
}

impl<'input> Envelope<'input> {
    /// Root element; entity mappers walk from here
    pub fn root(&self) -> Node<'_, 'input> {
        self.doc.root_element()
    }

    /// Informational message, some commands fill it even on success
    pub fn message(&self) -> Option<&str> {
        self.op_errstr.as_deref()
    }
}

/// Parse XML that carries no envelope
pub fn parse_document(text: &str) -> Result<Document<'_>, EnvelopeError> {
    Document::parse(text).map_err(|e| EnvelopeError::Malformed(e.to_string()))
}

/// Decode an envelope and check its outcome
pub fn decode_envelope(text: &str) -> Result<Envelope<'_>, EnvelopeError> {
    let doc = parse_document(text)?;

    let (op_ret, op_errno, op_errstr) = {
        let root = doc.root_element();
        let op_ret: i32 = root
            .parse_at("opRet")
            .map_err(|e| EnvelopeError::Malformed(e.to_string()))?;
        let op_errno: i32 = root
            .parse_at("opErrno")
            .map_err(|e| EnvelopeError::Malformed(e.to_string()))?;
        (op_ret, op_errno, root.opt_text_at("opErrstr"))
    };

    if op_ret == 0 {
        return Ok(Envelope { doc, op_errstr });
    }

    let code = if op_errno != 0 { op_errno } else { op_ret };
    Err(EnvelopeError::Failed {
        code,
        message: op_errstr.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cliOutput>
  <opRet>0</opRet>
  <opErrno>0</opErrno>
  <opErrstr/>
  <volCreate><volume><id>abc</id></volume></volCreate>
</cliOutput>"#;
        let envelope = decode_envelope(xml).unwrap();
        assert_eq!(envelope.root().text_at("volCreate/volume/id").unwrap(), "abc");
        assert_eq!(envelope.message(), None);
    }

    #[test]
    fn test_failure_uses_op_ret_when_errno_zero() {
        let xml = "<cliOutput><opRet>2</opRet><opErrno>0</opErrno>\
                   <opErrstr>volume does not exist</opErrstr></cliOutput>";
        assert_eq!(
            decode_envelope(xml).unwrap_err(),
            EnvelopeError::Failed {
                code: 2,
                message: "volume does not exist".into()
            }
        );
    }

    #[test]
    fn test_failure_prefers_errno() {
        let xml = "<cliOutput><opRet>-1</opRet><opErrno>30806</opErrno>\
                   <opErrstr>Staging failed</opErrstr></cliOutput>";
        assert_eq!(
            decode_envelope(xml).unwrap_err(),
            EnvelopeError::Failed {
                code: 30806,
                message: "Staging failed".into()
            }
        );
    }

    #[test]
    fn test_malformed_inputs() {
        for bad in [
            "",
            "not xml at all",
            "<cliOutput><opRet>0</opRet>",
            "<cliOutput><opErrno>0</opErrno></cliOutput>",
            "<cliOutput><opRet>zero</opRet><opErrno>0</opErrno></cliOutput>",
            "<cliOutput><opRet>0</opRet></cliOutput>",
        ] {
            assert!(
                matches!(decode_envelope(bad), Err(EnvelopeError::Malformed(_))),
                "expected malformed for {:?}",
                bad
            );
        }
    }
}
