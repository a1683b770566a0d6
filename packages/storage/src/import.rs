use std::path::Path;

use tracing::debug;

use newsforge_model::Newsletter;

use crate::errors::ImportError;

/// Parse a serialized document, validating structure before accepting it
///
/// Rejection leaves the caller's in-memory document untouched; there is
/// no partial recovery of a malformed file.
pub fn parse_newsletter(raw: &str) -> Result<Newsletter, ImportError> {
    let newsletter: Newsletter = serde_json::from_str(raw).map_err(ImportError::Parse)?;
    newsletter.integrity()?;
    Ok(newsletter)
}

/// Read and parse a newsletter JSON file
///
/// The file read is the one asynchronous operation in the persistence
/// subsystem; callers await it before loading the result into a session.
pub async fn import_json(path: impl AsRef<Path>) -> Result<Newsletter, ImportError> {
    let raw = tokio::fs::read_to_string(path.as_ref()).await?;
    let newsletter = parse_newsletter(&raw)?;
    debug!(document = %newsletter.meta.id, "imported newsletter");
    Ok(newsletter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsforge_common::{FixedClock, SequentialIds};
    use newsforge_model::default_newsletter;

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = parse_newsletter("{not valid json").unwrap_err();
        assert!(matches!(err, ImportError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let err = parse_newsletter("{\"meta\": {}}").unwrap_err();
        assert!(matches!(err, ImportError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_dangling_reference() {
        let mut ids = SequentialIds::new("d");
        let mut doc = default_newsletter(&mut ids, &FixedClock::at_epoch());

        // Break referential closure
        let first = doc.rows[0].block_ids[0].clone();
        doc.blocks.remove(&first);

        let raw = serde_json::to_string(&doc).unwrap();
        let err = parse_newsletter(&raw).unwrap_err();
        assert!(matches!(err, ImportError::Integrity(_)));
    }

    #[test]
    fn test_parse_accepts_valid_document() {
        let mut ids = SequentialIds::new("d");
        let doc = default_newsletter(&mut ids, &FixedClock::at_epoch());

        let raw = serde_json::to_string_pretty(&doc).unwrap();
        let parsed = parse_newsletter(&raw).unwrap();
        assert_eq!(parsed, doc);
    }
}
