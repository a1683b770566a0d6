use uuid::Uuid;

/// Source of globally-unique identifiers for blocks, rows, versions,
/// articles, comments and documents.
///
/// Injected wherever ids are minted so tests can substitute a
/// deterministic generator.
pub trait IdSource {
    /// Produce the next unique id
    fn new_id(&mut self) -> String;
}

/// Random v4 UUIDs (production)
pub struct UuidSource;

impl IdSource for UuidSource {
    fn new_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Seeded sequential ids for deterministic tests
#[derive(Clone)]
pub struct SequentialIds {
    seed: String,
    count: u32,
}

impl SequentialIds {
    pub fn new(seed: &str) -> Self {
        Self {
            seed: seed.to_string(),
            count: 0,
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl IdSource for SequentialIds {
    fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::new("doc");
        assert_eq!(ids.new_id(), "doc-1");
        assert_eq!(ids.new_id(), "doc-2");
        assert_eq!(ids.seed(), "doc");
    }

    #[test]
    fn test_uuid_source_unique() {
        let mut ids = UuidSource;
        let a = ids.new_id();
        let b = ids.new_id();
        assert_ne!(a, b);
    }
}
