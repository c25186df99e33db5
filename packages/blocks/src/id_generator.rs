use crc32fast::Hasher;

/// Derive a page seed from its handle using CRC32
pub fn page_seed(handle: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(handle.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential ID generator for blocks within a page document.
///
/// IDs have the shape `"{seed}-{n}"` where the seed is derived from the
/// page handle, so two pages never mint colliding ids and ids within a
/// page are strictly increasing.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(handle: &str) -> Self {
        Self {
            seed: page_seed(handle),
            count: 0,
        }
    }

    /// Resume from a loaded document so fresh ids continue past the
    /// highest one already in use.
    pub fn resuming(handle: &str, count: u32) -> Self {
        Self {
            seed: page_seed(handle),
            count,
        }
    }

    /// Generate the next sequential ID
    pub fn next_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Get the page seed
    pub fn seed(&self) -> &str {
        &self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_seed_is_stable() {
        let s1 = page_seed("@maya");
        let s2 = page_seed("@maya");
        assert_eq!(s1, s2);

        let s3 = page_seed("@leo");
        assert_ne!(s1, s3);
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = IdGenerator::new("@maya");

        let id1 = ids.next_id();
        let id2 = ids.next_id();
        let id3 = ids.next_id();

        assert!(id1.ends_with("-1"));
        assert!(id2.ends_with("-2"));
        assert!(id3.ends_with("-3"));

        let seed = ids.seed();
        assert!(id1.starts_with(seed));
        assert!(id3.starts_with(seed));
    }

    #[test]
    fn test_resuming_continues_past_existing_ids() {
        let mut ids = IdGenerator::resuming("@maya", 7);
        assert!(ids.next_id().ends_with("-8"));
    }
}
