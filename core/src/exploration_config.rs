/// Configuration for a batch of closest-book queries
#[derive(Debug, Clone)]
pub struct ExplorationConfig {
    /// Number of books returned by the weighted closest-books search
    pub closest_k: usize,
    /// Number of direct neighbors returned by the shared-reviewer ranking
    pub coreviewed_k: usize,
}

impl ExplorationConfig {
    pub fn new(closest_k: usize, coreviewed_k: usize) -> Self {
        Self {
            closest_k,
            coreviewed_k,
        }
    }
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        Self {
            closest_k: 100,
            coreviewed_k: 100,
        }
    }
}
