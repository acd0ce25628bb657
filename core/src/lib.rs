pub mod batch;
pub mod cache;
pub mod degrees;
pub mod error;
pub mod evaluation;
pub mod exploration;
pub mod exploration_config;
pub mod interactions;
pub mod parsing;
pub mod priority_queue;
pub mod results;
pub mod string_normalization;

// Re-export commonly used items
pub use batch::{GenreBatch, run_genre_batch, run_genre_batch_with_progress};
pub use cache::{ArtifactCache, JsonFileCache};
pub use degrees::DegreeTable;
pub use error::{CacheError, EmptyQueueError, GraphError, LoadError};
pub use exploration::{ClosestBook, CoReviewedNeighbor, k_closest, top_k_raw_neighbors};
pub use exploration_config::ExplorationConfig;
pub use interactions::{BookId, BookIdMap, InteractionIndex, InteractionRecord, UserId};
pub use priority_queue::IndexedPriorityQueue;
