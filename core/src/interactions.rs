use crate::error::GraphError;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

pub type UserId = String;
pub type BookId = String;

/// Translation from the interaction dump's book ids to canonical book ids.
pub type BookIdMap = FxHashMap<String, BookId>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionRecord {
    pub user_id: UserId,
    pub book_id: String,
    pub reviewed: bool,
}

impl InteractionRecord {
    pub fn new(user_id: impl Into<UserId>, book_id: impl Into<String>, reviewed: bool) -> Self {
        Self {
            user_id: user_id.into(),
            book_id: book_id.into(),
            reviewed,
        }
    }
}

/// Bipartite review index: who reviewed what, in both directions.
///
/// Co-review edges are never materialized. Weights are derived on demand from
/// the two adjacency maps, see [`InteractionIndex::neighbors_with_weights`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionIndex {
    user_to_books: FxHashMap<UserId, FxHashSet<BookId>>,
    book_to_users: FxHashMap<BookId, FxHashSet<UserId>>,
}

/// Accumulates reviewed interactions one record at a time, so large dumps
/// can be streamed straight from disk.
#[derive(Default)]
pub struct InteractionIndexBuilder {
    index: InteractionIndex,
    records_seen: u64,
}

impl InteractionIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: InteractionRecord, book_id_map: &BookIdMap) -> Result<(), GraphError> {
        self.add_raw(&record.user_id, &record.book_id, record.reviewed, book_id_map)
    }

    /// Borrowing variant of [`add`](Self::add); only reviewed rows allocate.
    pub fn add_raw(
        &mut self,
        user_id: &str,
        csv_book_id: &str,
        reviewed: bool,
        book_id_map: &BookIdMap,
    ) -> Result<(), GraphError> {
        self.records_seen += 1;
        if !reviewed {
            return Ok(());
        }

        let book_id = book_id_map
            .get(csv_book_id)
            .ok_or_else(|| GraphError::UnknownBookId {
                csv_book_id: csv_book_id.to_string(),
            })?;

        self.index.insert_review(user_id.to_string(), book_id.clone());
        Ok(())
    }

    pub fn records_seen(&self) -> u64 {
        self.records_seen
    }

    pub fn finish(self) -> InteractionIndex {
        tracing::info!(
            records = self.records_seen,
            users = self.index.user_count(),
            books = self.index.book_count(),
            "built interaction index"
        );
        self.index
    }
}

impl InteractionIndex {
    pub fn build<I>(records: I, book_id_map: &BookIdMap) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = InteractionRecord>,
    {
        let mut builder = InteractionIndexBuilder::new();
        for record in records {
            builder.add(record, book_id_map)?;
        }
        Ok(builder.finish())
    }

    /// Builds directly from canonical `(user, book)` review pairs.
    pub fn from_reviews<I, U, B>(reviews: I) -> Self
    where
        I: IntoIterator<Item = (U, B)>,
        U: Into<UserId>,
        B: Into<BookId>,
    {
        let mut index = Self::default();
        for (user_id, book_id) in reviews {
            index.insert_review(user_id.into(), book_id.into());
        }
        index
    }

    fn insert_review(&mut self, user_id: UserId, book_id: BookId) {
        self.book_to_users
            .entry(book_id.clone())
            .or_default()
            .insert(user_id.clone());
        self.user_to_books.entry(user_id).or_default().insert(book_id);
    }

    /// Co-reviewed books of `book_id` mapped to their shared-reviewer count.
    ///
    /// Walks every reviewer of the book and every other book that reviewer
    /// touched, so the cost is the sum of the reviewers' degrees. Nothing is
    /// cached; repeated calls redo the walk. Unknown books have no neighbors.
    pub fn neighbors_with_weights(&self, book_id: &str) -> FxHashMap<&str, usize> {
        let mut shared_counts: FxHashMap<&str, usize> = FxHashMap::default();

        let Some(reviewers) = self.book_to_users.get(book_id) else {
            return shared_counts;
        };

        for user_id in reviewers {
            let Some(books) = self.user_to_books.get(user_id) else {
                continue;
            };
            for other_book in books {
                if other_book != book_id {
                    *shared_counts.entry(other_book.as_str()).or_insert(0) += 1;
                }
            }
        }

        shared_counts
    }

    /// Number of distinct users who reviewed both books.
    pub fn edge_weight(&self, book_a: &str, book_b: &str) -> usize {
        if book_a == book_b {
            return 0;
        }

        match (self.book_to_users.get(book_a), self.book_to_users.get(book_b)) {
            (Some(users_a), Some(users_b)) => {
                let (smaller, larger) = if users_a.len() <= users_b.len() {
                    (users_a, users_b)
                } else {
                    (users_b, users_a)
                };
                smaller.iter().filter(|user_id| larger.contains(*user_id)).count()
            }
            _ => 0,
        }
    }

    /// Count of distinct co-reviewed books.
    pub fn degree(&self, book_id: &str) -> usize {
        self.neighbors_with_weights(book_id).len()
    }

    pub fn contains_book(&self, book_id: &str) -> bool {
        self.book_to_users.contains_key(book_id)
    }

    pub fn reviewers_of(&self, book_id: &str) -> Option<&FxHashSet<UserId>> {
        self.book_to_users.get(book_id)
    }

    pub fn books_of(&self, user_id: &str) -> Option<&FxHashSet<BookId>> {
        self.user_to_books.get(user_id)
    }

    pub fn books(&self) -> impl Iterator<Item = &str> {
        self.book_to_users.keys().map(String::as_str)
    }

    pub fn book_count(&self) -> usize {
        self.book_to_users.len()
    }

    pub fn user_count(&self) -> usize {
        self.user_to_books.len()
    }
}
