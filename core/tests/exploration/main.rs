mod neighbors;
mod properties;

use bookgraph_core::InteractionIndex;

pub struct TestGraph;

impl TestGraph {
    /// u1 reviewed A and B, u2 reviewed A, B and C, u3 reviewed B and C.
    /// Shared reviewers: A-B = 2, B-C = 2, A-C = 1.
    pub fn triangle() -> InteractionIndex {
        InteractionIndex::from_reviews([
            ("u1", "A"),
            ("u1", "B"),
            ("u2", "A"),
            ("u2", "B"),
            ("u2", "C"),
            ("u3", "B"),
            ("u3", "C"),
        ])
    }

    /// A-D share one reviewer, while A-B and B-D share four each, so the
    /// two-hop route through B is cheaper than the direct edge.
    pub fn detour() -> InteractionIndex {
        let mut reviews = vec![("u1".to_string(), "A"), ("u1".to_string(), "D")];
        for user in 2..=5 {
            reviews.push((format!("u{user}"), "A"));
            reviews.push((format!("u{user}"), "B"));
        }
        for user in 6..=9 {
            reviews.push((format!("u{user}"), "B"));
            reviews.push((format!("u{user}"), "D"));
        }
        InteractionIndex::from_reviews(reviews)
    }

    /// Two components: {A, B} and {C, D}.
    pub fn split() -> InteractionIndex {
        InteractionIndex::from_reviews([("u1", "A"), ("u1", "B"), ("u2", "C"), ("u2", "D")])
    }

    /// `seed` shares exactly one reviewer with each of `zeta`, `alpha` and `mid`.
    pub fn star() -> InteractionIndex {
        InteractionIndex::from_reviews([
            ("u1", "seed"),
            ("u1", "zeta"),
            ("u2", "seed"),
            ("u2", "alpha"),
            ("u3", "seed"),
            ("u3", "mid"),
        ])
    }

    /// A deterministic tangle of 40 users over 25 books.
    pub fn tangle() -> InteractionIndex {
        let mut reviews = Vec::new();
        for user in 0..40usize {
            for step in 0..=(user % 4) {
                let book = (user * 7 + step * 3) % 25;
                reviews.push((format!("user-{user}"), format!("book-{book:02}")));
            }
        }
        InteractionIndex::from_reviews(reviews)
    }
}
