use crate::error::EmptyQueueError;
use rustc_hash::FxHashMap;
use std::{cmp::Ordering, collections::BinaryHeap, hash::Hash};

/// Min-priority queue keyed by identity, with decrease-key via lazy deletion.
///
/// Every push gets a fresh sequence number. The side table maps each identity
/// to the sequence of its live heap entry; heap entries whose sequence no
/// longer matches are tombstones and get dropped when they surface in
/// [`pop_min`](Self::pop_min). Equal priorities pop in insertion order.
pub struct IndexedPriorityQueue<K, T, P> {
    heap: BinaryHeap<HeapEntry<K, P>>,
    live: FxHashMap<K, LiveEntry<T, P>>,
    next_sequence: u64,
}

struct HeapEntry<K, P> {
    priority: P,
    sequence: u64,
    identity: K,
}

struct LiveEntry<T, P> {
    sequence: u64,
    priority: P,
    payload: T,
}

impl<K, P: PartialOrd> PartialEq for HeapEntry<K, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K, P: PartialOrd> Eq for HeapEntry<K, P> {}

impl<K, P: PartialOrd> PartialOrd for HeapEntry<K, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K, P: PartialOrd> Ord for HeapEntry<K, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap.
        // NaN priorities compare as Equal and fall through to the sequence.
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<K, T, P> IndexedPriorityQueue<K, T, P>
where
    K: Eq + Hash + Clone,
    P: PartialOrd + Copy,
{
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: FxHashMap::default(),
            next_sequence: 0,
        }
    }

    /// Inserts `identity`, or lowers its priority if `priority` is strictly
    /// smaller than the current one. Returns `false` when nothing changed.
    pub fn upsert(&mut self, identity: K, payload: T, priority: P) -> bool {
        if let Some(current) = self.live.get(&identity) {
            if priority.partial_cmp(&current.priority) != Some(Ordering::Less) {
                return false;
            }
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        self.heap.push(HeapEntry {
            priority,
            sequence,
            identity: identity.clone(),
        });
        self.live.insert(
            identity,
            LiveEntry {
                sequence,
                priority,
                payload,
            },
        );
        true
    }

    pub fn pop_min(&mut self) -> Result<(K, T, P), EmptyQueueError> {
        while let Some(entry) = self.heap.pop() {
            let is_live = matches!(
                self.live.get(&entry.identity),
                Some(live) if live.sequence == entry.sequence
            );
            if !is_live {
                continue;
            }

            if let Some(live) = self.live.remove(&entry.identity) {
                return Ok((entry.identity, live.payload, live.priority));
            }
        }

        Err(EmptyQueueError)
    }

    pub fn contains(&self, identity: &K) -> bool {
        self.live.contains_key(identity)
    }

    pub fn priority_of(&self, identity: &K) -> Option<P> {
        self.live.get(identity).map(|live| live.priority)
    }

    /// Number of live entries; tombstones are not counted.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

impl<K, T, P> Default for IndexedPriorityQueue<K, T, P>
where
    K: Eq + Hash + Clone,
    P: PartialOrd + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
