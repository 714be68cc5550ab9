//! chained-hashmap: A single-threaded hash map built on open hashing with
//! separate chaining, with nullable keys and snapshot collection views.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, fully safe separate-chaining map whose structure can be
//!   reasoned about bucket by bucket.
//! - Layers:
//!   - ChainedHashMap<K, V, S>: the generic core. A bucket array of chain
//!     heads over a slot arena of entries; each bucket is a singly-linked
//!     chain joined by slot keys rather than raw pointers, kept in
//!     insertion order (append-at-tail, first-match-wins).
//!   - StudentMap: the core fixed to Student keys and i32 values, adding
//!     the dynamically-typed query surface (`&dyn Any` with checked
//!     downcasts that fail with `MapError::TypeMismatch`).
//!
//! Constraints
//! - Single-threaded: no locking, no atomics; callers needing shared access
//!   must provide their own mutual exclusion.
//! - Capacity is always at least 16 and never shrinks. Growth doubles the
//!   bucket array when an insert would reach the 0.75 load factor; the
//!   check runs before placement with the pre-insert size, so even an
//!   overwriting insert can grow the table.
//! - The nil key (`None`) is an ordinary key: it always hashes to bucket 0
//!   and compares equal only to itself. Nullable values come from
//!   instantiating `V = Option<T>`; the map never interprets values.
//!
//! Hashing invariants
//! - Equal keys produce equal bucket indices while the capacity is fixed;
//!   a key's hash and equality must not change while it is stored. The
//!   `Student` key type derives both from its fields to meet this.
//! - Rehashing re-places every entry through the normal placement path,
//!   which performs no growth check of its own, so growth never recurses.
//!   The set of (key, value) pairs is identical before and after.
//!
//! Notes and non-goals
//! - Collection views (`key_set`, `values`, `entry_set`) materialize
//!   independent snapshots in one traversal; mutating a snapshot never
//!   affects the map.
//! - Absence is never an error: lookups, removals, and insert's
//!   previous-value result all use `Option`.
//! - No iteration-order guarantees, no persistence, no open addressing or
//!   other collision strategies.

mod chained_hash_map;
mod student;
mod student_map;

// Public surface
pub use chained_hash_map::{ChainedHashMap, Iter, MapError};
pub use student::Student;
pub use student_map::StudentMap;
