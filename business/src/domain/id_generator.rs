/// Source of random identifiers for newly created records.
///
/// Calls are independent of each other; implementations hold no counter and may be
/// shared across concurrent requests.
pub trait IdGenerator: Send + Sync {
    fn next_u64(&self) -> u64;
}
