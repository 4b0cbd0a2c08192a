use uuid::Uuid;

use business::domain::id_generator::IdGenerator;

/// Takes the high 64 bits of a random v4 UUID.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_u64(&self) -> u64 {
        Uuid::new_v4().as_u64_pair().0
    }
}
