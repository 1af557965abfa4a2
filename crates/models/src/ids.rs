use uuid::Uuid;

/// A source of unique record identifiers.
///
/// Records never mint their own ids; the generator is handed in wherever a
/// record is constructed, so callers control where ids come from.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Uuid;
}

/// Default generator backed by random v4 UUIDs. Infallible.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}
