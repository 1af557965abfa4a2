use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ids::IdGenerator;

/// A single retail location.
///
/// The wire shape is camelCase to match the published API contract; `id` is
/// string-encoded. `address_line3` is unset in the current data and
/// serializes as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookStore {
    pub id: Uuid,
    pub name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub address_line3: Option<String>,
    pub city: String,
    pub post_code: String,
    pub telephone_number: String,
}

impl BookStore {
    /// Construct an empty record carrying a freshly generated identifier.
    ///
    /// The id is assigned here exactly once and never reassigned; uniqueness
    /// is delegated to the generator. Descriptive fields start blank and are
    /// filled by the caller, typically with struct-update syntax.
    pub fn new(ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.generate(),
            name: String::new(),
            address_line1: String::new(),
            address_line2: String::new(),
            address_line3: None,
            city: String::new(),
            post_code: String::new(),
            telephone_number: String::new(),
        }
    }
}
