use serde::{Deserialize, Serialize};

/// Serverbound book edit. Bedrock sends one packet per page change; these are
/// batched into a single edit before reaching the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SEditBook {
    /// Inventory slot of the book.
    pub slot: i32,
    /// Page contents.
    pub pages: Vec<String>,
    /// Title when signing, `None` when only editing.
    pub title: Option<String>,
}
