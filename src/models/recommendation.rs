use serde::Serialize;

/// A comic recommended for a mood
///
/// Records live in a static table, so every field borrows `'static` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
    /// Cover image reference, opaque to the service
    pub image_url: &'static str,
}

impl Recommendation {
    pub const fn new(
        title: &'static str,
        description: &'static str,
        image_url: &'static str,
    ) -> Self {
        Self {
            title,
            description,
            image_url,
        }
    }
}
