//! Testimonial records shown in the carousel.

use serde::{Deserialize, Serialize};

/// A single client testimonial.
///
/// Supplied as an ordered list by the data layer. The carousel never
/// mutates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    /// Display name of the client.
    pub name: String,
    /// Testimonial body.
    pub text: String,
    /// Practice area label (e.g. "Family Law").
    pub category: String,
    /// Avatar image reference, if the client provided one.
    #[serde(default, alias = "avatarUrl", skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Testimonial {
    /// Returns the avatar URL when it is present and non-blank.
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Up to two uppercase initials for the avatar placeholder.
    ///
    /// Uses the first letter of the first and last words of the name.
    pub fn initials(&self) -> String {
        let mut words = self.name.split_whitespace();
        let first = words.next().and_then(|w| w.chars().next());
        let last = words.next_back().and_then(|w| w.chars().next());

        first
            .into_iter()
            .chain(last)
            .flat_map(char::to_uppercase)
            .collect()
    }
}
