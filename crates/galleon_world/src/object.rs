//! Interactable game objects.

use galleon_foundation::ObjectId;

use crate::content::ObjectContent;

/// Object names must not contain this phrase: the `use` command splits its
/// argument on it, so such a name could never be typed.
pub const RESERVED_NAME_PHRASE: &str = " with ";

/// An interactable entity with a unique id, a display name, alternate names,
/// a mutable description, and a pickupable flag.
///
/// Identity is by id; names are not unique. Two "idol" objects in the same
/// room are legal content and resolve to an ambiguity at lookup time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameObject {
    id: ObjectId,
    name: String,
    alt_names: Vec<String>,
    desc: String,
    pickupable: bool,
}

impl GameObject {
    /// Builds an object from its declaration. Alternate names are lower-cased
    /// here so lookups only lower-case the query.
    #[must_use]
    pub fn from_content(content: ObjectContent) -> Self {
        Self {
            id: content.id,
            name: content.name,
            alt_names: content
                .alt_names
                .into_iter()
                .map(|name| name.to_lowercase())
                .collect(),
            desc: content.desc,
            pickupable: content.pickupable,
        }
    }

    /// Returns true if this object responds to the given name.
    ///
    /// The query must already be lower-cased; it matches the display name
    /// (case-insensitively) or any alternate name.
    #[must_use]
    pub fn answers_to(&self, query_lower: &str) -> bool {
        self.name.to_lowercase() == query_lower
            || self.alt_names.iter().any(|alt| alt == query_lower)
    }

    /// Returns the unique object id.
    #[must_use]
    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the lower-cased alternate names.
    #[must_use]
    pub fn alt_names(&self) -> &[String] {
        &self.alt_names
    }

    /// Returns the description.
    #[must_use]
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// Replaces the description.
    pub fn set_desc(&mut self, desc: impl Into<String>) {
        self.desc = desc.into();
    }

    /// Returns true if the player can pick this object up.
    #[must_use]
    pub fn pickupable(&self) -> bool {
        self.pickupable
    }
}
