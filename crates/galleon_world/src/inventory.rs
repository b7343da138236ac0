//! The player's inventory.

use galleon_foundation::ObjectId;

use crate::object::GameObject;

/// An ordered collection of objects currently held by the player.
///
/// An object is in exactly one of {some room, inventory} at any time; the
/// dispatcher maintains that invariant by moving objects between the two in
/// the same turn. Insertion order is preserved, which fixes the inventory
/// half of ambiguity candidate ordering.
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    objects: Vec<GameObject>,
}

impl Inventory {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object at the end.
    pub fn add(&mut self, object: GameObject) {
        self.objects.push(object);
    }

    /// Removes an object by id.
    pub fn remove(&mut self, id: &ObjectId) -> Option<GameObject> {
        let index = self.objects.iter().position(|obj| obj.id() == id)?;
        Some(self.objects.remove(index))
    }

    /// Returns an object by id.
    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&GameObject> {
        self.objects.iter().find(|obj| obj.id() == id)
    }

    /// Returns a mutable object by id.
    pub fn get_mut(&mut self, id: &ObjectId) -> Option<&mut GameObject> {
        self.objects.iter_mut().find(|obj| obj.id() == id)
    }

    /// Returns true if the inventory holds the object.
    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.get(id).is_some()
    }

    /// Iterates over held objects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &GameObject> {
        self.objects.iter()
    }

    /// Returns the number of held objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true when nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
