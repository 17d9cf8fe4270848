use serde::{Deserialize, Serialize};

/// Relationship of a tag or entity to the filter when it is constrained.
///
/// A value with no `Inclusion` is unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inclusion {
    /// Must be present on a matching asset.
    Required,
    /// Must be absent from a matching asset.
    Forbidden,
}

impl Inclusion {
    /// One step of the toggle cycle: unconstrained → required → forbidden → unconstrained.
    #[must_use]
    pub const fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::Required),
            Some(Self::Required) => Some(Self::Forbidden),
            Some(Self::Forbidden) => None,
        }
    }
}

/// Tri-state facet over string values (tags or entities).
///
/// Each value appears at most once, so a value can never be required and
/// forbidden at the same time. Entries keep the order in which they reached
/// their current inclusion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriStateFacet {
    entries: Vec<(String, Inclusion)>,
}

impl TriStateFacet {
    pub fn inclusion(&self, value: &str) -> Option<Inclusion> {
        self.entries.iter().find(|(v, _)| v == value).map(|(_, inc)| *inc)
    }

    pub fn required(&self) -> impl Iterator<Item = &str> + '_ {
        self.with_inclusion(Inclusion::Required)
    }

    pub fn forbidden(&self) -> impl Iterator<Item = &str> + '_ {
        self.with_inclusion(Inclusion::Forbidden)
    }

    pub fn has_required(&self) -> bool {
        self.entries.iter().any(|(_, inc)| *inc == Inclusion::Required)
    }

    pub fn has_forbidden(&self) -> bool {
        self.entries.iter().any(|(_, inc)| *inc == Inclusion::Forbidden)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Inclusion)> + '_ {
        self.entries.iter().map(|(v, inc)| (v.as_str(), *inc))
    }

    fn with_inclusion(&self, wanted: Inclusion) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .filter(move |(_, inc)| *inc == wanted)
            .map(|(v, _)| v.as_str())
    }

    /// Sets the inclusion of `value`; `None` makes it unconstrained.
    ///
    /// A value that changes inclusion moves to the back of the order.
    pub(crate) fn set(&mut self, value: &str, inclusion: Option<Inclusion>) {
        let position = self.entries.iter().position(|(v, _)| v == value);
        match (position, inclusion) {
            (Some(i), Some(inc)) if self.entries[i].1 == inc => {}
            (Some(i), next) => {
                let (v, _) = self.entries.remove(i);
                if let Some(inc) = next {
                    self.entries.push((v, inc));
                }
            }
            (None, Some(inc)) => self.entries.push((value.to_string(), inc)),
            (None, None) => {}
        }
    }

    pub(crate) fn cycle(&mut self, value: &str) {
        let next = Inclusion::cycle(self.inclusion(value));
        self.set(value, next);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Insertion-ordered set without duplicates, used by the two-state facets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetSet<T> {
    items: Vec<T>,
}

impl<T> Default for FacetSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: PartialEq> FacetSet<T> {
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        self.items.iter().any(|item| item == value)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Membership flip.
    pub(crate) fn toggle(&mut self, value: T) {
        match self.items.iter().position(|item| *item == value) {
            Some(i) => {
                self.items.remove(i);
            }
            None => self.items.push(value),
        }
    }

    pub(crate) fn remove<Q>(&mut self, value: &Q)
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        self.items.retain(|item| item != value);
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: PartialEq> FromIterator<T> for FacetSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items = Vec::new();
        for value in iter {
            if !items.contains(&value) {
                items.push(value);
            }
        }
        Self { items }
    }
}

impl<'a, T> IntoIterator for &'a FacetSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
