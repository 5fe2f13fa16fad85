use crate::catalog::FixtureId;
use smallvec::SmallVec;

/// Id set small enough to live inline; schemes touch a handful of fixtures.
pub type IdSet = SmallVec<[FixtureId; 8]>;

/// A named lighting arrangement: the set of fixture ids it turns on.
#[derive(Clone, Debug)]
pub struct Scheme {
    pub name: &'static str,
    pub ids: IdSet,
}

impl Scheme {
    pub fn contains(&self, id: FixtureId) -> bool {
        self.ids.contains(&id)
    }
}

/// Read-only table of schemes, keyed by a stable identifier. Insertion
/// order is preserved so the menu renders deterministically.
pub struct SchemeCatalog {
    entries: Vec<(&'static str, Scheme)>,
}

impl SchemeCatalog {
    pub fn new(entries: Vec<(&'static str, Scheme)>) -> Self {
        Self { entries }
    }

    pub fn lookup(&self, key: &str) -> Option<&Scheme> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, s)| s)
    }

    /// `(key, scheme)` pairs in menu order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Scheme)> {
        self.entries.iter().map(|(k, s)| (*k, s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn scheme(name: &'static str, ids: &[FixtureId]) -> Scheme {
    Scheme {
        name,
        ids: IdSet::from_slice(ids),
    }
}

/// Key of the scheme applied at startup.
pub const DEFAULT_SCHEME: &str = "classic";

/// The fixed menu of lighting arrangements.
pub fn default_schemes() -> SchemeCatalog {
    SchemeCatalog::new(vec![
        ("commandDeck", scheme("Command Deck", &[2, 7, 8, 10, 11, 12])),
        ("classic", scheme("Classic Glow", &[7, 8])),
        ("symmetry", scheme("Symmetric Frame", &[5, 6])),
        ("backlight", scheme("Backlight", &[8, 9])),
        ("immersive", scheme("Immersive", &[1, 3, 5, 6])),
        ("focus", scheme("Focus", &[4])),
        ("ambient", scheme("Ambient", &[1, 5, 6])),
        ("underglow", scheme("Underglow", &[11, 12, 13])),
        ("allOff", scheme("All Off", &[])),
    ])
}
