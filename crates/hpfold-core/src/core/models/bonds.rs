use std::collections::HashMap;

/// Contact weights for unordered residue-type pairs.
///
/// A pair of placed residues contributes its weight to the conformation score
/// when the two occupy adjacent lattice sites and are not sequence-adjacent.
/// Pairs absent from the table weigh 0. Keys are unordered: inserting
/// `('H', 'P')` and looking up `('P', 'H')` hit the same entry.
///
/// The table is read-only after construction and cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BondTable {
    weights: HashMap<(char, char), i32>,
}

impl BondTable {
    /// An empty table: every contact weighs 0.
    pub fn new() -> Self {
        Self {
            weights: HashMap::new(),
        }
    }

    /// The canonical HP-model table: `{H, H} ↦ -1`, everything else 0.
    pub fn hp() -> Self {
        let mut table = Self::new();
        table.insert('H', 'H', -1);
        table
    }

    /// Sets the weight of the unordered pair `{a, b}`, replacing any previous
    /// entry.
    pub fn insert(&mut self, a: char, b: char, weight: i32) {
        self.weights.insert(Self::key(a, b), weight);
    }

    /// The weight of the unordered pair `{a, b}`, 0 when absent.
    pub fn weight(&self, a: char, b: char) -> i32 {
        self.weights.get(&Self::key(a, b)).copied().unwrap_or(0)
    }

    /// Whether `symbol` appears in at least one entry with a non-zero weight.
    ///
    /// Residues whose symbol never does cannot change the score, so the
    /// conformation skips the contact scan entirely when placing them.
    pub fn involves(&self, symbol: char) -> bool {
        self.weights
            .iter()
            .any(|(&(a, b), &w)| w != 0 && (a == symbol || b == symbol))
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the table holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterates over `((a, b), weight)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = ((char, char), i32)> + '_ {
        self.weights.iter().map(|(&pair, &w)| (pair, w))
    }

    fn key(a: char, b: char) -> (char, char) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

impl Default for BondTable {
    /// Defaults to the canonical HP table, matching the engine's documented
    /// defaults (`dim = 2`, `{H, H} ↦ -1`).
    fn default() -> Self {
        Self::hp()
    }
}
