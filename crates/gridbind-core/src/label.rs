//! Enum-variant label registry
//!
//! Several enums in the mapping layer carry a fixed display label per
//! variant (row actions, sheet colors, format names). Labels are matched
//! case-insensitively when parsing cell text. The variant→label mapping is
//! fixed at compile time, so lookups go through a populate-once cache that
//! is never invalidated and is safe for concurrent readers.

use std::collections::HashMap;

use once_cell::sync::OnceCell;

/// An enum whose variants each carry a fixed display label
pub trait Labeled: Sized + Copy + 'static {
    /// The label for this variant
    fn label(&self) -> &'static str;

    /// All variants, in declaration order
    fn variants() -> &'static [Self];
}

/// Read-through cache from lowercased label to variant
///
/// Declare one per enum as a `static` and route parsing through it:
///
/// ```rust
/// use gridbind_core::label::{LabelCache, Labeled};
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Fruit { Apple, Pear }
///
/// impl Labeled for Fruit {
///     fn label(&self) -> &'static str {
///         match self {
///             Fruit::Apple => "Apple",
///             Fruit::Pear => "Pear",
///         }
///     }
///     fn variants() -> &'static [Self] {
///         &[Fruit::Apple, Fruit::Pear]
///     }
/// }
///
/// static FRUIT_LABELS: LabelCache<Fruit> = LabelCache::new();
///
/// assert_eq!(FRUIT_LABELS.parse("  pear "), Some(Fruit::Pear));
/// assert_eq!(FRUIT_LABELS.parse("plum"), None);
/// ```
pub struct LabelCache<T: Labeled> {
    map: OnceCell<HashMap<String, T>>,
}

impl<T: Labeled> LabelCache<T> {
    /// Create an empty cache; the map is built on first lookup
    pub const fn new() -> Self {
        Self {
            map: OnceCell::new(),
        }
    }

    /// Case-insensitive, trimmed lookup of a label
    pub fn parse(&self, label: &str) -> Option<T> {
        let map = self.map.get_or_init(|| {
            T::variants()
                .iter()
                .map(|v| (v.label().to_ascii_lowercase(), *v))
                .collect()
        });
        map.get(&label.trim().to_ascii_lowercase()).copied()
    }
}

impl<T: Labeled> Default for LabelCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
