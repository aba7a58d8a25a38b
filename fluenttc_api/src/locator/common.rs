//! Shared locator infrastructure: the [`Having`] trait and the [`Locator`] it accumulates.

use std::fmt;

/// One `name:value` filter segment.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Criterion {
    name: String,
    value: String,
}

/// Ordered list of criteria rendered as `name:value` segments joined by `,`.
///
/// Segments keep the order they were pushed in and are never de-duplicated.
/// Values go out verbatim: commas and colons inside a value are not escaped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Locator {
    criteria: Vec<Criterion>,
}

impl Locator {
    /// Appends a criterion after every criterion already present.
    pub fn push(&mut self, name: &str, value: impl ToString) {
        self.criteria.push(Criterion {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    /// Number of segments collected so far.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, criterion) in self.criteria.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}:{}", criterion.name, criterion.value)?;
        }
        Ok(())
    }
}

/// Trait implemented by all "having" builders. Provides locator rendering and
/// a generic setter for dimensions without a dedicated method.
pub trait Having {
    /// Returns the criteria collected so far.
    fn locator(&self) -> &Locator;

    /// Returns a mutable reference to the collected criteria.
    fn locator_mut(&mut self) -> &mut Locator;

    /// Renders the collected criteria, or an empty string if none were set.
    fn get_locator(&self) -> String {
        self.locator().to_string()
    }

    /// Appends an arbitrary `name:value` criterion.
    fn with_criterion(mut self, name: &str, value: &str) -> Self
    where
        Self: Sized,
    {
        self.locator_mut().push(name, value);
        self
    }
}
