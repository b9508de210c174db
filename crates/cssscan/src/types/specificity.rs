use std::fmt;

/// CSS specificity for ranking matched rules.
///
/// Field order gives the derived ordering: `ids`, then `classes`, then
/// `elements`. Ties between equal tuples are broken by source order by the
/// caller (see [`MatchedRule`](crate::types::MatchedRule)).
///
/// ```
/// use cssscan::Specificity;
///
/// let a = Specificity::new(0, 2, 0);
/// let b = Specificity::new(0, 1, 5);
/// assert!(a > b);
/// assert_eq!(a.to_string(), "(0,2,0)");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity {
    pub ids: u32,
    pub classes: u32,
    pub elements: u32,
}

impl Specificity {
    pub const ZERO: Self = Self {
        ids: 0,
        classes: 0,
        elements: 0,
    };

    pub fn new(ids: u32, classes: u32, elements: u32) -> Self {
        Self {
            ids,
            classes,
            elements,
        }
    }
}

impl std::ops::Add for Specificity {
    type Output = Specificity;

    fn add(self, other: Specificity) -> Specificity {
        Specificity {
            ids: self.ids + other.ids,
            classes: self.classes + other.classes,
            elements: self.elements + other.elements,
        }
    }
}

impl std::ops::AddAssign for Specificity {
    fn add_assign(&mut self, other: Specificity) {
        *self = *self + other;
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.ids, self.classes, self.elements)
    }
}
