//! Filter expression tree for LDAP search filters
//!
//! This module defines the nodes that represent a parsed or programmatically
//! built filter expression, together with the fluent builder used to
//! construct leaves and the boolean combinators used to compose them.
//!
//! Nodes are immutable once built: composition (`and`, `or`, `not`) and
//! canonicalization always produce new trees.

use std::fmt;

use crate::escape::escape_value;

/// Comparison operators supported by simple filter items
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Comparator {
    /// Equality or presence (`=`)
    Eq,
    /// Approximate match (`~=`)
    Approx,
    /// Greater than or equal (`>=`)
    Ge,
    /// Less than or equal (`<=`)
    Le,
}

impl Comparator {
    /// Textual form of the comparator as it appears in a rendered filter
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::Eq => "=",
            Comparator::Approx => "~=",
            Comparator::Ge => ">=",
            Comparator::Le => "<=",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Boolean composition operators for filter lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Operator {
    /// Conjunction (`&`)
    And,
    /// Disjunction (`|`)
    Or,
    /// Negation (`!`), always over exactly one entry when built through
    /// [`Filter::not`]
    Not,
}

impl Operator {
    /// Single-character form of the operator as it appears in a rendered
    /// filter
    pub fn symbol(&self) -> char {
        match self {
            Operator::And => '&',
            Operator::Or => '|',
            Operator::Not => '!',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Ordering sentinel for leaves; effectively greater than every list key so
/// leaves always sort after lists during canonicalization.
const LEAF_ORDERING: u32 = 100_000;

/// A leaf comparison `(attribute comparator value)`
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Comparison {
    /// Attribute name on the left of the comparator
    pub attribute: String,
    /// The comparator between attribute and value
    pub comparator: Comparator,
    /// Value text, stored pre-escaped
    pub value: String,
}

impl Comparison {
    /// Creates a leaf from its parts. The value is stored as given; callers
    /// that accept untrusted text should escape it first (the builder does).
    pub fn new(
        attribute: impl Into<String>,
        comparator: Comparator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            comparator,
            value: value.into(),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{}{})", self.attribute, self.comparator, self.value)
    }
}

/// A boolean grouping of filter nodes under one operator
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FilterList {
    /// The boolean operator applied to the entries
    pub operator: Operator,
    /// Child nodes, rendered left to right
    pub entries: Vec<Filter>,
}

impl FilterList {
    /// Creates a grouping from an operator and its entries
    pub fn new(operator: Operator, entries: Vec<Filter>) -> Self {
        Self { operator, entries }
    }
}

impl fmt::Display for FilterList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.operator)?;
        for entry in &self.entries {
            write!(f, "{}", entry)?;
        }
        write!(f, ")")
    }
}

/// A node in a filter expression tree: either a leaf comparison or a
/// boolean grouping of further nodes
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum Filter {
    /// Leaf comparison `(attr=value)` and friends
    Comparison(Comparison),
    /// Boolean composition `(&..)`, `(|..)` or `(!..)`
    List(FilterList),
}

impl Filter {
    /// Starts building a leaf for the given attribute
    ///
    /// ```rust
    /// use ldq_shared::Filter;
    ///
    /// let filter = Filter::new("objectName").eq("someObjectName");
    /// assert_eq!(filter.to_string(), "(objectName=someObjectName)");
    /// ```
    pub fn new(attribute: impl Into<String>) -> FilterBuilder {
        FilterBuilder {
            attribute: attribute.into(),
        }
    }

    /// Combines `self` and `other` under `&`
    pub fn and(self, other: Filter) -> Filter {
        Filter::List(FilterList::new(Operator::And, vec![self, other]))
    }

    /// Combines `self` and `other` under `|`
    pub fn or(self, other: Filter) -> Filter {
        Filter::List(FilterList::new(Operator::Or, vec![self, other]))
    }

    /// Wraps `self` in a negation
    pub fn not(self) -> Filter {
        Filter::List(FilterList::new(Operator::Not, vec![self]))
    }

    /// Whether this node is a negation grouping
    pub fn is_not(&self) -> bool {
        matches!(
            self,
            Filter::List(FilterList {
                operator: Operator::Not,
                ..
            })
        )
    }

    /// Sort key used by canonicalization: lists group by operator and
    /// leaves sort last. Equal keys keep their relative order under a
    /// stable sort.
    pub fn ordering_key(&self) -> u32 {
        match self {
            Filter::Comparison(_) => LEAF_ORDERING,
            Filter::List(list) => 100 + list.operator.symbol() as u32,
        }
    }
}

impl From<Comparison> for Filter {
    fn from(comparison: Comparison) -> Self {
        Filter::Comparison(comparison)
    }
}

impl From<FilterList> for Filter {
    fn from(list: FilterList) -> Self {
        Filter::List(list)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Comparison(comparison) => write!(f, "{}", comparison),
            Filter::List(list) => write!(f, "{}", list),
        }
    }
}

/// Builder for leaf comparisons on a fixed attribute
///
/// Produced by [`Filter::new`]; each method consumes the builder and yields
/// a finished [`Filter`] leaf with the value escaped.
#[derive(Debug, Clone)]
pub struct FilterBuilder {
    attribute: String,
}

impl FilterBuilder {
    fn item(self, comparator: Comparator, value: String) -> Filter {
        Filter::Comparison(Comparison::new(self.attribute, comparator, value))
    }

    /// Builds an `(attribute=value)` check
    pub fn eq(self, value: &str) -> Filter {
        self.item(Comparator::Eq, escape_value(value))
    }

    /// Builds an `(attribute=*)` presence check; the wildcard is
    /// intentionally left unescaped
    pub fn is_present(self) -> Filter {
        self.item(Comparator::Eq, "*".to_string())
    }

    /// Builds an `(attribute>=value)` check
    pub fn ge(self, value: &str) -> Filter {
        self.item(Comparator::Ge, escape_value(value))
    }

    /// Builds an `(attribute<=value)` check
    pub fn le(self, value: &str) -> Filter {
        self.item(Comparator::Le, escape_value(value))
    }

    /// Builds an `(attribute~=value)` check
    pub fn apx(self, value: &str) -> Filter {
        self.item(Comparator::Approx, escape_value(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_comparator_display() {
        assert_eq!(format!("{}", Comparator::Eq), "=");
        assert_eq!(format!("{}", Comparator::Approx), "~=");
        assert_eq!(format!("{}", Comparator::Ge), ">=");
        assert_eq!(format!("{}", Comparator::Le), "<=");
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(format!("{}", Operator::And), "&");
        assert_eq!(format!("{}", Operator::Or), "|");
        assert_eq!(format!("{}", Operator::Not), "!");
    }

    #[test]
    fn test_comparison_display() {
        let leaf = Comparison::new("objectName", Comparator::Eq, "someObjectName");
        assert_eq!(format!("{}", leaf), "(objectName=someObjectName)");

        let leaf = Comparison::new("age", Comparator::Ge, "21");
        assert_eq!(format!("{}", leaf), "(age>=21)");
    }

    #[test]
    fn test_list_display() {
        let list = FilterList::new(
            Operator::And,
            vec![
                Filter::new("a").eq("b"),
                Filter::new("c").eq("d"),
            ],
        );
        assert_eq!(format!("{}", list), "(&(a=b)(c=d))");
    }

    #[test]
    fn test_builder_comparators() {
        assert_eq!(Filter::new("a").eq("b").to_string(), "(a=b)");
        assert_eq!(Filter::new("a").apx("b").to_string(), "(a~=b)");
        assert_eq!(Filter::new("a").ge("b").to_string(), "(a>=b)");
        assert_eq!(Filter::new("a").le("b").to_string(), "(a<=b)");
    }

    #[test]
    fn test_builder_escapes_values() {
        let filter = Filter::new("cn").eq("*(admin)*");
        assert_eq!(filter.to_string(), "(cn=\\2a\\28admin\\29\\2a)");
    }

    #[test]
    fn test_is_present_keeps_wildcard() {
        let filter = Filter::new("objectClass").is_present();
        assert_eq!(filter.to_string(), "(objectClass=*)");
    }

    #[test]
    fn test_and_or_composition() {
        let filter = Filter::new("a").eq("1").and(Filter::new("b").eq("2"));
        assert_eq!(filter.to_string(), "(&(a=1)(b=2))");

        let filter = Filter::new("a").eq("1").or(Filter::new("b").eq("2"));
        assert_eq!(filter.to_string(), "(|(a=1)(b=2))");
    }

    #[test]
    fn test_negation() {
        let filter = Filter::new("objectName").eq("Stuff").not();
        assert!(filter.is_not());
        assert_eq!(filter.to_string(), "(!(objectName=Stuff))");
    }

    #[test]
    fn test_is_not_on_other_nodes() {
        assert!(!Filter::new("a").eq("b").is_not());
        let and = Filter::new("a").eq("1").and(Filter::new("b").eq("2"));
        assert!(!and.is_not());
    }

    #[test]
    fn test_ordering_keys() {
        let leaf = Filter::new("a").eq("b");
        assert_eq!(leaf.ordering_key(), 100_000);

        let not = Filter::new("a").eq("b").not();
        let and = Filter::new("a").eq("1").and(Filter::new("b").eq("2"));
        let or = Filter::new("a").eq("1").or(Filter::new("b").eq("2"));
        assert_eq!(not.ordering_key(), 100 + u32::from(b'!'));
        assert_eq!(and.ordering_key(), 100 + u32::from(b'&'));
        assert_eq!(or.ordering_key(), 100 + u32::from(b'|'));

        // Lists always sort before leaves, negations before conjunctions
        // before disjunctions.
        assert!(not.ordering_key() < and.ordering_key());
        assert!(and.ordering_key() < or.ordering_key());
        assert!(or.ordering_key() < leaf.ordering_key());
    }

    #[test]
    fn test_nested_composition_renders_left_to_right() {
        let filter = Filter::new("a")
            .eq("1")
            .and(Filter::new("b").eq("2"))
            .or(Filter::new("c").eq("3").not());
        assert_eq!(filter.to_string(), "(|(&(a=1)(b=2))(!(c=3)))");
    }

    #[test]
    fn test_clone_and_eq() {
        let original = Filter::new("a").eq("1").and(Filter::new("b").eq("2"));
        let cloned = original.clone();
        assert_eq!(original, cloned);
    }

    #[test]
    fn test_serde_serialize() {
        let filter = Filter::new("objectName").eq("x").not();
        let serialized = serde_json::to_string(&filter).unwrap();
        assert!(serialized.contains("objectName"));
        assert!(serialized.contains("Not"));
    }
}
