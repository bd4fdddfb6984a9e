//! Canonicalization of filter trees
//!
//! Canonicalization rewrites a filter into a flattened, deterministically
//! ordered shape that renders to a logically equivalent filter string. It
//! proceeds bottom-up over the tree and, for every list node, runs three
//! steps over its children:
//!
//! 1. **Relaxation**: children that are lists with the same operator are
//!    spliced in place, repeatedly, until none remain (associativity
//!    flattening; each round strictly reduces nesting depth).
//! 2. **Canonical ordering**: a stable sort by [`Filter::ordering_key`],
//!    grouping lists by operator and moving leaves to the end.
//! 3. **Merge sweep**: one left-to-right pass with an explicit merge
//!    state; consecutive lists with equal operators (equal to *each other*,
//!    not necessarily to the outer one) merge their children.
//!
//! When the sweep leaves exactly one entry and that entry is a list, the
//! list replaces the outer node entirely, operator and all. This one-level
//! flattening is observable and kept for output stability:
//! `(|(&(a=1)(b=2)))` canonicalizes to `(&(a=1)(b=2))`, and a negation
//! whose sole child is a list loses the negation the same way.

use ldq_shared::{Filter, FilterList, Operator};

/// Canonicalization for filter nodes
///
/// Total over any valid tree: optimization never fails and never mutates
/// its input, it returns a new tree.
pub trait Optimize {
    /// Returns the canonical form of this node
    fn optimize(&self) -> Filter;
}

impl Optimize for Filter {
    fn optimize(&self) -> Filter {
        match self {
            // Leaves are already canonical.
            Filter::Comparison(_) => self.clone(),
            Filter::List(list) => {
                let entries = list.entries.iter().map(Optimize::optimize).collect();
                ListCanonicalizer::new(list.operator, entries).perform()
            }
        }
    }
}

/// AST-level optimizer for filter expressions
///
/// Stateless; exists so callers can hold an optimizer instance the way
/// they hold a [`ldq_parser::FilterParser`]. [`Optimize::optimize`] on a
/// node is the equivalent shorthand.
pub struct FilterOptimizer {
    // future optimizer configuration could go here
}

impl FilterOptimizer {
    /// Create a new optimizer instance
    pub fn new() -> Self {
        Self {}
    }

    /// Canonicalizes a filter tree, returning a new tree
    pub fn optimize(&self, filter: &Filter) -> Filter {
        filter.optimize()
    }
}

impl Default for FilterOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

/// One canonicalization pass over the children of a single list node
struct ListCanonicalizer {
    operator: Operator,
    entries: Vec<Filter>,
}

impl ListCanonicalizer {
    fn new(operator: Operator, entries: Vec<Filter>) -> Self {
        Self { operator, entries }
    }

    /// Splices children that are lists with the same operator until none
    /// remain
    fn relax(&mut self) {
        loop {
            let mut spliced = false;
            let mut relaxed = Vec::with_capacity(self.entries.len());
            for entry in std::mem::take(&mut self.entries) {
                match entry {
                    Filter::List(list) if list.operator == self.operator => {
                        spliced = true;
                        relaxed.extend(list.entries);
                    }
                    other => relaxed.push(other),
                }
            }
            self.entries = relaxed;
            if !spliced {
                break;
            }
        }
    }

    fn perform(mut self) -> Filter {
        self.relax();
        self.entries.sort_by_key(Filter::ordering_key);

        let mut accumulator: Vec<Filter> = Vec::new();
        let mut merger: Option<Merger> = None;
        for entry in std::mem::take(&mut self.entries) {
            merger = Some(match merger.take() {
                None => Merger::start(entry),
                Some(current) => {
                    let (next, finished) = current.offer(entry);
                    if let Some(done) = finished {
                        accumulator.push(done);
                    }
                    next
                }
            });
        }
        if let Some(current) = merger {
            accumulator.push(current.finish());
        }

        // A single surviving list replaces the outer node, operator and
        // all.
        if accumulator.len() == 1 && matches!(accumulator[0], Filter::List(_)) {
            log::debug!(
                "single surviving list collapses the outer '{}' node",
                self.operator
            );
            return accumulator.remove(0);
        }

        Filter::List(FilterList::new(self.operator, accumulator))
    }
}

/// Merge state for one run of the left-to-right sweep
enum Merger {
    /// A list that keeps absorbing following lists with the same operator
    List(FilterList),
    /// Any other entry; passes through unchanged
    Single(Filter),
}

impl Merger {
    fn start(entry: Filter) -> Self {
        match entry {
            Filter::List(list) => Merger::List(list),
            other => Merger::Single(other),
        }
    }

    /// Offers the next entry to the current run. Returns the continuing
    /// state and, when the run ends, the finished node to emit.
    fn offer(self, next: Filter) -> (Merger, Option<Filter>) {
        match (self, next) {
            (Merger::List(mut current), Filter::List(other))
                if current.operator == other.operator =>
            {
                current.entries.extend(other.entries);
                (Merger::List(current), None)
            }
            (done, next) => {
                let finished = done.finish();
                (Merger::start(next), Some(finished))
            }
        }
    }

    fn finish(self) -> Filter {
        match self {
            Merger::List(list) => Filter::List(list),
            Merger::Single(filter) => filter,
        }
    }
}
