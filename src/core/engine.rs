//! Item aggregation and filtering.
//!
//! Combines the declarations of several sources into one ordered item list:
//!
//! 1. Sources listed in `omit_from` are dropped from the reported sources.
//! 2. Names declared by `omit_from` sources form the omit set.
//! 3. Names declared by `only_from` sources form the only set.
//! 4. Reported sources are read and combined in merged or per-source shape.
//! 5. The omit filter removes names in the omit set.
//! 6. The only filter keeps names in the only set (skipped when it is empty).
//!
//! Marker entries of the per-source shape survive both filters. They are
//! typed apart from names and only rendered as `#<source id>` lines at the end.

use std::collections::{BTreeSet, HashSet};

use anyhow::Result;

use super::{category::Category, declarations::DeclarationSource};

/// Prefix of the line announcing a source in per-source output.
pub const MARKER_PREFIX: char = '#';

/// Build the marker line for a source.
pub fn marker(source_id: &str) -> String {
    format!("{}{}", MARKER_PREFIX, source_id)
}

/// Whether a declared name collides with the marker syntax.
pub fn is_reserved_name(name: &str) -> bool {
    name.starts_with(MARKER_PREFIX)
}

/// One entry of an item list before it is rendered to a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// Start of a source's group in per-source shape.
    Marker(String),
    Name(String),
}

impl Item {
    fn name(&self) -> Option<&str> {
        match self {
            Item::Marker(_) => None,
            Item::Name(name) => Some(name),
        }
    }

    /// Render as an output line.
    pub fn into_line(self) -> String {
        match self {
            Item::Marker(source_id) => marker(&source_id),
            Item::Name(name) => name,
        }
    }
}

/// Parameters of one item list computation.
#[derive(Debug, Clone, Copy)]
pub struct ItemQuery<'a> {
    /// Source ids to report, in output order.
    pub sources: &'a [String],
    pub category: Category,
    /// Produce one sorted union instead of per-source groups.
    pub merge: bool,
    /// Sources whose names are removed from the result.
    pub omit_from: &'a [String],
    /// Sources whose names are the only ones allowed in the result.
    pub only_from: &'a [String],
}

impl<'a> ItemQuery<'a> {
    pub fn new(sources: &'a [String], category: Category, merge: bool) -> Self {
        Self {
            sources,
            category,
            merge,
            omit_from: &[],
            only_from: &[],
        }
    }

    pub fn omit_from(mut self, omit_from: &'a [String]) -> Self {
        self.omit_from = omit_from;
        self
    }

    pub fn only_from(mut self, only_from: &'a [String]) -> Self {
        self.only_from = only_from;
        self
    }
}

/// Compute the item list for a query.
///
/// Every source involved is read through `source`. The first failing read
/// aborts the computation and its error is returned unchanged; no partial
/// list is produced.
pub fn compute_item_list<S>(source: &S, query: &ItemQuery<'_>) -> Result<Vec<String>>
where
    S: DeclarationSource + ?Sized,
{
    let reported: Vec<&String> = query
        .sources
        .iter()
        .filter(|id| !query.omit_from.contains(*id))
        .collect();

    let omit_items = collect_names(source, query.omit_from.iter(), query.category)?;
    let only_items = collect_names(source, query.only_from.iter(), query.category)?;

    let items = if query.merge {
        merged_items(source, reported.into_iter(), query.category)?
    } else {
        per_source_items(source, reported.into_iter(), query.category)?
    };

    let items = apply_omit_filter(items, &omit_items);
    Ok(apply_only_filter(items, &only_items)
        .into_iter()
        .map(Item::into_line)
        .collect())
}

/// Sorted, de-duplicated union of the names declared by `sources`.
pub fn merged_items<'s, S, I>(source: &S, sources: I, category: Category) -> Result<Vec<Item>>
where
    S: DeclarationSource + ?Sized,
    I: Iterator<Item = &'s String>,
{
    let mut names = BTreeSet::new();
    for id in sources {
        let declarations = source.read(id)?;
        names.extend(category.pick(&declarations).iter().cloned());
    }
    Ok(names.into_iter().map(Item::Name).collect())
}

/// A marker per source followed by that source's sorted names.
pub fn per_source_items<'s, S, I>(source: &S, sources: I, category: Category) -> Result<Vec<Item>>
where
    S: DeclarationSource + ?Sized,
    I: Iterator<Item = &'s String>,
{
    let mut items = Vec::new();
    for id in sources {
        let declarations = source.read(id)?;
        let names: BTreeSet<&String> = category.pick(&declarations).iter().collect();
        items.push(Item::Marker(id.clone()));
        items.extend(names.into_iter().cloned().map(Item::Name));
    }
    Ok(items)
}

/// Remove every name found in `omit_items`; markers are kept.
pub fn apply_omit_filter(items: Vec<Item>, omit_items: &HashSet<String>) -> Vec<Item> {
    if omit_items.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.name().is_none_or(|name| !omit_items.contains(name)))
        .collect()
}

/// Keep only names found in `only_items`, and every marker; a no-op for an
/// empty set.
pub fn apply_only_filter(items: Vec<Item>, only_items: &HashSet<String>) -> Vec<Item> {
    if only_items.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.name().is_none_or(|name| only_items.contains(name)))
        .collect()
}

fn collect_names<'s, S, I>(source: &S, sources: I, category: Category) -> Result<HashSet<String>>
where
    S: DeclarationSource + ?Sized,
    I: Iterator<Item = &'s String>,
{
    let mut names = HashSet::new();
    for id in sources {
        let declarations = source.read(id)?;
        names.extend(category.pick(&declarations).iter().cloned());
    }
    Ok(names)
}
