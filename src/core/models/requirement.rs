//! Prerequisite and co-requisite logic as AND-of-OR groups
//!
//! A [`Requirement`] is an ordered sequence of [`RequirementGroup`]s. Each group
//! is an OR: any one member satisfies it. The sequence is an AND: every group
//! must be satisfied. An empty sequence means "no requirement".

use super::code::normalize_code;
use std::collections::{BTreeSet, HashSet};

/// A non-empty set of course codes, any one of which satisfies the group
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequirementGroup(BTreeSet<String>);

impl RequirementGroup {
    /// Build a group from raw course codes
    ///
    /// Codes are normalized and blank entries dropped. Returns `None` when
    /// nothing is left, since an empty group can never be satisfied.
    pub fn new<I, S>(codes: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: BTreeSet<String> = codes
            .into_iter()
            .map(|c| normalize_code(c.as_ref()))
            .filter(|c| !c.is_empty())
            .collect();

        if set.is_empty() {
            None
        } else {
            Some(Self(set))
        }
    }

    /// Whether the group contains the given (normalized) code
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains(code)
    }

    /// Member codes in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of alternatives in the group
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Member codes as a sorted list
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }

    /// Whether any member passes the membership test
    pub fn is_satisfied_when<F>(&self, is_member: F) -> bool
    where
        F: Fn(&str) -> bool,
    {
        self.iter().any(is_member)
    }
}

/// An AND-of-ORs requirement: every group must have at least one member satisfied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirement {
    groups: Vec<RequirementGroup>,
}

impl Requirement {
    /// Create a requirement from already-built groups
    #[must_use]
    pub const fn new(groups: Vec<RequirementGroup>) -> Self {
        Self { groups }
    }

    /// A requirement with no groups (trivially satisfied)
    #[must_use]
    pub const fn none() -> Self {
        Self { groups: Vec::new() }
    }

    /// Build a requirement from lists of raw codes, dropping lists that
    /// normalize to nothing
    pub fn from_code_lists<I, G, S>(lists: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            groups: lists.into_iter().filter_map(RequirementGroup::new).collect(),
        }
    }

    /// Append a group built from raw codes
    ///
    /// # Returns
    /// `false` if the codes normalized to an empty group and nothing was added
    pub fn push_group<I, S>(&mut self, codes: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        RequirementGroup::new(codes).is_some_and(|group| {
            self.groups.push(group);
            true
        })
    }

    /// The groups in declaration order
    #[must_use]
    pub fn groups(&self) -> &[RequirementGroup] {
        &self.groups
    }

    /// Whether there are no groups at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether every group has a member in `by_set`
    #[must_use]
    pub fn is_satisfied_by(&self, by_set: &HashSet<String>) -> bool {
        requirement_satisfied(&self.groups, by_set)
    }

    /// Whether every group has a member passing the membership test
    pub fn is_satisfied_when<F>(&self, is_member: F) -> bool
    where
        F: Fn(&str) -> bool,
    {
        self.groups.iter().all(|g| g.is_satisfied_when(&is_member))
    }

    /// Groups with no member passing the membership test, in declaration order
    pub fn unmet_groups_when<F>(&self, is_member: F) -> Vec<&RequirementGroup>
    where
        F: Fn(&str) -> bool,
    {
        self.groups
            .iter()
            .filter(|g| !g.is_satisfied_when(&is_member))
            .collect()
    }

    /// Every code mentioned by any group (deduplicated, sorted)
    #[must_use]
    pub fn codes(&self) -> BTreeSet<&str> {
        self.groups.iter().flat_map(RequirementGroup::iter).collect()
    }

    /// Groups as sorted code lists, the shape used by the JSON catalog cache
    #[must_use]
    pub fn to_code_lists(&self) -> Vec<Vec<String>> {
        self.groups.iter().map(RequirementGroup::to_vec).collect()
    }
}

/// True iff `group ∩ by_set` is non-empty
#[must_use]
pub fn group_satisfied(group: &RequirementGroup, by_set: &HashSet<String>) -> bool {
    group.iter().any(|code| by_set.contains(code))
}

/// True iff every group is satisfied by `by_set`; vacuously true for no groups
#[must_use]
pub fn requirement_satisfied(groups: &[RequirementGroup], by_set: &HashSet<String>) -> bool {
    groups.iter().all(|group| group_satisfied(group, by_set))
}
