use crate::types::{ContractTag, InterfaceId};

/// All values of the group must be present for the group to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndList<T>(pub Vec<T>);

/// At least one contained group must match; an empty list matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrList<T>(pub Vec<T>);

impl<T> Default for AndList<T> {
    fn default() -> Self {
        Self(vec![])
    }
}

impl<T> Default for OrList<T> {
    fn default() -> Self {
        Self(vec![])
    }
}

impl<T: PartialEq> OrList<AndList<T>> {
    pub fn matches(&self, values: &[T]) -> bool {
        self.0.is_empty()
            || self
                .0
                .iter()
                .any(|group| group.0.iter().all(|value| values.contains(value)))
    }
}

impl<T: for<'a> From<&'a str>> OrList<AndList<T>> {
    /// Parses the query filter grammar: commas separate OR groups, ` AND `
    /// joins values inside a group, so `a AND b,c` reads (a ∧ b) ∨ c.
    pub fn parse(raw: &str) -> Self {
        let groups = raw
            .split(',')
            .map(str::trim)
            .filter(|group| !group.is_empty())
            .map(|group| {
                AndList(
                    group
                        .split(" AND ")
                        .map(str::trim)
                        .filter(|value| !value.is_empty())
                        .map(T::from)
                        .collect(),
                )
            })
            .filter(|group: &AndList<T>| !group.0.is_empty())
            .collect();
        Self(groups)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractDecoratorFilters {
    pub tags: OrList<AndList<ContractTag>>,
    pub implements: OrList<AndList<InterfaceId>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceFilters {
    pub tags: OrList<AndList<ContractTag>>,
}
