use crate::environment::Environment;

/// Derive the search term from a branch name by dropping one leading
/// `<prefix>/` segment, e.g. `feat/test-env` -> `test-env`.
pub fn search_term(branch: &str) -> &str {
    match branch.split_once('/') {
        Some((_, rest)) => rest,
        None => branch,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Partial,
}

/// Environments matching a search term, split into exact and partial hits.
/// Both lists keep the order the environments were fetched in.
#[derive(Debug, Default)]
pub struct Matches<'a> {
    pub exact: Vec<&'a Environment>,
    pub partial: Vec<&'a Environment>,
}

impl<'a> Matches<'a> {
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.partial.is_empty()
    }

    pub fn len(&self) -> usize {
        self.exact.len() + self.partial.len()
    }

    /// Exact matches first, then partial matches.
    pub fn ranked(&self) -> impl Iterator<Item = (MatchKind, &'a Environment)> + '_ {
        self.exact
            .iter()
            .map(|env| (MatchKind::Exact, *env))
            .chain(self.partial.iter().map(|env| (MatchKind::Partial, *env)))
    }
}

pub fn classify(term: &str, env: &Environment) -> Option<MatchKind> {
    if env.id == term || env.name == term {
        Some(MatchKind::Exact)
    } else if env.id.contains(term) || env.name.contains(term) {
        Some(MatchKind::Partial)
    } else {
        None
    }
}

pub fn find_matches<'a>(term: &str, environments: &'a [Environment]) -> Matches<'a> {
    let mut matches = Matches::default();
    for env in environments {
        match classify(term, env) {
            Some(MatchKind::Exact) => matches.exact.push(env),
            Some(MatchKind::Partial) => matches.partial.push(env),
            None => {}
        }
    }
    matches
}
