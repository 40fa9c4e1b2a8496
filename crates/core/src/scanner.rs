//! Raw argument tokens and environment for a single invocation.

use std::collections::{BTreeSet, HashMap};

use log::debug;

use crate::error::{Error, Result};

/// The argument vector and environment variables of a process.
///
/// Passed explicitly so a scanner can be built from anything, not just the
/// live process.
#[derive(Clone, Debug, Default)]
pub struct ProcessEnvironment {
    pub argv: Vec<String>,
    pub env: HashMap<String, String>,
}

impl ProcessEnvironment {
    pub fn new<I, S>(argv: I, env: HashMap<String, String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            argv: argv.into_iter().map(Into::into).collect(),
            env,
        }
    }

    /// Captures `std::env::args` and `std::env::vars` of the running process.
    #[must_use]
    pub fn current() -> Self {
        Self {
            argv: std::env::args().collect(),
            env: std::env::vars().collect(),
        }
    }
}

/// Remaining argument tokens, with deferred removal.
///
/// Consumed tokens disappear from every view immediately; [`compact`](Self::compact)
/// then drops them from storage, keeping the order of what is left.
#[derive(Clone, Debug)]
pub struct ArgumentScanner {
    script_name: String,
    tokens: Vec<String>,
    consumed: BTreeSet<usize>,
    env: HashMap<String, String>,
}

impl ArgumentScanner {
    /// Builds a scanner from an environment whose first argument is the
    /// script name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArguments`] if the argument vector is empty.
    pub fn new(environment: ProcessEnvironment) -> Result<Self> {
        let mut argv = environment.argv.into_iter();
        let script_name = argv.next().ok_or(Error::MissingArguments)?;

        Ok(Self {
            script_name,
            tokens: argv.collect(),
            consumed: BTreeSet::new(),
            env: environment.env,
        })
    }

    /// Remaining tokens with their current indexes.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &str)> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.consumed.contains(index))
            .map(|(index, token)| (index, token.as_str()))
    }

    #[must_use]
    pub fn tokens(&self) -> Vec<&str> {
        self.entries().map(|(_, token)| token).collect()
    }

    #[must_use]
    pub fn token(&self, index: usize) -> Option<&str> {
        if self.consumed.contains(&index) {
            return None;
        }
        self.tokens.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len() - self.consumed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn has_token(&self, token: &str) -> bool {
        self.entries().any(|(_, t)| t == token)
    }

    /// Marks the token at `index` as consumed.
    pub fn consume(&mut self, index: usize) {
        if index < self.tokens.len() && self.consumed.insert(index) {
            debug!("Consumed argument `{}`", self.tokens[index]);
        }
    }

    /// Drops consumed tokens and reindexes the rest.
    pub fn compact(&mut self) {
        if self.consumed.is_empty() {
            return;
        }

        let consumed = std::mem::take(&mut self.consumed);
        self.tokens = std::mem::take(&mut self.tokens)
            .into_iter()
            .enumerate()
            .filter(|(index, _)| !consumed.contains(index))
            .map(|(_, token)| token)
            .collect();
    }

    #[must_use]
    pub fn script_name(&self) -> &str {
        &self.script_name
    }

    #[must_use]
    pub fn env(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn envs(&self) -> &HashMap<String, String> {
        &self.env
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner(argv: &[&str]) -> ArgumentScanner {
        ArgumentScanner::new(ProcessEnvironment::new(argv.iter().copied(), HashMap::new())).unwrap()
    }

    #[test]
    fn test_script_name_is_split_off() {
        let scanner = scanner(&["app.rs", "help", "-v"]);
        assert_eq!(scanner.script_name(), "app.rs");
        assert_eq!(scanner.tokens(), vec!["help", "-v"]);
        assert_eq!(scanner.len(), 2);
    }

    #[test]
    fn test_missing_arguments() {
        let result = ArgumentScanner::new(ProcessEnvironment::default());
        assert!(matches!(result, Err(Error::MissingArguments)));
    }

    #[test]
    fn test_script_name_only() {
        let scanner = scanner(&["app"]);
        assert!(scanner.is_empty());
        assert!(scanner.tokens().is_empty());
    }

    #[test]
    fn test_consume_hides_token_before_compact() {
        let mut scanner = scanner(&["app", "a", "b", "c"]);
        scanner.consume(1);

        assert_eq!(scanner.tokens(), vec!["a", "c"]);
        assert!(!scanner.has_token("b"));
        assert_eq!(scanner.token(1), None);
        assert_eq!(scanner.token(2), Some("c"));
        assert_eq!(scanner.len(), 2);
    }

    #[test]
    fn test_compact_reindexes() {
        let mut scanner = scanner(&["app", "a", "b", "c", "d"]);
        scanner.consume(0);
        scanner.consume(2);
        scanner.compact();

        assert_eq!(scanner.tokens(), vec!["b", "d"]);
        assert_eq!(scanner.token(0), Some("b"));
        assert_eq!(scanner.token(1), Some("d"));
        assert_eq!(scanner.entries().map(|(i, _)| i).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_consume_out_of_range_and_twice() {
        let mut scanner = scanner(&["app", "a"]);
        scanner.consume(5);
        scanner.consume(0);
        scanner.consume(0);
        assert!(scanner.is_empty());
        scanner.compact();
        assert!(scanner.tokens().is_empty());
    }

    #[test]
    fn test_env_lookup() {
        let mut env = HashMap::new();
        env.insert("SOME_VAR".to_string(), "123".to_string());
        let scanner = ArgumentScanner::new(ProcessEnvironment::new(["app"], env)).unwrap();

        assert_eq!(scanner.env("SOME_VAR"), Some("123"));
        assert_eq!(scanner.env("OTHER_VAR"), None);
        assert_eq!(scanner.envs().len(), 1);
    }
}
