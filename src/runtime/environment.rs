use std::collections::{BTreeMap, HashMap};

use crate::error::{Error, Result};
use crate::runtime::Value;

/// Variable storage for a single program run
///
/// A flat name -> value map. Names are only ever added or overwritten;
/// there is no deletion and no nested scoping.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment
    pub fn new() -> Self {
        Environment {
            variables: HashMap::new(),
        }
    }

    /// Gets the value of a variable by name
    pub fn get(&self, name: &str) -> Result<Value> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| Error::UndefinedVariable {
                name: name.to_string(),
            })
    }

    /// Sets a variable value, creating it or overwriting the previous value
    pub fn set(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_string(), value);
        }
    }

    /// Checks if a variable has been assigned
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of assigned variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// True when nothing has been assigned yet
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Returns a name-ordered copy of all variables
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.variables
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_set_and_get() {
        let mut env = Environment::new();
        env.set("x", Value::new(42.0));

        assert_eq!(env.get("x").unwrap(), Value::new(42.0));
    }

    #[test]
    fn test_undefined_variable() {
        let env = Environment::new();
        let result = env.get("undefined");
        assert_eq!(
            result,
            Err(Error::UndefinedVariable {
                name: "undefined".to_string()
            })
        );
    }

    #[test]
    fn test_variable_update() {
        let mut env = Environment::new();

        env.set("x", Value::new(10.0));
        env.set("x", Value::new(20.0));

        assert_eq!(env.get("x").unwrap(), Value::new(20.0));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut env = Environment::new();
        env.set("a", Value::new(1.0));

        assert!(env.contains("a"));
        assert!(!env.contains("A"));
        assert!(env.get("A").is_err());
    }

    #[test]
    fn test_snapshot_is_sorted() {
        let mut env = Environment::new();
        assert!(env.is_empty());

        env.set("y", Value::new(20.0));
        env.set("x", Value::new(10.0));

        let snapshot = env.snapshot();
        let names: Vec<&str> = snapshot.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["x", "y"]);
        assert_eq!(snapshot.get("y"), Some(&Value::new(20.0)));
    }
}
