use std::collections::HashMap;

use crate::error::EvaluationError;

/// Variable storage for one program execution.
///
/// Scalars and lists live in two independent name spaces. The store does not
/// stop a name from being bound in both; misuse is reported when a name is
/// read through the wrong space.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SymbolStore {
    scalars: HashMap<String, i64>,
    lists:   HashMap<String, Vec<i64>>,
}

impl SymbolStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to a scalar value, replacing any previous scalar binding.
    pub fn set_scalar(&mut self, name: &str, value: i64) {
        self.scalars.insert(name.to_string(), value);
    }

    /// Reads the scalar bound to `name`.
    ///
    /// # Errors
    /// [`EvaluationError::WrongKind`] if `name` is only bound as a list,
    /// [`EvaluationError::UndeclaredIdentifier`] if it is not bound at all.
    pub fn scalar(&self, name: &str, line: usize) -> Result<i64, EvaluationError> {
        if let Some(value) = self.scalars.get(name) {
            return Ok(*value);
        }

        if self.lists.contains_key(name) {
            return Err(EvaluationError::WrongKind { name: name.to_string(),
                                                    expected: "scalar",
                                                    actual: "list",
                                                    line });
        }

        Err(EvaluationError::UndeclaredIdentifier { name: name.to_string(),
                                                    line })
    }

    /// Binds `name` to a new empty list, discarding any list it held.
    pub fn init_list(&mut self, name: &str) {
        self.lists.insert(name.to_string(), Vec::new());
    }

    /// Pushes `value` onto the list bound to `name`.
    ///
    /// # Errors
    /// Fails if `name` was never initialized as a list.
    pub fn append(&mut self, name: &str, value: i64, line: usize) -> Result<(), EvaluationError> {
        match self.lists.get_mut(name) {
            Some(list) => {
                list.push(value);
                Ok(())
            },
            None => Err(self.missing_list(name, line)),
        }
    }

    /// Reads element `index` of the list bound to `name`.
    ///
    /// # Errors
    /// Fails if `name` is not a list, or with
    /// [`EvaluationError::IndexOutOfBounds`] if `index` is negative or not
    /// less than the list length.
    ///
    /// # Example
    /// ```
    /// use tinypy::interpreter::symbols::SymbolStore;
    ///
    /// let mut store = SymbolStore::new();
    /// store.init_list("a");
    /// store.append("a", 5, 2).unwrap();
    ///
    /// assert_eq!(store.list_element("a", 0, 3).unwrap(), 5);
    /// assert!(store.list_element("a", 1, 3).is_err());
    /// assert!(store.list_element("a", -1, 3).is_err());
    /// ```
    pub fn list_element(&self, name: &str, index: i64, line: usize) -> Result<i64, EvaluationError> {
        let list = self.lists
                       .get(name)
                       .ok_or_else(|| self.missing_list(name, line))?;

        usize::try_from(index).ok()
                              .and_then(|i| list.get(i).copied())
                              .ok_or_else(|| EvaluationError::IndexOutOfBounds { name:
                                                                                     name.to_string(),
                                                                                 index,
                                                                                 len: list.len(),
                                                                                 line })
    }

    /// Returns the list bound to `name`, if any.
    #[must_use]
    pub fn list(&self, name: &str) -> Option<&[i64]> {
        self.lists.get(name).map(Vec::as_slice)
    }

    fn missing_list(&self, name: &str, line: usize) -> EvaluationError {
        if self.scalars.contains_key(name) {
            EvaluationError::WrongKind { name: name.to_string(),
                                         expected: "list",
                                         actual: "scalar",
                                         line }
        } else {
            EvaluationError::UndeclaredIdentifier { name: name.to_string(),
                                                    line }
        }
    }
}
