use std::cell::RefMut;
use std::collections::HashMap;

use super::managererror::ManagerError;

/// Registry of named objects built from JSON.
///
/// `S` carries whatever the builder needs besides the JSON itself.
pub trait IManager<V, S> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            supports: &S) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let elem = self.map().get(name).cloned();
        elem.ok_or_else(|| ManagerError::NameNotFoundError(name.to_owned()))
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    /// Stops at the first object that fails to build.
    fn insert_obj_from_json_vec(&self,
                                json_vec: &[serde_json::Value],
                                supports: &S) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone(), supports)?;
        }
        Ok(())
    }
}
