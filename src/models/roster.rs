use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::UserRecord;

/// Test users keyed by username.
///
/// Iteration follows first-insertion order. Inserting a name that is already
/// present replaces the stored record in place (last write wins).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<UserRecord>,
    index: HashMap<String, usize>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `user` under its name, returning the record it replaced.
    pub fn insert(&mut self, user: UserRecord) -> Option<UserRecord> {
        match self.index.get(&user.name) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos], user)),
            None => {
                self.index.insert(user.name.clone(), self.entries.len());
                self.entries.push(user);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&UserRecord> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UserRecord> {
        self.entries.iter()
    }

    /// Usernames in roster order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|u| u.name.as_str())
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a UserRecord;
    type IntoIter = std::slice::Iter<'a, UserRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<UserRecord> for Roster {
    fn from_iter<I: IntoIterator<Item = UserRecord>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for user in iter {
            roster.insert(user);
        }
        roster
    }
}

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for user in &self.entries {
            map.serialize_entry(&user.name, user)?;
        }
        map.end()
    }
}
