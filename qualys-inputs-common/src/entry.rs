use serde::Serialize;

use crate::ipv4::is_ipv4_format;

pub trait Validate {
    fn is_valid(&self) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinuxEntry {
    pub hostname: String,
    pub ip: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LinuxField {
    Hostname,
    Ip,
}

impl LinuxEntry {
    pub fn new(hostname: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ip: ip.into(),
        }
    }

    pub fn field(&self, field: LinuxField) -> &str {
        match field {
            LinuxField::Hostname => &self.hostname,
            LinuxField::Ip => &self.ip,
        }
    }

    pub fn set(&mut self, field: LinuxField, value: String) {
        match field {
            LinuxField::Hostname => self.hostname = value,
            LinuxField::Ip => self.ip = value,
        }
    }
}

impl Validate for LinuxEntry {
    fn is_valid(&self) -> bool {
        !self.hostname.trim().is_empty() && is_ipv4_format(&self.ip)
    }
}

impl Validate for String {
    fn is_valid(&self) -> bool {
        is_ipv4_format(self)
    }
}

/// Ordered list of entries that always holds at least one entry.
///
/// Indices are positions in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntryList<T> {
    entries: Vec<T>,
}

pub type LinuxEntryList = EntryList<LinuxEntry>;
pub type IpList = EntryList<String>;

impl<T: Default> Default for EntryList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> EntryList<T> {
    pub fn new() -> Self {
        Self {
            entries: vec![T::default()],
        }
    }

    pub fn push_blank(&mut self) {
        self.entries.push(T::default());
    }
}

impl<T> EntryList<T> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Applies `f` to the entry at `index`. Returns `false` when out of bounds.
    pub fn update(&mut self, index: usize, f: impl FnOnce(&mut T)) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                f(entry);
                true
            }
            None => false,
        }
    }

    /// Removes the entry at `index` unless it is the last one left.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.entries.len() <= 1 || index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        true
    }
}

impl<T: Validate> EntryList<T> {
    pub fn is_valid(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(Validate::is_valid)
    }
}

impl<'a, T> IntoIterator for &'a EntryList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_with_one_blank() {
        let list = LinuxEntryList::new();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0), Some(&LinuxEntry::default()));
    }

    #[test]
    fn test_last_entry_is_kept() {
        let mut list = IpList::new();
        assert!(!list.remove(0));
        assert!(!list.remove(0));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut list = IpList::new();
        list.push_blank();
        list.push_blank();
        for (i, ip) in ["10.0.0.1", "10.0.0.2", "10.0.0.3"].into_iter().enumerate() {
            list.update(i, |v| *v = ip.to_string());
        }

        assert!(list.remove(1));
        let ips: Vec<&str> = list.iter().map(String::as_str).collect();
        assert_eq!(ips, vec!["10.0.0.1", "10.0.0.3"]);
    }

    #[test]
    fn test_out_of_bounds_is_noop() {
        let mut list = IpList::new();
        list.push_blank();
        assert!(!list.update(5, |v| *v = "10.0.0.1".to_string()));
        assert!(!list.remove(2));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_linux_entry_validation() {
        assert!(LinuxEntry::new("web-1", "10.0.0.5").is_valid());
        assert!(!LinuxEntry::new("  ", "10.0.0.5").is_valid());
        assert!(!LinuxEntry::new("web-1", "").is_valid());
        assert!(!LinuxEntry::new("web-1", "10.0.0.256").is_valid());
    }

    #[test]
    fn test_set_field() {
        let mut entry = LinuxEntry::default();
        entry.set(LinuxField::Ip, "10.0.0.1".into());
        entry.set(LinuxField::Hostname, "db".into());
        assert_eq!(entry.field(LinuxField::Hostname), "db");
        assert_eq!(entry.field(LinuxField::Ip), "10.0.0.1");
    }

    proptest! {
        #[test]
        fn prop_never_empty(adds in 0usize..8, deletes in proptest::collection::vec(0usize..10, 0..20)) {
            let mut list = IpList::new();
            for _ in 0..adds {
                list.push_blank();
            }
            for index in deletes {
                list.remove(index);
                prop_assert!(list.len() >= 1);
            }
        }
    }
}
