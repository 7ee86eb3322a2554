//! allow-list of remote peers the transport may accept connections from

use std::collections::HashSet;

/**
    set of peer identifiers (usually network addresses) allowed to talk to the
    device. The transport checks it before accepting a connection.

    Plain set semantics: adding a known identifier or removing an unknown one
    is a no-op, not an error. Iteration order is undefined.
*/
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AccessControl {
    allowed: HashSet<String>,
}

impl AccessControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// allow one peer
    pub fn add(&mut self, host: impl Into<String>) {
        let host = host.into();
        if self.allowed.insert(host.clone()) {
            log::debug!("allowing peer {}", host);
        }
    }

    /// allow every peer of a sequence
    pub fn add_all<S: Into<String>>(&mut self, hosts: impl IntoIterator<Item = S>) {
        for host in hosts {
            self.add(host);
        }
    }

    /// withdraw one peer
    pub fn remove(&mut self, host: &str) {
        if self.allowed.remove(host) {
            log::debug!("withdrawing peer {}", host);
        }
    }

    /// withdraw every peer of a sequence
    pub fn remove_all<'a>(&mut self, hosts: impl IntoIterator<Item = &'a str>) {
        for host in hosts {
            self.remove(host);
        }
    }

    /// true if the peer is allowed to connect
    pub fn check(&self, host: &str) -> bool {
        self.allowed.contains(host)
    }

    /// currently allowed peers, in no defined order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

impl<'a> IntoIterator for &'a AccessControl {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::collections::hash_set::Iter<'a, String>, fn(&'a String) -> &'a str>;
    fn into_iter(self) -> Self::IntoIter {
        self.allowed.iter().map(String::as_str as fn(&'a String) -> &'a str)
    }
}
