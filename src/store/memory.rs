use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use super::{Error, Result};

/// A subscriber set living in process memory.
/// Cheaply cloneable, clones share the same set.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    emails: Arc<Mutex<HashSet<String>>>,
}

impl MemoryStore {
    pub fn insert(&self, email: &str) -> Result<bool> {
        let mut emails = self.emails.lock().map_err(|_| Error::Poisoned)?;
        Ok(emails.insert(email.to_owned()))
    }

    pub fn count(&self) -> Result<u64> {
        let emails = self.emails.lock().map_err(|_| Error::Poisoned)?;
        Ok(emails.len() as u64)
    }

    /// Poisons the lock by panicking while holding it, every later operation fails.
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let emails = Arc::clone(&self.emails);
        let _ = std::thread::spawn(move || {
            let _guard = emails.lock();
            panic!("poisoning the subscriber set lock");
        })
        .join();
    }
}
