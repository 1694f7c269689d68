use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::warn;
use parking_lot::RwLock;

use crate::error::{LoadError, NotFound};
use crate::eval::{self, Detail};
use crate::flag::Flag;
use crate::store::Store;

/// A concurrency-safe, in-process collection of feature flags keyed by name.
///
/// Reads ([Registry::get_flag], [Registry::is_enabled], [Registry::evaluate]) share the lock and
/// run concurrently. Writes ([Registry::set_flag] and the merge step of a load) hold it
/// exclusively. Flags are never removed, only replaced under their name.
#[derive(Debug, Default)]
pub struct Registry {
    flags: RwLock<HashMap<String, Flag>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the flags from the JSON file at `path` into the registry.
    ///
    /// See [Registry::load_from_reader] for the merge rules.
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let file = File::open(path.as_ref())?;
        self.load_from_reader(BufReader::new(file))
    }

    /// Merge the flags read from `reader` into the registry.
    ///
    /// The source must be a JSON array of `{"name", "enabled", "percentage_rollout"}` records.
    /// Records are applied in source order, so a later record overrides an earlier one with the
    /// same name. Flags absent from the source are left as they are.
    ///
    /// The whole source is decoded before the registry is touched: on error nothing is applied.
    /// Records whose `percentage_rollout` lies outside `[0, 100]` are stored as given and logged
    /// with a warning.
    pub fn load_from_reader(&self, reader: impl Read) -> Result<(), LoadError> {
        let records: Vec<Flag> = serde_json::from_reader(reader)?;

        for flag in records.iter().filter(|flag| !flag.has_valid_rollout()) {
            warn!(
                "flag {} has percentage_rollout {} outside [0, 100]",
                flag.name, flag.percentage_rollout
            );
        }

        let mut flags = self.flags.write();
        for flag in records {
            flags.insert(flag.name.clone(), flag);
        }

        Ok(())
    }

    /// Insert `flag`, replacing any flag already stored under the same name.
    pub fn set_flag(&self, flag: Flag) {
        self.flags.write().insert(flag.name.clone(), flag);
    }

    /// Retrieve a copy of the flag named `name`.
    pub fn get_flag(&self, name: &str) -> Result<Flag, NotFound> {
        self.flags.read().get(name).cloned().ok_or_else(|| NotFound {
            name: name.to_string(),
        })
    }

    /// Whether the flag named `name` is on for the evaluation key `key`.
    ///
    /// Unknown flags are off. The answer for a given key only changes when the flag does.
    pub fn is_enabled(&self, name: &str, key: &str) -> bool {
        self.evaluate(name, key).enabled
    }

    /// Like [Registry::is_enabled], but also reports why the flag is on or off.
    pub fn evaluate(&self, name: &str, key: &str) -> Detail {
        eval::evaluate(self, name, key)
    }

    /// Number of flags currently stored.
    pub fn len(&self) -> usize {
        self.flags.read().len()
    }

    /// True when no flag has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.flags.read().is_empty()
    }
}

impl Store for Registry {
    fn flag(&self, name: &str) -> Option<Flag> {
        self.flags.read().get(name).cloned()
    }
}
