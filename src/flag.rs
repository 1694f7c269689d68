use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// A named feature flag.
///
/// A flag that is `enabled` is on for every evaluation key. Otherwise it is on for the share of
/// keys given by `percentage_rollout`, which is expected to lie within `[0, 100]`.
///
/// Flags are plain values: the registry hands out clones, and a stored flag only changes when it
/// is replaced under its name.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Flag {
    #[serde(deserialize_with = "non_empty_name")]
    #[cfg_attr(test, proptest(regex = "[a-z][a-z0-9_]{0,15}"))]
    pub name: String,
    pub enabled: bool,
    #[cfg_attr(test, proptest(strategy = "-50.0f64..150.0"))]
    pub percentage_rollout: f64,
}

impl Flag {
    /// A flag with every field given explicitly.
    pub fn new(name: impl Into<String>, enabled: bool, percentage_rollout: f64) -> Self {
        Flag {
            name: name.into(),
            enabled,
            percentage_rollout,
        }
    }

    /// A flag that is on for every key.
    pub fn on(name: impl Into<String>) -> Self {
        Flag::new(name, true, 0.0)
    }

    /// A flag that is off for every key.
    pub fn off(name: impl Into<String>) -> Self {
        Flag::new(name, false, 0.0)
    }

    /// A disabled flag that is rolled out to `percentage` percent of keys.
    pub fn rollout(name: impl Into<String>, percentage: f64) -> Self {
        Flag::new(name, false, percentage)
    }

    pub(crate) fn has_valid_rollout(&self) -> bool {
        (0.0..=100.0).contains(&self.percentage_rollout)
    }
}

fn non_empty_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    if name.is_empty() {
        return Err(de::Error::invalid_value(
            de::Unexpected::Str(&name),
            &"a non-empty flag name",
        ));
    }
    Ok(name)
}
