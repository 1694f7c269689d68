use serde::Serialize;

use crate::bucket::bucket;
use crate::flag::Flag;
use crate::store::Store;

/// Evaluate the flag named `name` for the evaluation key `key`.
///
/// Evaluation never fails: a flag that cannot be found evaluates to disabled, with
/// [Reason::Error] recording why. Rules are applied in order and the first one that applies
/// decides:
///
/// 1. an unknown flag is disabled;
/// 2. an enabled flag is on for every key, whatever its rollout percentage;
/// 3. a positive rollout percentage includes the keys whose bucket lies below it;
/// 4. anything else is disabled.
pub fn evaluate(store: &dyn Store, name: &str, key: &str) -> Detail {
    match store.flag(name) {
        Some(flag) => evaluate_flag(&flag, key),
        None => Detail::err(EvalError::FlagNotFound),
    }
}

pub(crate) fn evaluate_flag(flag: &Flag, key: &str) -> Detail {
    if flag.enabled {
        return Detail::new(true, Reason::On);
    }

    if flag.percentage_rollout > 0.0 {
        let bucket = bucket(&flag.name, key);
        let in_rollout = bucket < flag.percentage_rollout;
        return Detail::new(in_rollout, Reason::Rollout { bucket, in_rollout });
    }

    Detail::new(false, Reason::Off)
}

/// A Detail is returned from [evaluate], combining the decision with an explanation of how it was
/// reached.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Detail {
    /// Whether the flag is on for the evaluated key.
    pub enabled: bool,

    /// The main factor that decided [Detail::enabled].
    pub reason: Reason,
}

impl Detail {
    fn new(enabled: bool, reason: Reason) -> Self {
        Detail { enabled, reason }
    }

    /// A disabled result carrying `error` as its reason.
    pub fn err(error: EvalError) -> Self {
        Detail::new(false, Reason::Error { error })
    }
}

/// Reason describes why an evaluation produced its result.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "kind")]
pub enum Reason {
    /// The flag is disabled and has no positive rollout.
    Off,
    /// The flag is enabled for every key.
    On,
    /// The result was decided by the flag's percentage rollout.
    #[serde(rename_all = "camelCase")]
    Rollout {
        /// The key's bucket, in `[0, 100)`.
        bucket: f64,
        /// Whether the bucket fell inside the rollout percentage.
        in_rollout: bool,
    },
    /// The flag could not be evaluated; the result is disabled.
    Error {
        #[serde(rename = "errorKind")]
        error: EvalError,
    },
}

/// EvalError is returned via a [Reason::Error] when a flag cannot be evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvalError {
    /// No flag with the requested name exists.
    FlagNotFound,
}
