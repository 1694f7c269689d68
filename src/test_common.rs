#![cfg(test)]

use crate::flag::Flag;
use crate::store::Store;
use maplit::hashmap;
use std::collections::HashMap;

pub struct TestStore {
    flags: HashMap<String, Flag>,
}

impl TestStore {
    pub fn new() -> Self {
        Self {
            flags: hashmap! {
                "new_feature".to_string() => Flag::on("new_feature"),
                "killed_feature".to_string() => Flag::off("killed_feature"),
                "beta_feature".to_string() => Flag::rollout("beta_feature", 50.0),
                "full_rollout".to_string() => Flag::rollout("full_rollout", 100.0),
                "negative_rollout".to_string() => Flag::rollout("negative_rollout", -10.0),
                "on_with_zero_rollout".to_string() => Flag::new("on_with_zero_rollout", true, 0.0),
                "on_with_negative_rollout".to_string() => serde_json::from_str(r#"{
                        "name": "on_with_negative_rollout",
                        "enabled": true,
                        "percentage_rollout": -25
                    }"#).unwrap(),
                "on_with_oversized_rollout".to_string() => serde_json::from_str(r#"{
                        "name": "on_with_oversized_rollout",
                        "enabled": true,
                        "percentage_rollout": 250.5
                    }"#).unwrap(),
            },
        }
    }
}

impl Store for TestStore {
    fn flag(&self, name: &str) -> Option<Flag> {
        self.flags.get(name).cloned()
    }
}
