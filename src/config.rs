use crate::objectives::default::FitnessSpan;
use crate::optimizers::genetic::Genetic;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::BTreeMap;

/// 未指定种群规模时，从 [0, MAX_POPULATION) 中随机取一个
pub const MAX_POPULATION: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveConfig {
    #[serde(default)]
    pub span: FitnessSpan,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub version: Option<String>,
    pub info: Option<BTreeMap<String, String>>,
    pub seed: Option<u64>,
    pub population_size: Option<usize>,
    #[serde(default)]
    pub objective: ObjectiveConfig,
    #[serde(default)]
    pub genetic: Genetic,
}

impl Config {
    /// 种群规模在启动时确定一次，整个求解过程中保持不变
    pub fn population_size<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.population_size
            .unwrap_or_else(|| rng.random_range(0..MAX_POPULATION))
    }
}
