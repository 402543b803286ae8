//! 变异算子

use super::Mutation;
use crate::representation::Chromosome;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 交换位置的取值范围
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapRange {
    /// 在后代的个数以内取位置（同时不超过染色体长度）
    #[default]
    Children,
    /// 在整条染色体内取位置
    Chromosome,
}

impl SwapRange {
    pub fn bound(&self, children: usize, length: usize) -> usize {
        match self {
            SwapRange::Children => children.min(length),
            SwapRange::Chromosome => length,
        }
    }
}

/// 交换变异：每个后代掷一次 [0, range) 的骰子，点数不超过 threshold 时随机交换两个基因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapMutation {
    #[serde(default = "SwapMutation::default_range")]
    pub range: u32,
    /// 为空时不做变异
    #[serde(default = "SwapMutation::default_threshold")]
    pub threshold: Option<u32>,
    #[serde(default)]
    pub swap_range: SwapRange,
}

impl SwapMutation {
    const fn default_range() -> u32 {
        10
    }

    const fn default_threshold() -> Option<u32> {
        Some(3)
    }

    /// 不做任何变异
    pub fn disabled() -> Self {
        Self {
            threshold: None,
            ..Self::default()
        }
    }

    /// 每个后代发生变异的概率
    pub fn probability(&self) -> f64 {
        match self.threshold {
            Some(threshold) if self.range > 0 => {
                threshold.saturating_add(1).min(self.range) as f64 / self.range as f64
            }
            _ => 0.0,
        }
    }
}

impl Default for SwapMutation {
    fn default() -> Self {
        Self {
            range: Self::default_range(),
            threshold: Self::default_threshold(),
            swap_range: SwapRange::default(),
        }
    }
}

impl Mutation for SwapMutation {
    fn mutate<R: Rng + ?Sized>(&self, children: &mut [Chromosome], rng: &mut R) {
        let Some(threshold) = self.threshold else {
            return;
        };
        if self.range == 0 {
            return;
        }
        let count = children.len();
        for child in children.iter_mut() {
            let roll = rng.random_range(0..self.range);
            if roll > threshold {
                continue;
            }
            let bound = self.swap_range.bound(count, child.len());
            if bound == 0 {
                continue;
            }
            let a = rng.random_range(0..bound);
            let b = rng.random_range(0..bound);
            child.swap(a, b);
            debug!("交换第 {} 和第 {} 个基因", a, b);
        }
    }
}
