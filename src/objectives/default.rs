use super::distance::distance_matrix;
use super::Objective;
use crate::data::Location;
use crate::representation::Gene;
use serde::{Deserialize, Serialize};

/// 路线长度累加哪些相邻地点对
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessSpan {
    /// 只累加第 1 到第 len - 2 个位置之间的距离，不含起点出发的一段和最后一段
    #[default]
    Partial,
    /// 完整的回路长度，包括从终点回到起点的一段
    Closed,
}

impl FitnessSpan {
    /// 列出参与累加的相邻位置对
    pub fn segments(&self, length: usize) -> Vec<(usize, usize)> {
        match self {
            FitnessSpan::Partial => (1..length.saturating_sub(2)).map(|i| (i, i + 1)).collect(),
            FitnessSpan::Closed if length < 2 => vec![],
            FitnessSpan::Closed => (0..length).map(|i| (i, (i + 1) % length)).collect(),
        }
    }
}

/// 以路线长度为目标函数
#[derive(Debug, Clone)]
pub struct RouteLength {
    distances: Vec<Vec<f64>>,
    span: FitnessSpan,
}

impl RouteLength {
    pub fn new(locations: &[Location], span: FitnessSpan) -> Self {
        Self {
            distances: distance_matrix(locations),
            span,
        }
    }
}

impl Objective for RouteLength {
    fn size(&self) -> usize {
        self.distances.len()
    }

    fn evaluate(&self, chromosome: &[Gene]) -> f64 {
        self.span
            .segments(chromosome.len())
            .into_iter()
            .map(|(from, to)| self.distances[chromosome[from]][chromosome[to]])
            .sum()
    }
}
