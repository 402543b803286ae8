//! 优化方法，以及优化结果的定义
//!

use crate::objectives::Objective;
use crate::representation::{Chromosome, Population};
use serde::Serialize;
pub mod genetic;

/// 种群中的一个个体及其目标函数值
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub index: usize,
    pub fitness: f64,
    pub route: Chromosome,
}

#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// 最终种群中最好的个体，种群为空时没有解
    pub best: Option<Solution>,
    /// 迭代过程中每代选出的最好个体里出现过的最小值，可能和 `best` 不同
    pub best_seen: f64,
    pub generations: usize,
    pub population: Population,
}

/// 扫描整个种群，返回第一个目标函数值最小的个体
pub fn best_of<O: Objective>(population: &[Chromosome], objective: &O) -> Option<Solution> {
    population
        .iter()
        .enumerate()
        .map(|(index, chromosome)| (index, objective.evaluate(chromosome)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, fitness)| Solution {
            index,
            fitness,
            route: population[index].clone(),
        })
}
