//! 遗传算法

use super::{best_of, OptimizationResult};
use crate::interfaces::{Interface, Message};
use crate::objectives::Objective;
use crate::operators::crossover::CrossoverMethod;
use crate::operators::mutation::SwapMutation;
use crate::operators::replacement::replace;
use crate::operators::selection::select;
use crate::operators::{Crossover, Mutation};
use crate::representation::{is_permutation, Chromosome, Population};
use crate::Error;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use tracing::{debug, info, warn};
use web_time::Instant;

/// 遗传算法的参数
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genetic {
    /// 迭代的代数，不会提前结束
    #[serde(default = "Genetic::default_generations")]
    pub generations: usize,
    /// 每代参与选择的样本数，默认为种群规模的一半
    pub sample_size: Option<usize>,
    /// 每代从样本中取出的最好和最差个体的数量
    #[serde(default = "Genetic::default_selection_size")]
    pub selection_size: usize,
    #[serde(default)]
    pub crossover: CrossoverMethod,
    #[serde(default)]
    pub mutation: SwapMutation,
}

impl Default for Genetic {
    fn default() -> Self {
        Self {
            generations: Self::default_generations(),
            sample_size: None,
            selection_size: Self::default_selection_size(),
            crossover: CrossoverMethod::default(),
            mutation: SwapMutation::default(),
        }
    }
}

impl Genetic {
    const fn default_generations() -> usize {
        10
    }

    const fn default_selection_size() -> usize {
        10
    }

    /// 在开始迭代之前检查全部参数，返回实际使用的采样数量
    pub fn validate<O: Objective>(
        &self,
        population: &[Chromosome],
        objective: &O,
    ) -> Result<usize, Error> {
        let size = objective.size();
        if let Some(index) = population
            .iter()
            .position(|chromosome| !is_permutation(chromosome, size))
        {
            return Err(Error::InvalidArgument(format!(
                "第 {index} 个染色体不是 0..{size} 的排列"
            )));
        }
        let sample_size = self.sample_size.unwrap_or(population.len() / 2);
        if sample_size > population.len() {
            return Err(Error::InvalidArgument(format!(
                "采样数量 {sample_size} 超过了种群规模 {}",
                population.len()
            )));
        }
        self.crossover.validate(size)?;
        Ok(sample_size)
    }

    /// 遗传算法求解的主函数
    ///
    /// 种群在迭代期间归本方法独占，结束后随结果一起返回。
    pub fn optimize<O: Objective, R: Rng + ?Sized>(
        &self,
        mut population: Population,
        objective: &O,
        rng: &mut R,
        interface: &dyn Interface,
    ) -> Result<OptimizationResult, Error> {
        let start = Instant::now();
        let sample_size = self.validate(&population, objective)?;
        if population.is_empty() {
            warn!("种群为空，没有可用的解");
            interface.send(Message::NoSolution);
            return Ok(OptimizationResult {
                best: None,
                best_seen: f64::INFINITY,
                generations: 0,
                population,
            });
        }
        let mut best_seen = f64::INFINITY;
        let mut generation = 0;

        while generation < self.generations {
            let candidates = select(
                &population,
                objective,
                sample_size,
                self.selection_size,
                rng,
            )?;
            // 记录本代选出的最好个体
            let fitness = candidates
                .fittest
                .first()
                .map(|&index| objective.evaluate(&population[index]));
            if let Some(fitness) = fitness {
                if fitness < best_seen {
                    best_seen = fitness;
                    interface.send(Message::BetterSolution {
                        generation,
                        fitness,
                    });
                }
            }
            let mut children = self.crossover.crossover(&population, &candidates.fittest)?;
            self.mutation.mutate(&mut children, rng);
            debug!(
                "第 {} 代：样本 {} 个，产生后代 {} 个",
                generation,
                candidates.sample.len(),
                children.len()
            );
            replace(&mut population, children, &candidates.worst)?;
            interface.send(Message::Progress {
                generation,
                fitness,
                best_seen,
            });
            generation += 1;
        }

        let best = best_of(&population, objective);
        if let Some(solution) = &best {
            info!(
                "迭代 {} 代后，最好的个体是第 {} 个，路线长度 {:.2}",
                generation, solution.index, solution.fitness
            );
            interface.send(Message::Finished {
                index: solution.index,
                fitness: solution.fitness,
            });
        }
        interface.send(Message::Elapsed {
            time: start.elapsed().as_micros() as u64,
        });
        Ok(OptimizationResult {
            best,
            best_seen,
            generations: generation,
            population,
        })
    }
}
