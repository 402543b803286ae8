//! 选择算子

use crate::objectives::Objective;
use crate::representation::Chromosome;
use crate::Error;
use itertools::Itertools;
use rand::seq::index::sample;
use rand::Rng;

/// 一次选择的结果，都是种群中的序号
#[derive(Debug, Clone, PartialEq)]
pub struct Candidates {
    /// 参与比较的随机样本
    pub sample: Vec<usize>,
    /// 样本中路线最短的若干个体，从好到差
    pub fittest: Vec<usize>,
    /// 样本中路线最长的若干个体，从差到好
    pub worst: Vec<usize>,
}

/// 从种群中随机抽取 `sample_size` 个互不相同的个体，按目标函数排序，返回最好和最差的各 `k` 个
///
/// 两个列表的长度都是 `min(k, sample_size)`；目标函数值相同时保持抽样的先后顺序。
pub fn select<O: Objective, R: Rng + ?Sized>(
    population: &[Chromosome],
    objective: &O,
    sample_size: usize,
    k: usize,
    rng: &mut R,
) -> Result<Candidates, Error> {
    if sample_size > population.len() {
        return Err(Error::InvalidArgument(format!(
            "采样数量 {sample_size} 超过了种群规模 {}",
            population.len()
        )));
    }
    let indices = sample(rng, population.len(), sample_size).into_vec();
    let scored: Vec<(usize, f64)> = indices
        .iter()
        .map(|&index| (index, objective.evaluate(&population[index])))
        .collect();
    let fittest = scored
        .iter()
        .sorted_by(|a, b| a.1.total_cmp(&b.1))
        .take(k)
        .map(|&(index, _)| index)
        .collect();
    let worst = scored
        .iter()
        .sorted_by(|a, b| b.1.total_cmp(&a.1))
        .take(k)
        .map(|&(index, _)| index)
        .collect();
    Ok(Candidates {
        sample: indices,
        fittest,
        worst,
    })
}
