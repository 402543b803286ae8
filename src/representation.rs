//! 染色体和种群的表示

use crate::Error;
use rand::seq::SliceRandom;
use rand::Rng;

/// 基因是地点在地点列表中的位置
pub type Gene = usize;

/// 染色体是所有地点的一个排列，代表一条候选路线
pub type Chromosome = Vec<Gene>;

/// 种群中的每个位置都始终存放一个合法的排列
pub type Population = Vec<Chromosome>;

/// 生成 0..n 的一个均匀随机排列
pub fn random_chromosome<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Chromosome {
    let mut chromosome: Chromosome = (0..n).collect();
    chromosome.shuffle(rng);
    chromosome
}

pub fn random_population<R: Rng + ?Sized>(size: usize, n: usize, rng: &mut R) -> Population {
    (0..size).map(|_| random_chromosome(n, rng)).collect()
}

/// 截取从 `offset` 开始、长度为 `length` 的连续片段
pub fn sub_sequence(chromosome: &[Gene], offset: usize, length: usize) -> Result<&[Gene], Error> {
    match offset.checked_add(length) {
        Some(end) if end <= chromosome.len() => Ok(&chromosome[offset..end]),
        _ => Err(Error::OutOfRange {
            offset,
            length,
            total: chromosome.len(),
        }),
    }
}

/// 判断染色体是否恰好是 0..n 的一个排列
pub fn is_permutation(chromosome: &[Gene], n: usize) -> bool {
    if chromosome.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &gene in chromosome {
        if gene >= n || seen[gene] {
            return false;
        }
        seen[gene] = true;
    }
    true
}
