//! 交叉算子

use super::Crossover;
use crate::representation::{sub_sequence, Chromosome, Gene};
use crate::Error;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CROSSOVER_POINT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum CrossoverMethod {
    /// 在固定位置把第一个亲本切成头尾两段再拼接，第二个亲本不参与
    Split { point: usize },
    /// 头部取自第一个亲本，其余基因按照在第二个亲本中出现的顺序补齐
    Ordered { point: usize },
}

impl Default for CrossoverMethod {
    fn default() -> Self {
        CrossoverMethod::Split {
            point: DEFAULT_CROSSOVER_POINT,
        }
    }
}

impl CrossoverMethod {
    pub fn point(&self) -> usize {
        match self {
            CrossoverMethod::Split { point } | CrossoverMethod::Ordered { point } => *point,
        }
    }

    fn split(first: &[Gene], point: usize) -> Result<Chromosome, Error> {
        let head = sub_sequence(first, 0, point)?;
        let tail = sub_sequence(first, point, first.len() - point)?;
        Ok([head, tail].concat())
    }

    fn ordered(first: &[Gene], second: &[Gene], point: usize) -> Result<Chromosome, Error> {
        let head = sub_sequence(first, 0, point)?;
        let mut taken = vec![false; first.len().max(second.len())];
        for &gene in head {
            taken[gene] = true;
        }
        let mut child = head.to_vec();
        child.extend(second.iter().filter(|&&gene| !taken[gene]));
        Ok(child)
    }
}

impl Crossover for CrossoverMethod {
    fn validate(&self, length: usize) -> Result<(), Error> {
        let point = self.point();
        if point > length {
            return Err(Error::InvalidArgument(format!(
                "交叉点 {point} 超过了染色体长度 {length}"
            )));
        }
        Ok(())
    }

    fn crossover(
        &self,
        population: &[Chromosome],
        parents: &[usize],
    ) -> Result<Vec<Chromosome>, Error> {
        let lookup = |index: usize| {
            population.get(index).ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "亲本序号 {index} 超出了种群规模 {}",
                    population.len()
                ))
            })
        };
        let mut children = Vec::with_capacity(parents.len() / 2);
        for pair in parents.chunks_exact(2) {
            let first = lookup(pair[0])?;
            let second = lookup(pair[1])?;
            self.validate(first.len())?;
            let child = match self {
                CrossoverMethod::Split { point } => Self::split(first, *point)?,
                CrossoverMethod::Ordered { point } => Self::ordered(first, second, *point)?,
            };
            children.push(child);
        }
        Ok(children)
    }
}
