//! 算子接口，以及选择、交叉、变异、替换算子的实现
//!

use crate::representation::Chromosome;
use crate::Error;
use rand::Rng;

pub mod crossover;
pub mod mutation;
pub mod replacement;
pub mod selection;

pub trait Crossover {
    /// 检查算子能否作用于给定长度的染色体
    fn validate(&self, length: usize) -> Result<(), Error>;

    /// 把亲本两两配对，每一对产生一个后代
    fn crossover(
        &self,
        population: &[Chromosome],
        parents: &[usize],
    ) -> Result<Vec<Chromosome>, Error>;
}

pub trait Mutation {
    /// 原地对一组后代做随机扰动
    fn mutate<R: Rng + ?Sized>(&self, children: &mut [Chromosome], rng: &mut R);
}
