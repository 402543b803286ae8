//! 目标函数接口，以及默认目标函数的实现
//!

use crate::representation::Gene;
pub mod default;
pub mod distance;

pub trait Objective {
    /// 地点的数量，也就是合法染色体的长度
    fn size(&self) -> usize;

    /// 对一条路线打分，越小越好
    fn evaluate(&self, chromosome: &[Gene]) -> f64;
}
