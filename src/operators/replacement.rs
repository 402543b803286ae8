//! 替换算子

use crate::representation::Chromosome;
use crate::Error;

/// 用后代依次覆盖种群中最差的个体，种群规模保持不变
///
/// 参数不合法时直接返回错误，种群不会被部分修改。
pub fn replace(
    population: &mut [Chromosome],
    children: Vec<Chromosome>,
    worst: &[usize],
) -> Result<(), Error> {
    if children.len() > worst.len() {
        return Err(Error::InvalidArgument(format!(
            "有 {} 个后代，但只有 {} 个待替换的位置",
            children.len(),
            worst.len()
        )));
    }
    if let Some(index) = worst.iter().find(|&&index| index >= population.len()) {
        return Err(Error::InvalidArgument(format!(
            "待替换的序号 {index} 超出了种群规模 {}",
            population.len()
        )));
    }
    for (child, &index) in children.into_iter().zip(worst) {
        population[index] = child;
    }
    Ok(())
}
