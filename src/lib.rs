//! libroute 是使用 Rust 实现的旅行商问题近似求解库，核心是一个分代遗传算法。
//!
//! route 是使用 libroute 实现的命令行程序，用户可以提供地点表和配置文件，本程序会给出一条尽可能短的、恰好经过每个地点一次的路线。

pub mod config;
pub mod data;
pub mod interfaces;
pub mod objectives;
pub mod operators;
pub mod optimizers;
pub mod representation;

use config::Config;
use data::{validate_locations, Location};
use interfaces::{Interface, Message};
use objectives::default::RouteLength;
use optimizers::OptimizationResult;
use rand::rngs::StdRng;
use rand::SeedableRng;
use representation::random_population;
use std::fmt::{self, Display};
use tracing::info;

/// 错误类型
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// 参数不合法，例如采样数量超过种群规模、交叉点超过染色体长度
    InvalidArgument(String),
    /// 截取染色体片段时越界
    OutOfRange {
        offset: usize,
        length: usize,
        total: usize,
    },
    /// 读取或解析输入文件失败
    Input(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(message) => write!(f, "参数不合法：{message}"),
            Error::OutOfRange {
                offset,
                length,
                total,
            } => write!(
                f,
                "片段越界：从 {offset} 开始截取 {length} 个基因，但染色体长度只有 {total}"
            ),
            Error::Input(message) => write!(f, "输入有误：{message}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Input(value.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(value: serde_yaml::Error) -> Self {
        Self::Input(value.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Self::Input(value.to_string())
    }
}

/// 按照配置对一组地点求解，这是库的总入口
///
/// 随机数生成器在这里创建一次，之后显式地传给每一个需要随机性的步骤；配置中给出种子时，结果可以完全复现。
pub fn optimize(
    config: &Config,
    locations: &[Location],
    interface: &dyn Interface,
) -> Result<OptimizationResult, Error> {
    validate_locations(locations)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let population_size = config.population_size(&mut rng);
    let population = random_population(population_size, locations.len(), &mut rng);
    info!(
        "初始种群规模 {}，共 {} 个地点",
        population_size,
        locations.len()
    );
    interface.send(Message::Started {
        population: population_size,
        locations: locations.len(),
    });
    let objective = RouteLength::new(locations, config.objective.span);
    config.genetic.optimize(population, &objective, &mut rng, interface)
}
