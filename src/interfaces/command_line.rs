use crate::config::Config;
use crate::data::{default_locations, Location};
use crate::interfaces::{Interface, Message};
use crate::objectives::default::RouteLength;
use crate::objectives::Objective;
use crate::optimizers::OptimizationResult;
use crate::representation::{is_permutation, Gene};
use crate::Error;
use chrono::Local;
use clap::{Parser, Subcommand};
use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{create_dir_all, read_to_string, write};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

/// 命令行参数的定义
#[derive(Parser, Clone, Debug)]
#[command(name = "遗传算法路线规划")]
#[command(author, version, about, long_about)]
#[command(propagate_version = true)]
pub struct CommandLineArgs {
    #[command(subcommand)]
    pub command: Option<Command>,
    /// 配置文件，不提供时使用默认参数
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// 地点表，每行依次为编号、名称、横坐标、纵坐标，以制表符分隔；不提供时使用内置的 11 个城市
    #[arg(short, long, value_name = "FILE")]
    pub locations: Option<PathBuf>,
    /// 随机数种子，会覆盖配置文件中的 seed
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// 结果输出目录，不提供时只输出到屏幕
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
    /// 以 JSON 格式逐行输出消息
    #[arg(long)]
    pub json: bool,
    /// 输出调试日志
    #[arg(short, long)]
    pub verbose: bool,
}

/// 命令行中所有可用的子命令
#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// 用遗传算法求解一条尽可能短的路线（默认）
    Optimize,
    /// 计算一条给定路线的长度
    Evaluate {
        /// 地点在地点表中的位置，以逗号分隔，例如 0,3,1,2
        #[arg(short, long, value_delimiter = ',', required = true)]
        route: Vec<Gene>,
    },
}

/// 写入结果文件的内容
#[derive(Debug, Serialize)]
pub struct RouteReport {
    pub distance: f64,
    pub best_seen: f64,
    pub generations: usize,
    pub route: Vec<usize>,
    pub names: Vec<String>,
}

/// 通过命令行来使用 libroute 的入口，实现了界面特征
pub struct CommandLine {
    pub args: CommandLineArgs,
}

impl CommandLine {
    pub fn new(args: CommandLineArgs) -> Result<Self, Error> {
        if let Some(dir) = &args.output {
            create_dir_all(dir)?;
        }
        Ok(Self { args })
    }

    pub fn read<I, T>(path: &Path) -> Result<T, Error>
    where
        I: DeserializeOwned,
        T: FromIterator<I>,
    {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;
        let records = reader.deserialize::<I>().collect::<Result<T, csv::Error>>()?;
        Ok(records)
    }

    /// 读取配置和地点表
    pub fn prepare(&self) -> Result<(Config, Vec<Location>), Error> {
        let mut config: Config = match &self.args.config {
            Some(path) => serde_yaml::from_str(&read_to_string(path)?)?,
            None => Config::default(),
        };
        if let Some(seed) = self.args.seed {
            config.seed = Some(seed);
        }
        let locations = match &self.args.locations {
            Some(path) => Self::read::<Location, _>(path)?,
            None => default_locations(),
        };
        Ok((config, locations))
    }

    fn describe(route: &[Gene], locations: &[Location]) -> Vec<String> {
        route
            .iter()
            .map(|&gene| locations[gene].name.clone())
            .collect()
    }

    pub fn report_result(
        &self,
        result: &OptimizationResult,
        locations: &[Location],
    ) -> Result<(), Error> {
        let Some(solution) = &result.best else {
            println!("没有找到可行的路线");
            return Ok(());
        };
        let names = Self::describe(&solution.route, locations);
        println!("最优距离：{}", solution.fitness);
        println!("路线：{}", names.join(" → "));
        if let Some(dir) = &self.args.output {
            let report = RouteReport {
                distance: solution.fitness,
                best_seen: result.best_seen,
                generations: result.generations,
                route: solution
                    .route
                    .iter()
                    .map(|&gene| locations[gene].index)
                    .collect(),
                names,
            };
            let path = dir.join("result.yaml");
            write(&path, serde_yaml::to_string(&report)?)?;
            println!("结果保存在 {} 中", path.display());
        }
        Ok(())
    }

    /// 计算一条给定路线的长度，路线必须恰好经过每个地点一次
    pub fn evaluate(route: &[Gene], config: &Config, locations: &[Location]) -> Result<f64, Error> {
        if !is_permutation(route, locations.len()) {
            return Err(Error::InvalidArgument(format!(
                "路线必须恰好包含 0..{} 中的每个位置一次",
                locations.len()
            )));
        }
        let objective = RouteLength::new(locations, config.objective.span);
        Ok(objective.evaluate(route))
    }

    pub fn report_evaluation(&self, route: &[Gene], fitness: f64, locations: &[Location]) {
        println!("路线：{}", Self::describe(route, locations).join(" → "));
        println!("路线长度：{fitness}");
    }
}

impl Interface for CommandLine {
    fn send(&self, message: Message) {
        let mut writer = std::io::stdout();
        let result = if self.args.json {
            match serde_json::to_string(&message) {
                Ok(line) => writeln!(&mut writer, "{line}"),
                Err(error) => {
                    warn!("无法序列化消息：{}", error);
                    return;
                }
            }
        } else {
            match message {
                Message::Started {
                    population,
                    locations,
                } => writeln!(
                    &mut writer,
                    "初始种群共 {population} 个个体，每条路线经过 {locations} 个地点"
                ),
                Message::Progress {
                    generation,
                    fitness: Some(fitness),
                    best_seen,
                } => writeln!(
                    &mut writer,
                    "第 {generation} 代：本代最好个体的路线长度为 {fitness:.2}，历史最好为 {best_seen:.2}"
                ),
                Message::Progress {
                    generation,
                    fitness: None,
                    ..
                } => writeln!(&mut writer, "第 {generation} 代：样本为空，没有选出个体"),
                Message::BetterSolution {
                    generation,
                    fitness,
                } => writeln!(
                    &mut writer,
                    "{} 第 {generation} 代搜索到了一条更短的路线，长度为 {fitness:.2}",
                    Local::now().format("%H:%M:%S")
                ),
                Message::Finished { index, fitness } => writeln!(
                    &mut writer,
                    "求解完成，最终种群中最好的是第 {index} 个个体，路线长度为 {fitness:.2}"
                ),
                Message::NoSolution => writeln!(&mut writer, "种群为空，没有可用的解"),
                Message::Elapsed { time } => writeln!(&mut writer, "求解用时：{time} μs"),
            }
        };
        if let Err(error) = result {
            warn!("无法输出消息：{}", error);
        }
    }
}
