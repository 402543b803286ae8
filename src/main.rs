//! route: 遗传算法路线规划［命令行版］
//!
//! `route` 是一个使用 Rust 编写的命令行程序。用户提供地点表以及配置文件，本程序基于遗传算法给出一条尽可能短的、恰好经过每个地点一次的路线。
//!
//! 不带任何参数运行时，使用内置的 11 个城市和默认参数。

use clap::Parser;
use route::interfaces::command_line::{Command, CommandLine, CommandLineArgs};
use route::{optimize, Error};
use tracing::Level;

fn main() -> Result<(), Error> {
    let args = CommandLineArgs::parse();
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let command = args.command.clone().unwrap_or(Command::Optimize);
    let command_line = CommandLine::new(args)?;
    let (config, locations) = command_line.prepare()?;
    match command {
        Command::Optimize => {
            let result = optimize(&config, &locations, &command_line)?;
            command_line.report_result(&result, &locations)?;
        }
        Command::Evaluate { route } => {
            let fitness = CommandLine::evaluate(&route, &config, &locations)?;
            command_line.report_evaluation(&route, fitness, &locations);
        }
    }
    Ok(())
}
