use serde::Serialize;
use serde_with::skip_serializing_none;

pub mod command_line;

/// 向用户反馈的消息类型
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    Started {
        population: usize,
        locations: usize,
    },
    Progress {
        generation: usize,
        fitness: Option<f64>,
        best_seen: f64,
    },
    BetterSolution {
        generation: usize,
        fitness: f64,
    },
    Finished {
        index: usize,
        fitness: f64,
    },
    NoSolution,
    Elapsed {
        time: u64,
    },
}

/// 定义了向用户报告消息的接口，用于统一各种输出方式
///
/// 命令行只需要实现 send 方法，就可向用户报告求解过程中的各种数据
pub trait Interface {
    fn send(&self, message: Message);
}
