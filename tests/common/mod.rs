#![allow(dead_code)]

use route::data::Location;
use route::interfaces::{Interface, Message};
use std::cell::RefCell;

/// 记录所有消息，便于检查求解过程
#[derive(Default)]
pub struct Recorder {
    pub messages: RefCell<Vec<Message>>,
}

impl Interface for Recorder {
    fn send(&self, message: Message) {
        self.messages.borrow_mut().push(message);
    }
}

impl Recorder {
    pub fn progress_count(&self) -> usize {
        self.messages
            .borrow()
            .iter()
            .filter(|message| matches!(message, Message::Progress { .. }))
            .count()
    }
}

/// 四个地点组成 4 × 3 的矩形
pub fn rectangle() -> Vec<Location> {
    vec![
        Location::new(0, "A", 0.0, 0.0),
        Location::new(1, "B", 0.0, 3.0),
        Location::new(2, "C", 4.0, 3.0),
        Location::new(3, "D", 4.0, 0.0),
    ]
}

/// 排在一条直线上的地点，横坐标依次为给定的值
pub fn line(xs: &[f64]) -> Vec<Location> {
    xs.iter()
        .enumerate()
        .map(|(index, &x)| Location::new(index, &format!("P{index}"), x, 0.0))
        .collect()
}
