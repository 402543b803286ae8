//! 地点数据的定义，以及内置的算例。

use crate::Error;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// 一个地点，读入后不再改变
///
/// 染色体中的基因是地点在列表中的位置，`index` 只是用户给出的编号，要求在整个列表中唯一。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub index: usize,
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub fn new(index: usize, name: &str, x: f64, y: f64) -> Self {
        Self {
            index,
            name: name.to_string(),
            x,
            y,
        }
    }
}

/// 检查地点编号没有重复
pub fn validate_locations(locations: &[Location]) -> Result<(), Error> {
    let mut seen = FxHashSet::default();
    for location in locations {
        if !seen.insert(location.index) {
            return Err(Error::InvalidArgument(format!(
                "地点编号 {} 重复出现",
                location.index
            )));
        }
    }
    Ok(())
}

/// 不提供地点表时使用的 11 个城市，其中 Qutan 的纵坐标远大于其他城市
pub fn default_locations() -> Vec<Location> {
    vec![
        Location::new(1, "Amenuka", 23.0, 104.0),
        Location::new(2, "Adamantium", 102.0, 54.0),
        Location::new(3, "Stoiker", 6.0, 14.0),
        Location::new(4, "Alexandria", 92.0, 91.0),
        Location::new(5, "Atlantis", 54.0, 7.0),
        Location::new(6, "Nerbia", 51.0, 26.0),
        Location::new(7, "Sostronia", 29.0, 88.0),
        Location::new(8, "Qutan", 63.0, 500.0),
        Location::new(9, "Perkoban", 203.0, 73.0),
        Location::new(10, "Xoner", 3.0, 100.0),
        Location::new(11, "Clastik", 37.0, 14.0),
    ]
}
