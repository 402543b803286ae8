use crate::data::Location;

/// 两个地点之间的欧氏距离
pub fn distance(a: &Location, b: &Location) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// 预先计算所有地点两两之间的距离
pub fn distance_matrix(locations: &[Location]) -> Vec<Vec<f64>> {
    locations
        .iter()
        .map(|from| locations.iter().map(|to| distance(from, to)).collect())
        .collect()
}
