use glam::Vec3;
use std::collections::VecDeque;

use super::config::Smoothing;

/// Bounded FIFO of the most recent accepted candidate positions.
#[derive(Debug, Clone)]
pub struct RecentPositionHistory {
    positions: VecDeque<Vec3>,
    capacity: usize,
}

impl RecentPositionHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            positions: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a position, returning the oldest one if it was evicted.
    pub fn push(&mut self, position: Vec3) -> Option<Vec3> {
        let evicted = if self.positions.len() == self.capacity {
            self.positions.pop_front()
        } else {
            None
        };
        self.positions.push_back(position);
        evicted
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Shrinks or grows the window; shrinking drops the oldest entries.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.positions.len() > self.capacity {
            self.positions.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.positions.iter().copied()
    }

    pub fn mean(&self) -> Option<Vec3> {
        if self.positions.is_empty() {
            return None;
        }
        let sum: Vec3 = self.positions.iter().copied().sum();
        Some(sum / self.positions.len() as f32)
    }

    pub fn recency_weighted_mean(&self) -> Option<Vec3> {
        if self.positions.is_empty() {
            return None;
        }

        let mut sum = Vec3::ZERO;
        let mut total = 0.0;
        for (i, position) in self.positions.iter().enumerate() {
            let weight = (i + 1) as f32;
            sum += *position * weight;
            total += weight;
        }
        Some(sum / total)
    }

    pub fn smoothed(&self, smoothing: Smoothing) -> Option<Vec3> {
        match smoothing {
            Smoothing::Mean => self.mean(),
            Smoothing::RecencyWeighted => self.recency_weighted_mean(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_push_evicts_oldest_first() {
        let mut history = RecentPositionHistory::new(3);
        for i in 0..3 {
            assert!(history.push(Vec3::splat(i as f32)).is_none());
        }

        assert_eq!(history.push(Vec3::splat(3.0)), Some(Vec3::splat(0.0)));
        assert_eq!(history.push(Vec3::splat(4.0)), Some(Vec3::splat(1.0)));

        let xs: Vec<f32> = history.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_len_never_exceeds_capacity() {
        let mut history = RecentPositionHistory::new(5);
        for i in 0..100 {
            history.push(Vec3::new(i as f32, 0.0, 0.0));
            assert!(history.len() <= 5);
        }
        assert_eq!(history.len(), 5);
    }

    #[test]
    fn test_mean() {
        let mut history = RecentPositionHistory::new(4);
        assert!(history.mean().is_none());

        history.push(Vec3::ZERO);
        history.push(Vec3::new(2.0, 0.0, 0.0));
        let mean = history.mean().unwrap();
        assert_relative_eq!(mean.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(mean.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_recency_weighted_mean_favors_newest() {
        let mut history = RecentPositionHistory::new(4);
        history.push(Vec3::ZERO);
        history.push(Vec3::new(3.0, 0.0, 0.0));

        // weights 1 and 2
        let weighted = history.smoothed(Smoothing::RecencyWeighted).unwrap();
        assert_relative_eq!(weighted.x, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_set_capacity_truncates_oldest() {
        let mut history = RecentPositionHistory::new(4);
        for i in 0..4 {
            history.push(Vec3::splat(i as f32));
        }
        history.set_capacity(2);

        let xs: Vec<f32> = history.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0]);
    }
}
