#![allow(dead_code)]

use std::collections::VecDeque;

use social_pulse::RandomSource;

/// Replays queued draws in order. An exhausted queue yields the lower bound.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    ints: VecDeque<i64>,
    floats: VecDeque<f64>,
    indices: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ints(mut self, values: &[i64]) -> Self {
        self.ints.extend(values.iter().copied());
        self
    }

    pub fn floats(mut self, values: &[f64]) -> Self {
        self.floats.extend(values.iter().copied());
        self
    }

    pub fn indices(mut self, values: &[usize]) -> Self {
        self.indices.extend(values.iter().copied());
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn int_in(&mut self, low: i64, high: i64) -> i64 {
        let value = self.ints.pop_front().unwrap_or(low);
        assert!(
            value >= low && value <= high,
            "scripted int {} outside {}..={}",
            value,
            low,
            high
        );
        value
    }

    fn float_in(&mut self, low: f64, high: f64) -> f64 {
        let value = self.floats.pop_front().unwrap_or(low);
        assert!(
            value >= low && value <= high,
            "scripted float {} outside {}..={}",
            value,
            low,
            high
        );
        value
    }

    fn index(&mut self, len: usize) -> usize {
        let value = self.indices.pop_front().unwrap_or(0);
        assert!(value < len, "scripted index {} outside 0..{}", value, len);
        value
    }
}

pub fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-6
}

/// 123 chars: hashtag, emoji, question and CTA all present.
pub const OPTIMIZED_POST: &str = "Ready to level up your content game this week? \
    Share your favourite growth tip below and follow for more ideas 🚀 #marketing";
