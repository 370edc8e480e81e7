//! Stateless integer helpers used by the welcome program.
//!
//! Arithmetic is 32-bit two's complement: overflow wraps instead of
//! panicking, so results are identical in debug and release builds.

/// Add two integers.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Sum a slice of integers. An empty slice sums to 0.
pub fn sum(values: &[i32]) -> i32 {
    values.iter().fold(0, |acc, &v| acc.wrapping_add(v))
}

/// Zero-sized handle over [`add`] and [`sum`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: i32, b: i32) -> i32 {
        add(a, b)
    }

    pub fn sum(&self, values: &[i32]) -> i32 {
        sum(values)
    }
}
