/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::ops;

use serde_json::Number;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Double(f64),
    Signed(i64),
    Unsigned(u64),
}

impl MetricValue {
    /// Convert to a JSON number. None for doubles that JSON can not carry.
    pub(crate) fn as_json_number(&self) -> Option<Number> {
        match self {
            MetricValue::Double(f) => Number::from_f64(*f),
            MetricValue::Signed(i) => Some(Number::from(*i)),
            MetricValue::Unsigned(u) => Some(Number::from(*u)),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        MetricValue::Double(v)
    }
}

impl From<f32> for MetricValue {
    fn from(v: f32) -> Self {
        MetricValue::Double(v as f64)
    }
}

impl From<i64> for MetricValue {
    fn from(v: i64) -> Self {
        MetricValue::Signed(v)
    }
}

impl From<i32> for MetricValue {
    fn from(v: i32) -> Self {
        MetricValue::Signed(v as i64)
    }
}

impl From<u64> for MetricValue {
    fn from(v: u64) -> Self {
        MetricValue::Unsigned(v)
    }
}

impl From<u32> for MetricValue {
    fn from(v: u32) -> Self {
        MetricValue::Unsigned(v as u64)
    }
}

impl From<usize> for MetricValue {
    fn from(v: usize) -> Self {
        MetricValue::Unsigned(v as u64)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Unsigned(u) => itoa::Buffer::new().format(*u).fmt(f),
            MetricValue::Signed(i) => itoa::Buffer::new().format(*i).fmt(f),
            MetricValue::Double(v) => ryu::Buffer::new().format(*v).fmt(f),
        }
    }
}

impl ops::Neg for MetricValue {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            MetricValue::Double(f) => MetricValue::Double(-f),
            MetricValue::Signed(i) => MetricValue::Signed(i.wrapping_neg()),
            MetricValue::Unsigned(u) => MetricValue::Signed(0i64.wrapping_sub_unsigned(u)),
        }
    }
}
