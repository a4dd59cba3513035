//! Sample value types exercised by the tests and benchmarks.

use sided::{never_default, Defaultness, Strategy};

/// A sensor reading that knows whether it was ever taken: the opt-in
/// delegate case.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Reading {
    pub volts: f64,
    pub taken: bool,
}

impl Reading {
    pub fn taken(volts: f64) -> Self {
        Reading { volts, taken: true }
    }
}

impl Defaultness for Reading {
    const STRATEGY: Strategy = Strategy::Delegate;

    fn is_default_value(&self) -> bool {
        !self.taken
    }
}

/// A plain value type with no defaultness opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Count(pub u32);

never_default!(Count);
