// ============================================================================
// Event Handler Interface
// Defines the contract for observing net income calculations
// ============================================================================

use crate::numeric::NumericError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the net income calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationEvent {
    /// Floating-point net income computed
    Computed {
        revenues: f64,
        expenses: f64,
        decimals: i32,
        net_income: f64,
        timestamp: DateTime<Utc>,
    },

    /// Exact decimal net income computed
    DecimalComputed {
        revenues: Decimal,
        expenses: Decimal,
        decimals: i32,
        net_income: Decimal,
        timestamp: DateTime<Utc>,
    },

    /// Floating-point calculation rejected with reason
    Rejected {
        revenues: f64,
        expenses: f64,
        decimals: i32,
        reason: NumericError,
        timestamp: DateTime<Utc>,
    },

    /// Exact decimal calculation rejected with reason
    DecimalRejected {
        revenues: Decimal,
        expenses: Decimal,
        decimals: i32,
        reason: NumericError,
        timestamp: DateTime<Utc>,
    },
}

impl CalculationEvent {
    /// Time at which the event was produced
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            CalculationEvent::Computed { timestamp, .. }
            | CalculationEvent::DecimalComputed { timestamp, .. }
            | CalculationEvent::Rejected { timestamp, .. }
            | CalculationEvent::DecimalRejected { timestamp, .. } => *timestamp,
        }
    }

    /// Why the calculation failed, for either rejection variant
    pub fn rejection_reason(&self) -> Option<NumericError> {
        match self {
            CalculationEvent::Rejected { reason, .. }
            | CalculationEvent::DecimalRejected { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    /// Whether the event reports a failed calculation
    pub fn is_rejection(&self) -> bool {
        self.rejection_reason().is_some()
    }
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculation event
    fn on_event(&self, event: CalculationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        match event.rejection_reason() {
            Some(reason) => {
                tracing::warn!(%reason, "Net income calculation rejected: {:?}", event);
            },
            None => tracing::debug!("Net income calculation event: {:?}", event),
        }
    }
}
