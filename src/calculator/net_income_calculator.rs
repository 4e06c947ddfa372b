// ============================================================================
// Net Income Calculator
// Configured calculator that reports every calculation to an event handler
// ============================================================================

use super::formula::{compute_net_income_decimal, compute_net_income_with};
use crate::domain::{IncomeConfig, IncomeStatement, Profitability};
use crate::interfaces::{CalculationEvent, EventHandler, NoOpEventHandler};
use crate::numeric::{NumericError, NumericResult};
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Stateless net income calculator with a fixed configuration
///
/// Holds no mutable state, so one instance can be shared across threads.
pub struct NetIncomeCalculator {
    /// Precision and non-finite policy
    config: IncomeConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl NetIncomeCalculator {
    /// Create a new calculator
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the configuration does not validate.
    pub fn new(config: IncomeConfig, event_handler: Arc<dyn EventHandler>) -> NumericResult<Self> {
        config.validate()?;

        tracing::debug!(
            decimals = config.decimals,
            non_finite = ?config.non_finite,
            "Created net income calculator"
        );

        Ok(Self {
            config,
            event_handler,
        })
    }

    /// Active configuration
    pub fn config(&self) -> IncomeConfig {
        self.config
    }

    /// Compute rounded net income for a revenues/expenses pair
    pub fn compute(&self, revenues: f64, expenses: f64) -> NumericResult<f64> {
        let (result, event) = self.evaluate(revenues, expenses);
        self.event_handler.on_event(event);
        result
    }

    /// Compute rounded net income for a statement
    pub fn compute_statement(&self, statement: &IncomeStatement) -> NumericResult<f64> {
        self.compute(statement.revenues, statement.expenses)
    }

    /// Compute rounded net income for several statements
    ///
    /// One result per statement, in order. Events are delivered to the
    /// handler as a single batch after all statements are evaluated.
    pub fn compute_statements(&self, statements: &[IncomeStatement]) -> Vec<NumericResult<f64>> {
        let (results, events): (Vec<_>, Vec<_>) = statements
            .iter()
            .map(|statement| self.evaluate(statement.revenues, statement.expenses))
            .unzip();

        tracing::debug!(count = results.len(), "Computed net income batch");
        self.event_handler.on_events(events);

        results
    }

    /// Compute net income exactly with `rust_decimal` at the configured precision
    pub fn compute_decimal(&self, revenues: Decimal, expenses: Decimal) -> NumericResult<Decimal> {
        tracing::trace!(%revenues, %expenses, "Computing decimal net income");

        let decimals = self.config.decimals;
        let result = u32::try_from(decimals)
            .map_err(|_| NumericError::InvalidArgument)
            .and_then(|places| compute_net_income_decimal(revenues, expenses, places));

        let event = match result {
            Ok(net_income) => CalculationEvent::DecimalComputed {
                revenues,
                expenses,
                decimals,
                net_income,
                timestamp: Utc::now(),
            },
            Err(reason) => {
                tracing::debug!(%reason, decimals, "Decimal net income calculation rejected");
                CalculationEvent::DecimalRejected {
                    revenues,
                    expenses,
                    decimals,
                    reason,
                    timestamp: Utc::now(),
                }
            },
        };
        self.event_handler.on_event(event);

        result
    }

    /// Classify a statement as profit, break-even or loss after rounding
    ///
    /// # Errors
    /// Any error from [`compute_statement`](Self::compute_statement), or
    /// `NonFiniteInput` when a propagated NaN cannot be classified.
    pub fn classify(&self, statement: &IncomeStatement) -> NumericResult<Profitability> {
        let net_income = self.compute_statement(statement)?;
        Profitability::from_net_income(net_income).ok_or(NumericError::NonFiniteInput)
    }

    fn evaluate(&self, revenues: f64, expenses: f64) -> (NumericResult<f64>, CalculationEvent) {
        tracing::trace!(revenues, expenses, "Computing net income");

        let decimals = self.config.decimals;
        let result = compute_net_income_with(revenues, expenses, self.config);

        let event = match result {
            Ok(net_income) => CalculationEvent::Computed {
                revenues,
                expenses,
                decimals,
                net_income,
                timestamp: Utc::now(),
            },
            Err(reason) => {
                tracing::debug!(%reason, decimals, "Net income calculation rejected");
                CalculationEvent::Rejected {
                    revenues,
                    expenses,
                    decimals,
                    reason,
                    timestamp: Utc::now(),
                }
            },
        };

        (result, event)
    }
}

impl Default for NetIncomeCalculator {
    fn default() -> Self {
        Self {
            config: IncomeConfig::default(),
            event_handler: Arc::new(NoOpEventHandler),
        }
    }
}
