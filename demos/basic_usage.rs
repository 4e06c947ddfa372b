// ============================================================================
// Basic Usage Example
// ============================================================================

use net_income::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Net Income Example ===\n");

    // Free functions
    println!("net_income(1000.0, 400.0)        = {}", net_income(1000.0, 400.0).unwrap());
    println!(
        "compute_net_income(10.0, 3.0, 0) = {}",
        compute_net_income(10.0, 3.0, 0).unwrap()
    );

    // Configured calculator
    let calculator =
        NetIncomeCalculator::new(IncomeConfig::cents(), Arc::new(LoggingEventHandler)).unwrap();

    println!("\n=== Quarterly Statements ===");
    let quarters = [
        ("Q1", IncomeStatement::new(12_500.0, 14_200.75)),
        ("Q2", IncomeStatement::new(18_900.0, 18_900.0)),
        ("Q3", IncomeStatement::new(24_310.4, 19_875.125)),
        ("Q4", IncomeStatement::new(1000.0, 400.555)),
    ];

    for (label, statement) in &quarters {
        let net = calculator.compute_statement(statement).unwrap();
        let profitability = calculator.classify(statement).unwrap();
        println!("  {}: {:>10.2}  {:?}", label, net, profitability);
    }

    // Binary floating point vs exact decimal
    println!("\n=== f64 vs Decimal ===");
    let float = calculator.compute(1000.0, 400.555).unwrap();
    let exact = calculator
        .compute_decimal(Decimal::new(1000, 0), Decimal::new(400_555, 3))
        .unwrap();
    println!("  f64:     {}", float);
    println!("  Decimal: {}", exact);

    // Halfway values round toward positive infinity
    println!("\n=== Halfway Rounding ===");
    for (revenues, expenses) in [(0.5, 0.0), (0.0, 0.5), (2.5, 0.0), (0.0, 2.5)] {
        println!(
            "  {:>4} - {:>4} -> {}",
            revenues,
            expenses,
            compute_net_income(revenues, expenses, 0).unwrap()
        );
    }

    // Errors
    println!("\n=== Errors ===");
    match compute_net_income(10.0, 3.0, -1) {
        Ok(value) => println!("  unexpected: {}", value),
        Err(err) => println!("  decimals = -1: {}", err),
    }
    match calculator.compute(f64::NAN, 3.0) {
        Ok(value) => println!("  unexpected: {}", value),
        Err(err) => println!("  revenues = NaN: {}", err),
    }
}
