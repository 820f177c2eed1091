//! Scripted end-to-end console sessions.

use std::io::Cursor;

use stockroom_cli::{Console, SessionOutcome};
use stockroom_core::ProductId;
use stockroom_inventory::{InventoryConfig, InventorySystem};

struct Run {
    outcome: SessionOutcome,
    output: String,
    system: InventorySystem,
}

fn run_script(lines: &[&str]) -> Run {
    let mut system = InventorySystem::with_default_users(InventoryConfig::default());
    let mut script = lines.join("\n");
    script.push('\n');

    let mut console = Console::new(Cursor::new(script.into_bytes()), Vec::new());
    let outcome = console.run(&mut system).expect("in-memory I/O cannot fail");
    let output = String::from_utf8(console.into_output()).expect("console writes UTF-8");

    Run {
        outcome,
        output,
        system,
    }
}

fn stock_of(system: &InventorySystem, id: &str) -> Option<i64> {
    system
        .product(&ProductId::new(id))
        .map(|p| p.stock_quantity())
}

#[test]
fn bad_credentials_end_the_session() {
    let run = run_script(&["admin", "wrong"]);

    assert_eq!(run.outcome, SessionOutcome::LoginFailed);
    assert!(run.output.contains("Invalid username or password."));
    assert!(!run.output.contains("1. View Products"));
}

#[test]
fn admin_restock_scenario() {
    let run = run_script(&[
        "admin", "admin123",
        "2", "P1", "Widget", "Tools", "9.99", "3",
        "1",
        "6",
        "5", "P1", "10",
        "6",
        "7",
    ]);

    assert_eq!(run.outcome, SessionOutcome::LoggedOut);
    let out = &run.output;
    assert!(out.contains("Welcome, admin!"));
    assert!(out.contains("2. Add Product"));
    assert!(out.contains("Product added successfully."));
    assert!(out.contains("ID: P1, Name: Widget, Category: Tools, Price: 9.99, Stock: 3"));
    assert!(out.contains("Low stock warning: Widget (ID: P1) has only 3 items left."));
    assert!(out.contains("Product restocked successfully."));
    assert!(out.contains("No products with low stock."));
    assert!(out.contains("Logged out successfully."));
    assert_eq!(stock_of(&run.system, "P1"), Some(13));
}

#[test]
fn plain_user_sees_read_only_menu() {
    let run = run_script(&["user", "user123", "2", "5", "9", "1", "6", "7"]);

    let out = &run.output;
    assert!(out.contains("1. View Products"));
    assert!(out.contains("6. Check Low Stock"));
    assert!(out.contains("7. Logout"));
    assert!(!out.contains("2. Add Product"));
    assert!(!out.contains("Enter Product ID"));
    assert_eq!(out.matches("Invalid choice or permission denied.").count(), 3);
    assert!(out.contains("No products available."));
    assert!(out.contains("No products with low stock."));
    assert_eq!(run.outcome, SessionOutcome::LoggedOut);
}

#[test]
fn bad_price_aborts_add_before_stock_prompt() {
    let run = run_script(&[
        "admin", "admin123",
        "2", "P1", "Widget", "Tools", "cheap",
        "7",
    ]);

    let out = &run.output;
    assert!(out.contains(
        "Invalid input. Price should be a number, and stock quantity should be an integer."
    ));
    assert!(!out.contains("Enter Stock Quantity"));
    assert_eq!(run.system.product_count(), 0);
    assert_eq!(run.outcome, SessionOutcome::LoggedOut);
}

#[test]
fn negative_price_is_rejected() {
    let run = run_script(&["admin", "admin123", "2", "P1", "Widget", "Tools", "-2", "1", "7"]);

    assert!(run.output.contains("Invalid input: validation failed: price cannot be negative."));
    assert_eq!(run.system.product_count(), 0);
}

#[test]
fn blank_and_zero_update_answers_change_nothing() {
    let run = run_script(&[
        "admin", "admin123",
        "2", "P1", "Widget", "Tools", "9.99", "8",
        "3", "P1", "", "", "", "0",
        "3", "P1", "Gadget", "", "x", "",
        "7",
    ]);

    let out = &run.output;
    assert!(out.contains("Product updated successfully."));
    assert!(out.contains(
        "Invalid input. Price should be a number, and stock quantity should be an integer."
    ));
    let product = run.system.product(&ProductId::new("P1")).unwrap();
    assert_eq!(product.name(), "Widget");
    assert_eq!(product.stock_quantity(), 8);
}

#[test]
fn duplicate_and_missing_ids_are_reported() {
    let run = run_script(&[
        "admin", "admin123",
        "2", "P1", "Widget", "Tools", "9.99", "3",
        "2", "P1", "Other", "Misc", "1", "1",
        "4", "P1",
        "5", "P1", "4",
        "3", "P1", "New", "", "", "",
        "4", "P1",
        "7",
    ]);

    let out = &run.output;
    assert!(out.contains("Product ID already exists."));
    assert!(out.contains("Product deleted successfully."));
    assert_eq!(out.matches("Product not found.").count(), 3);
    assert_eq!(run.system.product_count(), 0);
}

#[test]
fn bad_restock_quantity_keeps_stock() {
    let run = run_script(&[
        "admin", "admin123",
        "2", "P1", "Widget", "Tools", "9.99", "10",
        "5", "P1", "lots",
        "5", "P1", "-100",
        "7",
    ]);

    assert!(run.output.contains("Invalid input. Quantity should be an integer."));
    assert_eq!(stock_of(&run.system, "P1"), Some(-90));
}

#[test]
fn end_of_input_closes_session() {
    let run = run_script(&["user", "user123", "1"]);

    assert_eq!(run.outcome, SessionOutcome::InputClosed);
    assert!(run.output.contains("No products available."));
    assert!(!run.output.contains("Logged out successfully."));
}

#[test]
fn empty_product_id_is_a_valid_key() {
    let run = run_script(&[
        "admin", "admin123",
        "2", "", "Widget", "Tools", "9.99", "3",
        "1",
        "2", "", "Other", "Misc", "1", "1",
        "7",
    ]);

    let out = &run.output;
    assert!(out.contains("Product added successfully."));
    assert!(out.contains("ID: , Name: Widget, Category: Tools, Price: 9.99, Stock: 3"));
    assert!(out.contains("Product ID already exists."));
    assert_eq!(run.system.product_count(), 1);
    assert_eq!(stock_of(&run.system, ""), Some(3));
}
