//! Prompt/response loop.

use std::io::{self, BufRead, Write};

use stockroom_auth::{Session, User};
use stockroom_core::ProductId;
use stockroom_inventory::{InventoryError, InventorySystem, ProductListing};
use stockroom_products::{NewProduct, ProductPatch};

use crate::input::{self, InputError};
use crate::menu::MenuChoice;

const PERMISSION_DENIED: &str = "Invalid choice or permission denied.";

/// How a console session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    LoginFailed,
    LoggedOut,
    /// Input reached end-of-file while logged in.
    InputClosed,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Log in, then serve menu choices until logout or end of input.
    pub fn run(&mut self, system: &mut InventorySystem) -> io::Result<SessionOutcome> {
        let username = self.prompt("Enter username: ")?.unwrap_or_default();
        let password = self.prompt("Enter password: ")?.unwrap_or_default();

        let user = match system.login(&username, &password) {
            Ok(user) => user,
            Err(_) => {
                self.say("Invalid username or password.")?;
                return Ok(SessionOutcome::LoginFailed);
            }
        };
        self.say(&format!("Welcome, {}!", user.username()))?;

        let session = Session::start(user);
        loop {
            self.print_menu(session.user())?;
            let Some(raw) = self.prompt("Choose an option: ")? else {
                session.end();
                return Ok(SessionOutcome::InputClosed);
            };

            match MenuChoice::parse(&raw) {
                Some(MenuChoice::Logout) => {
                    self.say("Logged out successfully.")?;
                    session.end();
                    return Ok(SessionOutcome::LoggedOut);
                }
                Some(choice) if choice.visible_to(session.user()) => {
                    self.dispatch(system, session.user(), choice)?;
                }
                _ => self.say(PERMISSION_DENIED)?,
            }
        }
    }

    fn dispatch(
        &mut self,
        system: &mut InventorySystem,
        user: &User,
        choice: MenuChoice,
    ) -> io::Result<()> {
        match choice {
            MenuChoice::ViewProducts => self.view_products(system, user),
            MenuChoice::AddProduct => self.add_product(system, user),
            MenuChoice::UpdateProduct => self.update_product(system, user),
            MenuChoice::DeleteProduct => self.delete_product(system, user),
            MenuChoice::RestockProduct => self.restock_product(system, user),
            MenuChoice::CheckLowStock => self.low_stock(system, user),
            MenuChoice::Logout => Ok(()),
        }
    }

    fn print_menu(&mut self, user: &User) -> io::Result<()> {
        writeln!(self.output)?;
        for choice in MenuChoice::ALL.iter().filter(|c| c.visible_to(user)) {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Menu actions
    // ─────────────────────────────────────────────────────────────────────

    fn view_products(&mut self, system: &InventorySystem, user: &User) -> io::Result<()> {
        match system.view_products(user, false) {
            Ok(ProductListing::Empty) => self.say("No products available."),
            Ok(ProductListing::Products(products)) => {
                for product in products {
                    writeln!(self.output, "{product}")?;
                }
                Ok(())
            }
            Err(err) => self.report(&err),
        }
    }

    fn add_product(&mut self, system: &mut InventorySystem, user: &User) -> io::Result<()> {
        let Some(product_id) = self.prompt("Enter Product ID: ")? else { return Ok(()) };
        let Some(name) = self.prompt("Enter Product Name: ")? else { return Ok(()) };
        let Some(category) = self.prompt("Enter Product Category: ")? else { return Ok(()) };

        let Some(raw_price) = self.prompt("Enter Product Price: ")? else { return Ok(()) };
        let price = match input::parse_price(&raw_price) {
            Ok(price) => price,
            Err(err) => return self.invalid(err),
        };
        let Some(raw_stock) = self.prompt("Enter Stock Quantity: ")? else { return Ok(()) };
        let stock_quantity = match input::parse_stock(&raw_stock) {
            Ok(stock) => stock,
            Err(err) => return self.invalid(err),
        };

        let new = NewProduct::new(product_id, name, category, price, stock_quantity);
        match system.add_product(user, new) {
            Ok(()) => self.say("Product added successfully."),
            Err(err) => self.report(&err),
        }
    }

    fn update_product(&mut self, system: &mut InventorySystem, user: &User) -> io::Result<()> {
        let Some(product_id) = self.prompt("Enter Product ID: ")? else { return Ok(()) };
        let Some(name) = self.prompt("Enter New Name (leave blank to skip): ")? else {
            return Ok(());
        };
        let Some(category) = self.prompt("Enter New Category (leave blank to skip): ")? else {
            return Ok(());
        };
        let Some(raw_price) = self.prompt("Enter New Price (leave blank to skip): ")? else {
            return Ok(());
        };
        let Some(raw_stock) = self.prompt("Enter New Stock Quantity (leave blank to skip): ")?
        else {
            return Ok(());
        };

        let price = match input::parse_optional_price(&raw_price) {
            Ok(price) => price,
            Err(err) => return self.invalid(err),
        };
        let stock_quantity = match input::parse_optional_stock(&raw_stock) {
            Ok(stock) => stock,
            Err(err) => return self.invalid(err),
        };

        let patch = ProductPatch {
            name: input::optional_text(name),
            category: input::optional_text(category),
            price,
            stock_quantity,
        };
        match system.update_product(user, &ProductId::new(product_id), patch) {
            Ok(_) => self.say("Product updated successfully."),
            Err(err) => self.report(&err),
        }
    }

    fn delete_product(&mut self, system: &mut InventorySystem, user: &User) -> io::Result<()> {
        let Some(product_id) = self.prompt("Enter Product ID to delete: ")? else {
            return Ok(());
        };
        match system.delete_product(user, &ProductId::new(product_id)) {
            Ok(_) => self.say("Product deleted successfully."),
            Err(err) => self.report(&err),
        }
    }

    fn restock_product(&mut self, system: &mut InventorySystem, user: &User) -> io::Result<()> {
        let Some(product_id) = self.prompt("Enter Product ID to restock: ")? else {
            return Ok(());
        };
        let Some(raw_quantity) = self.prompt("Enter Quantity to add: ")? else {
            return Ok(());
        };
        let quantity = match input::parse_quantity(&raw_quantity) {
            Ok(quantity) => quantity,
            Err(err) => return self.invalid(err),
        };

        match system.restock_product(user, &ProductId::new(product_id), quantity) {
            Ok(_) => self.say("Product restocked successfully."),
            Err(err) => self.report(&err),
        }
    }

    fn low_stock(&mut self, system: &InventorySystem, user: &User) -> io::Result<()> {
        match system.low_stock_warning(user) {
            Ok(warnings) if warnings.is_empty() => self.say("No products with low stock."),
            Ok(warnings) => {
                for warning in warnings {
                    writeln!(self.output, "{warning}")?;
                }
                Ok(())
            }
            Err(err) => self.report(&err),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // I/O helpers
    // ─────────────────────────────────────────────────────────────────────

    /// Print `message` without a newline and read one line.
    ///
    /// Returns `None` at end of input; the line terminator is stripped.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    fn invalid(&mut self, err: InputError) -> io::Result<()> {
        tracing::debug!(error = %err, "rejected console input");
        self.say(&err.to_string())
    }

    fn report(&mut self, err: &InventoryError) -> io::Result<()> {
        let message = match err {
            InventoryError::AuthenticationFailed => "Invalid username or password.".to_string(),
            InventoryError::NotFound(_) => "Product not found.".to_string(),
            InventoryError::AlreadyExists(_) => "Product ID already exists.".to_string(),
            InventoryError::Forbidden(_) => PERMISSION_DENIED.to_string(),
            InventoryError::Domain(domain) => format!("Invalid input: {domain}."),
        };
        self.say(&message)
    }
}
