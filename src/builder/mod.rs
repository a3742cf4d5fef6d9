//! Builder Pattern - stepwise assembly with an optional director.
//!
//! Two independent variants:
//! - [`card`]: payment cards built by a bank representative
//! - [`pizza`]: pizzas built by a waiter, plus a fluent consuming builder

pub mod card;
pub mod pizza;

pub use card::{
    request_card, BankRepresentative, Card, CardBuilder, CardKind, CreditCardBuilder,
    DebitCardBuilder,
};
pub use pizza::{CustomPizza, HawaiianPizzaBuilder, Pizza, PizzaBuilder, SpicyPizzaBuilder, Waiter};

/// Issues both card kinds and serves both pizzas, printing each product.
pub fn demo() -> Vec<String> {
    let mut lines = Vec::new();

    for kind in [CardKind::Credit, CardKind::Debit] {
        lines.push(request_card(kind).to_string());
    }

    let waiter = Waiter;
    lines.push(waiter.construct(&mut HawaiianPizzaBuilder::default()).to_string());
    lines.push(waiter.construct(&mut SpicyPizzaBuilder::default()).to_string());

    for line in &lines {
        println!("{}", line);
    }
    lines
}
