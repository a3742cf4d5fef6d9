// Pattern 3: Builder - cards and pizzas assembled step by step.

use std::error::Error;

use design_patterns::builder::{self, request_card, CardKind, CustomPizza};
use design_patterns::logging;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init("warn");

    println!("Pattern 3: Builder");
    println!("==================\n");

    println!("=== Builders with Directors ===");
    builder::demo();
    println!();

    println!("=== Card Requested by Name ===");
    let kind: CardKind = std::env::args().nth(1).as_deref().unwrap_or("credit").parse()?;
    println!("{}", request_card(kind));
    println!();

    println!("=== Fluent Builder ===");
    let pizza = CustomPizza::new()
        .dough("thin")
        .sauce("tomato")
        .topping("margherita")
        .build()?;
    println!("{}", pizza);

    Ok(())
}
