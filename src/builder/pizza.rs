use std::fmt;

use crate::error::PatternError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pizza {
    dough: String,
    sauce: String,
    topping: String,
}

impl Pizza {
    pub fn dough(&self) -> &str {
        &self.dough
    }

    pub fn sauce(&self) -> &str {
        &self.sauce
    }

    pub fn topping(&self) -> &str {
        &self.topping
    }
}

impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Pizza with {} dough, {} sauce and {} topping",
            self.dough, self.sauce, self.topping
        )
    }
}

// ============================================================================
// Classic builder + director
// ============================================================================

pub trait PizzaBuilder {
    fn build_dough(&mut self);
    fn build_sauce(&mut self);
    fn build_topping(&mut self);
    fn pizza(&self) -> Pizza;
}

#[derive(Default)]
pub struct HawaiianPizzaBuilder {
    pizza: Pizza,
}

impl PizzaBuilder for HawaiianPizzaBuilder {
    fn build_dough(&mut self) {
        self.pizza.dough = "cross".to_string();
    }

    fn build_sauce(&mut self) {
        self.pizza.sauce = "mild".to_string();
    }

    fn build_topping(&mut self) {
        self.pizza.topping = "ham+pineapple".to_string();
    }

    fn pizza(&self) -> Pizza {
        self.pizza.clone()
    }
}

#[derive(Default)]
pub struct SpicyPizzaBuilder {
    pizza: Pizza,
}

impl PizzaBuilder for SpicyPizzaBuilder {
    fn build_dough(&mut self) {
        self.pizza.dough = "pan baked".to_string();
    }

    fn build_sauce(&mut self) {
        self.pizza.sauce = "hot".to_string();
    }

    fn build_topping(&mut self) {
        self.pizza.topping = "pepperoni+salami".to_string();
    }

    fn pizza(&self) -> Pizza {
        self.pizza.clone()
    }
}

/// Director for pizzas.
pub struct Waiter;

impl Waiter {
    pub fn construct(&self, builder: &mut dyn PizzaBuilder) -> Pizza {
        builder.build_dough();
        builder.build_sauce();
        builder.build_topping();
        builder.pizza()
    }
}

// ============================================================================
// Fluent consuming builder
// ============================================================================

#[derive(Debug, Default)]
#[must_use = "a CustomPizza does nothing until build() is called"]
pub struct CustomPizza {
    dough: Option<String>,
    sauce: Option<String>,
    topping: Option<String>,
}

impl CustomPizza {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dough(mut self, dough: impl Into<String>) -> Self {
        self.dough = Some(dough.into());
        self
    }

    pub fn sauce(mut self, sauce: impl Into<String>) -> Self {
        self.sauce = Some(sauce.into());
        self
    }

    pub fn topping(mut self, topping: impl Into<String>) -> Self {
        self.topping = Some(topping.into());
        self
    }

    pub fn build(self) -> Result<Pizza, PatternError> {
        Ok(Pizza {
            dough: self.dough.ok_or(PatternError::MissingPart("dough"))?,
            sauce: self.sauce.ok_or(PatternError::MissingPart("sauce"))?,
            topping: self.topping.ok_or(PatternError::MissingPart("topping"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waiter_builds_hawaiian() {
        let pizza = Waiter.construct(&mut HawaiianPizzaBuilder::default());
        assert_eq!(pizza.dough(), "cross");
        assert_eq!(pizza.sauce(), "mild");
        assert_eq!(pizza.topping(), "ham+pineapple");
    }

    #[test]
    fn test_waiter_builds_spicy() {
        let pizza = Waiter.construct(&mut SpicyPizzaBuilder::default());
        assert_eq!(
            pizza.to_string(),
            "Pizza with pan baked dough, hot sauce and pepperoni+salami topping"
        );
    }

    #[test]
    fn test_partial_steps_leave_fields_empty() {
        let mut builder = SpicyPizzaBuilder::default();
        builder.build_dough();
        let pizza = builder.pizza();
        assert_eq!(pizza.dough(), "pan baked");
        assert!(pizza.sauce().is_empty());
    }

    #[test]
    fn test_custom_pizza() {
        let pizza = CustomPizza::new()
            .dough("thin")
            .sauce("pesto")
            .topping("basil")
            .build()
            .unwrap();
        assert_eq!(pizza.topping(), "basil");
    }

    #[test]
    fn test_custom_pizza_missing_sauce() {
        let result = CustomPizza::new().dough("thin").topping("basil").build();
        assert_eq!(result, Err(PatternError::MissingPart("sauce")));
    }
}
