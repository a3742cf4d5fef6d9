use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::PatternError;

/// A finished payment card. Read-only once handed out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Card {
    card_type: String,
    annual_fee: u32,
    monthly_limit: u32,
}

impl Card {
    pub fn card_type(&self) -> &str {
        &self.card_type
    }

    pub fn annual_fee(&self) -> u32 {
        self.annual_fee
    }

    pub fn monthly_limit(&self) -> u32 {
        self.monthly_limit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} (annual fee: {}, monthly limit: {})",
            self.card_type, self.annual_fee, self.monthly_limit
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Credit,
    Debit,
}

impl FromStr for CardKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            _ => Err(PatternError::UnknownCardKind(s.to_string())),
        }
    }
}

// Each step writes one field of the card being built.
pub trait CardBuilder {
    fn set_card_type(&mut self);
    fn set_annual_fee(&mut self);
    fn set_monthly_limit(&mut self);
    fn card(&self) -> Card;
}

#[derive(Default)]
pub struct CreditCardBuilder {
    card: Card,
}

impl CreditCardBuilder {
    pub const CARD_TYPE: &'static str = "Credit Card";
    pub const ANNUAL_FEE: u32 = 30;
    pub const MONTHLY_LIMIT: u32 = 5000;
}

impl CardBuilder for CreditCardBuilder {
    fn set_card_type(&mut self) {
        self.card.card_type = Self::CARD_TYPE.to_string();
    }

    fn set_annual_fee(&mut self) {
        self.card.annual_fee = Self::ANNUAL_FEE;
    }

    fn set_monthly_limit(&mut self) {
        self.card.monthly_limit = Self::MONTHLY_LIMIT;
    }

    fn card(&self) -> Card {
        self.card.clone()
    }
}

#[derive(Default)]
pub struct DebitCardBuilder {
    card: Card,
}

impl DebitCardBuilder {
    pub const CARD_TYPE: &'static str = "Debit Card";
    pub const ANNUAL_FEE: u32 = 5;
    pub const MONTHLY_LIMIT: u32 = 1000;
}

impl CardBuilder for DebitCardBuilder {
    fn set_card_type(&mut self) {
        self.card.card_type = Self::CARD_TYPE.to_string();
    }

    fn set_annual_fee(&mut self) {
        self.card.annual_fee = Self::ANNUAL_FEE;
    }

    fn set_monthly_limit(&mut self) {
        self.card.monthly_limit = Self::MONTHLY_LIMIT;
    }

    fn card(&self) -> Card {
        self.card.clone()
    }
}

/// Director: runs the builder steps in their fixed order.
pub struct BankRepresentative;

impl BankRepresentative {
    pub fn issue(&self, builder: &mut dyn CardBuilder) -> Card {
        builder.set_card_type();
        builder.set_annual_fee();
        builder.set_monthly_limit();
        builder.card()
    }
}

pub fn request_card(kind: CardKind) -> Card {
    debug!(?kind, "issuing card");
    let mut builder: Box<dyn CardBuilder> = match kind {
        CardKind::Credit => Box::new(CreditCardBuilder::default()),
        CardKind::Debit => Box::new(DebitCardBuilder::default()),
    };
    BankRepresentative.issue(builder.as_mut())
}
