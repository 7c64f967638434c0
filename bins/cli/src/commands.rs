//! Subcommand implementations.
//!
//! Each command returns the lines to print so it can be tested without a
//! terminal.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use pecunia_core::currency::{CurrencyConfigurationsLoader, CurrencyRegistry};
use pecunia_core::{Calculator, DecimalCalculator, Formatter, Money, MoneyFactory};

type Shared<L> = Arc<CurrencyRegistry<L>>;

/// Everything a command needs, built once from configuration.
pub struct Toolkit<L> {
    pub factory: MoneyFactory<Shared<L>>,
    pub calculator: DecimalCalculator<Shared<L>>,
    pub formatter: Formatter<Shared<L>>,
    pub registry: Shared<L>,
    pub currency: Option<String>,
    pub locale: Option<String>,
}

impl<L: CurrencyConfigurationsLoader> Toolkit<L> {
    fn money(&self, amount: &str) -> Result<Money> {
        let money = match &self.currency {
            Some(code) => self.factory.create(amount, code),
            None => self.factory.create_default(amount),
        };
        money.with_context(|| format!("Invalid amount \"{amount}\""))
    }

    fn operands(&self, amounts: &[String]) -> Result<(Money, Vec<Money>)> {
        let mut values = amounts
            .iter()
            .map(|a| self.money(a))
            .collect::<Result<Vec<_>>>()?;
        if values.is_empty() {
            anyhow::bail!("At least one amount is required");
        }
        let first = values.remove(0);
        Ok((first, values))
    }

    fn render(&self, money: &Money) -> Result<String> {
        Ok(self.formatter.format_price(money, self.locale.as_deref())?)
    }

    pub fn add(&self, amounts: &[String]) -> Result<Vec<String>> {
        let (first, rest) = self.operands(amounts)?;
        let total = self.calculator.add(&first, &rest)?;
        Ok(vec![self.render(&total)?])
    }

    pub fn subtract(&self, amounts: &[String]) -> Result<Vec<String>> {
        let (first, rest) = self.operands(amounts)?;
        let total = self.calculator.subtract(&first, &rest)?;
        Ok(vec![self.render(&total)?])
    }

    pub fn multiply(&self, amount: &str, factor: &str) -> Result<Vec<String>> {
        let product = self.calculator.multiply(&self.money(amount)?, factor)?;
        Ok(vec![self.render(&product)?])
    }

    pub fn divide(&self, amount: &str, divisor: &str) -> Result<Vec<String>> {
        let quotient = self.calculator.divide(&self.money(amount)?, divisor)?;
        Ok(vec![self.render(&quotient)?])
    }

    pub fn allocate(&self, amount: &str, ratios: &[String]) -> Result<Vec<String>> {
        let money = self.money(amount)?;
        let shares = self
            .calculator
            .allocate(&money, ratios.iter().map(String::as_str))?;
        debug!(shares = shares.len(), "Allocated");
        shares.iter().map(|s| self.render(s)).collect()
    }

    pub fn split(&self, amount: &str, parts: usize) -> Result<Vec<String>> {
        let shares = self.calculator.allocate_to(&self.money(amount)?, parts)?;
        shares.iter().map(|s| self.render(s)).collect()
    }

    pub fn format(&self, amount: &str, plain: bool) -> Result<Vec<String>> {
        let money = self.money(amount)?;
        let line = if plain {
            self.formatter.format_amount(&money, self.locale.as_deref())?
        } else {
            self.render(&money)?
        };
        Ok(vec![line])
    }

    pub fn currencies(&self) -> Result<Vec<String>> {
        Ok(self
            .registry
            .definitions()?
            .into_iter()
            .map(|d| format!("{:<4} {:>2}  {}", d.alphabetic_code, d.minor_unit, d.name))
            .collect())
    }
}
