use solana_sdk::{compute_budget::ComputeBudgetInstruction, instruction::Instruction};

/// Compute Budget.
#[derive(Debug, Clone, Copy)]
pub struct ComputeBudget {
    min_priority_lamports: Option<u64>,
    limit_units: u32,
    price_micro_lamports: u64,
}

impl Default for ComputeBudget {
    fn default() -> Self {
        Self {
            min_priority_lamports: Some(Self::MIN_PRIORITY_LAMPORTS),
            limit_units: Self::DEFAULT_LIMIT_UNITS,
            price_micro_lamports: Self::DEFAULT_PRICE_MICRO_LAMPORTS,
        }
    }
}

impl ComputeBudget {
    const MICRO_LAMPORTS_PER_LAMPORT: u64 = 1_000_000;

    const DEFAULT_LIMIT_UNITS: u32 = 200_000;

    const DEFAULT_PRICE_MICRO_LAMPORTS: u64 = 50_000;

    /// Minimum priority fee in lamports paid by every transaction.
    pub const MIN_PRIORITY_LAMPORTS: u64 = 10_000;

    /// The unit price needed for the whole limit to cost the minimum priority fee.
    fn min_price(&self) -> Option<u64> {
        let lamports = self.min_priority_lamports?;
        lamports
            .checked_mul(Self::MICRO_LAMPORTS_PER_LAMPORT)?
            .checked_div(u64::from(self.limit_units))
    }

    fn budget_price(&self, compute_unit_price_micro_lamports: Option<u64>) -> u64 {
        let price = compute_unit_price_micro_lamports.unwrap_or(self.price_micro_lamports);
        self.min_price().map_or(price, |min| price.max(min))
    }

    /// Build compute budget instructions.
    pub fn compute_budget_instructions(
        &self,
        compute_unit_price_micro_lamports: Option<u64>,
    ) -> Vec<Instruction> {
        let price = self.budget_price(compute_unit_price_micro_lamports);
        vec![
            ComputeBudgetInstruction::set_compute_unit_limit(self.limit_units),
            ComputeBudgetInstruction::set_compute_unit_price(price),
        ]
    }

    /// Get compute unit limit.
    pub fn limit(&self) -> u32 {
        self.limit_units
    }

    /// Get compute unit price in micro lamports.
    pub fn price(&self) -> u64 {
        self.price_micro_lamports
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_priority_lamports_raise_the_price() {
        // 10_000 lamports over 200_000 units is 50_000 micro-lamports per unit.
        let budget = ComputeBudget::default();
        assert_eq!(budget.budget_price(Some(1)), 50_000);
        assert_eq!(budget.budget_price(Some(80_000)), 80_000);
        assert_eq!(budget.budget_price(None), budget.price());

        let budget = ComputeBudget {
            min_priority_lamports: None,
            ..Default::default()
        };
        assert_eq!(budget.budget_price(Some(1)), 1);
    }

    #[test]
    fn always_two_instructions() {
        let budget = ComputeBudget::default();
        assert_eq!(budget.limit(), 200_000);
        assert_eq!(budget.compute_budget_instructions(Some(0)).len(), 2);
    }
}
