//! In-flight trade payments
//!
//! A [`TradePayment`] is the balance produced by a completed sale, before
//! disbursement. Its balance can only be debited with the crate-internal
//! [`Witness`] marker, proof that the debit originates from the ledger's own
//! settlement logic rather than an arbitrary external caller. The witness
//! type never leaves this crate.

use curio_core::{Address, CollectionId, Currency, CurioError, CurioResult, PaymentId};
use serde::{Deserialize, Serialize};

/// Proof that a balance mutation originates inside this crate
///
/// Constructible anywhere in `curio-market`, nowhere outside it.
#[derive(Debug)]
pub(crate) struct Witness;

/// Settlement state of a payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentState {
    /// Produced by a sale, not yet split
    Unsettled,
    /// Royalty collected and remainder released; terminal
    Disbursed,
}

/// The balance produced by one completed sale
///
/// Not cloneable: a payment is a unique in-flight value, settled exactly
/// once.
#[derive(Debug, Serialize, Deserialize)]
pub struct TradePayment {
    id: PaymentId,
    collection: CollectionId,
    currency: Currency,
    value: u64,
    balance: u64,
    beneficiary: Address,
    state: PaymentState,
}

impl TradePayment {
    /// Create a payment for a sale of assets from `collection`
    ///
    /// `beneficiary` is who receives the post-royalty remainder, normally
    /// the seller.
    pub fn new(
        collection: CollectionId,
        currency: Currency,
        value: u64,
        beneficiary: Address,
    ) -> Self {
        Self {
            id: PaymentId::new(),
            collection,
            currency,
            value,
            balance: value,
            beneficiary,
            state: PaymentState::Unsettled,
        }
    }

    /// The payment's identity
    pub fn id(&self) -> PaymentId {
        self.id
    }

    /// The collection whose asset was traded
    pub fn collection(&self) -> CollectionId {
        self.collection
    }

    /// The settlement currency
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// The original sale value
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The undistributed balance
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Who receives the post-royalty remainder
    pub fn beneficiary(&self) -> Address {
        self.beneficiary
    }

    /// Current settlement state
    pub fn state(&self) -> PaymentState {
        self.state
    }

    /// Whether the payment has been fully disbursed
    pub fn is_disbursed(&self) -> bool {
        self.state == PaymentState::Disbursed
    }

    pub(crate) fn debit(&mut self, amount: u64, _witness: Witness) -> CurioResult<u64> {
        if amount > self.balance {
            return Err(CurioError::invalid(format!(
                "debit of {amount} exceeds remaining balance {}",
                self.balance
            )));
        }
        self.balance -= amount;
        Ok(amount)
    }

    pub(crate) fn mark_disbursed(&mut self, _witness: Witness) {
        self.state = PaymentState::Disbursed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn payment(value: u64) -> TradePayment {
        TradePayment::new(
            CollectionId::new(),
            Currency::new("usd"),
            value,
            Address::from_bytes([5u8; 20]),
        )
    }

    #[test]
    fn fresh_payments_hold_their_full_value() {
        let p = payment(500);
        assert_eq!(p.value(), 500);
        assert_eq!(p.balance(), 500);
        assert_eq!(p.state(), PaymentState::Unsettled);
    }

    #[test]
    fn debits_draw_down_the_balance() {
        let mut p = payment(500);
        p.debit(5, Witness).unwrap();
        assert_eq!(p.balance(), 495);
        assert_eq!(p.value(), 500);
    }

    #[test]
    fn overdraft_is_rejected() {
        let mut p = payment(10);
        assert_matches!(p.debit(11, Witness), Err(CurioError::Invalid { .. }));
        assert_eq!(p.balance(), 10);
    }
}
