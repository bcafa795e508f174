//! Royalty computation and settlement
//!
//! One ledger per collection. `collect_royalty` splits an unsettled payment
//! against the collection's royalty policy: the cut accrues to the ledger,
//! the remainder goes to the payment's beneficiary, and the payment is
//! marked disbursed — one synchronous unit with no observable intermediate
//! state. The split conserves value exactly: royalty + remainder equals the
//! original payment value for every rate and every value.

use crate::payment::{TradePayment, Witness};
use curio_assets::{require_capability, Collection, MintCapability, RoyaltyPolicy};
use curio_core::{Address, CollectionId, CurioError, CurioResult, PaymentId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Receipt for one settled payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    payment: PaymentId,
    royalty: u64,
    remainder: u64,
    beneficiary: Address,
}

impl Settlement {
    /// The payment this settlement disbursed
    pub fn payment(&self) -> PaymentId {
        self.payment
    }

    /// The royalty cut credited to the ledger
    pub fn royalty(&self) -> u64 {
        self.royalty
    }

    /// The remainder released to the beneficiary
    pub fn remainder(&self) -> u64 {
        self.remainder
    }

    /// Who received the remainder
    pub fn beneficiary(&self) -> Address {
        self.beneficiary
    }
}

/// Royalty escrow and payout book for one collection
#[derive(Debug, Serialize, Deserialize)]
pub struct RoyaltyLedger {
    collection: CollectionId,
    accumulated: u64,
    payouts: BTreeMap<Address, u64>,
}

impl RoyaltyLedger {
    /// Create the ledger for a collection
    pub fn new(collection: &Collection) -> Self {
        Self {
            collection: collection.id(),
            accumulated: 0,
            payouts: BTreeMap::new(),
        }
    }

    /// The collection this ledger escrows for
    pub fn collection(&self) -> CollectionId {
        self.collection
    }

    /// Royalty collected and not yet released
    pub fn accumulated(&self) -> u64 {
        self.accumulated
    }

    /// Total value this ledger has released to an address
    pub fn paid_to(&self, address: &Address) -> u64 {
        self.payouts.get(address).copied().unwrap_or(0)
    }

    /// Split an unsettled payment against the collection's royalty policy
    ///
    /// Fails with `AlreadySettled` if the payment was disbursed before (the
    /// balance is untouched), and with `PolicyNotFound` if the collection
    /// never attached a royalty policy. The split itself cannot fail part
    /// way: by the time any balance moves, every check has passed.
    pub fn collect_royalty(
        &mut self,
        payment: &mut TradePayment,
        collection: &Collection,
    ) -> CurioResult<Settlement> {
        if payment.is_disbursed() {
            return Err(CurioError::already_settled(payment.id().to_string()));
        }
        if payment.collection() != collection.id() {
            return Err(CurioError::invalid(format!(
                "payment {} was produced for {}, not {}",
                payment.id(),
                payment.collection(),
                collection.id()
            )));
        }
        if collection.id() != self.collection {
            return Err(CurioError::invalid(format!(
                "ledger escrows for {}, not {}",
                self.collection,
                collection.id()
            )));
        }

        let policy: &RoyaltyPolicy = collection
            .domains()
            .get()
            .ok_or_else(|| CurioError::policy_not_found(collection.id().to_string()))?;

        let royalty = policy.royalty_owed(payment.value());
        payment.debit(royalty, Witness)?;
        self.accumulated += royalty;

        let remainder = payment.debit(payment.balance(), Witness)?;
        let beneficiary = payment.beneficiary();
        *self.payouts.entry(beneficiary).or_insert(0) += remainder;
        payment.mark_disbursed(Witness);

        tracing::debug!(
            collection = %self.collection,
            payment = %payment.id(),
            royalty,
            remainder,
            "settled trade payment"
        );

        Ok(Settlement {
            payment: payment.id(),
            royalty,
            remainder,
            beneficiary,
        })
    }

    /// Release the accumulated royalty balance to an address
    ///
    /// Gated on the collection's mint capability: only its holder decides
    /// where accrued royalties go. Returns the released amount.
    pub fn release(
        &mut self,
        collection: &Collection,
        cap: &MintCapability,
        to: Address,
    ) -> CurioResult<u64> {
        require_capability(cap, collection)?;
        if collection.id() != self.collection {
            return Err(CurioError::invalid(format!(
                "ledger escrows for {}, not {}",
                self.collection,
                collection.id()
            )));
        }

        let amount = std::mem::take(&mut self.accumulated);
        *self.payouts.entry(to).or_insert(0) += amount;
        tracing::debug!(collection = %self.collection, to = %to, amount, "released royalties");
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use curio_assets::create_collection;
    use curio_core::Currency;

    fn seller() -> Address {
        Address::from_bytes([7u8; 20])
    }

    fn collection_with_rate(rate_bps: u16) -> (Collection, MintCapability) {
        let (mut collection, cap) = create_collection();
        collection
            .attach_domain(&cap, RoyaltyPolicy::proportional(rate_bps).unwrap())
            .unwrap();
        (collection, cap)
    }

    fn payment_for(collection: &Collection, value: u64) -> TradePayment {
        TradePayment::new(collection.id(), Currency::new("usd"), value, seller())
    }

    #[test]
    fn split_conserves_value() {
        let (collection, _cap) = collection_with_rate(100);
        let mut ledger = RoyaltyLedger::new(&collection);
        let mut payment = payment_for(&collection, 500);

        let settlement = ledger.collect_royalty(&mut payment, &collection).unwrap();
        assert_eq!(settlement.royalty(), 5);
        assert_eq!(settlement.remainder(), 495);
        assert_eq!(settlement.royalty() + settlement.remainder(), 500);
        assert_eq!(ledger.accumulated(), 5);
        assert_eq!(ledger.paid_to(&seller()), 495);
        assert_eq!(payment.balance(), 0);
        assert!(payment.is_disbursed());
    }

    #[test]
    fn resettling_fails_and_changes_nothing() {
        let (collection, _cap) = collection_with_rate(100);
        let mut ledger = RoyaltyLedger::new(&collection);
        let mut payment = payment_for(&collection, 500);
        ledger.collect_royalty(&mut payment, &collection).unwrap();

        let err = ledger
            .collect_royalty(&mut payment, &collection)
            .unwrap_err();
        assert_matches!(err, CurioError::AlreadySettled { .. });
        assert_eq!(ledger.accumulated(), 5);
        assert_eq!(ledger.paid_to(&seller()), 495);
        assert_eq!(payment.balance(), 0);
    }

    #[test]
    fn missing_policy_is_fatal() {
        let (collection, _cap) = create_collection();
        let mut ledger = RoyaltyLedger::new(&collection);
        let mut payment = payment_for(&collection, 500);

        let err = ledger
            .collect_royalty(&mut payment, &collection)
            .unwrap_err();
        assert_matches!(err, CurioError::PolicyNotFound { .. });
        assert_eq!(payment.balance(), 500);
        assert!(!payment.is_disbursed());
    }

    #[test]
    fn payments_for_other_collections_are_rejected() {
        let (collection, _cap) = collection_with_rate(100);
        let (other, _other_cap) = collection_with_rate(100);
        let mut ledger = RoyaltyLedger::new(&collection);
        let mut payment = payment_for(&other, 500);

        let err = ledger
            .collect_royalty(&mut payment, &collection)
            .unwrap_err();
        assert_matches!(err, CurioError::Invalid { .. });
        assert_eq!(payment.balance(), 500);
    }

    #[test]
    fn boundary_rates_settle_exactly() {
        for (rate, value, expected_royalty) in [(0, 500, 0), (10_000, 500, 500), (100, 199, 1)] {
            let (collection, _cap) = collection_with_rate(rate);
            let mut ledger = RoyaltyLedger::new(&collection);
            let mut payment = payment_for(&collection, value);

            let settlement = ledger.collect_royalty(&mut payment, &collection).unwrap();
            assert_eq!(settlement.royalty(), expected_royalty);
            assert_eq!(settlement.remainder(), value - expected_royalty);
        }
    }

    #[test]
    fn constant_fee_larger_than_the_payment_clamps() {
        let (mut collection, cap) = create_collection();
        collection
            .attach_domain(&cap, RoyaltyPolicy::constant(1_000))
            .unwrap();
        let mut ledger = RoyaltyLedger::new(&collection);
        let mut payment = payment_for(&collection, 400);

        let settlement = ledger.collect_royalty(&mut payment, &collection).unwrap();
        assert_eq!(settlement.royalty(), 400);
        assert_eq!(settlement.remainder(), 0);
        assert_eq!(ledger.paid_to(&seller()), 0);
    }

    #[test]
    fn release_is_capability_gated() {
        let (collection, cap) = collection_with_rate(100);
        let (_other, foreign_cap) = create_collection();
        let mut ledger = RoyaltyLedger::new(&collection);
        let mut payment = payment_for(&collection, 500);
        ledger.collect_royalty(&mut payment, &collection).unwrap();

        let creator = Address::from_bytes([8u8; 20]);
        let err = ledger
            .release(&collection, &foreign_cap, creator)
            .unwrap_err();
        assert_matches!(err, CurioError::Authorization { .. });
        assert_eq!(ledger.accumulated(), 5);

        let released = ledger.release(&collection, &cap, creator).unwrap();
        assert_eq!(released, 5);
        assert_eq!(ledger.accumulated(), 0);
        assert_eq!(ledger.paid_to(&creator), 5);
    }
}
