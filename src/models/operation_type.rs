//! Operation-type registry.
//!
//! Every transaction declares an operation-type code. The code decides
//! whether the stored amount is a debit (negative) or a credit
//! (positive) movement. The registry is a fixed table built once at
//! startup and handed to the transaction service; it is never mutated
//! and nothing in it is persisted.

use std::collections::HashMap;

/// Whether an operation moves money out of or into an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Stored with a negative sign (purchases, withdrawals)
    Debit,
    /// Stored with a positive sign (payments)
    Credit,
}

impl OperationKind {
    /// Apply this kind's sign to a caller-supplied amount.
    ///
    /// Debits negate the supplied value; credits keep it as given.
    /// The caller's own sign is never trusted: a debit of 400 cents
    /// is stored as -400 regardless of what the client sent.
    pub fn signed_amount(self, amount_cents: i64) -> i64 {
        match self {
            OperationKind::Debit => -amount_cents,
            OperationKind::Credit => amount_cents,
        }
    }
}

/// A single entry in the registry.
#[derive(Debug, Clone)]
pub struct OperationType {
    pub id: i32,
    pub description: &'static str,
    pub kind: OperationKind,
}

/// Immutable code -> operation-type lookup table.
#[derive(Debug, Clone)]
pub struct OperationTypeRegistry {
    entries: HashMap<i32, OperationType>,
}

impl OperationTypeRegistry {
    /// The standard ledger operation types.
    ///
    /// | code | description          | kind   |
    /// |------|----------------------|--------|
    /// | 1    | Cash purchase        | debit  |
    /// | 2    | Installment purchase | debit  |
    /// | 3    | Withdrawal           | debit  |
    /// | 4    | Payment              | credit |
    pub fn standard() -> Self {
        Self::from_entries([
            OperationType {
                id: 1,
                description: "Cash purchase",
                kind: OperationKind::Debit,
            },
            OperationType {
                id: 2,
                description: "Installment purchase",
                kind: OperationKind::Debit,
            },
            OperationType {
                id: 3,
                description: "Withdrawal",
                kind: OperationKind::Debit,
            },
            OperationType {
                id: 4,
                description: "Payment",
                kind: OperationKind::Credit,
            },
        ])
    }

    fn from_entries(entries: impl IntoIterator<Item = OperationType>) -> Self {
        Self {
            entries: entries.into_iter().map(|op| (op.id, op)).collect(),
        }
    }

    /// Look up an operation type by its code.
    pub fn get(&self, id: i32) -> Option<&OperationType> {
        self.entries.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_classifies_codes() {
        let registry = OperationTypeRegistry::standard();
        for code in [1, 2, 3] {
            assert_eq!(registry.get(code).unwrap().kind, OperationKind::Debit);
        }
        assert_eq!(registry.get(4).unwrap().kind, OperationKind::Credit);
    }

    #[test]
    fn unknown_codes_are_absent() {
        let registry = OperationTypeRegistry::standard();
        assert!(registry.get(0).is_none());
        assert!(registry.get(5).is_none());
        assert!(registry.get(-1).is_none());
    }

    #[test]
    fn debit_negates_credit_keeps() {
        assert_eq!(OperationKind::Debit.signed_amount(400), -400);
        assert_eq!(OperationKind::Credit.signed_amount(400), 400);
        // sign of the input is passed through the same rule, not clamped
        assert_eq!(OperationKind::Debit.signed_amount(-250), 250);
        assert_eq!(OperationKind::Credit.signed_amount(-250), -250);
        assert_eq!(OperationKind::Debit.signed_amount(0), 0);
    }
}
