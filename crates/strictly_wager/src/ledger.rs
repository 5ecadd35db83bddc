//! Two-seat balance ledger.
//!
//! Balances are unsigned, so a negative balance cannot be represented;
//! every debit checks the balance first. The serialized form is
//! `{"X": n, "O": n}`.

use super::types::Seat;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// Balance of each seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(rename = "X")]
    x: u64,
    #[serde(rename = "O")]
    o: u64,
}

/// A debit the ledger refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum LedgerError {
    /// The seat cannot cover the amount.
    #[display("{seat} has {balance}, needs {required}")]
    InsufficientFunds {
        /// Seat that fell short.
        seat: Seat,
        /// Its balance at the time of the request.
        balance: u64,
        /// Amount requested.
        required: u64,
    },
    /// Twice the stake does not fit in a balance.
    #[display("stake {amount} is too large to pot")]
    PotOverflow {
        /// Stake requested from each seat.
        amount: u64,
    },
    /// A winning seat could not be paid the pot.
    #[display("{seat} has {balance}, cannot win a pot on stake {amount}")]
    PayoutOverflow {
        /// Seat whose payout would not fit.
        seat: Seat,
        /// Its balance before the stake is taken.
        balance: u64,
        /// Stake requested from each seat.
        amount: u64,
    },
    /// A credit would push a balance past `u64::MAX`.
    #[display("{seat} has {balance}, cannot be credited {amount}")]
    BalanceOverflow {
        /// Seat that would overflow.
        seat: Seat,
        /// Its balance.
        balance: u64,
        /// Amount offered.
        amount: u64,
    },
}

impl Ledger {
    /// Creates a ledger with both seats at the same balance.
    #[instrument]
    pub fn new(starting: u64) -> Self {
        Self {
            x: starting,
            o: starting,
        }
    }

    /// Creates a ledger from explicit balances.
    pub fn with_balances(x: u64, o: u64) -> Self {
        Self { x, o }
    }

    /// Balance of a seat.
    pub fn balance(&self, seat: Seat) -> u64 {
        match seat {
            Seat::X => self.x,
            Seat::O => self.o,
        }
    }

    /// Sum of both balances.
    pub fn total(&self) -> u128 {
        u128::from(self.x) + u128::from(self.o)
    }

    /// Returns true if both seats can cover the amount.
    pub fn covers(&self, amount: u64) -> bool {
        self.x >= amount && self.o >= amount
    }

    fn slot_mut(&mut self, seat: Seat) -> &mut u64 {
        match seat {
            Seat::X => &mut self.x,
            Seat::O => &mut self.o,
        }
    }

    fn check(&self, seat: Seat, amount: u64) -> Result<(), LedgerError> {
        let balance = self.balance(seat);
        if balance < amount {
            warn!(%seat, balance, required = amount, "Insufficient funds");
            return Err(LedgerError::InsufficientFunds {
                seat,
                balance,
                required: amount,
            });
        }
        Ok(())
    }

    /// Debits one seat.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientFunds`] if the balance is below
    /// `amount`; the balance is unchanged.
    #[instrument(skip(self))]
    pub fn withdraw(&mut self, seat: Seat, amount: u64) -> Result<(), LedgerError> {
        self.check(seat, amount)?;
        *self.slot_mut(seat) -= amount;
        debug!(%seat, amount, balance = self.balance(seat), "Withdrawn");
        Ok(())
    }

    fn check_credit(&self, seat: Seat, amount: u64) -> Result<u64, LedgerError> {
        let balance = self.balance(seat);
        balance.checked_add(amount).ok_or_else(|| {
            warn!(%seat, balance, amount, "Credit would overflow balance");
            LedgerError::BalanceOverflow {
                seat,
                balance,
                amount,
            }
        })
    }

    /// Credits one seat.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::BalanceOverflow`] if the new balance does not
    /// fit in a `u64`; the balance is unchanged.
    #[instrument(skip(self))]
    pub fn credit(&mut self, seat: Seat, amount: u64) -> Result<(), LedgerError> {
        let updated = self.check_credit(seat, amount)?;
        *self.slot_mut(seat) = updated;
        debug!(%seat, amount, balance = updated, "Credited");
        Ok(())
    }

    /// Credits both seats the same amount (a refund or a drawn pot).
    ///
    /// All-or-nothing: both seats are checked before either is credited.
    #[instrument(skip(self))]
    pub fn credit_both(&mut self, amount: u64) -> Result<(), LedgerError> {
        for seat in Seat::iter() {
            self.check_credit(seat, amount)?;
        }
        for seat in Seat::iter() {
            self.credit(seat, amount)?;
        }
        Ok(())
    }

    /// Withdraws `amount` from both seats and returns the pot.
    ///
    /// All-or-nothing: both seats are checked before either is debited.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientFunds`] naming the first seat
    /// (X before O) that cannot cover the amount, or
    /// [`LedgerError::PayoutOverflow`] if either seat could not be paid the
    /// pot on a win. No balance changes on error.
    #[instrument(skip(self))]
    pub fn transfer_both_to_pot(&mut self, amount: u64) -> Result<u64, LedgerError> {
        let pot = amount
            .checked_mul(2)
            .ok_or(LedgerError::PotOverflow { amount })?;
        for seat in Seat::iter() {
            self.check(seat, amount)?;
        }
        // A winner ends at balance - amount + pot.
        for seat in Seat::iter() {
            let balance = self.balance(seat);
            if balance.checked_add(amount).is_none() {
                warn!(%seat, balance, amount, "Pot could not be paid out");
                return Err(LedgerError::PayoutOverflow {
                    seat,
                    balance,
                    amount,
                });
            }
        }
        for seat in Seat::iter() {
            *self.slot_mut(seat) -= amount;
        }
        info!(amount, pot, "Stakes moved to pot");
        Ok(pot)
    }

    /// Sets both balances to the starting value.
    #[instrument(skip(self))]
    pub fn reset_to_starting(&mut self, starting: u64) {
        info!(previous_x = self.x, previous_o = self.o, starting, "Balances reset");
        self.x = starting;
        self.o = starting;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_withdraw_and_credit() {
        let mut ledger = Ledger::new(100);
        ledger.withdraw(Seat::X, 40).unwrap();
        ledger.credit(Seat::O, 40).unwrap();
        assert_eq!(ledger.balance(Seat::X), 60);
        assert_eq!(ledger.balance(Seat::O), 140);
        assert_eq!(ledger.total(), 200);
    }

    #[test]
    fn test_withdraw_rejects_overdraft() {
        let mut ledger = Ledger::new(10);
        let result = ledger.withdraw(Seat::O, 11);
        assert_eq!(
            result,
            Err(LedgerError::InsufficientFunds {
                seat: Seat::O,
                balance: 10,
                required: 11
            })
        );
        assert_eq!(ledger, Ledger::new(10));
    }

    #[test]
    fn test_transfer_is_all_or_nothing() {
        let mut ledger = Ledger::with_balances(500, 50);
        let result = ledger.transfer_both_to_pot(100);
        assert!(matches!(
            result,
            Err(LedgerError::InsufficientFunds { seat: Seat::O, .. })
        ));
        assert_eq!(ledger, Ledger::with_balances(500, 50));

        assert_eq!(ledger.transfer_both_to_pot(50), Ok(100));
        assert_eq!(ledger, Ledger::with_balances(450, 0));
    }

    #[test]
    fn test_credit_refuses_overflow() {
        let mut ledger = Ledger::with_balances(u64::MAX - 5, 10);
        assert_eq!(
            ledger.credit(Seat::X, 6),
            Err(LedgerError::BalanceOverflow {
                seat: Seat::X,
                balance: u64::MAX - 5,
                amount: 6
            })
        );
        assert!(matches!(
            ledger.credit_both(6),
            Err(LedgerError::BalanceOverflow { seat: Seat::X, .. })
        ));
        assert_eq!(ledger, Ledger::with_balances(u64::MAX - 5, 10));

        ledger.credit_both(5).unwrap();
        assert_eq!(ledger, Ledger::with_balances(u64::MAX, 15));
    }

    #[test]
    fn test_transfer_refuses_unpayable_pot() {
        let mut ledger = Ledger::with_balances(1000, u64::MAX);
        assert_eq!(
            ledger.transfer_both_to_pot(500),
            Err(LedgerError::PayoutOverflow {
                seat: Seat::O,
                balance: u64::MAX,
                amount: 500
            })
        );
        assert_eq!(ledger, Ledger::with_balances(1000, u64::MAX));
    }

    #[test]
    fn test_reset_to_starting() {
        let mut ledger = Ledger::with_balances(3, 1997);
        ledger.reset_to_starting(1000);
        assert_eq!(ledger, Ledger::new(1000));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&Ledger::with_balances(1200, 800)).unwrap();
        assert_eq!(json, r#"{"X":1200,"O":800}"#);
    }

    #[test]
    fn test_negative_balance_does_not_deserialize() {
        let parsed = serde_json::from_str::<Ledger>(r#"{"X":-5,"O":800}"#);
        assert!(parsed.is_err());
    }
}
