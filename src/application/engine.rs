use crate::domain::account::{AccountId, Amount};
use crate::domain::event::Event;
use crate::domain::ledger::Ledger;
use crate::domain::ports::{TokenMintBox, ValueTransferBox};
use crate::domain::state::State;
use crate::error::{IssuanceError, Result};
use rust_decimal::Decimal;

/// The issuance state machine and its investor ledger.
///
/// `IssuanceEngine` owns all mutable state (lifecycle state, issue price,
/// ledger, recorded events) and the capability ports it pays out through.
/// Every operation is atomic: it validates, performs at most one capability
/// call, and only then mutates, so a collaborator failure leaves the engine
/// exactly as it was.
pub struct IssuanceEngine {
    owner: AccountId,
    state: State,
    issue_price: Decimal,
    ledger: Ledger,
    treasury: ValueTransferBox,
    minter: TokenMintBox,
    events: Vec<Event>,
}

impl IssuanceEngine {
    /// Creates a new engine in the `CREATED` state with no price set.
    ///
    /// # Arguments
    ///
    /// * `owner` - The single privileged identity, fixed for the engine's life.
    /// * `treasury` - The value-transfer capability custodying contributions.
    /// * `minter` - The token-issuance capability used by `claim`.
    pub fn new(owner: AccountId, treasury: ValueTransferBox, minter: TokenMintBox) -> Self {
        Self {
            owner,
            state: State::Created,
            issue_price: Decimal::ZERO,
            ledger: Ledger::new(),
            treasury,
            minter,
            events: Vec::new(),
        }
    }

    /// Sets the issue price (base value units per token). Owner-only.
    ///
    /// The price is locked once the engine leaves `CREATED`: contributions
    /// already recorded rely on it as their conversion rate.
    pub fn set_issue_price(&mut self, caller: &AccountId, price: Decimal) -> Result<()> {
        self.require_owner(caller)?;
        if self.state != State::Created {
            return Err(IssuanceError::InvalidState("Issue price is locked."));
        }
        if price < Decimal::ZERO {
            return Err(IssuanceError::InvalidAmount(
                "Issue price cannot be negative.",
            ));
        }
        self.issue_price = price;
        Ok(())
    }

    /// Transition `CREATED → OPEN`. Owner-only; requires a non-zero price.
    pub fn start_issuance(&mut self, caller: &AccountId) -> Result<()> {
        self.require_owner(caller)?;
        if self.state != State::Created {
            return Err(IssuanceError::InvalidState("Issuance already started."));
        }
        if self.issue_price.is_zero() {
            return Err(IssuanceError::InvalidState("Issue price not set."));
        }
        self.state = State::Open;
        Ok(())
    }

    /// Records an investment while `OPEN`.
    ///
    /// The amount must be an exact multiple of the issue price so that a
    /// later `claim` divides without remainder. Custodies the value through
    /// the treasury before touching the ledger.
    pub async fn invest(&mut self, caller: &AccountId, amount: Amount) -> Result<()> {
        if self.state != State::Open {
            return Err(IssuanceError::InvalidState("Not open for investments."));
        }
        let amount = amount.value();
        if !(amount % self.issue_price).is_zero() {
            return Err(IssuanceError::InvalidAmount(
                "Fractional investments not allowed.",
            ));
        }
        self.treasury.receive(caller.clone(), amount).await?;
        self.ledger.credit(caller.clone(), amount);
        self.events.push(Event::InvestmentAdded {
            investor: caller.clone(),
            amount,
        });
        Ok(())
    }

    /// Transition `OPEN → LIVE`. Owner-only.
    ///
    /// From here on ledger entries are claimable rather than refundable.
    pub fn start_distribution(&mut self, caller: &AccountId) -> Result<()> {
        self.require_owner(caller)?;
        if self.state != State::Open {
            return Err(IssuanceError::InvalidState(
                "Cannot start distribution now.",
            ));
        }
        self.state = State::Live;
        Ok(())
    }

    /// Converts the caller's ledger entry into minted tokens while `LIVE`.
    ///
    /// `tokens = entry / issue_price`, exact by the `invest` constraint. The
    /// entry is zeroed only after the mint succeeds; a second claim fails
    /// with `NotFound`.
    pub async fn claim(&mut self, caller: &AccountId) -> Result<()> {
        if self.state != State::Live {
            return Err(IssuanceError::InvalidState("Cannot claim now."));
        }
        let invested = self.ledger.invested(caller);
        if invested.is_zero() {
            return Err(IssuanceError::NotFound("No investments found."));
        }
        let tokens = invested / self.issue_price;
        self.minter.mint(caller.clone(), tokens).await?;
        let _ = self.ledger.take(caller);
        Ok(())
    }

    /// Sweeps the engine's entire custodied value to `destination`.
    ///
    /// Owner-only, `LIVE` only. The ledger is untouched: claims are pure
    /// bookkeeping and keep working after the sweep.
    pub async fn withdraw(&mut self, caller: &AccountId, destination: AccountId) -> Result<()> {
        self.require_owner(caller)?;
        if self.state != State::Live {
            return Err(IssuanceError::InvalidState("Cannot withdraw funds now."));
        }
        let balance = self.treasury.custodied().await?;
        self.treasury.transfer(destination, balance).await?;
        Ok(())
    }

    /// Refunds the caller's full ledger entry while `OPEN` or `FAILED`.
    pub async fn cancel_investment(&mut self, caller: &AccountId) -> Result<()> {
        if self.state != State::Open && self.state != State::Failed {
            return Err(IssuanceError::InvalidState("Cannot cancel now."));
        }
        let invested = self.ledger.invested(caller);
        if invested.is_zero() {
            return Err(IssuanceError::NotFound("No investments found."));
        }
        self.treasury.transfer(caller.clone(), invested).await?;
        let _ = self.ledger.take(caller);
        self.events.push(Event::InvestmentCancelled {
            investor: caller.clone(),
            amount: invested,
        });
        Ok(())
    }

    /// Forces `OPEN → FAILED`. Owner-only.
    ///
    /// Refunds nothing itself; it unlocks each investor's individual
    /// `cancel_investment`, keeping every call O(1) and one failing refund
    /// from blocking the rest.
    pub fn cancel_all_investments(&mut self, caller: &AccountId) -> Result<()> {
        self.require_owner(caller)?;
        if self.state != State::Open {
            return Err(IssuanceError::InvalidState(
                "Cannot cancel all investments now.",
            ));
        }
        self.state = State::Failed;
        Ok(())
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn issue_price(&self) -> Decimal {
        self.issue_price
    }

    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    /// The caller's current ledger entry, zero if absent.
    pub fn invested(&self, account: &AccountId) -> Decimal {
        self.ledger.invested(account)
    }

    /// Sum of all ledger entries.
    pub fn total_raised(&self) -> Decimal {
        self.ledger.total()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Drains the events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    fn require_owner(&self, caller: &AccountId) -> Result<()> {
        if caller == &self.owner {
            Ok(())
        } else {
            Err(IssuanceError::Unauthorized("Caller is not the owner."))
        }
    }
}
