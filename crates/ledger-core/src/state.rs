//! # State Facade
//!
//! `Ledger<S>` wraps a [`StateStore`] and exposes the typed get/set
//! operations the handlers in [`crate::service`] need, translating to
//! and from raw addressed bytes via [`crate::address`] and
//! [`crate::codec`]. Mirrors `TokenState` in the reference
//! implementation's `state.py`.

use serde::{de::DeserializeOwned, Serialize};

use ledger_types::{Account, AssetAmount, Balance, LedgerError, Token, Transfer};

use crate::address;
use crate::codec::{decode, encode};
use crate::ports::outbound::StateStore;

/// Typed view over a [`StateStore`]. `?Sized` so callers can wrap a
/// `dyn StateStore` trait object as well as a concrete adapter.
pub struct Ledger<'s, S: StateStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: StateStore + ?Sized> Ledger<'s, S> {
    /// Wrap a store.
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    fn fetch<T: DeserializeOwned>(&self, address: &str) -> Result<Option<T>, LedgerError> {
        match self.store.get(address)? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    fn put<T: Serialize>(&self, address: String, value: &T) -> Result<(), LedgerError> {
        let bytes = encode(value)?;
        self.store.set_many(vec![(address, bytes)])
    }

    /// The Manager singleton, if one has been registered.
    pub fn manager(&self) -> Result<Option<Account>, LedgerError> {
        self.fetch(&address::manager_address())
    }

    /// Register the Manager singleton. Also lands at the regular account
    /// address, since a manager is an account too (`TokenState.set_manager`).
    pub fn put_manager(&self, account: &Account) -> Result<(), LedgerError> {
        let bytes = encode(account)?;
        self.store.set_many(vec![
            (address::manager_address(), bytes.clone()),
            (address::account_address(&account.public_key), bytes),
        ])
    }

    /// The Issuer singleton, if one has been registered.
    pub fn issuer(&self) -> Result<Option<Account>, LedgerError> {
        self.fetch(&address::issuer_address())
    }

    /// Register the Issuer singleton. Also lands at the regular account
    /// address, since an issuer is an account too (`TokenState.set_issuer`).
    pub fn put_issuer(&self, account: &Account) -> Result<(), LedgerError> {
        let bytes = encode(account)?;
        self.store.set_many(vec![
            (address::issuer_address(), bytes.clone()),
            (address::account_address(&account.public_key), bytes),
        ])
    }

    /// Look up an account by public key.
    pub fn account(&self, pkey: &str) -> Result<Option<Account>, LedgerError> {
        self.fetch(&address::account_address(pkey))
    }

    /// Register or replace an account.
    pub fn put_account(&self, account: &Account) -> Result<(), LedgerError> {
        self.put(address::account_address(&account.public_key), account)
    }

    /// Look up a token by name.
    pub fn token(&self, name: &str) -> Result<Option<Token>, LedgerError> {
        self.fetch(&address::token_address(name))
    }

    /// Create or replace a token.
    pub fn put_token(&self, token: &Token) -> Result<(), LedgerError> {
        self.put(address::token_address(&token.name), token)
    }

    /// Look up a holder's balance of one token. `token_hex` is that
    /// token's full derived address, as returned by [`address::token_address`].
    pub fn balance(&self, pkey: &str, token_hex: &str) -> Result<Option<Balance>, LedgerError> {
        self.fetch(&address::acc_tok_address(pkey, token_hex))
    }

    /// Write a balance to both its AccTok and TokAcc addresses atomically.
    /// This is the only way a [`Balance`] should ever be persisted — the
    /// two indices must never drift apart.
    pub fn put_balance(&self, balance: &Balance, token_hex: &str) -> Result<(), LedgerError> {
        let acc_tok = address::acc_tok_address(&balance.owner_pkey, token_hex);
        let tok_acc = address::tok_acc_address(token_hex, &balance.owner_pkey);
        let bytes = encode(balance)?;
        self.store
            .set_many(vec![(acc_tok, bytes.clone()), (tok_acc, bytes)])
    }

    /// Move `asset.total_supply` units of `token_hex` from `sender_pkey` to
    /// `receiver_pkey` and record the resulting [`Transfer`] event as one
    /// atomic write: the sender debit, the receiver credit (at both its
    /// AccTok and TokAcc indices), and the transfer event all land in a
    /// single `set_many` call, so no observer ever sees a debit without
    /// its matching credit. When `infinite_token` is set the sender's
    /// balance is left untouched (reserved for an unlimited minting
    /// source; unused by any handler in this crate today).
    #[allow(clippy::too_many_arguments)]
    pub fn transfer(
        &self,
        token_hex: &str,
        sender_pkey: &str,
        sender_name: &str,
        receiver_pkey: &str,
        receiver_name: &str,
        asset: &AssetAmount,
        timestamp: &str,
        infinite_token: bool,
    ) -> Result<(), LedgerError> {
        let mut entries = Vec::new();

        if !infinite_token {
            let mut sender_balance = self
                .balance(sender_pkey, token_hex)?
                .ok_or_else(|| LedgerError::NotFound(format!("no balance: {sender_pkey}")))?;
            sender_balance.asset.total_supply -= asset.total_supply;
            let bytes = encode(&sender_balance)?;
            entries.push((
                address::acc_tok_address(sender_pkey, token_hex),
                bytes.clone(),
            ));
            entries.push((address::tok_acc_address(token_hex, sender_pkey), bytes));
        }

        let mut receiver_balance = self.balance(receiver_pkey, token_hex)?.unwrap_or(Balance {
            owner_pkey: receiver_pkey.to_string(),
            asset: AssetAmount {
                name: asset.name.clone(),
                total_supply: 0.0,
            },
            attributes: vec![],
        });
        receiver_balance.asset.total_supply += asset.total_supply;
        let bytes = encode(&receiver_balance)?;
        entries.push((
            address::acc_tok_address(receiver_pkey, token_hex),
            bytes.clone(),
        ));
        entries.push((address::tok_acc_address(token_hex, receiver_pkey), bytes));

        let transfer = Transfer {
            sender_pkey: sender_pkey.to_string(),
            sender_name: sender_name.to_string(),
            receiver_pkey: receiver_pkey.to_string(),
            receiver_name: receiver_name.to_string(),
            asset: asset.clone(),
            date: timestamp.to_string(),
        };
        let transfer_addr =
            address::transfer_address(token_hex, sender_pkey, receiver_pkey, timestamp);
        entries.push((transfer_addr, encode(&transfer)?));

        self.store.set_many(entries)
    }
}
