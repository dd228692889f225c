//! # Address Deriver
//!
//! Pure functions mapping logical identifiers — role names, account public
//! keys, token identifiers, relation tuples — to fixed-length (70 hex
//! character) state-store addresses. No clock or randomness participates;
//! two calls with the same inputs always produce the same address.
//!
//! Hashing happens in hex, not bytes: `H(s)` is the lowercase hex of
//! SHA-512 of `s`, and every slice below counts hex characters, never raw
//! bytes. This is the one place in the crate that constructs addresses —
//! [`crate::state`] calls into here but never hashes anything itself.

use ledger_crypto::sha512_hex;
use std::sync::LazyLock;

const FAMILY_NAME: &str = "da";

const ACCOUNT_CODE: &str = "01";
const TOKEN_CODE: &str = "02";
const MANAGER_CODE: &str = "03";
const ISSUER_CODE: &str = "04";
const ACC_TOK_CODE: &str = "51";
const TOK_ACC_CODE: &str = "52";
const TRANSFER_CODE: &str = "53";

static PREFIX: LazyLock<String> = LazyLock::new(|| sha512_hex(FAMILY_NAME)[..6].to_string());

/// The 6-hex-character family prefix shared by every address this crate
/// derives.
#[must_use]
pub fn prefix() -> &'static str {
    &PREFIX
}

/// Address of the Manager singleton.
#[must_use]
pub fn manager_address() -> String {
    format!("{}{}", prefix(), &sha512_hex(MANAGER_CODE)[..64])
}

/// Address of the Issuer singleton.
#[must_use]
pub fn issuer_address() -> String {
    format!("{}{}", prefix(), &sha512_hex(ISSUER_CODE)[..64])
}

/// Per-account address for `pkey`.
#[must_use]
pub fn account_address(pkey: &str) -> String {
    format!("{}{}{}", prefix(), ACCOUNT_CODE, &sha512_hex(pkey)[..62])
}

/// Address of the token identified by `id`. This is also the `token_hex`
/// input the relation-address functions below expect.
#[must_use]
pub fn token_address(id: &str) -> String {
    format!("{}{}{}", prefix(), TOKEN_CODE, &sha512_hex(id)[..62])
}

/// AccTok relation address: a holder's balance of one token, indexed by
/// account first. Stores the same [`ledger_types::Balance`] payload as
/// [`tok_acc_address`] — both must always be written together.
#[must_use]
pub fn acc_tok_address(pkey: &str, token_hex: &str) -> String {
    format!(
        "{}{}{}{}{}{}",
        prefix(),
        ACC_TOK_CODE,
        ACCOUNT_CODE,
        &sha512_hex(pkey)[..30],
        TOKEN_CODE,
        &token_hex[..28]
    )
}

/// TokAcc relation address: the same balance, indexed by token first.
#[must_use]
pub fn tok_acc_address(token_hex: &str, pkey: &str) -> String {
    format!(
        "{}{}{}{}{}{}",
        prefix(),
        TOK_ACC_CODE,
        TOKEN_CODE,
        &token_hex[..28],
        ACCOUNT_CODE,
        &sha512_hex(pkey)[..30]
    )
}

/// Transfer event address for a move of `token_hex` from `from` to `to` at
/// `ts` (the decimal seconds-since-epoch string carried by the payload).
///
/// Unlike the account-indexed addresses above, `from`/`to` are sliced raw
/// here, not hashed — this matches the reference implementation and is
/// intentional, not an oversight.
#[must_use]
pub fn transfer_address(token_hex: &str, from: &str, to: &str, ts: &str) -> String {
    format!(
        "{}{}{}{}{}{}{}{}{}",
        prefix(),
        TRANSFER_CODE,
        TOKEN_CODE,
        &token_hex[..18],
        ACCOUNT_CODE,
        &from[..from.len().min(14)],
        ACCOUNT_CODE,
        &to[..to.len().min(14)],
        &ts[..ts.len().min(10)]
    )
}

/// Prefix under which every account address lives; lists all accounts.
#[must_use]
pub fn account_list_prefix() -> String {
    format!("{}{}", prefix(), ACCOUNT_CODE)
}

/// Prefix under which every token address lives; lists all tokens.
#[must_use]
pub fn token_list_prefix() -> String {
    format!("{}{}", prefix(), TOKEN_CODE)
}

/// Prefix listing every token a holder has a balance in.
#[must_use]
pub fn holder_tokens_prefix(pkey: &str) -> String {
    format!(
        "{}{}{}{}",
        prefix(),
        ACC_TOK_CODE,
        ACCOUNT_CODE,
        &sha512_hex(pkey)[..30]
    )
}

/// Prefix listing every holder of a given token.
#[must_use]
pub fn token_holders_prefix(token_hex: &str) -> String {
    format!("{}{}{}{}", prefix(), TOK_ACC_CODE, TOKEN_CODE, &token_hex[..28])
}

/// Prefix listing every transfer event involving a given token.
#[must_use]
pub fn token_transfers_prefix(token_hex: &str) -> String {
    format!(
        "{}{}{}{}",
        prefix(),
        TRANSFER_CODE,
        TOKEN_CODE,
        &token_hex[..18]
    )
}
