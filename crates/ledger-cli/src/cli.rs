//! Subcommand surface for the operator CLI, translated from
//! `cli/workflow/cli.py`'s `argparse` parsers to `clap` derive, in the
//! style of `ethrex`'s `CLI`/`Subcommand` split.

use clap::{Parser, Subcommand};
use ledger_types::{Attribute, BalanceAttribute, TokenStatus};

/// Operator CLI for the asset registry transaction processor.
#[derive(Parser, Debug)]
#[command(name = "ledger-cli")]
#[command(about = "Submit transactions to a ledger-gateway instance")]
pub struct Cli {
    /// Public key this transaction is signed by.
    #[arg(short, long)]
    pub signer: String,

    /// Gateway base URL. Defaults to `LEDGER_CLI_URL` or `http://127.0.0.1:8080`.
    #[arg(long)]
    pub url: Option<String>,

    /// Seconds to poll batch status for before giving up.
    #[arg(long)]
    pub wait: Option<u64>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// One subcommand per payload variant the core accepts, plus a handful
/// of client-side wrappers around operations `cli.py` never exposed a
/// flag for.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register the first (and only) Manager account.
    SetManager {
        /// Display name for the new Manager account.
        #[arg(long)]
        name: String,
    },
    /// Register the first (and only) Issuer account.
    SetIssuer {
        /// Display name for the new Issuer account.
        #[arg(long)]
        name: String,
    },
    /// Register a new account for the signer.
    SetAccount {
        /// Display name for the new account.
        #[arg(long)]
        name: String,
    },
    /// Replace a target account's endorsement list. Manager-only.
    SetEndorsement {
        /// Public key of the account to endorse/restrict.
        #[arg(long)]
        public_key: String,
        /// Endorsement tag keys, comma-separated (e.g. `blacklist,whitelist`).
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },
    /// Append immutable attributes to a token. Manager-only.
    AddImmutable {
        /// Token identifier.
        #[arg(long)]
        identifier: String,
        /// Immutable tag keys, comma-separated.
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },
    /// Issue a new token. Manager-only.
    IssueToken {
        /// Token identifier.
        #[arg(long)]
        identifier: String,
        /// Total supply at issue.
        #[arg(long)]
        total_supply: f64,
    },
    /// Flip a token's ACTIVE/INACTIVE status. Manager-only.
    SetTokenStatus {
        /// Token identifier.
        #[arg(long)]
        identifier: String,
        /// `active` or `inactive`.
        #[arg(long)]
        status: String,
    },
    /// Move units of a token from the signer to a receiver.
    Transfer {
        /// Token identifier.
        #[arg(long)]
        identifier: String,
        /// Amount to move.
        #[arg(long)]
        total_supply: f64,
        /// Receiving account's public key.
        #[arg(long)]
        receiver_pkey: String,
        /// Decimal seconds-since-epoch timestamp.
        #[arg(long)]
        timestamp: String,
    },
    /// Pay out a scheduled Cash Token distribution to a token's holders.
    Heartbeat {
        /// Token whose holders are paid.
        #[arg(long)]
        identifier: String,
        /// Decimal seconds-since-epoch timestamp; matched against the
        /// token's `payments` schedule by calendar date.
        #[arg(long)]
        date: String,
        /// Public keys of the holders to pay, comma-separated.
        #[arg(long, value_delimiter = ',')]
        receivers_pkey: Vec<String>,
    },
    /// Replace a balance's attribute list wholesale.
    SetBalanceAttributes {
        /// Owning account's public key.
        #[arg(long)]
        owner_pkey: String,
        /// Token identifiers whose balances get the new attributes.
        #[arg(long, value_delimiter = ',')]
        identifiers: Vec<String>,
        /// `key=value` pairs, comma-separated.
        #[arg(long, value_delimiter = ',')]
        attributes: Vec<String>,
    },
}

impl Command {
    /// Translate the parsed subcommand into the wire [`Payload`] the
    /// processor understands.
    pub fn into_payload(self) -> Result<ledger_core::ports::inbound::Payload, String> {
        use ledger_core::ports::inbound::*;
        use Command::*;

        Ok(match self {
            SetManager { name } => Payload::SetManager(SetManagerBody {
                name,
                endorsement: vec![],
            }),
            SetIssuer { name } => Payload::SetIssuer(SetIssuerBody {
                name,
                endorsement: vec![],
            }),
            SetAccount { name } => Payload::SetAccount(SetAccountBody {
                name,
                endorsement: vec![],
            }),
            SetEndorsement { public_key, tags } => Payload::SetEndorsement(SetEndorsementBody {
                public_key,
                endorsement: tags.into_iter().map(Attribute::flag).collect(),
            }),
            AddImmutable { identifier, tags } => Payload::AddImmutable(AddImmutableBody {
                name: identifier,
                immutables: tags.into_iter().map(Attribute::flag).collect(),
            }),
            IssueToken {
                identifier,
                total_supply,
            } => Payload::IssueToken(IssueTokenBody {
                name: identifier,
                total_supply,
                attributes: vec![],
            }),
            SetTokenStatus { identifier, status } => {
                let status = match status.to_lowercase().as_str() {
                    "active" => TokenStatus::Active,
                    "inactive" => TokenStatus::Inactive,
                    other => return Err(format!("unknown token status: {other}")),
                };
                Payload::SetTokenStatus(SetTokenStatusBody {
                    name: identifier,
                    status,
                })
            }
            Transfer {
                identifier,
                total_supply,
                receiver_pkey,
                timestamp,
            } => Payload::Transfer(TransferBody {
                receiver_pkey,
                asset: ledger_types::AssetAmount {
                    name: identifier,
                    total_supply,
                },
                timestamp,
            }),
            Heartbeat {
                identifier,
                date,
                receivers_pkey,
            } => Payload::Heartbeat(HeartbeatBody {
                token_name: identifier,
                date,
                receivers_pkey,
            }),
            SetBalanceAttributes {
                owner_pkey,
                identifiers,
                attributes,
            } => {
                let attributes = attributes
                    .into_iter()
                    .map(|pair| {
                        let (key, value) = pair
                            .split_once('=')
                            .ok_or_else(|| format!("expected key=value, got: {pair}"))?;
                        Ok(BalanceAttribute {
                            key: key.to_string(),
                            value: value.to_string(),
                        })
                    })
                    .collect::<Result<Vec<_>, String>>()?;
                Payload::SetBalanceAttributes(SetBalanceAttributesBody {
                    owner_pkey,
                    identifiers,
                    attributes,
                })
            }
        })
    }
}
