use crate::domain::selection::Selection;
use rust_decimal::Decimal;
use thiserror::Error;

/// Failures raised while turning a serialized catalog into an inventory.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("resource not found: {name}.{kind}")]
    ResourceNotFound { name: String, kind: String },
    #[error("malformed content: {0}")]
    MalformedContent(String),
    #[error("unknown selection: {0}")]
    UnknownSelection(String),
    #[error("unsupported resource type: {0}")]
    UnsupportedFormat(String),
    #[error("duplicate selection '{key}': {selection} is already stocked")]
    DuplicateSelection { key: String, selection: Selection },
    #[error("malformed entry '{key}': {reason}")]
    MalformedEntry { key: String, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<plist::Error> for LoadError {
    fn from(err: plist::Error) -> Self {
        LoadError::MalformedContent(err.to_string())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::MalformedContent(err.to_string())
    }
}

/// Failures raised by the vending ledger. None of them mutate machine state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VendingError {
    #[error("invalid selection: {0}")]
    InvalidSelection(Selection),
    #[error("out of stock: {selection} (requested {requested}, available {available})")]
    OutOfStock {
        selection: Selection,
        requested: u32,
        available: u32,
    },
    #[error("insufficient funds: {required} more required")]
    InsufficientFunds { required: Decimal },
    #[error("invalid amount: {0}")]
    InvalidAmount(Decimal),
    #[error("quantity must be positive")]
    InvalidQuantity,
    #[error("price of {quantity} x {selection} exceeds the representable range")]
    PriceOverflow { selection: Selection, quantity: u32 },
    #[error("deposit of {0} would overflow the balance")]
    BalanceOverflow(Decimal),
    #[error("invalid order: {0}")]
    InvalidOrder(String),
}

pub type Result<T, E = VendingError> = std::result::Result<T, E>;
