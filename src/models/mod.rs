pub mod article;
pub mod envelope;
pub mod request;
pub mod trade;

pub use article::{PriorNewsArticle, PriorNewsRow};
pub use envelope::{PriorNewsResponse, TradedNewsResponse};
pub use request::{ContextRequest, ContextRequestBody};
pub use trade::TradedNewsTrade;

/// Values of `trading_decisions.decision`.
pub mod decision {
    pub const TRADE: &str = "TRADE";
    pub const NO_TRADE: &str = "NO_TRADE";
}

/// Values of `order_fills.order_leg`.
pub mod order_leg {
    pub const ENTRY: &str = "entry";
    pub const EXIT: &str = "exit";
}
