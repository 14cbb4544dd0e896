//! Typed checkout orders and callback notification views
//!
//! The gateway itself speaks flat string parameters; these types exist so
//! merchant code builds outbound orders and reads inbound notifications
//! through named fields instead of raw map lookups.

use crate::params::ParameterSet;

/// Payment methods offered on the gateway's checkout page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoosePayment {
    /// Credit card (also used for recurring charges)
    Credit,
    /// Web ATM transfer
    WebAtm,
    /// Virtual ATM account
    Atm,
    /// Convenience store code
    Cvs,
    /// Let the customer pick on the checkout page
    All,
}

impl ChoosePayment {
    /// Wire value for the `ChoosePayment` field
    pub fn as_str(&self) -> &'static str {
        match self {
            ChoosePayment::Credit => "Credit",
            ChoosePayment::WebAtm => "WebATM",
            ChoosePayment::Atm => "ATM",
            ChoosePayment::Cvs => "CVS",
            ChoosePayment::All => "ALL",
        }
    }
}

/// Interval unit for recurring charges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodType {
    Day,
    Month,
    Year,
}

impl PeriodType {
    /// Wire value for the `PeriodType` field
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Day => "D",
            PeriodType::Month => "M",
            PeriodType::Year => "Y",
        }
    }
}

/// Recurring-charge settings attached to a [`CheckoutOrder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSettings {
    /// Amount charged per period
    pub period_amount: u64,
    /// Interval unit
    pub period_type: PeriodType,
    /// Charge every `frequency` units
    pub frequency: u32,
    /// Total number of charges
    pub exec_times: u32,
    /// URL notified after each periodic charge
    pub period_return_url: String,
}

/// An outbound AIO checkout order
///
/// Converts to the flat [`ParameterSet`] the gateway expects via
/// [`CheckoutOrder::to_params`]; the caller signs that set and renders it
/// as an auto-submitting form. `PaymentType` and `EncryptType` are fixed by
/// the protocol version and filled in automatically.
///
/// # Example
///
/// ```rust
/// use funpoint_core::{CheckoutOrder, ChoosePayment};
///
/// let order = CheckoutOrder {
///     merchant_id: "1000031".to_string(),
///     merchant_trade_no: "T260101120000abcd".to_string(),
///     merchant_trade_date: "2026/01/01 12:00:00".to_string(),
///     total_amount: 100,
///     trade_desc: "Test Payment".to_string(),
///     item_name: "Test Item".to_string(),
///     return_url: "https://your-domain.com/notify".to_string(),
///     order_result_url: Some("https://your-domain.com/result".to_string()),
///     choose_payment: ChoosePayment::Credit,
///     period: None,
/// };
///
/// let params = order.to_params();
/// assert_eq!(params.get("PaymentType"), Some("aio"));
/// assert_eq!(params.get("TotalAmount"), Some("100"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOrder {
    /// Merchant identifier issued by the gateway
    pub merchant_id: String,
    /// Merchant-side order number; must be unique per trade
    pub merchant_trade_no: String,
    /// Order timestamp, formatted `YYYY/MM/dd HH:mm:ss`
    pub merchant_trade_date: String,
    /// Total amount in whole currency units
    pub total_amount: u64,
    /// Free-text trade description shown to the customer
    pub trade_desc: String,
    /// Item name shown on the checkout page
    pub item_name: String,
    /// Server-to-server notification URL (`ReturnURL`)
    pub return_url: String,
    /// Browser-facing result URL (`OrderResultURL`), if any
    pub order_result_url: Option<String>,
    /// Payment method offered on the checkout page
    pub choose_payment: ChoosePayment,
    /// Recurring-charge settings, if this is a subscription order
    pub period: Option<PeriodSettings>,
}

impl CheckoutOrder {
    /// Flatten the order into the parameter set the gateway expects
    ///
    /// The result does not carry a `CheckMacValue` yet; signing attaches it.
    pub fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params.insert("MerchantID", self.merchant_id.clone());
        params.insert("MerchantTradeNo", self.merchant_trade_no.clone());
        params.insert("MerchantTradeDate", self.merchant_trade_date.clone());
        params.insert("PaymentType", "aio");
        params.insert("TotalAmount", self.total_amount.to_string());
        params.insert("TradeDesc", self.trade_desc.clone());
        params.insert("ItemName", self.item_name.clone());
        params.insert("ReturnURL", self.return_url.clone());
        params.insert("ChoosePayment", self.choose_payment.as_str());
        params.insert("EncryptType", "1");

        if let Some(url) = &self.order_result_url {
            params.insert("OrderResultURL", url.clone());
        }

        if let Some(period) = &self.period {
            params.insert("PeriodAmount", period.period_amount.to_string());
            params.insert("PeriodType", period.period_type.as_str());
            params.insert("Frequency", period.frequency.to_string());
            params.insert("ExecTimes", period.exec_times.to_string());
            params.insert("PeriodReturnURL", period.period_return_url.clone());
        }

        params
    }
}

/// Read-only view over a verified callback parameter set
///
/// The gateway reports trade outcomes through `Rtn*` fields; this wrapper
/// names the ones merchants branch on. Construct it only after [`verify`]
/// returned true - the view itself does no authentication.
///
/// [`verify`]: https://docs.rs/funpoint-mac
#[derive(Debug, Clone, Copy)]
pub struct TradeNotification<'a> {
    params: &'a ParameterSet,
}

impl<'a> TradeNotification<'a> {
    /// Wrap a callback parameter set
    pub fn new(params: &'a ParameterSet) -> Self {
        Self { params }
    }

    /// Gateway return code; `"1"` means the trade succeeded
    pub fn rtn_code(&self) -> &str {
        self.params.get("RtnCode").unwrap_or("")
    }

    /// Human-readable return message
    pub fn rtn_msg(&self) -> &str {
        self.params.get("RtnMsg").unwrap_or("")
    }

    /// Merchant-side order number echoed back by the gateway
    pub fn merchant_trade_no(&self) -> &str {
        self.params.get("MerchantTradeNo").unwrap_or("")
    }

    /// Gateway-side trade number
    pub fn trade_no(&self) -> &str {
        self.params.get("TradeNo").unwrap_or("")
    }

    /// Successful charge count so far, for recurring trades
    pub fn total_success_times(&self) -> &str {
        self.params.get("TotalSuccessTimes").unwrap_or("")
    }

    /// Whether the gateway reports the trade as paid
    pub fn is_paid(&self) -> bool {
        self.rtn_code() == "1"
    }
}
