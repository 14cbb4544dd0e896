//! Merchant demo handlers

use crate::GatewayConfig;
use axum::extract::State;
use axum::response::Html;
use chrono::Local;
use funpoint_core::{CheckoutOrder, ChoosePayment, PeriodSettings, PeriodType, TradeNotification};
use funpoint_http::{render_checkout_form, CallbackAck, CallbackForm};
use funpoint_mac::{signed, verify};
use std::sync::Arc;

/// Merchant-side order number: timestamp plus a random suffix.
/// Uniqueness within the test window is the only requirement.
fn order_no(prefix: &str) -> String {
    let stamp = Local::now().format("%y%m%d%H%M%S");
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("{prefix}{stamp}{}", &suffix[..4])
}

fn base_order(config: &GatewayConfig, prefix: &str, amount: u64) -> CheckoutOrder {
    CheckoutOrder {
        merchant_id: config.merchant_id.clone(),
        merchant_trade_no: order_no(prefix),
        merchant_trade_date: Local::now().format("%Y/%m/%d %H:%M:%S").to_string(),
        total_amount: amount,
        trade_desc: "Test Payment".to_string(),
        item_name: "Test Item".to_string(),
        return_url: format!("{}/notify", config.base_url),
        order_result_url: Some(format!("{}/result", config.base_url)),
        choose_payment: ChoosePayment::Credit,
        period: None,
    }
}

/// One-off checkout: sign the order and redirect the browser to the
/// gateway via an auto-submitting form
pub async fn pay(State(config): State<Arc<GatewayConfig>>) -> Html<String> {
    let order = base_order(&config, "T", 100);
    tracing::info!(trade_no = %order.merchant_trade_no, "Creating checkout");

    let params = signed(&order.to_params(), &config.secrets);
    Html(render_checkout_form(&config.checkout_url, &params))
}

/// Recurring checkout: monthly plan, twelve charges
pub async fn pay_recurring(State(config): State<Arc<GatewayConfig>>) -> Html<String> {
    let mut order = base_order(&config, "R", 299);
    order.trade_desc = "Recurring Test".to_string();
    order.item_name = "Monthly Plan".to_string();
    order.period = Some(PeriodSettings {
        period_amount: 299,
        period_type: PeriodType::Month,
        frequency: 1,
        exec_times: 12,
        period_return_url: format!("{}/period-notify", config.base_url),
    });
    tracing::info!(trade_no = %order.merchant_trade_no, "Creating recurring checkout");

    let params = signed(&order.to_params(), &config.secrets);
    Html(render_checkout_form(&config.checkout_url, &params))
}

/// Payment notification callback
pub async fn notify(
    State(config): State<Arc<GatewayConfig>>,
    CallbackForm(params): CallbackForm,
) -> CallbackAck {
    if !verify(&params, &config.secrets) {
        tracing::warn!("Rejected notification with bad CheckMacValue");
        return CallbackAck::MacError;
    }

    let notification = TradeNotification::new(&params);
    if notification.is_paid() {
        tracing::info!(
            trade_no = %notification.merchant_trade_no(),
            "Payment succeeded"
        );
    } else {
        tracing::warn!(
            trade_no = %notification.merchant_trade_no(),
            reason = %notification.rtn_msg(),
            "Payment failed"
        );
    }

    CallbackAck::Ok
}

/// Recurring-charge notification callback
pub async fn period_notify(
    State(config): State<Arc<GatewayConfig>>,
    CallbackForm(params): CallbackForm,
) -> CallbackAck {
    if !verify(&params, &config.secrets) {
        tracing::warn!("Rejected period notification with bad CheckMacValue");
        return CallbackAck::MacError;
    }

    let notification = TradeNotification::new(&params);
    tracing::info!(
        trade_no = %notification.merchant_trade_no(),
        times = %notification.total_success_times(),
        "Recurring charge"
    );

    CallbackAck::Ok
}

/// Browser-facing result page
///
/// The gateway POSTs the browser back here; this page is cosmetic, so no
/// verification outcome is surfaced beyond the paid/unpaid message.
pub async fn result(CallbackForm(params): CallbackForm) -> Html<String> {
    let paid = TradeNotification::new(&params).is_paid();
    let (message, color) = if paid {
        ("Payment OK!", "#22c55e")
    } else {
        ("Payment incomplete", "#ef4444")
    };

    Html(format!(
        concat!(
            r#"<html><body style="display:flex;align-items:center;"#,
            r#"justify-content:center;height:100vh">"#,
            r#"<h1 style="color:{}">{}</h1></body></html>"#
        ),
        color, message
    ))
}
