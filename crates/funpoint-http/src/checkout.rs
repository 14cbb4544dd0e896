//! Auto-submitting checkout form rendering
//!
//! The outbound leg of the scheme is a browser redirect: the merchant
//! answers its own checkout route with an HTML page whose only content is
//! a hidden-input form POSTing the signed parameter set to the gateway,
//! submitted by script on load.

use funpoint_core::ParameterSet;

/// Render the auto-submitting checkout form
///
/// `params` should already carry its `CheckMacValue`; this function only
/// renders, it does not sign. Field order inside the form is arbitrary -
/// the gateway reads named fields, and the canonical order is derived
/// server-side during verification anyway.
///
/// # Example
///
/// ```rust
/// use funpoint_core::ParameterSet;
/// use funpoint_http::render_checkout_form;
///
/// let params: ParameterSet = [("MerchantID", "1000031")].into_iter().collect();
/// let html = render_checkout_form("https://gateway.example/Cashier/AioCheckOut/V5", &params);
///
/// assert!(html.contains(r#"name="MerchantID" value="1000031""#));
/// assert!(html.contains("submit()"));
/// ```
pub fn render_checkout_form(action_url: &str, params: &ParameterSet) -> String {
    let mut fields = String::new();
    for (key, value) in params.iter() {
        fields.push_str(&format!(
            r#"<input type="hidden" name="{}" value="{}">"#,
            escape_attribute(key),
            escape_attribute(value)
        ));
    }

    format!(
        concat!(
            "<html><body>",
            r#"<form id="checkout" method="POST" action="{}">{}</form>"#,
            r#"<script>document.getElementById("checkout").submit();</script>"#,
            "</body></html>"
        ),
        escape_attribute(action_url),
        fields
    )
}

/// Escape a string for use inside a double-quoted HTML attribute
fn escape_attribute(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_posts_to_action_url() {
        let params = ParameterSet::new();
        let html = render_checkout_form("https://gateway.example/checkout", &params);

        assert!(html.contains(r#"method="POST""#));
        assert!(html.contains(r#"action="https://gateway.example/checkout""#));
    }

    #[test]
    fn test_every_parameter_becomes_a_hidden_input() {
        let params: ParameterSet = [("MerchantID", "1000031"), ("TotalAmount", "100")]
            .into_iter()
            .collect();
        let html = render_checkout_form("https://gateway.example", &params);

        assert!(html.contains(r#"name="MerchantID" value="1000031""#));
        assert!(html.contains(r#"name="TotalAmount" value="100""#));
    }

    #[test]
    fn test_attribute_values_escaped() {
        let params: ParameterSet = [("ItemName", r#"A "B" & <C>"#)].into_iter().collect();
        let html = render_checkout_form("https://gateway.example", &params);

        assert!(html.contains("A &quot;B&quot; &amp; &lt;C&gt;"));
        assert!(!html.contains(r#"value="A "B""#));
    }

    #[test]
    fn test_form_auto_submits() {
        let html = render_checkout_form("https://gateway.example", &ParameterSet::new());
        assert!(html.contains(r#"document.getElementById("checkout").submit()"#));
    }
}
