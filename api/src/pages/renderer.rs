//! Page renderer
//!
//! Renders catalog pages to HTML. Every value that came from the store or
//! the request is escaped.

use crate::domain::entities::ProductWithCategory;

const APP_NAME: &str = "Catalog";

/// Render the home page with the featured products
pub fn render_home(products: &[ProductWithCategory]) -> String {
    let mut buf = String::new();

    buf.push_str("<h1>Welcome</h1>\n");
    buf.push_str("<p>Browse a selection of our products.</p>\n");

    if products.is_empty() {
        buf.push_str("<p><em>No products available.</em></p>\n");
    } else {
        buf.push_str("<div class=\"products\">\n");
        for product in products {
            buf.push_str(&render_product_card(product));
        }
        buf.push_str("</div>\n");
    }

    render_layout("Home", &buf)
}

fn render_product_card(item: &ProductWithCategory) -> String {
    let mut buf = String::new();

    buf.push_str("<div class=\"product\">\n");
    buf.push_str(&format!("<h2>{}</h2>\n", escape(&item.product.name)));
    if let Some(description) = &item.product.description {
        buf.push_str(&format!("<p>{}</p>\n", escape(description)));
    }
    buf.push_str(&format!(
        "<p class=\"category\">{}</p>\n",
        escape(&item.category.name)
    ));
    buf.push_str(&format!(
        "<p class=\"price\">${:.2}</p>\n",
        item.product.price
    ));
    buf.push_str("</div>\n");

    buf
}

/// Render the privacy notice
pub fn render_privacy() -> String {
    render_layout(
        "Privacy Policy",
        "<h1>Privacy Policy</h1>\n\
         <p>This site does not collect personal data. Requests are logged with a \
         correlation id for troubleshooting only.</p>\n",
    )
}

/// Render the about page
pub fn render_about(environment: &str) -> String {
    let body = format!(
        "<h1>About</h1>\n\
         <p>{} - a small product catalog with a read-only JSON API.</p>\n\
         <p>Environment: {}</p>\n",
        APP_NAME,
        escape(environment)
    );
    render_layout("About", &body)
}

/// Render the error page, showing the request id when one is known
pub fn render_error(request_id: Option<&str>) -> String {
    let mut buf = String::new();

    buf.push_str("<h1 class=\"text-danger\">Error.</h1>\n");
    buf.push_str("<h2 class=\"text-danger\">An error occurred while processing your request.</h2>\n");

    if let Some(id) = request_id.filter(|id| !id.is_empty()) {
        buf.push_str(&format!(
            "<p><strong>Request ID:</strong> <code>{}</code></p>\n",
            escape(id)
        ));
    }

    render_layout("Error", &buf)
}

fn render_layout(title: &str, body: &str) -> String {
    let mut buf = String::new();

    buf.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    buf.push_str("<meta charset=\"utf-8\">\n");
    buf.push_str(&format!(
        "<title>{} - {}</title>\n",
        escape(title),
        APP_NAME
    ));
    buf.push_str("</head>\n<body>\n");
    buf.push_str("<nav><a href=\"/\">Home</a> | <a href=\"/privacy\">Privacy</a> | <a href=\"/about\">About</a></nav>\n");
    buf.push_str("<main>\n");
    buf.push_str(body);
    buf.push_str("</main>\n</body>\n</html>\n");

    buf
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
