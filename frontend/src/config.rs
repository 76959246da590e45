#[cfg(debug_assertions)]
pub fn get_newsletter_url() -> &'static str {
    "http://localhost:3001/api/newsletter"  // Subscription service when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_newsletter_url() -> &'static str {
    "/api/newsletter"  // Same-origin in production
}

/// Success and failure notices under the newsletter form clear themselves after this.
pub const NOTICE_DISMISS_MS: u32 = 6_000;
