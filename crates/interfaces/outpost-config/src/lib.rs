//! Central configuration constants for timings, routes and fixed copy.

/// Default simulated transmission latency (milliseconds).
pub const DEFAULT_SEND_LATENCY_MS: u64 = 1_500;

/// Default time the success state is held before returning to idle (milliseconds).
pub const DEFAULT_SUCCESS_HOLD_MS: u64 = 3_000;

/// Upper bound for either delay. 60 s.
pub const MAX_DELAY_MS: u64 = 60_000;

/// Route the disclosure gate redirects to when the user opts to log in.
pub const LOGIN_ROUTE: &str = "/estimate/login";

pub const RESTRICTED_ACCESS_PROMPT: &str =
    "Restricted Access: Authentication Required. Proceed to Login?";

pub const LABEL_IDLE: &str = "Transmit Message";
pub const LABEL_SENDING: &str = "Encrypting & Sending...";
pub const LABEL_SUCCESS: &str = "Transmission Confirmed";

/// Footer shown under every disclosed spec sheet.
pub const WATERMARK_NOTICE: &str =
    "Note: This document is watermarked with your User ID for leak tracing.";
pub const LABEL_PRINT: &str = "Print Spec Sheet";

/// Clamp a configured delay into the allowed range.
pub fn clamp_delay_ms(v: u64) -> u64 {
    v.min(MAX_DELAY_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_caps_long_delays() {
        assert_eq!(clamp_delay_ms(DEFAULT_SEND_LATENCY_MS), 1_500);
        assert_eq!(clamp_delay_ms(u64::MAX), MAX_DELAY_MS);
        assert_eq!(clamp_delay_ms(0), 0);
    }
}
