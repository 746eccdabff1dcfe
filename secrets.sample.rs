// Copy this file to secrets.rs in the crate root and fill in your
// credentials. secrets.rs is gitignored so real values stay out of
// version control; without it the build uses these placeholders.

pub const WIFI_SSID: &str = "YourWiFiSSID";
pub const WIFI_PASS: &str = "YourWiFiPassword";

// Shared secret for webhook requests. Leave empty to disable auth.
pub const WEBHOOK_TOKEN: &str = "";
