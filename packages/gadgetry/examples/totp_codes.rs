//! Print rolling TOTP codes for a demo secret.
//!
//! Stands in for the authenticator-display demos: same codes as a phone
//! authenticator app enrolled with the secret below.

use std::time::{SystemTime, UNIX_EPOCH};

use gadgetry::otp;

// RFC 6238 demo secret; enroll it in any authenticator app to compare.
const SECRET: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

fn main() {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock predates 1970")
        .as_secs();

    let code = otp::totp(SECRET, now, 6).expect("demo secret is valid base32");
    let remaining = otp::TOTP_PERIOD - now % otp::TOTP_PERIOD;

    println!("{code}  (valid for {remaining}s)");
}
