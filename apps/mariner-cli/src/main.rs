//! # mariner
//!
//! Back-office command line for amounts in words, GST/TDS totals and
//! vouchers.
//!
//! ```text
//! $ mariner words 12345678
//! One Crore Twenty Three Lakh Forty Five Thousand Six Hundred Seventy Eight Rupees Only
//!
//! $ mariner totals 16949.15 --gst
//! Base                          ₹16,949.15
//! + CGST                         ₹1,525.42
//! + SGST                         ₹1,525.42
//! ────────────────────────────────────────
//! Net                           ₹19,999.99
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // Setup lives in lib.rs for testability
    mariner_cli::run()
}
