// src/core/sanitize.rs

/// Wallet name → safe file stem. Letters/digits kept (any script), whitespace runs
/// become one `_`, `-` and `_` kept, everything else dropped.
/// Falls back to `wallet` when nothing survives.
pub fn sanitize_wallet_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' || ch == '_' { if !(last_us && ch == '_') { out.push(ch); } last_us = ch == '_'; }
    }
    let out = s!(out.trim_matches('_'));
    if out.is_empty() { s!("wallet") } else { out }
}
