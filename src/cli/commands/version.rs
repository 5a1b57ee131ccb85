//! `diaryseal version`: display version and the archive protocol in use.

use console::style;

use crate::archive::FORMAT_VERSION;
use crate::crypto::{KDF_ITERATIONS, KEY_LEN};
use crate::errors::Result;

/// Execute the `version` command.
pub fn execute() -> Result<()> {
    let current = env!("CARGO_PKG_VERSION");
    println!("diaryseal {current}");
    println!(
        "{} v{FORMAT_VERSION}: PBKDF2-HMAC-SHA256 ({KDF_ITERATIONS} iterations, {}-bit key), AES-256-GCM",
        style("archive format").dim(),
        KEY_LEN * 8
    );
    Ok(())
}
