//! `diaryseal setup`: choose the passphrase, write the verification hash,
//! and print the derived key once.

use crate::archive::format::write_hash_artifact;
use crate::cli::output;
use crate::cli::{new_passphrase, Cli};
use crate::config::{Settings, ENV_FILE, KEY_VAR};
use crate::crypto;
use crate::errors::{DiarySealError, Result};

/// Execute the `setup` command.
pub fn execute(cli: &Cli, force: bool) -> Result<()> {
    let project_dir = &cli.project_dir;
    let settings = Settings::load(project_dir)?;
    let hash_path = settings.hash_path(project_dir);

    // 1. Refuse to silently replace an existing passphrase.
    if hash_path.exists() && !force {
        output::tip("Pass --force to replace it; the archive must then be rebuilt.");
        return Err(DiarySealError::ConfigError(format!(
            "a verification hash already exists at {}",
            hash_path.display()
        )));
    }

    // 2. Passphrase (with confirmation) and the two derivations.
    let passphrase = new_passphrase()?;
    let hash = crypto::verify_hash(&passphrase);
    let key = crypto::derive(&passphrase);

    // 3. The hash is public and committed with the site.
    write_hash_artifact(&hash_path, &hash)?;
    output::success(&format!("Verification hash written to {}", hash_path.display()));

    // 4. The key is shown once and never written to disk.
    output::success("Encryption key derived:");
    println!("{}", key.to_hex().as_str());
    drop(key);

    // 5. A local .env is where people paste the key; keep it out of git.
    crate::cli::gitignore::patch_gitignore(project_dir, ENV_FILE);

    output::tip(&format!(
        "Store the key above as the CI secret {KEY_VAR} (or in a local {ENV_FILE})."
    ));
    output::tip(&format!(
        "Commit {} so the viewer can check passphrases.",
        hash_path.display()
    ));
    output::tip("Run `diaryseal build` to encrypt your diary.");

    Ok(())
}
