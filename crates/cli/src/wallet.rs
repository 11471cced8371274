use std::path::PathBuf;

use waffle_sdk::solana_utils::{
    signer::{shared_signer, SignerRef},
    solana_sdk::signature::read_keypair_file,
};
use url::Url;

/// Parse url or path.
fn parse_url_or_path(source: &str) -> eyre::Result<Url> {
    let url = match Url::parse(source) {
        Ok(url) => url,
        Err(_) => {
            let path = shellexpand::tilde(source);
            let path: PathBuf = path.parse()?;
            let path = std::fs::canonicalize(path)?;
            Url::from_file_path(&path)
                .map_err(|_| eyre::eyre!("invalid wallet path: {}", path.display()))?
        }
    };

    Ok(url)
}

/// Load signer from a keypair path or a `file://` url.
pub fn signer_from_source(source: &str) -> eyre::Result<SignerRef> {
    let url = parse_url_or_path(source)?;

    match url.scheme() {
        "file" => {
            let keypair = read_keypair_file(url.path()).map_err(|err| eyre::eyre!("{err}"))?;
            Ok(shared_signer(keypair))
        }
        scheme => Err(eyre::eyre!("unsupported scheme: {scheme}")),
    }
}
