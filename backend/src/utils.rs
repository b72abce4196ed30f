/// Shorten an address for logs and table display: first 8 and last 8 chars.
/// Short strings are returned unchanged.
pub fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 16 {
        return address.to_string();
    }

    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 8..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Check that a string is a well-formed Solana pubkey: base58 text that
/// decodes to exactly 32 bytes.
pub fn is_valid_pubkey(address: &str) -> bool {
    bs58::decode(address)
        .into_vec()
        .map(|bytes| bytes.len() == 32)
        .unwrap_or(false)
}

/// Explorer URL for an address on the given cluster (devnet, testnet, mainnet).
pub fn explorer_url(cluster: &str, address: &str) -> String {
    match cluster {
        "mainnet" => format!("https://explorer.solana.com/address/{}", address),
        _ => format!(
            "https://explorer.solana.com/address/{}?cluster={}",
            address, cluster
        ),
    }
}
