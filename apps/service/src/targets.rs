//! The fixed roster of monitored components.
//!
//! One entry per status-page component: the gateway's own health endpoint
//! plus one balance query per blockchain node behind it. The roster is
//! static; changing it means changing this file.

use statuswatch::{Config, HttpHealthProbe, MonitoredTarget, ProbeError, RpcBalanceProbe};

const COMPONENT_GATEWAY: &str = "knx5j6jqnj4m";
const COMPONENT_BTC_MAINNET: &str = "gt7wggppkbz4";
const COMPONENT_BTC_TESTNET: &str = "cv00yh62ygyc";
const COMPONENT_ZEC_MAINNET: &str = "9jp5x719zygv";
const COMPONENT_ZEC_TESTNET: &str = "39dt0h6m6x89";
const COMPONENT_BCH_MAINNET: &str = "n8r9thyjqkbr";
const COMPONENT_BCH_TESTNET: &str = "jslmxxp7sbrg";

/// Addresses with a known history on each chain, so `listunspent` is a
/// meaningful liveness query.
const NODES: [(&str, &str, &str); 6] = [
    (COMPONENT_BTC_MAINNET, "/btc/mainnet", "1D4NXvNvjucShZeyLsDzYz1ky2W8gYKQH7"),
    (COMPONENT_BTC_TESTNET, "/btc/testnet", "n4Vyt86t8bLyTogPBNHcP7qKgJbQHXjwTJ"),
    (COMPONENT_ZEC_MAINNET, "/zec/mainnet", "t1VvyYFo4iEQ3JChsHJ37go7gDghDTGVhnu"),
    (COMPONENT_ZEC_TESTNET, "/zec/testnet", "tmYsPB3SxYL6sRZhSYdYaJJSHnPguWPDQe2"),
    (COMPONENT_BCH_MAINNET, "/bch/mainnet", "qzzyfwmnz3dlld7svwzn53xzr6ycz5kwavpd9uqf4l"),
    (COMPONENT_BCH_TESTNET, "/bch/testnet", "qpn37uz8sqctxem3tfxayz09pr8w358hl5pvhd4twx"),
];

/// Build the full target set against the configured gateway base URL.
pub fn build(config: &Config) -> Result<Vec<MonitoredTarget>, ProbeError> {
    let base = config.base_url.as_str();

    let mut targets = vec![MonitoredTarget::new(
        COMPONENT_GATEWAY,
        Box::new(HttpHealthProbe::new(base)?),
    )];

    for (component_id, path, address) in NODES {
        targets.push(MonitoredTarget::new(
            component_id,
            Box::new(RpcBalanceProbe::new(base, path, address)?),
        ));
    }

    Ok(targets)
}
