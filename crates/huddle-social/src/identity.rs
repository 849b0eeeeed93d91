use rand::Rng;
use serde::Deserialize;

/// Exclusive upper bound for the numeric suffix of generated nicknames.
const GUEST_SUFFIX_RANGE: u32 = 100_000;

/// A random nickname such as `OpenVidu_User4821`.
pub fn guest_nickname(prefix: &str) -> String {
    let suffix = rand::thread_rng().gen_range(0..GUEST_SUFFIX_RANGE);
    format!("{prefix}{suffix}")
}

#[derive(Deserialize)]
struct ClientData {
    #[serde(rename = "clientData")]
    client_data: String,
}

/// Nickname carried in a connection's data string.
///
/// The server appends its own data after a `%`, so only the text before the
/// first `%` belongs to the client. That text is normally
/// `{"clientData": "<nickname>"}`; anything else is used verbatim.
pub fn parse_nickname(connection_data: &str) -> String {
    let client_part = connection_data
        .split_once('%')
        .map_or(connection_data, |(head, _)| head);
    match serde_json::from_str::<ClientData>(client_part) {
        Ok(data) => data.client_data,
        Err(_) => {
            tracing::debug!(data = %client_part, "Connection data is not JSON, using raw nickname");
            client_part.to_string()
        }
    }
}

/// The connection data this client sends when connecting.
pub fn client_data(nickname: &str) -> String {
    serde_json::json!({ "clientData": nickname }).to_string()
}
