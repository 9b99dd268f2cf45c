/// Network adapters for the Cisco openVuln API
mod credentials;
mod openvuln_client;

pub use credentials::{Credentials, CLIENT_ID_VAR, CLIENT_SECRET_VAR};
pub use openvuln_client::OpenVulnClient;
