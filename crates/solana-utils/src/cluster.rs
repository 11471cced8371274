use std::{fmt, str::FromStr};

use url::Url;

#[cfg(client)]
use solana_client::nonblocking::rpc_client::RpcClient;
#[cfg(client)]
use solana_sdk::commitment_config::CommitmentConfig;

use crate::Error;

/// Solana cluster to connect to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cluster {
    /// Testnet.
    Testnet,
    /// Mainnet Beta.
    Mainnet,
    /// Devnet.
    Devnet,
    /// A local test validator.
    #[default]
    Localnet,
    /// A custom RPC endpoint.
    Custom(String),
}

impl Cluster {
    /// Returns the RPC url.
    pub fn url(&self) -> &str {
        match self {
            Self::Devnet => "https://api.devnet.solana.com",
            Self::Testnet => "https://api.testnet.solana.com",
            Self::Mainnet => "https://api.mainnet-beta.solana.com",
            Self::Localnet => "http://127.0.0.1:8899",
            Self::Custom(url) => url,
        }
    }

    /// Create a nonblocking RPC client for this cluster.
    #[cfg(client)]
    pub fn rpc(&self, commitment: CommitmentConfig) -> RpcClient {
        RpcClient::new_with_commitment(self.url().to_string(), commitment)
    }

    fn custom(url: &str) -> crate::Result<Self> {
        let parsed = Url::parse(url)?;
        if parsed.host().is_none() {
            return Err(Error::ParseCluster("the url has no host"));
        }
        Ok(Self::Custom(url.to_string()))
    }
}

impl FromStr for Cluster {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "t" | "testnet" => Ok(Self::Testnet),
            "m" | "mainnet" => Ok(Self::Mainnet),
            "d" | "devnet" => Ok(Self::Devnet),
            "l" | "localnet" => Ok(Self::Localnet),
            url if url.starts_with("http") => Self::custom(s),
            _ => Err(Error::ParseCluster(
                "expected one of `mainnet`, `devnet`, `testnet`, `localnet` or an http(s) url",
            )),
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Testnet => "testnet",
            Self::Mainnet => "mainnet",
            Self::Devnet => "devnet",
            Self::Localnet => "localnet",
            Self::Custom(url) => url,
        };
        write!(f, "{name}")
    }
}

#[cfg(serde)]
impl serde::Serialize for Cluster {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(serde)]
impl<'de> serde::Deserialize<'de> for Cluster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_named_clusters() {
        assert_eq!("devnet".parse::<Cluster>().unwrap(), Cluster::Devnet);
        assert_eq!("Mainnet".parse::<Cluster>().unwrap(), Cluster::Mainnet);
        assert_eq!("l".parse::<Cluster>().unwrap(), Cluster::Localnet);
        assert!("moon".parse::<Cluster>().is_err());
    }

    #[test]
    fn parse_custom_cluster() {
        let cluster: Cluster = "http://127.0.0.1:8899".parse().unwrap();
        assert_eq!(cluster.url(), "http://127.0.0.1:8899");

        let cluster: Cluster = "https://rpc.example.com".parse().unwrap();
        assert_eq!(cluster, Cluster::Custom("https://rpc.example.com".to_string()));
        assert_eq!(cluster.to_string(), "https://rpc.example.com");

        assert!("http://".parse::<Cluster>().is_err());
        assert!("debug".parse::<Cluster>().is_err());
    }

    #[test]
    fn parse_custom_cluster_on_the_last_port() {
        let cluster: Cluster = "http://127.0.0.1:65535".parse().unwrap();
        assert_eq!(cluster.url(), "http://127.0.0.1:65535");
    }

    #[cfg(serde)]
    #[test]
    fn serde_as_string() {
        let json = serde_json::to_string(&Cluster::Devnet).unwrap();
        assert_eq!(json, r#""devnet""#);
        let cluster: Cluster = serde_json::from_str(r#""http://localhost:8899""#).unwrap();
        assert_eq!(cluster.url(), "http://localhost:8899");
    }
}
