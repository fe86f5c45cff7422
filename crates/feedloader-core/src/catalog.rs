use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Operation carried out on every entry of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Insert,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Insert => write!(f, "insert"),
            Method::Delete => write!(f, "delete"),
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "insert" => Ok(Method::Insert),
            "delete" => Ok(Method::Delete),
            other => Err(format!("unknown method \"{other}\" (expected insert or delete)")),
        }
    }
}

/// Sales channel the products are listed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Online,
    Local,
}

impl Channel {
    /// The wire value sent to the API (`"online"` / `"local"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Online => "online",
            Channel::Local => "local",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "online" => Ok(Channel::Online),
            "local" => Ok(Channel::Local),
            other => Err(format!("unknown channel \"{other}\" (expected online or local)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Method::Insert).unwrap(), "\"insert\"");
        assert_eq!(serde_json::to_string(&Method::Delete).unwrap(), "\"delete\"");
    }

    #[test]
    fn method_parses_case_insensitively() {
        assert_eq!("INSERT".parse::<Method>().unwrap(), Method::Insert);
        assert_eq!("delete".parse::<Method>().unwrap(), Method::Delete);
        assert!("upsert".parse::<Method>().is_err());
    }

    #[test]
    fn channel_round_trips_through_display() {
        for channel in [Channel::Online, Channel::Local] {
            assert_eq!(channel.to_string().parse::<Channel>().unwrap(), channel);
        }
    }

    #[test]
    fn channel_rejects_unknown_value() {
        let err = "store".parse::<Channel>().unwrap_err();
        assert!(err.contains("store"));
    }
}
