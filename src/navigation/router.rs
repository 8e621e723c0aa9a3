use std::fmt;

use thiserror::Error;

use crate::navigation::destination::{Destination, DestinationKind};

/// Errors produced while decoding a route token.
///
/// Every variant means the caller handed over a token this build never
/// produced. There is no fallback destination.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Route token is not a valid route '{token}': {source}")]
    Malformed {
        token: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Route token has no destination kind: '{token}'")]
    MissingKind { token: String },

    #[error("Unknown destination '{kind}'")]
    UnknownDestination { kind: String },
}

/// Serialized form of a [`Destination`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteToken(String);

impl RouteToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RouteToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Encode a destination as a route token.
pub fn encode(destination: &Destination) -> RouteToken {
    // A fieldless or string-only enum always serializes.
    let json = serde_json::to_string(destination).unwrap_or_default();
    RouteToken(json)
}

/// Decode a route token produced by [`encode`].
pub fn decode(token: &str) -> Result<Destination, RouteError> {
    let value: serde_json::Value =
        serde_json::from_str(token).map_err(|source| RouteError::Malformed {
            token: token.to_string(),
            source,
        })?;

    let kind = value
        .get("route")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| RouteError::MissingKind {
            token: token.to_string(),
        })?;

    if DestinationKind::parse(kind).is_none() {
        tracing::error!(kind, "route token names an unknown destination");
        return Err(RouteError::UnknownDestination {
            kind: kind.to_string(),
        });
    }

    serde_json::from_value(value).map_err(|source| RouteError::Malformed {
        token: token.to_string(),
        source,
    })
}

/// True if `current` is any of `kinds`. Payloads are not compared.
pub fn matches(current: &Destination, kinds: &[DestinationKind]) -> bool {
    kinds.contains(&current.kind())
}
