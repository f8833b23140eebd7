pub mod shapes;

use std::error::Error as StdError;

/// Code carried by a structured error when the requested item does not exist.
pub const NOT_FOUND_CODE: &str = "NotFound";

/// Prefix of the transport status indicator embedded in operation error text.
pub const STATUS_CODE_PREFIX: &str = "StatusCode: ";

/// Literal substring marking a 404-class transport response.
pub const NOT_FOUND_STATUS: &str = "StatusCode: 404";

/// Who is responsible for a failure.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Fault {
    Client,
    Server,
    #[default]
    Unknown,
}

/// An error exposing a stable code, a message and a fault classification.
pub trait StructuredError: StdError {
    fn code(&self) -> &str;

    fn fault(&self) -> Fault;

    fn message(&self) -> String {
        self.to_string()
    }
}

/// An error whose only reliable signal is a status indicator inside its rendered text.
pub trait OperationFailure: StdError {
    /// Full rendering, nested cause text included.
    fn rendered(&self) -> String {
        self.to_string()
    }

    /// Numeric status parsed from the `StatusCode: NNN` indicator, if present.
    fn status_code(&self) -> Option<u16> {
        let rendered = self.rendered();
        let (_, tail) = rendered.split_once(STATUS_CODE_PREFIX)?;
        let digits: String = tail.chars().take_while(char::is_ascii_digit).collect();
        digits.parse().ok()
    }

    fn is_not_found_status(&self) -> bool {
        self.rendered().contains(NOT_FOUND_STATUS)
    }
}

#[cfg(test)]
mod tests {
    use super::Fault;

    #[test]
    fn fault_roundtrip() {
        assert_eq!("client".parse::<Fault>().ok(), Some(Fault::Client));
        assert_eq!("server".parse::<Fault>().ok(), Some(Fault::Server));
        assert_eq!("unknown".parse::<Fault>().ok(), Some(Fault::Unknown));
        assert_eq!("Client".parse::<Fault>().ok(), None);
        assert_eq!(Fault::Server.to_string(), "server");
        assert_eq!(Fault::Client.as_ref(), "client");
    }

    #[test]
    fn fault_defaults_to_unknown() {
        assert_eq!(Fault::default(), Fault::Unknown);
    }

    #[test]
    fn fault_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Fault::Client).ok(), Some(serde_json::json!("client")));
        assert_eq!(serde_json::from_str::<Fault>("\"server\"").ok(), Some(Fault::Server));
    }
}
