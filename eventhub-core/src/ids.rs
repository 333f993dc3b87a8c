//! String identifiers for events, organizers and users.
//!
//! The hosted backend keys every table by UUID text, so identifiers are thin
//! wrappers over `String` that keep the three namespaces apart at compile
//! time.
//!
//! # Examples
//! ```
//! use eventhub_core::{OrganizerId, UserId};
//!
//! let organizer = OrganizerId::from("org-1");
//! assert_eq!(organizer.as_str(), "org-1");
//! assert_eq!(UserId::new("user-7").to_string(), "user-7");
//! ```

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier.
            #[must_use]
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Borrow the raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Report whether the identifier is empty or whitespace.
            #[must_use]
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::new(raw)
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of an event record.
    EventId
);
string_id!(
    /// Identifier of an organizer account.
    OrganizerId
);
string_id!(
    /// Identifier of the user requesting recommendations.
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", true)]
    #[case("   ", true)]
    #[case("user-1", false)]
    fn blank_detection(#[case] raw: &str, #[case] blank: bool) {
        assert_eq!(UserId::from(raw).is_blank(), blank);
    }

    #[rstest]
    fn display_matches_raw_value() {
        let id = EventId::new(String::from("evt-9"));
        assert_eq!(id.to_string(), id.as_str());
    }
}
