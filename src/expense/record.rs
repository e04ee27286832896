//! The expense record as returned by the remote expense API.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};

/// The identifier the remote API assigns to an expense when it is created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Create an expense ID from the raw identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The identifier of a user of the remote expense API.
///
/// The value is opaque to this application: it is received on log-in and
/// handed back to the API when fetching or creating expenses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a user ID from the raw identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single expense belonging to a user.
///
/// The amount is kept as the text the API sent and is only parsed when
/// filtering or totalling, see [ExpenseRecord::parsed_amount]. Missing, null
/// or oddly typed fields deserialize to empty strings rather than failing the
/// whole list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// The ID assigned by the remote API.
    #[serde(rename = "_id", default, deserialize_with = "lenient_text::expense_id")]
    pub id: ExpenseId,

    /// The user that owns the expense.
    #[serde(rename = "userId", default, deserialize_with = "lenient_text::user_id")]
    pub owner_id: UserId,

    /// The amount of the expense in dollars, as text.
    #[serde(default, deserialize_with = "lenient_text::deserialize")]
    pub amount: String,

    /// A free-text label for the expense.
    #[serde(default, deserialize_with = "lenient_text::deserialize")]
    pub category: String,
}

impl ExpenseRecord {
    /// The amount as a finite number, or `None` if the text is not a number.
    pub fn parsed_amount(&self) -> Option<f64> {
        parse_amount(&self.amount)
    }
}

/// Parse `text` as a finite decimal number, ignoring surrounding whitespace.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

mod lenient_text {
    //! The API stores amounts as numbers but the client sends them as text,
    //! so a record may contain either. Strings and numbers are kept as text,
    //! anything else becomes an empty string.
    use super::*;

    struct LenientTextVisitor;

    impl<'de> de::Visitor<'de> for LenientTextVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("any JSON value")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(value.to_owned())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }

        fn visit_bool<E: de::Error>(self, _value: bool) -> Result<Self::Value, E> {
            Ok(String::new())
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(String::new())
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
            deserializer.deserialize_any(self)
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            while seq.next_element::<de::IgnoredAny>()?.is_some() {}

            Ok(String::new())
        }

        fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            while map
                .next_entry::<de::IgnoredAny, de::IgnoredAny>()?
                .is_some()
            {}

            Ok(String::new())
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LenientTextVisitor)
    }

    pub fn expense_id<'de, D>(deserializer: D) -> Result<ExpenseId, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize(deserializer).map(ExpenseId::new)
    }

    pub fn user_id<'de, D>(deserializer: D) -> Result<UserId, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize(deserializer).map(UserId::new)
    }
}
