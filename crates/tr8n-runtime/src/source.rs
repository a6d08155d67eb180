use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tr8n_core::{MessageTable, PluralCase};

use crate::error::RuntimeResult;

/// On-disk form of one locale's messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Messages in file order. Repeated identifiers are kept so that building
    /// the table reports them.
    #[serde(
        default,
        deserialize_with = "deserialize_message_entries",
        serialize_with = "serialize_message_entries"
    )]
    pub messages: Vec<(String, MessageSource)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageSource {
    Simple(String),
    Plural(Vec<PluralCaseSource>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluralCaseSource {
    pub min: u32,
    pub text: String,
}

impl CatalogSource {
    /// First message registered under `id`.
    pub fn message(&self, id: &str) -> Option<&MessageSource> {
        self.messages
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, message)| message)
    }

    pub fn to_table(&self) -> RuntimeResult<MessageTable> {
        let mut table: MessageTable = MessageTable::new();
        for (id, message) in &self.messages {
            match message {
                MessageSource::Simple(template) => {
                    table.add(id.as_str(), template.as_str())?;
                }
                MessageSource::Plural(cases) => {
                    let cases = cases
                        .iter()
                        .map(|case| PluralCase::new(case.min, case.text.as_str()));
                    table.add_plural(id.as_str(), cases)?;
                }
            }
        }
        Ok(table)
    }
}

fn deserialize_message_entries<'de, D>(
    deserializer: D,
) -> Result<Vec<(String, MessageSource)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, MessageSource)>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map of message identifiers to messages")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, MessageSource>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}

fn serialize_message_entries<S>(
    entries: &[(String, MessageSource)],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (id, message) in entries {
        map.serialize_entry(id, message)?;
    }
    map.end()
}
