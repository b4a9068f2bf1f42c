use serde_json::{Map, Value};

/// One group the user is a member of, as returned by the directory. Only the
/// display name is consumed downstream; the remaining attributes are carried
/// through opaquely.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupMembership {
    display_name: Option<String>,
    attributes: Map<String, Value>,
}

impl GroupMembership {
    pub fn from_attributes(attributes: Map<String, Value>) -> Self {
        let display_name = attributes
            .get("displayName")
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            display_name,
            attributes,
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }
}
