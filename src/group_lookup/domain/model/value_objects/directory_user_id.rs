/// Opaque internal identifier assigned to a user by the directory service.
/// Treated as an uninterpreted string; the directory owns its format.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DirectoryUserId(String);

impl DirectoryUserId {
    pub fn new(value: &str) -> Result<Self, String> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err("directory user id must not be empty".to_string());
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
