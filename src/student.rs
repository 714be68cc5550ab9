//! Student: the concrete key type used by the specialized roster map.

/// A student identified by name, date of birth, and free-form details.
///
/// Equality and hashing derive from all three fields, which is the contract
/// every key must satisfy: equal students hash identically, and identity is
/// stable while stored (there are no mutators). Date of birth is a
/// (year, month, day) triple.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Student {
    name: String,
    date_of_birth: (u16, u8, u8),
    details: String,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        date_of_birth: (u16, u8, u8),
        details: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date_of_birth,
            details: details.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date_of_birth(&self) -> (u16, u8, u8) {
        self.date_of_birth
    }

    pub fn details(&self) -> &str {
        &self.details
    }
}
