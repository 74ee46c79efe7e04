//! A person record whose fields cannot be modified in place.

/// A postal address slot attached to a [`Person`].
///
/// The slot is present on every person but hidden from serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    /// Street and house number.
    pub street: Option<String>,
    /// City name.
    pub city: Option<String>,
}

/// A person with read-only fields.
///
/// Fields are exposed through accessors only. To change a field, build a
/// [`PersonUpdate`] and call [`Person::update_info`], which returns a new
/// person and leaves the original as it was.
///
/// # Examples
///
/// ```rust
/// use lazyfn::record::{Person, PersonUpdate};
///
/// let person = Person::new("John", "Doe", 30, "john.doe@example.com");
/// let older = person.update_info(PersonUpdate::new().age(31));
///
/// assert_eq!(person.age(), 30);
/// assert_eq!(older.age(), 31);
/// assert_eq!(older.full_name(), "John Doe");
/// ```
///
/// Fields cannot be assigned directly:
///
/// ```compile_fail
/// use lazyfn::record::Person;
///
/// let mut person = Person::new("John", "Doe", 30, "john.doe@example.com");
/// person.age = 99;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Person {
    first_name: String,
    last_name: String,
    age: u32,
    email: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    address: Address,
}

impl Person {
    /// Creates a person with an empty address slot.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            email: email.into(),
            address: Address::default(),
        }
    }

    /// Returns the first name.
    #[inline]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    #[inline]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the age in years.
    #[inline]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Returns the e-mail address.
    #[inline]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the hidden address slot.
    #[inline]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the first and last name separated by a single space.
    pub fn full_name(&self) -> String {
        join_with_space(&self.first_name)(&self.last_name)
    }

    /// Returns a copy of this person with every field set in `update` replaced.
    pub fn update_info(&self, update: PersonUpdate) -> Self {
        let PersonUpdate {
            first_name,
            last_name,
            age,
            email,
        } = update;
        Self {
            first_name: first_name.unwrap_or_else(|| self.first_name.clone()),
            last_name: last_name.unwrap_or_else(|| self.last_name.clone()),
            age: age.unwrap_or(self.age),
            email: email.unwrap_or_else(|| self.email.clone()),
            address: self.address.clone(),
        }
    }
}

fn join_with_space(first: &str) -> impl Fn(&str) -> String + '_ {
    move |second: &str| format!("{first} {second}")
}

/// The set of fields to replace in [`Person::update_info`].
///
/// Fields left unset keep the original person's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct PersonUpdate {
    first_name: Option<String>,
    last_name: Option<String>,
    age: Option<u32>,
    email: Option<String>,
}

impl PersonUpdate {
    /// Creates an update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the first name.
    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Replaces the last name.
    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Replaces the age.
    #[must_use]
    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Replaces the e-mail address.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Returns `true` if no field would be replaced.
    pub const fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.age.is_none()
            && self.email.is_none()
    }
}
