//! Client data model.
//!
//! Clients are created once and never updated. Every text field is validated
//! on construction so services and adapters can rely on the invariants below
//! without re-checking them.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Exact length, in characters, of a national identification number.
pub const PESEL_LENGTH: usize = 11;

/// Longest name, email or telephone accepted, in characters.
pub const MAX_TEXT_LENGTH: usize = 120;

/// Validation errors returned when building client values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientValidationError {
    /// First name was missing or blank.
    #[error("first name must not be empty")]
    EmptyFirstName,
    /// Last name was missing or blank.
    #[error("last name must not be empty")]
    EmptyLastName,
    /// Email did not look like `local@domain`.
    #[error("email must be a valid email address")]
    InvalidEmail,
    /// Pesel did not have exactly [`PESEL_LENGTH`] characters.
    #[error("pesel must be exactly {expected} characters long, got {actual}")]
    InvalidPeselLength { expected: usize, actual: usize },
    /// A text field exceeded [`MAX_TEXT_LENGTH`] characters.
    #[error("{field} must be at most {max} characters long, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

impl ClientValidationError {
    /// Name of the request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyFirstName => "firstName",
            Self::EmptyLastName => "lastName",
            Self::InvalidEmail => "email",
            Self::InvalidPeselLength { .. } => "pesel",
            Self::TooLong { field, .. } => field,
        }
    }

    /// Stable machine-readable code for the failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyFirstName | Self::EmptyLastName => "empty_field",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidPeselLength { .. } => "invalid_pesel_length",
            Self::TooLong { .. } => "too_long",
        }
    }
}

/// Surrogate identifier generated by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(i32);

impl ClientId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// National identification number, unique per client.
///
/// # Examples
/// ```
/// use booking::domain::Pesel;
///
/// assert!(Pesel::new("12345678901").is_ok());
/// assert!(Pesel::new("123").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pesel(String);

impl Pesel {
    /// Validate and construct a [`Pesel`].
    pub fn new(value: impl Into<String>) -> Result<Self, ClientValidationError> {
        let value = value.into();
        let actual = value.chars().count();
        if actual != PESEL_LENGTH {
            return Err(ClientValidationError::InvalidPeselLength {
                expected: PESEL_LENGTH,
                actual,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the identifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Pesel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Pesel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Pesel> for String {
    fn from(value: Pesel) -> Self {
        value.0
    }
}

impl TryFrom<String> for Pesel {
    type Error = ClientValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Exactly one `@` with something on both sides.
        let pattern = r"^[^@\s]+@[^@\s]+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(value: impl Into<String>) -> Result<Self, ClientValidationError> {
        let value = value.into();
        if !email_regex().is_match(&value) {
            return Err(ClientValidationError::InvalidEmail);
        }
        Ok(Self(value))
    }

    /// Borrow the address.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ClientValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Treat an empty optional string as absent.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.is_empty())
}

fn within_limit<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ClientValidationError> {
    let actual = value.chars().count();
    if actual > MAX_TEXT_LENGTH {
        return Err(ClientValidationError::TooLong {
            field,
            max: MAX_TEXT_LENGTH,
            actual,
        });
    }
    Ok(value)
}

/// Validated input for creating a client.
///
/// Empty `email` and `telephone` values are normalised to `None` so the store
/// never holds empty strings for optional columns. Any other email must be
/// well formed, and every text field is capped at [`MAX_TEXT_LENGTH`].
///
/// # Examples
/// ```
/// use booking::domain::NewClient;
///
/// let client = NewClient::try_from_parts("Ann", "Lee", Some(""), None, "12345678901")
///     .expect("valid client");
/// assert!(client.email().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    first_name: String,
    last_name: String,
    email: Option<EmailAddress>,
    telephone: Option<String>,
    pesel: Pesel,
}

impl NewClient {
    /// Validate raw request parts.
    pub fn try_from_parts(
        first_name: &str,
        last_name: &str,
        email: Option<&str>,
        telephone: Option<&str>,
        pesel: &str,
    ) -> Result<Self, ClientValidationError> {
        if first_name.trim().is_empty() {
            return Err(ClientValidationError::EmptyFirstName);
        }
        if last_name.trim().is_empty() {
            return Err(ClientValidationError::EmptyLastName);
        }
        let first_name = within_limit(first_name, "firstName")?;
        let last_name = within_limit(last_name, "lastName")?;
        let email = non_empty(email)
            .map(|raw| within_limit(raw, "email").and_then(EmailAddress::new))
            .transpose()?;
        let telephone = non_empty(telephone)
            .map(|raw| within_limit(raw, "telephone"))
            .transpose()?;
        let pesel = Pesel::new(pesel)?;

        Ok(Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email,
            telephone: telephone.map(str::to_owned),
            pesel,
        })
    }

    /// Client first name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Client last name.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Optional email address.
    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Optional telephone number, stored verbatim.
    pub fn telephone(&self) -> Option<&str> {
        self.telephone.as_deref()
    }

    /// National identification number.
    pub fn pesel(&self) -> &Pesel {
        &self.pesel
    }

    /// Attach the generated identifier once the store has accepted the row.
    pub fn into_client(self, id: ClientId) -> Client {
        Client {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            telephone: self.telephone,
            pesel: self.pesel,
        }
    }
}

/// Persisted client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    id: ClientId,
    first_name: String,
    last_name: String,
    email: Option<EmailAddress>,
    telephone: Option<String>,
    pesel: Pesel,
}

impl Client {
    /// Generated identifier.
    pub fn id(&self) -> ClientId {
        self.id
    }

    /// Client first name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Client last name.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Optional email address.
    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Optional telephone number.
    pub fn telephone(&self) -> Option<&str> {
        self.telephone.as_deref()
    }

    /// National identification number.
    pub fn pesel(&self) -> &Pesel {
        &self.pesel
    }
}
