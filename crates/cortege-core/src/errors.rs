use cortege_core_types::InvalidIdentifier;
use thiserror::Error;

/// Result type alias using HydrationError
pub type Result<T> = std::result::Result<T, HydrationError>;

/// Payload shape and field-constraint violations
///
/// Raised when an untrusted payload does not match the declared schema, or
/// when a wire-format value (date string, enum token, map key) cannot be
/// decoded during hydration. The first violation encountered aborts the
/// operation; co-occurring violations are not aggregated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// Payload root is not a JSON object
    #[error("{entity}: payload is not a JSON object")]
    NotAnObject { entity: &'static str },

    /// Payload root is not a JSON array (bulk reads)
    #[error("{entity}: payload is not a JSON array")]
    NotAnArray { entity: &'static str },

    /// A required field is absent or null
    #[error("{entity}: required field missing: {field}")]
    MissingField { entity: &'static str, field: String },

    /// A field holds a value of the wrong JSON type
    #[error("{entity}.{field}: expected {expected}")]
    TypeMismatch {
        entity: &'static str,
        field: String,
        expected: &'static str,
    },

    /// A text field violates its length bounds
    #[error("{entity}.{field}: length {len} outside {min}..={max}")]
    LengthOutOfRange {
        entity: &'static str,
        field: String,
        len: usize,
        min: usize,
        max: usize,
    },

    /// A field holds a value outside the declared enumeration
    #[error("{entity}.{field}: {value:?} is not one of {allowed:?}")]
    NotInEnum {
        entity: &'static str,
        field: String,
        value: String,
        allowed: &'static [&'static str],
    },

    /// A field does not match its declared wire format (uuid, date, date-time)
    #[error("{entity}.{field}: {value:?} is not a valid {expected}")]
    BadFormat {
        entity: &'static str,
        field: String,
        expected: &'static str,
        value: String,
    },

    /// A date-only wire value could not be parsed (combinator level)
    #[error("invalid ISO date: {value:?}")]
    InvalidDate { value: String },

    /// A date-time wire value could not be parsed (combinator level)
    #[error("invalid RFC 3339 date-time: {value:?}")]
    InvalidDateTime { value: String },

    /// An enum wire token is unknown (combinator level)
    #[error("{value:?} is not one of {allowed:?}")]
    UnknownVariant {
        value: String,
        allowed: &'static [&'static str],
    },

    /// Two wire keys of a map decoded to the same domain key
    #[error("map key collision on {key:?}")]
    DuplicateKey { key: String },

    /// A structured map key could not be decoded
    #[error("malformed map key: {raw:?}")]
    MalformedKey { raw: String },

    /// Raw response text is not valid JSON
    #[error("payload is not valid JSON: {detail}")]
    MalformedJson { detail: String },
}

impl SchemaError {
    /// Get the stable error code for this violation
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::NotAnObject { .. } => "ERR_NOT_AN_OBJECT",
            SchemaError::NotAnArray { .. } => "ERR_NOT_AN_ARRAY",
            SchemaError::MissingField { .. } => "ERR_MISSING_FIELD",
            SchemaError::TypeMismatch { .. } => "ERR_TYPE_MISMATCH",
            SchemaError::LengthOutOfRange { .. } => "ERR_LENGTH_OUT_OF_RANGE",
            SchemaError::NotInEnum { .. } => "ERR_NOT_IN_ENUM",
            SchemaError::BadFormat { .. } => "ERR_BAD_FORMAT",
            SchemaError::InvalidDate { .. } => "ERR_INVALID_DATE",
            SchemaError::InvalidDateTime { .. } => "ERR_INVALID_DATE_TIME",
            SchemaError::UnknownVariant { .. } => "ERR_UNKNOWN_VARIANT",
            SchemaError::DuplicateKey { .. } => "ERR_DUPLICATE_KEY",
            SchemaError::MalformedKey { .. } => "ERR_MALFORMED_KEY",
            SchemaError::MalformedJson { .. } => "ERR_MALFORMED_JSON",
        }
    }
}

/// Business-invariant violations raised by entity and value-object
/// constructors
///
/// A payload can pass schema validation and still fail here: the schema
/// checks shape, the constructor checks meaning. These errors propagate
/// unmodified to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// An identifier string is not a canonical UUID
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifier),

    /// A display name is empty
    #[error("{entity}: name must not be empty")]
    EmptyName { entity: &'static str },

    /// A display name exceeds its bound
    #[error("{entity}: name length {len} exceeds {max}")]
    NameTooLong {
        entity: &'static str,
        len: usize,
        max: usize,
    },

    /// An address component is empty
    #[error("address: {field} must not be empty")]
    EmptyAddressLine { field: &'static str },

    /// A postal code is not digits-and-dashes of plausible length
    #[error("address: invalid postal code {value:?}")]
    InvalidPostalCode { value: String },

    /// A phone number fails format validation (raw value withheld: PII)
    #[error("invalid phone number: {reason}")]
    InvalidPhoneNumber { reason: &'static str },

    /// An email address fails format validation (raw value withheld: PII)
    #[error("invalid email address: {reason}")]
    InvalidEmail { reason: &'static str },

    /// A visit note exceeds its bound
    #[error("visit: note length {len} exceeds {max}")]
    NoteTooLong { len: usize, max: usize },

    /// A schedule was constructed with no participants
    #[error("schedule {schedule_id}: participants must not be empty")]
    EmptyParticipants { schedule_id: String },

    /// A schedule with a contract result is missing its contact phone
    #[error("schedule {schedule_id}: a contract result requires a phone number")]
    ContractRequiresPhone { schedule_id: String },

    /// A criteria date range runs backwards
    #[error("criteria: range start {from} is after end {to}")]
    InvalidDateRange {
        from: chrono::DateTime<chrono::Utc>,
        to: chrono::DateTime<chrono::Utc>,
    },
}

impl DomainError {
    /// Get the stable error code for this violation
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidIdentifier(_) => "ERR_INVALID_IDENTIFIER",
            DomainError::EmptyName { .. } => "ERR_EMPTY_NAME",
            DomainError::NameTooLong { .. } => "ERR_NAME_TOO_LONG",
            DomainError::EmptyAddressLine { .. } => "ERR_EMPTY_ADDRESS_LINE",
            DomainError::InvalidPostalCode { .. } => "ERR_INVALID_POSTAL_CODE",
            DomainError::InvalidPhoneNumber { .. } => "ERR_INVALID_PHONE_NUMBER",
            DomainError::InvalidEmail { .. } => "ERR_INVALID_EMAIL",
            DomainError::NoteTooLong { .. } => "ERR_NOTE_TOO_LONG",
            DomainError::EmptyParticipants { .. } => "ERR_EMPTY_PARTICIPANTS",
            DomainError::ContractRequiresPhone { .. } => "ERR_CONTRACT_REQUIRES_PHONE",
            DomainError::InvalidDateRange { .. } => "ERR_INVALID_DATE_RANGE",
        }
    }
}

/// The public error of every hydration operation
///
/// Two independent failure layers (schema shape vs domain invariant) plus
/// the write-side serialization failure of the wire boundary. Never
/// aggregated, never retried here — callers decide what to surface.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HydrationError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Dehydrated payload could not be serialized to body text
    #[error("payload serialization failed: {detail}")]
    Serialization { detail: String },
}

impl HydrationError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            HydrationError::Schema(e) => e.code(),
            HydrationError::Domain(e) => e.code(),
            HydrationError::Serialization { .. } => "ERR_SERIALIZATION",
        }
    }
}

impl From<InvalidIdentifier> for HydrationError {
    fn from(err: InvalidIdentifier) -> Self {
        HydrationError::Domain(DomainError::from(err))
    }
}

/// Errors surfaced by repository ports
///
/// The HTTP adaptor implementing a repository maps upstream status codes
/// into these variants; the domain core itself never constructs `Upstream`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepositoryError {
    /// The requested entity does not exist upstream
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The entity already exists or was concurrently modified
    #[error("{entity} conflict: {id}")]
    Conflict { entity: &'static str, id: String },

    /// The upstream service failed in a way the adaptor could not recover
    #[error("upstream error: {message}")]
    Upstream { message: String },

    /// A response payload failed hydration on the way in
    #[error(transparent)]
    Hydration(#[from] HydrationError),
}

impl RepositoryError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            RepositoryError::NotFound { .. } => "ERR_NOT_FOUND",
            RepositoryError::Conflict { .. } => "ERR_CONFLICT",
            RepositoryError::Upstream { .. } => "ERR_UPSTREAM",
            RepositoryError::Hydration(e) => e.code(),
        }
    }
}
