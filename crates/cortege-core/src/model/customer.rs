use cortege_core_types::{CustomerId, Entity};

use crate::errors::DomainError;
use crate::model::{Address, PhoneNumber};

/// Longest accepted display name, in characters
pub const NAME_MAX: usize = 100;

/// Longest accepted email address, in characters
pub const EMAIL_MAX: usize = 254;

/// Customer - a person or family the business serves
///
/// The aggregate every other entity hangs off: cemeteries are owned by a
/// customer, schedules and visits reference one. Contact details (phone,
/// optional email) are PII and treated accordingly by the value objects.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: CustomerId,
    name: String,
    address: Address,
    phone: PhoneNumber,
    email: Option<String>,
}

impl Customer {
    /// Construct a validated customer
    ///
    /// # Errors
    ///
    /// Returns `EmptyName`/`NameTooLong` for name violations and
    /// `InvalidEmail` if a supplied email is blank, overlong, or has no
    /// user/host split.
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        address: Address,
        phone: PhoneNumber,
        email: Option<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName { entity: "customer" });
        }
        let len = name.chars().count();
        if len > NAME_MAX {
            return Err(DomainError::NameTooLong {
                entity: "customer",
                len,
                max: NAME_MAX,
            });
        }

        if let Some(email) = &email {
            let len = email.chars().count();
            if len == 0 {
                return Err(DomainError::InvalidEmail { reason: "empty" });
            }
            if len > EMAIL_MAX {
                return Err(DomainError::InvalidEmail { reason: "too long" });
            }
            match email.split_once('@') {
                Some((user, host)) if !user.is_empty() && !host.is_empty() => {}
                _ => {
                    return Err(DomainError::InvalidEmail {
                        reason: "missing user/host split",
                    })
                }
            }
        }

        Ok(Self {
            id,
            name,
            address,
            phone,
            email,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &CustomerId {
        &self.id
    }
}
