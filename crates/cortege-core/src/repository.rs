//! Repository ports - abstract persistence for domain entities
//!
//! These traits define what the use cases need. How they are implemented
//! (the upstream REST service behind the HTTP adaptor, an in-memory
//! double in tests) is not this crate's concern. Implementations hydrate
//! response payloads on the way in and dehydrate entities on the way out,
//! so a use case only ever touches validated domain objects.

use cortege_core_types::{CemeteryId, CustomerId, ScheduleId, VisitId};

use crate::errors::RepositoryError;
use crate::model::{Cemetery, Customer, Schedule, Visit, VisitCriteria};

/// Customer repository port
pub trait CustomerRepository {
    /// Find a customer by id
    fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, RepositoryError>;

    /// List all customers
    fn list(&self) -> Result<Vec<Customer>, RepositoryError>;

    /// Save a customer (create or replace)
    fn save(&mut self, customer: &Customer) -> Result<(), RepositoryError>;

    /// Delete a customer
    fn delete(&mut self, id: &CustomerId) -> Result<(), RepositoryError>;

    /// Check whether a customer exists
    fn exists(&self, id: &CustomerId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id)?.is_some())
    }
}

/// Cemetery repository port
pub trait CemeteryRepository {
    /// Find a cemetery by id
    fn find_by_id(&self, id: &CemeteryId) -> Result<Option<Cemetery>, RepositoryError>;

    /// List the cemeteries owned by a customer
    fn list_by_customer(&self, customer: &CustomerId) -> Result<Vec<Cemetery>, RepositoryError>;

    /// Save a cemetery (create or replace)
    fn save(&mut self, cemetery: &Cemetery) -> Result<(), RepositoryError>;

    /// Delete a cemetery
    fn delete(&mut self, id: &CemeteryId) -> Result<(), RepositoryError>;
}

/// Schedule repository port
pub trait ScheduleRepository {
    /// Find a schedule by id
    fn find_by_id(&self, id: &ScheduleId) -> Result<Option<Schedule>, RepositoryError>;

    /// List the schedules of a customer
    fn list_by_customer(&self, customer: &CustomerId) -> Result<Vec<Schedule>, RepositoryError>;

    /// Save a schedule (create or replace)
    fn save(&mut self, schedule: &Schedule) -> Result<(), RepositoryError>;

    /// Delete a schedule
    fn delete(&mut self, id: &ScheduleId) -> Result<(), RepositoryError>;
}

/// Visit repository port
pub trait VisitRepository {
    /// Find a visit by id
    fn find_by_id(&self, id: &VisitId) -> Result<Option<Visit>, RepositoryError>;

    /// List visits matching validated criteria
    fn find_by(&self, criteria: &VisitCriteria) -> Result<Vec<Visit>, RepositoryError>;

    /// Save a visit (create or replace)
    fn save(&mut self, visit: &Visit) -> Result<(), RepositoryError>;

    /// Delete a visit
    fn delete(&mut self, id: &VisitId) -> Result<(), RepositoryError>;
}
