//! Customer repository contract and flat-file implementation.
//!
//! # Invariants
//! - `create` and `delete` match on the serialized line prefix `"<name> |"`.
//! - `modify` and `get` match on the decoded `name` field.
//! - `list` returns the line form `name | email | phone`.

use crate::codec::to_line;
use crate::model::customer::{Customer, CustomerPatch};
use crate::model::EntityKind;
use crate::repo::flat_file::FlatFile;
use crate::repo::{Outcome, RepoResult, Transition};
use std::path::{Path, PathBuf};

/// Repository interface for customer CRUD operations.
pub trait CustomerRepository {
    fn create_customer(&self, customer: &Customer) -> RepoResult<Outcome>;
    fn modify_customer(&self, name: &str, patch: &CustomerPatch) -> RepoResult<Outcome>;
    fn delete_customer(&self, name: &str) -> RepoResult<Outcome>;
    fn get_customer(&self, name: &str) -> Option<Customer>;
    /// Lists customers as stored lines, in file order.
    fn list_customers(&self) -> Vec<String>;
    fn list_customer_records(&self) -> Vec<Customer>;
}

/// Customer repository backed by `customers.txt` (or any injected path).
pub struct FileCustomerRepository {
    file: FlatFile<Customer>,
}

impl FileCustomerRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: FlatFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl CustomerRepository for FileCustomerRepository {
    fn create_customer(&self, customer: &Customer) -> RepoResult<Outcome> {
        customer.validate()?;
        self.file
            .apply("create", |customers| plan_create(customers, customer))
    }

    fn modify_customer(&self, name: &str, patch: &CustomerPatch) -> RepoResult<Outcome> {
        patch.validate()?;
        self.file
            .apply("modify", |customers| plan_modify(customers, name, patch))
    }

    fn delete_customer(&self, name: &str) -> RepoResult<Outcome> {
        self.file
            .apply("delete", |customers| plan_delete(customers, name))
    }

    fn get_customer(&self, name: &str) -> Option<Customer> {
        self.file
            .snapshot()
            .into_iter()
            .find(|customer| customer.name == name)
    }

    fn list_customers(&self) -> Vec<String> {
        self.file.snapshot().iter().map(to_line).collect()
    }

    fn list_customer_records(&self) -> Vec<Customer> {
        self.file.snapshot()
    }
}

/// Prefix match on the stored line form.
///
/// Kept separate from the decoded-name match used by `modify`: the two only
/// disagree when `name` itself contains `" |"`.
fn line_has_name(customer: &Customer, name: &str) -> bool {
    to_line(customer).starts_with(&format!("{name} |"))
}

fn plan_create(mut customers: Vec<Customer>, customer: &Customer) -> Transition<Customer> {
    if customers
        .iter()
        .any(|existing| line_has_name(existing, &customer.name))
    {
        return Transition::unchanged(Outcome::AlreadyExists(EntityKind::Customer));
    }
    customers.push(customer.clone());
    Transition::changed(Outcome::Created(EntityKind::Customer), customers)
}

fn plan_modify(
    mut customers: Vec<Customer>,
    name: &str,
    patch: &CustomerPatch,
) -> Transition<Customer> {
    let mut found = false;
    for customer in customers.iter_mut().filter(|customer| customer.name == name) {
        patch.apply_to(customer);
        found = true;
    }

    if !found {
        return Transition::unchanged(Outcome::NotFound(EntityKind::Customer));
    }
    Transition::changed(Outcome::Modified(EntityKind::Customer), customers)
}

fn plan_delete(customers: Vec<Customer>, name: &str) -> Transition<Customer> {
    let before = customers.len();
    let remaining: Vec<Customer> = customers
        .into_iter()
        .filter(|customer| !line_has_name(customer, name))
        .collect();

    if remaining.len() == before {
        return Transition::unchanged(Outcome::NotFound(EntityKind::Customer));
    }
    Transition::changed(Outcome::Deleted(EntityKind::Customer), remaining)
}
