use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

use crate::company::Company;
use crate::employee::Employee;

/// Errors raised by [`SharedCompany`].
#[derive(Debug, Error)]
pub enum CompanyError {
    #[error("company lock poisoned by a panicking holder")]
    Poisoned,
}

/// Cloneable handle that serializes access to a [`Company`] behind a mutex.
///
/// Every operation takes the lock for its whole duration, so a bulk raise is
/// never interleaved with an insertion.
#[derive(Debug, Clone)]
pub struct SharedCompany {
    inner: Arc<Mutex<Company>>,
}

impl SharedCompany {
    pub fn new(company: Company) -> Self {
        Self {
            inner: Arc::new(Mutex::new(company)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Company>, CompanyError> {
        self.inner.lock().map_err(|_| CompanyError::Poisoned)
    }

    pub fn add_employee(&self, employee: Employee) -> Result<(), CompanyError> {
        self.lock()?.add_employee(employee);
        Ok(())
    }

    pub fn number_of_employees(&self) -> Result<usize, CompanyError> {
        Ok(self.lock()?.number_of_employees())
    }

    pub fn everybody_gets_raise_by(&self, fraction: f64) -> Result<(), CompanyError> {
        self.lock()?.everybody_gets_raise_by(fraction);
        Ok(())
    }

    pub fn rename(&self, name: impl Into<String>) -> Result<(), CompanyError> {
        self.lock()?.set_name(name);
        Ok(())
    }

    /// Runs `f` against the first employee with `id` while holding the lock.
    ///
    /// Returns `Ok(None)` when no employee matches.
    pub fn with_employee_mut<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Employee) -> R,
    ) -> Result<Option<R>, CompanyError> {
        let mut company = self.lock()?;
        Ok(company.find_employee_by_id_mut(id).map(f))
    }

    /// Returns a copy of the company as it is right now.
    pub fn snapshot(&self) -> Result<Company, CompanyError> {
        Ok(self.lock()?.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_additions_are_all_recorded() {
        let shared = SharedCompany::new(Company::new("Megadyne, Inc."));

        let handles: Vec<_> = (0..8)
            .map(|index| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared
                        .add_employee(Employee::new(index.to_string(), "Worker", 1_000.0))
                        .expect("lock available");
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker thread panicked");
        }

        assert_eq!(shared.number_of_employees().unwrap(), 8);
    }

    #[test]
    fn mutation_through_handle_is_visible_in_snapshot() {
        let shared = SharedCompany::new(Company::new("Megadyne, Inc."));
        shared
            .add_employee(Employee::new("123", "Dave", 100_000.00))
            .unwrap();

        let renamed = shared
            .with_employee_mut("123", |employee| employee.set_name("Tommy Lee"))
            .unwrap();
        assert!(renamed.is_some());

        let missing = shared
            .with_employee_mut("999", |employee| employee.set_name("Nobody"))
            .unwrap();
        assert!(missing.is_none());

        shared.everybody_gets_raise_by(0.1).unwrap();
        shared.rename("Cybertron Unlimited, Ltd.").unwrap();

        let snapshot = shared.snapshot().unwrap();
        assert_eq!(snapshot.name(), "Cybertron Unlimited, Ltd.");
        let dave = snapshot.find_employee_by_id("123").expect("dave exists");
        assert_eq!(dave.name(), "Tommy Lee");
        assert!((dave.salary() - 110_000.00).abs() < 0.001);
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let shared = SharedCompany::new(Company::new("Megadyne, Inc."));
        let poisoner = shared.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.lock().unwrap();
            panic!("poison the company lock");
        })
        .join();

        let err = shared.number_of_employees().expect_err("lock is poisoned");
        assert!(matches!(err, CompanyError::Poisoned));
    }
}
