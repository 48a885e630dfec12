use crate::commands::{CmdMessage, CmdResult, RevealedPassword};
use crate::error::{NotepassError, Result};
use crate::store::PasswordStore;

fn require_service(service: &str) -> Result<()> {
    if service.trim().is_empty() {
        return Err(NotepassError::BlankInput(
            "Service name cannot be empty.".to_string(),
        ));
    }
    Ok(())
}

fn not_found(service: &str) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::error(format!(
        "Password for '{}' not found.",
        service
    )))
}

/// Stores a password, replacing any earlier one for the same service.
pub fn add(store: &mut PasswordStore, service: &str, password: &str) -> Result<CmdResult> {
    if service.trim().is_empty() || password.trim().is_empty() {
        return Err(NotepassError::BlankInput(
            "Service and Password cannot be empty.".to_string(),
        ));
    }

    store.add_password(service, password)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Password for '{}' added successfully.",
        service
    ))))
}

pub fn get(store: &PasswordStore, service: &str) -> Result<CmdResult> {
    require_service(service)?;

    Ok(match store.get_password(service)? {
        Some(password) => CmdResult::default().with_revealed(RevealedPassword {
            service: service.to_string(),
            password,
        }),
        None => not_found(service),
    })
}

pub fn delete(store: &mut PasswordStore, service: &str) -> Result<CmdResult> {
    require_service(service)?;

    Ok(if store.delete_password(service) {
        CmdResult::default().with_message(CmdMessage::success(format!(
            "Password for '{}' deleted successfully.",
            service
        )))
    } else {
        not_found(service)
    })
}

/// Names of the services with a stored password. Passwords stay hidden.
pub fn services(store: &PasswordStore) -> CmdResult {
    let services: Vec<_> = store.services().into_iter().cloned().collect();
    if services.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("No passwords stored."));
    }
    CmdResult::default().with_services(services)
}
